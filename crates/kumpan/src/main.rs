//! kumpan CLI - Copy reusable components and hooks into your project

use anyhow::Result;
use clap::builder::PossibleValuesParser;
use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use kumpan_core::tui::AddArgs;
use kumpan_core::{ui, ProductConfig, Scope};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// kumpan product configuration
#[derive(Clone)]
pub struct KumpanConfig;

impl ProductConfig for KumpanConfig {
    fn name(&self) -> &'static str {
        "kumpan"
    }

    fn display_name(&self) -> &'static str {
        "kumpan"
    }

    fn cli_description(&self) -> &'static str {
        "CLI for copying reusable components and hooks into your project"
    }

    fn scopes_dir_env(&self) -> &'static str {
        "KUMPAN_SCOPES_DIR"
    }

    fn bundled_scopes_dir(&self) -> Option<&'static Path> {
        Some(Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/../../scopes")))
    }
}

#[derive(Parser, Debug)]
#[command(name = "kumpan")]
#[command(about = "CLI for copying reusable components and hooks into your project")]
#[command(version)]
pub struct Args {
    /// Catalog directory to read scopes from
    #[arg(long = "scopes-dir", global = true)]
    pub scopes_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List available scopes, or the items of one scope
    List(ListArgs),
    /// Copy an item into your project
    Add(CliAddArgs),
    /// Install/Uninstall tab completions
    Completion(CompletionArgs),
}

#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Scope to list items of
    #[arg(index = 1)]
    pub scope: Option<String>,
}

#[derive(Parser, Debug)]
pub struct CliAddArgs {
    /// Scope of the item (e.g. component, hook)
    #[arg(index = 1)]
    pub scope: String,

    /// Item to copy
    #[arg(index = 2)]
    pub item: Option<String>,

    /// Destination directory, or file path to copy a single file under a new name
    #[arg(index = 3)]
    pub path: Option<PathBuf>,

    /// List available items of the scope
    #[arg(short, long)]
    pub list: bool,

    /// Auto-confirm the dependency install prompt
    #[arg(short, long)]
    pub yes: bool,

    /// Only copy files, skip dependency installation
    #[arg(long = "no-install")]
    pub no_install: bool,
}

impl From<CliAddArgs> for AddArgs {
    fn from(args: CliAddArgs) -> Self {
        AddArgs {
            item: args.item,
            path: args.path,
            list: args.list,
            yes: args.yes,
            no_install: args.no_install,
        }
    }
}

#[derive(Parser, Debug)]
pub struct CompletionArgs {
    /// Print the install root
    #[arg(long)]
    pub root: bool,

    /// Print the .zshrc snippet that loads the completion script
    #[arg(long)]
    pub zshrc: bool,

    #[command(subcommand)]
    pub action: Option<CompletionAction>,
}

#[derive(Subcommand, Debug)]
pub enum CompletionAction {
    /// Install tab completion
    Install {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Uninstall tab completion
    Uninstall {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

/// Build the command with the catalog's scopes as argument choices
///
/// `mut_arg` moves the argument to the end of the list, so every positional
/// carries an explicit index.
fn build_cli(scopes: &[Scope]) -> clap::Command {
    let plural: Vec<String> = scopes.iter().map(Scope::dir_name).collect();
    let singular: Vec<String> = scopes.iter().map(|s| s.name.clone()).collect();
    let help = format!("Available scopes:\n  {}", plural.join(", "));

    Args::command()
        .after_help(help.clone())
        .mut_subcommand("list", |list| {
            list.mut_arg("scope", |arg| {
                arg.value_parser(PossibleValuesParser::new(plural.clone()))
            })
            .after_help(help)
        })
        .mut_subcommand("add", |add| {
            add.mut_arg("scope", |arg| {
                arg.value_parser(PossibleValuesParser::new(singular.clone()))
            })
        })
}

/// Parser for a catalog that may have failed to load
///
/// Without a catalog, scope arguments are left unchecked so `--help`, `--version`
/// and `completion` still work; commands that need the catalog report its error.
fn cli_for(catalog: &Result<Vec<Scope>>) -> clap::Command {
    match catalog {
        Ok(scopes) => build_cli(scopes),
        Err(_) => Args::command(),
    }
}

fn load_catalog(config: &KumpanConfig, raw_args: &[OsString]) -> Result<Vec<Scope>> {
    let scopes_dir = kumpan_core::config::scopes_dir(config, scopes_dir_arg(raw_args).as_deref())?;
    kumpan_core::read_scopes(&scopes_dir)
}

/// `--scopes-dir` must be known before the scope-aware parser can be built
fn scopes_dir_arg(args: &[OsString]) -> Option<PathBuf> {
    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        let arg = arg.to_string_lossy();
        if arg == "--" {
            break;
        }
        if arg == "--scopes-dir" {
            return iter.next().map(PathBuf::from);
        }
        if let Some(value) = arg.strip_prefix("--scopes-dir=") {
            return Some(PathBuf::from(value));
        }
    }
    None
}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let config = KumpanConfig;
    let raw_args: Vec<OsString> = std::env::args_os().collect();
    let catalog = load_catalog(&config, &raw_args);

    let matches = cli_for(&catalog).get_matches_from(&raw_args);
    let args = Args::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    match args.command {
        Some(Command::List(list_args)) => {
            let scopes = catalog?;
            match list_args
                .scope
                .as_deref()
                .and_then(|name| scopes.iter().find(|s| s.is_named(name)))
            {
                Some(scope) => ui::print_available_items(scope),
                None => ui::print_available_scopes(&scopes),
            }
            Ok(())
        }
        Some(Command::Add(add_args)) => {
            let scopes = catalog?;
            let Some(scope) = scopes.iter().find(|s| s.is_named(&add_args.scope)) else {
                ui::print_error(&format!("Scope {} not found", add_args.scope));
                return Ok(());
            };
            kumpan_core::tui::run_add(&config, scope, add_args.into()).await
        }
        Some(Command::Completion(completion_args)) => {
            run_completion(&config, catalog.as_deref().unwrap_or_default(), completion_args)
        }
        None => {
            // No subcommand provided, show what the catalog offers
            ui::print_available_scopes(&catalog?);
            Ok(())
        }
    }
}

fn run_completion(config: &KumpanConfig, scopes: &[Scope], args: CompletionArgs) -> Result<()> {
    match args.action {
        Some(CompletionAction::Install { yes }) => {
            kumpan_core::tui::run_completion_install(config, &mut build_cli(scopes), yes)
        }
        Some(CompletionAction::Uninstall { yes }) => {
            kumpan_core::tui::run_completion_uninstall(config, yes)
        }
        None if args.root => {
            println!("{}", kumpan_core::config::install_root()?.display());
            Ok(())
        }
        None if args.zshrc => {
            let path = kumpan_core::completion::completion_path(config)?;
            println!("{}", kumpan_core::completion::rc_snippet(config, &path));
            Ok(())
        }
        None => {
            let mut cmd = build_cli(scopes);
            if let Some(completion) = cmd.find_subcommand_mut("completion") {
                completion.print_help()?;
            }
            Ok(())
        }
    }
}
