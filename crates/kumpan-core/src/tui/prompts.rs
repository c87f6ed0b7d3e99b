//! Charm-style CLI flows for adding items and managing completions

use crate::error::CopyError;
use crate::product::ProductConfig;
use crate::scopes::{copier, CopyReport, Scope, ScopeItem};
use crate::{completion, deps, ui};
use anyhow::Result;
use std::path::{Path, PathBuf};

/// Arguments for adding an item from a scope
#[derive(Debug, Clone, Default)]
pub struct AddArgs {
    /// Item name within the scope
    pub item: Option<String>,

    /// Destination file or directory
    pub path: Option<PathBuf>,

    /// Only list the scope's items
    pub list: bool,

    /// Auto-confirm the dependency install prompt
    pub yes: bool,

    /// Copy only, never offer dependency installation
    pub no_install: bool,
}

/// Restores the terminal cursor when an interactive flow ends, however it ends
struct CursorGuard;

impl Drop for CursorGuard {
    fn drop(&mut self) {
        let _ = console::Term::stderr().show_cursor();
    }
}

/// Copy an item from `scope` and offer to install its missing dependencies
pub async fn run_add<C: ProductConfig>(config: &C, scope: &Scope, args: AddArgs) -> Result<()> {
    if args.list {
        ui::print_available_items(scope);
        return Ok(());
    }

    let item = args.item.as_deref().and_then(|name| scope.find_item(name));
    let (Some(item), Some(destination)) = (item, args.path.as_deref()) else {
        ui::print_error(&format!(
            "{} {} not found",
            scope.name,
            args.item.as_deref().unwrap_or_default()
        ));
        return Ok(());
    };

    let _cursor = CursorGuard;
    cliclack::intro(config.display_name())?;

    match copier::copy_item(item, destination) {
        Ok(report) => log_copy_report(&report)?,
        Err(e @ CopyError::NoFiles { .. }) => {
            cliclack::log::error(e.to_string())?;
            cliclack::outro(format!("Nothing copied for {} {}", scope.name, item.name))?;
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    }

    if !args.no_install {
        install_dependencies(item, destination, args.yes).await?;
    }

    cliclack::outro(format!("Added {} {}", scope.name, item.name))?;
    Ok(())
}

fn log_copy_report(report: &CopyReport) -> Result<()> {
    for path in &report.copied {
        cliclack::log::success(format!("Created {}", path.display()))?;
    }
    for path in &report.skipped {
        cliclack::log::warning(format!("File already exists. Skipping {}", path.display()))?;
    }
    Ok(())
}

async fn install_dependencies(item: &ScopeItem, destination: &Path, yes: bool) -> Result<()> {
    let Some(plan) = deps::plan_install(item, destination) else {
        return Ok(());
    };

    cliclack::log::info(format!(
        "Installing dependencies. The following command will be executed:\n\n\
         Directory: {}\n\
         Command:   {}",
        plan.working_dir.display(),
        plan.command
    ))?;

    let confirm = if yes {
        true
    } else {
        cliclack::confirm("Continue?").initial_value(true).interact()?
    };

    if !confirm {
        cliclack::log::info(format!("Skipped. Run it later with: {}", plan.command))?;
        return Ok(());
    }

    match deps::run_install(&plan).await {
        Ok(()) => cliclack::log::success(format!("Installed with {}", plan.manager))?,
        Err(e) => cliclack::log::error(format!("{}", e))?,
    }

    Ok(())
}

/// Generate and install the zsh completion script after confirmation
pub fn run_completion_install<C: ProductConfig>(
    config: &C,
    cmd: &mut clap::Command,
    yes: bool,
) -> Result<()> {
    let path = completion::completion_path(config)?;
    if path.exists() {
        ui::print_warning("Already installed");
        return Ok(());
    }

    let _cursor = CursorGuard;
    cliclack::intro(format!("{} completion", config.display_name()))?;
    cliclack::log::info(format!(
        "The following file will be created:\n{}",
        path.display()
    ))?;

    let confirm = if yes {
        true
    } else {
        cliclack::confirm("Proceed?").initial_value(true).interact()?
    };

    if !confirm {
        cliclack::outro("Completion not installed")?;
        return Ok(());
    }

    let script = completion::render_zsh(cmd)?;
    completion::install_script(&path, &script)?;

    cliclack::log::success(format!("Wrote {}", path.display()))?;
    cliclack::log::remark(format!(
        "Add this to your .zshrc and restart your terminal\n\n{}\n\nOr run `{} completion --zshrc >> ~/.zshrc`",
        completion::rc_snippet(config, &path),
        config.name()
    ))?;
    cliclack::outro("Happy coding!")?;

    Ok(())
}

/// Remove the installed completion script after confirmation (defaults to no)
pub fn run_completion_uninstall<C: ProductConfig>(config: &C, yes: bool) -> Result<()> {
    let path = completion::completion_path(config)?;
    if !path.exists() {
        ui::print_warning("Completer is not installed");
        return Ok(());
    }

    let _cursor = CursorGuard;
    cliclack::intro(format!("{} completion", config.display_name()))?;
    cliclack::log::info(format!(
        "The following file will be deleted:\n{}",
        path.display()
    ))?;

    let confirm = if yes {
        true
    } else {
        cliclack::confirm("Proceed?").initial_value(false).interact()?
    };

    if confirm {
        completion::uninstall_script(&path)?;
        cliclack::outro("Completion removed")?;
    } else {
        cliclack::outro("Completion kept")?;
    }

    Ok(())
}
