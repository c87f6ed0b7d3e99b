//! Dependency installation for a copied item
//!
//! Planning is synchronous and side-effect free; running the plan spawns the
//! package manager through `sh -c` and waits for it.

use super::command::make_install_command;
use super::manager::{identify_package_manager, PackageManager};
use super::reconcile::compare_dependencies;
use crate::fs;
use crate::scopes::ScopeItem;
use anyhow::{Context, Result};
use colored::Colorize;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command as TokioCommand;

/// A ready-to-run install command and where to run it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallPlan {
    pub manager: PackageManager,
    pub command: String,
    /// The destination if it is a directory, else its parent
    pub working_dir: PathBuf,
}

/// Work out what an item still needs installed in the project around `destination`
///
/// `None` means nothing to do: no host manifest or manager was found, the item
/// has no manifest, or every declared dependency is already satisfied.
pub fn plan_install(item: &ScopeItem, destination: &Path) -> Option<InstallPlan> {
    let (manager, host) = identify_package_manager(destination)?;
    let package = item.package.as_ref()?;

    let deps = compare_dependencies(package.dependencies.as_ref(), host.dependencies.as_ref());
    let dev_deps = compare_dependencies(
        package.dev_dependencies.as_ref(),
        host.dev_dependencies.as_ref(),
    );

    let command = make_install_command(manager, deps.as_ref(), dev_deps.as_ref())?;
    let working_dir = working_dir(destination).ok()?;

    Some(InstallPlan {
        manager,
        command,
        working_dir,
    })
}

fn working_dir(destination: &Path) -> std::io::Result<PathBuf> {
    let resolved = fs::resolve(destination)?;
    if resolved.is_dir() {
        return Ok(resolved);
    }
    Ok(resolved
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or(resolved))
}

/// Run an install plan and wait for it, echoing its output indented
pub async fn run_install(plan: &InstallPlan) -> Result<()> {
    println!();
    println!("{} {}", "Running:".dimmed(), plan.command.yellow());
    println!();

    let output = TokioCommand::new("sh")
        .arg("-c")
        .arg(&plan.command)
        .current_dir(&plan.working_dir)
        .stdin(Stdio::null())
        .output()
        .await
        .with_context(|| format!("Failed to run {}", plan.manager))?;

    for line in String::from_utf8_lossy(&output.stdout).lines() {
        println!("  {}", line);
    }
    for line in String::from_utf8_lossy(&output.stderr).lines() {
        eprintln!("  {}", line.yellow());
    }

    if !output.status.success() {
        anyhow::bail!(
            "Installation failed with exit code: {}\n\
             Please try installing manually in {}:\n{}",
            output.status.code().unwrap_or(-1),
            plan.working_dir.display(),
            plan.command
        );
    }

    Ok(())
}
