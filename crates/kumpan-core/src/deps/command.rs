//! Install command synthesis

use super::manager::PackageManager;
use crate::scopes::DependencyMap;

/// Build the shell command installing `deps` and `dev_deps`
///
/// Returns `None` when there is nothing to install. Regular and dev dependencies
/// become separate sub-commands joined with `&&`.
pub fn make_install_command(
    manager: PackageManager,
    deps: Option<&DependencyMap>,
    dev_deps: Option<&DependencyMap>,
) -> Option<String> {
    let mut commands = Vec::new();

    if let Some(packages) = deps.filter(|d| !d.is_empty()) {
        commands.push(format!(
            "{} {} {}",
            manager.command(),
            manager.install_verb(),
            package_specs(packages)
        ));
    }

    if let Some(packages) = dev_deps.filter(|d| !d.is_empty()) {
        commands.push(format!(
            "{} {} {} {}",
            manager.command(),
            manager.install_verb(),
            manager.dev_flag(),
            package_specs(packages)
        ));
    }

    if commands.is_empty() {
        None
    } else {
        Some(commands.join(" && "))
    }
}

/// `name@range` tokens, space-separated
fn package_specs(packages: &DependencyMap) -> String {
    packages
        .iter()
        .map(|(name, range)| format!("{}@{}", name, range))
        .collect::<Vec<_>>()
        .join(" ")
}
