//! Path resolution for the scopes catalog and the per-user config directory

use crate::product::ProductConfig;
use anyhow::{Context, Result};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Directory the binary is installed under: the parent of the executable's directory
pub fn install_root() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("Failed to infer executable path")?;
    exe.parent()
        .and_then(Path::parent)
        .map(Path::to_path_buf)
        .with_context(|| format!("Executable has no install root: {}", exe.display()))
}

/// Resolve the scopes directory
///
/// Precedence: explicit flag, then the product's env var, then `<install root>/scopes`
/// if it exists, then the catalog bundled with the sources.
pub fn scopes_dir<C: ProductConfig>(config: &C, flag: Option<&Path>) -> Result<PathBuf> {
    let env_value = std::env::var_os(config.scopes_dir_env());
    let root = install_root().ok();

    select_scopes_dir(flag, env_value, root.as_deref(), config.bundled_scopes_dir())
        .with_context(|| {
            format!(
                "No scopes directory found. Pass --scopes-dir or set {}",
                config.scopes_dir_env()
            )
        })
}

fn select_scopes_dir(
    flag: Option<&Path>,
    env_value: Option<OsString>,
    install_root: Option<&Path>,
    bundled: Option<&Path>,
) -> Option<PathBuf> {
    if let Some(dir) = flag {
        return Some(dir.to_path_buf());
    }
    if let Some(dir) = env_value.filter(|v| !v.is_empty()) {
        return Some(PathBuf::from(dir));
    }
    install_root
        .map(|root| root.join("scopes"))
        .filter(|dir| dir.is_dir())
        .or_else(|| bundled.map(Path::to_path_buf))
}

/// Per-user config directory: `$XDG_CONFIG_HOME/.config/<name>`, else `~/.config/<name>`
pub fn config_dir<C: ProductConfig>(config: &C) -> Result<PathBuf> {
    select_config_dir(
        std::env::var_os("XDG_CONFIG_HOME"),
        dirs::home_dir(),
        config.config_dir_name(),
    )
    .context("Failed to determine home directory")
}

fn select_config_dir(
    xdg_config_home: Option<OsString>,
    home: Option<PathBuf>,
    name: &str,
) -> Option<PathBuf> {
    let base = xdg_config_home
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or(home)?;
    Some(base.join(".config").join(name))
}
