//! zsh completion script generation and installation

use crate::config;
use crate::product::ProductConfig;
use anyhow::{Context, Result};
use clap_complete::Shell;
use std::path::{Path, PathBuf};

/// Where the completion script is installed for this product
pub fn completion_path<C: ProductConfig>(config: &C) -> Result<PathBuf> {
    Ok(config::config_dir(config)?.join(config.completion_file_name()))
}

/// Generate the zsh completion script for a fully built command
pub fn render_zsh(cmd: &mut clap::Command) -> Result<String> {
    let bin_name = cmd.get_name().to_string();
    let mut buf = Vec::new();
    clap_complete::generate(Shell::Zsh, cmd, bin_name, &mut buf);
    String::from_utf8(buf).context("Generated completion script is not valid UTF-8")
}

/// Lines to add to `.zshrc` so the installed script is sourced
pub fn rc_snippet<C: ProductConfig>(config: &C, script: &Path) -> String {
    format!(
        "# {} tab completion\n[[ -f {path} ]] && . {path} || true",
        config.name(),
        path = script.display()
    )
}

/// Write the script, creating the config directory as needed
pub fn install_script(path: &Path, script: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    std::fs::write(path, script)
        .with_context(|| format!("Failed to write file: {}", path.display()))
}

pub fn uninstall_script(path: &Path) -> Result<()> {
    std::fs::remove_file(path).with_context(|| format!("Failed to delete {}", path.display()))
}
