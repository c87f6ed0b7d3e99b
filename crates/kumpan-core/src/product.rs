//! Product configuration trait for the CLI binary
//!
//! The binary implements this trait to tell the library where its catalog lives
//! and how it identifies itself on disk.

use std::path::Path;

/// Configuration trait for CLI products built on this library
///
/// A product defines:
/// - Product identity (name, display name)
/// - Catalog location (env override, bundled fallback)
/// - Where per-user files such as shell completions are stored
pub trait ProductConfig: Clone + Send + Sync + 'static {
    /// Internal product name (used for the CLI command and config directory)
    fn name(&self) -> &'static str;

    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    /// CLI description shown in help text
    fn cli_description(&self) -> &'static str;

    /// Environment variable name for overriding the scopes directory
    fn scopes_dir_env(&self) -> &'static str;

    /// Catalog shipped alongside the sources, used when no installed catalog is found
    fn bundled_scopes_dir(&self) -> Option<&'static Path> {
        None
    }

    /// Directory name under `.config` holding per-user files
    fn config_dir_name(&self) -> &'static str {
        self.name()
    }

    /// File name of the installed zsh completion script
    fn completion_file_name(&self) -> &'static str {
        "completion.zsh"
    }
}
