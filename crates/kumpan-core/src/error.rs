//! Typed errors for the operations callers branch on
//!
//! Everything else is reported through `anyhow` with context.

use std::path::PathBuf;
use thiserror::Error;

/// Reading or validating a `package.json`
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid package.json: {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("package.json is missing name: {}", path.display())]
    MissingName { path: PathBuf },
}

/// Copying an item into a destination
#[derive(Debug, Error)]
pub enum CopyError {
    #[error("No files specified in package.json: {item}")]
    NoFiles { item: String },

    #[error("Not a file: {}", path.display())]
    NotAFile { path: PathBuf },

    #[error("Failed to read directory {}: {source}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Failed to create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to copy {} to {}: {source}", from.display(), to.display())]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
