//! Filesystem primitives shared by the catalog reader, the copier and the resolver

use crate::error::CopyError;
use std::io;
use std::path::{Component, Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Whether the last path component carries an extension (`foo.tsx`, not `.env` or `foo`)
pub fn has_extension(path: &Path) -> bool {
    path.extension().is_some()
}

/// Make a path absolute against the current directory and fold `.`/`..` lexically
pub fn resolve(path: &Path) -> io::Result<PathBuf> {
    let absolute = std::path::absolute(path)?;
    let mut resolved = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                resolved.pop();
            }
            other => resolved.push(other),
        }
    }
    Ok(resolved)
}

/// Ensure the parent directory of `path` exists
pub fn ensure_parent_dir(path: &Path) -> Result<(), CopyError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| CopyError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    Ok(())
}

/// Immediate children of a directory, sorted by file name, hidden entries skipped
pub fn list_dir(dir: &Path) -> Result<Vec<DirEntry>, walkdir::Error> {
    children(dir)
        .into_iter()
        .filter_entry(|entry| !is_hidden(entry))
        .collect()
}

/// Every immediate child of a directory, dotfiles included, sorted by file name
pub fn list_dir_all(dir: &Path) -> Result<Vec<DirEntry>, walkdir::Error> {
    children(dir).into_iter().collect()
}

fn children(dir: &Path) -> WalkDir {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().to_string_lossy().starts_with('.')
}
