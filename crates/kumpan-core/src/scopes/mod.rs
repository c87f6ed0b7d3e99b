//! Scope catalog: reading, item manifests and copying
//!
//! This module provides:
//! - Catalog types (Scope, ScopeItem)
//! - Item manifest parsing (ItemManifest, PackageJson)
//! - Catalog reading from a scopes directory
//! - Item copying with rename-vs-directory destination semantics

pub mod copier;
pub mod inflect;
pub mod manifest;
pub mod reader;

use std::path::PathBuf;

pub use copier::{copy_item, list_item_files, CopyReport};
pub use manifest::{DependencyMap, ItemManifest, PackageJson};
pub use reader::read_scopes;

/// A named category of items, one per subdirectory of the scopes directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scope {
    /// Singular form of the directory name (`components` -> `component`)
    pub name: String,

    pub path: PathBuf,

    /// Items in file name order
    pub items: Vec<ScopeItem>,
}

impl Scope {
    /// On-disk (plural) directory name of the scope
    pub fn dir_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.name.clone())
    }

    /// Look up an item by name; the first match wins
    pub fn find_item(&self, name: &str) -> Option<&ScopeItem> {
        self.items.iter().find(|item| item.name == name)
    }

    /// Whether `name` refers to this scope by its singular or directory name
    pub fn is_named(&self, name: &str) -> bool {
        self.name == name || self.dir_name() == name
    }

    pub fn item_names(&self) -> Vec<&str> {
        self.items.iter().map(|item| item.name.as_str()).collect()
    }
}

/// A single reusable artifact inside a scope
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopeItem {
    /// Manifest name if the item has a `package.json`, else the file/directory name
    pub name: String,

    /// Item directory, or the file itself for bare file items
    pub path: PathBuf,

    pub package: Option<ItemManifest>,
}

impl ScopeItem {
    pub fn has_manifest(&self) -> bool {
        self.package.is_some()
    }
}
