//! `package.json` types and parsing

use crate::error::ManifestError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Package name to version range
pub type DependencyMap = BTreeMap<String, String>;

/// The subset of a `package.json` this tool reads
///
/// Every field is optional so host project manifests (which may lack a name)
/// parse as well as catalog item manifests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageJson {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Files (or directories, expanded one level) making up the item
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependencies: Option<DependencyMap>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dev_dependencies: Option<DependencyMap>,

    /// `"<manager>@<version>"`, e.g. `"pnpm@9.1.0"`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package_manager: Option<String>,
}

impl PackageJson {
    /// Read and parse a `package.json` from disk
    pub fn read(path: &Path) -> Result<Self, ManifestError> {
        let content = std::fs::read_to_string(path).map_err(|source| ManifestError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ManifestError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// A catalog item manifest: a `package.json` with a non-empty `name`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemManifest {
    pub name: String,
    pub files: Option<Vec<String>>,
    pub dependencies: Option<DependencyMap>,
    pub dev_dependencies: Option<DependencyMap>,
    pub package_manager: Option<String>,
}

impl ItemManifest {
    /// Read an item manifest, rejecting manifests without a name
    pub fn read(path: &Path) -> Result<Self, ManifestError> {
        let package = PackageJson::read(path)?;
        Self::from_package(package).ok_or_else(|| ManifestError::MissingName {
            path: path.to_path_buf(),
        })
    }

    /// Validate a parsed `package.json`; `None` when the name is absent or empty
    pub fn from_package(package: PackageJson) -> Option<Self> {
        let name = package.name.filter(|n| !n.is_empty())?;
        Some(Self {
            name,
            files: package.files,
            dependencies: package.dependencies,
            dev_dependencies: package.dev_dependencies,
            package_manager: package.package_manager,
        })
    }
}
