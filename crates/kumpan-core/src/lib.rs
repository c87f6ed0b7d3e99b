//! Kumpan Core - Shared library for the kumpan catalog CLI
//!
//! This library copies reusable items (components, hooks) from a local catalog
//! of scopes into a project, and works out which of the item's npm dependencies
//! the host project still needs.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Catalog reading, item copying, package manager
//!   detection, dependency reconciliation and install command synthesis
//! - **Layer 2: Product wiring** - `ProductConfig` trait, path resolution, completion scripts
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based flows (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use kumpan_core::{deps, scopes};
//!
//! let catalog = scopes::read_scopes(Path::new("scopes"))?;
//! let item = catalog[0].find_item("PromiseButton").unwrap();
//! scopes::copy_item(item, Path::new("src/components"))?;
//!
//! if let Some(plan) = deps::plan_install(item, Path::new("src/components")) {
//!     println!("{}", plan.command);
//! }
//! ```

pub mod completion;
pub mod config;
pub mod deps;
pub mod error;
pub mod fs;
pub mod product;
pub mod scopes;
pub mod ui;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use deps::{InstallPlan, PackageManager};
pub use error::{CopyError, ManifestError};
pub use product::ProductConfig;
pub use scopes::{copy_item, read_scopes, CopyReport, ItemManifest, PackageJson, Scope, ScopeItem};

/// Name of the manifest file read for catalog items and host projects
pub const MANIFEST_FILE: &str = "package.json";
