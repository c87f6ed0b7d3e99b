//! Host project dependency handling
//!
//! This module provides:
//! - Package manager detection (manifest declaration, lockfiles, workspace inheritance)
//! - npm version range evaluation
//! - Reconciliation of an item's dependencies against the host project
//! - Install command synthesis and execution

pub mod command;
pub mod install;
pub mod manager;
pub mod range;
pub mod reconcile;

pub use command::make_install_command;
pub use install::{plan_install, run_install, InstallPlan};
pub use manager::{identify_package_manager, PackageManager};
pub use reconcile::compare_dependencies;
