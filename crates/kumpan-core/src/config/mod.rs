//! Configuration: where the catalog and per-user files live

pub mod paths;

pub use paths::{config_dir, install_root, scopes_dir};
