//! Configuration loading for gerrit-push.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Deep merging in [`merger`]
//!
//! # Example
//!
//! ```
//! use gerrit_push::config::{load_from_paths, ConfigPaths};
//! use std::fs;
//! use tempfile::TempDir;
//!
//! let repo = TempDir::new().unwrap();
//! let dir = repo.path().join(".gerrit-push");
//! fs::create_dir_all(&dir).unwrap();
//! fs::write(dir.join("config.yml"), "default_branch: main").unwrap();
//!
//! let paths = ConfigPaths::discover_with_home(repo.path(), None);
//! let settings = load_from_paths(&paths, repo.path()).unwrap();
//! assert_eq!(settings.default_branch, "main");
//! assert_eq!(settings.remote, "origin");
//! ```
//!
//! # Configuration File Locations
//!
//! Layers are merged in this order, later ones winning:
//! 1. User global config (`~/.gerrit-push/config.yml`)
//! 2. Project config (`.gerrit-push/config.yml`)
//! 3. Local overrides (`.gerrit-push/config.local.yml`)

pub mod loader;
pub mod merger;
pub mod schema;

pub use loader::{
    load_config_value, load_from_paths, load_settings, parse_settings, ConfigPaths, CONFIG_DIR,
};
pub use merger::{deep_merge, merge_configs};
pub use schema::{ConfirmationStyle, Language, Settings, DEFAULT_REMOTE};
