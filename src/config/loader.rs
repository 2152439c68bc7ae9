//! Configuration file discovery and loading.
//!
//! This module handles finding and loading configuration files from
//! various locations in the correct priority order.

use crate::config::merger::{merge_configs, without_nulls};
use crate::config::schema::Settings;
use crate::error::{GerritPushError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory holding gerrit-push configuration, in the home and repository.
pub const CONFIG_DIR: &str = ".gerrit-push";

/// Paths to configuration files in priority order (later overrides earlier).
///
/// Merge order:
/// 1. User global config (`~/.gerrit-push/config.yml`)
/// 2. Project config (`.gerrit-push/config.yml`)
/// 3. Local overrides (`.gerrit-push/config.local.yml`)
#[derive(Debug, Clone, Default)]
pub struct ConfigPaths {
    /// User's global config: ~/.gerrit-push/config.yml
    pub user_global: Option<PathBuf>,

    /// Project config: .gerrit-push/config.yml
    pub project: Option<PathBuf>,

    /// Local overrides: .gerrit-push/config.local.yml
    pub project_local: Option<PathBuf>,
}

impl ConfigPaths {
    /// Discover config files for the given repository root.
    pub fn discover(repo_root: &Path) -> Self {
        Self::discover_with_home(repo_root, dirs::home_dir().as_deref())
    }

    /// Discover config files using an explicit home directory.
    pub fn discover_with_home(repo_root: &Path, home: Option<&Path>) -> Self {
        Self {
            user_global: home.and_then(|h| existing(h.join(CONFIG_DIR).join("config.yml"))),
            project: existing(repo_root.join(CONFIG_DIR).join("config.yml")),
            project_local: existing(repo_root.join(CONFIG_DIR).join("config.local.yml")),
        }
    }

    /// Returns all existing config paths in merge order.
    pub fn all_existing(&self) -> Vec<&PathBuf> {
        [&self.user_global, &self.project, &self.project_local]
            .into_iter()
            .flatten()
            .collect()
    }
}

fn existing(path: PathBuf) -> Option<PathBuf> {
    if path.is_file() {
        Some(path)
    } else {
        None
    }
}

/// Load a config file as a raw YAML value (for merging).
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_value(path: &Path) -> Result<serde_yaml::Value> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            GerritPushError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            GerritPushError::Io(e)
        }
    })?;

    serde_yaml::from_str(&content).map_err(|e| GerritPushError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Parse a merged YAML value into normalized settings.
///
/// `source_path` is used for error reporting.
pub fn parse_settings(value: serde_yaml::Value, source_path: &Path) -> Result<Settings> {
    let settings: Settings =
        serde_yaml::from_value(value).map_err(|e| GerritPushError::ConfigParseError {
            path: source_path.to_path_buf(),
            message: e.to_string(),
        })?;
    Ok(settings.normalized())
}

/// Load and merge every discovered layer.
///
/// Missing files are skipped; without any file the defaults apply.
pub fn load_from_paths(paths: &ConfigPaths, repo_root: &Path) -> Result<Settings> {
    let mut layers = Vec::new();
    let mut last_path = repo_root.join(CONFIG_DIR).join("config.yml");

    for path in paths.all_existing() {
        tracing::debug!("Loading config layer {}", path.display());
        let value = load_config_value(path)?;
        // Parse each layer on its own so errors name the offending file.
        if !value.is_null() {
            parse_settings(without_nulls(&value), path)?;
        }
        layers.push(value);
        last_path = path.clone();
    }

    parse_settings(merge_configs(&layers), &last_path)
}

/// Load settings for a repository.
///
/// If `config_override` is provided, loads only that file without merging.
/// Otherwise, discovers and merges all config layers.
pub fn load_settings(repo_root: &Path, config_override: Option<&Path>) -> Result<Settings> {
    if let Some(override_path) = config_override {
        let value = load_config_value(override_path)?;
        let layers = [value];
        return parse_settings(merge_configs(&layers), override_path);
    }

    load_from_paths(&ConfigPaths::discover(repo_root), repo_root)
}
