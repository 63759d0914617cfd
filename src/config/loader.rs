//! Configuration file discovery and loading.
//!
//! This module handles finding and loading configuration files from
//! various locations in the correct priority order.

use crate::config::schema::ScaffoldConfig;
use crate::error::{Result, ScaffoldError};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory holding scaffold configuration.
pub const CONFIG_DIR: &str = ".scaffold";

/// Configuration file name inside [`CONFIG_DIR`].
pub const CONFIG_FILE: &str = "config.yml";

/// Paths to configuration files in priority order (later overrides earlier).
///
/// Merge order:
/// 1. User global config (`~/.scaffold/config.yml`)
/// 2. Project config (`.scaffold/config.yml`)
#[derive(Debug, Clone)]
pub struct ConfigPaths {
    /// User's global config: ~/.scaffold/config.yml
    pub user_global: Option<PathBuf>,

    /// Project config: .scaffold/config.yml
    pub project: Option<PathBuf>,
}

impl ConfigPaths {
    /// Discover config files for the given project root.
    pub fn discover(project_root: &Path) -> Self {
        Self::discover_with_home(project_root, dirs::home_dir().as_deref())
    }

    /// Discover config files using an explicit home directory.
    pub fn discover_with_home(project_root: &Path, home: Option<&Path>) -> Self {
        Self {
            user_global: home.and_then(existing_config),
            project: existing_config(project_root),
        }
    }

    /// Returns all existing config paths in merge order.
    pub fn all_existing(&self) -> Vec<&PathBuf> {
        self.user_global.iter().chain(self.project.iter()).collect()
    }
}

fn existing_config(dir: &Path) -> Option<PathBuf> {
    let path = dir.join(CONFIG_DIR).join(CONFIG_FILE);
    path.exists().then_some(path)
}

/// Load a single config file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<ScaffoldConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ScaffoldError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            ScaffoldError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into a config.
///
/// An empty document yields the default config.
pub fn parse_config(content: &str, source_path: &Path) -> Result<ScaffoldConfig> {
    if content.trim().is_empty() {
        return Ok(ScaffoldConfig::default());
    }
    serde_yaml::from_str(content).map_err(|e| ScaffoldError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load and merge every discovered config file.
///
/// Missing files are skipped; with no files at all the default config is
/// returned.
pub fn load_merged_config(paths: &ConfigPaths) -> Result<ScaffoldConfig> {
    let mut config = ScaffoldConfig::default();
    for path in paths.all_existing() {
        tracing::debug!("Loading config from {}", path.display());
        config = config.merge(load_config_file(path)?);
    }
    Ok(config)
}

/// Load config with optional path override.
///
/// If `config_override` is provided, loads only that file without merging.
/// Otherwise, discovers and merges all config files.
pub fn load_config(project_root: &Path, config_override: Option<&Path>) -> Result<ScaffoldConfig> {
    match config_override {
        Some(path) => load_config_file(path),
        None => load_merged_config(&ConfigPaths::discover(project_root)),
    }
}
