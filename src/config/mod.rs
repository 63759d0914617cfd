//! Configuration loading for scaffold.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//!
//! # Example
//!
//! ```
//! use scaffold::config::load_config;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let config_dir = temp.path().join(".scaffold");
//! fs::create_dir_all(&config_dir).unwrap();
//! fs::write(config_dir.join("config.yml"), "default_template: github:foo").unwrap();
//!
//! let config = load_config(temp.path(), Some(&config_dir.join("config.yml"))).unwrap();
//! assert_eq!(config.default_template.unwrap().prefix(), "github:foo");
//! ```
//!
//! # Configuration File Locations
//!
//! Scaffold discovers and merges configuration in this order:
//! 1. User global config (`~/.scaffold/config.yml`)
//! 2. Project config (`.scaffold/config.yml`)
//!
//! `--config` replaces discovery with a single file.

pub mod loader;
pub mod schema;

pub use loader::{
    load_config, load_config_file, load_merged_config, parse_config, ConfigPaths, CONFIG_DIR,
    CONFIG_FILE,
};
pub use schema::{OutputMode, ScaffoldConfig, Settings};
