//! Scaffold - resolve project template names.
//!
//! A template name selects the scaffold a new project is generated from.
//! Scaffold turns that string into a concrete location: a template on a
//! code-hosting service, a URL, or a file path.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading
//! - [`error`] - Error types and result aliases
//! - [`template`] - Template name grammars, parameters, and metadata
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use scaffold::template::{parse_template_name, TemplatePath};
//! use std::path::PathBuf;
//!
//! let name = parse_template_name("foo").unwrap();
//! assert_eq!(name.prefix(), "foo");
//! assert_eq!(name.path(), &TemplatePath::Rel(PathBuf::from("foo.hsfiles")));
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod template;
pub mod ui;

pub use error::{Result, ScaffoldError};
