//! Error types for scaffold operations.
//!
//! This module defines [`ScaffoldError`], the primary error type used
//! throughout the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `ScaffoldError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `ScaffoldError::Other`) for unexpected errors
//! - Template name failures always carry the same message, whatever the input

use std::path::PathBuf;
use thiserror::Error;

use crate::template::TEMPLATE_NAME_HELP;

/// Core error type for scaffold operations.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// No template grammar accepted the input.
    #[error("{}", TEMPLATE_NAME_HELP)]
    InvalidTemplateName { input: String },

    /// A `key:value` parameter was malformed.
    #[error("Expected a key:value pair, got: {raw}")]
    InvalidParam { raw: String },

    /// Template metadata did not have the expected shape.
    #[error("Invalid template metadata: {message}")]
    MetadataShape { message: String },

    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for scaffold operations.
pub type Result<T> = std::result::Result<T, ScaffoldError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_template_name_uses_fixed_message() {
        let err = ScaffoldError::InvalidTemplateName {
            input: "bitbucket:foo".into(),
        };
        assert_eq!(
            err.to_string(),
            "Expected a template like: foo or foo.hsfiles or https://example.com/foo.hsfiles or github:user/foo"
        );
    }

    #[test]
    fn invalid_param_echoes_input() {
        let err = ScaffoldError::InvalidParam {
            raw: "nocolon".into(),
        };
        assert!(err.to_string().contains("nocolon"));
    }

    #[test]
    fn metadata_shape_displays_message() {
        let err = ScaffoldError::MetadataShape {
            message: "expected a mapping".into(),
        };
        assert!(err.to_string().contains("expected a mapping"));
    }

    #[test]
    fn config_not_found_displays_path() {
        let err = ScaffoldError::ConfigNotFound {
            path: PathBuf::from("/foo/config.yml"),
        };
        assert!(err.to_string().contains("/foo/config.yml"));
    }

    #[test]
    fn config_parse_error_displays_path_and_message() {
        let err = ScaffoldError::ConfigParseError {
            path: PathBuf::from("/config.yml"),
            message: "invalid syntax".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/config.yml"));
        assert!(msg.contains("invalid syntax"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: ScaffoldError = io_err.into();
        assert!(matches!(err, ScaffoldError::Io(_)));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(ScaffoldError::InvalidParam { raw: "x".into() })
        }
        assert!(returns_error().is_err());
    }
}
