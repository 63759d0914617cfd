//! Template metadata.
//!
//! A template may ship a small metadata document naming its author and
//! describing what it generates. Both fields are optional.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScaffoldError};

/// Metadata attached to a template definition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateInfo {
    /// Who wrote the template.
    #[serde(default)]
    pub author: Option<String>,

    /// What the template generates.
    #[serde(default)]
    pub description: Option<String>,
}

impl TemplateInfo {
    /// Parse metadata from YAML.
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let value: serde_yaml::Value =
            serde_yaml::from_str(content).map_err(|e| ScaffoldError::MetadataShape {
                message: e.to_string(),
            })?;
        if !value.is_mapping() {
            return Err(ScaffoldError::MetadataShape {
                message: format!("expected a mapping, found {}", yaml_kind(&value)),
            });
        }
        serde_yaml::from_value(value).map_err(|e| ScaffoldError::MetadataShape {
            message: e.to_string(),
        })
    }

    /// Parse metadata from JSON.
    pub fn from_json_str(content: &str) -> Result<Self> {
        let value: serde_json::Value =
            serde_json::from_str(content).map_err(|e| ScaffoldError::MetadataShape {
                message: e.to_string(),
            })?;
        if !value.is_object() {
            return Err(ScaffoldError::MetadataShape {
                message: format!("expected an object, found {}", json_kind(&value)),
            });
        }
        serde_json::from_value(value).map_err(|e| ScaffoldError::MetadataShape {
            message: e.to_string(),
        })
    }

    /// True when neither field is set.
    pub fn is_empty(&self) -> bool {
        self.author.is_none() && self.description.is_none()
    }
}

/// Load template metadata from a file. `.json` files are read as JSON,
/// everything else as YAML.
pub fn load_template_info(path: &Path) -> Result<TemplateInfo> {
    let content = fs::read_to_string(path)?;
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    tracing::debug!("Loading template metadata from {}", path.display());
    if is_json {
        TemplateInfo::from_json_str(&content)
    } else {
        TemplateInfo::from_yaml_str(&content)
    }
}

fn yaml_kind(value: &serde_yaml::Value) -> &'static str {
    match value {
        serde_yaml::Value::Null => "nothing",
        serde_yaml::Value::Bool(_) => "a boolean",
        serde_yaml::Value::Number(_) => "a number",
        serde_yaml::Value::String(_) => "a string",
        serde_yaml::Value::Sequence(_) => "a sequence",
        serde_yaml::Value::Mapping(_) => "a mapping",
        serde_yaml::Value::Tagged(_) => "a tagged value",
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
