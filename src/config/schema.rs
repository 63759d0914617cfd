//! Configuration schema.

use serde::{Deserialize, Serialize};

use crate::template::{TemplateName, TemplateParams};

/// Root configuration document (`.scaffold/config.yml`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaffoldConfig {
    /// Template used when none is given on the command line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_template: Option<TemplateName>,

    /// Parameters passed to every template.
    #[serde(skip_serializing_if = "TemplateParams::is_empty")]
    pub params: TemplateParams,

    /// Global settings.
    pub settings: Settings,
}

impl ScaffoldConfig {
    /// Layer `overlay` on top of `self`.
    ///
    /// Scalars set in `overlay` replace those in `self`; params are merged
    /// key by key with `overlay` winning.
    pub fn merge(mut self, overlay: ScaffoldConfig) -> Self {
        if overlay.default_template.is_some() {
            self.default_template = overlay.default_template;
        }
        self.params.merge(&overlay.params);
        if overlay.settings.default_output.is_some() {
            self.settings.default_output = overlay.settings.default_output;
        }
        self
    }
}

/// Global settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Default output mode: verbose, normal, quiet, silent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_output: Option<OutputMode>,
}

/// Output verbosity mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    Verbose,
    Normal,
    Quiet,
    Silent,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::TemplatePath;

    #[test]
    fn parses_full_config() {
        let config: ScaffoldConfig = serde_yaml::from_str(
            r#"
default_template: github:alice/web
params:
  author-name: Jane Doe
  category: Web
settings:
  default_output: quiet
"#,
        )
        .unwrap();

        let template = config.default_template.unwrap();
        assert_eq!(template.prefix(), "github:alice/web");
        assert!(matches!(template.path(), TemplatePath::Repo(_)));
        assert_eq!(config.params.get("author-name"), Some("Jane Doe"));
        assert_eq!(config.settings.default_output, Some(OutputMode::Quiet));
    }

    #[test]
    fn everything_is_optional() {
        let config: ScaffoldConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, ScaffoldConfig::default());
    }

    #[test]
    fn rejects_invalid_default_template() {
        let result = serde_yaml::from_str::<ScaffoldConfig>("default_template: bitbucket:foo");
        assert!(result.is_err());
    }

    #[test]
    fn merge_prefers_overlay() {
        let base: ScaffoldConfig = serde_yaml::from_str(
            r#"
default_template: foo
params:
  author-name: Base
  category: Web
settings:
  default_output: verbose
"#,
        )
        .unwrap();
        let overlay: ScaffoldConfig = serde_yaml::from_str(
            r#"
params:
  author-name: Overlay
"#,
        )
        .unwrap();

        let merged = base.merge(overlay);
        assert_eq!(merged.default_template.unwrap().prefix(), "foo");
        assert_eq!(merged.params.get("author-name"), Some("Overlay"));
        assert_eq!(merged.params.get("category"), Some("Web"));
        assert_eq!(merged.settings.default_output, Some(OutputMode::Verbose));
    }

    #[test]
    fn serializes_template_as_name() {
        let config: ScaffoldConfig = serde_yaml::from_str("default_template: foo.hsfiles").unwrap();
        let yaml = serde_yaml::to_string(&config).unwrap();
        assert!(yaml.contains("default_template: foo"));
        assert!(!yaml.contains("params"));
    }
}
