//! Resolve command implementation.
//!
//! The `scaffold resolve` command shows where a template name points and
//! which parameters it would be rendered with.

use std::path::{Path, PathBuf};

use crate::cli::args::ResolveArgs;
use crate::config::{load_config, ScaffoldConfig};
use crate::error::{Result, ScaffoldError};
use crate::template::{Resolution, TemplateName, TemplateParams, TemplatePath};
use crate::ui::{OutputMode, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The resolve command implementation.
pub struct ResolveCommand {
    project_root: PathBuf,
    config_override: Option<PathBuf>,
    args: ResolveArgs,
}

impl ResolveCommand {
    /// Create a new resolve command.
    pub fn new(project_root: &Path, args: ResolveArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_override: None,
            args,
        }
    }

    /// Read configuration from this file instead of discovering it.
    pub fn with_config(mut self, config: Option<PathBuf>) -> Self {
        self.config_override = config;
        self
    }

    /// Get the command arguments.
    pub fn args(&self) -> &ResolveArgs {
        &self.args
    }

    /// Pick the template: argument, then config, then the built-in default.
    fn select_template(&self, config: &ScaffoldConfig) -> (TemplateName, &'static str) {
        if let Some(template) = &self.args.template {
            (template.clone(), "command line")
        } else if let Some(template) = &config.default_template {
            (template.clone(), "config")
        } else {
            (TemplateName::default_template(), "default")
        }
    }

    /// Config params overlaid with command-line params.
    fn effective_params(&self, config: &ScaffoldConfig) -> TemplateParams {
        let mut params = config.params.clone();
        let cli: TemplateParams = self.args.params.iter().cloned().collect();
        params.merge(&cli);
        params
    }
}

impl Command for ResolveCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = match load_config(&self.project_root, self.config_override.as_deref()) {
            Ok(c) => c,
            Err(ScaffoldError::ConfigNotFound { path }) => {
                ui.error(&format!("Config file not found: {}", path.display()));
                return Ok(CommandResult::failure(2));
            }
            Err(e) => return Err(e),
        };

        // Apply config default_output when no CLI flag was explicitly set
        if ui.output_mode() == OutputMode::Normal {
            if let Some(mode) = config.settings.default_output {
                ui.set_output_mode(mode.into());
            }
        }

        let (template, origin) = self.select_template(&config);
        tracing::debug!("Using template '{}' from {}", template, origin);

        let resolution = Resolution::new(&template, self.effective_params(&config));

        if self.args.json {
            ui.data(&serde_json::to_string_pretty(&resolution)?);
            return Ok(CommandResult::success());
        }

        ui.show_header(&format!("Template {}", resolution.name));
        ui.key_value("Kind", resolution.kind);
        if let TemplatePath::Repo(repo) = template.path() {
            ui.key_value("Service", repo.service.as_str());
            ui.key_value("User", &repo.user);
            ui.key_value("Template", &repo.template);
            ui.key_value("Download", &resolution.location);
        } else {
            ui.key_value("Location", &resolution.location);
        }

        if ui.output_mode().shows_details() {
            for (key, value) in resolution.params.iter() {
                ui.key_value(&format!("Param {}", key), value);
            }
        }
        if ui.output_mode().shows_verbose() {
            ui.message(&format!("  Selected from {}", origin));
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::parse_template_name;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    fn args(template: Option<&str>, params: &[(&str, &str)]) -> ResolveArgs {
        ResolveArgs {
            template: template.map(|t| parse_template_name(t).unwrap()),
            params: params
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            json: false,
        }
    }

    fn config_file(temp: &TempDir, content: &str) -> PathBuf {
        let path = temp.path().join("config.yml");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn shows_repository_details() {
        let temp = TempDir::new().unwrap();
        let config = config_file(&temp, "");
        let cmd = ResolveCommand::new(temp.path(), args(Some("gitlab:alice/bar"), &[]))
            .with_config(Some(config));
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.has_message("Kind: repository"));
        assert!(ui.has_message("Service: gitlab"));
        assert!(ui.has_message("User: alice"));
        assert!(ui.has_message("Template: bar"));
        assert!(ui.has_message(
            "Download: https://gitlab.com/alice/stack-templates/raw/master/bar.hsfiles"
        ));
    }

    #[test]
    fn falls_back_to_config_template() {
        let temp = TempDir::new().unwrap();
        let config = config_file(&temp, "default_template: https://example.com/web.hsfiles");
        let cmd = ResolveCommand::new(temp.path(), args(None, &[])).with_config(Some(config));
        let mut ui = MockUI::with_mode(OutputMode::Verbose);

        cmd.execute(&mut ui).unwrap();

        assert!(ui.has_message("Location: https://example.com/web.hsfiles"));
        assert!(ui.has_message("Selected from config"));
    }

    #[test]
    fn falls_back_to_default_template() {
        let temp = TempDir::new().unwrap();
        let config = config_file(&temp, "");
        let cmd = ResolveCommand::new(temp.path(), args(None, &[])).with_config(Some(config));
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        assert_eq!(ui.headers(), ["Template new-template"]);
        assert!(ui.has_message("Location: new-template.hsfiles"));
    }

    #[test]
    fn cli_params_override_config_params() {
        let temp = TempDir::new().unwrap();
        let config = config_file(
            &temp,
            r#"
params:
  author-name: Config Author
  category: Web
"#,
        );
        let cmd = ResolveCommand::new(
            temp.path(),
            args(Some("foo"), &[("author-name", "Cli Author")]),
        )
        .with_config(Some(config));
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        assert!(ui.has_message("Param author-name: Cli Author"));
        assert!(ui.has_message("Param category: Web"));
    }

    #[test]
    fn config_output_mode_applies() {
        let temp = TempDir::new().unwrap();
        let config = config_file(&temp, "settings:\n  default_output: quiet");
        let cmd = ResolveCommand::new(temp.path(), args(Some("foo"), &[("a", "b")]))
            .with_config(Some(config));
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        assert_eq!(ui.output_mode(), OutputMode::Quiet);
    }

    #[test]
    fn json_output() {
        let temp = TempDir::new().unwrap();
        let config = config_file(&temp, "");
        let mut resolve_args = args(Some("github:foo"), &[("k", "v")]);
        resolve_args.json = true;
        let cmd = ResolveCommand::new(temp.path(), resolve_args).with_config(Some(config));
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        let json: serde_json::Value = serde_json::from_str(&ui.data_lines()[0]).unwrap();
        assert_eq!(json["name"], "github:foo");
        assert_eq!(json["repository"], "github:commercialhaskell/foo");
        assert_eq!(json["params"]["k"], "v");
        assert!(ui.messages().is_empty());
    }

    #[test]
    fn invalid_config_is_an_error() {
        let temp = TempDir::new().unwrap();
        let config = config_file(&temp, "default_template: bitbucket:foo");
        let cmd = ResolveCommand::new(temp.path(), args(None, &[])).with_config(Some(config));
        let mut ui = MockUI::new();

        let err = cmd.execute(&mut ui).unwrap_err();
        assert!(matches!(err, ScaffoldError::ConfigParseError { .. }));
    }
}
