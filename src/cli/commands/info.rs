//! Info command implementation.
//!
//! The `scaffold info` command shows the author and description recorded in
//! a template metadata file.

use crate::cli::args::InfoArgs;
use crate::error::{Result, ScaffoldError};
use crate::template::load_template_info;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The info command implementation.
pub struct InfoCommand {
    args: InfoArgs,
}

impl InfoCommand {
    /// Create a new info command.
    pub fn new(args: InfoArgs) -> Self {
        Self { args }
    }
}

impl Command for InfoCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let info = match load_template_info(&self.args.file) {
            Ok(info) => info,
            Err(e @ ScaffoldError::MetadataShape { .. }) => {
                ui.error(&format!("{}: {}", self.args.file.display(), e));
                return Ok(CommandResult::failure(1));
            }
            Err(e) => return Err(e),
        };

        if self.args.json {
            ui.data(&serde_json::to_string_pretty(&info)?);
            return Ok(CommandResult::success());
        }

        if info.is_empty() {
            ui.warning("No author or description recorded");
            return Ok(CommandResult::success());
        }

        ui.key_value("Author", info.author.as_deref().unwrap_or("unknown"));
        ui.key_value(
            "Description",
            info.description.as_deref().unwrap_or("none"),
        );

        Ok(CommandResult::success())
    }
}
