//! Status command implementation.
//!
//! The `podpin status` command shows the installed CocoaPods version.

use crate::cli::args::StatusArgs;
use crate::error::Result;
use crate::installer::CocoapodsInstaller;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The status command implementation.
pub struct StatusCommand<'a> {
    installer: &'a CocoapodsInstaller<'a>,
    args: StatusArgs,
}

impl<'a> StatusCommand<'a> {
    /// Create a new status command.
    pub fn new(installer: &'a CocoapodsInstaller<'a>, args: StatusArgs) -> Self {
        Self { installer, args }
    }
}

impl Command for StatusCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let installed = self.installer.installed_version();

        match &installed {
            Some(version) => ui.message(&format!("CocoaPods {}", version)),
            None => ui.warning("CocoaPods is not installed"),
        }

        let Some(expected) = &self.args.expect else {
            return Ok(CommandResult::success());
        };

        if installed.as_deref() == Some(expected.as_str()) {
            ui.success(&format!("CocoaPods {} is installed", expected));
            Ok(CommandResult::success())
        } else {
            ui.error(&format!(
                "Expected CocoaPods {}, found {}",
                expected,
                installed.as_deref().unwrap_or("none")
            ));
            Ok(CommandResult::failure(1))
        }
    }
}
