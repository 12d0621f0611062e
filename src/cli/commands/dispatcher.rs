//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use crate::cli::args::{Cli, Commands};
use crate::error::Result;
use crate::installer::CocoapodsInstaller;
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] carrying the process exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self { exit_code: 0 }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self { exit_code }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher<'a> {
    installer: CocoapodsInstaller<'a>,
}

impl<'a> CommandDispatcher<'a> {
    /// Create a new dispatcher around an installer.
    pub fn new(installer: CocoapodsInstaller<'a>) -> Self {
        Self { installer }
    }

    /// Dispatch and execute a command.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Commands::Install(args) => {
                let cmd = super::install::InstallCommand::new(&self.installer, args.clone());
                cmd.execute(ui)
            }
            Commands::Status(args) => {
                let cmd = super::status::StatusCommand::new(&self.installer, args.clone());
                cmd.execute(ui)
            }
            Commands::ManifestVersion(args) => {
                let cmd =
                    super::manifest_version::ManifestVersionCommand::new(&self.installer, args.clone());
                cmd.execute(ui)
            }
            Commands::Completions(args) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
        }
    }
}
