//! Command-line interface for podpin.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{
    Cli, Commands, CompletionsArgs, InstallArgs, ManifestVersionArgs, StatusArgs,
};
pub use commands::{Command, CommandDispatcher, CommandResult};
