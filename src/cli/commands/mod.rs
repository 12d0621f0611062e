//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait and is routed to by
//! [`CommandDispatcher`].

pub mod completions;
pub mod dispatcher;
pub mod install;
pub mod manifest_version;
pub mod status;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
