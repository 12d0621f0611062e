//! User-facing output.
//!
//! This module provides:
//! - [`UserInterface`] trait, the installer's logger
//! - [`TerminalUI`] for interactive terminal usage
//! - [`NonInteractiveUI`] for CI logs
//! - [`MockUI`] for capturing output in tests
//!
//! # Example
//!
//! ```
//! use podpin::ui::{create_ui, OutputMode};
//!
//! let mut ui = create_ui(false, OutputMode::Quiet);
//! ui.message("CocoaPods 1.11.3 is already installed.");
//! ```

pub mod mock;
pub mod non_interactive;
pub mod output;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use non_interactive::NonInteractiveUI;
pub use output::OutputMode;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, PodpinTheme};

/// Trait for user interface interactions.
///
/// Output is best-effort: write failures are ignored and never affect
/// the outcome of an operation.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display an informational message. Hidden in quiet mode.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message. Shown in every output mode.
    fn error(&mut self, msg: &str);
}
