//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures output for
//! later assertion, dropping messages the output mode would hide.
//!
//! # Example
//!
//! ```
//! use podpin::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.message("Checking CocoaPods");
//! ui.success("Done!");
//!
//! assert!(ui.messages().contains(&"Checking CocoaPods".to_string()));
//! assert!(ui.successes().contains(&"Done!".to_string()));
//! ```

use super::{OutputMode, UserInterface};

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new MockUI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all captured warning messages.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Get all captured error messages.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Check if any captured line of any kind contains `needle`.
    pub fn has_output(&self, needle: &str) -> bool {
        self.messages
            .iter()
            .chain(&self.successes)
            .chain(&self.warnings)
            .chain(&self.errors)
            .any(|line| line.contains(needle))
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_messages() {
            self.messages.push(msg.to_string());
        }
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_each_kind_separately() {
        let mut ui = MockUI::new();
        ui.message("info");
        ui.success("ok");
        ui.warning("careful");
        ui.error("bad");

        assert_eq!(ui.messages(), ["info"]);
        assert_eq!(ui.successes(), ["ok"]);
        assert_eq!(ui.warnings(), ["careful"]);
        assert_eq!(ui.errors(), ["bad"]);
    }

    #[test]
    fn has_output_searches_all_kinds() {
        let mut ui = MockUI::new();
        ui.warning("uninstall failed");
        assert!(ui.has_output("uninstall"));
        assert!(!ui.has_output("installed successfully"));
    }

    #[test]
    fn with_mode_sets_mode() {
        let ui = MockUI::with_mode(OutputMode::Quiet);
        assert_eq!(ui.output_mode(), OutputMode::Quiet);
    }

    #[test]
    fn quiet_mode_drops_messages_but_keeps_outcomes() {
        let mut ui = MockUI::with_mode(OutputMode::Quiet);
        ui.message("info");
        ui.success("ok");
        ui.error("bad");

        assert!(ui.messages().is_empty());
        assert_eq!(ui.successes(), ["ok"]);
        assert_eq!(ui.errors(), ["bad"]);
    }
}
