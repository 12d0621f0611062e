//! Non-interactive UI for CI/headless environments.

use super::{OutputMode, UserInterface};

/// UI implementation for non-interactive mode.
///
/// Writes plain lines with no styling so CI log viewers render them as is.
pub struct NonInteractiveUI {
    mode: OutputMode,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_messages() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        println!("✓ {}", msg);
    }

    fn warning(&mut self, msg: &str) {
        println!("⚠ {}", msg);
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_output_mode() {
        let ui = NonInteractiveUI::new(OutputMode::Quiet);
        assert_eq!(ui.output_mode(), OutputMode::Quiet);
    }

    #[test]
    fn quiet_mode_output_does_not_panic() {
        let mut ui = NonInteractiveUI::new(OutputMode::Quiet);
        ui.message("hidden");
        ui.success("shown");
        ui.warning("shown");
    }
}
