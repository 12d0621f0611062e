//! Output verbosity.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show everything, including the commands being run.
    Verbose,
    /// Show messages and the package manager's output.
    #[default]
    Normal,
    /// Show only outcomes (success, warnings, errors).
    Quiet,
}

impl OutputMode {
    /// Check if this mode echoes the commands being run.
    pub fn shows_detail(&self) -> bool {
        matches!(self, Self::Verbose)
    }

    /// Check if this mode shows the package manager's own output.
    pub fn shows_command_output(&self) -> bool {
        matches!(self, Self::Verbose | Self::Normal)
    }

    /// Check if this mode shows informational messages.
    pub fn shows_messages(&self) -> bool {
        !matches!(self, Self::Quiet)
    }
}
