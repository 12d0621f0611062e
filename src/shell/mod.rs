//! External process execution and host detection.

pub mod command;
pub mod mock;
pub mod platform;

pub use command::{command_line, ProcessRunner, StdoutCallback, SystemRunner};
pub use mock::{MockResponse, MockRunner};
pub use platform::{is_ci, is_ci_with};
