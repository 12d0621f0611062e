//! podpin - Pin the installed CocoaPods version before a build.
//!
//! podpin checks the CocoaPods version on the machine and, when it differs
//! from the one a project wants, replaces it through RubyGems. The desired
//! version can come from the command line or from the first line of a
//! Podfile.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Executables and gem name to drive
//! - [`error`] - Error types and result aliases
//! - [`fs`] - Filesystem access
//! - [`installer`] - Version check, uninstall, install and manifest reading
//! - [`shell`] - External process execution
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use podpin::installer::first_line;
//!
//! assert_eq!(first_line("1.11.3\r\nplatform :ios, '13.0'"), "1.11.3");
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod fs;
pub mod installer;
pub mod shell;
pub mod ui;

pub use error::{PodpinError, Result};
