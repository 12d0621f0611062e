//! Error types for podpin operations.
//!
//! This module defines [`PodpinError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `PodpinError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `PodpinError::Other`) for unexpected errors
//! - A failed uninstall is never an error; see
//!   [`UninstallOutcome`](crate::installer::UninstallOutcome)

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for podpin operations.
#[derive(Debug, Error)]
pub enum PodpinError {
    /// Manifest file does not exist at the resolved path.
    #[error("Podfile is not found on path '{}'", .path.display())]
    ManifestNotFound { path: PathBuf },

    /// Manifest exists but its first line holds no version.
    #[error("No version found on the first line of '{}'", .path.display())]
    EmptyVersion { path: PathBuf },

    /// The install command exited non-zero or could not be run.
    #[error("Error during install CocoaPods {version}{}", format_code(.code))]
    InstallFailed { version: String, code: Option<i32> },

    /// An external command could not be started or waited on.
    #[error("Failed to run '{command}': {source}")]
    CommandFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

fn format_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!(" (exit code {})", code),
        None => String::new(),
    }
}

/// Result type alias for podpin operations.
pub type Result<T> = std::result::Result<T, PodpinError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifest_not_found_displays_path() {
        let err = PodpinError::ManifestNotFound {
            path: PathBuf::from("/work/ios/Podfile"),
        };
        assert_eq!(
            err.to_string(),
            "Podfile is not found on path '/work/ios/Podfile'"
        );
    }

    #[test]
    fn empty_version_displays_path() {
        let err = PodpinError::EmptyVersion {
            path: PathBuf::from("/work/Podfile"),
        };
        assert!(err.to_string().contains("/work/Podfile"));
    }

    #[test]
    fn install_failed_displays_version_and_code() {
        let err = PodpinError::InstallFailed {
            version: "1.11.3".into(),
            code: Some(1),
        };
        assert_eq!(
            err.to_string(),
            "Error during install CocoaPods 1.11.3 (exit code 1)"
        );
    }

    #[test]
    fn install_failed_without_code_omits_it() {
        let err = PodpinError::InstallFailed {
            version: "1.11.3".into(),
            code: None,
        };
        assert_eq!(err.to_string(), "Error during install CocoaPods 1.11.3");
    }

    #[test]
    fn command_failed_displays_command_and_cause() {
        let err = PodpinError::CommandFailed {
            command: "pod --version".into(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "No such file"),
        };
        assert_eq!(
            err.to_string(),
            "Failed to run 'pod --version': No such file"
        );
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: PodpinError = io_err.into();
        assert!(matches!(err, PodpinError::Io(_)));
    }

    #[test]
    fn anyhow_error_converts() {
        let err: PodpinError = anyhow::anyhow!("boom").into();
        assert_eq!(err.to_string(), "boom");
    }
}
