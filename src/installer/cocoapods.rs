//! CocoaPods version pinning.
//!
//! [`CocoapodsInstaller`] makes the installed CocoaPods match a requested
//! version: it asks `pod --version`, and on a mismatch removes every
//! installed version through `gem` before installing the requested one.
//!
//! # Example
//!
//! ```
//! use podpin::config::ToolConfig;
//! use podpin::fs::OsFileSystem;
//! use podpin::installer::CocoapodsInstaller;
//! use podpin::shell::{MockResponse, MockRunner};
//! use podpin::ui::MockUI;
//!
//! let runner = MockRunner::new();
//! runner.respond("pod --version", MockResponse::exit(0).with_stdout(["1.11.3\n"]));
//!
//! let installer = CocoapodsInstaller::new(ToolConfig::default(), &runner, &OsFileSystem);
//! let mut ui = MockUI::new();
//! installer.ensure_installed("1.11.3", &mut ui).unwrap();
//! assert_eq!(runner.invocations(), ["pod --version"]);
//! ```

use std::path::Path;

use crate::config::ToolConfig;
use crate::error::{PodpinError, Result};
use crate::fs::FileSystem;
use crate::shell::{command_line, ProcessRunner};
use crate::ui::UserInterface;

use super::manifest;

/// Result of the best-effort uninstall step.
///
/// The uninstall never fails the install, so this is not an error type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UninstallOutcome {
    /// `gem uninstall` exited successfully.
    Removed,
    /// `gem uninstall` ran but exited non-zero (or was killed).
    Failed { code: Option<i32> },
    /// `gem uninstall` could not be run at all.
    NotRun { message: String },
}

impl UninstallOutcome {
    /// Whether the existing installation was removed.
    pub fn is_removed(&self) -> bool {
        matches!(self, Self::Removed)
    }
}

/// Installs a pinned CocoaPods version.
pub struct CocoapodsInstaller<'a> {
    config: ToolConfig,
    runner: &'a dyn ProcessRunner,
    fs: &'a dyn FileSystem,
}

impl<'a> CocoapodsInstaller<'a> {
    /// Create an installer driving the executables named in `config`.
    pub fn new(config: ToolConfig, runner: &'a dyn ProcessRunner, fs: &'a dyn FileSystem) -> Self {
        Self { config, runner, fs }
    }

    /// Make sure CocoaPods `version` is the installed version.
    ///
    /// Versions are compared as exact strings. On a mismatch the existing
    /// installation is removed (failures there are reported and ignored)
    /// and `version` is installed. An install that exits non-zero, or that
    /// cannot be started, fails with [`PodpinError::InstallFailed`].
    pub fn ensure_installed(&self, version: &str, ui: &mut dyn UserInterface) -> Result<()> {
        let installed = self.installed_version();
        tracing::debug!(
            "Installed CocoaPods: {:?}, requested: {}",
            installed,
            version
        );

        if installed.as_deref() == Some(version) {
            ui.message(&format!(
                "CocoaPods {} is already installed. Not needed to re-install.",
                version
            ));
            return Ok(());
        }

        let outcome = self.uninstall_existing(ui);
        tracing::debug!("Uninstall outcome: {:?}", outcome);

        self.install(version, ui)?;

        ui.success(&format!("CocoaPods {} has installed successfully", version));
        Ok(())
    }

    /// Currently installed CocoaPods version, if any.
    ///
    /// Returns the trimmed output of `pod --version` when it exits 0 with
    /// non-empty output. Any other outcome, including a missing `pod`
    /// executable, is `None`.
    pub fn installed_version(&self) -> Option<String> {
        let args = self.config.version_args();
        let mut stdout = Vec::new();
        let mut collect = |chunk: &[u8]| stdout.extend_from_slice(chunk);

        let code = match self
            .runner
            .execute(&self.config.pod, &args, Some(&mut collect))
        {
            Ok(code) => code,
            Err(e) => {
                tracing::debug!("Version query failed: {}", e);
                return None;
            }
        };

        if code != Some(0) {
            tracing::debug!(
                "{} exited with {:?}",
                command_line(&self.config.pod, &args),
                code
            );
            return None;
        }

        let text = String::from_utf8_lossy(&stdout);
        if text.is_empty() {
            return None;
        }
        Some(text.trim().to_string())
    }

    /// Remove every installed CocoaPods version and its executables.
    ///
    /// Best effort: failures are reported through `ui` and returned as an
    /// [`UninstallOutcome`], never as an error.
    pub fn uninstall_existing(&self, ui: &mut dyn UserInterface) -> UninstallOutcome {
        let args = self.config.uninstall_args();

        let outcome = match self.run_gem(ui, &args) {
            Ok(Some(0)) => UninstallOutcome::Removed,
            Ok(code) => UninstallOutcome::Failed { code },
            Err(e) => UninstallOutcome::NotRun {
                message: e.to_string(),
            },
        };

        if !outcome.is_removed() {
            ui.message("Error during deleting existing version of cocoapods");
        }
        outcome
    }

    fn install(&self, version: &str, ui: &mut dyn UserInterface) -> Result<()> {
        let args = self.config.install_args(version);

        let code = self.run_gem(ui, &args).map_err(|e| {
            tracing::debug!("Install could not run: {}", e);
            PodpinError::InstallFailed {
                version: version.to_string(),
                code: None,
            }
        })?;

        if code != Some(0) {
            return Err(PodpinError::InstallFailed {
                version: version.to_string(),
                code,
            });
        }
        Ok(())
    }

    /// Read the desired version from the first line of a manifest.
    pub fn extract_version_from_manifest(&self, path: &Path) -> Result<String> {
        manifest::extract_version_from_manifest(self.fs, path)
    }

    /// Run the package manager. Its stdout is swallowed in quiet mode.
    fn run_gem(&self, ui: &mut dyn UserInterface, args: &[String]) -> Result<Option<i32>> {
        let mode = ui.output_mode();
        if mode.shows_detail() {
            ui.message(&format!("[command]{}", command_line(&self.config.gem, args)));
        }

        if mode.shows_command_output() {
            self.runner.execute(&self.config.gem, args, None)
        } else {
            let mut discard = |_: &[u8]| {};
            self.runner.execute(&self.config.gem, args, Some(&mut discard))
        }
    }
}
