//! Install command implementation.
//!
//! The `podpin install` command makes the installed CocoaPods match a
//! version given on the command line or read from a Podfile.

use crate::cli::args::InstallArgs;
use crate::error::{PodpinError, Result};
use crate::installer::{resolve_path, CocoapodsInstaller};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The install command implementation.
pub struct InstallCommand<'a> {
    installer: &'a CocoapodsInstaller<'a>,
    args: InstallArgs,
}

impl<'a> InstallCommand<'a> {
    /// Create a new install command.
    pub fn new(installer: &'a CocoapodsInstaller<'a>, args: InstallArgs) -> Self {
        Self { installer, args }
    }

    /// Version requested on the command line or by the Podfile.
    ///
    /// The Podfile line is trimmed here, since a stray space would never
    /// compare equal to `pod --version` output.
    fn requested_version(&self) -> Result<String> {
        if let Some(version) = &self.args.version {
            return Ok(version.clone());
        }

        let Some(podfile) = &self.args.podfile else {
            return Err(anyhow::anyhow!("No version or Podfile given").into());
        };

        let line = self.installer.extract_version_from_manifest(podfile)?;
        let version = line.trim();
        if version.is_empty() {
            return Err(PodpinError::EmptyVersion {
                path: resolve_path(podfile)?,
            });
        }
        tracing::info!("Using CocoaPods {} from {}", version, podfile.display());
        Ok(version.to_string())
    }
}

impl Command for InstallCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let version = self.requested_version()?;
        self.installer.ensure_installed(&version, ui)?;
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ToolConfig;
    use crate::fs::OsFileSystem;
    use crate::shell::{MockResponse, MockRunner};
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    fn runner_with(installed: &str) -> MockRunner {
        let runner = MockRunner::new();
        runner.respond(
            "pod --version",
            MockResponse::exit(0).with_stdout([installed.to_string()]),
        );
        runner.respond("gem", MockResponse::exit(0));
        runner
    }

    #[test]
    fn installs_version_from_argument() {
        let runner = runner_with("1.10.0");
        let installer = CocoapodsInstaller::new(ToolConfig::default(), &runner, &OsFileSystem);
        let cmd = InstallCommand::new(
            &installer,
            InstallArgs {
                version: Some("1.11.3".into()),
                podfile: None,
            },
        );
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert_eq!(result.exit_code, 0);
        assert_eq!(runner.count("gem install cocoapods -v 1.11.3"), 1);
    }

    #[test]
    fn installs_trimmed_version_from_podfile() {
        let temp = TempDir::new().unwrap();
        let podfile = temp.path().join("Podfile");
        fs::write(&podfile, "1.11.3 \r\nplatform :ios, '13.0'\n").unwrap();

        let runner = runner_with("1.11.3");
        let installer = CocoapodsInstaller::new(ToolConfig::default(), &runner, &OsFileSystem);
        let cmd = InstallCommand::new(
            &installer,
            InstallArgs {
                version: None,
                podfile: Some(podfile),
            },
        );
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        assert_eq!(runner.invocations(), ["pod --version"]);
        assert!(ui.has_output("already installed"));
    }

    #[test]
    fn blank_first_line_is_rejected() {
        let temp = TempDir::new().unwrap();
        let podfile = temp.path().join("Podfile");
        fs::write(&podfile, "   \n1.11.3\n").unwrap();

        let runner = runner_with("1.10.0");
        let installer = CocoapodsInstaller::new(ToolConfig::default(), &runner, &OsFileSystem);
        let cmd = InstallCommand::new(
            &installer,
            InstallArgs {
                version: None,
                podfile: Some(podfile),
            },
        );
        let mut ui = MockUI::new();

        let err = cmd.execute(&mut ui).unwrap_err();

        assert!(matches!(err, PodpinError::EmptyVersion { .. }));
        assert!(runner.invocations().is_empty());
    }

    #[test]
    fn missing_podfile_is_reported() {
        let temp = TempDir::new().unwrap();
        let runner = runner_with("1.10.0");
        let installer = CocoapodsInstaller::new(ToolConfig::default(), &runner, &OsFileSystem);
        let cmd = InstallCommand::new(
            &installer,
            InstallArgs {
                version: None,
                podfile: Some(temp.path().join("Podfile")),
            },
        );
        let mut ui = MockUI::new();

        let err = cmd.execute(&mut ui).unwrap_err();

        assert!(matches!(err, PodpinError::ManifestNotFound { .. }));
    }
}
