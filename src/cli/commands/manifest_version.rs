//! Manifest version command implementation.
//!
//! The `podpin manifest-version` command prints the first line of a
//! Podfile exactly as the installer would read it.

use crate::cli::args::ManifestVersionArgs;
use crate::error::Result;
use crate::installer::CocoapodsInstaller;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The manifest-version command implementation.
pub struct ManifestVersionCommand<'a> {
    installer: &'a CocoapodsInstaller<'a>,
    args: ManifestVersionArgs,
}

impl<'a> ManifestVersionCommand<'a> {
    /// Create a new manifest-version command.
    pub fn new(installer: &'a CocoapodsInstaller<'a>, args: ManifestVersionArgs) -> Self {
        Self { installer, args }
    }
}

impl Command for ManifestVersionCommand<'_> {
    fn execute(&self, _ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let version = self.installer.extract_version_from_manifest(&self.args.path)?;
        // Data output goes straight to stdout so it can be captured by scripts.
        println!("{}", version);
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ToolConfig;
    use crate::error::PodpinError;
    use crate::fs::OsFileSystem;
    use crate::shell::MockRunner;
    use crate::ui::MockUI;
    use tempfile::TempDir;

    #[test]
    fn reads_existing_manifest() {
        let temp = TempDir::new().unwrap();
        let podfile = temp.path().join("Podfile");
        std::fs::write(&podfile, "1.11.3\nplatform :ios\n").unwrap();

        let runner = MockRunner::new();
        let installer = CocoapodsInstaller::new(ToolConfig::default(), &runner, &OsFileSystem);
        let cmd = ManifestVersionCommand::new(&installer, ManifestVersionArgs { path: podfile });
        let mut ui = MockUI::new();

        assert_eq!(cmd.execute(&mut ui).unwrap().exit_code, 0);
        assert!(runner.invocations().is_empty());
    }

    #[test]
    fn missing_manifest_is_an_error() {
        let temp = TempDir::new().unwrap();
        let runner = MockRunner::new();
        let installer = CocoapodsInstaller::new(ToolConfig::default(), &runner, &OsFileSystem);
        let cmd = ManifestVersionCommand::new(
            &installer,
            ManifestVersionArgs {
                path: temp.path().join("Podfile"),
            },
        );
        let mut ui = MockUI::new();

        let err = cmd.execute(&mut ui).unwrap_err();
        assert!(matches!(err, PodpinError::ManifestNotFound { .. }));
    }
}
