//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::config::ToolConfig;

/// podpin - Pin the installed CocoaPods version before a build.
#[derive(Debug, Parser)]
#[command(name = "podpin")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// RubyGems executable used to install and uninstall CocoaPods
    #[arg(long, global = true, env = "PODPIN_GEM", default_value = "gem")]
    pub gem: String,

    /// CocoaPods executable queried for the installed version
    #[arg(long, global = true, env = "PODPIN_POD", default_value = "pod")]
    pub pod: String,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Tool configuration selected by the global flags.
    pub fn tool_config(&self) -> ToolConfig {
        ToolConfig::default()
            .with_gem(self.gem.clone())
            .with_pod(self.pod.clone())
    }
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Install a CocoaPods version unless it is already installed
    Install(InstallArgs),

    /// Show the installed CocoaPods version
    Status(StatusArgs),

    /// Print the version on the first line of a Podfile
    ManifestVersion(ManifestVersionArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `install` command.
#[derive(Debug, Clone, clap::Args)]
pub struct InstallArgs {
    /// Version to install, e.g. 1.11.3
    #[arg(id = "version_spec", value_name = "VERSION", required_unless_present = "podfile")]
    pub version: Option<String>,

    /// Read the version from the first line of this file instead
    #[arg(long, conflicts_with = "version_spec")]
    pub podfile: Option<PathBuf>,
}

/// Arguments for the `status` command.
#[derive(Debug, Clone, clap::Args)]
pub struct StatusArgs {
    /// Fail unless exactly this version is installed
    #[arg(long)]
    pub expect: Option<String>,
}

/// Arguments for the `manifest-version` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ManifestVersionArgs {
    /// Path to the manifest
    pub path: PathBuf,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_install_with_version() {
        let cli = Cli::try_parse_from(["podpin", "install", "1.11.3"]).unwrap();
        match cli.command {
            Commands::Install(args) => {
                assert_eq!(args.version.as_deref(), Some("1.11.3"));
                assert!(args.podfile.is_none());
            }
            other => panic!("Expected Install, got {:?}", other),
        }
    }

    #[test]
    fn parses_install_with_podfile() {
        let cli = Cli::try_parse_from(["podpin", "install", "--podfile", "ios/Podfile"]).unwrap();
        match cli.command {
            Commands::Install(args) => {
                assert!(args.version.is_none());
                assert_eq!(args.podfile, Some(PathBuf::from("ios/Podfile")));
            }
            other => panic!("Expected Install, got {:?}", other),
        }
    }

    #[test]
    fn install_requires_version_or_podfile() {
        assert!(Cli::try_parse_from(["podpin", "install"]).is_err());
    }

    #[test]
    fn install_rejects_version_and_podfile_together() {
        assert!(
            Cli::try_parse_from(["podpin", "install", "1.11.3", "--podfile", "Podfile"]).is_err()
        );
    }

    #[test]
    fn global_executable_overrides() {
        let cli = Cli::try_parse_from([
            "podpin",
            "status",
            "--gem",
            "/opt/bin/gem",
            "--pod",
            "/opt/bin/pod",
        ])
        .unwrap();
        let config = cli.tool_config();
        assert_eq!(config.gem, "/opt/bin/gem");
        assert_eq!(config.pod, "/opt/bin/pod");
        assert_eq!(config.gem_name, "cocoapods");
    }

    #[test]
    fn parses_status_expect() {
        let cli = Cli::try_parse_from(["podpin", "status", "--expect", "1.11.3"]).unwrap();
        match cli.command {
            Commands::Status(args) => assert_eq!(args.expect.as_deref(), Some("1.11.3")),
            other => panic!("Expected Status, got {:?}", other),
        }
    }

    #[test]
    fn install_still_accepts_version_flag() {
        let err = Cli::try_parse_from(["podpin", "install", "--version"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn parses_quiet_flag() {
        let cli = Cli::try_parse_from(["podpin", "--quiet", "install", "1.11.3"]).unwrap();
        assert!(cli.quiet);
    }

    #[test]
    fn parses_manifest_version() {
        let cli = Cli::try_parse_from(["podpin", "manifest-version", "Podfile"]).unwrap();
        assert!(matches!(cli.command, Commands::ManifestVersion(_)));
    }
}
