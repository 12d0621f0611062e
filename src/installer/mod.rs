//! Tool installation.
//!
//! - [`cocoapods`] - version check, uninstall and install of CocoaPods
//! - [`manifest`] - desired version from a manifest's first line

pub mod cocoapods;
pub mod manifest;

pub use cocoapods::{CocoapodsInstaller, UninstallOutcome};
pub use manifest::{extract_version_from_manifest, first_line, resolve_path};
