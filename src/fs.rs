//! Filesystem access.
//!
//! The installer reads manifests through [`FileSystem`] so tests can supply
//! file contents without touching disk.

use std::path::Path;

use crate::error::Result;

/// Read-only view of the filesystem.
pub trait FileSystem {
    /// Whether a regular file exists at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Read the entire file at `path`.
    fn read_all(&self, path: &Path) -> Result<Vec<u8>>;
}

/// [`FileSystem`] backed by `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFileSystem;

impl FileSystem for OsFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn read_all(&self, path: &Path) -> Result<Vec<u8>> {
        Ok(std::fs::read(path)?)
    }
}
