//! Version extraction from a project manifest.
//!
//! Only the first line of the manifest is read, and it is taken literally
//! as the version. Line endings are handled the same on every host: a line
//! ends at `\n` and a `\r` right before it is dropped, so a manifest
//! committed with CRLF endings reads the same on macOS and Windows.

use std::path::{Component, Path, PathBuf};

use crate::error::{PodpinError, Result};
use crate::fs::FileSystem;

/// Resolve `path` to an absolute, lexically normalized path.
///
/// Relative paths are joined onto the current working directory. `.` and
/// `..` components are folded without touching the filesystem, so the
/// result is meaningful even when the file does not exist.
pub fn resolve_path(path: &Path) -> Result<PathBuf> {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()?.join(path)
    };
    Ok(normalize(&joined))
}

fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // `pop` refuses to remove the root, matching `/..` == `/`.
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// First line of `content`, without its line terminator.
///
/// Whitespace inside the line is preserved. Content without any newline is
/// returned whole.
pub fn first_line(content: &str) -> &str {
    let line = content.split('\n').next().unwrap_or_default();
    line.strip_suffix('\r').unwrap_or(line)
}

/// Read the desired version from the first line of the manifest at `path`.
///
/// Fails with [`PodpinError::ManifestNotFound`] carrying the resolved
/// absolute path when no file exists there. The line is returned verbatim.
pub fn extract_version_from_manifest(fs: &dyn FileSystem, path: &Path) -> Result<String> {
    let absolute = resolve_path(path)?;

    if !fs.exists(&absolute) {
        return Err(PodpinError::ManifestNotFound { path: absolute });
    }

    let bytes = fs.read_all(&absolute)?;
    let content = String::from_utf8_lossy(&bytes);
    let version = first_line(&content).to_string();

    tracing::debug!(
        "Read version '{}' from {}",
        version,
        absolute.display()
    );

    Ok(version)
}
