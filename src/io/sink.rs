//! Artifact output
//!
//! The export passes only ever reset a root directory, make sure a directory
//! exists, and write whole text files. [`DirectorySink`] does that on the
//! local filesystem.

use crate::core::errors::{FontCostumeError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;

/// Where generated artifacts go
pub trait ArtifactSink {
    /// Remove `root` with everything below it, then recreate it empty
    fn reset(&self, root: &Path) -> Result<()>;

    /// Create `path` and any missing parents
    fn ensure_dir(&self, path: &Path) -> Result<()>;

    /// Create or overwrite the file at `path`
    fn write_text(&self, path: &Path, content: &str) -> Result<()>;
}

/// Writes artifacts to the local filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectorySink;

impl ArtifactSink for DirectorySink {
    fn reset(&self, root: &Path) -> Result<()> {
        match fs::remove_dir_all(root) {
            Ok(()) => debug!("Removed previous output at {:?}", root),
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => return Err(FontCostumeError::io(root, e)),
        }
        self.ensure_dir(root)
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        fs::create_dir_all(path).map_err(|e| FontCostumeError::io(path, e))
    }

    fn write_text(&self, path: &Path, content: &str) -> Result<()> {
        fs::write(path, content).map_err(|e| FontCostumeError::io(path, e))
    }
}

/// Join `stem` and `extension` into a single path component.
///
/// Fails when the stem would create or escape into another directory.
pub fn file_name(stem: &str, extension: &str) -> Result<String> {
    if stem.is_empty() || stem.chars().any(|c| std::path::is_separator(c) || c == '\0') {
        return Err(FontCostumeError::UnsafeFilename {
            name: stem.to_string(),
        });
    }
    Ok(format!("{stem}.{extension}"))
}
