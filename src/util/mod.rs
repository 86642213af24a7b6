//! Shared utilities.
//!
//! Currently just atomic file writes, used by the state store and the
//! configuration module to avoid torn files on crash.

use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::{GlyphError, Result};

/// Atomically write content to a file.
///
/// Writes to a temporary file in the same directory, flushes it, then
/// atomically renames it over the target path. If any step fails, the
/// original file (if it exists) remains unchanged. Parent directories are
/// created as needed.
pub fn atomic_write(path: impl AsRef<Path>, content: &[u8]) -> Result<()> {
    let path = path.as_ref();

    let parent = path.parent().ok_or_else(|| GlyphError::IoError {
        context: format!("Cannot determine parent directory for: {}", path.display()),
        source: io::Error::new(io::ErrorKind::InvalidInput, "No parent directory"),
    })?;

    if !parent.exists() {
        std::fs::create_dir_all(parent).map_err(|e| {
            GlyphError::io(
                format!("Failed to create directory: {}", parent.display()),
                e,
            )
        })?;
    }

    // Temp file in the same directory so the rename stays on one filesystem.
    let mut temp_file = NamedTempFile::new_in(parent).map_err(|e| {
        GlyphError::io(
            format!("Failed to create temporary file in: {}", parent.display()),
            e,
        )
    })?;

    temp_file.write_all(content).map_err(|e| {
        GlyphError::io(
            format!("Failed to write to temporary file for: {}", path.display()),
            e,
        )
    })?;

    temp_file.flush().map_err(|e| {
        GlyphError::io(
            format!("Failed to flush temporary file for: {}", path.display()),
            e,
        )
    })?;

    temp_file.persist(path).map_err(|e| {
        GlyphError::io(
            format!("Failed to atomically write file: {}", path.display()),
            e.error,
        )
    })?;

    Ok(())
}
