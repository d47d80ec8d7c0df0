//! File helpers shared by the batch tools.
//!
//! Every rewrite goes through a temporary file created next to the target and
//! renamed over it, so an interrupted run leaves either the old or the new
//! content on disk, never a truncated file.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::{GuardError, Result};

/// Reads a file to a string, attaching the path to any error.
pub(crate) fn read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| GuardError::io("read", path, e))
}

/// Replaces the contents of `path` with `contents` via rename-into-place.
pub(crate) fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp =
        NamedTempFile::new_in(dir).map_err(|e| GuardError::io("create temp file in", dir, e))?;
    tmp.write_all(contents.as_bytes())
        .map_err(|e| GuardError::io("write", tmp.path(), e))?;

    // Temp files are created 0600; keep whatever mode the target had.
    if let Ok(meta) = std::fs::metadata(path) {
        tmp.as_file()
            .set_permissions(meta.permissions())
            .map_err(|e| GuardError::io("set permissions on", tmp.path(), e))?;
    }

    tmp.persist(path)
        .map_err(|e| GuardError::io("replace", path, e.error))?;
    Ok(())
}
