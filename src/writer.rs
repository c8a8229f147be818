//! Atomic artifact writer
//!
//! Each artifact is written to a temp file in its destination directory and
//! renamed into place, so readers never observe a half-written header.

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::error::AcsymResult;
use crate::models::hash_content;

/// What happened to one artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// Content changed (or file was new) and was written
    Written,
    /// Existing file already had identical content
    Unchanged,
}

/// Write content to a file atomically
///
/// Uses tempfile + rename. Parent directories are created as needed.
pub fn atomic_write(path: &Path, content: &[u8]) -> AcsymResult<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)?;

    let mut tmp = NamedTempFile::new_in(parent)?;
    tmp.write_all(content)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Compute the `sha256:` hash of a file on disk
pub fn hash_file(path: &Path) -> AcsymResult<String> {
    let content = fs::read(path)?;
    Ok(hash_content(&content))
}

/// Replace `path` with `content` unless it already holds exactly that
pub fn write_if_changed(path: &Path, content: &str) -> AcsymResult<WriteOutcome> {
    if path.is_file() && hash_file(path)? == hash_content(content.as_bytes()) {
        debug!(path = %path.display(), "output unchanged");
        return Ok(WriteOutcome::Unchanged);
    }

    atomic_write(path, content.as_bytes())?;
    info!(path = %path.display(), bytes = content.len(), "wrote output");
    Ok(WriteOutcome::Written)
}
