use crate::error::{RexError, Result};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Created,
    Overwritten,
}

impl WriteOutcome {
    pub fn verb(&self) -> &'static str {
        match self {
            WriteOutcome::Created => "Created",
            WriteOutcome::Overwritten => "Overwrote",
        }
    }
}

/// Check whether `path` may be written.
///
/// An existing file is only replaced when `force` is set; otherwise the error built by
/// `on_exists` is returned. This is an existence check, not a lock.
pub fn ensure_writable(
    path: &Path,
    force: bool,
    on_exists: impl FnOnce(PathBuf) -> RexError,
) -> Result<WriteOutcome> {
    if !path.is_file() {
        return Ok(WriteOutcome::Created);
    }
    if force {
        return Ok(WriteOutcome::Overwritten);
    }
    Err(on_exists(path.to_path_buf()))
}

/// The one write path for every overwrite-protected file.
pub fn write_if_absent_or_forced(
    path: &Path,
    contents: &[u8],
    force: bool,
    on_exists: impl FnOnce(PathBuf) -> RexError,
) -> Result<WriteOutcome> {
    let outcome = ensure_writable(path, force, on_exists)?;
    fs::write(path, contents).map_err(|source| RexError::FileCreate {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), ?outcome, "wrote file");
    Ok(outcome)
}

/// Create `path` and its parents. An existing directory is fine.
pub fn ensure_dir(path: &Path) -> Result<()> {
    match fs::create_dir_all(path) {
        Ok(()) => {
            debug!(path = %path.display(), "directory ready");
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists && path.is_dir() => Ok(()),
        Err(e) => Err(RexError::Io(e)),
    }
}
