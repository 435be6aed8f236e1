//! Point-in-time snapshot of the Chrome history store.
//!
//! Chrome holds an exclusive lock on its `History` database while running,
//! so the store is never opened in place. Instead each invocation copies it
//! into a uniquely-named temporary directory and queries the copy.
//!
//! Cleanup is tied to the [`Snapshot`] value: dropping it removes the
//! directory on every exit path, and [`Snapshot::close`] does the same while
//! reporting removal failures to the caller.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tempfile::{Builder, TempDir};

use crate::types::errors::HistoryError;

/// File name of the copied store inside the temporary directory.
const SNAPSHOT_FILE_NAME: &str = "History";

/// Prefix for the snapshot's temporary directory, so stray directories are
/// attributable if a process is killed before cleanup.
const SNAPSHOT_DIR_PREFIX: &str = "chromehist-";

/// A transient copy of the history store, owned by one invocation.
#[derive(Debug)]
pub struct Snapshot {
    dir: TempDir,
    file: PathBuf,
}

impl Snapshot {
    /// Copies `source` into a fresh temporary directory under the system
    /// temp dir. The caller must have verified that `source` exists.
    ///
    /// On copy failure the directory is removed before the error is
    /// returned, so no partial snapshot outlives the call.
    pub fn acquire(source: &Path) -> Result<Self, HistoryError> {
        Self::acquire_in(source, &std::env::temp_dir())
    }

    /// Same as [`Snapshot::acquire`], with an explicit parent directory for
    /// the temporary directory.
    pub fn acquire_in(source: &Path, parent: &Path) -> Result<Self, HistoryError> {
        let dir = Builder::new()
            .prefix(SNAPSHOT_DIR_PREFIX)
            .tempdir_in(parent)
            .map_err(|e| HistoryError::Snapshot(e.to_string()))?;
        let file = dir.path().join(SNAPSHOT_FILE_NAME);
        fs::copy(source, &file).map_err(|e| HistoryError::Snapshot(e.to_string()))?;
        Ok(Self { dir, file })
    }

    /// Path of the copied store file.
    pub fn path(&self) -> &Path {
        &self.file
    }

    /// Removes the temporary directory, surfacing any I/O failure.
    /// Dropping the snapshot removes it too, but silently.
    pub fn close(self) -> io::Result<()> {
        self.dir.close()
    }
}
