//! Persisted timestamp of the last completed run

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{Result, SyncError};

/// Persistence for the RunState timestamp.
///
/// Read once when a run starts and written once when it completes; there is
/// no intermediate state.
pub trait RunStateStore {
    /// Timestamp of the last completed run, 0 if there never was one
    fn load(&self) -> Result<i64>;

    fn save(&self, timestamp: i64) -> Result<()>;
}

/// RunState kept as a single decimal Unix timestamp in a text file
#[derive(Debug, Clone)]
pub struct FileRunState {
    path: PathBuf,
}

impl FileRunState {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RunStateStore for FileRunState {
    fn load(&self) -> Result<i64> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(0),
            Err(e) => return Err(SyncError::io(&self.path, e)),
        };

        content.trim().parse().map_err(|e| SyncError::RunState {
            path: self.path.clone(),
            detail: format!("expected a Unix timestamp, got {:?}: {e}", content.trim()),
        })
    }

    fn save(&self, timestamp: i64) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| SyncError::io(parent, e))?;
        }
        fs::write(&self.path, timestamp.to_string()).map_err(|e| SyncError::io(&self.path, e))
    }
}
