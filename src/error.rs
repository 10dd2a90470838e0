use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by a translation run
#[derive(Debug, Error)]
pub enum SyncError {
    /// Missing credential or invalid option; fatal before any work starts
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The translation backend rejected or failed a request
    #[error("translation backend error: {detail}")]
    Backend {
        status: Option<u16>,
        detail: String,
    },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Persisted run-state file exists but cannot be parsed
    #[error("invalid run state in {}: {detail}", path.display())]
    RunState { path: PathBuf, detail: String },
}

impl SyncError {
    pub fn backend(detail: impl Into<String>) -> Self {
        SyncError::Backend {
            status: None,
            detail: detail.into(),
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SyncError::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether this error only affects the document being processed.
    ///
    /// Backend and per-file I/O failures are contained to one document;
    /// configuration and run-state errors abort the run.
    pub fn is_document_scoped(&self) -> bool {
        matches!(self, SyncError::Backend { .. } | SyncError::Io { .. })
    }
}

pub type Result<T, E = SyncError> = std::result::Result<T, E>;
