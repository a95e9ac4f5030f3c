//! Error types for loading session data.

use std::path::PathBuf;
use thiserror::Error;

/// Errors emitted while loading a session file.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionError {
    #[error("failed to read session {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to read session from stdin")]
    Stdin(#[source] std::io::Error),
    #[error("invalid session data")]
    Parse(#[from] serde_json::Error),
}

/// Errors emitted while rendering a binary report.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ReportError {
    #[error("failed to render PDF report: {0}")]
    Pdf(String),
}
