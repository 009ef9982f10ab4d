use std::path::PathBuf;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("Root directory does not exist: {}", path.display())]
    InvalidRoot { path: PathBuf },
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid pattern: {0}")]
    Pattern(String),
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}
impl SnapshotError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SnapshotError::Io {
            path: path.into(),
            source,
        }
    }
}
