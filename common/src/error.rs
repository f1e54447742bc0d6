use thiserror::Error;

/// Failure to turn a backend response into a catalog snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("invalid snapshot json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to read snapshot: {0}")]
    Io(#[from] std::io::Error),
}
