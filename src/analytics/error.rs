//! Snapshot error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors while obtaining an analytics snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("IO error when reading snapshot `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("snapshot is not valid JSON or has an unexpected shape")]
    Json(#[from] serde_json::Error),

    #[error("analytics source failed: {0}")]
    Source(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_snapshot_error_display() {
        let err = SnapshotError::Io(
            PathBuf::from("analytics.json"),
            Error::new(ErrorKind::NotFound, "missing"),
        );
        let display = format!("{err}");
        assert!(display.contains("IO error"));
        assert!(display.contains("analytics.json"));

        let err = SnapshotError::Source("quota exceeded".to_string());
        assert!(format!("{err}").contains("quota exceeded"));
    }
}
