use std::path::PathBuf;

use thiserror::Error;

/// Write-side failures.
///
/// Read failures never appear here — a missing or corrupt table degrades to
/// an empty history instead of an error.
#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("failed to write history table at {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
