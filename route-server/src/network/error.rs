//! Network loading error types.

use std::path::PathBuf;
use std::sync::Arc;

/// Errors that can occur while loading the network snapshot.
#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    /// Snapshot file could not be read
    #[error("failed to read network snapshot {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Snapshot file is not valid JSON for the expected shape
    #[error("failed to parse network snapshot {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A load shared between concurrent callers failed
    #[error(transparent)]
    Shared(Arc<NetworkError>),
}
