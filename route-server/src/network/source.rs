//! Where network snapshots come from.

use std::future::Future;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::error::NetworkError;
use super::snapshot::NetworkSnapshot;

/// Trait for loading network snapshots.
///
/// This abstraction allows the server to be tested with in-memory data.
pub trait NetworkSource {
    /// Load the current snapshot.
    fn load(&self) -> impl Future<Output = Result<NetworkSnapshot, NetworkError>> + Send;
}

/// Loads a snapshot from a JSON file on every call.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    /// Create a source reading from `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file this source reads.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl NetworkSource for JsonFileSource {
    async fn load(&self) -> Result<NetworkSnapshot, NetworkError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|source| NetworkError::Io {
                path: self.path.clone(),
                source,
            })?;

        debug!(path = %self.path.display(), bytes = bytes.len(), "read network snapshot");

        serde_json::from_slice(&bytes).map_err(|source| NetworkError::Json {
            path: self.path.clone(),
            source,
        })
    }
}

/// Serves a fixed snapshot held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    snapshot: NetworkSnapshot,
}

impl MemorySource {
    pub fn new(snapshot: NetworkSnapshot) -> Self {
        Self { snapshot }
    }
}

impl NetworkSource for MemorySource {
    async fn load(&self) -> Result<NetworkSnapshot, NetworkError> {
        Ok(self.snapshot.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SNAPSHOT: &str = r#"{
        "connections": [
            { "from_station_id": "AG1", "to_station_id": "AG2", "connection_type": "ride" }
        ]
    }"#;

    #[tokio::test]
    async fn json_file_loads() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SNAPSHOT.as_bytes()).unwrap();

        let source = JsonFileSource::new(file.path());
        let snapshot = source.load().await.unwrap();

        assert_eq!(snapshot.connections.len(), 1);
        assert_eq!(snapshot.connections[0].to_station_id, "AG2");
    }

    #[tokio::test]
    async fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = JsonFileSource::new(dir.path().join("absent.json"));

        let err = source.load().await.unwrap_err();
        assert!(matches!(err, NetworkError::Io { .. }));
    }

    #[tokio::test]
    async fn malformed_file_is_json_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{ not json").unwrap();

        let source = JsonFileSource::new(file.path());
        let err = source.load().await.unwrap_err();
        assert!(matches!(err, NetworkError::Json { .. }));
        assert!(err.to_string().starts_with("failed to parse network snapshot"));
    }

    #[tokio::test]
    async fn memory_source_returns_snapshot() {
        let snapshot: NetworkSnapshot = serde_json::from_str(SNAPSHOT).unwrap();
        let source = MemorySource::new(snapshot.clone());

        assert_eq!(source.load().await.unwrap(), snapshot);
    }
}
