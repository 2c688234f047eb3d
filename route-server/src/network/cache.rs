//! Caching layer for the built network.
//!
//! Building the network means reading and validating the whole snapshot, so
//! the result is kept for a configurable TTL and shared between requests.
//! After expiry the next request rebuilds it from the source, which picks up
//! edits to the snapshot without a restart.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;
use tracing::info;

use super::build::Network;
use super::error::NetworkError;
use super::source::NetworkSource;

/// Configuration for the network cache.
#[derive(Debug, Clone)]
pub struct NetworkCacheConfig {
    /// How long a built network is reused before reloading.
    pub ttl: Duration,
}

impl Default for NetworkCacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(300),
        }
    }
}

/// Network source with a single-entry TTL cache in front of it.
pub struct NetworkCache<S> {
    source: S,
    /// Only one key exists: the current network.
    cache: MokaCache<(), Arc<Network>>,
}

impl<S: NetworkSource + Send + Sync> NetworkCache<S> {
    /// Create a new cache over `source`.
    pub fn new(source: S, config: &NetworkCacheConfig) -> Self {
        let cache = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(1)
            .build();

        Self { source, cache }
    }

    /// Get the current network, loading and building it if needed.
    ///
    /// Concurrent callers share a single load. Failed loads are not cached.
    pub async fn get(&self) -> Result<Arc<Network>, NetworkError> {
        self.cache
            .try_get_with((), async {
                let snapshot = self.source.load().await?;
                let network = Network::build(snapshot);
                info!(
                    stations = network.graph().station_count(),
                    edges = network.graph().edge_count(),
                    "network loaded"
                );
                Ok::<_, NetworkError>(Arc::new(network))
            })
            .await
            .map_err(NetworkError::Shared)
    }

    /// Drop the cached network so the next `get` reloads it.
    pub fn invalidate(&self) {
        self.cache.invalidate_all();
    }

    /// Access the underlying source.
    pub fn source(&self) -> &S {
        &self.source
    }
}
