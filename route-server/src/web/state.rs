//! Application state for the web layer.

use std::sync::Arc;

use crate::network::{JsonFileSource, NetworkCache};
use crate::planner::RouteConfig;

/// Shared application state.
///
/// Contains the network cache and search configuration needed to handle
/// requests. Generic over the snapshot source so tests can serve in-memory
/// networks.
pub struct AppState<S = JsonFileSource> {
    /// Cached, lazily rebuilt network
    pub network: Arc<NetworkCache<S>>,

    /// Route search configuration
    pub config: Arc<RouteConfig>,
}

impl<S> AppState<S> {
    /// Create a new app state.
    pub fn new(network: NetworkCache<S>, config: RouteConfig) -> Self {
        Self {
            network: Arc::new(network),
            config: Arc::new(config),
        }
    }
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            network: Arc::clone(&self.network),
            config: Arc::clone(&self.config),
        }
    }
}
