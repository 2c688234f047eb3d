//! Route search configuration.

use std::time::Duration;

/// Configuration parameters for route search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteConfig {
    /// Number of routes returned when a request doesn't ask for a count.
    pub k: usize,

    /// Maximum number of stations in any candidate route.
    /// Candidates that reach this length are abandoned.
    pub max_depth: usize,

    /// Upper bound on a per-request route count.
    pub max_k: usize,

    /// Wall-clock budget for a single search (milliseconds).
    pub timeout_ms: u64,
}

impl RouteConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(k: usize, max_depth: usize, max_k: usize, timeout_ms: u64) -> Self {
        Self {
            k,
            max_depth,
            max_k,
            timeout_ms,
        }
    }

    /// Returns the search timeout as a Duration.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Route count for a request: the override clamped to `max_k`, or `k`.
    pub fn effective_k(&self, requested: Option<usize>) -> usize {
        requested.map_or(self.k, |k| k.min(self.max_k))
    }
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            k: 3,
            max_depth: 50,
            max_k: 10,
            timeout_ms: 2_000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = RouteConfig::default();

        assert_eq!(config.k, 3);
        assert_eq!(config.max_depth, 50);
        assert_eq!(config.max_k, 10);
        assert_eq!(config.timeout_ms, 2_000);
    }

    #[test]
    fn duration_methods() {
        let config = RouteConfig::default();
        assert_eq!(config.timeout(), Duration::from_secs(2));
    }

    #[test]
    fn custom_config() {
        let config = RouteConfig::new(1, 20, 4, 500);

        assert_eq!(config.k, 1);
        assert_eq!(config.max_depth, 20);
        assert_eq!(config.max_k, 4);
        assert_eq!(config.timeout(), Duration::from_millis(500));
    }

    #[test]
    fn effective_k_clamps_overrides() {
        let config = RouteConfig::default();

        assert_eq!(config.effective_k(None), 3);
        assert_eq!(config.effective_k(Some(5)), 5);
        assert_eq!(config.effective_k(Some(0)), 0);
        assert_eq!(config.effective_k(Some(99)), 10);
    }
}
