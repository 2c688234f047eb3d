//! Server configuration from environment variables.

use std::fmt::{Debug, Display};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use tracing::info;

use crate::network::NetworkCacheConfig;
use crate::planner::RouteConfig;

/// Error from loading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid value {value:?} for {key}: {message}")]
pub struct ConfigError {
    pub key: &'static str,
    pub value: String,
    pub message: String,
}

/// Everything the server binary needs to start.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on.
    pub addr: SocketAddr,

    /// Path to the network snapshot JSON file.
    pub network_path: PathBuf,

    /// Directory served under `/static`.
    pub static_dir: PathBuf,

    /// How long a loaded network is reused.
    pub cache: NetworkCacheConfig,

    /// Route search parameters.
    pub route: RouteConfig,
}

impl ServerConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration using `lookup` to read variables.
    ///
    /// Unset variables take their defaults; set but unparsable ones are errors.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let route_defaults = RouteConfig::default();
        let cache_defaults = NetworkCacheConfig::default();

        let max_depth = load(&lookup, "ROUTE_MAX_DEPTH", route_defaults.max_depth)?;
        if max_depth == 0 {
            return Err(ConfigError {
                key: "ROUTE_MAX_DEPTH",
                value: max_depth.to_string(),
                message: "must be at least 1".to_string(),
            });
        }

        let route = RouteConfig::new(
            load(&lookup, "ROUTE_K", route_defaults.k)?,
            max_depth,
            load(&lookup, "ROUTE_MAX_K", route_defaults.max_k)?,
            load(&lookup, "ROUTE_TIMEOUT_MS", route_defaults.timeout_ms)?,
        );

        let ttl_secs = load(&lookup, "NETWORK_CACHE_TTL_SECS", cache_defaults.ttl.as_secs())?;

        Ok(Self {
            addr: load(&lookup, "ROUTE_SERVER_ADDR", SocketAddr::from(([127, 0, 0, 1], 3000)))?,
            network_path: load(&lookup, "NETWORK_PATH", PathBuf::from("data/network.json"))?,
            static_dir: load(&lookup, "STATIC_DIR", PathBuf::from("static"))?,
            cache: NetworkCacheConfig {
                ttl: Duration::from_secs(ttl_secs),
            },
            route,
        })
    }
}

/// Read and parse one variable, falling back to `default` when unset or blank.
fn load<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError>
where
    T: FromStr + Debug,
    T::Err: Display,
{
    match lookup(key).filter(|v| !v.trim().is_empty()) {
        Some(value) => value.trim().parse().map_err(|e: T::Err| ConfigError {
            key,
            value: value.clone(),
            message: e.to_string(),
        }),
        None => {
            info!("{key} not set, using default: {default:?}");
            Ok(default)
        }
    }
}
