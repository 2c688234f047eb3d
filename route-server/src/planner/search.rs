//! Route search over a built network.
//!
//! Wraps the k-shortest BFS with request validation, route annotation and
//! a wall-clock bound for use from request handlers.

use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use crate::domain::StationId;
use crate::network::Network;

use super::annotate::{AnnotatedRoute, annotate_route};
use super::bfs::find_k_shortest_routes;
use super::config::RouteConfig;

/// Error from route search.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SearchError {
    /// Invalid search request
    #[error("invalid search request: {0}")]
    InvalidRequest(String),

    /// Search did not finish within its time budget
    #[error("search timed out after {0:?}")]
    Timeout(Duration),

    /// The search worker failed
    #[error("search failed: {0}")]
    Internal(String),
}

/// Request for a route search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRequest {
    /// Origin station.
    pub from: StationId,

    /// Destination station.
    pub to: StationId,

    /// Requested number of routes; the configured default when `None`.
    pub k: Option<usize>,
}

impl RouteRequest {
    /// Create a new request between two stations.
    pub fn new(from: StationId, to: StationId) -> Self {
        Self { from, to, k: None }
    }

    /// Parse a request from raw station ids, normalizing them.
    ///
    /// Blank ids are rejected. Ids that parse but are not in the network are
    /// accepted here and simply yield no routes.
    pub fn parse(from: &str, to: &str) -> Result<Self, SearchError> {
        let from = StationId::parse_normalized(from).map_err(|e| {
            SearchError::InvalidRequest(format!("missing or invalid 'from' station: {e}"))
        })?;
        let to = StationId::parse_normalized(to).map_err(|e| {
            SearchError::InvalidRequest(format!("missing or invalid 'to' station: {e}"))
        })?;
        Ok(Self::new(from, to))
    }

    /// Ask for a specific number of routes.
    pub fn with_k(mut self, k: usize) -> Self {
        self.k = Some(k);
        self
    }
}

/// Result of a route search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteResult {
    pub from: StationId,
    pub to: StationId,

    /// Found routes in discovery order, all of the same length.
    pub routes: Vec<AnnotatedRoute>,
}

impl RouteResult {
    /// Hop count of the first route, if any were found.
    pub fn distance(&self) -> Option<usize> {
        self.routes.first().map(AnnotatedRoute::distance)
    }

    /// Returns true if no route was found.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

/// Route finder over a network.
pub struct RouteFinder<'a> {
    config: &'a RouteConfig,
}

impl<'a> RouteFinder<'a> {
    /// Create a new finder.
    pub fn new(config: &'a RouteConfig) -> Self {
        Self { config }
    }

    /// Find and annotate the shortest routes for a request.
    pub fn search(&self, network: &Network, request: &RouteRequest) -> RouteResult {
        for station in [&request.from, &request.to] {
            if !network.graph().contains_station(station) {
                debug!(station = %station, "station has no connections");
            }
        }

        let k = self.config.effective_k(request.k);
        let routes = find_k_shortest_routes(
            network.graph(),
            &request.from,
            &request.to,
            k,
            self.config.max_depth,
        );

        let routes: Vec<AnnotatedRoute> = routes
            .iter()
            .map(|route| annotate_route(route, network.edges()))
            .collect();

        debug!(
            from = %request.from,
            to = %request.to,
            k,
            found = routes.len(),
            "route search"
        );

        RouteResult {
            from: request.from.clone(),
            to: request.to.clone(),
            routes,
        }
    }
}

/// Run a route search on the blocking pool, bounded by the configured timeout.
///
/// On timeout the caller gets `SearchError::Timeout` straight away; the
/// worker itself still runs to completion, bounded by `max_depth`.
pub async fn search_with_timeout(
    network: Arc<Network>,
    request: RouteRequest,
    config: Arc<RouteConfig>,
) -> Result<RouteResult, SearchError> {
    let timeout = config.timeout();
    run_bounded(timeout, move || {
        RouteFinder::new(&config).search(&network, &request)
    })
    .await
}

/// Run `work` on the blocking pool and wait at most `timeout` for it.
async fn run_bounded<T, F>(timeout: Duration, work: F) -> Result<T, SearchError>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    let handle = tokio::task::spawn_blocking(work);
    match tokio::time::timeout(timeout, handle).await {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(join_error)) => Err(SearchError::Internal(join_error.to_string())),
        Err(_) => Err(SearchError::Timeout(timeout)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ConnectionType;
    use crate::network::NetworkSnapshot;

    fn id(s: &str) -> StationId {
        StationId::parse(s).unwrap()
    }

    /// Two lines crossing at an interchange, plus a parallel branch:
    ///
    /// ```text
    /// AG5 - AG6 - AG7 = KJ13 - KJ12
    ///         \               /
    ///          SP6 - SP7 - SP8
    /// ```
    fn network() -> Network {
        let snapshot: NetworkSnapshot = serde_json::from_str(
            r##"{
            "lines": [
                { "line_id": "AG", "line_name": "Ampang", "line_colour_hex": "#E57200" },
                { "line_id": "KJ", "line_name": "Kelana Jaya", "line_colour_hex": "#E0115F" },
                { "line_id": "SP", "line_name": "Sri Petaling", "line_colour_hex": "#76232F" }
            ],
            "station_lines": [
                { "station_id": "AG5", "line_id": "AG", "sequence_on_line": 5 },
                { "station_id": "AG6", "line_id": "AG", "sequence_on_line": 6 },
                { "station_id": "AG6", "line_id": "SP", "sequence_on_line": 5 },
                { "station_id": "AG7", "line_id": "AG", "sequence_on_line": 7 },
                { "station_id": "KJ13", "line_id": "KJ", "sequence_on_line": 13 },
                { "station_id": "KJ12", "line_id": "KJ", "sequence_on_line": 12 },
                { "station_id": "SP6", "line_id": "SP", "sequence_on_line": 6 },
                { "station_id": "SP7", "line_id": "SP", "sequence_on_line": 7 },
                { "station_id": "SP8", "line_id": "SP", "sequence_on_line": 8 }
            ],
            "connections": [
                { "from_station_id": "AG5", "to_station_id": "AG6", "connection_type": "ride" },
                { "from_station_id": "AG6", "to_station_id": "AG7", "connection_type": "ride" },
                { "from_station_id": "AG7", "to_station_id": "KJ13", "connection_type": "interchange" },
                { "from_station_id": "KJ13", "to_station_id": "KJ12", "connection_type": "ride" },
                { "from_station_id": "AG6", "to_station_id": "SP6", "connection_type": "ride" },
                { "from_station_id": "SP6", "to_station_id": "SP7", "connection_type": "ride" },
                { "from_station_id": "SP7", "to_station_id": "SP8", "connection_type": "ride" },
                { "from_station_id": "SP8", "to_station_id": "KJ12", "connection_type": "interchange" }
            ]
        }"##,
        )
        .unwrap();
        Network::build(snapshot)
    }

    fn stations(route: &AnnotatedRoute) -> Vec<&str> {
        route.stations().map(StationId::as_str).collect()
    }

    #[test]
    fn request_parse_normalizes() {
        let request = RouteRequest::parse(" ag5 ", "kj12").unwrap();
        assert_eq!(request.from, id("AG5"));
        assert_eq!(request.to, id("KJ12"));
        assert_eq!(request.k, None);
    }

    #[test]
    fn request_parse_rejects_blank() {
        let err = RouteRequest::parse("", "KJ12").unwrap_err();
        assert!(matches!(err, SearchError::InvalidRequest(_)));
        assert!(err.to_string().contains("'from'"));

        let err = RouteRequest::parse("AG5", "   ").unwrap_err();
        assert!(err.to_string().contains("'to'"));
    }

    #[test]
    fn finds_shortest_route_only() {
        let network = network();
        let config = RouteConfig::default();
        let request = RouteRequest::parse("AG5", "KJ12").unwrap();

        let result = RouteFinder::new(&config).search(&network, &request);

        // The SP branch is one hop longer and must not appear.
        assert_eq!(result.routes.len(), 1);
        assert_eq!(
            stations(&result.routes[0]),
            vec!["AG5", "AG6", "AG7", "KJ13", "KJ12"]
        );
        assert_eq!(result.distance(), Some(4));
    }

    #[test]
    fn routes_are_annotated() {
        let network = network();
        let config = RouteConfig::default();
        let request = RouteRequest::parse("AG5", "KJ12").unwrap();

        let result = RouteFinder::new(&config).search(&network, &request);
        let stops = result.routes[0].stops();

        assert_eq!(stops[0].arrived_by, None);
        let first_hop = stops[1].arrived_by.as_ref().unwrap();
        assert_eq!(first_hop.colour.as_str(), "#E57200");
        let change = stops[3].arrived_by.as_ref().unwrap();
        assert_eq!(change.connection_type, ConnectionType::Interchange);
        let last_hop = stops[4].arrived_by.as_ref().unwrap();
        assert_eq!(last_hop.line.as_ref().unwrap().as_str(), "KJ");
    }

    #[test]
    fn branch_edge_uses_shared_line() {
        let network = network();
        let config = RouteConfig::default();
        let request = RouteRequest::parse("AG6", "SP7").unwrap();

        let result = RouteFinder::new(&config).search(&network, &request);
        let hop = result.routes[0].stops()[1].arrived_by.as_ref().unwrap();

        assert_eq!(hop.line.as_ref().unwrap().as_str(), "SP");
        assert_eq!(hop.colour.as_str(), "#76232F");
    }

    #[test]
    fn unknown_station_yields_empty_result() {
        let network = network();
        let config = RouteConfig::default();
        let request = RouteRequest::parse("AG5", "ZZ99").unwrap();

        let result = RouteFinder::new(&config).search(&network, &request);
        assert!(result.is_empty());
        assert_eq!(result.distance(), None);
    }

    #[test]
    fn same_station_is_zero_distance() {
        let network = network();
        let config = RouteConfig::default();
        let request = RouteRequest::parse("KJ13", "kj13").unwrap();

        let result = RouteFinder::new(&config).search(&network, &request);
        assert_eq!(result.routes.len(), 1);
        assert_eq!(result.distance(), Some(0));
    }

    #[test]
    fn requested_k_is_clamped() {
        let network = network();
        let config = RouteConfig {
            max_k: 1,
            ..RouteConfig::default()
        };
        let none = RouteRequest::parse("AG5", "KJ12").unwrap().with_k(0);
        assert!(RouteFinder::new(&config).search(&network, &none).is_empty());

        let many = RouteRequest::parse("AG5", "KJ12").unwrap().with_k(50);
        assert_eq!(RouteFinder::new(&config).search(&network, &many).routes.len(), 1);
    }

    #[test]
    fn depth_limit_applies() {
        let network = network();
        let config = RouteConfig {
            max_depth: 4,
            ..RouteConfig::default()
        };
        let request = RouteRequest::parse("AG5", "KJ12").unwrap();

        assert!(RouteFinder::new(&config).search(&network, &request).is_empty());
    }

    #[tokio::test]
    async fn bounded_search_returns_result() {
        let network = Arc::new(network());
        let config = Arc::new(RouteConfig::default());
        let request = RouteRequest::parse("AG5", "KJ12").unwrap();

        let result = search_with_timeout(network, request, config).await.unwrap();
        assert_eq!(result.distance(), Some(4));
    }

    #[tokio::test]
    async fn slow_work_times_out() {
        let err = run_bounded(Duration::from_millis(10), || {
            std::thread::sleep(Duration::from_millis(200));
        })
        .await
        .unwrap_err();

        assert!(matches!(err, SearchError::Timeout(_)));
    }

    #[tokio::test]
    async fn panicking_work_is_internal_error() {
        let err = run_bounded(Duration::from_secs(5), || -> usize { panic!("boom") })
            .await
            .unwrap_err();

        assert!(matches!(err, SearchError::Internal(_)));
    }
}
