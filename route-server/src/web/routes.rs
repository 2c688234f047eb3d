//! HTTP route handlers.

use std::path::Path;
use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path as UrlPath, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use crate::network::{NetworkError, NetworkSource};
use crate::planner::{RouteRequest, SearchError, search_with_timeout};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router<S>(state: AppState<S>, static_dir: impl AsRef<Path>) -> Router
where
    S: NetworkSource + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health))
        .route("/stations", get(list_stations::<S>))
        .route("/stations/basic", get(list_basic_stations::<S>))
        .route("/routes/:from/:to", get(direct_connections::<S>))
        .route("/shortest-path", get(shortest_path::<S>))
        .nest_service("/static", ServeDir::new(static_dir.as_ref()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Active stations without line data.
async fn list_basic_stations<S>(
    State(state): State<AppState<S>>,
) -> Result<Json<Vec<BasicStationResult>>, AppError>
where
    S: NetworkSource + Send + Sync + 'static,
{
    let network = state.network.get().await?;

    let stations = network
        .active_stations()
        .into_iter()
        .map(BasicStationResult::from_station)
        .collect();

    Ok(Json(stations))
}

/// Active stations with their line memberships, ordered by line and sequence.
async fn list_stations<S>(
    State(state): State<AppState<S>>,
) -> Result<Json<Vec<StationResult>>, AppError>
where
    S: NetworkSource + Send + Sync + 'static,
{
    let network = state.network.get().await?;

    let stations = network
        .active_memberships()
        .filter_map(|m| StationResult::from_membership(m, &network))
        .collect();

    Ok(Json(stations))
}

/// Connections recorded directly from one station to another.
async fn direct_connections<S>(
    State(state): State<AppState<S>>,
    UrlPath((from, to)): UrlPath<(String, String)>,
) -> Result<Json<Vec<ConnectionResult>>, AppError>
where
    S: NetworkSource + Send + Sync + 'static,
{
    let request = RouteRequest::parse(&from, &to)?;
    let network = state.network.get().await?;

    let connections = network
        .connections_between(&request.from, &request.to)
        .map(ConnectionResult::from_connection)
        .collect();

    Ok(Json(connections))
}

/// Up to k shortest routes between two stations.
async fn shortest_path<S>(
    State(state): State<AppState<S>>,
    Query(query): Query<ShortestPathQuery>,
) -> Result<Json<ShortestPathResponse>, AppError>
where
    S: NetworkSource + Send + Sync + 'static,
{
    let mut request = RouteRequest::parse(&query.from, &query.to)?;
    if let Some(k) = query.k {
        // Negative counts ask for nothing rather than failing.
        request = request.with_k(usize::try_from(k).unwrap_or(0));
    }

    let network = state.network.get().await?;
    let result = search_with_timeout(network, request, Arc::clone(&state.config)).await?;
    if result.is_empty() {
        info!(from = %result.from, to = %result.to, "no route found");
    }

    Ok(Json(ShortestPathResponse::from_result(&result)))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Internal { message: String },
    Unavailable { message: String },
}

impl From<SearchError> for AppError {
    fn from(e: SearchError) -> Self {
        match e {
            SearchError::InvalidRequest(message) => AppError::BadRequest { message },
            SearchError::Timeout(_) => AppError::Unavailable {
                message: e.to_string(),
            },
            SearchError::Internal(_) => AppError::Internal {
                message: e.to_string(),
            },
        }
    }
}

impl From<NetworkError> for AppError {
    fn from(e: NetworkError) -> Self {
        AppError::Internal {
            message: format!("network unavailable: {e}"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
            AppError::Unavailable { message } => (StatusCode::SERVICE_UNAVAILABLE, message),
        };

        if status.is_server_error() {
            error!(%status, %message, "request failed");
        } else {
            warn!(%status, %message, "request rejected");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
