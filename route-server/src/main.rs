use route_server::config::ServerConfig;
use route_server::network::{JsonFileSource, NetworkCache};
use route_server::web::{AppState, create_router};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("route_server=info,tower_http=info")),
        )
        .init();

    let config = ServerConfig::from_env().expect("Invalid configuration");

    let source = JsonFileSource::new(&config.network_path);
    let network = NetworkCache::new(source, &config.cache);

    // Load once up front (fail fast if the snapshot is missing or malformed)
    let loaded = network.get().await.expect("Failed to load network");
    info!(
        path = %network.source().path().display(),
        stations = loaded.graph().station_count(),
        "network ready"
    );

    let state = AppState::new(network, config.route.clone());
    let app = create_router(state, &config.static_dir);

    let addr = config.addr;
    info!("Route finder listening on http://{addr}");
    info!("  GET  /health                - Health check");
    info!("  GET  /stations              - Active stations by line");
    info!("  GET  /routes/:from/:to      - Direct connections");
    info!("  GET  /shortest-path?from&to - K shortest routes");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");
    axum::serve(listener, app).await.expect("Server error");
}
