use route_server::config::{ServerConfig, UpstreamSource};
use route_server::upstream::{MockSearchClient, SearchClient, SearchClientConfig, Upstream};
use route_server::web::{AppState, SessionConfig, SessionStore, create_router};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "route_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env().expect("Invalid configuration");

    let upstream = match &config.upstream {
        UpstreamSource::Http(url) => {
            let client_config = SearchClientConfig::new().with_endpoint(url);
            Upstream::Http(SearchClient::new(client_config).expect("Failed to create search client"))
        }
        UpstreamSource::Mock(path) => {
            Upstream::Mock(MockSearchClient::new(path).expect("Failed to load mock search data"))
        }
    };
    tracing::info!("Using {}", upstream.describe());

    let sessions = SessionStore::new(upstream, &SessionConfig::default());
    let state = AppState::new(sessions);
    let app = create_router(state, &config.static_dir);

    let addr = config.bind_addr;
    tracing::info!("FareSmart listening on http://{addr}");
    tracing::info!("  GET  /              - Search page");
    tracing::info!("  GET  /health        - Health check");
    tracing::info!("  POST /search        - Search routes (JSON or HTML fragment)");
    tracing::info!("  GET  /search/state  - Latest search state for this client");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listen address");
    axum::serve(listener, app).await.expect("Server error");
}
