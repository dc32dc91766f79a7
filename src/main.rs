// Main entry point - Dependency injection and server setup
use std::{net::SocketAddr, sync::Arc, time::Duration};
use tracing_subscriber::EnvFilter;

use insight_dashboard::application::dashboard_service::DashboardService;
use insight_dashboard::application::dashboard_source::DashboardSource;
use insight_dashboard::application::snapshot_cache::SnapshotCache;
use insight_dashboard::infrastructure::config::{load_app_config, SourceSettings};
use insight_dashboard::infrastructure::file_source::FileDashboardSource;
use insight_dashboard::infrastructure::http_source::HttpDashboardSource;
use insight_dashboard::presentation::app_state::AppState;
use insight_dashboard::presentation::rate_limit::ClientRateLimiter;
use insight_dashboard::presentation::router::build_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let app_config = load_app_config()?;

    // Create snapshot source (infrastructure layer)
    let source: Arc<dyn DashboardSource> = match &app_config.source {
        SourceSettings::File { path } => {
            tracing::info!("Serving dashboard snapshots from {}", path);
            Arc::new(FileDashboardSource::new(path))
        }
        SourceSettings::Http {
            url_template,
            token,
            timeout_secs,
        } => {
            tracing::info!("Fetching dashboard snapshots from {}", url_template);
            Arc::new(HttpDashboardSource::new(
                url_template.clone(),
                token.clone(),
                Duration::from_secs(*timeout_secs),
            )?)
        }
    };

    // Create services (application layer)
    let cache = SnapshotCache::new(
        Duration::from_secs(app_config.cache.ttl_secs),
        app_config.cache.max_entries,
    );
    let dashboard_service = DashboardService::new(source, cache);

    // Create application state
    let state = Arc::new(AppState {
        dashboard_service,
        page: app_config.page,
        rate_limiter: Arc::new(ClientRateLimiter::per_minute(
            app_config.server.rate_limit_per_minute,
        )),
        cors_origins: app_config.server.cors_origins,
    });

    // Build router (presentation layer)
    let router = build_router(state);

    // Start server
    let addr: SocketAddr = app_config.server.bind.parse()?;
    tracing::info!("Starting insight-dashboard service on {}", addr);

    // Peer addresses key the rate limiter
    axum::serve(
        tokio::net::TcpListener::bind(addr).await?,
        router.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
