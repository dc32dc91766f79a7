// Route table
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    clear_cache, health_check, invalidate_dashboard, show_dashboard, show_news, show_section,
};
use crate::presentation::rate_limit::limit_per_client;
use axum::{
    http::{HeaderValue, Method},
    middleware,
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

pub fn build_router(state: Arc<AppState>) -> Router {
    let dashboards = Router::new()
        .route("/dashboards/:id", get(show_dashboard))
        .route("/dashboards/:id/sections/:index", get(show_section))
        .route("/dashboards/:id/news", get(show_news))
        .route("/dashboards/:id/cache", delete(invalidate_dashboard))
        .route_layer(middleware::from_fn_with_state(state.clone(), limit_per_client));

    // Compression is applied per response in http_response, not as a layer
    Router::new()
        .route("/healthz", get(health_check))
        .route("/cache/clear", post(clear_cache))
        .merge(dashboards)
        .layer(cors_layer(&state.cors_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin {:?}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
}
