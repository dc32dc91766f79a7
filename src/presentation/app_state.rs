// Application state for HTTP handlers
use crate::application::dashboard_service::DashboardService;
use crate::infrastructure::config::PageSettings;
use crate::presentation::rate_limit::ClientRateLimiter;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub dashboard_service: DashboardService,
    pub page: PageSettings,
    pub rate_limiter: Arc<ClientRateLimiter>,
    pub cors_origins: Vec<String>,
}
