// HTTP request handlers
use crate::application::error::DashboardError;
use crate::infrastructure::http_response::{accepts_brotli, html_response};
use crate::presentation::app_state::AppState;
use crate::presentation::components::metric_section::metric_section;
use crate::presentation::components::news_card::news_list;
use crate::presentation::components::page::dashboard_page;
use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use maud::Markup;
use serde::Serialize;
use std::sync::Arc;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub version: &'static str,
}

/// Health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "active",
        message: "Insight dashboard is online",
        version: env!("CARGO_PKG_VERSION"),
    })
}

async fn respond(markup: Markup, headers: &HeaderMap) -> Response {
    match html_response(markup, accepts_brotli(headers)).await {
        Ok(response) => response,
        Err(status) => status.into_response(),
    }
}

/// Full dashboard page
pub async fn show_dashboard(
    Path(id): Path<String>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Result<Response, DashboardError> {
    let dashboard = state.dashboard_service.get_dashboard(&id).await?;
    Ok(respond(dashboard_page(&dashboard, &state.page), &headers).await)
}

/// A single section, for partial refreshes
pub async fn show_section(
    Path((id, index)): Path<(String, usize)>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Result<Response, DashboardError> {
    let dashboard = state.dashboard_service.get_dashboard(&id).await?;
    let section = dashboard
        .section(index)
        .ok_or_else(|| DashboardError::NotFound(format!("{}/sections/{}", id, index)))?;
    Ok(respond(metric_section(section), &headers).await)
}

/// The news list on its own
pub async fn show_news(
    Path(id): Path<String>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Result<Response, DashboardError> {
    let dashboard = state.dashboard_service.get_dashboard(&id).await?;
    let limit = dashboard.news.len().min(state.page.news_max_items);
    Ok(respond(news_list(&dashboard.news[..limit]), &headers).await)
}

/// Drop one cached snapshot so the next request refetches it
pub async fn invalidate_dashboard(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> StatusCode {
    if state.dashboard_service.invalidate(&id).await {
        StatusCode::NO_CONTENT
    } else {
        StatusCode::NOT_FOUND
    }
}

/// Drop every cached snapshot
pub async fn clear_cache(State(state): State<Arc<AppState>>) -> StatusCode {
    state.dashboard_service.clear_cache().await;
    StatusCode::NO_CONTENT
}
