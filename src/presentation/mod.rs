// Presentation layer - HTTP surface and render-only components
pub mod app_state;
pub mod components;
pub mod error_response;
pub mod handlers;
pub mod rate_limit;
pub mod router;
