// Mapping of application errors onto HTTP responses
use crate::application::error::DashboardError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

impl DashboardError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            DashboardError::InvalidId(_) => StatusCode::BAD_REQUEST,
            DashboardError::NotFound(_) => StatusCode::NOT_FOUND,
            DashboardError::Decode(_) | DashboardError::Upstream(_) => StatusCode::BAD_GATEWAY,
            DashboardError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for DashboardError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("{}", self);
        }
        (status, self.public_message()).into_response()
    }
}

impl DashboardError {
    /// Text shown to clients. Upstream and io details stay in the logs.
    fn public_message(&self) -> String {
        match self {
            DashboardError::Upstream(_) => "dashboard assembler unavailable".to_string(),
            DashboardError::Io(_) => "internal error".to_string(),
            other => other.to_string(),
        }
    }
}
