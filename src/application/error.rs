// Errors surfaced by the application layer
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("invalid dashboard id: {0}")]
    InvalidId(String),

    #[error("not found: {0}")]
    NotFound(String),

    /// The snapshot broke the data contract (unknown severity, missing field, ...)
    #[error("malformed dashboard snapshot: {0}")]
    Decode(String),

    #[error("assembler request failed: {0}")]
    Upstream(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for DashboardError {
    fn from(err: serde_json::Error) -> Self {
        DashboardError::Decode(err.to_string())
    }
}

impl From<toml::de::Error> for DashboardError {
    fn from(err: toml::de::Error) -> Self {
        DashboardError::Decode(err.to_string())
    }
}
