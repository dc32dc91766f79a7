// Source trait for already-computed dashboard snapshots
use crate::application::error::DashboardError;
use crate::domain::dashboard::Dashboard;
use async_trait::async_trait;

#[async_trait]
pub trait DashboardSource: Send + Sync {
    /// Fetch the latest snapshot for a dashboard.
    /// Returns `NotFound` when the assembler has nothing for this id.
    async fn fetch_dashboard(&self, id: &str) -> Result<Dashboard, DashboardError>;
}
