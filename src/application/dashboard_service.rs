// Dashboard service - Use case for serving assembled dashboards
use crate::application::dashboard_source::DashboardSource;
use crate::application::error::DashboardError;
use crate::application::snapshot_cache::SnapshotCache;
use crate::domain::dashboard::Dashboard;
use std::sync::Arc;

const MAX_ID_LEN: usize = 64;

#[derive(Clone)]
pub struct DashboardService {
    source: Arc<dyn DashboardSource>,
    cache: Arc<SnapshotCache>,
}

impl DashboardService {
    pub fn new(source: Arc<dyn DashboardSource>, cache: SnapshotCache) -> Self {
        Self {
            source,
            cache: Arc::new(cache),
        }
    }

    pub async fn get_dashboard(&self, id: &str) -> Result<Arc<Dashboard>, DashboardError> {
        validate_dashboard_id(id)?;

        if let Some(cached) = self.cache.get(id).await {
            tracing::debug!("Cache hit for dashboard {}", id);
            return Ok(cached);
        }

        let dashboard = match self.source.fetch_dashboard(id).await {
            Ok(dashboard) => dashboard,
            Err(e) => {
                tracing::warn!("Failed to fetch dashboard {}: {}", id, e);
                return Err(e);
            }
        };

        for entry in dashboard.news.iter().filter(|n| n.has_rejected_url()) {
            tracing::warn!(
                "Dashboard {}: news item '{}' has a non-http url, rendering it inert",
                id,
                entry.title
            );
        }

        tracing::info!(
            "Fetched dashboard {} ({} sections, {} news items)",
            id,
            dashboard.sections.len(),
            dashboard.news.len()
        );

        let dashboard = Arc::new(dashboard);
        self.cache.insert(id, dashboard.clone()).await;
        Ok(dashboard)
    }

    pub async fn invalidate(&self, id: &str) -> bool {
        self.cache.remove(id).await
    }

    pub async fn clear_cache(&self) -> usize {
        let cleared = self.cache.clear().await;
        tracing::info!("Cleared {} cached dashboard snapshots", cleared);
        cleared
    }
}

/// Ids must start with an ASCII letter or digit and contain only letters,
/// digits, dots, hyphens and underscores.
pub fn validate_dashboard_id(id: &str) -> Result<(), DashboardError> {
    let starts_ok = id
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphanumeric());
    let chars_ok = id
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_'));

    if starts_ok && chars_ok && id.len() <= MAX_ID_LEN {
        Ok(())
    } else {
        Err(DashboardError::InvalidId(id.to_string()))
    }
}
