// Snapshot files on disk, one per dashboard id
use crate::application::dashboard_source::DashboardSource;
use crate::application::error::DashboardError;
use crate::domain::dashboard::Dashboard;
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct FileDashboardSource {
    root: PathBuf,
}

impl FileDashboardSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    async fn read_optional(path: &Path) -> Result<Option<Vec<u8>>, DashboardError> {
        match tokio::fs::read(path).await {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

#[async_trait]
impl DashboardSource for FileDashboardSource {
    async fn fetch_dashboard(&self, id: &str) -> Result<Dashboard, DashboardError> {
        let json_path = self.root.join(format!("{}.json", id));
        if let Some(raw) = Self::read_optional(&json_path).await? {
            tracing::debug!("Loading snapshot from {}", json_path.display());
            return Ok(serde_json::from_slice(&raw)?);
        }

        let toml_path = self.root.join(format!("{}.toml", id));
        if let Some(raw) = Self::read_optional(&toml_path).await? {
            tracing::debug!("Loading snapshot from {}", toml_path.display());
            let text = std::str::from_utf8(&raw)
                .map_err(|e| DashboardError::Decode(format!("{}: {}", toml_path.display(), e)))?;
            return Ok(toml::from_str(text)?);
        }

        Err(DashboardError::NotFound(id.to_string()))
    }
}
