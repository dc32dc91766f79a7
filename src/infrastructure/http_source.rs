// Upstream assembler over HTTP
use crate::application::dashboard_source::DashboardSource;
use crate::application::error::DashboardError;
use crate::domain::dashboard::Dashboard;
use anyhow::Context;
use async_trait::async_trait;
use reqwest::StatusCode;
use std::time::Duration;

/// Upper bound on how much of an upstream error body is kept for logs
const MAX_ERROR_BODY: usize = 512;

#[derive(Debug, Clone)]
pub struct HttpDashboardSource {
    client: reqwest::Client,
    url_template: String,
    token: Option<String>,
}

impl HttpDashboardSource {
    pub fn new(url_template: String, token: Option<String>, timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client for assembler")?;

        Ok(Self {
            client,
            url_template,
            token,
        })
    }

    fn dashboard_url(&self, id: &str) -> String {
        self.url_template.replace("${id}", &urlencoding::encode(id))
    }
}

/// Reads at most `MAX_ERROR_BODY` bytes of an error response.
async fn read_error_body(mut response: reqwest::Response) -> String {
    let mut body = Vec::new();
    while body.len() < MAX_ERROR_BODY {
        match response.chunk().await {
            Ok(Some(chunk)) => body.extend_from_slice(&chunk),
            _ => break,
        }
    }
    body.truncate(MAX_ERROR_BODY);
    String::from_utf8_lossy(&body).into_owned()
}

#[async_trait]
impl DashboardSource for HttpDashboardSource {
    async fn fetch_dashboard(&self, id: &str) -> Result<Dashboard, DashboardError> {
        let url = self.dashboard_url(id);
        tracing::debug!("Requesting snapshot from {}", url);

        let mut request = self
            .client
            .get(&url)
            .header(reqwest::header::ACCEPT, "application/json");
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| DashboardError::Upstream(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(DashboardError::NotFound(id.to_string()));
        }
        if !status.is_success() {
            let body = read_error_body(response).await;
            return Err(DashboardError::Upstream(format!(
                "status {}: {}",
                status, body
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| DashboardError::Upstream(e.to_string()))?;

        Ok(serde_json::from_str(&body)?)
    }
}
