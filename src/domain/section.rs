// Section domain model
use super::icon::Icon;
use super::insight::Insight;
use super::metric::Metric;
use serde::Deserialize;

/// A titled group of metrics with the insights derived from them.
/// Both sequences keep the producer's order.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub title: String,
    pub icon: Icon,
    pub icon_color: String,
    #[serde(default)]
    pub metrics: Vec<Metric>,
    #[serde(default)]
    pub insights: Vec<Insight>,
}

impl Section {
    pub fn new(title: impl Into<String>, icon: Icon, icon_color: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            icon,
            icon_color: icon_color.into(),
            metrics: Vec::new(),
            insights: Vec::new(),
        }
    }

    pub fn with_metric(mut self, metric: Metric) -> Self {
        self.metrics.push(metric);
        self
    }

    pub fn with_insight(mut self, insight: Insight) -> Self {
        self.insights.push(insight);
        self
    }

    pub fn has_insights(&self) -> bool {
        !self.insights.is_empty()
    }
}
