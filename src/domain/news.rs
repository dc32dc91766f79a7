// News entry domain model
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewsEntry {
    pub title: String,
    pub source: String,
    #[serde(default)]
    pub url: Option<String>,
}

impl NewsEntry {
    pub fn new(title: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            source: source.into(),
            url: None,
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// The navigable target, if any. Only http(s) addresses qualify;
    /// anything else renders as an inert placeholder.
    pub fn link(&self) -> Option<&str> {
        self.url.as_deref().map(str::trim).filter(|url| {
            let lower = url.to_ascii_lowercase();
            lower.starts_with("https://") || lower.starts_with("http://")
        })
    }

    /// True when the producer sent a url that `link` refuses
    pub fn has_rejected_url(&self) -> bool {
        self.url.as_deref().is_some_and(|u| !u.trim().is_empty()) && self.link().is_none()
    }
}
