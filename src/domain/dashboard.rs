// Dashboard domain model
use super::news::NewsEntry;
use super::section::Section;
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// One fully computed dashboard snapshot as handed over by the assembler.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub generated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub sections: Vec<Section>,
    #[serde(default)]
    pub news: Vec<NewsEntry>,
}

impl Dashboard {
    pub fn new(title: impl Into<String>, sections: Vec<Section>, news: Vec<NewsEntry>) -> Self {
        Self {
            title: title.into(),
            subtitle: None,
            generated_at: None,
            sections,
            news,
        }
    }

    pub fn section(&self, index: usize) -> Option<&Section> {
        self.sections.get(index)
    }
}
