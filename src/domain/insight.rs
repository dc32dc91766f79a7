// Insight domain model
use super::icon::Icon;
use serde::Deserialize;

/// Closed set of insight classifications. Decoding any other value fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Danger,
    Warning,
    Good,
    Neutral,
}

/// Visual treatment of a severity: container background/border and the
/// accent used for the title and icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeverityStyle {
    pub container: &'static str,
    pub accent: &'static str,
}

impl Severity {
    pub fn style(self) -> SeverityStyle {
        match self {
            Severity::Danger => SeverityStyle {
                container: "bg-red-500/10 border-red-500/30",
                accent: "text-red-400",
            },
            Severity::Warning => SeverityStyle {
                container: "bg-yellow-500/10 border-yellow-500/30",
                accent: "text-yellow-400",
            },
            Severity::Good => SeverityStyle {
                container: "bg-emerald-500/10 border-emerald-500/30",
                accent: "text-emerald-400",
            },
            Severity::Neutral => SeverityStyle {
                container: "bg-slate-500/10 border-slate-500/30",
                accent: "text-slate-400",
            },
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Danger => "danger",
            Severity::Warning => "warning",
            Severity::Good => "good",
            Severity::Neutral => "neutral",
        }
    }

    /// Glyph used when the producer did not pick one
    fn default_icon(self) -> &'static str {
        match self {
            Severity::Danger => "alert-octagon",
            Severity::Warning => "alert-triangle",
            Severity::Good => "check-circle",
            Severity::Neutral => "info",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Insight {
    pub severity: Severity,
    #[serde(default)]
    pub icon: Option<Icon>,
    pub title: String,
    pub text: String,
}

impl Insight {
    pub fn new(severity: Severity, title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            severity,
            icon: None,
            title: title.into(),
            text: text.into(),
        }
    }

    pub fn with_icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn glyph(&self) -> Icon {
        self.icon
            .clone()
            .unwrap_or_else(|| Icon::new(self.severity.default_icon()))
    }
}
