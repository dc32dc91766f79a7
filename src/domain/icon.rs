// Icon reference domain model
use serde::Deserialize;

/// Symbolic reference to a drawable glyph (e.g. "trending-up").
/// The page's icon script resolves the name to an SVG in the browser.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Icon(String);

impl Icon {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}
