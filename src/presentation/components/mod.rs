// Render-only components: pure functions from domain values to markup
pub mod insight_badge;
pub mod metric_section;
pub mod metric_tile;
pub mod news_card;
pub mod page;

use crate::domain::icon::Icon;
use maud::{html, Markup};

/// Placeholder the page's icon script swaps for the named glyph
pub fn icon(glyph: &Icon, class: &str) -> Markup {
    html! {
        i data-lucide=(glyph.name()) class=(class) aria-hidden="true" {}
    }
}
