// Insight badge component
use super::icon;
use crate::domain::insight::Insight;
use maud::{html, Markup};

pub fn insight_badge(insight: &Insight) -> Markup {
    let style = insight.severity.style();

    html! {
        div class={ "p-3 rounded-lg border " (style.container) } data-severity=(insight.severity.as_str()) {
            div class={ "flex items-center gap-2 font-medium text-sm " (style.accent) } {
                (icon(&insight.glyph(), "w-3.5 h-3.5"))
                span { (insight.title) }
            }
            p class="text-slate-400 text-xs mt-1" { (insight.text) }
        }
    }
}
