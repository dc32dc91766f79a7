// Metric section component
use super::icon;
use super::insight_badge::insight_badge;
use super::metric_tile::metric_tile;
use crate::domain::section::Section;
use maud::{html, Markup};

const GRID_CLASS: &str = "grid grid-cols-2 md:grid-cols-3 lg:grid-cols-4 gap-3";
const INSIGHTS_CLASS: &str = "space-y-2 pt-3 border-t border-slate-700/30";

/// Header, tile grid, then the insight list. The list, its separator and
/// the spacing above it exist only when there are insights.
pub fn metric_section(section: &Section) -> Markup {
    let has_insights = section.has_insights();
    let grid_class = if has_insights {
        format!("{} mb-4", GRID_CLASS)
    } else {
        GRID_CLASS.to_string()
    };

    html! {
        section class="bg-slate-800/30 rounded-2xl border border-slate-700/50 overflow-hidden" {
            div class={ "px-5 py-3 border-b border-slate-700/50 flex items-center gap-2 " (section.icon_color) } {
                (icon(&section.icon, "w-4 h-4"))
                h3 class="font-semibold text-sm" { (section.title) }
            }
            div class="p-4" {
                div class=(grid_class) {
                    @for metric in &section.metrics {
                        (metric_tile(metric))
                    }
                }
                @if has_insights {
                    div class=(INSIGHTS_CLASS) {
                        @for insight in &section.insights {
                            (insight_badge(insight))
                        }
                    }
                }
            }
        }
    }
}
