// Metric tile component
use super::icon;
use crate::domain::metric::Metric;
use maud::{html, Markup};

const TOOLTIP_CLASS: &str = "absolute bottom-full left-1/2 -translate-x-1/2 mb-2 px-3 py-2 \
    bg-slate-900 text-slate-300 text-xs rounded-lg opacity-0 group-hover:opacity-100 \
    group-focus:opacity-100 transition-opacity pointer-events-none whitespace-nowrap z-10 \
    border border-slate-700";

pub fn metric_tile(metric: &Metric) -> Markup {
    let tooltip = metric.tooltip();

    // Focusable only when there is a tooltip to reveal
    html! {
        div class="bg-slate-800/50 backdrop-blur-sm rounded-xl border border-slate-700/50 p-4 group relative"
            tabindex=[tooltip.map(|_| "0")] {
            div class="flex items-center gap-2 text-slate-400 text-sm mb-2" {
                @if let Some(glyph) = &metric.icon {
                    (icon(glyph, "w-4 h-4"))
                }
                span { (metric.label) }
            }
            div class={ "text-xl font-bold " (metric.color_class) } { (metric.value) }
            @if let Some(sub_value) = metric.sub_value() {
                div class="text-xs text-slate-500 mt-1" { (sub_value) }
            }
            @if let Some(text) = tooltip {
                div role="tooltip" class=(TOOLTIP_CLASS) { (text) }
            }
        }
    }
}
