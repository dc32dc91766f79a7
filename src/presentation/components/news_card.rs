// News card component
use crate::domain::news::NewsEntry;
use maud::{html, Markup};

const CARD_CLASS: &str =
    "block p-3 bg-slate-700/30 hover:bg-slate-700/50 rounded-xl transition-colors group";

/// A link to the story in a new, isolated browsing context. Without a usable
/// url the anchor has no `href` at all, so activating it goes nowhere.
pub fn news_card(entry: &NewsEntry) -> Markup {
    html! {
        @if let Some(url) = entry.link() {
            a href=(url) target="_blank" rel="noopener noreferrer" class=(CARD_CLASS) {
                (news_body(entry))
            }
        } @else {
            a aria-disabled="true" class=(CARD_CLASS) {
                (news_body(entry))
            }
        }
    }
}

fn news_body(entry: &NewsEntry) -> Markup {
    html! {
        p class="text-slate-300 text-sm leading-snug group-hover:text-white transition-colors line-clamp-2" {
            (entry.title)
        }
        p class="text-slate-500 text-xs mt-1" { (entry.source) }
    }
}

pub fn news_list(entries: &[NewsEntry]) -> Markup {
    html! {
        div class="space-y-2" {
            @for entry in entries {
                (news_card(entry))
            }
        }
    }
}
