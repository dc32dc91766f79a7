// Full dashboard page
use super::icon;
use super::metric_section::metric_section;
use super::news_card::news_list;
use crate::domain::dashboard::Dashboard;
use crate::domain::icon::Icon;
use crate::infrastructure::config::PageSettings;
use maud::{html, Markup, PreEscaped, DOCTYPE};

pub fn dashboard_page(dashboard: &Dashboard, settings: &PageSettings) -> Markup {
    let news = &dashboard.news[..dashboard.news.len().min(settings.news_max_items)];

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (dashboard.title) }
                script src=(settings.style_script_url) {}
                script src=(settings.icon_script_url) {}
            }
            body class="min-h-screen bg-slate-900 text-slate-100" {
                main class="max-w-7xl mx-auto px-4 py-8 grid gap-6 lg:grid-cols-[1fr_20rem]" {
                    div class="space-y-6" {
                        header {
                            h1 class="text-2xl font-bold" { (dashboard.title) }
                            @if let Some(subtitle) = &dashboard.subtitle {
                                p class="text-slate-400" { (subtitle) }
                            }
                            @if let Some(generated_at) = dashboard.generated_at {
                                p class="text-slate-500 text-xs mt-1" {
                                    "Generated " (generated_at.format("%Y-%m-%d %H:%M UTC"))
                                }
                            }
                        }
                        @for section in &dashboard.sections {
                            (metric_section(section))
                        }
                    }
                    @if !news.is_empty() {
                        aside class="bg-slate-800/30 rounded-2xl border border-slate-700/50 p-4 h-fit" {
                            h2 class="flex items-center gap-2 font-semibold text-sm text-slate-300 mb-3" {
                                (icon(&Icon::new("newspaper"), "w-4 h-4"))
                                "News"
                            }
                            (news_list(news))
                        }
                    }
                }
                script { (PreEscaped("lucide.createIcons();")) }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::insight::{Insight, Severity};
    use crate::domain::metric::Metric;
    use crate::domain::news::NewsEntry;
    use crate::domain::section::Section;
    use chrono::{TimeZone, Utc};

    fn sample() -> Dashboard {
        let latency = Section::new("Latency", Icon::new("timer"), "text-sky-400")
            .with_metric(Metric::new("p50", "12ms", "text-emerald-400"))
            .with_insight(Insight::new(Severity::Good, "Fast", "All good"));
        let errors = Section::new("Errors", Icon::new("bug"), "text-red-400")
            .with_metric(Metric::new("5xx", 3_i64, "text-red-400"));
        Dashboard::new("API <prod>", vec![latency, errors], Vec::new())
    }

    #[test]
    fn test_page_shell() {
        let html = dashboard_page(&sample(), &PageSettings::default()).into_string();

        assert!(html.starts_with("<!DOCTYPE html><html lang=\"en\">"));
        assert!(html.contains("<title>API &lt;prod&gt;</title>"));
        assert!(html.contains(r#"<script src="https://cdn.tailwindcss.com"></script>"#));
        assert!(html.contains("lucide.createIcons();"));
    }

    #[test]
    fn test_configured_style_script_is_a_script() {
        let settings = PageSettings {
            style_script_url: "/static/tailwind.js".to_string(),
            ..PageSettings::default()
        };
        let html = dashboard_page(&sample(), &settings).into_string();

        assert!(html.contains(r#"<script src="/static/tailwind.js"></script>"#));
        assert!(!html.contains("<link"));
    }

    #[test]
    fn test_sections_render_in_order() {
        let html = dashboard_page(&sample(), &PageSettings::default()).into_string();

        assert_eq!(html.matches("<section ").count(), 2);
        assert!(html.find(">Latency</h3>").unwrap() < html.find(">Errors</h3>").unwrap());
    }

    #[test]
    fn test_news_aside_omitted_without_news() {
        let html = dashboard_page(&sample(), &PageSettings::default()).into_string();
        assert!(!html.contains("<aside"));
    }

    #[test]
    fn test_news_truncated_to_configured_count() {
        let mut dashboard = sample();
        dashboard.news = (0..8)
            .map(|i| NewsEntry::new(format!("story {}", i), "wire"))
            .collect();
        let settings = PageSettings {
            news_max_items: 3,
            ..PageSettings::default()
        };

        let html = dashboard_page(&dashboard, &settings).into_string();

        assert!(html.contains("<aside"));
        assert!(html.contains("story 2"));
        assert!(!html.contains("story 3"));
    }

    #[test]
    fn test_subtitle_and_generated_at() {
        let mut dashboard = sample();
        dashboard.subtitle = Some("Production cluster".to_string());
        dashboard.generated_at = Some(Utc.with_ymd_and_hms(2025, 1, 1, 12, 30, 5).unwrap());

        let html = dashboard_page(&dashboard, &PageSettings::default()).into_string();

        assert!(html.contains(r#"<p class="text-slate-400">Production cluster</p>"#));
        assert!(html.contains("Generated 2025-01-01 12:30 UTC"));
    }

    #[test]
    fn test_page_rendering_is_idempotent() {
        let mut dashboard = sample();
        dashboard.news = vec![NewsEntry::new("t", "s").with_url("https://example.com")];
        let settings = PageSettings::default();

        assert_eq!(
            dashboard_page(&dashboard, &settings).into_string(),
            dashboard_page(&dashboard, &settings).into_string()
        );
    }
}
