use serde::Deserialize;

pub const DEFAULT_STYLE_SCRIPT_URL: &str = "https://cdn.tailwindcss.com";
pub const DEFAULT_ICON_SCRIPT_URL: &str = "https://unpkg.com/lucide@latest";

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerSettings,
    pub source: SourceSettings,
    pub cache: CacheSettings,
    pub page: PageSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub bind: String,
    /// Origins allowed to call the API from a browser
    pub cors_origins: Vec<String>,
    /// Requests per minute per client on `/dashboards/*`; 0 disables the limit
    pub rate_limit_per_minute: u32,
}

/// Where finished dashboard snapshots come from
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SourceSettings {
    /// Directory holding `<id>.json` or `<id>.toml` snapshots
    File { path: String },
    /// Upstream assembler; `${id}` in the template is replaced per request
    Http {
        url_template: String,
        #[serde(default)]
        token: Option<String>,
        #[serde(default = "default_timeout_secs")]
        timeout_secs: u64,
    },
}

fn default_timeout_secs() -> u64 {
    30
}

#[derive(Debug, Deserialize, Clone)]
pub struct CacheSettings {
    pub ttl_secs: u64,
    pub max_entries: usize,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PageSettings {
    /// Script that generates the utility-class styles in the browser
    pub style_script_url: String,
    pub icon_script_url: String,
    pub news_max_items: usize,
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            style_script_url: DEFAULT_STYLE_SCRIPT_URL.to_string(),
            icon_script_url: DEFAULT_ICON_SCRIPT_URL.to_string(),
            news_max_items: 5,
        }
    }
}

pub fn load_app_config() -> anyhow::Result<AppConfig> {
    build_app_config("config/dashboard")
}

/// Defaults, then the optional config file, then `DASHBOARD__SECTION__KEY`
/// environment variables.
pub fn build_app_config(file: &str) -> anyhow::Result<AppConfig> {
    build_app_config_from(file, None)
}

// `env` replaces the process environment when given
fn build_app_config_from(
    file: &str,
    env: Option<config::Map<String, String>>,
) -> anyhow::Result<AppConfig> {
    let settings = config::Config::builder()
        .set_default("server.bind", "0.0.0.0:8080")?
        .set_default("server.cors_origins", vec!["http://localhost:3000"])?
        .set_default("server.rate_limit_per_minute", 10)?
        .set_default("source.kind", "file")?
        .set_default("source.path", "data/dashboards")?
        .set_default("cache.ttl_secs", 300)?
        .set_default("cache.max_entries", 100)?
        .set_default("page.style_script_url", DEFAULT_STYLE_SCRIPT_URL)?
        .set_default("page.icon_script_url", DEFAULT_ICON_SCRIPT_URL)?
        .set_default("page.news_max_items", 5)?
        .add_source(config::File::with_name(file).required(false))
        .add_source(
            config::Environment::with_prefix("DASHBOARD")
                .prefix_separator("__")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("server.cors_origins")
                .try_parsing(true)
                .source(env),
        )
        .build()?;

    Ok(settings.try_deserialize()?)
}
