//! Runtime configuration
//!
//! Both values are fixed at build time through environment variables, the
//! way the bundle is deployed: `ABSEN_API_URL` and `ABSEN_LOG_LEVEL`.

use log::Level;

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub log_level: Level,
}

impl AppConfig {
    pub fn load() -> Self {
        let api_base_url = option_env!("ABSEN_API_URL")
            .map(str::to_string)
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(same_origin_api);

        Self {
            api_base_url: api_base_url.trim().trim_end_matches('/').to_string(),
            log_level: parse_level(option_env!("ABSEN_LOG_LEVEL")),
        }
    }
}

/// `<protocol>//<host>/api` of the page that loaded the bundle
fn same_origin_api() -> String {
    let origin = web_sys::window()
        .map(|w| w.location())
        .and_then(|location| {
            let protocol = location.protocol().ok()?;
            let host = location.host().ok()?;
            Some(format!("{}//{}", protocol, host))
        })
        .unwrap_or_default();
    format!("{}/api", origin)
}

fn parse_level(raw: Option<&str>) -> Level {
    match raw.map(|s| s.trim().to_ascii_lowercase()).as_deref() {
        Some("error") => Level::Error,
        Some("warn") => Level::Warn,
        Some("info") => Level::Info,
        Some("debug") => Level::Debug,
        Some("trace") => Level::Trace,
        _ if cfg!(debug_assertions) => Level::Debug,
        _ => Level::Info,
    }
}
