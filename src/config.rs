//! Frontend Configuration
//!
//! Resolved once at startup from build-time overrides and the page origin.

use log::LevelFilter;

use crate::browser;

/// Durable storage key holding the last selected menu id
pub const DEFAULT_STORAGE_KEY: &str = "lastMenuId";

/// Used when no page origin is available (tests, non-browser hosts)
const FALLBACK_API_BASE: &str = "http://localhost:8000/api";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Absolute URL prefix of the backend API, without trailing slash
    pub api_base: String,
    pub storage_key: String,
    pub log_level: LevelFilter,
}

impl AppConfig {
    pub fn load() -> Self {
        Self::resolve(
            option_env!("WASTE_WATCH_API_BASE"),
            option_env!("WASTE_WATCH_LOG"),
            browser::window_origin(),
        )
    }

    fn resolve(api_base: Option<&str>, log_level: Option<&str>, origin: Option<String>) -> Self {
        let api_base = match api_base.map(str::trim).filter(|s| !s.is_empty()) {
            Some(base) => base.to_string(),
            None => origin
                .map(|origin| format!("{}/api", origin.trim_end_matches('/')))
                .unwrap_or_else(|| FALLBACK_API_BASE.to_string()),
        };
        Self {
            api_base: api_base.trim_end_matches('/').to_string(),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            log_level: console_logger::parse_level(log_level, LevelFilter::Info),
        }
    }
}
