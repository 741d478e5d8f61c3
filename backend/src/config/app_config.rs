use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Runtime settings read once at startup and handed to whoever needs them.
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Empty or missing means the caption gateway runs on the mock table only.
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub gemini_base_url: String,
    pub bind_addr: SocketAddr,
    pub frontend_dist: PathBuf,
    pub media_dir: PathBuf,
    pub media_url_prefix: String,
    pub sentry_dsn: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            gemini_api_key: None,
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
            gemini_base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            frontend_dist: PathBuf::from("../frontend/dist"),
            media_dir: PathBuf::from("assets"),
            media_url_prefix: "/assets".to_string(),
            sentry_dsn: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup so tests don't have to touch the process env.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let bind_addr = match non_empty("BIND_ADDR") {
            Some(addr) => addr
                .parse::<SocketAddr>()
                .with_context(|| format!("BIND_ADDR is not a socket address: {}", addr))?,
            None => defaults.bind_addr,
        };

        // axum can't nest a service at "/", so a bare slash falls back to the default
        let media_url_prefix = non_empty("MEDIA_URL_PREFIX")
            .and_then(|p| normalize_prefix(&p))
            .unwrap_or(defaults.media_url_prefix);

        Ok(Self {
            gemini_api_key: non_empty("GEMINI_API_KEY").or_else(|| non_empty("API_KEY")),
            gemini_model: non_empty("GEMINI_MODEL").unwrap_or(defaults.gemini_model),
            gemini_base_url: non_empty("GEMINI_BASE_URL")
                .map(|u| u.trim_end_matches('/').to_string())
                .unwrap_or(defaults.gemini_base_url),
            bind_addr,
            frontend_dist: non_empty("FRONTEND_DIST").map(PathBuf::from).unwrap_or(defaults.frontend_dist),
            media_dir: non_empty("MEDIA_DIR").map(PathBuf::from).unwrap_or(defaults.media_dir),
            media_url_prefix,
            sentry_dsn: non_empty("SENTRY_DSN"),
        })
    }

    pub fn has_gemini_key(&self) -> bool {
        self.gemini_api_key.is_some()
    }
}

fn normalize_prefix(prefix: &str) -> Option<String> {
    let trimmed = prefix.trim_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(format!("/{}", trimmed))
    }
}
