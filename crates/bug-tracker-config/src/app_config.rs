//! Application configuration
//!
//! Configuration loaded from `.bug-tracker.toml` (or the global config file),
//! with an environment override for the API location.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Environment variable that overrides `api_base_url`
pub const API_URL_ENV: &str = "BUG_TRACKER_API_URL";

/// Application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Root of the bugs REST API (the `/bugs` endpoint lives below it)
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// How long a successful bug list fetch stays fresh, in seconds
    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,
}

fn default_api_base_url() -> String {
    "http://localhost:9001/api".to_string()
}

fn default_cache_ttl_secs() -> u64 {
    10 * 60
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            cache_ttl_secs: default_cache_ttl_secs(),
        }
    }
}

impl AppConfig {
    /// Load config from CWD first, then the config directory, or use defaults
    ///
    /// `BUG_TRACKER_API_URL` takes precedence over the file.
    pub fn load() -> Self {
        let config = match crate::load_config_file() {
            Some((path, content)) => match toml::from_str(&content) {
                Ok(config) => {
                    log::info!("Loaded app config from {}", path.display());
                    config
                }
                Err(e) => {
                    log::warn!("Failed to parse config file {}: {}", path.display(), e);
                    Self::default()
                }
            },
            None => {
                log::debug!("Using default app config");
                Self::default()
            }
        };

        config.with_api_url_override(std::env::var(API_URL_ENV).ok())
    }

    /// Replace the API base URL when an override is present and non-empty
    pub fn with_api_url_override(mut self, api_url: Option<String>) -> Self {
        if let Some(url) = api_url.filter(|url| !url.trim().is_empty()) {
            log::debug!("Overriding API base URL with {}", url);
            self.api_base_url = url;
        }
        self
    }

    /// Freshness window for the cached bug list
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }
}
