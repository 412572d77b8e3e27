//! Application configuration structures

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_API_BASE_URL, DEFAULT_LANGUAGE, DEFAULT_SESSION_PATH, DEFAULT_TIMEOUT_MS,
};

/// Top-level application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub session: SessionConfig,
    pub locale: LocaleConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            session: SessionConfig::default(),
            locale: LocaleConfig::default(),
        }
    }
}

/// Backend API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the REST backend, e.g. `http://localhost:8080/api/v1`.
    pub base_url: String,
    /// Per-request timeout in milliseconds.
    pub timeout_ms: u64,
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_API_BASE_URL.to_string(), timeout_ms: DEFAULT_TIMEOUT_MS }
    }
}

/// Session persistence settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Path of the JSON session document.
    pub path: PathBuf,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { path: PathBuf::from(DEFAULT_SESSION_PATH) }
    }
}

/// Language detection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LocaleConfig {
    /// API key for the IP-geolocation service; detection is skipped when
    /// absent.
    pub geo_api_key: Option<String>,
    /// Base URL of the IP-geolocation service.
    pub geo_base_url: Option<String>,
    /// Language used when nothing is stored and detection is unavailable.
    pub default_language: String,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self { geo_api_key: None, geo_base_url: None, default_language: DEFAULT_LANGUAGE.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_backend_contract() {
        let config = Config::default();
        assert_eq!(config.api.base_url, "http://localhost:8080/api/v1");
        assert_eq!(config.api.timeout(), Duration::from_millis(10_000));
        assert_eq!(config.locale.default_language, "zh");
        assert!(config.locale.geo_api_key.is_none());
    }

    #[test]
    fn partial_file_fills_missing_sections_with_defaults() {
        let config: Config =
            toml::from_str("[api]\nbase_url = \"https://shop.internal/api/v1\"\n").unwrap();
        assert_eq!(config.api.base_url, "https://shop.internal/api/v1");
        assert_eq!(config.api.timeout_ms, 10_000);
        assert_eq!(config.session.path, PathBuf::from(".awsomeshop/session.json"));
    }
}
