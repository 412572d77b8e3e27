//! IP-geolocation language guess
//!
//! Used once at startup when no language preference is stored yet.
//! Detection is best-effort: a missing API key, a network failure, or a
//! malformed response all fall back to the configured default language.

use std::time::Duration;

use awsomeshop_domain::constants::CHINESE_REGIONS;
use awsomeshop_domain::{LocaleConfig, Result, ShopError};
use reqwest::Method;
use serde::Deserialize;
use tracing::warn;

use crate::http::HttpClient;

#[derive(Deserialize)]
struct GeoResponse {
    country_code2: String,
}

/// Guesses the UI language from the caller's IP location.
pub struct LanguageDetector {
    http: HttpClient,
    config: LocaleConfig,
}

impl LanguageDetector {
    /// # Errors
    ///
    /// Returns [`ShopError::Config`] if the HTTP client cannot be built.
    pub fn new(config: LocaleConfig) -> Result<Self> {
        // Language detection should never hold up startup for long.
        let http = HttpClient::builder().timeout(Duration::from_secs(5)).build()?;
        Ok(Self { http, config })
    }

    /// Resolve a language code, falling back to the configured default.
    pub async fn detect(&self) -> String {
        let (Some(key), Some(base_url)) =
            (self.config.geo_api_key.as_deref(), self.config.geo_base_url.as_deref())
        else {
            return self.config.default_language.clone();
        };

        match self.lookup(base_url, key).await {
            Ok(country_code) => {
                if CHINESE_REGIONS.contains(&country_code.as_str()) {
                    "zh".to_string()
                } else {
                    "en".to_string()
                }
            }
            Err(err) => {
                warn!(error = %err, "language detection failed, using default");
                self.config.default_language.clone()
            }
        }
    }

    async fn lookup(&self, base_url: &str, api_key: &str) -> Result<String> {
        let url = format!("{}/ipgeo", base_url.trim_end_matches('/'));
        let request = self.http.request(Method::GET, &url).query(&[("apiKey", api_key)]);

        let response = self.http.send(request).await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ShopError::Api {
                status: status.as_u16(),
                message: format!("geolocation lookup returned {status}"),
            });
        }

        let geo: GeoResponse = response
            .json()
            .await
            .map_err(|err| ShopError::Shape(format!("geolocation response: {err}")))?;
        Ok(geo.country_code2)
    }
}
