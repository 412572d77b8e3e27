//! API client with bearer-token injection and global 401 handling
//!
//! Every request reads the token from the session store at send time; a
//! 401 response tears the persisted session down and forces navigation to
//! the login page before the error reaches the caller. All other failures
//! propagate unchanged.

use std::sync::Arc;

use awsomeshop_core::{Navigator, Route, SessionStore};
use awsomeshop_domain::{ApiConfig, Result, ShopError};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::http::HttpClient;

/// Authenticated JSON client for the rewards backend.
pub struct ApiClient {
    http: HttpClient,
    base_url: String,
    store: Arc<dyn SessionStore>,
    navigator: Arc<dyn Navigator>,
}

impl ApiClient {
    /// Build a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ShopError::Config`] if the underlying HTTP client cannot
    /// be constructed.
    pub fn new(
        config: &ApiConfig,
        store: Arc<dyn SessionStore>,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self> {
        let http = HttpClient::builder().timeout(config.timeout()).build()?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            store,
            navigator,
        })
    }

    /// Execute a GET request and decode the JSON body.
    pub async fn get<R: DeserializeOwned>(&self, path: &str) -> Result<R> {
        self.execute(Method::GET, path, &[], None).await
    }

    /// Execute a GET request with query parameters.
    pub async fn get_query<R: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<R> {
        self.execute(Method::GET, path, query, None).await
    }

    /// Execute a POST request with a JSON body.
    pub async fn post<B: Serialize + ?Sized, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<R> {
        self.execute(Method::POST, path, &[], Some(to_body(body)?)).await
    }

    /// Execute a PUT request with a JSON body.
    pub async fn put<B: Serialize + ?Sized, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<R> {
        self.execute(Method::PUT, path, &[], Some(to_body(body)?)).await
    }

    /// Execute a PATCH request with a JSON body.
    pub async fn patch<B: Serialize + ?Sized, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<R> {
        self.execute(Method::PATCH, path, &[], Some(to_body(body)?)).await
    }

    /// Execute a DELETE request.
    pub async fn delete<R: DeserializeOwned>(&self, path: &str) -> Result<R> {
        self.execute(Method::DELETE, path, &[], None).await
    }

    async fn execute<R: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<serde_json::Value>,
    ) -> Result<R> {
        let url = format!("{}{}", self.base_url, path);

        let mut request = self.http.request(method, &url);
        // Token is read per request: login/logout between calls must take
        // effect without rebuilding the client.
        if let Some(token) = self.store.token() {
            request = request.bearer_auth(token);
        }
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(body) = &body {
            request = request.json(body);
        }

        let response = self.http.send(request).await?;
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            let message = read_body(response).await;
            warn!(path, "unauthorized response, clearing session");
            self.store.clear();
            self.navigator.force_navigate(Route::Login);
            return Err(ShopError::Unauthorized(error_message(path, status, &message)));
        }

        if status == StatusCode::FORBIDDEN {
            let message = read_body(response).await;
            warn!(path, "forbidden response");
            return Err(ShopError::Forbidden(error_message(path, status, &message)));
        }

        if !status.is_success() {
            let message = read_body(response).await;
            debug!(path, status = status.as_u16(), "API error response");
            return Err(ShopError::Api {
                status: status.as_u16(),
                message: error_message(path, status, &message),
            });
        }

        let text = response
            .text()
            .await
            .map_err(|err| ShopError::Network(format!("{path}: failed to read body: {err}")))?;

        // 204s and empty bodies decode as JSON null (callers use IgnoredAny
        // for endpoints that return nothing).
        let payload = if text.trim().is_empty() { "null" } else { text.as_str() };
        serde_json::from_str(payload).map_err(|err| ShopError::Shape(format!("{path}: {err}")))
    }
}

fn to_body<B: Serialize + ?Sized>(body: &B) -> Result<serde_json::Value> {
    serde_json::to_value(body)
        .map_err(|err| ShopError::InvalidInput(format!("failed to serialize body: {err}")))
}

async fn read_body(response: reqwest::Response) -> String {
    response.text().await.unwrap_or_default()
}

fn error_message(path: &str, status: StatusCode, body: &str) -> String {
    // Backend errors arrive as {"error": "..."}; fall back to the raw body.
    let detail = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| value.get("error").and_then(|e| e.as_str()).map(String::from))
        .unwrap_or_else(|| body.trim().to_string());

    if detail.is_empty() {
        format!("{path} returned status {status}")
    } else {
        format!("{path}: {detail}")
    }
}
