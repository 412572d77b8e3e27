//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for the AWSomeShop client
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum ShopError {
    /// The request never reached the server (DNS, connect, TLS failures).
    #[error("Network error: {0}")]
    Network(String),

    /// The request was sent but no response arrived in time.
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// The server answered 401; the session has been torn down globally.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// The server answered 403; left to the caller to handle.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Any other non-success HTTP status.
    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// A successful response whose body did not match the expected envelope.
    #[error("Unexpected response shape: {0}")]
    Shape(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ShopError {
    /// Whether this error came back with an HTTP status, as opposed to the
    /// request never completing.
    pub fn is_status_error(&self) -> bool {
        matches!(
            self,
            ShopError::Unauthorized(_) | ShopError::Forbidden(_) | ShopError::Api { .. }
        )
    }

    /// HTTP status carried by this error, when there is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ShopError::Unauthorized(_) => Some(401),
            ShopError::Forbidden(_) => Some(403),
            ShopError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type alias for AWSomeShop operations
pub type Result<T> = std::result::Result<T, ShopError>;
