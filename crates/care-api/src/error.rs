//! API client error types.

use care_core::validation::ValidationErrors;
use thiserror::Error;

/// Errors that can occur when talking to the backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP transport error (connection refused, timeout, TLS, ...).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend answered with a non-success status.
    #[error("{message} (HTTP {status})")]
    Api {
        status: u16,
        /// Message extracted from the response body, or the operation's
        /// fallback text.
        message: String,
    },

    /// Backend rejected the credentials or the session expired.
    #[error("unauthorized: {message}")]
    Unauthorized { message: String },

    /// The backend returned 429 Too Many Requests.
    #[error("rate limited; retry after {retry_after_secs}s")]
    RateLimited { retry_after_secs: u64 },

    /// Response body did not have the expected shape.
    #[error("parse error: {0}")]
    Parse(String),

    /// Payload failed form validation; nothing was sent.
    #[error("invalid input: {0}")]
    Validation(#[from] ValidationErrors),

    /// Client could not be configured.
    #[error(transparent)]
    Config(#[from] care_config::ConfigError),
}

impl ApiError {
    /// Text suitable for a one-line notification.
    #[must_use]
    pub fn notification(&self) -> String {
        match self {
            Self::Api { message, .. } | Self::Unauthorized { message } => message.clone(),
            other => other.to_string(),
        }
    }

    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Unauthorized { .. } => Some(401),
            Self::RateLimited { .. } => Some(429),
            _ => None,
        }
    }
}
