//! # care-api
//!
//! Typed HTTP client for the clinical administration backend.
//!
//! Every CRUD resource goes through the generic [`Resource`] seam:
//! - organizations (`/api/admin/organizations`)
//! - individuals, i.e. psychologists (`/api/admin/individuals`)
//! - patients (`/api/psychologist/patients`)
//! - triage records (`/api/psychologist/triage`)
//!
//! plus the company dashboard, the diagnosis list and login.

pub mod auth;
pub mod company;
pub mod individuals;
pub mod organizations;
pub mod patients;
pub mod resource;
pub mod triage;

mod error;
mod http;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;

pub use error::ApiError;
pub use http::extract_error_message;
pub use resource::{Mutation, Resource};

use std::time::Duration;

use care_config::ApiConfig;
use reqwest::Method;
use serde_json::Value;

use crate::http::{check_response, read_json};

const USER_AGENT: &str = concat!("carectl/", env!("CARGO_PKG_VERSION"));

/// HTTP client bound to one backend and, optionally, one bearer token.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// Build a client for `base_url` with a request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the underlying `reqwest::Client` fails
    /// to build.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
        })
    }

    /// Build a client from the `[api]` config section, picking up its static
    /// token if one is set.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Config`] for an unusable base URL or timeout.
    pub fn from_config(config: &ApiConfig) -> Result<Self, ApiError> {
        config.check()?;
        let client = Self::new(
            config.normalized_base_url(),
            Duration::from_secs(config.timeout_secs),
        )?;
        Ok(if config.has_token() {
            client.with_token(config.token.clone())
        } else {
            client
        })
    }

    /// Attach a bearer token. A blank token clears it.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        let token = token.into();
        self.token = (!token.trim().is_empty()).then_some(token);
        self
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub const fn has_token(&self) -> bool {
        self.token.is_some()
    }

    fn url(&self, path: &str, query: &[(String, String)]) -> String {
        let mut url = format!("{}{path}", self.base_url);
        if !query.is_empty() {
            let encoded: Vec<String> = query
                .iter()
                .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
                .collect();
            url.push('?');
            url.push_str(&encoded.join("&"));
        }
        url
    }

    /// Send one request and return its JSON body (`null` when empty).
    ///
    /// `fallback` is the message used when a failed response carries none.
    pub(crate) async fn send(
        &self,
        method: Method,
        path: &str,
        query: &[(String, String)],
        body: Option<Value>,
        fallback: &str,
    ) -> Result<Value, ApiError> {
        let url = self.url(path, query);
        let mut request = self.http.request(method.clone(), &url);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }
        if let Some(body) = &body {
            request = request.json(body);
        }

        let resp = request.send().await.map_err(|e| {
            tracing::warn!(%method, path, error = %e, "api request could not be sent");
            ApiError::Http(e)
        })?;
        tracing::debug!(%method, path, status = resp.status().as_u16(), "api response");

        let resp = check_response(resp, fallback).await?;
        read_json(resp).await
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn client() -> ApiClient {
        ApiClient::new("http://localhost:5000/", Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        assert_eq!(client().base_url(), "http://localhost:5000");
    }

    #[test]
    fn query_pairs_are_encoded() {
        let query = vec![
            ("page".to_string(), "2".to_string()),
            ("search".to_string(), "north side&co".to_string()),
        ];
        assert_eq!(
            client().url("/api/admin/organizations", &query),
            "http://localhost:5000/api/admin/organizations?page=2&search=north%20side%26co"
        );
    }

    #[test]
    fn blank_token_is_ignored() {
        assert!(!client().with_token("  ").has_token());
        assert!(client().with_token("abc").has_token());
    }

    #[test]
    fn from_config_rejects_bad_scheme() {
        let config = ApiConfig {
            base_url: "ftp://files".into(),
            ..ApiConfig::default()
        };
        assert!(matches!(ApiClient::from_config(&config), Err(ApiError::Config(_))));
    }
}
