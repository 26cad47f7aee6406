//! Email/password login.

use care_core::record_id;
use care_core::validation::{Validate, ValidationErrors, Validator};
use chrono::{NaiveDate, Utc};
use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::http::decode_single;
use crate::{ApiClient, ApiError};

const LOGIN_PATH: &str = "/api/auth/login";

#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Validate for Credentials {
    fn validate(&self, _today: NaiveDate) -> Result<(), ValidationErrors> {
        Validator::new()
            .email("email", &self.email)
            .required("password", &self.password)
            .finish()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AuthUser {
    #[serde(
        flatten,
        deserialize_with = "record_id::deserialize_or_empty",
        serialize_with = "record_id::serialize"
    )]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    /// `admin`, `company` or `psychologist`.
    #[serde(default)]
    pub role: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginResponse {
    pub token: String,
    #[serde(default)]
    pub user: Option<AuthUser>,
}

impl ApiClient {
    /// Exchange credentials for a bearer token.
    ///
    /// # Errors
    ///
    /// [`ApiError::Validation`] for malformed credentials (no request is
    /// sent), [`ApiError::Unauthorized`] when the backend rejects them.
    pub async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        credentials.validate(Utc::now().date_naive())?;
        let body = serde_json::to_value(credentials).map_err(|e| ApiError::Parse(e.to_string()))?;
        let value = self
            .send(Method::POST, LOGIN_PATH, &[], Some(body), "Login failed")
            .await?;
        let response: LoginResponse = decode_single(value)?;
        tracing::debug!(role = ?response.user.as_ref().and_then(|u| u.role.as_deref()), "logged in");
        Ok(response)
    }
}
