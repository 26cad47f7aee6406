use anyhow::Context;
use care_api::ApiClient;
use care_config::CareConfig;

/// Shared resources built once per invocation.
pub struct AppContext {
    pub config: CareConfig,
    pub client: ApiClient,
}

impl AppContext {
    /// Build the API client and attach the stored token.
    ///
    /// Fails with `care_auth::AuthError::NotAuthenticated` when no token is
    /// stored, before any request is sent.
    pub fn init(config: CareConfig) -> anyhow::Result<Self> {
        let stored = care_auth::require_token(&config.api)?;
        tracing::debug!(source = %stored.source, "using stored token");

        let client = ApiClient::from_config(&config.api)
            .context("failed to build API client from [api] config")?
            .with_token(stored.token);

        Ok(Self { config, client })
    }
}
