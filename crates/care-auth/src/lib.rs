//! # care-auth
//!
//! Bearer token persistence for carectl.
//!
//! `carectl auth login` stores the token returned by the backend in the OS
//! keychain (`keyring`), falling back to a `0600` file when no keychain is
//! available. Lookups also honor a token supplied through configuration.

pub mod error;
pub mod token_store;

pub use error::AuthError;
pub use token_store::{StoredToken, TokenSource, TokenStore};

use care_config::ApiConfig;

/// Resolve the best available token for `config`.
///
/// Priority: keyring, `CARECTL_API__TOKEN`, `api.token` from config files,
/// then the credentials file.
#[must_use]
pub fn resolve_token(config: &ApiConfig) -> Option<StoredToken> {
    match TokenStore::new() {
        Ok(store) => store.load(config),
        Err(error) => {
            tracing::warn!(%error, "token store unavailable");
            config.has_token().then(|| StoredToken {
                token: config.token.clone(),
                source: TokenSource::Config,
            })
        }
    }
}

/// Like [`resolve_token`] but fails when nothing is stored.
///
/// # Errors
///
/// Returns [`AuthError::NotAuthenticated`] when no token is found.
pub fn require_token(config: &ApiConfig) -> Result<StoredToken, AuthError> {
    resolve_token(config).ok_or(AuthError::NotAuthenticated)
}

/// Clear stored credentials.
///
/// # Errors
///
/// Returns [`AuthError::TokenStore`] if the credentials file cannot be removed.
pub fn logout() -> Result<(), AuthError> {
    TokenStore::new()?.delete()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_authenticated_points_at_login() {
        let message = AuthError::NotAuthenticated.to_string();
        assert!(message.contains("carectl auth login"));
    }
}
