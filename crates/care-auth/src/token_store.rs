use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use care_config::ApiConfig;
use serde::Serialize;

use crate::error::AuthError;

const DEFAULT_KEYRING_SERVICE: &str = "carectl";
const KEYRING_USER: &str = "api-token";
const CREDENTIALS_DIR: &str = ".carectl";
const CREDENTIALS_FILE_NAME: &str = "credentials";
const TOKEN_ENV: &str = "CARECTL_API__TOKEN";

/// Where a token was found or written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenSource {
    Keyring,
    Env,
    Config,
    File,
}

impl fmt::Display for TokenSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Keyring => "keyring",
            Self::Env => "env",
            Self::Config => "config",
            Self::File => "file",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoredToken {
    #[serde(skip)]
    pub token: String,
    pub source: TokenSource,
}

/// Keyring entry plus file fallback.
#[derive(Debug, Clone)]
pub struct TokenStore {
    service: Option<String>,
    credentials_path: PathBuf,
}

impl TokenStore {
    /// Store backed by the OS keychain and `~/.carectl/credentials`.
    ///
    /// The keyring service defaults to `carectl`; set
    /// `CARECTL_KEYRING_SERVICE` to isolate test runs.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::TokenStore`] when the home directory is unknown.
    pub fn new() -> Result<Self, AuthError> {
        let home = dirs::home_dir().ok_or_else(|| {
            AuthError::TokenStore("home directory not found; cannot store credentials".into())
        })?;
        let service = std::env::var("CARECTL_KEYRING_SERVICE")
            .unwrap_or_else(|_| DEFAULT_KEYRING_SERVICE.to_string());
        Ok(Self {
            service: Some(service),
            credentials_path: home.join(CREDENTIALS_DIR).join(CREDENTIALS_FILE_NAME),
        })
    }

    /// Store that never touches the keychain.
    #[must_use]
    pub fn file_only(credentials_path: impl Into<PathBuf>) -> Self {
        Self {
            service: None,
            credentials_path: credentials_path.into(),
        }
    }

    #[must_use]
    pub fn credentials_path(&self) -> &Path {
        &self.credentials_path
    }

    fn entry(&self) -> Option<keyring::Entry> {
        let service = self.service.as_deref()?;
        keyring::Entry::new(service, KEYRING_USER)
            .map_err(|error| tracing::debug!(%error, "keyring unavailable"))
            .ok()
    }

    /// Persist `token`, preferring the keychain.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::TokenStore`] if the file fallback also fails.
    pub fn store(&self, token: &str) -> Result<TokenSource, AuthError> {
        if let Some(entry) = self.entry() {
            match entry.set_password(token) {
                Ok(()) => return Ok(TokenSource::Keyring),
                Err(error) => tracing::warn!(%error, "keyring store failed; falling back to file"),
            }
        }
        self.store_file(token)?;
        Ok(TokenSource::File)
    }

    /// Find a token: keyring, env, config, then file.
    #[must_use]
    pub fn load(&self, config: &ApiConfig) -> Option<StoredToken> {
        let env_token = std::env::var(TOKEN_ENV).ok();
        self.resolve(env_token.as_deref(), config)
    }

    fn resolve(&self, env_token: Option<&str>, config: &ApiConfig) -> Option<StoredToken> {
        let found = |token: &str, source| {
            let token = token.trim();
            (!token.is_empty()).then(|| StoredToken {
                token: token.to_string(),
                source,
            })
        };

        if let Some(entry) = self.entry()
            && let Ok(token) = entry.get_password()
            && let Some(stored) = found(&token, TokenSource::Keyring)
        {
            return Some(stored);
        }

        // Figment folds the env var into `config.token`; check it first so
        // the source is reported accurately.
        if let Some(token) = env_token.and_then(|t| found(t, TokenSource::Env)) {
            return Some(token);
        }
        if let Some(token) = found(&config.token, TokenSource::Config) {
            return Some(token);
        }

        self.load_file().and_then(|t| found(&t, TokenSource::File))
    }

    /// Remove the keyring entry and the credentials file.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::TokenStore`] if the file exists but cannot be removed.
    pub fn delete(&self) -> Result<(), AuthError> {
        if let Some(entry) = self.entry() {
            // A missing entry is fine.
            let _ = entry.delete_credential();
        }

        let path = &self.credentials_path;
        if path.exists() {
            fs::remove_file(path).map_err(|e| {
                AuthError::TokenStore(format!("failed to delete {}: {e}", path.display()))
            })?;
        }
        Ok(())
    }

    fn store_file(&self, token: &str) -> Result<(), AuthError> {
        let path = &self.credentials_path;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| AuthError::TokenStore(format!("mkdir {}: {e}", parent.display())))?;
            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                if let Err(e) = fs::set_permissions(parent, fs::Permissions::from_mode(0o700)) {
                    tracing::warn!("failed to chmod 0700 {}: {e}", parent.display());
                }
            }
        }
        fs::write(path, token)
            .map_err(|e| AuthError::TokenStore(format!("write {}: {e}", path.display())))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(path, fs::Permissions::from_mode(0o600))
                .map_err(|e| AuthError::TokenStore(format!("chmod {}: {e}", path.display())))?;
        }
        Ok(())
    }

    fn load_file(&self) -> Option<String> {
        fs::read_to_string(&self.credentials_path)
            .ok()
            .filter(|s| !s.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn file_store(dir: &tempfile::TempDir) -> TokenStore {
        TokenStore::file_only(dir.path().join(".carectl").join("credentials"))
    }

    fn config_with_token(token: &str) -> ApiConfig {
        ApiConfig {
            token: token.into(),
            ..ApiConfig::default()
        }
    }

    #[test]
    fn default_path_is_under_home() {
        let store = TokenStore::new().expect("home dir");
        assert!(store.credentials_path().ends_with(".carectl/credentials"));
    }

    #[test]
    fn file_store_load_delete_cycle() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let store = file_store(&tmp);

        assert_eq!(store.store("jwt-abc").expect("store"), TokenSource::File);
        let loaded = store.resolve(None, &ApiConfig::default()).expect("token");
        assert_eq!(loaded.token, "jwt-abc");
        assert_eq!(loaded.source, TokenSource::File);

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = fs::metadata(store.credentials_path())
                .expect("metadata")
                .permissions()
                .mode()
                & 0o777;
            assert_eq!(mode, 0o600, "credentials file should be 0600");
        }

        store.delete().expect("delete");
        assert!(!store.credentials_path().exists());
        assert!(store.resolve(None, &ApiConfig::default()).is_none());
    }

    #[test]
    fn env_beats_config_beats_file() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let store = file_store(&tmp);
        store.store("from-file").expect("store");
        let config = config_with_token("from-config");

        let env = store.resolve(Some("from-env"), &config).expect("token");
        assert_eq!((env.token.as_str(), env.source), ("from-env", TokenSource::Env));

        let cfg = store.resolve(Some("  "), &config).expect("token");
        assert_eq!(cfg.source, TokenSource::Config);

        let file = store.resolve(None, &ApiConfig::default()).expect("token");
        assert_eq!(file.source, TokenSource::File);
    }

    #[test]
    fn whitespace_only_file_is_ignored() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let store = file_store(&tmp);
        store.store("   \n  ").expect("store");
        assert!(store.resolve(None, &ApiConfig::default()).is_none());
    }

    #[test]
    fn deleting_missing_credentials_is_ok() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        assert!(file_store(&tmp).delete().is_ok());
    }
}
