use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read carectl configuration: {0}")]
    Figment(#[from] figment::Error),

    /// A setting parsed but is unusable, e.g. a base URL without a scheme.
    #[error("invalid value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}
