use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("not authenticated; run `carectl auth login`")]
    NotAuthenticated,

    #[error("token store error: {0}")]
    TokenStore(String),
}
