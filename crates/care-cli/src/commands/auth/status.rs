use care_auth::TokenSource;
use care_config::CareConfig;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::output::output;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AuthStatusResponse {
    authenticated: bool,
    base_url: String,
    token_source: Option<TokenSource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    note: Option<String>,
}

impl AuthStatusResponse {
    fn new(base_url: String, token_source: Option<TokenSource>) -> Self {
        Self {
            authenticated: token_source.is_some(),
            base_url,
            note: token_source
                .is_none()
                .then(|| "no token found; run 'carectl auth login'".to_string()),
            token_source,
        }
    }
}

/// Report whether a token is available and where it came from. The token is
/// never printed and not checked against the server.
pub fn handle(flags: &GlobalFlags, config: &CareConfig) -> anyhow::Result<()> {
    let source = care_auth::resolve_token(&config.api).map(|stored| stored.source);
    output(
        &AuthStatusResponse::new(config.api.normalized_base_url().to_string(), source),
        flags.format,
    )
}
