use std::io::BufRead;

use anyhow::Context;
use care_api::ApiClient;
use care_api::auth::{AuthUser, Credentials};
use care_auth::{TokenSource, TokenStore};
use care_config::CareConfig;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AuthLoginArgs;
use crate::output::output;
use crate::progress::with_spinner;
use crate::ui;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AuthLoginResponse {
    authenticated: bool,
    user: Option<AuthUser>,
    token_source: TokenSource,
}

pub async fn handle(
    args: &AuthLoginArgs,
    flags: &GlobalFlags,
    config: &CareConfig,
) -> anyhow::Result<()> {
    let password = read_password(args, std::io::stdin().lock())?;
    let client = ApiClient::from_config(&config.api)
        .context("failed to build API client from [api] config")?;

    let credentials = Credentials {
        email: args.email.trim().to_string(),
        password,
    };
    let response = with_spinner("Signing in", client.login(&credentials))
        .await
        .map_err(|error| anyhow::anyhow!("auth login: {}", error.notification()))?;

    let store = TokenStore::new()?;
    let token_source = store.store(&response.token)?;
    tracing::info!(source = %token_source, "token stored");
    ui::notify_success("Logged in");

    output(
        &AuthLoginResponse {
            authenticated: true,
            user: response.user,
            token_source,
        },
        flags.format,
    )
}

fn read_password(args: &AuthLoginArgs, mut stdin: impl BufRead) -> anyhow::Result<String> {
    if let Some(password) = &args.password {
        return Ok(password.clone());
    }
    if !args.password_stdin {
        anyhow::bail!("auth login: pass --password-stdin or --password");
    }
    let mut line = String::new();
    stdin
        .read_line(&mut line)
        .context("failed to read password from stdin")?;
    let password = line.trim_end_matches(['\r', '\n']).to_string();
    if password.is_empty() {
        anyhow::bail!("auth login: empty password on stdin");
    }
    Ok(password)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn args(password: Option<&str>, password_stdin: bool) -> AuthLoginArgs {
        AuthLoginArgs {
            email: "ana@clinic.example".into(),
            password: password.map(str::to_string),
            password_stdin,
        }
    }

    #[test]
    fn stdin_password_drops_line_ending() {
        let password = read_password(&args(None, true), "s3cret pass\r\n".as_bytes()).unwrap();
        assert_eq!(password, "s3cret pass");
    }

    #[test]
    fn flag_password_wins() {
        let password = read_password(&args(Some("flag"), false), "".as_bytes()).unwrap();
        assert_eq!(password, "flag");
    }

    #[test]
    fn no_password_source_is_an_error() {
        assert!(read_password(&args(None, false), "".as_bytes()).is_err());
        assert!(read_password(&args(None, true), "\n".as_bytes()).is_err());
    }
}
