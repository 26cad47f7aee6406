use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::output::output;
use crate::ui;

#[derive(Serialize)]
struct AuthLogoutResponse {
    cleared: bool,
}

pub fn handle(flags: &GlobalFlags) -> anyhow::Result<()> {
    care_auth::logout()?;
    ui::notify_success("Logged out");
    output(&AuthLogoutResponse { cleared: true }, flags.format)
}
