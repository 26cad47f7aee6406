use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Org { action } => commands::org::handle(&action, ctx, flags).await,
        Commands::Psychologist { action } => {
            commands::psychologist::handle(&action, ctx, flags).await
        }
        Commands::Company { action } => commands::company::handle(&action, ctx, flags).await,
        Commands::Patient { action } => commands::patient::handle(&action, ctx, flags).await,
        Commands::Triage { action } => commands::triage::handle(&action, ctx, flags).await,
        Commands::Schema(_) | Commands::Auth { .. } => {
            anyhow::bail!("schema and auth are handled before dispatch")
        }
    }
}
