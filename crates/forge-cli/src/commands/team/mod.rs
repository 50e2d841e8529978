mod analyze;
mod compose;
mod get;
mod list;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::TeamCommands;
use crate::context::AppContext;

/// Handle `tfg team`.
pub async fn handle(
    action: &TeamCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        TeamCommands::Compose { post, count } => compose::run(post, *count, ctx, flags).await,
        TeamCommands::Analyze { id } => analyze::run(id, ctx, flags).await,
        TeamCommands::Get { id } => get::run(id, ctx, flags).await,
        TeamCommands::List { post } => list::run(post, ctx, flags).await,
    }
}
