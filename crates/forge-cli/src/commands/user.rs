use anyhow::anyhow;
use forge_core::entities::User;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::UserCommands;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct UserListResponse {
    users: Vec<User>,
}

/// Handle `tfg user`.
pub async fn handle(
    action: &UserCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        UserCommands::List => {
            let users = ctx.service().list_users().await?;
            output(&UserListResponse { users }, flags.format)
        }
        UserCommands::Get { id } => {
            let user = ctx
                .service()
                .get_user(id)
                .await?
                .ok_or_else(|| anyhow!("user not found: {id}"))?;
            output(&user, flags.format)
        }
    }
}
