use forge_core::responses::TeamComposeResponse;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    post_id: &str,
    count: u32,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let team = ctx.engine.compose_team(post_id, count).await?;
    let response = TeamComposeResponse {
        message: format!("Team of {} created", team.member_count),
        team,
    };
    output(&response, flags.format)
}
