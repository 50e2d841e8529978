use forge_core::entities::Team;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct TeamListResponse {
    post_id: String,
    teams: Vec<Team>,
}

pub async fn run(post_id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let teams = ctx.service().list_teams_for_post(post_id).await?;
    output(
        &TeamListResponse {
            post_id: post_id.to_string(),
            teams,
        },
        flags.format,
    )
}
