use forge_engine::EngineError;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(team_id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let team = ctx
        .service()
        .get_team(team_id)
        .await?
        .ok_or_else(|| EngineError::TeamNotFound {
            team_id: team_id.to_string(),
        })?;
    output(&team, flags.format)
}
