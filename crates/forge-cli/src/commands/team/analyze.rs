use forge_core::responses::TeamAnalyzeResponse;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(team_id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let result = ctx.engine.analyze_team(team_id).await?;
    output(
        &TeamAnalyzeResponse {
            message: String::from("Team analysis complete"),
            result,
        },
        flags.format,
    )
}
