use forge_core::entities::Tag;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::TagCommands;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct TagSearchResponse {
    query: String,
    tags: Vec<Tag>,
}

/// Handle `tfg tag`.
pub async fn handle(
    action: &TagCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        TagCommands::Search { query } => {
            let tags = ctx.service().search_tags(query).await?;
            output(
                &TagSearchResponse {
                    query: query.clone(),
                    tags,
                },
                flags.format,
            )
        }
    }
}
