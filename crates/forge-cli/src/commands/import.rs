use anyhow::Context;
use forge_db::import::Dataset;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ImportArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `tfg import`.
pub async fn handle(args: &ImportArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let text = tokio::fs::read_to_string(&args.file)
        .await
        .with_context(|| format!("failed to read {}", args.file))?;
    let dataset = Dataset::from_json(&text)?;
    let counts = ctx.service().import_dataset(&dataset).await?;
    output(&counts, flags.format)
}
