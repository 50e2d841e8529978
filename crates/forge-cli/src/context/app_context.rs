use std::path::Path;

use anyhow::Context;
use forge_config::ForgeConfig;
use forge_core::ports::GenerationParams;
use forge_db::service::ForgeService;
use forge_engine::{EngineSettings, TeamEngine};
use forge_llm::GeminiClient;
use rand::SeedableRng;
use rand::rngs::StdRng;

pub type ForgeEngine = TeamEngine<ForgeService, GeminiClient>;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub engine: ForgeEngine,
}

impl AppContext {
    /// Open the database, build the Gemini client and wire the engine.
    pub async fn init(config: &ForgeConfig) -> anyhow::Result<Self> {
        if !config.database.is_in_memory() {
            ensure_parent_dir(Path::new(&config.database.path))?;
        }

        let service = ForgeService::new_local(&config.database.path)
            .await
            .with_context(|| format!("failed to open database at {}", config.database.path))?;
        let generator = GeminiClient::from_config(&config.analysis)
            .context("failed to build analysis client")?;

        let rng = match config.general.selection_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let settings = EngineSettings {
            fallback_project_name: config.general.fallback_project_name.clone(),
            generation: GenerationParams {
                temperature: config.analysis.temperature,
                max_output_tokens: config.analysis.max_output_tokens,
            },
        };

        Ok(Self {
            engine: TeamEngine::new(service, generator, rng, settings),
        })
    }

    #[must_use]
    pub const fn service(&self) -> &ForgeService {
        self.engine.store()
    }
}

fn ensure_parent_dir(path: &Path) -> anyhow::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display())),
        _ => Ok(()),
    }
}
