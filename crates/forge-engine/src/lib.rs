//! # forge-engine
//!
//! Team composition engine for TeamForge.
//!
//! - [`eligibility::filter_eligible`]: who may join a project's team
//! - [`selector::select_team`]: uniform random pick with an injected RNG
//! - [`TeamEngine::compose_team`]: load project and pool, select, persist
//! - [`tags::resolve_names`]: tag IDs to display names
//! - [`TeamEngine::analyze_team`]: prompt the text generator, persist the result
//!
//! Each operation is a single attempt without retries or record locking.
//! Two compositions for the same project produce two teams, and concurrent
//! analyses of one team are last-writer-wins.

mod analysis;
mod compose;
pub mod eligibility;
pub mod error;
pub mod prompt;
pub mod selector;
pub mod tags;

use std::sync::{Mutex, MutexGuard, PoisonError};

use forge_core::ports::{GenerationParams, TeamStore, TextGenerator};
use rand::rngs::StdRng;

pub use error::{EngineError, ErrorEnvelope};

/// Tunables the engine reads from configuration.
#[derive(Debug, Clone)]
pub struct EngineSettings {
    /// Project name recorded when the project has no title.
    pub fallback_project_name: String,
    /// Sampling parameters for every analysis call.
    pub generation: GenerationParams,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            fallback_project_name: String::from("Untitled project"),
            generation: GenerationParams::default(),
        }
    }
}

/// Orchestrates composition and analysis over a store and a text generator.
pub struct TeamEngine<S, G> {
    store: S,
    generator: G,
    rng: Mutex<StdRng>,
    settings: EngineSettings,
}

impl<S: TeamStore, G: TextGenerator> TeamEngine<S, G> {
    /// Build an engine. `rng` is the only randomness team selection uses.
    pub const fn new(store: S, generator: G, rng: StdRng, settings: EngineSettings) -> Self {
        Self {
            store,
            generator,
            rng: Mutex::new(rng),
            settings,
        }
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub const fn generator(&self) -> &G {
        &self.generator
    }

    #[must_use]
    pub const fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    /// The guard must be dropped before the next await point.
    fn rng(&self) -> MutexGuard<'_, StdRng> {
        self.rng.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
