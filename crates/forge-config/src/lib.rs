//! # forge-config
//!
//! Layered configuration loading for TeamForge using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`TEAMFORGE_*` prefix, `__` as separator)
//! 2. `GEMINI_API_KEY`, mapped onto `analysis.api_key`
//! 3. Project-level `.teamforge/config.toml`
//! 4. User-level `~/.config/teamforge/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! `TEAMFORGE_ANALYSIS__API_KEY` -> `analysis.api_key`,
//! `TEAMFORGE_DATABASE__PATH` -> `database.path`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use forge_config::ForgeConfig;
//!
//! let config = ForgeConfig::load_with_dotenv().expect("config");
//! if !config.analysis.is_configured() {
//!     eprintln!("team analysis is disabled");
//! }
//! ```

mod analysis;
mod database;
mod error;
mod general;

pub use analysis::AnalysisConfig;
pub use database::DatabaseConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Provider-native env var accepted as a fallback API key.
pub const GEMINI_API_KEY_ENV: &str = "GEMINI_API_KEY";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ForgeConfig {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub analysis: AnalysisConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl ForgeConfig {
    /// Load and validate configuration from TOML files and environment variables.
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if extraction fails or a value is out of range.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration after reading `.env`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if extraction fails or a value is out of range.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".teamforge/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment = figment.merge(
            Env::raw()
                .only(&[GEMINI_API_KEY_ENV])
                .map(|_| "analysis.api_key".into()),
        );

        figment.merge(Env::prefixed("TEAMFORGE_").split("__"))
    }

    /// Check cross-field constraints that serde defaults cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.analysis.validate()?;
        if self.database.path.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "database.path".into(),
                reason: "must not be empty".into(),
            });
        }
        Ok(())
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("teamforge").join("config.toml"))
    }

    /// Read `.env` from the current directory or its nearest ancestor.
    ///
    /// Variables already set in the process environment win.
    fn load_dotenv() {
        let _ = dotenvy::dotenv();
    }
}
