//! Failures while assembling a `ForgeConfig`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A TOML file or `TEAMFORGE_*` variable could not be parsed into
    /// `ForgeConfig`, e.g. `TEAMFORGE_ANALYSIS__TEMPERATURE=warm`.
    #[error("cannot read teamforge configuration: {0}")]
    Figment(#[from] figment::Error),

    /// A value parsed but is unusable, e.g. `analysis.temperature = 3.5` or an
    /// empty `database.path`. `field` is the dotted config key.
    #[error("invalid value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}
