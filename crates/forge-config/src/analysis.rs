//! Text generation provider configuration (Gemini).

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

fn default_model() -> String {
    String::from("gemini-1.5-flash")
}

fn default_endpoint() -> String {
    String::from("https://generativelanguage.googleapis.com/v1beta")
}

const fn default_temperature() -> f32 {
    0.7
}

const fn default_max_output_tokens() -> u32 {
    1000
}

const fn default_timeout_secs() -> u64 {
    60
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AnalysisConfig {
    /// Provider API key. Falls back to `GEMINI_API_KEY` when unset.
    #[serde(default)]
    pub api_key: String,

    #[serde(default = "default_model")]
    pub model: String,

    /// Base URL of the generative language API.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Sampling temperature. Moderate creativity by default.
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Upper bound on generated tokens.
    #[serde(default = "default_max_output_tokens")]
    pub max_output_tokens: u32,

    /// HTTP request timeout for the provider client.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: default_model(),
            endpoint: default_endpoint(),
            temperature: default_temperature(),
            max_output_tokens: default_max_output_tokens(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl AnalysisConfig {
    /// Check if a credential is present.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    /// Reject sampling parameters the provider would refuse.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for a temperature outside
    /// `0.0..=2.0`, a zero token bound, or an empty model name.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(ConfigError::InvalidValue {
                field: "analysis.temperature".into(),
                reason: format!("{} is outside 0.0..=2.0", self.temperature),
            });
        }
        if self.max_output_tokens == 0 {
            return Err(ConfigError::InvalidValue {
                field: "analysis.max_output_tokens".into(),
                reason: "must be greater than zero".into(),
            });
        }
        if self.model.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "analysis.model".into(),
                reason: "must not be empty".into(),
            });
        }
        Ok(())
    }
}
