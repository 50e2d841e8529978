//! General application configuration.

use serde::{Deserialize, Serialize};

fn default_fallback_project_name() -> String {
    String::from("Untitled project")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Project name recorded on a team when the project has no title.
    #[serde(default = "default_fallback_project_name")]
    pub fallback_project_name: String,

    /// Fixed seed for team selection. Unset means seed from the OS.
    #[serde(default)]
    pub selection_seed: Option<u64>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            fallback_project_name: default_fallback_project_name(),
            selection_seed: None,
        }
    }
}
