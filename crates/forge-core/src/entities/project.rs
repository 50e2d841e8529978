use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A project posting that a team is assembled for.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Project {
    pub id: String,
    pub title: Option<String>,
    /// Required skill tag IDs. Absent in the source document means no requirement.
    #[serde(default)]
    pub requirements: Vec<String>,
}
