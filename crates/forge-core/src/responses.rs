//! CLI response types returned as JSON by `tfg` commands.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::Team;

/// Outcome of a successful team analysis.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AnalysisResult {
    pub team_id: String,
    pub analysis: String,
    pub analyzed_at: DateTime<Utc>,
}

/// Response from `tfg team compose`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TeamComposeResponse {
    pub message: String,
    pub team: Team,
}

/// Response from `tfg team analyze`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TeamAnalyzeResponse {
    pub message: String,
    #[serde(flatten)]
    pub result: AnalysisResult,
}

/// Response from `tfg import`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ImportResponse {
    pub tags: u32,
    pub users: u32,
    pub posts: u32,
}
