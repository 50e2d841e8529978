//! Collaborator interfaces consumed by the team engine.
//!
//! `forge-db` implements [`TeamStore`] on top of libSQL and `forge-llm`
//! implements [`TextGenerator`] on top of the Gemini HTTP API. Tests in
//! `forge-engine` substitute in-memory versions.

use std::future::Future;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::{NewTeam, Project, Tag, Team, User};
use crate::errors::{GenerationError, StoreError};

/// Fields written onto a team by a successful analysis.
///
/// Both fields are always written in one store operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamAnalysisUpdate {
    pub ai_analysis: String,
    pub ai_analyzed_at: DateTime<Utc>,
}

/// Sampling parameters for a text generation call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenerationParams {
    pub temperature: f32,
    pub max_output_tokens: u32,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            max_output_tokens: 1000,
        }
    }
}

/// Document store holding projects, users, tags and teams.
pub trait TeamStore: Send + Sync {
    fn get_project(
        &self,
        id: &str,
    ) -> impl Future<Output = Result<Option<Project>, StoreError>> + Send;

    /// Full candidate pool, in store order.
    fn get_all_users(&self) -> impl Future<Output = Result<Vec<User>, StoreError>> + Send;

    fn get_tag(&self, id: &str) -> impl Future<Output = Result<Option<Tag>, StoreError>> + Send;

    /// Persist a team atomically and return it with its assigned ID.
    fn create_team(&self, team: NewTeam) -> impl Future<Output = Result<Team, StoreError>> + Send;

    fn get_team(&self, id: &str) -> impl Future<Output = Result<Option<Team>, StoreError>> + Send;

    /// Overwrite the analysis fields of a team. Membership is never touched.
    fn update_team_analysis(
        &self,
        id: &str,
        update: &TeamAnalysisUpdate,
    ) -> impl Future<Output = Result<(), StoreError>> + Send;
}

/// Opaque text generation capability.
pub trait TextGenerator: Send + Sync {
    /// Whether a credential is available. Checked before any call is made.
    fn is_configured(&self) -> bool;

    fn generate_text(
        &self,
        prompt: &str,
        params: GenerationParams,
    ) -> impl Future<Output = Result<String, GenerationError>> + Send;
}
