//! Team analysis: snapshot → prompt → generated narrative → persisted fields.

use chrono::Utc;
use forge_core::entities::Team;
use forge_core::errors::GenerationError;
use forge_core::ports::{TeamAnalysisUpdate, TeamStore, TextGenerator};
use forge_core::responses::AnalysisResult;

use crate::TeamEngine;
use crate::error::EngineError;
use crate::prompt::build_analysis_prompt;
use crate::tags::resolve_names;

/// Required tags first, then each member's declared skills.
fn referenced_tag_ids(team: &Team) -> Vec<String> {
    let member_tags = team
        .members
        .iter()
        .flat_map(|member| member.skill_tags.iter().map(|skill| skill.tag_id.clone()));
    team.required_tag_ids.iter().cloned().chain(member_tags).collect()
}

impl<S: TeamStore, G: TextGenerator> TeamEngine<S, G> {
    /// Generate a skill-gap analysis for a persisted team and store it.
    ///
    /// A previous analysis is overwritten. On any failure the team record is
    /// left exactly as it was.
    ///
    /// # Errors
    ///
    /// - [`EngineError::Validation`] for a blank `team_id`
    /// - [`EngineError::TeamNotFound`] if the team does not exist
    /// - [`EngineError::AnalysisProviderUnconfigured`] if no credential is set;
    ///   checked before the provider is called
    /// - [`EngineError::AnalysisProviderError`] if generation fails or is empty
    /// - [`EngineError::UpstreamUnavailable`] if the store fails
    pub async fn analyze_team(&self, team_id: &str) -> Result<AnalysisResult, EngineError> {
        let team_id = team_id.trim();
        if team_id.is_empty() {
            return Err(EngineError::Validation("teamId is required".into()));
        }

        let team = self
            .store
            .get_team(team_id)
            .await
            .map_err(|e| EngineError::upstream("load team", &e))?
            .ok_or_else(|| EngineError::TeamNotFound {
                team_id: team_id.to_string(),
            })?;

        let tag_names = resolve_names(&self.store, &referenced_tag_ids(&team)).await?;

        if !self.generator.is_configured() {
            return Err(EngineError::AnalysisProviderUnconfigured);
        }

        let prompt = build_analysis_prompt(&team, &tag_names);
        let analysis = self
            .generator
            .generate_text(&prompt, self.settings.generation)
            .await
            .map_err(|e| match e {
                GenerationError::Unconfigured => EngineError::AnalysisProviderUnconfigured,
                GenerationError::Provider(reason) => {
                    tracing::warn!(%team_id, %reason, "text generation failed");
                    EngineError::AnalysisProviderError(reason)
                }
            })?;
        if analysis.trim().is_empty() {
            return Err(EngineError::AnalysisProviderError(
                "provider returned empty text".into(),
            ));
        }

        let update = TeamAnalysisUpdate {
            ai_analysis: analysis,
            ai_analyzed_at: Utc::now(),
        };
        self.store
            .update_team_analysis(&team.id, &update)
            .await
            .map_err(|e| EngineError::upstream("persist analysis", &e))?;

        tracing::info!(%team_id, chars = update.ai_analysis.len(), "team analyzed");
        Ok(AnalysisResult {
            team_id: team.id,
            analysis: update.ai_analysis,
            analyzed_at: update.ai_analyzed_at,
        })
    }
}
