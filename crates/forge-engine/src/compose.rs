//! Team composition: project → eligible pool → random pick → persisted team.

use chrono::Utc;
use forge_core::entities::{NewTeam, Team, TeamMember};
use forge_core::ports::{TeamStore, TextGenerator};

use crate::TeamEngine;
use crate::eligibility::filter_eligible;
use crate::error::EngineError;
use crate::selector::select_team;

impl<S: TeamStore, G: TextGenerator> TeamEngine<S, G> {
    /// Assemble and persist a team of exactly `member_count` users for a project.
    ///
    /// # Errors
    ///
    /// - [`EngineError::Validation`] for a blank `post_id` or zero `member_count`
    /// - [`EngineError::ProjectNotFound`] if the project does not exist
    /// - [`EngineError::InsufficientCandidates`] if too few users are eligible
    /// - [`EngineError::UpstreamUnavailable`] if loading or persisting fails;
    ///   `operation` is `"persist team"` when selection succeeded but the
    ///   write did not
    pub async fn compose_team(&self, post_id: &str, member_count: u32) -> Result<Team, EngineError> {
        let post_id = post_id.trim();
        if post_id.is_empty() {
            return Err(EngineError::Validation("postId is required".into()));
        }
        if member_count == 0 {
            return Err(EngineError::Validation(
                "memberCount must be a positive integer".into(),
            ));
        }
        let size = usize::try_from(member_count)
            .map_err(|_| EngineError::Validation("memberCount is too large".into()))?;

        let project = self
            .store
            .get_project(post_id)
            .await
            .map_err(|e| EngineError::upstream("load project", &e))?
            .ok_or_else(|| EngineError::ProjectNotFound {
                post_id: post_id.to_string(),
            })?;

        let pool = self
            .store
            .get_all_users()
            .await
            .map_err(|e| EngineError::upstream("load candidate pool", &e))?;

        let eligible = filter_eligible(&project.requirements, &pool);
        tracing::debug!(
            %post_id,
            pool = pool.len(),
            eligible = eligible.len(),
            requested = size,
            "eligibility computed"
        );

        let selected = {
            let mut rng = self.rng();
            select_team(&eligible, size, &mut *rng)?
        };

        let new_team = NewTeam {
            post_id: project.id,
            project_name: project
                .title
                .filter(|title| !title.trim().is_empty())
                .unwrap_or_else(|| self.settings.fallback_project_name.clone()),
            required_tag_ids: project.requirements,
            member_count,
            members: selected.iter().map(TeamMember::from).collect(),
            created_at: Utc::now(),
        };

        let team = self
            .store
            .create_team(new_team)
            .await
            .map_err(|e| EngineError::upstream("persist team", &e))?;

        tracing::info!(team_id = %team.id, %post_id, members = team.members.len(), "team composed");
        Ok(team)
    }
}
