//! `TeamStore` implementation over the libSQL repositories.

use forge_core::entities::{NewTeam, Project, Tag, Team, User};
use forge_core::errors::StoreError;
use forge_core::ports::{TeamAnalysisUpdate, TeamStore};

use crate::service::ForgeService;

impl TeamStore for ForgeService {
    async fn get_project(&self, id: &str) -> Result<Option<Project>, StoreError> {
        Ok(Self::get_project(self, id).await?)
    }

    async fn get_all_users(&self) -> Result<Vec<User>, StoreError> {
        Ok(self.list_users().await?)
    }

    async fn get_tag(&self, id: &str) -> Result<Option<Tag>, StoreError> {
        Ok(Self::get_tag(self, id).await?)
    }

    async fn create_team(&self, team: NewTeam) -> Result<Team, StoreError> {
        Ok(Self::create_team(self, team).await?)
    }

    async fn get_team(&self, id: &str) -> Result<Option<Team>, StoreError> {
        Ok(Self::get_team(self, id).await?)
    }

    async fn update_team_analysis(
        &self,
        id: &str,
        update: &TeamAnalysisUpdate,
    ) -> Result<(), StoreError> {
        Ok(Self::update_team_analysis(self, id, update).await?)
    }
}
