use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::user::{SkillTag, User};

/// Point-in-time snapshot of a selected user, recorded on the team.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub skill_tags: Vec<SkillTag>,
}

impl From<&User> for TeamMember {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            name: user.name.clone(),
            email: user.email.clone(),
            skill_tags: user.skill_tags.clone(),
        }
    }
}

/// A team assembled for one project.
///
/// Membership never changes after creation. Only `ai_analysis` and
/// `ai_analyzed_at` are written later, always together.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Team {
    pub id: String,
    pub post_id: String,
    pub project_name: String,
    pub required_tag_ids: Vec<String>,
    pub member_count: u32,
    pub members: Vec<TeamMember>,
    pub created_at: DateTime<Utc>,
    pub ai_analysis: Option<String>,
    pub ai_analyzed_at: Option<DateTime<Utc>>,
}

/// A team that has not been persisted yet. The store assigns the ID.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewTeam {
    pub post_id: String,
    pub project_name: String,
    pub required_tag_ids: Vec<String>,
    pub member_count: u32,
    pub members: Vec<TeamMember>,
    pub created_at: DateTime<Utc>,
}

impl NewTeam {
    /// Attach a store-assigned ID. Analysis fields start empty.
    #[must_use]
    pub fn into_team(self, id: String) -> Team {
        Team {
            id,
            post_id: self.post_id,
            project_name: self.project_name,
            required_tag_ids: self.required_tag_ids,
            member_count: self.member_count,
            members: self.members,
            created_at: self.created_at,
            ai_analysis: None,
            ai_analyzed_at: None,
        }
    }
}
