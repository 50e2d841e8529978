use std::collections::HashSet;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One declared skill of a user.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SkillTag {
    pub tag_id: String,
    /// Self-reported proficiency (free text, e.g. `"beginner"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
}

/// A candidate team member.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub skill_tags: Vec<SkillTag>,
    pub major_id: Option<String>,
    #[serde(default)]
    pub dev_tags: Vec<String>,
    #[serde(default)]
    pub courses_id: Vec<String>,
}

impl User {
    /// Set of tag IDs this user declares as skills.
    #[must_use]
    pub fn skill_tag_ids(&self) -> HashSet<&str> {
        self.skill_tags.iter().map(|s| s.tag_id.as_str()).collect()
    }
}
