//! Shared test utilities for forge-db unit tests.

use forge_core::entities::{Project, SkillTag, Tag, User};

use crate::service::ForgeService;

/// Create an in-memory service.
pub async fn test_service() -> ForgeService {
    ForgeService::new_local(":memory:").await.unwrap()
}

pub fn tag(id: &str, name: &str) -> Tag {
    Tag {
        id: id.into(),
        name: name.into(),
        category_id: Some("cat-dev".into()),
    }
}

pub fn user(id: &str, skills: &[&str]) -> User {
    User {
        id: id.into(),
        name: format!("User {id}"),
        email: format!("{id}@example.com"),
        skill_tags: skills
            .iter()
            .map(|t| SkillTag {
                tag_id: (*t).to_string(),
                level: None,
            })
            .collect(),
        major_id: Some("cs".into()),
        dev_tags: vec!["backend".into()],
        courses_id: Vec::new(),
    }
}

pub fn project(id: &str, title: Option<&str>, requirements: &[&str]) -> Project {
    Project {
        id: id.into(),
        title: title.map(String::from),
        requirements: requirements.iter().map(|t| (*t).to_string()).collect(),
    }
}
