//! In-memory collaborators for engine tests.

#![allow(dead_code)]

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use forge_core::entities::{NewTeam, Project, SkillTag, Tag, Team, User};
use forge_core::errors::{GenerationError, StoreError};
use forge_core::ports::{GenerationParams, TeamAnalysisUpdate, TeamStore, TextGenerator};
use forge_engine::{EngineSettings, TeamEngine};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[derive(Default)]
struct State {
    projects: Vec<Project>,
    users: Vec<User>,
    tags: Vec<Tag>,
    teams: Vec<Team>,
    next_id: u32,
}

/// Store backed by vectors, with switches to simulate outages.
#[derive(Default)]
pub struct MemoryStore {
    state: Mutex<State>,
    pub fail_pool: bool,
    pub fail_create: bool,
    tags_offline: AtomicBool,
}

impl MemoryStore {
    pub fn with_data(projects: Vec<Project>, users: Vec<User>, tags: Vec<Tag>) -> Self {
        Self {
            state: Mutex::new(State {
                projects,
                users,
                tags,
                ..State::default()
            }),
            ..Self::default()
        }
    }

    pub fn team_count(&self) -> usize {
        self.state.lock().unwrap().teams.len()
    }

    pub fn stored_team(&self, id: &str) -> Option<Team> {
        self.state
            .lock()
            .unwrap()
            .teams
            .iter()
            .find(|t| t.id == id)
            .cloned()
    }

    pub fn take_tags_offline(&self) {
        self.tags_offline.store(true, Ordering::SeqCst);
    }

    /// Change a user's live skills after a team was formed.
    pub fn replace_user_skills(&self, user_id: &str, skills: &[&str]) {
        let mut state = self.state.lock().unwrap();
        if let Some(user) = state.users.iter_mut().find(|u| u.id == user_id) {
            user.skill_tags = skill_tags(skills);
        }
    }
}

impl TeamStore for MemoryStore {
    async fn get_project(&self, id: &str) -> Result<Option<Project>, StoreError> {
        let state = self.state.lock().unwrap();
        Ok(state.projects.iter().find(|p| p.id == id).cloned())
    }

    async fn get_all_users(&self) -> Result<Vec<User>, StoreError> {
        if self.fail_pool {
            return Err(StoreError::Unavailable("connection refused".into()));
        }
        Ok(self.state.lock().unwrap().users.clone())
    }

    async fn get_tag(&self, id: &str) -> Result<Option<Tag>, StoreError> {
        if self.tags_offline.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("tag collection offline".into()));
        }
        let state = self.state.lock().unwrap();
        Ok(state.tags.iter().find(|t| t.id == id).cloned())
    }

    async fn create_team(&self, team: NewTeam) -> Result<Team, StoreError> {
        if self.fail_create {
            return Err(StoreError::Unavailable("write rejected".into()));
        }
        let mut state = self.state.lock().unwrap();
        state.next_id += 1;
        let team = team.into_team(format!("tm-{:08x}", state.next_id));
        state.teams.push(team.clone());
        Ok(team)
    }

    async fn get_team(&self, id: &str) -> Result<Option<Team>, StoreError> {
        Ok(self.stored_team(id))
    }

    async fn update_team_analysis(
        &self,
        id: &str,
        update: &TeamAnalysisUpdate,
    ) -> Result<(), StoreError> {
        let mut state = self.state.lock().unwrap();
        let team = state
            .teams
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| StoreError::Unavailable(format!("no team {id}")))?;
        team.ai_analysis = Some(update.ai_analysis.clone());
        team.ai_analyzed_at = Some(update.ai_analyzed_at);
        Ok(())
    }
}

/// Scripted text generator that records every prompt it receives.
pub struct FakeGenerator {
    configured: bool,
    responses: Mutex<Vec<Result<String, GenerationError>>>,
    pub prompts: Mutex<Vec<String>>,
    pub params: Mutex<Vec<GenerationParams>>,
    calls: AtomicUsize,
}

impl FakeGenerator {
    /// Returns the given responses in order, then `"analysis"` forever.
    pub fn scripted(responses: Vec<Result<String, GenerationError>>) -> Self {
        let mut responses = responses;
        responses.reverse();
        Self {
            configured: true,
            responses: Mutex::new(responses),
            prompts: Mutex::new(Vec::new()),
            params: Mutex::new(Vec::new()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn replying(text: &str) -> Self {
        Self::scripted(vec![Ok(text.to_string())])
    }

    pub fn unconfigured() -> Self {
        Self {
            configured: false,
            ..Self::scripted(Vec::new())
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.prompts.lock().unwrap().last().cloned()
    }

    pub fn last_params(&self) -> Option<GenerationParams> {
        self.params.lock().unwrap().last().copied()
    }
}

impl TextGenerator for FakeGenerator {
    fn is_configured(&self) -> bool {
        self.configured
    }

    async fn generate_text(
        &self,
        prompt: &str,
        params: GenerationParams,
    ) -> Result<String, GenerationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.params.lock().unwrap().push(params);
        self.responses
            .lock()
            .unwrap()
            .pop()
            .unwrap_or_else(|| Ok("analysis".to_string()))
    }
}

pub fn skill_tags(ids: &[&str]) -> Vec<SkillTag> {
    ids.iter()
        .map(|t| SkillTag {
            tag_id: (*t).to_string(),
            level: None,
        })
        .collect()
}

pub fn user(id: &str, skills: &[&str]) -> User {
    User {
        id: id.into(),
        name: format!("User {id}"),
        email: format!("{id}@example.com"),
        skill_tags: skill_tags(skills),
        major_id: None,
        dev_tags: Vec::new(),
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

pub fn tag(id: &str, name: &str) -> Tag {
    Tag {
        id: id.into(),
        name: name.into(),
        category_id: None,
    }
}

/// P1 requires T1/T2; three of five users qualify (u1, u3, u5).
pub fn scenario_store() -> MemoryStore {
    MemoryStore::with_data(
        vec![
            project("P1", Some("Campus Robotics"), &["T1", "T2"]),
            project("P9", Some("Quantum"), &["T9"]),
            project("P0", None, &[]),
        ],
        vec![
            user("u1", &["T1"]),
            user("u2", &["T3"]),
            user("u3", &["T2", "T4"]),
            user("u4", &[]),
            user("u5", &["T1", "T2"]),
        ],
        vec![tag("T1", "Rust"), tag("T2", "Embedded"), tag("T3", "Design")],
    )
}

pub fn engine<G: TextGenerator>(
    store: MemoryStore,
    generator: G,
    seed: u64,
) -> TeamEngine<MemoryStore, G> {
    TeamEngine::new(
        store,
        generator,
        StdRng::seed_from_u64(seed),
        EngineSettings::default(),
    )
}
