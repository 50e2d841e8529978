//! Team analysis scenarios against in-memory collaborators.

mod support;

use forge_core::errors::GenerationError;
use forge_engine::EngineError;
use pretty_assertions::assert_eq;
use support::{FakeGenerator, MemoryStore, engine, project, scenario_store, tag, user};

#[tokio::test]
async fn unconfigured_provider_fails_and_leaves_team_untouched() {
    let engine = engine(scenario_store(), FakeGenerator::unconfigured(), 1);
    let team = engine.compose_team("P1", 2).await.unwrap();

    let err = engine.analyze_team(&team.id).await.unwrap_err();
    assert!(matches!(err, EngineError::AnalysisProviderUnconfigured));
    assert_eq!(err.http_status(), 401);

    assert_eq!(engine.store().stored_team(&team.id), Some(team));
}

#[tokio::test]
async fn successful_analysis_is_persisted_after_creation() {
    let engine = engine(
        scenario_store(),
        FakeGenerator::replying("Coverage 90%. Strong Rust."),
        1,
    );
    let team = engine.compose_team("P1", 3).await.unwrap();

    let result = engine.analyze_team(&team.id).await.unwrap();
    assert_eq!(result.team_id, team.id);
    assert_eq!(result.analysis, "Coverage 90%. Strong Rust.");
    assert!(result.analyzed_at >= team.created_at);

    let stored = engine.store().stored_team(&team.id).unwrap();
    assert_eq!(stored.ai_analysis.as_deref(), Some("Coverage 90%. Strong Rust."));
    assert_eq!(stored.ai_analyzed_at, Some(result.analyzed_at));
    assert_eq!(stored.members, team.members);
}

#[tokio::test]
async fn reanalysis_overwrites_and_keeps_membership() {
    let generator = FakeGenerator::scripted(vec![Ok("first".into()), Ok("second".into())]);
    let engine = engine(scenario_store(), generator, 1);
    let team = engine.compose_team("P1", 2).await.unwrap();

    engine.analyze_team(&team.id).await.unwrap();
    let second = engine.analyze_team(&team.id).await.unwrap();

    let stored = engine.store().stored_team(&team.id).unwrap();
    assert_eq!(stored.ai_analysis.as_deref(), Some("second"));
    assert_eq!(stored.ai_analyzed_at, Some(second.analyzed_at));
    assert_eq!(stored.members, team.members);
    assert_eq!(stored.member_count, team.member_count);
}

#[tokio::test]
async fn provider_failure_keeps_previous_analysis() {
    let generator = FakeGenerator::scripted(vec![
        Ok("kept".into()),
        Err(GenerationError::Provider("deadline exceeded".into())),
    ]);
    let engine = engine(scenario_store(), generator, 1);
    let team = engine.compose_team("P1", 2).await.unwrap();
    engine.analyze_team(&team.id).await.unwrap();
    let before = engine.store().stored_team(&team.id).unwrap();

    let err = engine.analyze_team(&team.id).await.unwrap_err();
    assert!(matches!(err, EngineError::AnalysisProviderError(ref m) if m == "deadline exceeded"));
    assert_eq!(err.http_status(), 502);
    assert_eq!(engine.store().stored_team(&team.id), Some(before));
}

#[tokio::test]
async fn blank_generation_is_a_provider_error() {
    let engine = engine(scenario_store(), FakeGenerator::replying("   "), 1);
    let team = engine.compose_team("P1", 1).await.unwrap();
    let err = engine.analyze_team(&team.id).await.unwrap_err();
    assert!(matches!(err, EngineError::AnalysisProviderError(_)));
    assert!(engine.store().stored_team(&team.id).unwrap().ai_analysis.is_none());
}

#[tokio::test]
async fn unknown_team_is_not_found_without_provider_call() {
    let engine = engine(scenario_store(), FakeGenerator::replying("x"), 1);
    let err = engine.analyze_team("tm-nope").await.unwrap_err();
    assert!(matches!(err, EngineError::TeamNotFound { ref team_id } if team_id == "tm-nope"));
    assert_eq!(engine.generator().calls(), 0);
}

#[tokio::test]
async fn prompt_uses_snapshot_and_configured_params() {
    let engine = engine(scenario_store(), FakeGenerator::replying("ok"), 1);
    let team = engine.compose_team("P1", 3).await.unwrap();

    // Live pool changes after selection must not leak into the prompt.
    engine.store().replace_user_skills("u1", &["T3"]);
    engine.analyze_team(&team.id).await.unwrap();

    let prompt = engine.generator().last_prompt().unwrap();
    assert!(prompt.contains("Project name: Campus Robotics"));
    assert!(prompt.contains("Required skill tags: Rust, Embedded (IDs: T1, T2)"));
    assert!(prompt.contains("Team size: 3"));
    assert!(prompt.contains("User u1 <u1@example.com> (id: u1); skills: Rust [T1]"));
    assert!(prompt.contains("(id: u3); skills: Embedded [T2], T4\n"));
    assert!(!prompt.contains("T4 [T4]"));
    assert!(!prompt.contains("Design"));

    let params = engine.generator().last_params().unwrap();
    assert!((params.temperature - 0.7).abs() < f32::EPSILON);
    assert_eq!(params.max_output_tokens, 1000);
}

#[tokio::test]
async fn member_skills_outside_requirements_are_named() {
    let store = MemoryStore::with_data(
        vec![project("P1", Some("Campus Robotics"), &["T1"])],
        vec![user("u1", &["T1", "T4"])],
        vec![tag("T1", "Rust"), tag("T4", "Soldering")],
    );
    let engine = engine(store, FakeGenerator::replying("ok"), 1);
    let team = engine.compose_team("P1", 1).await.unwrap();
    engine.analyze_team(&team.id).await.unwrap();

    let prompt = engine.generator().last_prompt().unwrap();
    assert!(prompt.contains("(id: u1); skills: Rust [T1], Soldering [T4]\n"));
    assert!(prompt.contains("Required skill tags: Rust (IDs: T1)"));
}

#[tokio::test]
async fn tag_outage_surfaces_as_upstream() {
    let engine = engine(scenario_store(), FakeGenerator::replying("ok"), 1);
    let team = engine.compose_team("P1", 1).await.unwrap();
    engine.store().take_tags_offline();

    let err = engine.analyze_team(&team.id).await.unwrap_err();
    assert!(matches!(
        err,
        EngineError::UpstreamUnavailable {
            operation: "resolve tags",
            ..
        }
    ));
    assert_eq!(engine.generator().calls(), 0);
}
