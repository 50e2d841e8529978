//! Engine failure taxonomy.
//!
//! Every failure of `compose_team` / `analyze_team` is one of these variants.
//! Each maps to a single HTTP status so a boundary layer can render it
//! without inspecting the message.

use forge_core::errors::StoreError;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    /// Missing or malformed input.
    #[error("invalid request: {0}")]
    Validation(String),

    #[error("project not found: {post_id}")]
    ProjectNotFound { post_id: String },

    #[error("team not found: {team_id}")]
    TeamNotFound { team_id: String },

    /// Fewer eligible users than the requested team size. Nothing is persisted.
    #[error("only {available} eligible users, cannot form a team of {required}")]
    InsufficientCandidates { required: usize, available: usize },

    /// The data store failed during `operation` (e.g. `"persist team"`).
    #[error("data store unavailable during {operation}: {reason}")]
    UpstreamUnavailable {
        operation: &'static str,
        reason: String,
    },

    #[error(
        "text generation provider is not configured \
         (set GEMINI_API_KEY or TEAMFORGE_ANALYSIS__API_KEY)"
    )]
    AnalysisProviderUnconfigured,

    /// The provider call failed or returned no text.
    #[error("team analysis failed: {0}")]
    AnalysisProviderError(String),
}

impl EngineError {
    pub(crate) fn upstream(operation: &'static str, error: &StoreError) -> Self {
        Self::UpstreamUnavailable {
            operation,
            reason: error.to_string(),
        }
    }

    /// Stable machine-readable name of the failure category.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation",
            Self::ProjectNotFound { .. } => "project_not_found",
            Self::TeamNotFound { .. } => "team_not_found",
            Self::InsufficientCandidates { .. } => "insufficient_candidates",
            Self::UpstreamUnavailable { .. } => "upstream_unavailable",
            Self::AnalysisProviderUnconfigured => "analysis_provider_unconfigured",
            Self::AnalysisProviderError(_) => "analysis_provider_error",
        }
    }

    /// HTTP status a boundary layer should answer with.
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        match self {
            Self::Validation(_) => 400,
            Self::ProjectNotFound { .. } | Self::TeamNotFound { .. } => 404,
            Self::InsufficientCandidates { .. } => 422,
            Self::UpstreamUnavailable { .. } => 503,
            Self::AnalysisProviderUnconfigured => 401,
            Self::AnalysisProviderError(_) => 502,
        }
    }

    /// Render as the `{ "error": ... }` body returned to callers.
    #[must_use]
    pub fn envelope(&self) -> ErrorEnvelope {
        ErrorEnvelope {
            error: self.to_string(),
            kind: self.kind(),
            status: self.http_status(),
        }
    }
}

/// Failure body shape shared by every caller-facing surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorEnvelope {
    pub error: String,
    pub kind: &'static str,
    pub status: u16,
}
