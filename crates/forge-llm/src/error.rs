//! Text generation client error types.

use forge_core::errors::GenerationError;
use thiserror::Error;

/// Errors that can occur when calling the generative language API.
#[derive(Debug, Error)]
pub enum LlmError {
    /// No API key is configured.
    #[error("no API key configured for the text generation provider")]
    NotConfigured,

    /// HTTP transport error, including timeouts.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The provider returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the provider.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// The provider returned a 429 Too Many Requests response.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds to wait before retrying.
        retry_after_secs: u64,
    },

    /// Failed to parse a provider response.
    #[error("parse error: {0}")]
    Parse(String),

    /// The provider answered but produced no text (e.g. safety block).
    #[error("empty response (finish reason: {finish_reason})")]
    EmptyResponse { finish_reason: String },
}

impl From<LlmError> for GenerationError {
    fn from(error: LlmError) -> Self {
        match error {
            LlmError::NotConfigured => Self::Unconfigured,
            other => Self::Provider(other.to_string()),
        }
    }
}
