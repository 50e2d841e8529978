//! Status handling for Gemini responses.
//!
//! Gemini reports failures as `{"error": {"code", "message", "status"}}`.
//! The message is lifted out of that envelope so callers see
//! `API key not valid` rather than a JSON blob.

use reqwest::StatusCode;
use serde::Deserialize;

use crate::error::LlmError;

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    #[serde(default)]
    message: String,
    #[serde(default)]
    status: Option<String>,
}

/// Pass a successful response through, or turn it into an [`LlmError`].
///
/// `429` becomes [`LlmError::RateLimited`]; `Retry-After` defaults to 60 s
/// when absent or not a number of seconds.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, LlmError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    if status == StatusCode::TOO_MANY_REQUESTS {
        return Err(LlmError::RateLimited {
            retry_after_secs: retry_after_secs(&resp),
        });
    }
    let body = resp.text().await.unwrap_or_default();
    Err(LlmError::Api {
        status: status.as_u16(),
        message: error_message(&body),
    })
}

fn retry_after_secs(resp: &reqwest::Response) -> u64 {
    resp.headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(60)
}

fn error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody { error }) => match error.status {
            Some(status) if !error.message.is_empty() => format!("{status}: {}", error.message),
            _ if !error.message.is_empty() => error.message,
            _ => body.trim().to_string(),
        },
        Err(_) => body.trim().to_string(),
    }
}
