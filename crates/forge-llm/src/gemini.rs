//! Gemini `generateContent` client.

use std::time::Duration;

use forge_config::AnalysisConfig;
use forge_core::errors::GenerationError;
use forge_core::ports::{GenerationParams, TextGenerator};
use serde::{Deserialize, Serialize};

use crate::error::LlmError;
use crate::http::check_response;

// ── Wire types ─────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    max_output_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<CandidateContent>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

fn build_request(prompt: &str, params: GenerationParams) -> GenerateRequest<'_> {
    GenerateRequest {
        contents: vec![Content {
            role: "user",
            parts: vec![RequestPart { text: prompt }],
        }],
        generation_config: GenerationConfig {
            temperature: params.temperature,
            max_output_tokens: params.max_output_tokens,
        },
    }
}

/// Concatenate the text parts of the first candidate.
fn extract_text(response: GenerateResponse) -> Result<String, LlmError> {
    let Some(candidate) = response.candidates.into_iter().next() else {
        return Err(LlmError::EmptyResponse {
            finish_reason: "no candidates".into(),
        });
    };
    let text: String = candidate
        .content
        .map(|c| c.parts)
        .unwrap_or_default()
        .into_iter()
        .filter_map(|p| p.text)
        .collect();
    if text.trim().is_empty() {
        return Err(LlmError::EmptyResponse {
            finish_reason: candidate.finish_reason.unwrap_or_else(|| "unknown".into()),
        });
    }
    Ok(text)
}

// ── Client ─────────────────────────────────────────────────────────

/// HTTP client for the Gemini generative language API.
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
    endpoint: String,
}

impl GeminiClient {
    /// Build a client from the `[analysis]` configuration section.
    ///
    /// An empty API key is accepted; the client then reports itself as
    /// unconfigured and refuses to make calls.
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::Http`] if the underlying `reqwest::Client` fails to build.
    pub fn from_config(config: &AnalysisConfig) -> Result<Self, LlmError> {
        let http = reqwest::Client::builder()
            .user_agent("teamforge/0.1")
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            api_key: config.api_key.trim().to_string(),
            model: config.model.clone(),
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
        })
    }

    fn generate_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.endpoint,
            urlencoding::encode(&self.model)
        )
    }

    /// Send one prompt and return the generated text.
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::NotConfigured`] without any network call when no API
    /// key is set; otherwise transport, status, parse, or empty-output errors.
    pub async fn generate(&self, prompt: &str, params: GenerationParams) -> Result<String, LlmError> {
        if self.api_key.is_empty() {
            return Err(LlmError::NotConfigured);
        }

        let body = build_request(prompt, params);
        let resp = self
            .http
            .post(self.generate_url())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;
        let resp = check_response(resp).await?;

        let data: GenerateResponse = resp
            .json()
            .await
            .map_err(|e| LlmError::Parse(e.to_string()))?;
        let text = extract_text(data)?;
        tracing::debug!(model = %self.model, chars = text.len(), "generation complete");
        Ok(text)
    }
}

impl TextGenerator for GeminiClient {
    fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }

    async fn generate_text(
        &self,
        prompt: &str,
        params: GenerationParams,
    ) -> Result<String, GenerationError> {
        Ok(self.generate(prompt, params).await?)
    }
}
