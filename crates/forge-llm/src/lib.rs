//! # forge-llm
//!
//! Text generation client used for team skill-gap analysis.
//!
//! [`GeminiClient`] calls the Gemini `generateContent` endpoint and
//! implements [`forge_core::ports::TextGenerator`]. The engine treats it as an
//! opaque prompt-in, text-out capability.

mod error;
mod gemini;
mod http;

pub use error::LlmError;
pub use gemini::GeminiClient;
