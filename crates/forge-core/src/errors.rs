//! Error types raised at the collaborator port boundary.
//!
//! Backend-specific errors (`DatabaseError`, `LlmError`) are defined in their
//! own crates and converted into these before crossing into the engine. The
//! engine then maps them onto its own failure taxonomy.

use thiserror::Error;

/// Failure of a `TeamStore` call.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing store could not be reached or the query failed.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// A stored document could not be shaped into its entity struct.
    #[error("malformed record: {0}")]
    Malformed(String),
}

/// Failure of a `TextGenerator` call.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// No credential or configuration is available for the provider.
    #[error("text generation provider is not configured")]
    Unconfigured,

    /// The provider call failed or its output was unusable.
    #[error("text generation failed: {0}")]
    Provider(String),
}
