//! Narrative generation capability.
//!
//! The hosted language model is an opaque collaborator: prompt text in,
//! narrative text out. Keeping it behind this trait lets the scoring and
//! prompt code run in tests without network access.

use async_trait::async_trait;

use crate::error::DomainError;

/// Produces a narrative report from a fully formatted prompt.
#[async_trait]
pub trait NarrativeGenerator: Send + Sync {
    /// Generates narrative text for `prompt`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Generation` on transport, authentication or
    /// empty-output failures.
    async fn generate_narrative(&self, prompt: &str) -> Result<String, DomainError>;
}
