//! Test generators: `NarrativeGenerator` doubles for tests.

use std::sync::Mutex;

use async_trait::async_trait;
use compass_core::error::DomainError;
use compass_core::generator::NarrativeGenerator;

/// A generator that returns a fixed narrative and records every prompt it
/// receives.
#[derive(Debug)]
pub struct RecordingNarrativeGenerator {
    narrative: String,
    prompts: Mutex<Vec<String>>,
}

impl RecordingNarrativeGenerator {
    /// Create a generator that answers every prompt with `narrative`.
    #[must_use]
    pub fn new(narrative: impl Into<String>) -> Self {
        Self {
            narrative: narrative.into(),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Returns a snapshot of all prompts received so far.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl NarrativeGenerator for RecordingNarrativeGenerator {
    async fn generate_narrative(&self, prompt: &str) -> Result<String, DomainError> {
        self.prompts.lock().unwrap().push(prompt.to_owned());
        Ok(self.narrative.clone())
    }
}

/// A generator that always fails. Useful for testing error-handling paths.
#[derive(Debug)]
pub struct FailingNarrativeGenerator;

#[async_trait]
impl NarrativeGenerator for FailingNarrativeGenerator {
    async fn generate_narrative(&self, _prompt: &str) -> Result<String, DomainError> {
        Err(DomainError::Generation("connection refused".into()))
    }
}
