//! Shared application state.

use std::sync::Arc;

use compass_core::clock::Clock;
use compass_core::generator::NarrativeGenerator;
use compass_scoring::domain::archetypes::ArchetypeTable;
use compass_scoring::domain::questions::QuestionTable;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Time source for report timestamps.
    pub clock: Arc<dyn Clock + Send + Sync>,
    /// The questionnaire.
    pub questions: &'static QuestionTable,
    /// Classification code to archetype mapping.
    pub archetypes: &'static ArchetypeTable,
    /// Narrative generator, absent when no API key is configured.
    pub narrative_generator: Option<Arc<dyn NarrativeGenerator>>,
}

impl AppState {
    /// Create new application state using the standard tables.
    #[must_use]
    pub fn new(
        clock: Arc<dyn Clock + Send + Sync>,
        narrative_generator: Option<Arc<dyn NarrativeGenerator>>,
    ) -> Self {
        Self {
            clock,
            questions: QuestionTable::standard(),
            archetypes: ArchetypeTable::standard(),
            narrative_generator,
        }
    }
}
