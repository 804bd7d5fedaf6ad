//! Domain error types.

use thiserror::Error;

/// Top-level domain error type.
///
/// `MissingAnswers`, `InvalidRating` and `UnknownQuestion` are user-input
/// problems the caller should re-prompt for. `UnknownClassification` and the
/// table variants mean the static configuration and the engine disagree.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    /// One or more questions have no answer. Lists every unanswered ordinal.
    #[error("missing answers for questions {}", format_ordinals(.0))]
    MissingAnswers(Vec<u8>),

    /// A rating is not an integer in `[1, 5]`.
    #[error("invalid rating {value} for question {ordinal}: expected an integer from 1 to 5")]
    InvalidRating {
        /// The question the rating was given for.
        ordinal: u8,
        /// The rejected value.
        value: f64,
    },

    /// An answer was recorded for a question that does not exist.
    #[error("unknown question ordinal {0}: expected 1 to 16")]
    UnknownQuestion(u8),

    /// A classification code has no archetype in the table.
    #[error("no archetype defined for classification {0:?}")]
    UnknownClassification(String),

    /// The question table violates its structural invariants.
    #[error("invalid question table: {0}")]
    InvalidQuestionTable(String),

    /// The archetype table contains a malformed or duplicate entry.
    #[error("invalid archetype table: {0}")]
    InvalidArchetypeTable(String),

    /// The narrative generation service failed.
    #[error("narrative generation failed: {0}")]
    Generation(String),

    /// No narrative generator is configured (for example, no API key).
    #[error("narrative generation is not configured")]
    GenerationUnavailable,
}

fn format_ordinals(ordinals: &[u8]) -> String {
    ordinals
        .iter()
        .map(u8::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
