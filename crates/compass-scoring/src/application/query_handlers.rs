//! Query handlers for the Scoring Engine.
//!
//! Read-only views of the static questionnaire configuration for clients
//! that render the assessment form.

use serde::Serialize;

use crate::domain::archetypes::ArchetypeTable;
use crate::domain::questions::{Dimension, QuestionTable};
use crate::domain::responses::{MAX_RATING, MIN_RATING, RATING_LABELS};

/// Read-only view of a question.
#[derive(Debug, Serialize)]
pub struct QuestionView {
    /// 1-based question position.
    pub ordinal: u8,
    /// Machine-readable dimension.
    pub dimension: Dimension,
    /// Display label of the dimension.
    pub dimension_label: &'static str,
    /// Question text.
    pub text: String,
}

/// Read-only view of one point on the rating scale.
#[derive(Debug, Serialize)]
pub struct RatingScaleView {
    /// Numeric rating.
    pub value: u8,
    /// Likert label.
    pub label: &'static str,
}

/// Read-only view of an archetype entry.
#[derive(Debug, Serialize)]
pub struct ArchetypeView {
    /// Space-joined classification code.
    pub code: String,
    /// Archetype display name.
    pub name: String,
}

/// Lists the questionnaire in ordinal order.
#[must_use]
pub fn list_questions(questions: &QuestionTable) -> Vec<QuestionView> {
    questions
        .questions()
        .iter()
        .map(|q| QuestionView {
            ordinal: q.ordinal,
            dimension: q.dimension,
            dimension_label: q.dimension.label(),
            text: q.text.clone(),
        })
        .collect()
}

/// Lists the rating scale from lowest to highest.
#[must_use]
pub fn rating_scale() -> Vec<RatingScaleView> {
    (MIN_RATING..=MAX_RATING)
        .zip(RATING_LABELS)
        .map(|(value, label)| RatingScaleView { value, label })
        .collect()
}

/// Lists every archetype from `H H H H` to `L L L L`.
#[must_use]
pub fn list_archetypes(archetypes: &ArchetypeTable) -> Vec<ArchetypeView> {
    archetypes
        .iter()
        .map(|(classification, name)| ArchetypeView {
            code: classification.code(),
            name: name.to_owned(),
        })
        .collect()
}
