//! The scored result handed to prompt construction.

use serde::Serialize;

use super::classification::{Classification, DimensionAverages};
use super::questions::Dimension;

/// One answered question with its rating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionScore {
    /// 1-based question position.
    pub ordinal: u8,
    /// Dimension the question belongs to.
    pub dimension: Dimension,
    /// Question text.
    pub text: String,
    /// Rating given, 1 to 5.
    pub rating: u8,
    /// Likert label of the rating.
    pub rating_label: &'static str,
}

/// Complete scoring outcome for one submission.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportContext {
    /// Mean rating per dimension.
    pub dimension_averages: DimensionAverages,
    /// H/L level per dimension. Serialized through `classification_code`.
    #[serde(skip)]
    pub classification: Classification,
    /// Space-joined classification code, e.g. `"H L H L"`.
    pub classification_code: String,
    /// Archetype name resolved from the code.
    pub archetype_name: String,
    /// Per-question breakdown in ordinal order.
    pub questions: Vec<QuestionScore>,
}
