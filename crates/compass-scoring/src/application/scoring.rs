//! Scoring operations: validation, averaging, classification and archetype
//! resolution, and their composition into a `ReportContext`.
//!
//! All functions are pure. The only failure paths are validation errors
//! returned to the caller; nothing here performs I/O.

use compass_core::error::DomainError;
use tracing::{debug, error};

use crate::domain::archetypes::ArchetypeTable;
use crate::domain::classification::{Classification, DimensionAverages, Level};
use crate::domain::questions::{Dimension, QUESTION_COUNT, QuestionTable};
use crate::domain::report::{QuestionScore, ReportContext};
use crate::domain::responses::{CompletedResponses, Rating, ResponseSet, all_ordinals};

/// Checks that every question has a valid rating and freezes the answers.
///
/// # Errors
///
/// Returns `DomainError::MissingAnswers` listing every unanswered ordinal if
/// any question is unanswered. Otherwise returns
/// `DomainError::InvalidRating` for the first ordinal whose value is not an
/// integer in `[1, 5]`.
pub fn validate_complete(responses: &ResponseSet) -> Result<CompletedResponses, DomainError> {
    let missing = responses.unanswered();
    if !missing.is_empty() {
        return Err(DomainError::MissingAnswers(missing));
    }

    let ratings = all_ordinals()
        .map(|ordinal| {
            let value = responses
                .get(ordinal)
                .ok_or_else(|| DomainError::MissingAnswers(vec![ordinal]))?;
            Rating::from_value(value).ok_or(DomainError::InvalidRating { ordinal, value })
        })
        .collect::<Result<Vec<Rating>, DomainError>>()?;

    let ratings: [Rating; QUESTION_COUNT] = ratings
        .try_into()
        .map_err(|_| DomainError::MissingAnswers(responses.unanswered()))?;

    Ok(CompletedResponses::new(ratings))
}

/// Averages the four ratings of each dimension, resolving membership through
/// `questions`. Values keep full floating-point precision.
#[must_use]
pub fn compute_dimension_averages(
    responses: &CompletedResponses,
    questions: &QuestionTable,
) -> DimensionAverages {
    let average = |dimension: Dimension| {
        let (sum, count) = questions
            .for_dimension(dimension)
            .filter_map(|q| responses.rating(q.ordinal))
            .fold((0u32, 0u32), |(sum, count), rating| {
                (sum + u32::from(rating.value()), count + 1)
            });
        f64::from(sum) / f64::from(count)
    };

    DimensionAverages::new(
        average(Dimension::Purpose),
        average(Dimension::Joy),
        average(Dimension::Impact),
        average(Dimension::WellBeing),
    )
}

/// Classifies each average as High (at or above 3.5) or Low, in canonical
/// dimension order.
#[must_use]
pub fn classify(averages: &DimensionAverages) -> Classification {
    Classification::new(Dimension::ALL.map(|dimension| Level::from_average(averages.get(dimension))))
}

/// Looks up the archetype name for `classification`.
///
/// # Errors
///
/// Returns `DomainError::UnknownClassification` if the table has no entry
/// for the code. With the standard table this indicates a programming error,
/// not bad input.
pub fn resolve_archetype<'t>(
    classification: &Classification,
    archetypes: &'t ArchetypeTable,
) -> Result<&'t str, DomainError> {
    archetypes.get(classification).ok_or_else(|| {
        let code = classification.code();
        error!(%code, "archetype table has no entry for classification");
        DomainError::UnknownClassification(code)
    })
}

/// Scores a submission end to end.
///
/// Either a complete `ReportContext` is returned or an error; no partial
/// results are produced.
///
/// # Errors
///
/// Propagates the errors of [`validate_complete`] and
/// [`resolve_archetype`].
pub fn build_report_context(
    responses: &ResponseSet,
    questions: &QuestionTable,
    archetypes: &ArchetypeTable,
) -> Result<ReportContext, DomainError> {
    let completed = validate_complete(responses)?;
    let dimension_averages = compute_dimension_averages(&completed, questions);
    let classification = classify(&dimension_averages);
    let archetype_name = resolve_archetype(&classification, archetypes)?.to_owned();

    let breakdown = questions
        .questions()
        .iter()
        .filter_map(|question| {
            completed.rating(question.ordinal).map(|rating| QuestionScore {
                ordinal: question.ordinal,
                dimension: question.dimension,
                text: question.text.clone(),
                rating: rating.value(),
                rating_label: rating.label(),
            })
        })
        .collect();

    let classification_code = classification.code();
    debug!(code = %classification_code, archetype = %archetype_name, "scored assessment");

    Ok(ReportContext {
        dimension_averages,
        classification,
        classification_code,
        archetype_name,
        questions: breakdown,
    })
}
