//! Answers collected during an assessment session.

use std::collections::BTreeMap;

use compass_core::error::DomainError;
use serde::Serialize;

use super::questions::QUESTION_COUNT;

/// Lowest valid rating.
pub const MIN_RATING: u8 = 1;

/// Highest valid rating.
pub const MAX_RATING: u8 = 5;

/// Labels for each point on the Likert scale, indexed by `rating - 1`.
pub const RATING_LABELS: [&str; 5] = [
    "Strongly Disagree",
    "Disagree",
    "Neutral",
    "Agree",
    "Strongly Agree",
];

/// A validated Likert rating in `[1, 5]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Rating(u8);

impl Rating {
    /// Creates a rating, returning `None` outside `[1, 5]`.
    #[must_use]
    pub fn new(value: u8) -> Option<Self> {
        (MIN_RATING..=MAX_RATING)
            .contains(&value)
            .then_some(Self(value))
    }

    /// Converts a raw submitted value. Non-finite, fractional and
    /// out-of-range values are rejected.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_value(value: f64) -> Option<Self> {
        if !value.is_finite() || value.fract() != 0.0 {
            return None;
        }
        if value < f64::from(MIN_RATING) || value > f64::from(MAX_RATING) {
            return None;
        }
        Self::new(value as u8)
    }

    /// The numeric rating.
    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }

    /// The Likert label for this rating, e.g. "Agree".
    #[must_use]
    pub fn label(self) -> &'static str {
        RATING_LABELS[usize::from(self.0 - MIN_RATING)]
    }
}

/// Answers gathered one at a time while the respondent fills in the form.
///
/// Values are kept as submitted; range and integrality are only checked by
/// [`validate_complete`](crate::application::scoring::validate_complete), so
/// every problem can be reported back at submission time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResponseSet {
    answers: BTreeMap<u8, f64>,
}

impl ResponseSet {
    /// Creates an empty response set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a response set from 16 ratings in ordinal order.
    #[must_use]
    pub fn from_ratings(ratings: [u8; QUESTION_COUNT]) -> Self {
        Self {
            answers: (1u8..).zip(ratings).map(|(o, r)| (o, f64::from(r))).collect(),
        }
    }

    /// Records (or replaces) the answer for `ordinal`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnknownQuestion` if `ordinal` is not in 1..=16.
    pub fn record(&mut self, ordinal: u8, value: f64) -> Result<(), DomainError> {
        if !is_known_ordinal(ordinal) {
            return Err(DomainError::UnknownQuestion(ordinal));
        }
        self.answers.insert(ordinal, value);
        Ok(())
    }

    /// Removes the answer for `ordinal`, returning the previous value.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnknownQuestion` if `ordinal` is not in 1..=16.
    pub fn clear(&mut self, ordinal: u8) -> Result<Option<f64>, DomainError> {
        if !is_known_ordinal(ordinal) {
            return Err(DomainError::UnknownQuestion(ordinal));
        }
        Ok(self.answers.remove(&ordinal))
    }

    /// The raw value recorded for `ordinal`, if any.
    #[must_use]
    pub fn get(&self, ordinal: u8) -> Option<f64> {
        self.answers.get(&ordinal).copied()
    }

    /// Number of questions answered so far.
    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    /// Every ordinal that has no answer yet, ascending.
    #[must_use]
    pub fn unanswered(&self) -> Vec<u8> {
        all_ordinals()
            .filter(|ordinal| !self.answers.contains_key(ordinal))
            .collect()
    }

    /// Whether all 16 questions have an answer (valid or not).
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.answers.len() == QUESTION_COUNT
    }
}

/// A frozen, validated set of 16 ratings.
///
/// Only produced by
/// [`validate_complete`](crate::application::scoring::validate_complete).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletedResponses {
    ratings: [Rating; QUESTION_COUNT],
}

impl CompletedResponses {
    pub(crate) fn new(ratings: [Rating; QUESTION_COUNT]) -> Self {
        Self { ratings }
    }

    /// The rating for `ordinal`, or `None` outside 1..=16.
    #[must_use]
    pub fn rating(&self, ordinal: u8) -> Option<Rating> {
        if is_known_ordinal(ordinal) {
            Some(self.ratings[usize::from(ordinal - 1)])
        } else {
            None
        }
    }

    /// All ratings paired with their ordinal.
    pub fn iter(&self) -> impl Iterator<Item = (u8, Rating)> + '_ {
        (1u8..).zip(self.ratings.iter().copied())
    }
}

/// Ordinals 1..=16.
pub(crate) fn all_ordinals() -> impl Iterator<Item = u8> {
    (1u8..).take(QUESTION_COUNT)
}

fn is_known_ordinal(ordinal: u8) -> bool {
    (1..=QUESTION_COUNT).contains(&usize::from(ordinal))
}
