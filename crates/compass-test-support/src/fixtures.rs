//! Answer fixtures shared by unit and integration tests.

use compass_scoring::domain::responses::ResponseSet;

/// Purpose 4,4,4,4 / Joy 2,2,3,3 / Impact 5,4,4,5 / Well-being 2,2,1,3.
/// Averages 4.0, 2.5, 4.5, 2.0, classification `H L H L`.
pub const MIXED_PROFILE: [u8; 16] = [4, 4, 4, 4, 2, 2, 3, 3, 5, 4, 4, 5, 2, 2, 1, 3];

/// `MIXED_PROFILE` as a response set.
#[must_use]
pub fn mixed_profile_responses() -> ResponseSet {
    ResponseSet::from_ratings(MIXED_PROFILE)
}

/// Builds the `answers` array of an HTTP request body from 16 ratings.
#[must_use]
pub fn answers_json(ratings: [u8; 16]) -> serde_json::Value {
    let answers: Vec<serde_json::Value> = (1u8..)
        .zip(ratings)
        .map(|(question, rating)| serde_json::json!({ "question": question, "rating": rating }))
        .collect();
    serde_json::Value::Array(answers)
}
