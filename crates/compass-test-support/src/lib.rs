//! Shared test doubles and fixtures for the Leader's Compass workspace.

mod clock;
mod fixtures;
mod generator;

pub use clock::{FixedClock, fixed_now};
pub use fixtures::{MIXED_PROFILE, answers_json, mixed_profile_responses};
pub use generator::{FailingNarrativeGenerator, RecordingNarrativeGenerator};
