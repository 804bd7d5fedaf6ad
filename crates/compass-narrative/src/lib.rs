//! Leader's Compass: Narrative Insights.
//!
//! Formats a scored assessment into a generation prompt, calls the
//! narrative generator once, and packages the result as a report.

pub mod application;
pub mod domain;
