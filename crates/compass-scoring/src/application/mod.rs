//! Application-level operations for the Scoring Engine.

pub mod query_handlers;
pub mod scoring;
