//! Domain types for the Scoring Engine.

pub mod archetypes;
pub mod classification;
pub mod questions;
pub mod report;
pub mod responses;
