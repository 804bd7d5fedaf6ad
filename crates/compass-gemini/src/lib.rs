//! Gemini implementation of the `NarrativeGenerator` capability.

pub mod config;
pub mod gemini_generator;
