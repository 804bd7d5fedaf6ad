//! Leader's Compass: Scoring Engine.
//!
//! Turns a completed set of 16 Likert answers into per-dimension averages, a
//! four-letter H/L classification and the matching archetype. Everything in
//! this crate is synchronous and side-effect free; the question and archetype
//! tables are read-only static data shared by all callers.

pub mod application;
pub mod domain;
