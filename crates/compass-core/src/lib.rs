//! Leader's Compass Core: shared domain abstractions.
//!
//! This crate defines the error type, the time source and the narrative
//! generation capability that the other crates depend on. It performs no I/O.

pub mod clock;
pub mod command;
pub mod error;
pub mod generator;
