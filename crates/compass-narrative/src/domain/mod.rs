//! Domain types for narrative insights.

pub mod commands;
pub mod prompt;
pub mod report;
