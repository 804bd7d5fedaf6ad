//! Application-level handlers for narrative insights.

pub mod command_handlers;
