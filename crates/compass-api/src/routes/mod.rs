//! Route modules.

pub mod assessment;
pub mod health;
pub mod insights;
