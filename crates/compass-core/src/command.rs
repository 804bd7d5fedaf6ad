//! Command abstractions.

use uuid::Uuid;

/// Trait implemented by every request the application layer handles.
pub trait Command: Send + Sync + std::fmt::Debug {
    /// The type name for this command (for logging).
    fn command_type(&self) -> &'static str;

    /// Correlation ID linking log lines and the produced report.
    fn correlation_id(&self) -> Uuid;
}
