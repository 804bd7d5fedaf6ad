//! Commands for the Narrative Insights context.

use compass_core::command::Command;
use compass_scoring::domain::responses::ResponseSet;
use uuid::Uuid;

/// Command to score a submission and generate its insights report.
#[derive(Debug, Clone)]
pub struct GenerateInsights {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The submitted answers.
    pub responses: ResponseSet,
}

impl Command for GenerateInsights {
    fn command_type(&self) -> &'static str {
        "narrative.generate_insights"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}
