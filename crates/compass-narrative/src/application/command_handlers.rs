//! Command handlers for the Narrative Insights context.
//!
//! Scores the submission, builds the prompt, makes the single generator call
//! and assembles the report. Validation failures are returned before the
//! generator is ever contacted.

use compass_core::clock::Clock;
use compass_core::command::Command;
use compass_core::error::DomainError;
use compass_core::generator::NarrativeGenerator;
use compass_scoring::application::scoring::build_report_context;
use compass_scoring::domain::archetypes::ArchetypeTable;
use compass_scoring::domain::questions::QuestionTable;
use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::commands::GenerateInsights;
use crate::domain::prompt::build_prompt;
use crate::domain::report::{CLOSING_MARKDOWN, InsightsReport, REPORT_TITLE, render_markdown};

/// Handles the `GenerateInsights` command.
///
/// The generator is called exactly once; there is no retry.
///
/// # Errors
///
/// Returns the scoring errors (`MissingAnswers`, `InvalidRating`,
/// `UnknownClassification`) without calling the generator, or
/// `DomainError::Generation` if the generator fails.
pub async fn handle_generate_insights(
    command: &GenerateInsights,
    questions: &QuestionTable,
    archetypes: &ArchetypeTable,
    clock: &dyn Clock,
    generator: &dyn NarrativeGenerator,
) -> Result<InsightsReport, DomainError> {
    let correlation_id = command.correlation_id();
    let context = build_report_context(&command.responses, questions, archetypes)?;

    info!(
        %correlation_id,
        command_type = command.command_type(),
        code = %context.classification_code,
        "requesting narrative"
    );

    let prompt = build_prompt(&context, archetypes);
    let narrative_markdown = generator
        .generate_narrative(&prompt)
        .await
        .inspect_err(|e| warn!(%correlation_id, error = %e, "narrative generation failed"))?;

    let narrative_html = render_markdown(&narrative_markdown);

    Ok(InsightsReport {
        report_id: Uuid::new_v4(),
        correlation_id,
        generated_at: clock.now(),
        title: REPORT_TITLE,
        context,
        narrative_markdown,
        narrative_html,
        closing_markdown: CLOSING_MARKDOWN,
    })
}

#[cfg(test)]
mod tests {
    use compass_core::error::DomainError;
    use compass_scoring::domain::archetypes::ArchetypeTable;
    use compass_scoring::domain::questions::QuestionTable;
    use compass_scoring::domain::responses::ResponseSet;
    use uuid::Uuid;

    use crate::application::command_handlers::handle_generate_insights;
    use crate::domain::commands::GenerateInsights;
    use compass_test_support::{
        FailingNarrativeGenerator, FixedClock, RecordingNarrativeGenerator, fixed_now,
        mixed_profile_responses,
    };

    #[tokio::test]
    async fn test_handle_generate_insights_returns_report() {
        // Arrange
        let correlation_id = Uuid::new_v4();
        let clock = FixedClock(fixed_now());
        let generator = RecordingNarrativeGenerator::new("### Narrative Profile\n\nSteady.");
        let command = GenerateInsights {
            correlation_id,
            responses: mixed_profile_responses(),
        };

        // Act
        let report = handle_generate_insights(
            &command,
            QuestionTable::standard(),
            ArchetypeTable::standard(),
            &clock,
            &generator,
        )
        .await
        .unwrap();

        // Assert
        assert_eq!(report.correlation_id, correlation_id);
        assert_eq!(report.generated_at, fixed_now());
        assert_eq!(report.context.classification_code, "H L H L");
        assert_eq!(
            report.context.archetype_name,
            "The Mission-Driven Martyr (Driven Architect)"
        );
        assert_eq!(report.narrative_markdown, "### Narrative Profile\n\nSteady.");
        assert!(report.narrative_html.contains("<h3>Narrative Profile</h3>"));
        assert!(report.closing_markdown.contains("Ready to Bridge the Gap?"));
    }

    #[tokio::test]
    async fn test_handle_generate_insights_sends_single_prompt() {
        // Arrange
        let clock = FixedClock(fixed_now());
        let generator = RecordingNarrativeGenerator::new("ok");
        let command = GenerateInsights {
            correlation_id: Uuid::new_v4(),
            responses: mixed_profile_responses(),
        };

        // Act
        handle_generate_insights(
            &command,
            QuestionTable::standard(),
            ArchetypeTable::standard(),
            &clock,
            &generator,
        )
        .await
        .unwrap();

        // Assert
        let prompts = generator.prompts();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("Archetype: The Mission-Driven Martyr (Driven Architect)"));
    }

    #[tokio::test]
    async fn test_handle_generate_insights_skips_generator_when_incomplete() {
        // Arrange
        let clock = FixedClock(fixed_now());
        let generator = RecordingNarrativeGenerator::new("unused");
        let mut responses = ResponseSet::from_ratings([3; 16]);
        responses.clear(7).unwrap();
        let command = GenerateInsights {
            correlation_id: Uuid::new_v4(),
            responses,
        };

        // Act
        let result = handle_generate_insights(
            &command,
            QuestionTable::standard(),
            ArchetypeTable::standard(),
            &clock,
            &generator,
        )
        .await;

        // Assert
        match result {
            Err(DomainError::MissingAnswers(missing)) => assert_eq!(missing, vec![7]),
            other => panic!("expected MissingAnswers, got {other:?}"),
        }
        assert!(generator.prompts().is_empty());
    }

    #[tokio::test]
    async fn test_handle_generate_insights_propagates_generation_failure() {
        // Arrange
        let clock = FixedClock(fixed_now());
        let command = GenerateInsights {
            correlation_id: Uuid::new_v4(),
            responses: mixed_profile_responses(),
        };

        // Act
        let result = handle_generate_insights(
            &command,
            QuestionTable::standard(),
            ArchetypeTable::standard(),
            &clock,
            &FailingNarrativeGenerator,
        )
        .await;

        // Assert
        assert!(matches!(result, Err(DomainError::Generation(_))));
    }
}
