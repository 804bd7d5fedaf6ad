//! Routes for narrative insights.

use axum::extract::State;
use axum::{Json, Router, routing::post};
use tracing::{info, instrument};
use uuid::Uuid;

use compass_core::error::DomainError;
use compass_narrative::application::command_handlers;
use compass_narrative::domain::commands;
use compass_narrative::domain::report::InsightsReport;
use compass_scoring::application::scoring;

use crate::error::ApiError;
use crate::routes::assessment::SubmitAnswersRequest;
use crate::state::AppState;

/// POST /insights
#[instrument(skip(state, request), fields(answers = request.answers.len()))]
async fn generate_insights(
    State(state): State<AppState>,
    Json(request): Json<SubmitAnswersRequest>,
) -> Result<Json<InsightsReport>, ApiError> {
    let command = commands::GenerateInsights {
        correlation_id: Uuid::new_v4(),
        responses: request.into_response_set()?,
    };

    info!(correlation_id = %command.correlation_id, "handling generate_insights command");

    scoring::validate_complete(&command.responses)?;

    let generator = state
        .narrative_generator
        .as_deref()
        .ok_or(DomainError::GenerationUnavailable)?;

    let report = command_handlers::handle_generate_insights(
        &command,
        state.questions,
        state.archetypes,
        state.clock.as_ref(),
        generator,
    )
    .await?;

    Ok(Json(report))
}

/// Returns the router for the insights route.
pub fn router() -> Router<AppState> {
    Router::new().route("/insights", post(generate_insights))
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use compass_core::clock::Clock;
    use compass_core::generator::NarrativeGenerator;
    use compass_test_support::{
        FailingNarrativeGenerator, FixedClock, MIXED_PROFILE, RecordingNarrativeGenerator,
        answers_json, fixed_now,
    };
    use serde_json::Value;
    use tower::ServiceExt;

    fn app_state_with(generator: Option<Arc<dyn NarrativeGenerator>>) -> AppState {
        let clock: Arc<dyn Clock + Send + Sync> = Arc::new(FixedClock(fixed_now()));
        AppState::new(clock, generator)
    }

    async fn post_insights(state: AppState, body: &Value) -> (StatusCode, Value) {
        let app = router().with_state(state);
        let request = Request::builder()
            .method("POST")
            .uri("/insights")
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(body).unwrap()))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body_bytes).unwrap())
    }

    #[tokio::test]
    async fn test_insights_returns_200_with_report() {
        // Arrange
        let generator = Arc::new(RecordingNarrativeGenerator::new(
            "### Narrative Profile\n\nYou carry the mission.",
        ));
        let state = app_state_with(Some(generator.clone()));
        let body = serde_json::json!({ "answers": answers_json(MIXED_PROFILE) });

        // Act
        let (status, json) = post_insights(state, &body).await;

        // Assert
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["title"], "What is Your Compass Telling You?");
        assert_eq!(json["context"]["classification_code"], "H L H L");
        assert_eq!(json["generated_at"], "2026-01-15T10:00:00Z");
        assert!(
            json["narrative_html"]
                .as_str()
                .unwrap()
                .contains("<h3>Narrative Profile</h3>")
        );
        Uuid::parse_str(json["report_id"].as_str().unwrap()).unwrap();
        assert_eq!(generator.prompts().len(), 1);
    }

    #[tokio::test]
    async fn test_insights_returns_503_without_generator() {
        // Arrange
        let state = app_state_with(None);
        let body = serde_json::json!({ "answers": answers_json(MIXED_PROFILE) });

        // Act
        let (status, json) = post_insights(state, &body).await;

        // Assert
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(json["error"], "generation_unavailable");
    }

    #[tokio::test]
    async fn test_insights_reports_missing_answers_without_generator() {
        // Arrange
        let state = app_state_with(None);
        let body = serde_json::json!({ "answers": [] });

        // Act
        let (status, json) = post_insights(state, &body).await;

        // Assert
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "missing_answers");
        assert_eq!(json["missing"].as_array().unwrap().len(), 16);
    }

    #[tokio::test]
    async fn test_insights_escapes_html_from_generator() {
        // Arrange
        let generator = Arc::new(RecordingNarrativeGenerator::new(
            "<script>alert(1)</script>",
        ));
        let state = app_state_with(Some(generator));
        let body = serde_json::json!({ "answers": answers_json(MIXED_PROFILE) });

        // Act
        let (status, json) = post_insights(state, &body).await;

        // Assert
        assert_eq!(status, StatusCode::OK);
        let html = json["narrative_html"].as_str().unwrap();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert_eq!(json["narrative_markdown"], "<script>alert(1)</script>");
    }

    #[tokio::test]
    async fn test_insights_returns_502_when_generator_fails() {
        // Arrange
        let state = app_state_with(Some(Arc::new(FailingNarrativeGenerator)));
        let body = serde_json::json!({ "answers": answers_json(MIXED_PROFILE) });

        // Act
        let (status, json) = post_insights(state, &body).await;

        // Assert
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(json["error"], "generation_failed");
    }

    #[tokio::test]
    async fn test_insights_validates_before_generating() {
        // Arrange
        let generator = Arc::new(RecordingNarrativeGenerator::new("unused"));
        let state = app_state_with(Some(generator.clone()));
        let mut answers = answers_json(MIXED_PROFILE);
        answers[15]["rating"] = serde_json::json!(0);
        let body = serde_json::json!({ "answers": answers });

        // Act
        let (status, json) = post_insights(state, &body).await;

        // Assert
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "invalid_rating");
        assert!(generator.prompts().is_empty());
    }
}
