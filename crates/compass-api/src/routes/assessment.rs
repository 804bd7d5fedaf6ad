//! Routes for the questionnaire and scoring.

use axum::extract::State;
use axum::{Json, Router, routing::get, routing::post};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use compass_core::error::DomainError;
use compass_scoring::application::query_handlers::{
    self, ArchetypeView, QuestionView, RatingScaleView,
};
use compass_scoring::application::scoring;
use compass_scoring::domain::report::ReportContext;
use compass_scoring::domain::responses::ResponseSet;

use crate::error::ApiError;
use crate::state::AppState;

/// One submitted answer. A `null` rating leaves the question unanswered.
#[derive(Debug, Deserialize)]
pub struct AnswerInput {
    /// Question ordinal, 1 to 16.
    pub question: u8,
    /// Submitted rating.
    pub rating: Option<f64>,
}

/// Request body for POST /score and POST /insights.
#[derive(Debug, Deserialize)]
pub struct SubmitAnswersRequest {
    /// Answers in any order. A repeated question keeps the last rating.
    pub answers: Vec<AnswerInput>,
}

impl SubmitAnswersRequest {
    /// Collects the answers into a response set.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnknownQuestion` for an ordinal outside 1..=16,
    /// whether or not it carries a rating.
    pub fn into_response_set(self) -> Result<ResponseSet, DomainError> {
        let mut responses = ResponseSet::new();
        for answer in self.answers {
            match answer.rating {
                Some(value) => responses.record(answer.question, value)?,
                None => {
                    responses.clear(answer.question)?;
                }
            }
        }
        Ok(responses)
    }
}

/// Response body for GET /questions.
#[derive(Debug, Serialize)]
pub struct QuestionnaireResponse {
    /// Questions in ordinal order.
    pub questions: Vec<QuestionView>,
    /// Rating scale from 1 to 5.
    pub rating_scale: Vec<RatingScaleView>,
}

/// Response body for GET /archetypes.
#[derive(Debug, Serialize)]
pub struct ArchetypesResponse {
    /// All sixteen archetypes.
    pub archetypes: Vec<ArchetypeView>,
}

/// GET /questions
async fn get_questions(State(state): State<AppState>) -> Json<QuestionnaireResponse> {
    Json(QuestionnaireResponse {
        questions: query_handlers::list_questions(state.questions),
        rating_scale: query_handlers::rating_scale(),
    })
}

/// GET /archetypes
async fn get_archetypes(State(state): State<AppState>) -> Json<ArchetypesResponse> {
    Json(ArchetypesResponse {
        archetypes: query_handlers::list_archetypes(state.archetypes),
    })
}

/// POST /score
#[instrument(skip(state, request), fields(answers = request.answers.len()))]
async fn score(
    State(state): State<AppState>,
    Json(request): Json<SubmitAnswersRequest>,
) -> Result<Json<ReportContext>, ApiError> {
    let responses = request.into_response_set()?;
    let context = scoring::build_report_context(&responses, state.questions, state.archetypes)?;

    info!(code = %context.classification_code, "scored assessment");

    Ok(Json(context))
}

/// Returns the router for questionnaire and scoring routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/questions", get(get_questions))
        .route("/archetypes", get(get_archetypes))
        .route("/score", post(score))
}
