//! Leader's Compass: API error types.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use compass_core::error::DomainError;
use serde::Serialize;
use thiserror::Error;

/// Startup and runtime errors for the API server.
#[derive(Debug, Error)]
pub enum AppError {
    /// A required environment variable is missing or invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// The narrative generator could not be initialized.
    #[error("generator error: {0}")]
    Generator(#[from] DomainError),

    /// Network binding or I/O error.
    #[error("server error: {0}")]
    Server(#[from] std::io::Error),
}

/// JSON body returned for error responses.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Machine-readable error code.
    pub error: &'static str,
    /// Human-readable error message.
    pub message: String,
    /// Unanswered question ordinals, for `missing_answers` only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub missing: Option<Vec<u8>>,
}

/// HTTP-layer wrapper around `DomainError` that implements `IntoResponse`.
#[derive(Debug)]
pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code) = match &self.0 {
            DomainError::MissingAnswers(_) => (StatusCode::BAD_REQUEST, "missing_answers"),
            DomainError::InvalidRating { .. } => (StatusCode::BAD_REQUEST, "invalid_rating"),
            DomainError::UnknownQuestion(_) => (StatusCode::BAD_REQUEST, "unknown_question"),
            DomainError::UnknownClassification(_)
            | DomainError::InvalidQuestionTable(_)
            | DomainError::InvalidArchetypeTable(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_consistency")
            }
            DomainError::Generation(_) => (StatusCode::BAD_GATEWAY, "generation_failed"),
            DomainError::GenerationUnavailable => {
                (StatusCode::SERVICE_UNAVAILABLE, "generation_unavailable")
            }
        };

        let missing = match &self.0 {
            DomainError::MissingAnswers(ordinals) => Some(ordinals.clone()),
            _ => None,
        };

        let body = ErrorBody {
            error: error_code,
            message: self.0.to_string(),
            missing,
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    fn status_of(err: DomainError) -> StatusCode {
        let response = ApiError(err).into_response();
        response.status()
    }

    #[test]
    fn test_missing_answers_maps_to_400() {
        assert_eq!(
            status_of(DomainError::MissingAnswers(vec![7])),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_invalid_rating_maps_to_400() {
        assert_eq!(
            status_of(DomainError::InvalidRating {
                ordinal: 3,
                value: 9.0,
            }),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_unknown_question_maps_to_400() {
        assert_eq!(
            status_of(DomainError::UnknownQuestion(42)),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_unknown_classification_maps_to_500() {
        assert_eq!(
            status_of(DomainError::UnknownClassification("H H H H".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_generation_failure_maps_to_502() {
        assert_eq!(
            status_of(DomainError::Generation("timeout".into())),
            StatusCode::BAD_GATEWAY
        );
    }

    #[test]
    fn test_generation_unavailable_maps_to_503() {
        assert_eq!(
            status_of(DomainError::GenerationUnavailable),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }
}
