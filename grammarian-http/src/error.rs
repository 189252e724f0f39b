//! Error handling for grammarian-http
//!
//! Maps core submission errors and store lookups onto HTTP responses with a
//! machine-readable `kind` so clients can render a user-facing message.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use grammarian_core::SubmissionError;
use serde_json::json;
use std::cmp::PartialEq;

/// Application error type
#[derive(Debug)]
pub enum AppError {
    /// A submission was rejected by the answer state machine
    Submission(SubmissionError),

    /// No exercise instance registered under the requested id
    ExerciseNotFound(String),

    /// Internal error
    Internal(String),
}

impl From<SubmissionError> for AppError {
    fn from(err: SubmissionError) -> Self {
        Self::Submission(err)
    }
}

impl PartialEq<StatusCode> for AppError {
    fn eq(&self, status_code: &StatusCode) -> bool {
        let (error_status, _, _) = self.status_kind_message();
        &error_status == status_code
    }
}

impl AppError {
    /// Get the status code, machine-readable kind, and message for this error
    fn status_kind_message(&self) -> (StatusCode, &'static str, String) {
        match self {
            Self::Submission(err @ SubmissionError::AlreadyAnswered) => {
                (StatusCode::BAD_REQUEST, "already_answered", err.to_string())
            }
            Self::Submission(err @ SubmissionError::InvalidSelection(_)) => {
                (StatusCode::BAD_REQUEST, "invalid_selection", err.to_string())
            }
            Self::ExerciseNotFound(exercise_id) => (
                StatusCode::NOT_FOUND,
                "exercise_not_found",
                format!("Exercise not found: {}", exercise_id),
            ),
            Self::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, "internal", msg.clone()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, kind, error_message) = self.status_kind_message();

        let body = Json(json!({
            "error": error_message,
            "kind": kind,
        }));

        (status, body).into_response()
    }
}
