//! Application error type mapping to HTTP status codes and envelope format.

use axum::http::StatusCode;
use axum::Json;
use axum::response::{IntoResponse, Response};

use explore_types::error::DecisionError;

use crate::http::response::ApiResponse;

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Decision service errors.
    Decision(DecisionError),
}

impl From<DecisionError> for AppError {
    fn from(e: DecisionError) -> Self {
        AppError::Decision(e)
    }
}

impl AppError {
    fn parts(&self) -> (StatusCode, &'static str, String) {
        match self {
            AppError::Decision(DecisionError::InvalidRequest(msg)) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
            }
            AppError::Decision(e @ DecisionError::MatchCheck { .. }) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "MATCH_CHECK_FAILED", e.to_string())
            }
            AppError::Decision(e) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "STORE_ERROR", e.to_string())
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.parts();

        if status.is_server_error() {
            tracing::error!(code, %message, "request failed");
        }

        let request_id = uuid::Uuid::now_v7().to_string();
        let mut body = ApiResponse::error(code, &message, request_id, 0);

        // A failed match check still returns the stored decision's outcome.
        let AppError::Decision(e) = &self;
        if let Some(partial) = e.partial_response() {
            body = body.with_data(partial);
        }

        (status, Json(body)).into_response()
    }
}
