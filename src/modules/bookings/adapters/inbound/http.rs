// Maps application outcomes onto HTTP responses. Every error body is `{"error": "..."}`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::modules::bookings::core::errors::DomainError;
use crate::modules::bookings::use_cases::errors::ApplicationError;

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

pub fn status_of(error: &ApplicationError) -> StatusCode {
    match error {
        ApplicationError::Domain(DomainError::Validation(_)) => StatusCode::UNPROCESSABLE_ENTITY,
        ApplicationError::Domain(DomainError::NotFound { .. }) => StatusCode::NOT_FOUND,
        ApplicationError::Domain(DomainError::AvailabilityConflict { .. })
        | ApplicationError::Domain(DomainError::InvalidState { .. })
        | ApplicationError::Contention { .. } => StatusCode::CONFLICT,
        ApplicationError::Ledger(_) | ApplicationError::Unexpected(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

pub fn error_response(error: ApplicationError) -> Response {
    with_message(status_of(&error), error.to_string())
}

pub fn with_message(status: StatusCode, error: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorBody {
            error: error.into(),
        }),
    )
        .into_response()
}

/// Malformed JSON bodies and query strings.
pub fn unprocessable(rejection: impl std::fmt::Display) -> Response {
    with_message(StatusCode::UNPROCESSABLE_ENTITY, rejection.to_string())
}

pub fn query_failed(error: anyhow::Error) -> Response {
    tracing::warn!(error = %error, "hotel query failed");
    with_message(StatusCode::INTERNAL_SERVER_ERROR, error.to_string())
}
