//! Centralized error handling.
//!
//! Provides a unified error type for the entire application,
//! with automatic HTTP response conversion into the standard envelope.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::domain;
use crate::types::Envelope;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    /// The requested record does not exist.
    #[error("Record not found")]
    NotFound(Option<i64>),

    /// A business rule or validation failure, optionally tied to the
    /// request field that caused it.
    #[error("{}", .error.message())]
    Domain {
        error: domain::Error,
        invalid_field: Option<String>,
    },

    /// Something unexpected; details are logged, never exposed.
    #[error("Internal server error")]
    Internal(String),
}

impl AppError {
    /// Get HTTP status code
    fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Domain { .. } => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Build the envelope error for the client (hides internal details)
    fn envelope(&self) -> Envelope {
        match self {
            AppError::NotFound(id) => Envelope::error(&domain::Error::not_found(*id), None),
            AppError::Domain {
                error,
                invalid_field,
            } => Envelope::error(error, invalid_field.clone()),
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {detail}");
                Envelope::error(
                    &domain::Error::internal_server_error("Internal server error"),
                    None,
                )
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status(), Json(self.envelope())).into_response()
    }
}

impl From<domain::Error> for AppError {
    fn from(error: domain::Error) -> Self {
        AppError::Domain {
            error,
            invalid_field: None,
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }

    /// Attach the offending request field to a domain failure.
    /// No effect on other variants.
    pub fn with_field(self, field: impl Into<String>) -> Self {
        match self {
            AppError::Domain { error, .. } => AppError::Domain {
                error,
                invalid_field: Some(field.into()),
            },
            other => other,
        }
    }
}
