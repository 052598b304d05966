//! Error handling - AppError maps handler failures onto wire responses.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use scribe_shared::MessageResponse;
use std::fmt;

/// Application-level error type rendered as a JSON response.
///
/// `Validation` carries the field-level detail and serializes it verbatim
/// as the 400 body; every other variant becomes a plain `{message}`
/// document. The underlying cause of an `Internal` is logged where the
/// failure is mapped, never sent to the client.
#[derive(Debug)]
pub enum AppError {
    Validation(validator::ValidationErrors),
    BadRequest(String),
    NotFound(String),
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Validation(errors) => write!(f, "Validation failed: {}", errors),
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::Validation(errors)
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::Validation(errors) => {
                HttpResponse::build(self.status_code()).json(errors)
            }
            AppError::BadRequest(msg) | AppError::NotFound(msg) | AppError::Internal(msg) => {
                HttpResponse::build(self.status_code()).json(MessageResponse::new(msg.clone()))
            }
        }
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
