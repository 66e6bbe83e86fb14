//! Application error type and its RFC 7807 problem mapping.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use gobuddy_core::DomainError;
use gobuddy_shared::ErrorResponse;
use std::fmt;

/// Handler-facing error that renders as an RFC 7807 problem body.
#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    BadRequest(String),
    Unauthorized(String),
    Unprocessable(String),
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            AppError::Unprocessable(msg) => write!(f, "Unprocessable: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error = match self {
            AppError::NotFound(detail) => ErrorResponse::not_found(detail),
            AppError::BadRequest(detail) => ErrorResponse::bad_request(detail),
            AppError::Unauthorized(detail) => ErrorResponse::unauthorized().with_detail(detail),
            AppError::Unprocessable(detail) => ErrorResponse::unprocessable(detail),
            AppError::Internal(detail) => {
                tracing::error!(error = %detail, "Internal error surfaced to a client");
                ErrorResponse::internal_error()
            }
        };

        HttpResponse::build(self.status_code()).json(error)
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        let detail = err.to_string();
        match err {
            DomainError::EmptyContent => AppError::Unprocessable(detail),
            DomainError::PhoneTooShort { .. } => AppError::BadRequest(detail),
            DomainError::NoPendingChallenge
            | DomainError::CodeExpired
            | DomainError::CodeRejected => AppError::Unauthorized(detail),
            DomainError::NotFound { .. } => AppError::NotFound(detail),
            DomainError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

/// Shorthand for handler return types.
pub type AppResult<T> = Result<T, AppError>;
