use axum::extract::rejection::{BytesRejection, PathRejection};
use axum::http::StatusCode;
use thiserror::Error;

use crate::auth::StoreError;
use crate::error::RequestStatus;

/// Errors produced at the HTTP handler boundary.
///
/// Each variant maps to exactly one status code; see the `IntoResponse`
/// implementation in `api::middleware::error_handler`.
#[derive(Error, Debug)]
pub enum AppError {
    /// Missing resource, or a caller that must not learn the resource exists.
    /// Rendered without a body so the two cases look identical.
    #[error("Not found")]
    NotFound,

    /// Request body is not a readable JSON object
    #[error("Bad request: {message}")]
    BadRequest { message: String },

    /// Request body parsed but its content was rejected
    #[error("Unprocessable content: {message}")]
    UnprocessableContent {
        status: RequestStatus,
        message: String,
    },

    /// The user store failed
    #[error("User store operation failed: {0}")]
    Store(#[from] StoreError),

    /// An extractor refused the request of an authorized caller.
    /// Keeps the extractor's own status (400 for a bad path, 413 for an oversized body).
    #[error("Rejected request: {message}")]
    Rejected { status: StatusCode, message: String },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        AppError::BadRequest {
            message: message.into(),
        }
    }

    pub fn unprocessable(status: RequestStatus, message: impl Into<String>) -> Self {
        AppError::UnprocessableContent {
            status,
            message: message.into(),
        }
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<BytesRejection> for AppError {
    fn from(rejection: BytesRejection) -> Self {
        AppError::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

/// Type alias for Result with AppError to simplify function signatures
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_converts() {
        let err: AppError = StoreError::illegal_username("The specified user already exists").into();
        assert!(matches!(err, AppError::Store(StoreError::IllegalUsername(_))));
    }

    #[test]
    fn test_unprocessable_constructor() {
        let err = AppError::unprocessable(RequestStatus::Invalid, "Password cannot be empty.");
        assert_eq!(err.to_string(), "Unprocessable content: Password cannot be empty.");
    }
}
