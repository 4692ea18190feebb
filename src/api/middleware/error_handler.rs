//! Error handler for converting AppError to HTTP responses.
//!
//! 404s are rendered bare so an unauthorized caller cannot distinguish the
//! admin endpoints from a route that does not exist. Store failures are
//! logged in full but only their message reaches the client.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::api::dto::ErrorResponse;
use crate::error::{AppError, RequestStatus};

impl IntoResponse for AppError {
    /// Converts an AppError into an HTTP response.
    ///
    /// # Status Code Mapping
    /// - NotFound → 404 NOT_FOUND, empty body
    /// - BadRequest → 400 BAD_REQUEST, `InvalidFormat`
    /// - UnprocessableContent → 422 UNPROCESSABLE_ENTITY, kind carried by the error
    /// - Store → 500 INTERNAL_SERVER_ERROR, `Invalid`
    /// - Rejected → the extractor's status, `InvalidFormat`
    fn into_response(self) -> Response {
        let status = error_to_status_code(&self);

        let message = match &self {
            AppError::NotFound => return status.into_response(),
            AppError::BadRequest { message }
            | AppError::UnprocessableContent { message, .. }
            | AppError::Rejected { message, .. } => message.clone(),
            AppError::Store(source) => {
                tracing::error!(error = ?source, "User store operation failed");
                source.to_string()
            }
        };

        let body = match error_to_request_status(&self) {
            Some(request_status) => ErrorResponse::new(request_status, &message),
            None => return status.into_response(),
        };

        (status, Json(body)).into_response()
    }
}

/// Maps an AppError variant to its corresponding HTTP status code.
pub fn error_to_status_code(error: &AppError) -> StatusCode {
    match error {
        AppError::NotFound => StatusCode::NOT_FOUND,
        AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
        AppError::UnprocessableContent { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        AppError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        AppError::Rejected { status, .. } => *status,
    }
}

/// Maps an AppError variant to the status code reported in its payload.
///
/// `None` for errors rendered without a body.
pub fn error_to_request_status(error: &AppError) -> Option<RequestStatus> {
    match error {
        AppError::NotFound => None,
        AppError::BadRequest { .. } | AppError::Rejected { .. } => {
            Some(RequestStatus::InvalidFormat)
        }
        AppError::UnprocessableContent { status, .. } => Some(*status),
        AppError::Store(_) => Some(RequestStatus::Invalid),
    }
}
