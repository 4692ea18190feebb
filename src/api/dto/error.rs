//! Error response DTOs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::RequestStatus;

/// Error payload returned on 400, 422 and 500 responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Fully qualified status code, e.g. `Neo.ClientError.Request.InvalidFormat`
    #[schema(example = "Neo.ClientError.Request.Invalid")]
    pub code: String,
    /// Human readable description
    #[schema(example = "Password cannot be empty.")]
    pub message: String,
}

impl ErrorResponse {
    /// Creates a new error response with status and message.
    pub fn new(status: RequestStatus, message: &str) -> Self {
        Self {
            code: status.code(),
            message: message.to_string(),
        }
    }
}
