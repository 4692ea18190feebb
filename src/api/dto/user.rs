//! User administration request DTOs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of `POST /useradd/{username}`.
///
/// Documentation only: the handler validates the raw JSON object itself so
/// that each malformed shape gets its own error message.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateUserRequest {
    /// Initial password; the user must change it on first login
    #[schema(example = "s3cret", min_length = 1)]
    pub password: String,
}
