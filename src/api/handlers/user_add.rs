//! `POST /useradd/{username}`: superuser-only user creation.

use axum::{
    body::Bytes,
    extract::{
        Path, State,
        rejection::{BytesRejection, PathRejection},
    },
    http::StatusCode,
};
use serde_json::{Map, Value};

use crate::api::doc::USER_ADMIN_TAG;
use crate::api::dto::{CreateUserRequest, ErrorResponse};
use crate::auth::CallerPrincipal;
use crate::error::{AppError, AppResult, RequestStatus};
use crate::state::AppState;

/// Body field holding the new user's password
pub const PASSWORD: &str = "password";

/// New users always have to pick their own password on first login.
const MUST_CHANGE_PASSWORD: bool = true;

/// POST /useradd/{username} - Create a user
///
/// Returns 200 with an empty body once the store has created the user.
#[utoipa::path(
    post,
    path = "/useradd/{username}",
    tag = USER_ADMIN_TAG,
    params(("username" = String, Path, description = "Name of the user to create")),
    request_body(content = CreateUserRequest, content_type = "application/json"),
    responses(
        (status = 200, description = "User created"),
        (status = 400, description = "Body is not a JSON object", body = ErrorResponse),
        (status = 404, description = "Not found"),
        (status = 422, description = "Password missing, not a string, or empty", body = ErrorResponse),
        (status = 500, description = "User store failure", body = ErrorResponse),
    ),
    security(("basicAuth" = []))
)]
pub async fn create_user(
    State(state): State<AppState>,
    caller: CallerPrincipal,
    path: Result<Path<String>, PathRejection>,
    body: Result<Bytes, BytesRejection>,
) -> AppResult<StatusCode> {
    // Extractor rejections stay unseen until the caller is known to be the superuser.
    let Some(principal) = caller.superuser() else {
        tracing::debug!("Hiding user creation from non-superuser caller");
        return Err(AppError::NotFound);
    };
    let Path(username) = path?;
    let body = body?;

    let payload = read_payload(&body)?;
    let password = required_password(&payload)?;

    match state
        .store
        .create_user(&username, password, MUST_CHANGE_PASSWORD)
        .await?
    {
        Some(_) => {
            tracing::info!(
                username = %username,
                principal = %principal.name(),
                "User created"
            );
            Ok(StatusCode::OK)
        }
        None => Err(AppError::NotFound),
    }
}

/// Parses the body as a JSON object.
fn read_payload(body: &[u8]) -> AppResult<Map<String, Value>> {
    serde_json::from_slice(body).map_err(|e| AppError::bad_request(e.to_string()))
}

/// Pulls a usable password out of the payload.
///
/// An explicit `null` counts as missing.
fn required_password(payload: &Map<String, Value>) -> AppResult<&str> {
    match payload.get(PASSWORD) {
        None | Some(Value::Null) => Err(AppError::unprocessable(
            RequestStatus::InvalidFormat,
            format!("Required parameter '{}' is missing.", PASSWORD),
        )),
        Some(Value::String(password)) if password.is_empty() => Err(AppError::unprocessable(
            RequestStatus::Invalid,
            "Password cannot be empty.",
        )),
        Some(Value::String(password)) => Ok(password.as_str()),
        Some(_) => Err(AppError::unprocessable(
            RequestStatus::InvalidFormat,
            format!("Expected '{}' to be a string.", PASSWORD),
        )),
    }
}
