//! `GET /userdel/{username}`: superuser-only user deletion.

use axum::{
    extract::{Path, State, rejection::PathRejection},
    http::StatusCode,
};

use crate::api::doc::USER_ADMIN_TAG;
use crate::api::dto::ErrorResponse;
use crate::auth::CallerPrincipal;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /userdel/{username} - Delete a user
///
/// Returns 200 if the user existed and was removed, 404 if there was no such user.
#[utoipa::path(
    get,
    path = "/userdel/{username}",
    tag = USER_ADMIN_TAG,
    params(("username" = String, Path, description = "Name of the user to delete")),
    responses(
        (status = 200, description = "User deleted"),
        (status = 404, description = "Not found"),
        (status = 500, description = "User store failure", body = ErrorResponse),
    ),
    security(("basicAuth" = []))
)]
pub async fn delete_user(
    State(state): State<AppState>,
    caller: CallerPrincipal,
    path: Result<Path<String>, PathRejection>,
) -> AppResult<StatusCode> {
    let Some(principal) = caller.superuser() else {
        tracing::debug!("Hiding user deletion from non-superuser caller");
        return Err(AppError::NotFound);
    };
    let Path(username) = path?;

    let deleted = state.store.delete_user(&username).await?;

    // Audit record
    tracing::info!(
        username = %username,
        principal = %principal.name(),
        deleted,
        "User deletion processed"
    );

    if deleted {
        Ok(StatusCode::OK)
    } else {
        Err(AppError::NotFound)
    }
}
