//! HTTP request handlers for the user administration endpoints.
//!
//! Both endpoints answer 404 to anyone but the superuser, before touching
//! the request body or the user store.

pub mod user_add;
pub mod user_delete;

#[cfg(test)]
mod test_support;

use axum::{
    Router,
    routing::{get, post},
};

use crate::error::AppError;
use crate::state::AppState;

/// Creates the user administration routes.
///
/// Routes:
/// - POST /useradd/{username} - Create a user
/// - GET  /userdel/{username} - Delete a user
///
/// Any other method on these paths gets the same bare 404 as an unknown path.
pub fn user_admin_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/useradd/{username}",
            post(user_add::create_user).fallback(hidden_route),
        )
        .route(
            "/userdel/{username}",
            get(user_delete::delete_user).fallback(hidden_route),
        )
}

async fn hidden_route() -> AppError {
    AppError::NotFound
}
