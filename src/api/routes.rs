//! Router configuration for the API.

use std::time::Duration;

use axum::{Router, http::StatusCode, middleware};
use tower_http::timeout::TimeoutLayer;

use crate::api::handlers;
use crate::api::middleware::{basic_auth_middleware, logging_middleware, request_id_middleware};
use crate::state::AppState;

/// Creates the application router with the admin routes and host middleware.
///
/// # Middleware Order
/// Middleware is applied in reverse order of declaration (last added runs first):
/// 1. Request ID middleware - generates/propagates request IDs
/// 2. Logging middleware - logs requests with request IDs
/// 3. Timeout layer - answers 408 once a request exceeds `request_timeout`
/// 4. Basic auth middleware - attaches the caller's principal when credentials verify
///
/// # Routes
/// - `POST /useradd/{username}`
/// - `GET /userdel/{username}`
pub fn create_router(state: AppState, request_timeout: Duration) -> Router {
    Router::new()
        .merge(handlers::user_admin_routes())
        .layer(middleware::from_fn_with_state(
            state.clone(),
            basic_auth_middleware,
        ))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}
