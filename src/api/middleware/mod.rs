//! Middleware components for request processing.
//!
//! Request ID tracking, request logging, Basic authentication, and the
//! `AppError` to response conversion.

mod auth;
mod error_handler;
mod logging;
mod request_id;

pub use auth::{basic_auth_middleware, parse_basic_credentials};
pub use error_handler::{error_to_request_status, error_to_status_code};
pub use logging::logging_middleware;
pub use request_id::{REQUEST_ID_HEADER, RequestId, request_id_middleware};
