//! Command handlers for CLI operations

pub mod openapi;
pub mod serve;

pub use openapi::OpenapiCommandHandler;
pub use serve::ServeCommandHandler;
