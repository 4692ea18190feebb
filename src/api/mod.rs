//! API module for HTTP handlers, middleware, and DTOs.
//!
//! Hosts the two user administration endpoints together with the
//! middleware that authenticates callers and traces requests.

pub mod doc;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
