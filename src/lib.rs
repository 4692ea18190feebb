//! useradmin-rs library
//!
//! Superuser-only user creation and deletion endpoints, plus the small host
//! (configuration, logging, Basic auth, in-memory user store) that serves them.

use shadow_rs::shadow;
shadow!(build);

pub mod api;
pub mod auth;
pub mod cli;
pub mod config;
pub mod error;
pub mod logger;
pub mod server;
pub mod state;

pub use state::AppState;

pub fn pkg_version() -> &'static str {
    build::PKG_VERSION
}

pub fn clap_long_version() -> &'static str {
    build::CLAP_LONG_VERSION
}
