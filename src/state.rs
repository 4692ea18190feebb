//! Application state for Axum web framework.

use std::sync::Arc;

use crate::auth::{Authenticator, InMemoryUserStore, UserStore};

/// Shared collaborators handed to every request handler.
///
/// Cloning is cheap since both members are reference counted.
#[derive(Clone)]
pub struct AppState {
    /// User management capability the admin handlers delegate to
    pub store: Arc<dyn UserStore>,
    /// Credential check used by the Basic auth middleware
    pub authenticator: Arc<dyn Authenticator>,
}

impl AppState {
    pub fn new(store: Arc<dyn UserStore>, authenticator: Arc<dyn Authenticator>) -> Self {
        Self {
            store,
            authenticator,
        }
    }

    /// Uses one in-memory store as both user store and authenticator.
    pub fn from_memory_store(store: InMemoryUserStore) -> Self {
        let store = Arc::new(store);
        Self {
            store: store.clone(),
            authenticator: store,
        }
    }
}
