//! User store capability consumed by the admin handlers.

use async_trait::async_trait;
use thiserror::Error;

/// A user as reported back by the store.
///
/// Handlers only care that a user came back; the fields are informational.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub name: String,
    pub must_change_password: bool,
}

/// Failures surfaced by a [`UserStore`].
///
/// The display text is the bare message so it can be handed to clients verbatim.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing storage could not be read or written
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// The username is malformed or already taken
    #[error("{0}")]
    IllegalUsername(String),
}

impl StoreError {
    pub fn illegal_username(message: impl Into<String>) -> Self {
        StoreError::IllegalUsername(message.into())
    }

    pub fn io(message: impl Into<String>) -> Self {
        StoreError::Io(std::io::Error::other(message.into()))
    }
}

/// Manages persisted user identities and credentials.
///
/// Implementations own hashing, persistence and their own locking; callers
/// treat each method as a single atomic operation.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Create a user.
    ///
    /// `Ok(None)` means the store accepted the call without producing a user.
    async fn create_user(
        &self,
        username: &str,
        password: &str,
        must_change_password: bool,
    ) -> Result<Option<User>, StoreError>;

    /// Delete a user, returning whether one existed.
    async fn delete_user(&self, username: &str) -> Result<bool, StoreError>;
}
