//! In-memory reference implementation of [`UserStore`].
//!
//! Users live in a concurrent map keyed by name. Credentials are Argon2id
//! hashes computed on the blocking pool so request tasks are not stalled.

use std::sync::{Arc, LazyLock};

use async_trait::async_trait;
use dashmap::{DashMap, mapref::entry::Entry};
use regex::Regex;

use crate::auth::password::{hash_password, verify_password};
use crate::auth::{Authenticator, Principal, SUPERUSER, StoreError, User, UserStore};

/// Message reported when a user name is already taken
pub const USER_EXISTS_MESSAGE: &str = "The specified user already exists";

/// Message reported when a user name fails the naming rules
pub const ILLEGAL_NAME_MESSAGE: &str =
    "User name contains illegal characters. Please use simple ascii characters and numbers.";

static VALID_USERNAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9_]+$").expect("username pattern is valid"));

#[derive(Debug, Clone)]
struct UserRecord {
    user: User,
    credential: String,
}

/// Thread-safe user store kept in process memory.
///
/// Cloning is cheap; clones share the same users.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserStore {
    users: Arc<DashMap<String, UserRecord>>,
}

impl InMemoryUserStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding only the superuser with the given password.
    pub async fn with_superuser(password: &str) -> Result<Self, StoreError> {
        let store = Self::new();
        store.create_user(SUPERUSER, password, false).await?;
        Ok(store)
    }

    /// Looks up a user by name.
    pub fn get_user(&self, username: &str) -> Option<User> {
        self.users.get(username).map(|record| record.user.clone())
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    fn validate_username(username: &str) -> Result<(), StoreError> {
        if VALID_USERNAME.is_match(username) {
            Ok(())
        } else {
            Err(StoreError::illegal_username(ILLEGAL_NAME_MESSAGE))
        }
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn create_user(
        &self,
        username: &str,
        password: &str,
        must_change_password: bool,
    ) -> Result<Option<User>, StoreError> {
        Self::validate_username(username)?;

        // Cheap rejection before paying for a hash; the entry check below is authoritative.
        if self.users.contains_key(username) {
            return Err(StoreError::illegal_username(USER_EXISTS_MESSAGE));
        }

        let password = password.to_owned();
        let credential = tokio::task::spawn_blocking(move || hash_password(&password))
            .await
            .map_err(|e| StoreError::io(format!("Password hashing task failed: {}", e)))??;

        match self.users.entry(username.to_string()) {
            Entry::Occupied(_) => Err(StoreError::illegal_username(USER_EXISTS_MESSAGE)),
            Entry::Vacant(slot) => {
                let user = User {
                    name: username.to_string(),
                    must_change_password,
                };
                slot.insert(UserRecord {
                    user: user.clone(),
                    credential,
                });
                Ok(Some(user))
            }
        }
    }

    async fn delete_user(&self, username: &str) -> Result<bool, StoreError> {
        Ok(self.users.remove(username).is_some())
    }
}

#[async_trait]
impl Authenticator for InMemoryUserStore {
    async fn authenticate(&self, username: &str, password: &str) -> Option<Principal> {
        let credential = self.users.get(username)?.credential.clone();
        let password = password.to_owned();

        let verified = tokio::task::spawn_blocking(move || verify_password(&password, &credential))
            .await
            .ok()?;

        match verified {
            Ok(true) => Some(Principal::new(username)),
            Ok(false) => None,
            Err(e) => {
                tracing::warn!(username = %username, error = %e, "Credential verification failed");
                None
            }
        }
    }
}
