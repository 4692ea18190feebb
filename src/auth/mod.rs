//! Authentication primitives shared by the admin endpoints.
//!
//! The handlers need two things from the host: the authenticated
//! [`Principal`] of the current request and a [`UserStore`] to delegate to.
//! [`InMemoryUserStore`] is the reference store used by the bundled server.

mod memory;
mod password;
mod principal;
mod store;

pub use memory::InMemoryUserStore;
pub use password::{hash_password, verify_password};
pub use principal::{Authenticator, CallerPrincipal, Principal, SUPERUSER};
pub use store::{StoreError, User, UserStore};
