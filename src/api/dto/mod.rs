//! Data transfer objects for the user administration API.

mod error;
mod user;

pub use error::ErrorResponse;
pub use user::CreateUserRequest;
