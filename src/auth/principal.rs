//! Authenticated principal and the request-context accessor for it.

use std::convert::Infallible;

use async_trait::async_trait;
use axum::{extract::FromRequestParts, http::request::Parts};

/// The only identity allowed to call the user administration endpoints.
pub const SUPERUSER: &str = "neo4j";

/// Authenticated identity of the caller.
///
/// Inserted into request extensions by the authentication middleware.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    name: String,
}

impl Principal {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_superuser(&self) -> bool {
        self.name == SUPERUSER
    }
}

/// Verifies credentials presented by a caller.
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Returns the principal for valid credentials, `None` otherwise.
    async fn authenticate(&self, username: &str, password: &str) -> Option<Principal>;
}

/// Extractor yielding the request's principal, if the host attached one.
///
/// Never rejects: unauthenticated requests still reach the handler so it can
/// answer them the same way as any other unauthorized caller.
#[derive(Debug, Clone, Default)]
pub struct CallerPrincipal(pub Option<Principal>);

impl CallerPrincipal {
    /// The principal, but only when it is the superuser.
    pub fn superuser(self) -> Option<Principal> {
        self.0.filter(Principal::is_superuser)
    }
}

impl<S> FromRequestParts<S> for CallerPrincipal
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(parts.extensions.get::<Principal>().cloned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    #[test]
    fn test_superuser_is_exact_match() {
        assert!(Principal::new("neo4j").is_superuser());
        assert!(!Principal::new("Neo4j").is_superuser());
        assert!(!Principal::new("neo4j ").is_superuser());
        assert!(!Principal::new("bad").is_superuser());
    }

    #[test]
    fn test_caller_superuser_filters_other_principals() {
        assert!(CallerPrincipal(None).superuser().is_none());
        assert!(CallerPrincipal(Some(Principal::new("bad"))).superuser().is_none());
        assert_eq!(
            CallerPrincipal(Some(Principal::new("neo4j"))).superuser(),
            Some(Principal::new("neo4j"))
        );
    }

    #[tokio::test]
    async fn test_extract_from_extensions() {
        let mut request = Request::builder().uri("/").body(()).unwrap();
        request.extensions_mut().insert(Principal::new("neo4j"));
        let (mut parts, _) = request.into_parts();

        let caller = CallerPrincipal::from_request_parts(&mut parts, &()).await.unwrap();
        assert_eq!(caller.0, Some(Principal::new("neo4j")));
    }

    #[tokio::test]
    async fn test_extract_without_principal() {
        let (mut parts, _) = Request::builder().uri("/").body(()).unwrap().into_parts();

        let caller = CallerPrincipal::from_request_parts(&mut parts, &()).await.unwrap();
        assert!(caller.0.is_none());
    }
}
