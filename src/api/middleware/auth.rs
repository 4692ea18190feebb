//! HTTP Basic authentication middleware.
//!
//! Resolves `Authorization: Basic ...` credentials to a [`Principal`] and
//! stores it in request extensions. Requests are never rejected here: a
//! missing or wrong credential just leaves the request without a principal,
//! and each handler decides how to answer that.

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use base64::{Engine, engine::general_purpose::STANDARD as BASE64};

use crate::auth::Principal;
use crate::state::AppState;

/// Decodes a `Basic` authorization header value into `(username, password)`.
///
/// The password may itself contain `:`; only the first one separates.
pub fn parse_basic_credentials(value: &str) -> Option<(String, String)> {
    let (scheme, encoded) = value.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("basic") {
        return None;
    }

    let decoded = BASE64.decode(encoded.trim()).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (username, password) = decoded.split_once(':')?;

    Some((username.to_string(), password.to_string()))
}

/// Basic authentication middleware
///
/// # Example
/// ```ignore
/// Router::new()
///     .route("/useradd/{username}", post(handler))
///     .layer(middleware::from_fn_with_state(state.clone(), basic_auth_middleware))
/// ```
pub async fn basic_auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    // Never trust a principal that arrived from outside this middleware
    request.extensions_mut().remove::<Principal>();

    let credentials = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(parse_basic_credentials);

    if let Some((username, password)) = credentials {
        match state.authenticator.authenticate(&username, &password).await {
            Some(principal) => {
                request.extensions_mut().insert(principal);
            }
            None => {
                tracing::debug!(username = %username, "Basic authentication failed");
            }
        }
    }

    next.run(request).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(raw: &str) -> String {
        format!("Basic {}", BASE64.encode(raw))
    }

    #[test]
    fn test_parse_valid_credentials() {
        assert_eq!(
            parse_basic_credentials(&encode("neo4j:secret")),
            Some(("neo4j".to_string(), "secret".to_string()))
        );
    }

    #[test]
    fn test_parse_password_with_colon() {
        assert_eq!(
            parse_basic_credentials(&encode("neo4j:a:b")),
            Some(("neo4j".to_string(), "a:b".to_string()))
        );
    }

    #[test]
    fn test_parse_scheme_is_case_insensitive() {
        let value = format!("basic {}", BASE64.encode("neo4j:secret"));
        assert!(parse_basic_credentials(&value).is_some());
    }

    #[test]
    fn test_parse_rejects_other_schemes() {
        assert!(parse_basic_credentials("Bearer abc.def.ghi").is_none());
        assert!(parse_basic_credentials("Basic").is_none());
    }

    #[test]
    fn test_parse_rejects_bad_payloads() {
        assert!(parse_basic_credentials("Basic !!!not-base64!!!").is_none());
        assert!(parse_basic_credentials(&encode("no-separator")).is_none());
    }
}
