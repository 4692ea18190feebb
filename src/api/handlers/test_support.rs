//! Recording user store and request helpers for handler tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    Extension, Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use tower::ServiceExt;

use crate::api::dto::ErrorResponse;
use crate::api::handlers::user_admin_routes;
use crate::auth::{Authenticator, Principal, StoreError, User, UserStore};
use crate::state::AppState;

/// What the store answers to `create_user`
#[derive(Debug, Clone, Copy)]
pub enum CreateOutcome {
    Created,
    NoUser,
    IllegalUsername(&'static str),
    Io(&'static str),
}

/// What the store answers to `delete_user`
#[derive(Debug, Clone, Copy)]
pub enum DeleteOutcome {
    Deleted,
    Missing,
    Io(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreCall {
    Create {
        username: String,
        password: String,
        must_change_password: bool,
    },
    Delete {
        username: String,
    },
}

/// Store double that answers with fixed outcomes and records every call.
#[derive(Debug)]
pub struct RecordingStore {
    create: CreateOutcome,
    delete: DeleteOutcome,
    calls: Mutex<Vec<StoreCall>>,
}

impl RecordingStore {
    pub fn creating(create: CreateOutcome) -> Arc<Self> {
        Arc::new(Self {
            create,
            delete: DeleteOutcome::Deleted,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn deleting(delete: DeleteOutcome) -> Arc<Self> {
        Arc::new(Self {
            create: CreateOutcome::Created,
            delete,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> Vec<StoreCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: StoreCall) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl UserStore for RecordingStore {
    async fn create_user(
        &self,
        username: &str,
        password: &str,
        must_change_password: bool,
    ) -> Result<Option<User>, StoreError> {
        self.record(StoreCall::Create {
            username: username.to_string(),
            password: password.to_string(),
            must_change_password,
        });

        match self.create {
            CreateOutcome::Created => Ok(Some(User {
                name: username.to_string(),
                must_change_password,
            })),
            CreateOutcome::NoUser => Ok(None),
            CreateOutcome::IllegalUsername(message) => Err(StoreError::illegal_username(message)),
            CreateOutcome::Io(message) => Err(StoreError::io(message)),
        }
    }

    async fn delete_user(&self, username: &str) -> Result<bool, StoreError> {
        self.record(StoreCall::Delete {
            username: username.to_string(),
        });

        match self.delete {
            DeleteOutcome::Deleted => Ok(true),
            DeleteOutcome::Missing => Ok(false),
            DeleteOutcome::Io(message) => Err(StoreError::io(message)),
        }
    }
}

/// Authenticator that accepts nobody; tests attach principals directly.
struct RejectAll;

#[async_trait]
impl Authenticator for RejectAll {
    async fn authenticate(&self, _username: &str, _password: &str) -> Option<Principal> {
        None
    }
}

/// Builds the admin routes over `store`, optionally authenticated as `principal`.
fn router(store: &Arc<RecordingStore>, principal: Option<&str>) -> Router {
    let state = AppState::new(store.clone(), Arc::new(RejectAll));
    let routes = user_admin_routes();

    let routes = match principal {
        Some(name) => routes.layer(Extension(Principal::new(name))),
        None => routes,
    };

    routes.with_state(state)
}

/// Sends one request and returns its status and body bytes.
pub async fn send(
    store: &Arc<RecordingStore>,
    principal: Option<&str>,
    request: Request<Body>,
) -> (StatusCode, Vec<u8>) {
    let response = router(store, principal).oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec();
    (status, body)
}

pub fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// A JSON body larger than axum's default 2 MB body limit.
pub fn oversized_json(uri: &str) -> Request<Body> {
    let padding = "x".repeat(3 * 1024 * 1024);
    post_json(uri, &format!(r#"{{"password":"bar","padding":"{padding}"}}"#))
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn error_body(body: &[u8]) -> ErrorResponse {
    serde_json::from_slice(body).expect("error payload should be JSON")
}
