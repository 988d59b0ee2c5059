//! Common test utilities and fixtures
#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Request},
    response::Response,
    Router,
};
use chrono::Utc;
use roster_core::{Result, RosterError, User, UserId, UserInput, UserStore};
use roster_server::{create_router, AppState};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tower::util::ServiceExt;

pub const TEST_BODY_LIMIT: usize = 1_048_576;

/// In-memory store mirroring the PostgreSQL semantics
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<MemoryState>,
}

#[derive(Default)]
struct MemoryState {
    next_id: UserId,
    users: Vec<User>,
}

impl MemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn create_user(&self, input: &UserInput) -> Result<User> {
        let mut state = self.inner.lock().unwrap();
        state.next_id += 1;
        let now = Utc::now();
        let user = User {
            id: state.next_id,
            name: input.name.clone(),
            email: input.email.clone(),
            created_at: now,
            updated_at: now,
        };
        state.users.push(user.clone());
        Ok(user)
    }

    async fn list_users(&self) -> Result<Vec<User>> {
        Ok(self.inner.lock().unwrap().users.clone())
    }

    async fn get_user(&self, id: UserId) -> Result<Option<User>> {
        let state = self.inner.lock().unwrap();
        Ok(state.users.iter().find(|u| u.id == id).cloned())
    }

    async fn update_user(&self, id: UserId, input: &UserInput) -> Result<bool> {
        let mut state = self.inner.lock().unwrap();
        match state.users.iter_mut().find(|u| u.id == id) {
            Some(user) => {
                user.name = input.name.clone();
                user.email = input.email.clone();
                user.updated_at = Utc::now().max(user.updated_at);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_user(&self, id: UserId) -> Result<bool> {
        let mut state = self.inner.lock().unwrap();
        let before = state.users.len();
        state.users.retain(|u| u.id != id);
        Ok(state.users.len() != before)
    }
}

/// Store whose every call fails, to exercise the 500 path
pub struct FailingStore;

pub const FAILURE_DETAIL: &str = "relation \"users\" does not exist";

#[async_trait]
impl UserStore for FailingStore {
    async fn create_user(&self, _input: &UserInput) -> Result<User> {
        Err(RosterError::storage(FAILURE_DETAIL))
    }

    async fn list_users(&self) -> Result<Vec<User>> {
        Err(RosterError::storage(FAILURE_DETAIL))
    }

    async fn get_user(&self, _id: UserId) -> Result<Option<User>> {
        Err(RosterError::storage(FAILURE_DETAIL))
    }

    async fn update_user(&self, _id: UserId, _input: &UserInput) -> Result<bool> {
        Err(RosterError::storage(FAILURE_DETAIL))
    }

    async fn delete_user(&self, _id: UserId) -> Result<bool> {
        Err(RosterError::storage(FAILURE_DETAIL))
    }
}

/// Build the full application router around `store`
pub fn create_test_app(store: Arc<dyn UserStore>) -> Router {
    create_router(
        AppState::new(store, TEST_BODY_LIMIT),
        Duration::from_secs(5),
    )
}

/// Send one request through a clone of the router
pub async fn send(app: &Router, request: Request<Body>) -> Response {
    app.clone().oneshot(request).await.unwrap()
}

/// Request with a JSON content type
pub fn json_request(method: &str, uri: &str, body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .unwrap()
}

/// Request without a body
pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

/// The `error` message of a JSON error response
pub async fn error_message(response: Response) -> String {
    body_json(response).await["error"]
        .as_str()
        .unwrap()
        .to_string()
}
