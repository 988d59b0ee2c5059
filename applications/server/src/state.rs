/// Shared application state
use crate::extract::BodyLimit;
use axum::extract::FromRef;
use roster_core::UserStore;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn UserStore>,
    pub body_limit: usize,
}

impl AppState {
    pub fn new(store: Arc<dyn UserStore>, body_limit: usize) -> Self {
        Self { store, body_limit }
    }
}

impl FromRef<AppState> for BodyLimit {
    fn from_ref(state: &AppState) -> Self {
        BodyLimit(state.body_limit)
    }
}
