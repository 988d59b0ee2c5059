//! Roster Server Library
//!
//! HTTP CRUD service over user records with strict JSON body validation.
//!
//! This library exposes the core components for testing purposes.

pub mod api;
pub mod config;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod server;
pub mod state;

// Re-export commonly used types for convenience
pub use config::ServerConfig;
pub use error::{BadRequest, Result, ServerError};
pub use server::create_router;
pub use state::AppState;
