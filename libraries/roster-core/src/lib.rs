//! Roster Core
//!
//! Storage-agnostic domain types, the store trait, and error handling for Roster.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `User` (the stored record) and `UserInput` (the client-writable shape)
//! - **Store Trait**: `UserStore`, implemented by `roster-storage` and by test doubles
//! - **Error Handling**: Unified `RosterError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use roster_core::types::UserInput;
//!
//! let input = UserInput::new("Ada", "ada@example.com");
//! assert_eq!(input.name, "Ada");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod storage;
pub mod types;

// Re-export commonly used types
pub use error::{Result, RosterError};
pub use storage::UserStore;
pub use types::{User, UserId, UserInput};
