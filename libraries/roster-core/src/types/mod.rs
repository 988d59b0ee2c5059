//! Domain types for Roster
mod user;

pub use user::{User, UserId, UserInput};
