//! Store trait for user records

use crate::error::Result;
use crate::types::{User, UserId, UserInput};
use async_trait::async_trait;

/// Persistence operations over user records
///
/// The relational implementation lives in `roster-storage`; the server only
/// sees this trait, so handlers can be exercised against in-memory doubles.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert a user; the store assigns id and timestamps
    async fn create_user(&self, input: &UserInput) -> Result<User>;

    /// Get all users in insertion order
    async fn list_users(&self) -> Result<Vec<User>>;

    /// Get user by ID
    async fn get_user(&self, id: UserId) -> Result<Option<User>>;

    /// Replace name and email, refreshing `updated_at`
    ///
    /// Returns `false` when no row matched `id`.
    async fn update_user(&self, id: UserId, input: &UserInput) -> Result<bool>;

    /// Delete a user
    ///
    /// Returns `false` when no row matched `id`.
    async fn delete_user(&self, id: UserId) -> Result<bool>;
}
