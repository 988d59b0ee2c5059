use crate::users;
use async_trait::async_trait;
use roster_core::{error::Result, storage::UserStore, User, UserId, UserInput};
use sqlx::PgPool;

/// PostgreSQL-backed user store
#[derive(Clone)]
pub struct PgStorage {
    pool: PgPool,
}

impl PgStorage {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl UserStore for PgStorage {
    async fn create_user(&self, input: &UserInput) -> Result<User> {
        users::create(&self.pool, input).await
    }

    async fn list_users(&self) -> Result<Vec<User>> {
        users::get_all(&self.pool).await
    }

    async fn get_user(&self, id: UserId) -> Result<Option<User>> {
        users::get_by_id(&self.pool, id).await
    }

    async fn update_user(&self, id: UserId, input: &UserInput) -> Result<bool> {
        users::update(&self.pool, id, input).await
    }

    async fn delete_user(&self, id: UserId) -> Result<bool> {
        users::delete(&self.pool, id).await
    }
}
