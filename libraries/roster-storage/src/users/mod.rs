//! User record queries

use roster_core::{error::Result, User, UserId, UserInput};
use sqlx::PgPool;

/// Insert a user and return the stored record
pub async fn create(pool: &PgPool, input: &UserInput) -> Result<User> {
    let user = sqlx::query_as::<_, User>(
        "INSERT INTO users (name, email) VALUES ($1, $2)
         RETURNING id, name, email, created_at, updated_at",
    )
    .bind(&input.name)
    .bind(&input.email)
    .fetch_one(pool)
    .await?;

    Ok(user)
}

/// Get all users in insertion order
pub async fn get_all(pool: &PgPool) -> Result<Vec<User>> {
    let users = sqlx::query_as::<_, User>(
        "SELECT id, name, email, created_at, updated_at FROM users ORDER BY id",
    )
    .fetch_all(pool)
    .await?;

    Ok(users)
}

/// Get user by ID
pub async fn get_by_id(pool: &PgPool, id: UserId) -> Result<Option<User>> {
    let user = sqlx::query_as::<_, User>(
        "SELECT id, name, email, created_at, updated_at FROM users WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Replace name and email; `updated_at` never moves backwards
///
/// Returns whether a row matched.
pub async fn update(pool: &PgPool, id: UserId, input: &UserInput) -> Result<bool> {
    let result = sqlx::query(
        "UPDATE users
         SET name = $1, email = $2, updated_at = GREATEST(updated_at, NOW())
         WHERE id = $3",
    )
    .bind(&input.name)
    .bind(&input.email)
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

/// Delete a user
///
/// Returns whether a row matched.
pub async fn delete(pool: &PgPool, id: UserId) -> Result<bool> {
    let result = sqlx::query("DELETE FROM users WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
