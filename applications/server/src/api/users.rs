/// Users API routes
use crate::{
    error::{Result, ServerError},
    extract::{JsonPayload, UserIdPath},
    state::AppState,
};
use axum::{extract::State, http::StatusCode, Json};
use roster_core::{User, UserInput};

/// POST /users
/// Create a user; the store assigns id and timestamps
pub async fn create_user(
    State(app_state): State<AppState>,
    JsonPayload(input): JsonPayload<UserInput>,
) -> Result<StatusCode> {
    let user = app_state.store.create_user(&input).await?;
    tracing::debug!(user_id = user.id, "User created");

    Ok(StatusCode::OK)
}

/// GET /users
/// List all users in insertion order
pub async fn list_users(State(app_state): State<AppState>) -> Result<Json<Vec<User>>> {
    let users = app_state.store.list_users().await?;
    Ok(Json(users))
}

/// GET /users/:id
/// Get a single user
pub async fn get_user(
    State(app_state): State<AppState>,
    UserIdPath(id): UserIdPath,
) -> Result<Json<User>> {
    let user = app_state
        .store
        .get_user(id)
        .await?
        .ok_or(ServerError::NotFound)?;

    Ok(Json(user))
}

/// PUT /users/:id
/// Replace name and email. An id with no matching row still succeeds.
pub async fn update_user(
    State(app_state): State<AppState>,
    UserIdPath(id): UserIdPath,
    JsonPayload(input): JsonPayload<UserInput>,
) -> Result<StatusCode> {
    let matched = app_state.store.update_user(id, &input).await?;
    if !matched {
        tracing::debug!(user_id = id, "Update matched no user");
    }

    Ok(StatusCode::OK)
}

/// DELETE /users/:id
/// Delete a user
pub async fn delete_user(
    State(app_state): State<AppState>,
    UserIdPath(id): UserIdPath,
) -> Result<StatusCode> {
    if !app_state.store.delete_user(id).await? {
        return Err(ServerError::NotFound);
    }

    tracing::debug!(user_id = id, "User deleted");
    Ok(StatusCode::OK)
}
