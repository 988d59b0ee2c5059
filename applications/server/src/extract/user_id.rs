/// `{id}` path segment extractor
use crate::error::ServerError;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use roster_core::UserId;

/// A user id taken from the path.
///
/// Malformed and non-positive ids are rejected as "not found" rather than
/// "bad request", so callers cannot tell a bad id from an absent one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserIdPath(pub UserId);

#[axum::async_trait]
impl<S> FromRequestParts<S> for UserIdPath
where
    S: Send + Sync,
{
    type Rejection = ServerError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| ServerError::NotFound)?;

        parse_user_id(&raw)
            .map(UserIdPath)
            .ok_or(ServerError::NotFound)
    }
}

/// Parse a positive integer id
pub fn parse_user_id(raw: &str) -> Option<UserId> {
    raw.parse::<UserId>().ok().filter(|id| *id > 0)
}
