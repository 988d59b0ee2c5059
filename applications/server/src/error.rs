/// Server error types
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ServerError>;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error(transparent)]
    BadRequest(#[from] BadRequest),

    #[error("Content-Type header is not application/json")]
    UnsupportedMediaType,

    #[error("Request body must not be larger than {}", human_size(.limit))]
    PayloadTooLarge { limit: usize },

    #[error("User not found")]
    NotFound,

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Database error: {0}")]
    Database(#[from] roster_core::RosterError),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Ways a request body can fail to describe exactly one user payload
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BadRequest {
    /// Syntax error; `offset` is absent when the body ends mid-value
    #[error("{}", badly_formed(.offset))]
    BadlyFormedJson { offset: Option<usize> },

    #[error("Request body contains an invalid value for the {field:?} field (at position {offset})")]
    TypeMismatch { field: String, offset: usize },

    #[error("Request body contains unknown field {field:?}")]
    UnknownField { field: String },

    #[error("Request body must not be empty")]
    EmptyBody,

    #[error("Request body must only contain a single JSON object")]
    MultipleObjects,
}

fn badly_formed(offset: &Option<usize>) -> String {
    match offset {
        Some(offset) => format!("Request body contains badly-formed JSON (at position {offset})"),
        None => "Request body contains badly-formed JSON".to_string(),
    }
}

fn human_size(bytes: &usize) -> String {
    const KB: usize = 1024;
    const MB: usize = 1024 * KB;

    match *bytes {
        b if b >= MB && b % MB == 0 => format!("{}MB", b / MB),
        b if b >= KB && b % KB == 0 => format!("{}KB", b / KB),
        b => format!("{b} bytes"),
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ServerError::BadRequest(ref rejection) => (StatusCode::BAD_REQUEST, rejection.to_string()),
            ServerError::UnsupportedMediaType => {
                (StatusCode::UNSUPPORTED_MEDIA_TYPE, self.to_string())
            }
            ServerError::PayloadTooLarge { .. } => (StatusCode::PAYLOAD_TOO_LARGE, self.to_string()),
            ServerError::NotFound => (StatusCode::NOT_FOUND, self.to_string()),
            ServerError::Database(ref e) => {
                tracing::error!("Database error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            ServerError::Config(ref msg) => {
                tracing::error!("Config error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            ServerError::Internal(ref msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}
