//! JSON request body validation and decode-error classification
//!
//! A body is accepted only if it is within the size cap, declared as JSON
//! (or undeclared), and holds exactly one JSON object whose keys and value
//! types match the target. When several problems are present the first one
//! in this order is reported: size, content type, syntax, value type,
//! unknown field, trailing data.

use crate::error::{BadRequest, Result, ServerError};
use axum::{
    body::{Body, Bytes},
    extract::{FromRef, FromRequest, Request},
    http::{header, HeaderMap},
};
use http_body_util::LengthLimitError;
use roster_core::UserInput;
use serde::de::DeserializeOwned;
use serde_json::{error::Category, Value};

/// Field names a JSON payload may carry; any other key is rejected
pub trait JsonFields {
    const FIELDS: &'static [&'static str];
}

impl JsonFields for UserInput {
    const FIELDS: &'static [&'static str] = UserInput::FIELDS;
}

/// Maximum request body size in bytes, read from application state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BodyLimit(pub usize);

/// Extractor yielding a validated, decoded JSON payload
#[derive(Debug)]
pub struct JsonPayload<T>(pub T);

#[axum::async_trait]
impl<S, T> FromRequest<S> for JsonPayload<T>
where
    T: DeserializeOwned + JsonFields,
    BodyLimit: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ServerError;

    async fn from_request(req: Request, state: &S) -> Result<Self> {
        let BodyLimit(limit) = BodyLimit::from_ref(state);
        let (parts, body) = req.into_parts();

        let bytes = read_body(&parts.headers, body, limit).await?;
        require_json_content_type(&parts.headers)?;

        decode(&bytes).map(JsonPayload)
    }
}

/// Read the whole body, refusing anything over `limit` bytes
///
/// A declared `Content-Length` over the limit is refused without reading.
pub async fn read_body(headers: &HeaderMap, body: Body, limit: usize) -> Result<Bytes> {
    let declared = headers
        .get(header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<u64>().ok());

    if declared.is_some_and(|len| len > limit as u64) {
        return Err(ServerError::PayloadTooLarge { limit });
    }

    match axum::body::to_bytes(body, limit).await {
        Ok(bytes) => Ok(bytes),
        Err(err) if is_length_limit(&err) => Err(ServerError::PayloadTooLarge { limit }),
        Err(err) => Err(ServerError::Internal(format!(
            "failed to read request body: {err}"
        ))),
    }
}

fn is_length_limit(err: &axum::Error) -> bool {
    let mut source: Option<&(dyn std::error::Error + 'static)> = Some(err);
    while let Some(e) = source {
        if e.is::<LengthLimitError>() {
            return true;
        }
        source = e.source();
    }
    false
}

/// Accept a missing Content-Type or one whose media type is `application/json`
pub fn require_json_content_type(headers: &HeaderMap) -> Result<()> {
    let Some(value) = headers.get(header::CONTENT_TYPE) else {
        return Ok(());
    };

    let value = value
        .to_str()
        .map_err(|_| ServerError::UnsupportedMediaType)?;
    if value.is_empty() {
        return Ok(());
    }

    let media_type = value.split(';').next().unwrap_or_default().trim();
    if media_type.eq_ignore_ascii_case("application/json") {
        Ok(())
    } else {
        Err(ServerError::UnsupportedMediaType)
    }
}

/// Decode exactly one JSON object into `T`, classifying any failure
pub fn decode<T>(body: &[u8]) -> Result<T>
where
    T: DeserializeOwned + JsonFields,
{
    let mut values = serde_json::Deserializer::from_slice(body).into_iter::<Value>();

    let value = match values.next() {
        None => return Err(BadRequest::EmptyBody.into()),
        Some(Err(err)) => return Err(classify_syntax(body, &err)),
        Some(Ok(value)) => value,
    };
    let end = values.byte_offset();

    // Derived struct impls also accept sequences, so check the shape first
    if !value.is_object() {
        return Err(BadRequest::TypeMismatch {
            field: String::new(),
            offset: end,
        }
        .into());
    }

    let decoded = decode_typed::<T>(&body[..end])?;

    if let Some(field) = first_unknown_field(&value, T::FIELDS) {
        return Err(BadRequest::UnknownField { field }.into());
    }

    // Anything after the first value, well-formed or not
    if values.next().is_some() {
        return Err(BadRequest::MultipleObjects.into());
    }

    Ok(decoded)
}

fn classify_syntax(body: &[u8], err: &serde_json::Error) -> ServerError {
    match err.classify() {
        Category::Eof => BadRequest::BadlyFormedJson { offset: None }.into(),
        Category::Syntax => BadRequest::BadlyFormedJson {
            offset: Some(byte_offset(body, err.line(), err.column())),
        }
        .into(),
        Category::Io | Category::Data => ServerError::Internal(err.to_string()),
    }
}

// Unknown keys are ignored here; they are reported separately and after
// type errors.
fn decode_typed<T: DeserializeOwned>(value: &[u8]) -> Result<T> {
    let de = &mut serde_json::Deserializer::from_slice(value);

    serde_path_to_error::deserialize(de).map_err(|err| {
        let path = err.path().to_string();
        let inner = err.into_inner();

        match inner.classify() {
            Category::Data => BadRequest::TypeMismatch {
                field: if path == "." { String::new() } else { path },
                offset: byte_offset(value, inner.line(), inner.column()),
            }
            .into(),
            Category::Eof | Category::Syntax | Category::Io => {
                ServerError::Internal(inner.to_string())
            }
        }
    })
}

fn first_unknown_field(value: &Value, fields: &[&str]) -> Option<String> {
    value
        .as_object()?
        .keys()
        .find(|key| !fields.contains(&key.as_str()))
        .cloned()
}

/// Convert serde_json's 1-based line and byte column into an absolute offset
fn byte_offset(body: &[u8], line: usize, column: usize) -> usize {
    let line_start: usize = body
        .split(|&b| b == b'\n')
        .take(line.saturating_sub(1))
        .map(|l| l.len() + 1)
        .sum();

    (line_start + column).min(body.len())
}
