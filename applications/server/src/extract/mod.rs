/// Request extractors that validate input before it reaches a handler
pub mod payload;
pub mod user_id;

pub use payload::{BodyLimit, JsonFields, JsonPayload};
pub use user_id::UserIdPath;
