/// User domain types
use chrono::{DateTime, Utc};
use serde::de::{IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// User identifier, generated by the store
pub type UserId = i64;

/// User record as stored and serialized
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct User {
    /// Unique user identifier (server-assigned)
    pub id: UserId,

    /// Display name
    pub name: String,

    /// Contact email
    pub email: String,

    /// Creation timestamp (server-assigned)
    pub created_at: DateTime<Utc>,

    /// Last modification timestamp (server-refreshed on update)
    pub updated_at: DateTime<Utc>,
}

/// Client-writable user fields, accepted by create and update.
///
/// Absent fields and explicit `null`s decode to the empty string. A key
/// given more than once keeps its last value, and keys other than
/// [`UserInput::FIELDS`] are skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UserInput {
    /// Display name
    pub name: String,

    /// Contact email
    pub email: String,
}

impl UserInput {
    /// Field names accepted in a request body
    pub const FIELDS: &'static [&'static str] = &["name", "email"];

    /// Create a new input
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

impl<'de> Deserialize<'de> for UserInput {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_struct("UserInput", Self::FIELDS, UserInputVisitor)
    }
}

struct UserInputVisitor;

impl<'de> Visitor<'de> for UserInputVisitor {
    type Value = UserInput;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a JSON object with name and email")
    }

    fn visit_map<A>(self, mut map: A) -> Result<UserInput, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut input = UserInput::default();

        while let Some(key) = map.next_key::<String>()? {
            match key.as_str() {
                "name" => input.name = next_string(&mut map)?,
                "email" => input.email = next_string(&mut map)?,
                _ => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }

        Ok(input)
    }
}

fn next_string<'de, A>(map: &mut A) -> Result<String, A::Error>
where
    A: MapAccess<'de>,
{
    map.next_value::<Option<String>>().map(Option::unwrap_or_default)
}
