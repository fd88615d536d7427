//! Server payloads the helpers know about.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The signed-in user as returned by `GET /auth/me`.
///
/// Fields the server adds later are kept in `extra` so the value round-trips.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier (object id string).
    pub id: String,
    /// Display name.
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub is_admin: bool,
    /// ISO 8601 creation timestamp, if the server sent one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

