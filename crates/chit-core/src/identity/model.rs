//! Session identity model.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The authenticated-session payload as returned by the auth endpoint.
///
/// Only `id` and `username` are guaranteed. Backend versions disagree on
/// where (and whether) the canonical member id is embedded, so the remaining
/// fields are kept as a raw map and probed by the resolver rather than
/// modeled structurally.
///
/// Read-only from this crate's perspective: the auth collaborator owns the
/// payload and its lifecycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionIdentity {
    /// Opaque session-user identifier. May be a number or a string, and may
    /// live in a different namespace than the backend member id.
    pub id: Value,
    /// Display username
    #[serde(default)]
    pub username: String,
    /// Remaining payload fields, layout varies by backend version
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SessionIdentity {
    /// Builds a minimal identity for tests and fixtures.
    pub fn new(id: impl Into<Value>, username: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            username: username.into(),
            extra: Map::new(),
        }
    }

    /// Adds an extra payload field.
    pub fn with_field(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }
}
