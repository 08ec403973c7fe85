//! Payload carried in and out of a token

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// User identity plus optional auxiliary data, as passed to `encode`
/// and returned from `decode`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthPayload {
    /// Subject identifier; must be non-empty
    pub user_id: String,
    /// Arbitrary JSON value; `None` and JSON `null` are equivalent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl AuthPayload {
    /// Create a payload with no auxiliary data
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            data: None,
        }
    }

    /// Attach auxiliary data. A JSON `null` is stored as `None`.
    pub fn with_data(mut self, data: impl Into<Value>) -> Self {
        self.data = match data.into() {
            Value::Null => None,
            value => Some(value),
        };
        self
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn data(&self) -> Option<&Value> {
        self.data.as_ref()
    }
}
