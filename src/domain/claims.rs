//! Signed claims structure
//!
//! Claims are deserialized leniently: a claim holding the wrong JSON type is
//! treated as absent instead of failing the whole token, so callers get a
//! well-defined error (`EmptyUserId`, `TokenExpired`) rather than a parse failure.

use chrono::Utc;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::payload::AuthPayload;

/// Claims carried inside a signed token
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject identifier
    #[serde(default, deserialize_with = "lenient_string")]
    pub user_id: String,
    /// Expiration timestamp (Unix epoch seconds, UTC)
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub expiry: i64,
    /// Auxiliary data, serialized as `null` when absent
    #[serde(default)]
    pub data: Option<Value>,
}

impl TokenClaims {
    /// Build claims for a payload expiring at the given timestamp
    pub fn new(payload: &AuthPayload, expiry: i64) -> Self {
        Self {
            user_id: payload.user_id.clone(),
            expiry,
            data: payload.data.clone(),
        }
    }

    /// Check if the claims have expired, allowing `leeway` seconds of skew
    pub fn is_expired(&self, leeway: u64) -> bool {
        let leeway = i64::try_from(leeway).unwrap_or(i64::MAX);
        Utc::now().timestamp() > self.expiry.saturating_add(leeway)
    }

    pub fn into_payload(self) -> AuthPayload {
        AuthPayload {
            user_id: self.user_id,
            data: self.data,
        }
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        _ => Ok(String::new()),
    }
}

/// Accepts integer or floating-point timestamps; floats are truncated to whole seconds
fn lenient_timestamp<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let Value::Number(n) = value else {
        return Ok(0);
    };

    if let Some(i) = n.as_i64() {
        Ok(i)
    } else if n.as_u64().is_some() {
        Ok(i64::MAX)
    } else {
        // `as` saturates on out-of-range floats
        Ok(n.as_f64().map(|f| f as i64).unwrap_or(0))
    }
}
