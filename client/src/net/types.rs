//! Wire types for the external contact-intake endpoint.
//!
//! DESIGN
//! ======
//! Replies are parsed leniently: the endpoint is outside our control, so a
//! body that is not a JSON object reads as an empty reply, and `ok` follows
//! loose truthiness rather than demanding a strict boolean.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// JSON body of `POST {api_base}/api/contact`. All fields are pre-trimmed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Decoded contact-intake reply.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactReply {
    /// Success marker. Absent, `null`, `false`, `0` and `""` all read as `false`.
    pub ok: bool,
    /// Human-readable message; blank strings are dropped.
    pub message: Option<String>,
}

impl ContactReply {
    /// Decode a response body, treating anything unparseable as `{}`.
    pub fn from_body(body: &str) -> Self {
        let Ok(Value::Object(map)) = serde_json::from_str::<Value>(body) else {
            return Self::default();
        };
        let ok = map.get("ok").is_some_and(is_truthy);
        let message = map
            .get("message")
            .and_then(Value::as_str)
            .filter(|m| !m.is_empty())
            .map(str::to_owned);
        Self { ok, message }
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
