//! The uniform JSON response shape returned by the aggregation server.
//!
//! Every endpoint under `/api` answers with the same envelope:
//! `{success: bool, data?: any, error?: string, message?: string}`.

use serde::Deserialize;
use serde_json::Value;

/// Deserialized server response envelope.
///
/// `data` carries the payload for read endpoints (a category list, a feed
/// list); `error` carries a human-readable business error when
/// `success` is false; `message` is an optional server-provided status
/// line (e.g. "Category enabled").
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope {
    pub success: bool,
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl Envelope {
    /// The error string to surface for a failed envelope, falling back to
    /// the caller's configured default when the server provided none.
    pub fn error_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.error.as_deref().unwrap_or(fallback)
    }

    /// Decode `data` into a concrete type, treating a missing `data` field
    /// as JSON null (lets `Option<T>` targets decode cleanly).
    pub fn decode_data<T: serde::de::DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        match &self.data {
            Some(value) => serde_json::from_value(value.clone()),
            None => serde_json::from_value(Value::Null),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_envelope_parses() {
        let env: Envelope = serde_json::from_str(
            r#"{"success": true, "data": {"id": 3}, "message": "created"}"#,
        )
        .unwrap();
        assert!(env.success);
        assert_eq!(env.message.as_deref(), Some("created"));
        assert!(env.error.is_none());
    }

    #[test]
    fn test_minimal_envelope_parses() {
        let env: Envelope = serde_json::from_str(r#"{"success": false}"#).unwrap();
        assert!(!env.success);
        assert!(env.data.is_none());
        assert!(env.error.is_none());
        assert!(env.message.is_none());
    }

    #[test]
    fn test_error_or_prefers_server_error() {
        let env: Envelope =
            serde_json::from_str(r#"{"success": false, "error": "name already exists"}"#).unwrap();
        assert_eq!(env.error_or("operation failed"), "name already exists");
    }

    #[test]
    fn test_error_or_falls_back() {
        let env: Envelope = serde_json::from_str(r#"{"success": false}"#).unwrap();
        assert_eq!(env.error_or("operation failed"), "operation failed");
    }

    #[test]
    fn test_decode_missing_data_as_option() {
        let env: Envelope = serde_json::from_str(r#"{"success": true}"#).unwrap();
        let decoded: Option<Vec<i64>> = env.decode_data().unwrap();
        assert!(decoded.is_none());
    }
}
