//! The transport seam.
//!
//! A [`Transport`] performs one network exchange per call: it receives the
//! method name and the prepared request and returns the JSON of the
//! response's `result`. Anything that satisfies this contract can back a
//! [`crate::Client`]: the bundled [`crate::HttpTransport`], a proxying
//! transport, or a test double returning canned JSON.

use async_trait::async_trait;
use botwire_types::types::ResponseParameters;
use serde::Deserialize;
use serde_json::Value;

use crate::errors::{ApiError, TransportError};
use crate::prepare::PreparedRequest;

// ─── Trait ────────────────────────────────────────────────────────────────────

#[async_trait]
pub trait Transport: Send + Sync {
    /// Send `request` as Bot API method `method`.
    ///
    /// Returns the `result` member of a successful response as raw JSON.
    /// Provider-reported failures come back as [`TransportError::Api`].
    async fn call(&self, method: &str, request: PreparedRequest) -> Result<String, TransportError>;

    /// Human-readable name of this transport (for log messages).
    fn name(&self) -> &str;
}

// ─── Envelope ─────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct Envelope {
    ok: bool,
    result: Option<Value>,
    description: Option<String>,
    error_code: Option<i32>,
    parameters: Option<ResponseParameters>,
}

/// Unwrap a Bot API response envelope.
///
/// `{"ok":true,"result":R}` yields the JSON text of `R`.
/// `{"ok":false,...}` yields [`TransportError::Api`]. A body that is not an
/// envelope yields [`TransportError::Status`] for non-2xx statuses and
/// [`TransportError::Malformed`] otherwise.
pub fn unwrap_envelope(status: u16, body: &str) -> Result<String, TransportError> {
    let envelope: Envelope = match serde_json::from_str(body) {
        Ok(e) => e,
        Err(_) if !(200..300).contains(&status) => {
            return Err(TransportError::Status { status, body: truncate(body, 256) });
        }
        Err(e) => return Err(TransportError::Malformed(e.to_string())),
    };

    if envelope.ok {
        return match envelope.result {
            Some(result) => Ok(result.to_string()),
            None         => Err(TransportError::Malformed("`ok` response without `result`".into())),
        };
    }

    let parameters = envelope.parameters.unwrap_or_default();
    Err(TransportError::Api(ApiError {
        code:               envelope.error_code.unwrap_or(i32::from(status)),
        description:        envelope.description.unwrap_or_default(),
        retry_after:        parameters.retry_after.and_then(|s| u64::try_from(s).ok()),
        migrate_to_chat_id: parameters.migrate_to_chat_id,
    }))
}

fn truncate(body: &str, max: usize) -> String {
    match body.char_indices().nth(max) {
        Some((idx, _)) => format!("{}…", &body[..idx]),
        None           => body.to_owned(),
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_envelope_yields_result_json() {
        let body = r#"{"ok":true,"result":{"id":1,"is_bot":true,"first_name":"B"}}"#;
        let result = unwrap_envelope(200, body).unwrap();
        let value: Value = serde_json::from_str(&result).unwrap();
        assert_eq!(value["first_name"], "B");
    }

    #[test]
    fn scalar_results_survive() {
        assert_eq!(unwrap_envelope(200, r#"{"ok":true,"result":true}"#).unwrap(), "true");
        assert_eq!(unwrap_envelope(200, r#"{"ok":true,"result":17}"#).unwrap(), "17");
    }

    #[test]
    fn error_envelope_becomes_api_error() {
        let body = r#"{"ok":false,"error_code":429,"description":"Too Many Requests: retry after 7","parameters":{"retry_after":7}}"#;
        let err = unwrap_envelope(429, body).unwrap_err();
        let api = err.api().unwrap();
        assert_eq!(api.code, 429);
        assert_eq!(api.retry_after, Some(7));
        assert!(api.is("too many requests*"));
    }

    #[test]
    fn migration_hint_is_kept() {
        let body = r#"{"ok":false,"error_code":400,"description":"Bad Request: group chat was upgraded to a supergroup chat","parameters":{"migrate_to_chat_id":-1001}}"#;
        let err = unwrap_envelope(400, body).unwrap_err();
        assert_eq!(err.api().and_then(|e| e.migrate_to_chat_id), Some(-1001));
    }

    #[test]
    fn non_json_error_body_is_a_status_error() {
        let err = unwrap_envelope(502, "<html>Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, TransportError::Status { status: 502, .. }));
    }

    #[test]
    fn non_json_success_body_is_malformed() {
        let err = unwrap_envelope(200, "not json").unwrap_err();
        assert!(matches!(err, TransportError::Malformed(_)));
    }
}
