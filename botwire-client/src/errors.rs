//! Error types for botwire-client.
//!
//! Three layers: [`ApiError`] is what the Bot API itself reported,
//! [`TransportError`] is anything the transport raised, and
//! [`InvocationError`] is what every [`crate::Client`] call returns.

use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

// ─── ApiError ─────────────────────────────────────────────────────────────────

/// A failure reported by the Bot API in an `{"ok": false, ...}` envelope.
///
/// # Example
/// `{"ok":false,"error_code":429,"description":"Too Many Requests: retry after 5","parameters":{"retry_after":5}}`
/// becomes `ApiError { code: 429, description: "Too Many Requests: retry after 5", retry_after: Some(5), .. }`.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiError {
    /// HTTP-like status code (`error_code`).
    pub code: i32,
    /// Human-readable description, e.g. `"Bad Request: chat not found"`.
    pub description: String,
    /// Seconds to wait before repeating the request, for flood limits.
    pub retry_after: Option<u64>,
    /// The group migrated to a supergroup with this id.
    pub migrate_to_chat_id: Option<i64>,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "API {}: {}", self.code, self.description)?;
        if let Some(s) = self.retry_after {
            write!(f, " (retry after {s}s)")?;
        }
        Ok(())
    }
}

impl std::error::Error for ApiError {}

impl ApiError {
    /// Match on the description, with optional wildcard prefix/suffix `'*'`.
    ///
    /// The match ignores ASCII case.
    ///
    /// # Examples
    /// - `err.is("Forbidden: bot was blocked by the user")`: exact match
    /// - `err.is("Bad Request: *")`: starts-with match
    /// - `err.is("*not found")`: ends-with match
    pub fn is(&self, pattern: &str) -> bool {
        let desc = self.description.to_ascii_lowercase();
        let pattern = pattern.to_ascii_lowercase();
        if let Some(prefix) = pattern.strip_suffix('*') {
            desc.starts_with(prefix)
        } else if let Some(suffix) = pattern.strip_prefix('*') {
            desc.ends_with(suffix)
        } else {
            desc == pattern
        }
    }

    /// How long to back off, if this is a 429 flood-limit error.
    pub fn retry_after(&self) -> Option<std::time::Duration> {
        self.retry_after.map(std::time::Duration::from_secs)
    }
}

// ─── TransportError ───────────────────────────────────────────────────────────

/// Everything a [`crate::Transport`] can fail with.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The Bot API rejected the request.
    #[error(transparent)]
    Api(ApiError),
    /// Connection, TLS or protocol failure inside the HTTP client.
    ///
    /// The request URL embeds the bot token, so it is stripped from the
    /// error on conversion.
    #[cfg(feature = "http")]
    #[error("HTTP error: {0}")]
    Http(reqwest::Error),
    /// A non-success status whose body was not a Bot API envelope.
    #[error("unexpected HTTP status {status}: {body}")]
    Status { status: u16, body: String },
    /// A body that could not be read as a Bot API envelope.
    #[error("malformed response: {0}")]
    Malformed(String),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// Anything raised by a custom transport.
    #[error("{0}")]
    Other(String),
}

impl TransportError {
    /// The provider-reported error, if that is what this is.
    pub fn api(&self) -> Option<&ApiError> {
        match self {
            Self::Api(e) => Some(e),
            _            => None,
        }
    }
}

impl From<ApiError> for TransportError {
    fn from(e: ApiError) -> Self { Self::Api(e) }
}

#[cfg(feature = "http")]
impl From<reqwest::Error> for TransportError {
    fn from(e: reqwest::Error) -> Self { Self::Http(e.without_url()) }
}

// ─── InvocationError ──────────────────────────────────────────────────────────

/// The error type returned from any `Client` method that talks to Telegram.
#[derive(Debug, Error)]
pub enum InvocationError {
    /// Raised by the transport; passed through untouched.
    #[error(transparent)]
    Transport(#[from] TransportError),
    /// A local file named by an `InputFile` could not be opened.
    #[error("cannot open {}: {source}", path.display())]
    Upload {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// A parameter value could not be rendered to JSON.
    #[error("cannot encode parameter `{key}`: {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    /// The response did not match the declared return shape.
    #[error("cannot decode `{method}` result: {source}")]
    Decode {
        method: String,
        #[source]
        source: serde_json::Error,
    },
}

impl InvocationError {
    /// Returns `true` if this is an API error whose description matches
    /// `pattern` (supports `'*'` wildcards).
    pub fn is(&self, pattern: &str) -> bool {
        self.api().is_some_and(|e| e.is(pattern))
    }

    /// The provider-reported error, if any.
    pub fn api(&self) -> Option<&ApiError> {
        match self {
            Self::Transport(t) => t.api(),
            _                  => None,
        }
    }

    /// If this is a flood-limit error, how long to wait.
    pub fn retry_after(&self) -> Option<std::time::Duration> {
        self.api().and_then(ApiError::retry_after)
    }
}
