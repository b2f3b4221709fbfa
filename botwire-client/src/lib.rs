//! # botwire-client
//!
//! Async Telegram Bot API client.
//!
//! ## Features
//! - One async method per Bot API 5.2 endpoint (`send_message`, `get_chat`, …)
//! - Raw [`Client::invoke`] for any request struct from `botwire_types::methods`
//! - Parameter pruning, Remote Type rendering and file upload detection
//! - Pluggable [`Transport`]; the default [`HttpTransport`] speaks HTTPS via `reqwest`
//! - Typed errors: provider failures surface as [`ApiError`] with the raw code
//! - Long-polling [`Updates`] stream and scoped [`TypingGuard`] chat actions
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use botwire_client::{Client, Config};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::from_config(Config::new("123456:ABC-DEF"))?;
//! let me = client.get_me().await?;
//! println!("running as @{}", me.username.unwrap_or_default());
//!
//! let mut updates = client.updates();
//! loop {
//!     let update = updates.next().await?;
//!     if let Some(msg) = update.message() {
//!         if let Some(text) = &msg.text {
//!             client.send_message(msg.chat.id, text.as_str()).await?;
//!         }
//!     }
//! }
//! # }
//! ```

#![deny(unsafe_code)]

mod api;
mod config;
mod errors;
#[cfg(feature = "http")]
mod http;
pub mod prepare;
mod transport;
pub mod typing_guard;
pub mod updates;

pub use config::{Config, ConfigError, DEFAULT_API_URL};
pub use errors::{ApiError, InvocationError, TransportError};
#[cfg(feature = "http")]
pub use http::HttpTransport;
pub use prepare::{Codec, PreparedRequest, PreparedValue, Pruning, Upload, UploadContent};
pub use transport::{Transport, unwrap_envelope};
pub use typing_guard::TypingGuard;
pub use updates::Updates;

use std::sync::Arc;

use botwire_types::{Params, RemoteCall};
use serde_json::Value;

// ─── ClientInner ──────────────────────────────────────────────────────────────

struct ClientInner {
    transport: Arc<dyn Transport>,
    codec:     Codec,
}

/// The Bot API client. Cheap to clone: internally Arc-wrapped.
///
/// A client holds a transport and a codec and nothing else; it keeps no
/// per-call state, so one instance may be shared across tasks.
#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

impl Client {
    // ── Construction ───────────────────────────────────────────────────────

    /// Wrap `transport` with the default codec (empty-value pruning).
    pub fn new(transport: impl Transport + 'static) -> Self {
        Self::with_codec(transport, Codec::default())
    }

    pub fn with_codec(transport: impl Transport + 'static, codec: Codec) -> Self {
        Self::from_parts(Arc::new(transport), codec)
    }

    /// Share one transport between several clients.
    pub fn from_parts(transport: Arc<dyn Transport>, codec: Codec) -> Self {
        Self { inner: Arc::new(ClientInner { transport, codec }) }
    }

    /// Build an [`HttpTransport`] client from `config`.
    #[cfg(feature = "http")]
    pub fn from_config(config: Config) -> Result<Self, TransportError> {
        let transport = HttpTransport::from_config(&config)?;
        Ok(Self::with_codec(transport, Codec::new(config.pruning)))
    }

    pub fn codec(&self) -> Codec {
        self.inner.codec
    }

    pub fn transport_name(&self) -> &str {
        self.inner.transport.name()
    }

    // ── Raw invoke ─────────────────────────────────────────────────────────

    /// Send any request struct and decode its declared return shape.
    ///
    /// Preparation errors ([`InvocationError::Upload`],
    /// [`InvocationError::Encode`]) are raised before the transport is
    /// called. Transport errors are passed through unchanged.
    pub async fn invoke<R: RemoteCall>(&self, req: &R) -> Result<R::Return, InvocationError> {
        let body = self.dispatch(R::METHOD, req.params()).await?;
        self.inner.codec.decode(R::METHOD, &body)
    }

    /// Call `method` with a hand-built parameter map.
    ///
    /// For endpoints newer than this crate. The result is returned as raw JSON.
    pub async fn invoke_raw(&self, method: &str, params: Params) -> Result<Value, InvocationError> {
        let body = self.dispatch(method, params).await?;
        self.inner.codec.decode(method, &body)
    }

    async fn dispatch(&self, method: &str, params: Params) -> Result<String, InvocationError> {
        let request = self.inner.codec.prepare(params)?;
        tracing::debug!(
            "[botwire] {method}: {} params{}",
            request.len(),
            if request.has_uploads() { " (multipart)" } else { "" }
        );
        match self.inner.transport.call(method, request).await {
            Ok(body) => Ok(body),
            Err(e) => {
                tracing::warn!("[botwire] {method} via {} failed: {e}", self.inner.transport.name());
                Err(e.into())
            }
        }
    }
}
