//! # botwire: Telegram Bot API bindings
//!
//! `botwire` wires two focused sub-crates together for convenience:
//!
//! | Sub-crate        | Role                                                         |
//! |------------------|--------------------------------------------------------------|
//! | `botwire-types`  | Remote Types, request structs for all 77 methods, parameters |
//! | `botwire-client` | Request preparation, transport seam, `Client`, update stream |
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use botwire::prelude::*;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::from_config(Config::from_env()?)?;
//!
//! let mut updates = client.updates();
//! loop {
//!     let update = updates.next().await?;
//!     if let UpdateKind::Message(msg) = update.kind() {
//!         client
//!             .invoke(&SendMessage::new(msg.chat.id, "pong").parse_mode(ParseMode::Html))
//!             .await?;
//!     }
//! }
//! # }
//! ```
//!
//! ## Bringing your own transport
//!
//! Disable the default `http` feature and implement [`Transport`] for
//! whatever carries requests in your environment; [`Client::new`] accepts
//! any implementation.

#![deny(unsafe_code)]
#![warn(missing_docs)]

/// Re-export of [`botwire_types`]: Remote Types, request structs, parameters.
pub use botwire_types as wire;

/// Re-export of [`botwire_client`]: preparation, dispatch and transports.
pub use botwire_client as client;

/// Remote Types (`Message`, `Chat`, `User`, …).
pub use botwire_types::types;

/// One request struct per Bot API method.
pub use botwire_types::methods;

// ─── Convenience re-exports ───────────────────────────────────────────────────

pub use botwire_types::{BOT_API_VERSION, InputFile, OrBool, Params, RemoteCall, RemoteType};

pub use botwire_client::{
    ApiError, Client, Codec, Config, InvocationError, Pruning, Transport, TransportError,
    TypingGuard, Updates,
};

#[cfg(feature = "http")]
pub use botwire_client::HttpTransport;

/// Everything a typical bot needs in scope.
pub mod prelude {
    pub use botwire_client::{Client, Config, InvocationError, Updates};
    pub use botwire_types::methods::*;
    pub use botwire_types::types::{
        BotCommand, ChatAction, ChatId, InlineKeyboardButton, InlineKeyboardMarkup, Message, ParseMode,
        ReplyMarkup, Update, UpdateKind,
    };
    pub use botwire_types::{InputFile, OrBool, RemoteCall};
}
