//! Telegram Bot API types, request parameters and endpoint definitions.
//!
//! Everything here mirrors the [Bot API] wire schema (version 5.2).
//!
//! # Overview
//!
//! | Module      | Contents                                                        |
//! |-------------|-----------------------------------------------------------------|
//! | [`types`]   | Remote Types (`Message`, `Chat`, `User`, …) as serde structs     |
//! | [`methods`] | One request struct per endpoint, implementing [`RemoteCall`]     |
//! | [`params`]  | The request parameter tree handed to the client's pipeline      |
//! | [`wire`]    | The [`RemoteType`] contract and JSON helpers                     |
//!
//! # Raw usage
//!
//! ```rust
//! use botwire_types::methods::SendMessage;
//! use botwire_types::types::ParseMode;
//! use botwire_types::RemoteCall;
//!
//! let req = SendMessage::new(12345, "*hello*").parse_mode(ParseMode::MarkdownV2);
//! let params = req.params();
//!
//! assert_eq!(SendMessage::METHOD, "sendMessage");
//! assert!(params.get("chat_id").is_some());
//! // Hand `params` to a client for preparation and dispatch…
//! ```
//!
//! [Bot API]: https://core.telegram.org/bots/api

#![deny(unsafe_code)]
#![allow(clippy::large_enum_variant)]

#[macro_use]
mod macros;

pub mod methods;
pub mod params;
pub mod types;
pub mod wire;

pub use params::{InputFile, Param, Params, ToParam};
pub use wire::{OrBool, RemoteType, WireObject, from_str, to_string};

/// The Bot API revision these definitions track.
pub const BOT_API_VERSION: &str = "5.2";

// ─── Core traits ──────────────────────────────────────────────────────────────

/// Marks a request struct that can be sent to the Bot API.
///
/// `Return` is the shape the response's `result` decodes into.
pub trait RemoteCall {
    /// Wire name of the method, e.g. `"sendMessage"`.
    const METHOD: &'static str;

    /// The declared return shape.
    type Return: serde::de::DeserializeOwned + Send;

    /// Build the flat parameter map for this call.
    ///
    /// Unset optional parameters are present as [`Param::Null`]; pruning them
    /// is the client's job.
    fn params(&self) -> Params;
}
