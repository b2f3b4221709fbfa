//! One request struct per Bot API endpoint.
//!
//! Each struct implements [`crate::RemoteCall`]: its `METHOD` is the wire
//! name, its `Return` the declared result shape. Required parameters are
//! `new()` arguments; optional ones have a setter named after the parameter.
//!
//! ```rust
//! use botwire_types::methods::GetUpdates;
//! use botwire_types::{Param, RemoteCall};
//!
//! let req = GetUpdates::new().offset(42).timeout(30);
//! let params = req.params();
//! assert!(matches!(params.get("offset"), Some(Param::Int(42))));
//! assert!(matches!(params.get("limit"), Some(Param::Null)));
//! ```

mod chat;
mod editing;
mod games;
mod inline;
mod messages;
mod passport;
mod payments;
mod stickers;
mod updates;

pub use chat::*;
pub use editing::*;
pub use games::*;
pub use inline::*;
pub use messages::*;
pub use passport::*;
pub use payments::*;
pub use stickers::*;
pub use updates::*;
