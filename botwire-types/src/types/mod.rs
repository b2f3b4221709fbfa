//! Remote Types: the Bot API's wire objects as plain serde structs.
//!
//! Unset optional fields are `None` and are left out of the serialized
//! JSON. A wire field called `type` is exposed as `kind`.

mod chat;
mod games;
mod inline;
mod keyboard;
mod media;
mod message;
mod passport;
mod payments;
mod primitives;
mod stickers;
mod updates;

pub use chat::*;
pub use games::*;
pub use inline::*;
pub use keyboard::*;
pub use media::*;
pub use message::*;
pub use passport::*;
pub use payments::*;
pub use primitives::*;
pub use stickers::*;
pub use updates::*;
