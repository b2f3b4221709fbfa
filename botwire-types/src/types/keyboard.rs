use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::{CallbackGame, Message, User};

// ─── Reply keyboards ──────────────────────────────────────────────────────────

/// A custom keyboard with reply options.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReplyKeyboardMarkup {
    pub keyboard: Vec<Vec<KeyboardButton>>,
    pub resize_keyboard: Option<bool>,
    pub one_time_keyboard: Option<bool>,
    pub selective: Option<bool>,
}

impl ReplyKeyboardMarkup {
    pub fn new(keyboard: Vec<Vec<KeyboardButton>>) -> Self {
        Self { keyboard, resize_keyboard: None, one_time_keyboard: None, selective: None }
    }

    pub fn resize(mut self) -> Self {
        self.resize_keyboard = Some(true);
        self
    }

    pub fn one_time(mut self) -> Self {
        self.one_time_keyboard = Some(true);
        self
    }
}

/// One button of a reply keyboard. At most one of the optional fields may be used.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct KeyboardButton {
    pub text: String,
    pub request_contact: Option<bool>,
    pub request_location: Option<bool>,
    pub request_poll: Option<KeyboardButtonPollType>,
}

impl KeyboardButton {
    pub fn text(text: impl Into<String>) -> Self {
        Self { text: text.into(), request_contact: None, request_location: None, request_poll: None }
    }
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct KeyboardButtonPollType {
    /// `quiz`, `regular`, or unset to allow either.
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

/// Removes the current custom keyboard.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReplyKeyboardRemove {
    /// Always `true`.
    pub remove_keyboard: bool,
    pub selective: Option<bool>,
}

impl Default for ReplyKeyboardRemove {
    fn default() -> Self {
        Self { remove_keyboard: true, selective: None }
    }
}

/// Shows a reply interface to the user, as if they had selected "Reply".
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ForceReply {
    /// Always `true`.
    pub force_reply: bool,
    pub selective: Option<bool>,
}

impl Default for ForceReply {
    fn default() -> Self {
        Self { force_reply: true, selective: None }
    }
}

// ─── Inline keyboards ─────────────────────────────────────────────────────────

/// An inline keyboard that appears right next to the message it belongs to.
#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct InlineKeyboardMarkup {
    pub inline_keyboard: Vec<Vec<InlineKeyboardButton>>,
}

impl InlineKeyboardMarkup {
    pub fn new(rows: Vec<Vec<InlineKeyboardButton>>) -> Self {
        Self { inline_keyboard: rows }
    }

    /// Append a row of buttons.
    pub fn row(mut self, row: Vec<InlineKeyboardButton>) -> Self {
        self.inline_keyboard.push(row);
        self
    }
}

/// One button of an inline keyboard. Exactly one optional field must be set.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InlineKeyboardButton {
    pub text: String,
    pub url: Option<String>,
    pub login_url: Option<LoginUrl>,
    /// 1-64 bytes sent back in a callback query.
    pub callback_data: Option<String>,
    pub switch_inline_query: Option<String>,
    pub switch_inline_query_current_chat: Option<String>,
    /// Must be the first button in the first row.
    pub callback_game: Option<CallbackGame>,
    /// Must be the first button in the first row.
    pub pay: Option<bool>,
}

impl InlineKeyboardButton {
    fn bare(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            url: None,
            login_url: None,
            callback_data: None,
            switch_inline_query: None,
            switch_inline_query_current_chat: None,
            callback_game: None,
            pay: None,
        }
    }

    pub fn url(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self { url: Some(url.into()), ..Self::bare(text) }
    }

    pub fn callback(text: impl Into<String>, data: impl Into<String>) -> Self {
        Self { callback_data: Some(data.into()), ..Self::bare(text) }
    }

    pub fn switch_inline(text: impl Into<String>, query: impl Into<String>) -> Self {
        Self { switch_inline_query: Some(query.into()), ..Self::bare(text) }
    }

    pub fn switch_inline_current_chat(text: impl Into<String>, query: impl Into<String>) -> Self {
        Self { switch_inline_query_current_chat: Some(query.into()), ..Self::bare(text) }
    }

    pub fn login(text: impl Into<String>, login_url: LoginUrl) -> Self {
        Self { login_url: Some(login_url), ..Self::bare(text) }
    }

    pub fn game(text: impl Into<String>) -> Self {
        Self { callback_game: Some(CallbackGame::default()), ..Self::bare(text) }
    }

    pub fn pay(text: impl Into<String>) -> Self {
        Self { pay: Some(true), ..Self::bare(text) }
    }
}

/// Parameters of an inline button used to log the user in via Telegram Login.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginUrl {
    pub url: String,
    pub forward_text: Option<String>,
    pub bot_username: Option<String>,
    pub request_write_access: Option<bool>,
}

/// An incoming callback query from an inline keyboard button.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CallbackQuery {
    pub id: String,
    pub from: User,
    /// Missing if the message is too old.
    pub message: Option<Message>,
    pub inline_message_id: Option<String>,
    pub chat_instance: String,
    pub data: Option<String>,
    pub game_short_name: Option<String>,
}

// ─── ReplyMarkup ──────────────────────────────────────────────────────────────

/// Any of the four reply markup kinds accepted by the `send*` methods.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReplyMarkup {
    InlineKeyboard(InlineKeyboardMarkup),
    ReplyKeyboard(ReplyKeyboardMarkup),
    Remove(ReplyKeyboardRemove),
    ForceReply(ForceReply),
}

impl From<InlineKeyboardMarkup> for ReplyMarkup {
    fn from(m: InlineKeyboardMarkup) -> Self { Self::InlineKeyboard(m) }
}

impl From<ReplyKeyboardMarkup> for ReplyMarkup {
    fn from(m: ReplyKeyboardMarkup) -> Self { Self::ReplyKeyboard(m) }
}

impl From<ReplyKeyboardRemove> for ReplyMarkup {
    fn from(m: ReplyKeyboardRemove) -> Self { Self::Remove(m) }
}

impl From<ForceReply> for ReplyMarkup {
    fn from(m: ForceReply) -> Self { Self::ForceReply(m) }
}

remote_types!(
    ReplyKeyboardMarkup,
    KeyboardButton,
    KeyboardButtonPollType,
    ReplyKeyboardRemove,
    ForceReply,
    InlineKeyboardMarkup,
    InlineKeyboardButton,
    LoginUrl,
    CallbackQuery,
    ReplyMarkup,
);
