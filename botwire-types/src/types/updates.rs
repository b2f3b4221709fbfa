use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::{
    CallbackQuery, ChatMemberUpdated, ChosenInlineResult, InlineQuery, Message, Poll, PollAnswer,
    PreCheckoutQuery, ShippingQuery,
};

/// An incoming update.
///
/// At most one of the optional payloads is present in any given update.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Update {
    /// The update's unique identifier. Identifiers increase sequentially,
    /// which is what long polling relies on for its `offset`.
    pub update_id: i64,
    /// New incoming message of any kind: text, photo, sticker, etc.
    pub message: Option<Message>,
    /// New version of a message that is known to the bot and was edited.
    pub edited_message: Option<Message>,
    /// New incoming channel post of any kind.
    pub channel_post: Option<Message>,
    /// New version of a channel post that is known to the bot and was edited.
    pub edited_channel_post: Option<Message>,
    pub inline_query: Option<InlineQuery>,
    pub chosen_inline_result: Option<ChosenInlineResult>,
    pub callback_query: Option<CallbackQuery>,
    /// Only for invoices with flexible price.
    pub shipping_query: Option<ShippingQuery>,
    pub pre_checkout_query: Option<PreCheckoutQuery>,
    /// Only updates about stopped polls and polls sent by the bot.
    pub poll: Option<Poll>,
    pub poll_answer: Option<PollAnswer>,
    /// The bot's own chat member status was updated in a chat.
    pub my_chat_member: Option<ChatMemberUpdated>,
    /// A chat member's status was updated. Must be listed in `allowed_updates`.
    pub chat_member: Option<ChatMemberUpdated>,
}

/// Borrowed view of the single payload an [`Update`] carries.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum UpdateKind<'a> {
    Message(&'a Message),
    EditedMessage(&'a Message),
    ChannelPost(&'a Message),
    EditedChannelPost(&'a Message),
    InlineQuery(&'a InlineQuery),
    ChosenInlineResult(&'a ChosenInlineResult),
    CallbackQuery(&'a CallbackQuery),
    ShippingQuery(&'a ShippingQuery),
    PreCheckoutQuery(&'a PreCheckoutQuery),
    Poll(&'a Poll),
    PollAnswer(&'a PollAnswer),
    MyChatMember(&'a ChatMemberUpdated),
    ChatMember(&'a ChatMemberUpdated),
    /// A payload this version of the types does not know about.
    Unknown,
}

impl Update {
    /// Classify the update by its populated payload.
    pub fn kind(&self) -> UpdateKind<'_> {
        if let Some(m) = &self.message { return UpdateKind::Message(m); }
        if let Some(m) = &self.edited_message { return UpdateKind::EditedMessage(m); }
        if let Some(m) = &self.channel_post { return UpdateKind::ChannelPost(m); }
        if let Some(m) = &self.edited_channel_post { return UpdateKind::EditedChannelPost(m); }
        if let Some(q) = &self.inline_query { return UpdateKind::InlineQuery(q); }
        if let Some(r) = &self.chosen_inline_result { return UpdateKind::ChosenInlineResult(r); }
        if let Some(q) = &self.callback_query { return UpdateKind::CallbackQuery(q); }
        if let Some(q) = &self.shipping_query { return UpdateKind::ShippingQuery(q); }
        if let Some(q) = &self.pre_checkout_query { return UpdateKind::PreCheckoutQuery(q); }
        if let Some(p) = &self.poll { return UpdateKind::Poll(p); }
        if let Some(a) = &self.poll_answer { return UpdateKind::PollAnswer(a); }
        if let Some(u) = &self.my_chat_member { return UpdateKind::MyChatMember(u); }
        if let Some(u) = &self.chat_member { return UpdateKind::ChatMember(u); }
        UpdateKind::Unknown
    }

    /// The message carried by this update, for any of the four message kinds.
    pub fn message(&self) -> Option<&Message> {
        self.message
            .as_ref()
            .or(self.edited_message.as_ref())
            .or(self.channel_post.as_ref())
            .or(self.edited_channel_post.as_ref())
    }
}

/// Current status of a webhook.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WebhookInfo {
    /// Webhook URL, may be empty if webhook is not set up.
    pub url: String,
    pub has_custom_certificate: bool,
    pub pending_update_count: i32,
    pub ip_address: Option<String>,
    /// Unix time of the most recent delivery error.
    pub last_error_date: Option<i64>,
    pub last_error_message: Option<String>,
    pub max_connections: Option<i32>,
    pub allowed_updates: Option<Vec<String>>,
}

remote_types!(Update, WebhookInfo);
