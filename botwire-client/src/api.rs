//! One convenience method per Bot API endpoint.
//!
//! Each method takes the endpoint's required parameters and forwards to
//! [`Client::invoke`]. For optional parameters, build the request struct
//! from [`botwire_types::methods`] and invoke it directly:
//!
//! ```rust,no_run
//! use botwire_client::Client;
//! use botwire_types::methods::SendMessage;
//! use botwire_types::types::ParseMode;
//!
//! # async fn f(client: Client) -> Result<(), botwire_client::InvocationError> {
//! client.send_message(42, "plain").await?;
//! client.invoke(&SendMessage::new(42, "<b>bold</b>").parse_mode(ParseMode::Html)).await?;
//! # Ok(()) }
//! ```

use botwire_types::OrBool;
use botwire_types::methods::*;
use botwire_types::params::InputFile;
use botwire_types::types::{
    BotCommand, Chat, ChatAction, ChatId, ChatInviteLink, ChatMember, ChatPermissions, File,
    GameHighScore, InlineQueryResult, InputMedia, LabeledPrice, Message, MessageId,
    PassportElementError, Poll, StickerSet, Update, User, UserProfilePhotos, WebhookInfo,
};

use crate::{Client, InvocationError};

impl Client {
    // ── Updates & webhooks ───────────────────────────────────────────────────────

    /// One raw `getUpdates` call with default options. See [`crate::Updates`] for a polling loop.
    pub async fn get_updates(&self) -> Result<Vec<Update>, InvocationError> {
        self.invoke(&GetUpdates::new()).await
    }

    /// Register `url` for outgoing webhook updates.
    pub async fn set_webhook(&self, url: impl Into<String>) -> Result<bool, InvocationError> {
        self.invoke(&SetWebhook::new(url)).await
    }

    pub async fn delete_webhook(&self) -> Result<bool, InvocationError> {
        self.invoke(&DeleteWebhook::new()).await
    }

    pub async fn get_webhook_info(&self) -> Result<WebhookInfo, InvocationError> {
        self.invoke(&GetWebhookInfo::new()).await
    }

    // ── Bot & chat administration ────────────────────────────────────────────────

    /// A simple method for testing your bot's token.
    pub async fn get_me(&self) -> Result<User, InvocationError> {
        self.invoke(&GetMe::new()).await
    }

    /// Log out from the cloud Bot API server before moving to a local one.
    pub async fn log_out(&self) -> Result<bool, InvocationError> {
        self.invoke(&LogOut::new()).await
    }

    pub async fn close(&self) -> Result<bool, InvocationError> {
        self.invoke(&Close::new()).await
    }

    pub async fn set_my_commands(&self, commands: Vec<BotCommand>) -> Result<bool, InvocationError> {
        self.invoke(&SetMyCommands::new(commands)).await
    }

    pub async fn get_my_commands(&self) -> Result<Vec<BotCommand>, InvocationError> {
        self.invoke(&GetMyCommands::new()).await
    }

    pub async fn answer_callback_query(&self, callback_query_id: impl Into<String>) -> Result<bool, InvocationError> {
        self.invoke(&AnswerCallbackQuery::new(callback_query_id)).await
    }

    /// Ban `user_id` from the chat.
    pub async fn kick_chat_member(&self, chat_id: impl Into<ChatId>, user_id: i64) -> Result<bool, InvocationError> {
        self.invoke(&KickChatMember::new(chat_id, user_id)).await
    }

    pub async fn unban_chat_member(&self, chat_id: impl Into<ChatId>, user_id: i64) -> Result<bool, InvocationError> {
        self.invoke(&UnbanChatMember::new(chat_id, user_id)).await
    }

    pub async fn restrict_chat_member(
        &self,
        chat_id: impl Into<ChatId>,
        user_id: i64,
        permissions: impl Into<ChatPermissions>,
    ) -> Result<bool, InvocationError> {
        self.invoke(&RestrictChatMember::new(chat_id, user_id, permissions)).await
    }

    pub async fn promote_chat_member(&self, chat_id: impl Into<ChatId>, user_id: i64) -> Result<bool, InvocationError> {
        self.invoke(&PromoteChatMember::new(chat_id, user_id)).await
    }

    pub async fn set_chat_administrator_custom_title(
        &self,
        chat_id: impl Into<ChatId>,
        user_id: i64,
        custom_title: impl Into<String>,
    ) -> Result<bool, InvocationError> {
        self.invoke(&SetChatAdministratorCustomTitle::new(chat_id, user_id, custom_title)).await
    }

    pub async fn set_chat_permissions(
        &self,
        chat_id: impl Into<ChatId>,
        permissions: impl Into<ChatPermissions>,
    ) -> Result<bool, InvocationError> {
        self.invoke(&SetChatPermissions::new(chat_id, permissions)).await
    }

    pub async fn get_chat_administrators(&self, chat_id: impl Into<ChatId>) -> Result<Vec<ChatMember>, InvocationError> {
        self.invoke(&GetChatAdministrators::new(chat_id)).await
    }

    pub async fn get_chat_members_count(&self, chat_id: impl Into<ChatId>) -> Result<i32, InvocationError> {
        self.invoke(&GetChatMembersCount::new(chat_id)).await
    }

    pub async fn get_chat_member(&self, chat_id: impl Into<ChatId>, user_id: i64) -> Result<ChatMember, InvocationError> {
        self.invoke(&GetChatMember::new(chat_id, user_id)).await
    }

    pub async fn export_chat_invite_link(&self, chat_id: impl Into<ChatId>) -> Result<String, InvocationError> {
        self.invoke(&ExportChatInviteLink::new(chat_id)).await
    }

    pub async fn create_chat_invite_link(&self, chat_id: impl Into<ChatId>) -> Result<ChatInviteLink, InvocationError> {
        self.invoke(&CreateChatInviteLink::new(chat_id)).await
    }

    pub async fn edit_chat_invite_link(&self, chat_id: impl Into<ChatId>, invite_link: impl Into<String>) -> Result<ChatInviteLink, InvocationError> {
        self.invoke(&EditChatInviteLink::new(chat_id, invite_link)).await
    }

    pub async fn revoke_chat_invite_link(&self, chat_id: impl Into<ChatId>, invite_link: impl Into<String>) -> Result<ChatInviteLink, InvocationError> {
        self.invoke(&RevokeChatInviteLink::new(chat_id, invite_link)).await
    }

    pub async fn set_chat_photo(&self, chat_id: impl Into<ChatId>, photo: impl Into<InputFile>) -> Result<bool, InvocationError> {
        self.invoke(&SetChatPhoto::new(chat_id, photo)).await
    }

    pub async fn delete_chat_photo(&self, chat_id: impl Into<ChatId>) -> Result<bool, InvocationError> {
        self.invoke(&DeleteChatPhoto::new(chat_id)).await
    }

    pub async fn set_chat_title(&self, chat_id: impl Into<ChatId>, title: impl Into<String>) -> Result<bool, InvocationError> {
        self.invoke(&SetChatTitle::new(chat_id, title)).await
    }

    pub async fn set_chat_description(&self, chat_id: impl Into<ChatId>) -> Result<bool, InvocationError> {
        self.invoke(&SetChatDescription::new(chat_id)).await
    }

    pub async fn pin_chat_message(&self, chat_id: impl Into<ChatId>, message_id: i32) -> Result<bool, InvocationError> {
        self.invoke(&PinChatMessage::new(chat_id, message_id)).await
    }

    pub async fn unpin_chat_message(&self, chat_id: impl Into<ChatId>) -> Result<bool, InvocationError> {
        self.invoke(&UnpinChatMessage::new(chat_id)).await
    }

    pub async fn unpin_all_chat_messages(&self, chat_id: impl Into<ChatId>) -> Result<bool, InvocationError> {
        self.invoke(&UnpinAllChatMessages::new(chat_id)).await
    }

    pub async fn leave_chat(&self, chat_id: impl Into<ChatId>) -> Result<bool, InvocationError> {
        self.invoke(&LeaveChat::new(chat_id)).await
    }

    pub async fn get_chat(&self, chat_id: impl Into<ChatId>) -> Result<Chat, InvocationError> {
        self.invoke(&GetChat::new(chat_id)).await
    }

    pub async fn set_chat_sticker_set(
        &self,
        chat_id: impl Into<ChatId>,
        sticker_set_name: impl Into<String>,
    ) -> Result<bool, InvocationError> {
        self.invoke(&SetChatStickerSet::new(chat_id, sticker_set_name)).await
    }

    pub async fn delete_chat_sticker_set(&self, chat_id: impl Into<ChatId>) -> Result<bool, InvocationError> {
        self.invoke(&DeleteChatStickerSet::new(chat_id)).await
    }

    // ── Sending messages ─────────────────────────────────────────────────────────

    /// Send a plain text message. Use [`SendMessage`] with [`Client::invoke`] for formatting and markup.
    pub async fn send_message(&self, chat_id: impl Into<ChatId>, text: impl Into<String>) -> Result<Message, InvocationError> {
        self.invoke(&SendMessage::new(chat_id, text)).await
    }

    pub async fn forward_message(
        &self,
        chat_id: impl Into<ChatId>,
        from_chat_id: impl Into<ChatId>,
        message_id: i32,
    ) -> Result<Message, InvocationError> {
        self.invoke(&ForwardMessage::new(chat_id, from_chat_id, message_id)).await
    }

    pub async fn copy_message(
        &self,
        chat_id: impl Into<ChatId>,
        from_chat_id: impl Into<ChatId>,
        message_id: i32,
    ) -> Result<MessageId, InvocationError> {
        self.invoke(&CopyMessage::new(chat_id, from_chat_id, message_id)).await
    }

    pub async fn send_photo(&self, chat_id: impl Into<ChatId>, photo: impl Into<InputFile>) -> Result<Message, InvocationError> {
        self.invoke(&SendPhoto::new(chat_id, photo)).await
    }

    pub async fn send_audio(&self, chat_id: impl Into<ChatId>, audio: impl Into<InputFile>) -> Result<Message, InvocationError> {
        self.invoke(&SendAudio::new(chat_id, audio)).await
    }

    pub async fn send_document(&self, chat_id: impl Into<ChatId>, document: impl Into<InputFile>) -> Result<Message, InvocationError> {
        self.invoke(&SendDocument::new(chat_id, document)).await
    }

    pub async fn send_video(&self, chat_id: impl Into<ChatId>, video: impl Into<InputFile>) -> Result<Message, InvocationError> {
        self.invoke(&SendVideo::new(chat_id, video)).await
    }

    pub async fn send_animation(&self, chat_id: impl Into<ChatId>, animation: impl Into<InputFile>) -> Result<Message, InvocationError> {
        self.invoke(&SendAnimation::new(chat_id, animation)).await
    }

    pub async fn send_voice(&self, chat_id: impl Into<ChatId>, voice: impl Into<InputFile>) -> Result<Message, InvocationError> {
        self.invoke(&SendVoice::new(chat_id, voice)).await
    }

    pub async fn send_video_note(&self, chat_id: impl Into<ChatId>, video_note: impl Into<InputFile>) -> Result<Message, InvocationError> {
        self.invoke(&SendVideoNote::new(chat_id, video_note)).await
    }

    /// Send 2-10 photos, videos, documents or audios as an album.
    pub async fn send_media_group(&self, chat_id: impl Into<ChatId>, media: Vec<InputMedia>) -> Result<Vec<Message>, InvocationError> {
        self.invoke(&SendMediaGroup::new(chat_id, media)).await
    }

    pub async fn send_location(&self, chat_id: impl Into<ChatId>, latitude: f64, longitude: f64) -> Result<Message, InvocationError> {
        self.invoke(&SendLocation::new(chat_id, latitude, longitude)).await
    }

    pub async fn send_venue(
        &self,
        chat_id: impl Into<ChatId>,
        latitude: f64,
        longitude: f64,
        title: impl Into<String>,
        address: impl Into<String>,
    ) -> Result<Message, InvocationError> {
        self.invoke(&SendVenue::new(chat_id, latitude, longitude, title, address)).await
    }

    pub async fn send_contact(
        &self,
        chat_id: impl Into<ChatId>,
        phone_number: impl Into<String>,
        first_name: impl Into<String>,
    ) -> Result<Message, InvocationError> {
        self.invoke(&SendContact::new(chat_id, phone_number, first_name)).await
    }

    pub async fn send_poll(
        &self,
        chat_id: impl Into<ChatId>,
        question: impl Into<String>,
        options: Vec<String>,
    ) -> Result<Message, InvocationError> {
        self.invoke(&SendPoll::new(chat_id, question, options)).await
    }

    pub async fn send_dice(&self, chat_id: impl Into<ChatId>) -> Result<Message, InvocationError> {
        self.invoke(&SendDice::new(chat_id)).await
    }

    /// One-off chat action. [`Client::typing`] keeps it alive instead.
    pub async fn send_chat_action(&self, chat_id: impl Into<ChatId>, action: impl Into<ChatAction>) -> Result<bool, InvocationError> {
        self.invoke(&SendChatAction::new(chat_id, action)).await
    }

    pub async fn get_user_profile_photos(&self, user_id: i64) -> Result<UserProfilePhotos, InvocationError> {
        self.invoke(&GetUserProfilePhotos::new(user_id)).await
    }

    /// Resolve a `file_id` to a downloadable [`File`].
    pub async fn get_file(&self, file_id: impl Into<String>) -> Result<File, InvocationError> {
        self.invoke(&GetFile::new(file_id)).await
    }

    // ── Editing messages ─────────────────────────────────────────────────────────

    /// Edit an inline message's text. `Bool(true)` is returned for inline messages; set `chat_id` and `message_id` on [`EditMessageText`] to edit a chat message.
    pub async fn edit_message_text(&self, text: impl Into<String>) -> Result<OrBool<Message>, InvocationError> {
        self.invoke(&EditMessageText::new(text)).await
    }

    pub async fn edit_message_caption(&self) -> Result<OrBool<Message>, InvocationError> {
        self.invoke(&EditMessageCaption::new()).await
    }

    pub async fn edit_message_media(&self, media: impl Into<InputMedia>) -> Result<OrBool<Message>, InvocationError> {
        self.invoke(&EditMessageMedia::new(media)).await
    }

    pub async fn edit_message_reply_markup(&self) -> Result<OrBool<Message>, InvocationError> {
        self.invoke(&EditMessageReplyMarkup::new()).await
    }

    pub async fn edit_message_live_location(&self, latitude: f64, longitude: f64) -> Result<OrBool<Message>, InvocationError> {
        self.invoke(&EditMessageLiveLocation::new(latitude, longitude)).await
    }

    pub async fn stop_message_live_location(&self) -> Result<OrBool<Message>, InvocationError> {
        self.invoke(&StopMessageLiveLocation::new()).await
    }

    pub async fn stop_poll(&self, chat_id: impl Into<ChatId>, message_id: i32) -> Result<Poll, InvocationError> {
        self.invoke(&StopPoll::new(chat_id, message_id)).await
    }

    pub async fn delete_message(&self, chat_id: impl Into<ChatId>, message_id: i32) -> Result<bool, InvocationError> {
        self.invoke(&DeleteMessage::new(chat_id, message_id)).await
    }

    // ── Stickers ─────────────────────────────────────────────────────────────────

    pub async fn send_sticker(&self, chat_id: impl Into<ChatId>, sticker: impl Into<InputFile>) -> Result<Message, InvocationError> {
        self.invoke(&SendSticker::new(chat_id, sticker)).await
    }

    pub async fn get_sticker_set(&self, name: impl Into<String>) -> Result<StickerSet, InvocationError> {
        self.invoke(&GetStickerSet::new(name)).await
    }

    pub async fn upload_sticker_file(&self, user_id: i64, png_sticker: impl Into<InputFile>) -> Result<File, InvocationError> {
        self.invoke(&UploadStickerFile::new(user_id, png_sticker)).await
    }

    pub async fn create_new_sticker_set(
        &self,
        user_id: i64,
        name: impl Into<String>,
        title: impl Into<String>,
        emojis: impl Into<String>,
    ) -> Result<bool, InvocationError> {
        self.invoke(&CreateNewStickerSet::new(user_id, name, title, emojis)).await
    }

    pub async fn add_sticker_to_set(
        &self,
        user_id: i64,
        name: impl Into<String>,
        emojis: impl Into<String>,
    ) -> Result<bool, InvocationError> {
        self.invoke(&AddStickerToSet::new(user_id, name, emojis)).await
    }

    pub async fn set_sticker_position_in_set(&self, sticker: impl Into<String>, position: i32) -> Result<bool, InvocationError> {
        self.invoke(&SetStickerPositionInSet::new(sticker, position)).await
    }

    pub async fn delete_sticker_from_set(&self, sticker: impl Into<String>) -> Result<bool, InvocationError> {
        self.invoke(&DeleteStickerFromSet::new(sticker)).await
    }

    pub async fn set_sticker_set_thumb(&self, name: impl Into<String>, user_id: i64) -> Result<bool, InvocationError> {
        self.invoke(&SetStickerSetThumb::new(name, user_id)).await
    }

    // ── Inline mode ──────────────────────────────────────────────────────────────

    pub async fn answer_inline_query(
        &self,
        inline_query_id: impl Into<String>,
        results: Vec<InlineQueryResult>,
    ) -> Result<bool, InvocationError> {
        self.invoke(&AnswerInlineQuery::new(inline_query_id, results)).await
    }

    // ── Payments ─────────────────────────────────────────────────────────────────

    pub async fn send_invoice(
        &self,
        chat_id: impl Into<ChatId>,
        title: impl Into<String>,
        description: impl Into<String>,
        payload: impl Into<String>,
        provider_token: impl Into<String>,
        currency: impl Into<String>,
        prices: Vec<LabeledPrice>,
    ) -> Result<Message, InvocationError> {
        self.invoke(&SendInvoice::new(chat_id, title, description, payload, provider_token, currency, prices)).await
    }

    pub async fn answer_shipping_query(&self, shipping_query_id: impl Into<String>, ok: bool) -> Result<bool, InvocationError> {
        self.invoke(&AnswerShippingQuery::new(shipping_query_id, ok)).await
    }

    pub async fn answer_pre_checkout_query(&self, pre_checkout_query_id: impl Into<String>, ok: bool) -> Result<bool, InvocationError> {
        self.invoke(&AnswerPreCheckoutQuery::new(pre_checkout_query_id, ok)).await
    }

    // ── Telegram Passport ────────────────────────────────────────────────────────

    pub async fn set_passport_data_errors(&self, user_id: i64, errors: Vec<PassportElementError>) -> Result<bool, InvocationError> {
        self.invoke(&SetPassportDataErrors::new(user_id, errors)).await
    }

    // ── Games ────────────────────────────────────────────────────────────────────

    pub async fn send_game(&self, chat_id: i64, game_short_name: impl Into<String>) -> Result<Message, InvocationError> {
        self.invoke(&SendGame::new(chat_id, game_short_name)).await
    }

    /// Set a user's score in an inline game message.
    pub async fn set_game_score(&self, user_id: i64, score: i32) -> Result<OrBool<Message>, InvocationError> {
        self.invoke(&SetGameScore::new(user_id, score)).await
    }

    pub async fn get_game_high_scores(&self, user_id: i64) -> Result<Vec<GameHighScore>, InvocationError> {
        self.invoke(&GetGameHighScores::new(user_id)).await
    }
}
