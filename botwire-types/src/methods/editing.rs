use crate::types::{ChatId, InlineKeyboardMarkup, InputMedia, Message, MessageEntity, ParseMode, Poll};
use crate::wire::OrBool;

// Messages are addressed either by `chat_id` + `message_id`, or by
// `inline_message_id`. Inline messages come back as `true`.

remote_call! {
    EditMessageText("editMessageText") -> OrBool<Message> {
        required {
            text: String,
        }
        optional {
            chat_id: ChatId,
            message_id: i32,
            inline_message_id: String,
            parse_mode: ParseMode,
            entities: Vec<MessageEntity>,
            disable_web_page_preview: bool,
            reply_markup: InlineKeyboardMarkup,
        }
    }
}

remote_call! {
    EditMessageCaption("editMessageCaption") -> OrBool<Message> {
        required {}
        optional {
            chat_id: ChatId,
            message_id: i32,
            inline_message_id: String,
            caption: String,
            parse_mode: ParseMode,
            caption_entities: Vec<MessageEntity>,
            reply_markup: InlineKeyboardMarkup,
        }
    }
}

remote_call! {
    /// Replace the media of an animation, audio, document, photo or video message.
    ///
    /// A new local file is attached with [`EditMessageMedia::attach`].
    EditMessageMedia("editMessageMedia") -> OrBool<Message> {
        required {
            media: InputMedia,
        }
        optional {
            chat_id: ChatId,
            message_id: i32,
            inline_message_id: String,
            reply_markup: InlineKeyboardMarkup,
        }
        attachments attachments
    }
}

remote_call! {
    EditMessageReplyMarkup("editMessageReplyMarkup") -> OrBool<Message> {
        required {}
        optional {
            chat_id: ChatId,
            message_id: i32,
            inline_message_id: String,
            reply_markup: InlineKeyboardMarkup,
        }
    }
}

remote_call! {
    /// Move a live location message.
    EditMessageLiveLocation("editMessageLiveLocation") -> OrBool<Message> {
        required {
            latitude: f64,
            longitude: f64,
        }
        optional {
            chat_id: ChatId,
            message_id: i32,
            inline_message_id: String,
            horizontal_accuracy: f64,
            heading: i32,
            proximity_alert_radius: i32,
            reply_markup: InlineKeyboardMarkup,
        }
    }
}

remote_call! {
    /// Stop updating a live location message before `live_period` expires.
    StopMessageLiveLocation("stopMessageLiveLocation") -> OrBool<Message> {
        required {}
        optional {
            chat_id: ChatId,
            message_id: i32,
            inline_message_id: String,
            reply_markup: InlineKeyboardMarkup,
        }
    }
}

remote_call! {
    /// Stop a poll sent by the bot.
    StopPoll("stopPoll") -> Poll {
        required {
            chat_id: ChatId,
            message_id: i32,
        }
        optional {
            reply_markup: InlineKeyboardMarkup,
        }
    }
}

remote_call! {
    /// Delete a message, including service messages. Messages older than
    /// 48 hours can't be deleted.
    DeleteMessage("deleteMessage") -> bool {
        required {
            chat_id: ChatId,
            message_id: i32,
        }
        optional {}
    }
}
