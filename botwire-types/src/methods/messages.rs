use crate::params::InputFile;
use crate::types::{
    ChatAction, ChatId, File, InputMedia, Message, MessageEntity, MessageId, ParseMode,
    ReplyMarkup, UserProfilePhotos,
};

remote_call! {
    /// Send a text message.
    SendMessage("sendMessage") -> Message {
        required {
            chat_id: ChatId,
            /// 1-4096 characters after entities parsing.
            text: String,
        }
        optional {
            parse_mode: ParseMode,
            entities: Vec<MessageEntity>,
            disable_web_page_preview: bool,
            disable_notification: bool,
            reply_to_message_id: i32,
            allow_sending_without_reply: bool,
            reply_markup: ReplyMarkup,
        }
    }
}

remote_call! {
    /// Forward a message of any kind. Service messages can't be forwarded.
    ForwardMessage("forwardMessage") -> Message {
        required {
            chat_id: ChatId,
            from_chat_id: ChatId,
            message_id: i32,
        }
        optional {
            disable_notification: bool,
        }
    }
}

remote_call! {
    /// Copy a message without a link to the original.
    CopyMessage("copyMessage") -> MessageId {
        required {
            chat_id: ChatId,
            from_chat_id: ChatId,
            message_id: i32,
        }
        optional {
            /// Replaces the original caption when set.
            caption: String,
            parse_mode: ParseMode,
            caption_entities: Vec<MessageEntity>,
            disable_notification: bool,
            reply_to_message_id: i32,
            allow_sending_without_reply: bool,
            reply_markup: ReplyMarkup,
        }
    }
}

remote_call! {
    SendPhoto("sendPhoto") -> Message {
        required {
            chat_id: ChatId,
            photo: InputFile,
        }
        optional {
            caption: String,
            parse_mode: ParseMode,
            caption_entities: Vec<MessageEntity>,
            disable_notification: bool,
            reply_to_message_id: i32,
            allow_sending_without_reply: bool,
            reply_markup: ReplyMarkup,
        }
    }
}

remote_call! {
    /// Send an audio file to be displayed in the music player. `.mp3` or `.m4a`.
    SendAudio("sendAudio") -> Message {
        required {
            chat_id: ChatId,
            audio: InputFile,
        }
        optional {
            caption: String,
            parse_mode: ParseMode,
            caption_entities: Vec<MessageEntity>,
            duration: i32,
            performer: String,
            title: String,
            thumb: InputFile,
            disable_notification: bool,
            reply_to_message_id: i32,
            allow_sending_without_reply: bool,
            reply_markup: ReplyMarkup,
        }
    }
}

remote_call! {
    SendDocument("sendDocument") -> Message {
        required {
            chat_id: ChatId,
            document: InputFile,
        }
        optional {
            thumb: InputFile,
            caption: String,
            parse_mode: ParseMode,
            caption_entities: Vec<MessageEntity>,
            disable_content_type_detection: bool,
            disable_notification: bool,
            reply_to_message_id: i32,
            allow_sending_without_reply: bool,
            reply_markup: ReplyMarkup,
        }
    }
}

remote_call! {
    SendVideo("sendVideo") -> Message {
        required {
            chat_id: ChatId,
            video: InputFile,
        }
        optional {
            duration: i32,
            width: i32,
            height: i32,
            thumb: InputFile,
            caption: String,
            parse_mode: ParseMode,
            caption_entities: Vec<MessageEntity>,
            supports_streaming: bool,
            disable_notification: bool,
            reply_to_message_id: i32,
            allow_sending_without_reply: bool,
            reply_markup: ReplyMarkup,
        }
    }
}

remote_call! {
    /// Send a GIF or H.264/MPEG-4 AVC video without sound.
    SendAnimation("sendAnimation") -> Message {
        required {
            chat_id: ChatId,
            animation: InputFile,
        }
        optional {
            duration: i32,
            width: i32,
            height: i32,
            thumb: InputFile,
            caption: String,
            parse_mode: ParseMode,
            caption_entities: Vec<MessageEntity>,
            disable_notification: bool,
            reply_to_message_id: i32,
            allow_sending_without_reply: bool,
            reply_markup: ReplyMarkup,
        }
    }
}

remote_call! {
    /// Send audio to be displayed as a playable voice message. `.ogg` with OPUS.
    SendVoice("sendVoice") -> Message {
        required {
            chat_id: ChatId,
            voice: InputFile,
        }
        optional {
            caption: String,
            parse_mode: ParseMode,
            caption_entities: Vec<MessageEntity>,
            duration: i32,
            disable_notification: bool,
            reply_to_message_id: i32,
            allow_sending_without_reply: bool,
            reply_markup: ReplyMarkup,
        }
    }
}

remote_call! {
    /// Send a rounded square MPEG4 video of up to 1 minute.
    SendVideoNote("sendVideoNote") -> Message {
        required {
            chat_id: ChatId,
            video_note: InputFile,
        }
        optional {
            duration: i32,
            /// Video width and height, i.e. diameter of the video message.
            length: i32,
            thumb: InputFile,
            disable_notification: bool,
            reply_to_message_id: i32,
            allow_sending_without_reply: bool,
            reply_markup: ReplyMarkup,
        }
    }
}

remote_call! {
    /// Send a group of 2-10 photos, videos, documents or audios as an album.
    ///
    /// Local files are attached with [`SendMediaGroup::attach`] and
    /// referenced from `media` as `attach://<name>`.
    SendMediaGroup("sendMediaGroup") -> Vec<Message> {
        required {
            chat_id: ChatId,
            media: Vec<InputMedia>,
        }
        optional {
            disable_notification: bool,
            reply_to_message_id: i32,
            allow_sending_without_reply: bool,
        }
        attachments attachments
    }
}

remote_call! {
    SendLocation("sendLocation") -> Message {
        required {
            chat_id: ChatId,
            latitude: f64,
            longitude: f64,
        }
        optional {
            horizontal_accuracy: f64,
            /// 60-86400 seconds, for live locations.
            live_period: i32,
            heading: i32,
            proximity_alert_radius: i32,
            disable_notification: bool,
            reply_to_message_id: i32,
            allow_sending_without_reply: bool,
            reply_markup: ReplyMarkup,
        }
    }
}

remote_call! {
    SendVenue("sendVenue") -> Message {
        required {
            chat_id: ChatId,
            latitude: f64,
            longitude: f64,
            title: String,
            address: String,
        }
        optional {
            foursquare_id: String,
            foursquare_type: String,
            google_place_id: String,
            google_place_type: String,
            disable_notification: bool,
            reply_to_message_id: i32,
            allow_sending_without_reply: bool,
            reply_markup: ReplyMarkup,
        }
    }
}

remote_call! {
    SendContact("sendContact") -> Message {
        required {
            chat_id: ChatId,
            phone_number: String,
            first_name: String,
        }
        optional {
            last_name: String,
            vcard: String,
            disable_notification: bool,
            reply_to_message_id: i32,
            allow_sending_without_reply: bool,
            reply_markup: ReplyMarkup,
        }
    }
}

remote_call! {
    /// Send a native poll.
    SendPoll("sendPoll") -> Message {
        required {
            chat_id: ChatId,
            question: String,
            /// 2-10 answer options, 1-100 characters each.
            options: Vec<String>,
        }
        optional {
            is_anonymous: bool,
            /// `quiz` or `regular`.
            r#type: String,
            allows_multiple_answers: bool,
            correct_option_id: i32,
            explanation: String,
            explanation_parse_mode: ParseMode,
            explanation_entities: Vec<MessageEntity>,
            open_period: i32,
            close_date: i64,
            is_closed: bool,
            disable_notification: bool,
            reply_to_message_id: i32,
            allow_sending_without_reply: bool,
            reply_markup: ReplyMarkup,
        }
    }
}

remote_call! {
    /// Send an animated emoji that will display a random value.
    SendDice("sendDice") -> Message {
        required {
            chat_id: ChatId,
        }
        optional {
            emoji: String,
            disable_notification: bool,
            reply_to_message_id: i32,
            allow_sending_without_reply: bool,
            reply_markup: ReplyMarkup,
        }
    }
}

remote_call! {
    /// Tell the user that something is happening on the bot's side.
    SendChatAction("sendChatAction") -> bool {
        required {
            chat_id: ChatId,
            action: ChatAction,
        }
        optional {}
    }
}

remote_call! {
    GetUserProfilePhotos("getUserProfilePhotos") -> UserProfilePhotos {
        required {
            user_id: i64,
        }
        optional {
            offset: i32,
            /// 1-100, defaults to 100.
            limit: i32,
        }
    }
}

remote_call! {
    /// Basic info about a file and a path to download it. Files up to 20MB.
    GetFile("getFile") -> File {
        required {
            file_id: String,
        }
        optional {}
    }
}
