use crate::params::InputFile;
use crate::types::{ChatId, File, MaskPosition, Message, ReplyMarkup, StickerSet};

remote_call! {
    /// Send a static `.webp` or animated `.tgs` sticker.
    SendSticker("sendSticker") -> Message {
        required {
            chat_id: ChatId,
            sticker: InputFile,
        }
        optional {
            disable_notification: bool,
            reply_to_message_id: i32,
            allow_sending_without_reply: bool,
            reply_markup: ReplyMarkup,
        }
    }
}

remote_call! {
    GetStickerSet("getStickerSet") -> StickerSet {
        required {
            name: String,
        }
        optional {}
    }
}

remote_call! {
    /// Upload a `.png` for later use in set-building methods.
    UploadStickerFile("uploadStickerFile") -> File {
        required {
            user_id: i64,
            png_sticker: InputFile,
        }
        optional {}
    }
}

remote_call! {
    /// Create a sticker set owned by a user. Exactly one of `png_sticker`
    /// or `tgs_sticker` must be set.
    CreateNewStickerSet("createNewStickerSet") -> bool {
        required {
            user_id: i64,
            /// Must end in `_by_<bot_username>`.
            name: String,
            title: String,
            emojis: String,
        }
        optional {
            png_sticker: InputFile,
            tgs_sticker: InputFile,
            contains_masks: bool,
            mask_position: MaskPosition,
        }
    }
}

remote_call! {
    AddStickerToSet("addStickerToSet") -> bool {
        required {
            user_id: i64,
            name: String,
            emojis: String,
        }
        optional {
            png_sticker: InputFile,
            tgs_sticker: InputFile,
            mask_position: MaskPosition,
        }
    }
}

remote_call! {
    SetStickerPositionInSet("setStickerPositionInSet") -> bool {
        required {
            sticker: String,
            /// Zero-based.
            position: i32,
        }
        optional {}
    }
}

remote_call! {
    DeleteStickerFromSet("deleteStickerFromSet") -> bool {
        required {
            sticker: String,
        }
        optional {}
    }
}

remote_call! {
    SetStickerSetThumb("setStickerSetThumb") -> bool {
        required {
            name: String,
            user_id: i64,
        }
        optional {
            thumb: InputFile,
        }
    }
}
