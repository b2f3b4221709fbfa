use crate::types::{GameHighScore, InlineKeyboardMarkup, Message};
use crate::wire::OrBool;

remote_call! {
    SendGame("sendGame") -> Message {
        required {
            chat_id: i64,
            /// Short name of the game, set up via BotFather.
            game_short_name: String,
        }
        optional {
            disable_notification: bool,
            reply_to_message_id: i32,
            allow_sending_without_reply: bool,
            reply_markup: InlineKeyboardMarkup,
        }
    }
}

remote_call! {
    /// Set a user's score. Returns `true` for inline messages.
    SetGameScore("setGameScore") -> OrBool<Message> {
        required {
            user_id: i64,
            /// Non-negative.
            score: i32,
        }
        optional {
            /// Allow the score to decrease.
            force: bool,
            disable_edit_message: bool,
            chat_id: i64,
            message_id: i32,
            inline_message_id: String,
        }
    }
}

remote_call! {
    /// High scores for the target user and several of their neighbours.
    GetGameHighScores("getGameHighScores") -> Vec<GameHighScore> {
        required {
            user_id: i64,
        }
        optional {
            chat_id: i64,
            message_id: i32,
            inline_message_id: String,
        }
    }
}
