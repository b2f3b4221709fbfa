use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::{Animation, MessageEntity, PhotoSize, User};

/// A game. Use BotFather to create and edit games.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub title: String,
    pub description: String,
    pub photo: Vec<PhotoSize>,
    /// Set when the bot edits the game message with `setGameScore`, or
    /// manually with `editMessageText`.
    pub text: Option<String>,
    pub text_entities: Option<Vec<MessageEntity>>,
    pub animation: Option<Animation>,
}

/// Placeholder; holds no information.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CallbackGame {}

/// One row of a game's high scores table.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameHighScore {
    pub position: i32,
    pub user: User,
    pub score: i32,
}

remote_types!(Game, CallbackGame, GameHighScore);
