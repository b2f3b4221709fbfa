use std::fmt;

use serde::{Deserialize, Serialize};

// ─── ChatId ───────────────────────────────────────────────────────────────────

/// Unique identifier for the target chat, or the username of the target
/// channel in the format `@channelusername`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChatId {
    Id(i64),
    Username(String),
}

impl From<i64> for ChatId {
    fn from(id: i64) -> Self { Self::Id(id) }
}

impl From<i32> for ChatId {
    fn from(id: i32) -> Self { Self::Id(i64::from(id)) }
}

impl From<String> for ChatId {
    fn from(username: String) -> Self { Self::Username(username) }
}

impl From<&str> for ChatId {
    fn from(username: &str) -> Self { Self::Username(username.to_owned()) }
}

impl fmt::Display for ChatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id)         => write!(f, "{id}"),
            Self::Username(name) => f.write_str(name),
        }
    }
}

// ─── ParseMode ────────────────────────────────────────────────────────────────

/// [Formatting options] for message text and captions.
///
/// [Formatting options]: https://core.telegram.org/bots/api#formatting-options
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParseMode {
    MarkdownV2,
    /// Legacy mode, kept for backward compatibility.
    Markdown,
    #[serde(rename = "HTML")]
    Html,
}

impl ParseMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::MarkdownV2 => "MarkdownV2",
            Self::Markdown   => "Markdown",
            Self::Html       => "HTML",
        }
    }
}

// ─── ChatAction ───────────────────────────────────────────────────────────────

/// Status shown to the other side by `sendChatAction`.
///
/// The status is cleared after 5 seconds or when the bot sends a message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatAction {
    Typing,
    UploadPhoto,
    RecordVideo,
    UploadVideo,
    RecordVoice,
    UploadVoice,
    UploadDocument,
    FindLocation,
    RecordVideoNote,
    UploadVideoNote,
}

impl ChatAction {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Typing          => "typing",
            Self::UploadPhoto     => "upload_photo",
            Self::RecordVideo     => "record_video",
            Self::UploadVideo     => "upload_video",
            Self::RecordVoice     => "record_voice",
            Self::UploadVoice     => "upload_voice",
            Self::UploadDocument  => "upload_document",
            Self::FindLocation    => "find_location",
            Self::RecordVideoNote => "record_video_note",
            Self::UploadVideoNote => "upload_video_note",
        }
    }
}
