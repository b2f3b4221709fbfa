use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::{MessageEntity, ParseMode};

// ─── Incoming media ───────────────────────────────────────────────────────────

/// One size of a photo or a file / sticker thumbnail.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PhotoSize {
    /// Identifier used to download or reuse the file.
    pub file_id: String,
    /// Stable across bots and time; can't be used to download the file.
    pub file_unique_id: String,
    pub width: i32,
    pub height: i32,
    pub file_size: Option<i64>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Animation {
    pub file_id: String,
    pub file_unique_id: String,
    pub width: i32,
    pub height: i32,
    pub duration: i32,
    pub thumb: Option<PhotoSize>,
    pub file_name: Option<String>,
    pub mime_type: Option<String>,
    pub file_size: Option<i64>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Audio {
    pub file_id: String,
    pub file_unique_id: String,
    pub duration: i32,
    pub performer: Option<String>,
    pub title: Option<String>,
    pub file_name: Option<String>,
    pub mime_type: Option<String>,
    pub file_size: Option<i64>,
    /// Thumbnail of the album cover.
    pub thumb: Option<PhotoSize>,
}

/// A general file, as opposed to photos, voice messages and audio files.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub file_id: String,
    pub file_unique_id: String,
    pub thumb: Option<PhotoSize>,
    pub file_name: Option<String>,
    pub mime_type: Option<String>,
    pub file_size: Option<i64>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Video {
    pub file_id: String,
    pub file_unique_id: String,
    pub width: i32,
    pub height: i32,
    pub duration: i32,
    pub thumb: Option<PhotoSize>,
    pub file_name: Option<String>,
    pub mime_type: Option<String>,
    pub file_size: Option<i64>,
}

/// A round video message.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VideoNote {
    pub file_id: String,
    pub file_unique_id: String,
    /// Width and height (diameter) of the video.
    pub length: i32,
    pub duration: i32,
    pub thumb: Option<PhotoSize>,
    pub file_size: Option<i64>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Voice {
    pub file_id: String,
    pub file_unique_id: String,
    pub duration: i32,
    pub mime_type: Option<String>,
    pub file_size: Option<i64>,
}

/// A user's profile pictures.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserProfilePhotos {
    /// Total number of profile pictures the target user has.
    pub total_count: i32,
    /// Up to 4 sizes for each photo.
    pub photos: Vec<Vec<PhotoSize>>,
}

/// A file ready to be downloaded.
///
/// The link is guaranteed to be valid for at least one hour; call `getFile`
/// again once it expires.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct File {
    pub file_id: String,
    pub file_unique_id: String,
    pub file_size: Option<i64>,
    /// Use `https://api.telegram.org/file/bot<token>/<file_path>` to fetch the file.
    pub file_path: Option<String>,
}

// ─── InputMedia ───────────────────────────────────────────────────────────────

/// Content of a media message to be sent.
///
/// `media` (and `thumb`) is a file id, an HTTP URL, or `attach://<name>` for
/// a file uploaded under `<name>` in the same request.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputMedia {
    Photo(InputMediaPhoto),
    Video(InputMediaVideo),
    Animation(InputMediaAnimation),
    Audio(InputMediaAudio),
    Document(InputMediaDocument),
}

impl InputMedia {
    /// The `media` reference of whichever variant this is.
    pub fn media(&self) -> &str {
        match self {
            Self::Photo(m)     => &m.media,
            Self::Video(m)     => &m.media,
            Self::Animation(m) => &m.media,
            Self::Audio(m)     => &m.media,
            Self::Document(m)  => &m.media,
        }
    }
}

/// `attach://<name>`, the reference form for a file uploaded as `<name>`.
pub fn attach_ref(name: &str) -> String {
    format!("attach://{name}")
}

#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InputMediaPhoto {
    pub media: String,
    pub caption: Option<String>,
    pub parse_mode: Option<ParseMode>,
    pub caption_entities: Option<Vec<MessageEntity>>,
}

impl InputMediaPhoto {
    pub fn new(media: impl Into<String>) -> Self {
        Self { media: media.into(), caption: None, parse_mode: None, caption_entities: None }
    }

    pub fn caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    pub fn parse_mode(mut self, mode: ParseMode) -> Self {
        self.parse_mode = Some(mode);
        self
    }
}

#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InputMediaVideo {
    pub media: String,
    pub thumb: Option<String>,
    pub caption: Option<String>,
    pub parse_mode: Option<ParseMode>,
    pub caption_entities: Option<Vec<MessageEntity>>,
    pub width: Option<i32>,
    pub height: Option<i32>,
    pub duration: Option<i32>,
    pub supports_streaming: Option<bool>,
}

impl InputMediaVideo {
    pub fn new(media: impl Into<String>) -> Self {
        Self {
            media: media.into(),
            thumb: None,
            caption: None,
            parse_mode: None,
            caption_entities: None,
            width: None,
            height: None,
            duration: None,
            supports_streaming: None,
        }
    }

    pub fn caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }
}

#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InputMediaAnimation {
    pub media: String,
    pub thumb: Option<String>,
    pub caption: Option<String>,
    pub parse_mode: Option<ParseMode>,
    pub caption_entities: Option<Vec<MessageEntity>>,
    pub width: Option<i32>,
    pub height: Option<i32>,
    pub duration: Option<i32>,
}

impl InputMediaAnimation {
    pub fn new(media: impl Into<String>) -> Self {
        Self {
            media: media.into(),
            thumb: None,
            caption: None,
            parse_mode: None,
            caption_entities: None,
            width: None,
            height: None,
            duration: None,
        }
    }
}

#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InputMediaAudio {
    pub media: String,
    pub thumb: Option<String>,
    pub caption: Option<String>,
    pub parse_mode: Option<ParseMode>,
    pub caption_entities: Option<Vec<MessageEntity>>,
    pub duration: Option<i32>,
    pub performer: Option<String>,
    pub title: Option<String>,
}

impl InputMediaAudio {
    pub fn new(media: impl Into<String>) -> Self {
        Self {
            media: media.into(),
            thumb: None,
            caption: None,
            parse_mode: None,
            caption_entities: None,
            duration: None,
            performer: None,
            title: None,
        }
    }
}

#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InputMediaDocument {
    pub media: String,
    pub thumb: Option<String>,
    pub caption: Option<String>,
    pub parse_mode: Option<ParseMode>,
    pub caption_entities: Option<Vec<MessageEntity>>,
    /// Always `true` when the document is sent as part of an album.
    pub disable_content_type_detection: Option<bool>,
}

impl InputMediaDocument {
    pub fn new(media: impl Into<String>) -> Self {
        Self {
            media: media.into(),
            thumb: None,
            caption: None,
            parse_mode: None,
            caption_entities: None,
            disable_content_type_detection: None,
        }
    }
}

impl From<InputMediaPhoto> for InputMedia {
    fn from(m: InputMediaPhoto) -> Self { Self::Photo(m) }
}

impl From<InputMediaVideo> for InputMedia {
    fn from(m: InputMediaVideo) -> Self { Self::Video(m) }
}

impl From<InputMediaAnimation> for InputMedia {
    fn from(m: InputMediaAnimation) -> Self { Self::Animation(m) }
}

impl From<InputMediaAudio> for InputMedia {
    fn from(m: InputMediaAudio) -> Self { Self::Audio(m) }
}

impl From<InputMediaDocument> for InputMedia {
    fn from(m: InputMediaDocument) -> Self { Self::Document(m) }
}

remote_types!(
    PhotoSize,
    Animation,
    Audio,
    Document,
    Video,
    VideoNote,
    Voice,
    UserProfilePhotos,
    File,
    InputMedia,
    InputMediaPhoto,
    InputMediaVideo,
    InputMediaAnimation,
    InputMediaAudio,
    InputMediaDocument,
);
