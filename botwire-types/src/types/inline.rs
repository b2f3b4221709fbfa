use serde::de::Error as _;
use serde::ser::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use serde_with::skip_serializing_none;

use super::{InlineKeyboardMarkup, LabeledPrice, Location, MessageEntity, ParseMode, User};

// ─── Incoming ─────────────────────────────────────────────────────────────────

/// An incoming inline query.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InlineQuery {
    pub id: String,
    pub from: User,
    /// Up to 256 characters.
    pub query: String,
    /// Offset of the results to be returned, controlled by the bot.
    pub offset: String,
    /// Type of the chat the query was sent from.
    pub chat_type: Option<String>,
    /// Only for bots that request user location.
    pub location: Option<Location>,
}

/// A result of an inline query that was chosen by the user.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChosenInlineResult {
    pub result_id: String,
    pub from: User,
    pub location: Option<Location>,
    /// Set only if an inline keyboard is attached to the message.
    pub inline_message_id: Option<String>,
    pub query: String,
}

// ─── InlineQueryResult ────────────────────────────────────────────────────────

macro_rules! inline_results {
    ($( $variant:ident($ty:ident) = $tag:literal ),* $(,)?) => {
        /// One result of an inline query.
        ///
        /// On the wire every result carries a `type` tag. Cached and
        /// non-cached variants share a tag and differ by their `*_file_id` key.
        #[derive(Clone, Debug, PartialEq)]
        pub enum InlineQueryResult {
            $( $variant($ty), )*
        }

        impl InlineQueryResult {
            /// The `type` tag this result is sent with.
            pub fn kind(&self) -> &'static str {
                match self {
                    $( Self::$variant(_) => $tag, )*
                }
            }

            fn body(&self) -> serde_json::Result<Value> {
                match self {
                    $( Self::$variant(r) => serde_json::to_value(r), )*
                }
            }
        }

        $(
            impl From<$ty> for InlineQueryResult {
                fn from(r: $ty) -> Self { Self::$variant(r) }
            }
        )*
    };
}

inline_results! {
    Article(InlineQueryResultArticle)               = "article",
    Photo(InlineQueryResultPhoto)                   = "photo",
    Gif(InlineQueryResultGif)                       = "gif",
    Mpeg4Gif(InlineQueryResultMpeg4Gif)             = "mpeg4_gif",
    Video(InlineQueryResultVideo)                   = "video",
    Audio(InlineQueryResultAudio)                   = "audio",
    Voice(InlineQueryResultVoice)                   = "voice",
    Document(InlineQueryResultDocument)             = "document",
    Location(InlineQueryResultLocation)             = "location",
    Venue(InlineQueryResultVenue)                   = "venue",
    Contact(InlineQueryResultContact)               = "contact",
    Game(InlineQueryResultGame)                     = "game",
    CachedPhoto(InlineQueryResultCachedPhoto)       = "photo",
    CachedGif(InlineQueryResultCachedGif)           = "gif",
    CachedMpeg4Gif(InlineQueryResultCachedMpeg4Gif) = "mpeg4_gif",
    CachedSticker(InlineQueryResultCachedSticker)   = "sticker",
    CachedDocument(InlineQueryResultCachedDocument) = "document",
    CachedVideo(InlineQueryResultCachedVideo)       = "video",
    CachedVoice(InlineQueryResultCachedVoice)       = "voice",
    CachedAudio(InlineQueryResultCachedAudio)       = "audio",
}

const RESULT_KINDS: &[&str] = &[
    "article", "photo", "gif", "mpeg4_gif", "video", "audio", "voice", "document",
    "location", "venue", "contact", "game", "sticker",
];

impl Serialize for InlineQueryResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let Value::Object(mut map) = self.body().map_err(S::Error::custom)? else {
            return Err(S::Error::custom("inline query result did not render to an object"));
        };
        map.insert("type".to_owned(), Value::from(self.kind()));
        map.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for InlineQueryResult {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut map = Map::<String, Value>::deserialize(deserializer)?;
        let kind = match map.remove("type") {
            Some(Value::String(s)) => s,
            Some(other)            => return Err(D::Error::custom(format_args!("invalid `type`: {other}"))),
            None                   => return Err(D::Error::missing_field("type")),
        };
        let file_key = match kind.as_str() {
            "mpeg4_gif" => "mpeg4_file_id".to_owned(),
            k           => format!("{k}_file_id"),
        };
        let cached = map.contains_key(&file_key);
        let body = Value::Object(map);

        let result = match (kind.as_str(), cached) {
            ("article", _)       => serde_json::from_value(body).map(Self::Article),
            ("photo", false)     => serde_json::from_value(body).map(Self::Photo),
            ("photo", true)      => serde_json::from_value(body).map(Self::CachedPhoto),
            ("gif", false)       => serde_json::from_value(body).map(Self::Gif),
            ("gif", true)        => serde_json::from_value(body).map(Self::CachedGif),
            ("mpeg4_gif", false) => serde_json::from_value(body).map(Self::Mpeg4Gif),
            ("mpeg4_gif", true)  => serde_json::from_value(body).map(Self::CachedMpeg4Gif),
            ("video", false)     => serde_json::from_value(body).map(Self::Video),
            ("video", true)      => serde_json::from_value(body).map(Self::CachedVideo),
            ("audio", false)     => serde_json::from_value(body).map(Self::Audio),
            ("audio", true)      => serde_json::from_value(body).map(Self::CachedAudio),
            ("voice", false)     => serde_json::from_value(body).map(Self::Voice),
            ("voice", true)      => serde_json::from_value(body).map(Self::CachedVoice),
            ("document", false)  => serde_json::from_value(body).map(Self::Document),
            ("document", true)   => serde_json::from_value(body).map(Self::CachedDocument),
            ("sticker", _)       => serde_json::from_value(body).map(Self::CachedSticker),
            ("location", _)      => serde_json::from_value(body).map(Self::Location),
            ("venue", _)         => serde_json::from_value(body).map(Self::Venue),
            ("contact", _)       => serde_json::from_value(body).map(Self::Contact),
            ("game", _)          => serde_json::from_value(body).map(Self::Game),
            (other, _)           => return Err(D::Error::unknown_variant(other, RESULT_KINDS)),
        };
        result.map_err(D::Error::custom)
    }
}

/// A link to an article or web page.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InlineQueryResultArticle {
    /// Unique identifier for this result, 1-64 bytes.
    pub id: String,
    pub title: String,
    pub input_message_content: InputMessageContent,
    pub reply_markup: Option<InlineKeyboardMarkup>,
    pub url: Option<String>,
    /// Pass `true` to hide the URL in the message.
    pub hide_url: Option<bool>,
    pub description: Option<String>,
    pub thumb_url: Option<String>,
    pub thumb_width: Option<i32>,
    pub thumb_height: Option<i32>,
}

impl InlineQueryResultArticle {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<InputMessageContent>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            input_message_content: content.into(),
            reply_markup: None,
            url: None,
            hide_url: None,
            description: None,
            thumb_url: None,
            thumb_width: None,
            thumb_height: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InlineQueryResultPhoto {
    pub id: String,
    /// A valid URL of the photo. Must be JPEG, at most 5MB.
    pub photo_url: String,
    pub thumb_url: String,
    pub photo_width: Option<i32>,
    pub photo_height: Option<i32>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub caption: Option<String>,
    pub parse_mode: Option<ParseMode>,
    pub caption_entities: Option<Vec<MessageEntity>>,
    pub reply_markup: Option<InlineKeyboardMarkup>,
    pub input_message_content: Option<InputMessageContent>,
}

impl InlineQueryResultPhoto {
    pub fn new(id: impl Into<String>, photo_url: impl Into<String>, thumb_url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            photo_url: photo_url.into(),
            thumb_url: thumb_url.into(),
            photo_width: None,
            photo_height: None,
            title: None,
            description: None,
            caption: None,
            parse_mode: None,
            caption_entities: None,
            reply_markup: None,
            input_message_content: None,
        }
    }
}

#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InlineQueryResultGif {
    pub id: String,
    pub gif_url: String,
    pub gif_width: Option<i32>,
    pub gif_height: Option<i32>,
    pub gif_duration: Option<i32>,
    pub thumb_url: String,
    /// One of `image/jpeg`, `image/gif` or `video/mp4`.
    pub thumb_mime_type: Option<String>,
    pub title: Option<String>,
    pub caption: Option<String>,
    pub parse_mode: Option<ParseMode>,
    pub caption_entities: Option<Vec<MessageEntity>>,
    pub reply_markup: Option<InlineKeyboardMarkup>,
    pub input_message_content: Option<InputMessageContent>,
}

/// A link to a video animation (H.264/MPEG-4 AVC video without sound).
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InlineQueryResultMpeg4Gif {
    pub id: String,
    pub mpeg4_url: String,
    pub mpeg4_width: Option<i32>,
    pub mpeg4_height: Option<i32>,
    pub mpeg4_duration: Option<i32>,
    pub thumb_url: String,
    pub thumb_mime_type: Option<String>,
    pub title: Option<String>,
    pub caption: Option<String>,
    pub parse_mode: Option<ParseMode>,
    pub caption_entities: Option<Vec<MessageEntity>>,
    pub reply_markup: Option<InlineKeyboardMarkup>,
    pub input_message_content: Option<InputMessageContent>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InlineQueryResultVideo {
    pub id: String,
    pub video_url: String,
    /// `text/html` or `video/mp4`.
    pub mime_type: String,
    pub thumb_url: String,
    pub title: String,
    pub caption: Option<String>,
    pub parse_mode: Option<ParseMode>,
    pub caption_entities: Option<Vec<MessageEntity>>,
    pub video_width: Option<i32>,
    pub video_height: Option<i32>,
    pub video_duration: Option<i32>,
    pub description: Option<String>,
    pub reply_markup: Option<InlineKeyboardMarkup>,
    /// Required if the result is an embedded page (e.g. a YouTube video).
    pub input_message_content: Option<InputMessageContent>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InlineQueryResultAudio {
    pub id: String,
    pub audio_url: String,
    pub title: String,
    pub caption: Option<String>,
    pub parse_mode: Option<ParseMode>,
    pub caption_entities: Option<Vec<MessageEntity>>,
    pub performer: Option<String>,
    pub audio_duration: Option<i32>,
    pub reply_markup: Option<InlineKeyboardMarkup>,
    pub input_message_content: Option<InputMessageContent>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InlineQueryResultVoice {
    pub id: String,
    pub voice_url: String,
    pub title: String,
    pub caption: Option<String>,
    pub parse_mode: Option<ParseMode>,
    pub caption_entities: Option<Vec<MessageEntity>>,
    pub voice_duration: Option<i32>,
    pub reply_markup: Option<InlineKeyboardMarkup>,
    pub input_message_content: Option<InputMessageContent>,
}

/// A link to a file. Only `.pdf` and `.zip` files can be sent this way.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InlineQueryResultDocument {
    pub id: String,
    pub title: String,
    pub caption: Option<String>,
    pub parse_mode: Option<ParseMode>,
    pub caption_entities: Option<Vec<MessageEntity>>,
    pub document_url: String,
    /// `application/pdf` or `application/zip`.
    pub mime_type: String,
    pub description: Option<String>,
    pub reply_markup: Option<InlineKeyboardMarkup>,
    pub input_message_content: Option<InputMessageContent>,
    pub thumb_url: Option<String>,
    pub thumb_width: Option<i32>,
    pub thumb_height: Option<i32>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InlineQueryResultLocation {
    pub id: String,
    pub latitude: f64,
    pub longitude: f64,
    pub title: String,
    pub horizontal_accuracy: Option<f64>,
    pub live_period: Option<i32>,
    pub heading: Option<i32>,
    pub proximity_alert_radius: Option<i32>,
    pub reply_markup: Option<InlineKeyboardMarkup>,
    pub input_message_content: Option<InputMessageContent>,
    pub thumb_url: Option<String>,
    pub thumb_width: Option<i32>,
    pub thumb_height: Option<i32>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InlineQueryResultVenue {
    pub id: String,
    pub latitude: f64,
    pub longitude: f64,
    pub title: String,
    pub address: String,
    pub foursquare_id: Option<String>,
    pub foursquare_type: Option<String>,
    pub google_place_id: Option<String>,
    pub google_place_type: Option<String>,
    pub reply_markup: Option<InlineKeyboardMarkup>,
    pub input_message_content: Option<InputMessageContent>,
    pub thumb_url: Option<String>,
    pub thumb_width: Option<i32>,
    pub thumb_height: Option<i32>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InlineQueryResultContact {
    pub id: String,
    pub phone_number: String,
    pub first_name: String,
    pub last_name: Option<String>,
    pub vcard: Option<String>,
    pub reply_markup: Option<InlineKeyboardMarkup>,
    pub input_message_content: Option<InputMessageContent>,
    pub thumb_url: Option<String>,
    pub thumb_width: Option<i32>,
    pub thumb_height: Option<i32>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InlineQueryResultGame {
    pub id: String,
    pub game_short_name: String,
    pub reply_markup: Option<InlineKeyboardMarkup>,
}

impl InlineQueryResultGame {
    pub fn new(id: impl Into<String>, game_short_name: impl Into<String>) -> Self {
        Self { id: id.into(), game_short_name: game_short_name.into(), reply_markup: None }
    }
}

// ── Cached variants ──

#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InlineQueryResultCachedPhoto {
    pub id: String,
    pub photo_file_id: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub caption: Option<String>,
    pub parse_mode: Option<ParseMode>,
    pub caption_entities: Option<Vec<MessageEntity>>,
    pub reply_markup: Option<InlineKeyboardMarkup>,
    pub input_message_content: Option<InputMessageContent>,
}

impl InlineQueryResultCachedPhoto {
    pub fn new(id: impl Into<String>, photo_file_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            photo_file_id: photo_file_id.into(),
            title: None,
            description: None,
            caption: None,
            parse_mode: None,
            caption_entities: None,
            reply_markup: None,
            input_message_content: None,
        }
    }
}

#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InlineQueryResultCachedGif {
    pub id: String,
    pub gif_file_id: String,
    pub title: Option<String>,
    pub caption: Option<String>,
    pub parse_mode: Option<ParseMode>,
    pub caption_entities: Option<Vec<MessageEntity>>,
    pub reply_markup: Option<InlineKeyboardMarkup>,
    pub input_message_content: Option<InputMessageContent>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InlineQueryResultCachedMpeg4Gif {
    pub id: String,
    pub mpeg4_file_id: String,
    pub title: Option<String>,
    pub caption: Option<String>,
    pub parse_mode: Option<ParseMode>,
    pub caption_entities: Option<Vec<MessageEntity>>,
    pub reply_markup: Option<InlineKeyboardMarkup>,
    pub input_message_content: Option<InputMessageContent>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InlineQueryResultCachedSticker {
    pub id: String,
    pub sticker_file_id: String,
    pub reply_markup: Option<InlineKeyboardMarkup>,
    pub input_message_content: Option<InputMessageContent>,
}

impl InlineQueryResultCachedSticker {
    pub fn new(id: impl Into<String>, sticker_file_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            sticker_file_id: sticker_file_id.into(),
            reply_markup: None,
            input_message_content: None,
        }
    }
}

#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InlineQueryResultCachedDocument {
    pub id: String,
    pub title: String,
    pub document_file_id: String,
    pub description: Option<String>,
    pub caption: Option<String>,
    pub parse_mode: Option<ParseMode>,
    pub caption_entities: Option<Vec<MessageEntity>>,
    pub reply_markup: Option<InlineKeyboardMarkup>,
    pub input_message_content: Option<InputMessageContent>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InlineQueryResultCachedVideo {
    pub id: String,
    pub video_file_id: String,
    pub title: String,
    pub description: Option<String>,
    pub caption: Option<String>,
    pub parse_mode: Option<ParseMode>,
    pub caption_entities: Option<Vec<MessageEntity>>,
    pub reply_markup: Option<InlineKeyboardMarkup>,
    pub input_message_content: Option<InputMessageContent>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InlineQueryResultCachedVoice {
    pub id: String,
    pub voice_file_id: String,
    pub title: String,
    pub caption: Option<String>,
    pub parse_mode: Option<ParseMode>,
    pub caption_entities: Option<Vec<MessageEntity>>,
    pub reply_markup: Option<InlineKeyboardMarkup>,
    pub input_message_content: Option<InputMessageContent>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InlineQueryResultCachedAudio {
    pub id: String,
    pub audio_file_id: String,
    pub caption: Option<String>,
    pub parse_mode: Option<ParseMode>,
    pub caption_entities: Option<Vec<MessageEntity>>,
    pub reply_markup: Option<InlineKeyboardMarkup>,
    pub input_message_content: Option<InputMessageContent>,
}

// ─── InputMessageContent ──────────────────────────────────────────────────────

/// Content of a message to be sent as the result of an inline query.
///
/// Untagged on the wire; the variant is recognised by its required keys.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InputMessageContent {
    Text(InputTextMessageContent),
    Invoice(InputInvoiceMessageContent),
    Venue(InputVenueMessageContent),
    Location(InputLocationMessageContent),
    Contact(InputContactMessageContent),
}

#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InputTextMessageContent {
    /// 1-4096 characters after entities parsing.
    pub message_text: String,
    pub parse_mode: Option<ParseMode>,
    pub entities: Option<Vec<MessageEntity>>,
    pub disable_web_page_preview: Option<bool>,
}

impl InputTextMessageContent {
    pub fn new(text: impl Into<String>) -> Self {
        Self { message_text: text.into(), parse_mode: None, entities: None, disable_web_page_preview: None }
    }

    pub fn parse_mode(mut self, mode: ParseMode) -> Self {
        self.parse_mode = Some(mode);
        self
    }
}

#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InputLocationMessageContent {
    pub latitude: f64,
    pub longitude: f64,
    pub horizontal_accuracy: Option<f64>,
    /// Period in seconds for which the location can be updated, 60-86400.
    pub live_period: Option<i32>,
    pub heading: Option<i32>,
    pub proximity_alert_radius: Option<i32>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InputVenueMessageContent {
    pub latitude: f64,
    pub longitude: f64,
    pub title: String,
    pub address: String,
    pub foursquare_id: Option<String>,
    pub foursquare_type: Option<String>,
    pub google_place_id: Option<String>,
    pub google_place_type: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InputContactMessageContent {
    pub phone_number: String,
    pub first_name: String,
    pub last_name: Option<String>,
    pub vcard: Option<String>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InputInvoiceMessageContent {
    pub title: String,
    pub description: String,
    /// Bot-defined invoice payload, 1-128 bytes. Not displayed to the user.
    pub payload: String,
    pub provider_token: String,
    pub currency: String,
    pub prices: Vec<LabeledPrice>,
    pub max_tip_amount: Option<i32>,
    pub suggested_tip_amounts: Option<Vec<i32>>,
    pub provider_data: Option<String>,
    pub photo_url: Option<String>,
    pub photo_size: Option<i32>,
    pub photo_width: Option<i32>,
    pub photo_height: Option<i32>,
    pub need_name: Option<bool>,
    pub need_phone_number: Option<bool>,
    pub need_email: Option<bool>,
    pub need_shipping_address: Option<bool>,
    pub send_phone_number_to_provider: Option<bool>,
    pub send_email_to_provider: Option<bool>,
    pub is_flexible: Option<bool>,
}

impl From<InputTextMessageContent> for InputMessageContent {
    fn from(c: InputTextMessageContent) -> Self { Self::Text(c) }
}

impl From<InputInvoiceMessageContent> for InputMessageContent {
    fn from(c: InputInvoiceMessageContent) -> Self { Self::Invoice(c) }
}

impl From<InputVenueMessageContent> for InputMessageContent {
    fn from(c: InputVenueMessageContent) -> Self { Self::Venue(c) }
}

impl From<InputLocationMessageContent> for InputMessageContent {
    fn from(c: InputLocationMessageContent) -> Self { Self::Location(c) }
}

impl From<InputContactMessageContent> for InputMessageContent {
    fn from(c: InputContactMessageContent) -> Self { Self::Contact(c) }
}

remote_types!(
    InlineQuery,
    ChosenInlineResult,
    InlineQueryResult,
    InlineQueryResultArticle,
    InlineQueryResultPhoto,
    InlineQueryResultGif,
    InlineQueryResultMpeg4Gif,
    InlineQueryResultVideo,
    InlineQueryResultAudio,
    InlineQueryResultVoice,
    InlineQueryResultDocument,
    InlineQueryResultLocation,
    InlineQueryResultVenue,
    InlineQueryResultContact,
    InlineQueryResultGame,
    InlineQueryResultCachedPhoto,
    InlineQueryResultCachedGif,
    InlineQueryResultCachedMpeg4Gif,
    InlineQueryResultCachedSticker,
    InlineQueryResultCachedDocument,
    InlineQueryResultCachedVideo,
    InlineQueryResultCachedVoice,
    InlineQueryResultCachedAudio,
    InputMessageContent,
    InputTextMessageContent,
    InputLocationMessageContent,
    InputVenueMessageContent,
    InputContactMessageContent,
    InputInvoiceMessageContent,
);
