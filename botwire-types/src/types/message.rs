use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::{
    Animation, Audio, Chat, Document, Game, InlineKeyboardMarkup, Invoice, PassportData, PhotoSize,
    Sticker, SuccessfulPayment, User, Video, VideoNote, Voice,
};

/// A message.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Unique message identifier inside this chat.
    pub message_id: i32,
    /// Sender; empty for messages sent to channels.
    pub from: Option<User>,
    /// Sender of the message when sent on behalf of a chat.
    pub sender_chat: Option<Chat>,
    /// Date the message was sent, in unix time.
    pub date: i64,
    pub chat: Chat,

    // ── Forwarding and replies ──
    pub forward_from: Option<User>,
    pub forward_from_chat: Option<Chat>,
    pub forward_from_message_id: Option<i32>,
    pub forward_signature: Option<String>,
    /// Sender's name for forwards from users who hide their account.
    pub forward_sender_name: Option<String>,
    pub forward_date: Option<i64>,
    /// Not set on a `reply_to_message` itself, even if it is a reply.
    pub reply_to_message: Option<Box<Message>>,
    pub via_bot: Option<User>,
    pub edit_date: Option<i64>,
    pub media_group_id: Option<String>,
    pub author_signature: Option<String>,

    // ── Content ──
    /// Actual UTF-8 text of a text message.
    pub text: Option<String>,
    pub entities: Option<Vec<MessageEntity>>,
    pub animation: Option<Animation>,
    pub audio: Option<Audio>,
    pub document: Option<Document>,
    /// Available sizes of the photo.
    pub photo: Option<Vec<PhotoSize>>,
    pub sticker: Option<Sticker>,
    pub video: Option<Video>,
    pub video_note: Option<VideoNote>,
    pub voice: Option<Voice>,
    pub caption: Option<String>,
    pub caption_entities: Option<Vec<MessageEntity>>,
    pub contact: Option<Contact>,
    pub dice: Option<Dice>,
    pub game: Option<Game>,
    pub poll: Option<Poll>,
    pub venue: Option<Venue>,
    pub location: Option<Location>,

    // ── Service messages ──
    pub new_chat_members: Option<Vec<User>>,
    pub left_chat_member: Option<User>,
    pub new_chat_title: Option<String>,
    pub new_chat_photo: Option<Vec<PhotoSize>>,
    pub delete_chat_photo: Option<bool>,
    pub group_chat_created: Option<bool>,
    pub supergroup_chat_created: Option<bool>,
    pub channel_chat_created: Option<bool>,
    pub message_auto_delete_timer_changed: Option<MessageAutoDeleteTimerChanged>,
    pub migrate_to_chat_id: Option<i64>,
    pub migrate_from_chat_id: Option<i64>,
    pub pinned_message: Option<Box<Message>>,
    pub invoice: Option<Invoice>,
    pub successful_payment: Option<SuccessfulPayment>,
    /// Domain name of the website on which the user has logged in.
    pub connected_website: Option<String>,
    pub passport_data: Option<PassportData>,
    pub proximity_alert_triggered: Option<ProximityAlertTriggered>,
    pub voice_chat_scheduled: Option<VoiceChatScheduled>,
    pub voice_chat_started: Option<VoiceChatStarted>,
    pub voice_chat_ended: Option<VoiceChatEnded>,
    pub voice_chat_participants_invited: Option<VoiceChatParticipantsInvited>,
    /// Inline keyboard attached to the message. `login_url` buttons show up
    /// as ordinary `url` buttons.
    pub reply_markup: Option<InlineKeyboardMarkup>,
}

impl Message {
    /// `date` as a UTC timestamp.
    pub fn date_time(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.date, 0)
    }

    /// `edit_date` as a UTC timestamp, if the message was edited.
    pub fn edit_date_time(&self) -> Option<DateTime<Utc>> {
        self.edit_date.and_then(|ts| DateTime::from_timestamp(ts, 0))
    }

    /// Text for text messages, caption for media messages.
    pub fn text_or_caption(&self) -> Option<&str> {
        self.text.as_deref().or(self.caption.as_deref())
    }

    /// The command this message starts with, without the leading slash or
    /// the `@botname` suffix, and the rest of the text.
    pub fn command(&self) -> Option<(&str, &str)> {
        let text = self.text.as_deref()?.strip_prefix('/')?;
        let (head, rest) = text.split_once(char::is_whitespace).unwrap_or((text, ""));
        let name = head.split('@').next().unwrap_or(head);
        if name.is_empty() { None } else { Some((name, rest.trim_start())) }
    }
}

/// Unique message identifier, as returned by `copyMessage`.
#[skip_serializing_none]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageId {
    pub message_id: i32,
}

/// One special entity in a text message: a hashtag, username, URL, etc.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MessageEntity {
    #[serde(rename = "type")]
    pub kind: String,
    /// Offset in UTF-16 code units to the start of the entity.
    pub offset: i32,
    /// Length of the entity in UTF-16 code units.
    pub length: i32,
    /// For `text_link` only.
    pub url: Option<String>,
    /// For `text_mention` only.
    pub user: Option<User>,
    /// For `pre` only.
    pub language: Option<String>,
}

impl MessageEntity {
    pub fn new(kind: impl Into<String>, offset: i32, length: i32) -> Self {
        Self { kind: kind.into(), offset, length, url: None, user: None, language: None }
    }
}

#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub phone_number: String,
    pub first_name: String,
    pub last_name: Option<String>,
    pub user_id: Option<i64>,
    /// Additional data in the form of a vCard.
    pub vcard: Option<String>,
}

/// An animated emoji that displays a random value.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Dice {
    pub emoji: String,
    pub value: i32,
}

#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PollOption {
    pub text: String,
    pub voter_count: i32,
}

/// An answer of a user in a non-anonymous poll.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PollAnswer {
    pub poll_id: String,
    pub user: User,
    /// May be empty if the user retracted their vote.
    pub option_ids: Vec<i32>,
}

/// A poll.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Poll {
    pub id: String,
    pub question: String,
    pub options: Vec<PollOption>,
    pub total_voter_count: i32,
    pub is_closed: bool,
    pub is_anonymous: bool,
    /// `regular` or `quiz`.
    #[serde(rename = "type")]
    pub kind: String,
    pub allows_multiple_answers: bool,
    /// Quiz only; available for closed polls or polls sent by the bot.
    pub correct_option_id: Option<i32>,
    pub explanation: Option<String>,
    pub explanation_entities: Option<Vec<MessageEntity>>,
    pub open_period: Option<i32>,
    pub close_date: Option<i64>,
}

/// A point on the map.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub longitude: f64,
    pub latitude: f64,
    /// Radius of uncertainty, in meters; 0-1500.
    pub horizontal_accuracy: Option<f64>,
    pub live_period: Option<i32>,
    pub heading: Option<i32>,
    pub proximity_alert_radius: Option<i32>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Venue {
    pub location: Location,
    pub title: String,
    pub address: String,
    pub foursquare_id: Option<String>,
    pub foursquare_type: Option<String>,
    pub google_place_id: Option<String>,
    pub google_place_type: Option<String>,
}

/// Service message: a user in the chat triggered another user's proximity alert.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProximityAlertTriggered {
    pub traveler: User,
    pub watcher: User,
    pub distance: i32,
}

#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MessageAutoDeleteTimerChanged {
    pub message_auto_delete_time: i32,
}

#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VoiceChatScheduled {
    pub start_date: i64,
}

/// Service message: voice chat started. Holds no information.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct VoiceChatStarted {}

#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VoiceChatEnded {
    /// Voice chat duration in seconds.
    pub duration: i32,
}

#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VoiceChatParticipantsInvited {
    pub users: Option<Vec<User>>,
}

remote_types!(
    Message,
    MessageId,
    MessageEntity,
    Contact,
    Dice,
    PollOption,
    PollAnswer,
    Poll,
    Location,
    Venue,
    ProximityAlertTriggered,
    MessageAutoDeleteTimerChanged,
    VoiceChatScheduled,
    VoiceChatStarted,
    VoiceChatEnded,
    VoiceChatParticipantsInvited,
);
