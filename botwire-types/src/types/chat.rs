use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::{Location, Message};

/// A Telegram user or bot.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier. Has at most 52 significant bits.
    pub id: i64,
    pub is_bot: bool,
    pub first_name: String,
    pub last_name: Option<String>,
    pub username: Option<String>,
    /// IETF language tag of the user's language.
    pub language_code: Option<String>,
    /// Returned only in `getMe`.
    pub can_join_groups: Option<bool>,
    /// Returned only in `getMe`.
    pub can_read_all_group_messages: Option<bool>,
    /// Returned only in `getMe`.
    pub supports_inline_queries: Option<bool>,
}

impl User {
    /// First and last name joined by a space.
    pub fn full_name(&self) -> String {
        match &self.last_name {
            Some(last) => format!("{} {last}", self.first_name),
            None       => self.first_name.clone(),
        }
    }

    /// `@username`, if the user has one.
    pub fn mention(&self) -> Option<String> {
        self.username.as_ref().map(|u| format!("@{u}"))
    }
}

/// A chat.
///
/// Fields marked "returned only in `getChat`" are absent everywhere else.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Chat {
    pub id: i64,
    /// One of `private`, `group`, `supergroup` or `channel`.
    #[serde(rename = "type")]
    pub kind: String,
    pub title: Option<String>,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    /// Returned only in `getChat`.
    pub photo: Option<ChatPhoto>,
    /// Returned only in `getChat`.
    pub bio: Option<String>,
    /// Returned only in `getChat`.
    pub description: Option<String>,
    /// Returned only in `getChat`.
    pub invite_link: Option<String>,
    /// Returned only in `getChat`.
    pub pinned_message: Option<Box<Message>>,
    /// Default member permissions, for groups and supergroups.
    pub permissions: Option<ChatPermissions>,
    pub slow_mode_delay: Option<i32>,
    pub message_auto_delete_time: Option<i32>,
    pub sticker_set_name: Option<String>,
    pub can_set_sticker_set: Option<bool>,
    pub linked_chat_id: Option<i64>,
    pub location: Option<ChatLocation>,
}

impl Chat {
    pub fn is_private(&self) -> bool { self.kind == "private" }

    pub fn is_group(&self) -> bool { self.kind == "group" || self.kind == "supergroup" }

    pub fn is_channel(&self) -> bool { self.kind == "channel" }
}

#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatPhoto {
    /// 160x160 chat photo. Only valid for downloading while the photo is unchanged.
    pub small_file_id: String,
    pub small_file_unique_id: String,
    /// 640x640 chat photo.
    pub big_file_id: String,
    pub big_file_unique_id: String,
}

/// An invite link for a chat.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatInviteLink {
    pub invite_link: String,
    pub creator: User,
    pub is_primary: bool,
    pub is_revoked: bool,
    pub expire_date: Option<i64>,
    pub member_limit: Option<i32>,
}

/// Information about one member of a chat.
///
/// Which permission fields are set depends on `status`: one of `creator`,
/// `administrator`, `member`, `restricted`, `left` or `kicked`.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatMember {
    pub user: User,
    pub status: String,
    pub custom_title: Option<String>,
    pub is_anonymous: Option<bool>,
    pub can_be_edited: Option<bool>,
    pub can_manage_chat: Option<bool>,
    pub can_post_messages: Option<bool>,
    pub can_edit_messages: Option<bool>,
    pub can_delete_messages: Option<bool>,
    pub can_manage_voice_chats: Option<bool>,
    pub can_restrict_members: Option<bool>,
    pub can_promote_members: Option<bool>,
    pub can_change_info: Option<bool>,
    pub can_invite_users: Option<bool>,
    pub can_pin_messages: Option<bool>,
    pub is_member: Option<bool>,
    pub can_send_messages: Option<bool>,
    pub can_send_media_messages: Option<bool>,
    pub can_send_polls: Option<bool>,
    pub can_send_other_messages: Option<bool>,
    pub can_add_web_page_previews: Option<bool>,
    /// Unix time when restrictions will be lifted.
    pub until_date: Option<i64>,
}

impl ChatMember {
    pub fn is_admin(&self) -> bool {
        self.status == "creator" || self.status == "administrator"
    }
}

/// Changes in the status of a chat member.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatMemberUpdated {
    pub chat: Chat,
    /// Performer of the action which resulted in the change.
    pub from: User,
    pub date: i64,
    pub old_chat_member: ChatMember,
    pub new_chat_member: ChatMember,
    /// Invite link used by the user to join, for joins by link only.
    pub invite_link: Option<ChatInviteLink>,
}

/// Actions a non-administrator user is allowed to take in a chat.
#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatPermissions {
    pub can_send_messages: Option<bool>,
    /// Implies `can_send_messages`.
    pub can_send_media_messages: Option<bool>,
    /// Implies `can_send_messages`.
    pub can_send_polls: Option<bool>,
    /// Animations, games, stickers and inline bots. Implies `can_send_media_messages`.
    pub can_send_other_messages: Option<bool>,
    pub can_add_web_page_previews: Option<bool>,
    pub can_change_info: Option<bool>,
    pub can_invite_users: Option<bool>,
    pub can_pin_messages: Option<bool>,
}

/// A location to which a chat is connected.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatLocation {
    /// Can't be a live location.
    pub location: Location,
    pub address: String,
}

/// A bot command.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BotCommand {
    /// 1-32 characters: lowercase English letters, digits and underscores.
    pub command: String,
    pub description: String,
}

impl BotCommand {
    pub fn new(command: impl Into<String>, description: impl Into<String>) -> Self {
        Self { command: command.into(), description: description.into() }
    }
}

/// Why a request was unsuccessful, as reported by the server.
#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ResponseParameters {
    /// The group has been migrated to a supergroup with this identifier.
    pub migrate_to_chat_id: Option<i64>,
    /// Seconds left to wait before the request can be repeated.
    pub retry_after: Option<i64>,
}

remote_types!(
    User,
    Chat,
    ChatPhoto,
    ChatInviteLink,
    ChatMember,
    ChatMemberUpdated,
    ChatPermissions,
    ChatLocation,
    BotCommand,
    ResponseParameters,
);
