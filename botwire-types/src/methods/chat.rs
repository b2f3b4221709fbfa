use crate::params::InputFile;
use crate::types::{BotCommand, Chat, ChatId, ChatInviteLink, ChatMember, ChatPermissions, User};

// ─── Bot ──────────────────────────────────────────────────────────────────────

remote_call! {
    /// Basic information about the bot. Requires no parameters.
    GetMe("getMe") -> User {
        required {}
        optional {}
    }
}

remote_call! {
    /// Log out from the cloud Bot API server before launching the bot locally.
    LogOut("logOut") -> bool {
        required {}
        optional {}
    }
}

remote_call! {
    /// Close the bot instance before moving it from one local server to another.
    Close("close") -> bool {
        required {}
        optional {}
    }
}

remote_call! {
    SetMyCommands("setMyCommands") -> bool {
        required {
            /// At most 100 commands.
            commands: Vec<BotCommand>,
        }
        optional {}
    }
}

remote_call! {
    GetMyCommands("getMyCommands") -> Vec<BotCommand> {
        required {}
        optional {}
    }
}

remote_call! {
    /// Answer a callback query sent from an inline keyboard.
    AnswerCallbackQuery("answerCallbackQuery") -> bool {
        required {
            callback_query_id: String,
        }
        optional {
            text: String,
            show_alert: bool,
            url: String,
            cache_time: i32,
        }
    }
}

// ─── Members ──────────────────────────────────────────────────────────────────

remote_call! {
    /// Ban a user from a group, supergroup or channel.
    KickChatMember("kickChatMember") -> bool {
        required {
            chat_id: ChatId,
            user_id: i64,
        }
        optional {
            /// Banned forever if less than 30 seconds or more than 366 days from now.
            until_date: i64,
            revoke_messages: bool,
        }
    }
}

remote_call! {
    UnbanChatMember("unbanChatMember") -> bool {
        required {
            chat_id: ChatId,
            user_id: i64,
        }
        optional {
            /// Do nothing if the user is not banned.
            only_if_banned: bool,
        }
    }
}

remote_call! {
    RestrictChatMember("restrictChatMember") -> bool {
        required {
            chat_id: ChatId,
            user_id: i64,
            permissions: ChatPermissions,
        }
        optional {
            until_date: i64,
        }
    }
}

remote_call! {
    /// Promote or demote a user. Pass `false` for all flags to demote.
    PromoteChatMember("promoteChatMember") -> bool {
        required {
            chat_id: ChatId,
            user_id: i64,
        }
        optional {
            is_anonymous: bool,
            can_manage_chat: bool,
            can_post_messages: bool,
            can_edit_messages: bool,
            can_delete_messages: bool,
            can_manage_voice_chats: bool,
            can_restrict_members: bool,
            can_promote_members: bool,
            can_change_info: bool,
            can_invite_users: bool,
            can_pin_messages: bool,
        }
    }
}

remote_call! {
    SetChatAdministratorCustomTitle("setChatAdministratorCustomTitle") -> bool {
        required {
            chat_id: ChatId,
            user_id: i64,
            /// 0-16 characters, emoji are not allowed.
            custom_title: String,
        }
        optional {}
    }
}

remote_call! {
    SetChatPermissions("setChatPermissions") -> bool {
        required {
            chat_id: ChatId,
            permissions: ChatPermissions,
        }
        optional {}
    }
}

remote_call! {
    GetChatAdministrators("getChatAdministrators") -> Vec<ChatMember> {
        required {
            chat_id: ChatId,
        }
        optional {}
    }
}

remote_call! {
    GetChatMembersCount("getChatMembersCount") -> i32 {
        required {
            chat_id: ChatId,
        }
        optional {}
    }
}

remote_call! {
    GetChatMember("getChatMember") -> ChatMember {
        required {
            chat_id: ChatId,
            user_id: i64,
        }
        optional {}
    }
}

// ─── Invite links ─────────────────────────────────────────────────────────────

remote_call! {
    /// Generate a new primary invite link, revoking the previous one.
    ExportChatInviteLink("exportChatInviteLink") -> String {
        required {
            chat_id: ChatId,
        }
        optional {}
    }
}

remote_call! {
    CreateChatInviteLink("createChatInviteLink") -> ChatInviteLink {
        required {
            chat_id: ChatId,
        }
        optional {
            expire_date: i64,
            /// 1-99999 simultaneous members.
            member_limit: i32,
        }
    }
}

remote_call! {
    EditChatInviteLink("editChatInviteLink") -> ChatInviteLink {
        required {
            chat_id: ChatId,
            invite_link: String,
        }
        optional {
            expire_date: i64,
            member_limit: i32,
        }
    }
}

remote_call! {
    RevokeChatInviteLink("revokeChatInviteLink") -> ChatInviteLink {
        required {
            chat_id: ChatId,
            invite_link: String,
        }
        optional {}
    }
}

// ─── Chat settings ────────────────────────────────────────────────────────────

remote_call! {
    SetChatPhoto("setChatPhoto") -> bool {
        required {
            chat_id: ChatId,
            photo: InputFile,
        }
        optional {}
    }
}

remote_call! {
    DeleteChatPhoto("deleteChatPhoto") -> bool {
        required {
            chat_id: ChatId,
        }
        optional {}
    }
}

remote_call! {
    SetChatTitle("setChatTitle") -> bool {
        required {
            chat_id: ChatId,
            /// 1-255 characters.
            title: String,
        }
        optional {}
    }
}

remote_call! {
    SetChatDescription("setChatDescription") -> bool {
        required {
            chat_id: ChatId,
        }
        optional {
            /// 0-255 characters.
            description: String,
        }
    }
}

remote_call! {
    PinChatMessage("pinChatMessage") -> bool {
        required {
            chat_id: ChatId,
            message_id: i32,
        }
        optional {
            disable_notification: bool,
        }
    }
}

remote_call! {
    /// Unpin a message, or the most recent pinned one if `message_id` is unset.
    UnpinChatMessage("unpinChatMessage") -> bool {
        required {
            chat_id: ChatId,
        }
        optional {
            message_id: i32,
        }
    }
}

remote_call! {
    UnpinAllChatMessages("unpinAllChatMessages") -> bool {
        required {
            chat_id: ChatId,
        }
        optional {}
    }
}

remote_call! {
    LeaveChat("leaveChat") -> bool {
        required {
            chat_id: ChatId,
        }
        optional {}
    }
}

remote_call! {
    /// Up-to-date information about a chat.
    GetChat("getChat") -> Chat {
        required {
            chat_id: ChatId,
        }
        optional {}
    }
}

remote_call! {
    SetChatStickerSet("setChatStickerSet") -> bool {
        required {
            chat_id: ChatId,
            sticker_set_name: String,
        }
        optional {}
    }
}

remote_call! {
    DeleteChatStickerSet("deleteChatStickerSet") -> bool {
        required {
            chat_id: ChatId,
        }
        optional {}
    }
}
