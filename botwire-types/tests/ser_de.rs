use botwire_types::types::{
    Chat, ChatId, ChatMember, ForceReply, InlineKeyboardButton, InlineKeyboardMarkup,
    InlineQueryResult, InlineQueryResultArticle, InlineQueryResultCachedPhoto,
    InlineQueryResultPhoto, InputMedia, InputMediaPhoto, InputMessageContent,
    InputTextMessageContent, Message, ParseMode, PassportElementError, ReplyMarkup, Update,
    UpdateKind, User,
};
use botwire_types::{OrBool, RemoteType};
use serde_json::json;

fn sample_user() -> User {
    User {
        id: 7,
        is_bot: false,
        first_name: "Ada".into(),
        last_name: None,
        username: Some("ada".into()),
        language_code: None,
        can_join_groups: None,
        can_read_all_group_messages: None,
        supports_inline_queries: None,
    }
}

fn message_json() -> serde_json::Value {
    json!({
        "message_id": 1,
        "date": 0,
        "chat": { "id": 42, "type": "private", "first_name": "Ada" },
        "text": "hi"
    })
}

// ── Field presence ────────────────────────────────────────────────────────────

#[test]
fn unset_optionals_are_omitted() {
    let wire = sample_user().to_wire().unwrap();
    assert_eq!(wire, json!({ "id": 7, "is_bot": false, "first_name": "Ada", "username": "ada" }));
}

#[test]
fn required_zero_values_are_kept() {
    let user = User { id: 0, first_name: String::new(), ..sample_user() };
    let wire = user.to_wire().unwrap();
    assert_eq!(wire["id"], json!(0));
    assert_eq!(wire["first_name"], json!(""));
    assert_eq!(wire["is_bot"], json!(false));
}

#[test]
fn roundtrip_keeps_set_fields_and_unset_stays_unset() {
    let user = sample_user();
    let back = User::from_wire(user.to_wire().unwrap()).unwrap();
    assert_eq!(back, user);
    assert!(back.last_name.is_none());
    assert_eq!(back.username.as_deref(), Some("ada"));
}

#[test]
fn missing_required_field_is_an_error() {
    let err = User::from_wire(json!({ "id": 1, "is_bot": false })).unwrap_err();
    assert!(err.to_string().contains("first_name"), "{err}");
}

#[test]
fn unknown_fields_are_ignored() {
    let user = User::from_wire(json!({
        "id": 1, "is_bot": true, "first_name": "Bot", "added_in_a_later_version": [1, 2]
    }))
    .unwrap();
    assert!(user.is_bot);
}

#[test]
fn type_key_maps_to_kind() {
    let chat: Chat = botwire_types::from_str(r#"{"id":-100,"type":"supergroup","title":"x"}"#).unwrap();
    assert_eq!(chat.kind, "supergroup");
    assert!(chat.is_group());
    assert_eq!(chat.to_wire().unwrap()["type"], json!("supergroup"));
}

#[test]
fn doc_url_points_at_the_anchor() {
    assert_eq!(Message::NAME, "Message");
    assert_eq!(ChatMember::doc_url(), "https://core.telegram.org/bots/api#chatmember");
}

// ── Message helpers ───────────────────────────────────────────────────────────

#[test]
fn nested_types_decode() {
    let msg = Message::from_wire(json!({
        "message_id": 5,
        "date": 1_600_000_000,
        "chat": { "id": 42, "type": "private" },
        "reply_to_message": message_json(),
        "caption": "look",
        "photo": [{ "file_id": "a", "file_unique_id": "b", "width": 1, "height": 2 }]
    }))
    .unwrap();
    assert_eq!(msg.reply_to_message.as_ref().map(|m| m.message_id), Some(1));
    assert_eq!(msg.photo.as_ref().map(Vec::len), Some(1));
    assert_eq!(msg.text_or_caption(), Some("look"));
    assert_eq!(msg.date_time().map(|d| d.timestamp()), Some(1_600_000_000));
    assert!(msg.edit_date_time().is_none());
}

#[test]
fn command_is_split_from_arguments() {
    let mut msg = Message::from_wire(message_json()).unwrap();
    msg.text = Some("/start@my_bot  deep link".into());
    assert_eq!(msg.command(), Some(("start", "deep link")));
    msg.text = Some("plain".into());
    assert_eq!(msg.command(), None);
}

// ── Unions ────────────────────────────────────────────────────────────────────

#[test]
fn or_bool_picks_member_by_shape() {
    let obj: OrBool<Message> = botwire_types::from_str(&message_json().to_string()).unwrap();
    assert_eq!(obj.clone().object().map(|m| m.message_id), Some(1));

    let flag: OrBool<Message> = botwire_types::from_str("true").unwrap();
    assert_eq!(flag, OrBool::Bool(true));
    assert!(flag.is_success());
}

#[test]
fn or_bool_rejects_other_shapes() {
    let err = botwire_types::from_str::<OrBool<Message>>("42").unwrap_err();
    assert!(err.to_string().contains("expected an object or a boolean"), "{err}");
    assert!(botwire_types::from_str::<OrBool<Message>>(r#"{"message_id":1}"#).is_err());
}

#[test]
fn input_media_is_tagged_by_type() {
    let media: InputMedia = InputMediaPhoto::new("attach://pic").caption("c").into();
    assert_eq!(
        media.to_wire().unwrap(),
        json!({ "type": "photo", "media": "attach://pic", "caption": "c" })
    );
    let back = InputMedia::from_wire(json!({ "type": "document", "media": "id" })).unwrap();
    assert!(matches!(back, InputMedia::Document(_)));
    assert_eq!(back.media(), "id");
}

#[test]
fn reply_markup_is_untagged() {
    let markup: ReplyMarkup = InlineKeyboardMarkup::default()
        .row(vec![InlineKeyboardButton::callback("Yes", "y")])
        .into();
    assert_eq!(
        markup.to_wire().unwrap(),
        json!({ "inline_keyboard": [[{ "text": "Yes", "callback_data": "y" }]] })
    );
    let force = ReplyMarkup::from_wire(json!({ "force_reply": true })).unwrap();
    assert_eq!(force, ReplyMarkup::ForceReply(ForceReply::default()));
}

#[test]
fn inline_result_gets_type_tag() {
    let content = InputTextMessageContent::new("*hi*").parse_mode(ParseMode::MarkdownV2);
    let result: InlineQueryResult = InlineQueryResultArticle::new("1", "Title", content).into();
    let wire = result.to_wire().unwrap();
    assert_eq!(wire["type"], json!("article"));
    assert_eq!(wire["input_message_content"]["parse_mode"], json!("MarkdownV2"));
}

#[test]
fn cached_and_plain_inline_results_share_a_tag() {
    let plain = InlineQueryResult::from_wire(json!({
        "type": "photo", "id": "1", "photo_url": "https://x/p.jpg", "thumb_url": "https://x/t.jpg"
    }))
    .unwrap();
    let cached = InlineQueryResult::from_wire(json!({
        "type": "photo", "id": "2", "photo_file_id": "AgAD"
    }))
    .unwrap();
    assert!(matches!(plain, InlineQueryResult::Photo(InlineQueryResultPhoto { .. })));
    assert!(matches!(cached, InlineQueryResult::CachedPhoto(InlineQueryResultCachedPhoto { .. })));
    assert_eq!(cached.kind(), "photo");
}

#[test]
fn unknown_inline_result_type_is_an_error() {
    assert!(InlineQueryResult::from_wire(json!({ "type": "hologram", "id": "1" })).is_err());
}

#[test]
fn input_message_content_by_keys() {
    let c = InputMessageContent::from_wire(json!({ "latitude": 1.5, "longitude": 2.5 })).unwrap();
    assert!(matches!(c, InputMessageContent::Location(_)));
    let c = InputMessageContent::from_wire(json!({
        "latitude": 1.5, "longitude": 2.5, "title": "t", "address": "a"
    }))
    .unwrap();
    assert!(matches!(c, InputMessageContent::Venue(_)));
}

#[test]
fn passport_error_is_tagged_by_source() {
    let err = PassportElementError::TranslationFiles {
        kind: "passport".into(),
        file_hashes: vec!["h1".into()],
        message: "blurry".into(),
    };
    let wire = err.to_wire().unwrap();
    assert_eq!(wire["source"], json!("translation_files"));
    assert_eq!(wire["type"], json!("passport"));
    assert_eq!(err.message(), "blurry");
}

// ── Updates ───────────────────────────────────────────────────────────────────

#[test]
fn update_kind_follows_the_payload() {
    let update: Update = botwire_types::from_str(
        &json!({ "update_id": 10, "edited_message": message_json() }).to_string(),
    )
    .unwrap();
    assert!(matches!(update.kind(), UpdateKind::EditedMessage(_)));
    assert_eq!(update.message().map(|m| m.message_id), Some(1));

    let empty: Update = botwire_types::from_str(r#"{"update_id":11}"#).unwrap();
    assert_eq!(empty.kind(), UpdateKind::Unknown);
}

// ── Primitives ────────────────────────────────────────────────────────────────

#[test]
fn chat_id_is_untagged() {
    assert_eq!(serde_json::to_value(ChatId::from(-100_i64)).unwrap(), json!(-100));
    assert_eq!(serde_json::to_value(ChatId::from("@chan")).unwrap(), json!("@chan"));
    assert_eq!(ChatId::from("@chan").to_string(), "@chan");
}

#[test]
fn parse_mode_wire_names() {
    assert_eq!(serde_json::to_value(ParseMode::Html).unwrap(), json!("HTML"));
    assert_eq!(ParseMode::MarkdownV2.as_str(), "MarkdownV2");
}
