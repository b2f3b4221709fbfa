use std::io::Write as _;

use botwire_types::methods::{
    EditMessageMedia, EditMessageText, GetChatMembersCount, GetMe, SendMediaGroup, SendMessage,
    SendPhoto, SendPoll, SetGameScore,
};
use botwire_types::types::{
    ChatId, InlineKeyboardButton, InlineKeyboardMarkup, InputMediaPhoto, ParseMode,
};
use botwire_types::{InputFile, Param, RemoteCall};

#[test]
fn method_names_are_wire_names() {
    assert_eq!(GetMe::METHOD, "getMe");
    assert_eq!(SendMediaGroup::METHOD, "sendMediaGroup");
    assert_eq!(GetChatMembersCount::METHOD, "getChatMembersCount");
}

#[test]
fn params_list_every_parameter_in_order() {
    let params = SendMessage::new(12345, "hello").params();
    let keys: Vec<&str> = params.keys().collect();
    assert_eq!(
        keys,
        [
            "chat_id",
            "text",
            "parse_mode",
            "entities",
            "disable_web_page_preview",
            "disable_notification",
            "reply_to_message_id",
            "allow_sending_without_reply",
            "reply_markup",
        ]
    );
    assert!(matches!(params.get("chat_id"), Some(Param::Int(12345))));
    assert!(matches!(params.get("reply_markup"), Some(Param::Null)));
}

#[test]
fn setters_fill_optional_parameters() {
    let markup = InlineKeyboardMarkup::default().row(vec![InlineKeyboardButton::url("Docs", "https://x")]);
    let req = SendMessage::new("@channel", "*bold*")
        .parse_mode(ParseMode::MarkdownV2)
        .disable_notification(false)
        .reply_markup(markup);
    assert_eq!(req.chat_id, ChatId::Username("@channel".into()));

    let params = req.params();
    assert!(matches!(params.get("parse_mode"), Some(Param::Str(s)) if s == "MarkdownV2"));
    assert!(matches!(params.get("disable_notification"), Some(Param::Bool(false))));
    assert!(matches!(params.get("reply_markup"), Some(Param::Object(o)) if o.type_name() == "ReplyMarkup"));
}

#[test]
fn raw_identifier_fields_go_out_without_prefix() {
    let params = SendPoll::new(1, "Q?", vec!["a".to_owned(), "b".to_owned()])
        .r#type("quiz")
        .params();
    assert!(params.keys().any(|k| k == "type"));
    assert!(matches!(params.get("options"), Some(Param::List(l)) if l.len() == 2));
}

#[test]
fn attachments_become_top_level_parameters() {
    let req = SendMediaGroup::new(1, vec![InputMediaPhoto::new("attach://one").into()])
        .attach("one", InputFile::memory("one.jpg", vec![0xFFu8, 0xD8]));
    let params = req.params();
    assert!(matches!(params.get("one"), Some(Param::File(InputFile::Memory { .. }))));
    assert!(matches!(params.get("media"), Some(Param::List(l)) if l.len() == 1));

    let edit = EditMessageMedia::new(InputMediaPhoto::new("attach://new"))
        .inline_message_id("abc")
        .attach("new", InputFile::path("/tmp/new.jpg"));
    assert_eq!(edit.params().len(), 6);
}

#[test]
fn attachments_never_replace_declared_parameters() {
    let plain = SendMediaGroup::new(7, vec![InputMediaPhoto::new("attach://one").into()]);
    let declared = plain.params().len();

    let clashing = plain
        .attach("chat_id", InputFile::memory("a.jpg", vec![1u8]))
        .attach("media", InputFile::memory("b.jpg", vec![2u8]))
        .attach("one", InputFile::memory("one.jpg", vec![3u8]))
        .attach("one", InputFile::memory("other.jpg", vec![4u8]));
    let params = clashing.params();

    assert_eq!(params.len(), declared + 1);
    assert!(matches!(params.get("chat_id"), Some(Param::Int(7))));
    assert!(matches!(params.get("media"), Some(Param::List(l)) if l.len() == 1));
    assert!(matches!(
        params.get("one"),
        Some(Param::File(InputFile::Memory { name, .. })) if name == "one.jpg"
    ));
}

#[test]
fn edit_methods_declare_the_object_or_bool_shape() {
    fn returns<R: RemoteCall<Return = botwire_types::OrBool<botwire_types::types::Message>>>() {}
    returns::<EditMessageText>();
    returns::<SetGameScore>();
}

#[test]
fn input_file_guess_classifies_strings() {
    let mut tmp = tempfile::NamedTempFile::new().unwrap();
    tmp.write_all(b"data").unwrap();

    let local = InputFile::guess(tmp.path().to_string_lossy().into_owned());
    assert!(matches!(local, InputFile::Path(_)));
    assert!(local.is_upload());

    assert_eq!(InputFile::guess("https://x/y.png"), InputFile::Url("https://x/y.png".into()));
    assert_eq!(InputFile::guess("AgADBAAD"), InputFile::FileId("AgADBAAD".into()));
    assert!(!InputFile::from("AgADBAAD").is_upload());
}

#[test]
fn file_params_stay_typed_until_preparation() {
    let params = SendPhoto::new(1, InputFile::file_id("AgAD")).caption("").params();
    assert!(matches!(params.get("photo"), Some(Param::File(InputFile::FileId(id))) if id == "AgAD"));
    assert!(params.get("caption").is_some_and(Param::is_empty));
}
