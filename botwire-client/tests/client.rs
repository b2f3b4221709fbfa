//! Client behaviour against a recording in-memory transport.

use std::collections::VecDeque;
use std::io::Write as _;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use botwire_client::{
    ApiError, Client, Codec, InvocationError, PreparedRequest, Pruning, Transport, TransportError,
};
use botwire_types::methods::{GetUpdates, SendMessage};
use botwire_types::types::{InlineKeyboardButton, InlineKeyboardMarkup};
use botwire_types::{InputFile, OrBool, Params};
use serde_json::{Value, json};

// ─── Recorder ─────────────────────────────────────────────────────────────────

#[derive(Debug)]
struct Call {
    method:    String,
    json:      Option<Value>,
    keys:      Vec<String>,
    multipart: bool,
}

#[derive(Default)]
struct Recorder {
    replies: Mutex<VecDeque<Result<String, TransportError>>>,
    calls:   Mutex<Vec<Call>>,
}

impl Recorder {
    fn replying(replies: impl IntoIterator<Item = Result<Value, TransportError>>) -> Arc<Self> {
        let replies = replies.into_iter().map(|r| r.map(|v| v.to_string())).collect();
        Arc::new(Self { replies: Mutex::new(replies), ..Self::default() })
    }

    fn calls(&self) -> std::sync::MutexGuard<'_, Vec<Call>> {
        self.calls.lock().unwrap()
    }
}

#[async_trait]
impl Transport for Recorder {
    async fn call(&self, method: &str, request: PreparedRequest) -> Result<String, TransportError> {
        self.calls.lock().unwrap().push(Call {
            method:    method.to_owned(),
            json:      request.to_json(),
            keys:      request.keys().map(str::to_owned).collect(),
            multipart: request.has_uploads(),
        });
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Other("no reply queued".into())))
    }

    fn name(&self) -> &str {
        "recorder"
    }
}

fn client_with(recorder: &Arc<Recorder>, pruning: Pruning) -> Client {
    Client::from_parts(recorder.clone(), Codec::new(pruning))
}

fn message_json(id: i32, text: &str) -> Value {
    json!({
        "message_id": id,
        "date": 1_620_000_000,
        "chat": { "id": 42, "type": "private", "first_name": "Ada" },
        "from": { "id": 42, "is_bot": false, "first_name": "Ada" },
        "text": text,
    })
}

// ─── Dispatch & decoding ──────────────────────────────────────────────────────

#[tokio::test]
async fn send_message_prepares_and_decodes() {
    let recorder = Recorder::replying([Ok(message_json(7, "hi"))]);
    let client = client_with(&recorder, Pruning::Empty);

    let msg = client.send_message(42, "hi").await.unwrap();
    assert_eq!(msg.message_id, 7);
    assert_eq!(msg.chat.id, 42);
    assert_eq!(msg.text.as_deref(), Some("hi"));

    let calls = recorder.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].method, "sendMessage");
    assert_eq!(calls[0].json, Some(json!({ "chat_id": 42, "text": "hi" })));
    assert!(!calls[0].multipart);
}

#[tokio::test]
async fn nested_markup_is_rendered_to_wire_json() {
    let recorder = Recorder::replying([Ok(message_json(8, "pick"))]);
    let client = client_with(&recorder, Pruning::Empty);

    let markup = InlineKeyboardMarkup::new(vec![vec![InlineKeyboardButton::callback("Yes", "y")]]);
    client
        .invoke(&SendMessage::new("@channel", "pick").reply_markup(markup))
        .await
        .unwrap();

    let calls = recorder.calls();
    assert_eq!(
        calls[0].json,
        Some(json!({
            "chat_id": "@channel",
            "text": "pick",
            "reply_markup": { "inline_keyboard": [[{ "text": "Yes", "callback_data": "y" }]] },
        }))
    );
}

#[tokio::test]
async fn or_bool_returns_accept_both_shapes() {
    let recorder = Recorder::replying([Ok(json!(true)), Ok(message_json(9, "edited"))]);
    let client = client_with(&recorder, Pruning::Empty);

    let inline = client.edit_message_text("edited").await.unwrap();
    assert_eq!(inline, OrBool::Bool(true));

    let in_chat = client.edit_message_text("edited").await.unwrap();
    assert_eq!(in_chat.object().map(|m| m.message_id), Some(9));
}

#[tokio::test]
async fn scalar_returns_decode() {
    let recorder = Recorder::replying([Ok(json!(3)), Ok(json!("https://t.me/+abc"))]);
    let client = client_with(&recorder, Pruning::Empty);

    assert_eq!(client.get_chat_members_count(-100).await.unwrap(), 3);
    assert_eq!(client.export_chat_invite_link(-100).await.unwrap(), "https://t.me/+abc");
}

#[tokio::test]
async fn shape_mismatch_is_a_decode_error() {
    let recorder = Recorder::replying([Ok(json!("many"))]);
    let client = client_with(&recorder, Pruning::Empty);

    match client.get_chat_members_count(-100).await {
        Err(InvocationError::Decode { method, .. }) => assert_eq!(method, "getChatMembersCount"),
        other => panic!("expected a decode error, got {other:?}"),
    }
}

#[tokio::test]
async fn transport_errors_pass_through_unchanged() {
    let api = ApiError {
        code:               403,
        description:        "Forbidden: bot was blocked by the user".into(),
        retry_after:        None,
        migrate_to_chat_id: None,
    };
    let recorder = Recorder::replying([Err(TransportError::Api(api.clone()))]);
    let client = client_with(&recorder, Pruning::Empty);

    let err = client.send_message(42, "hello?").await.unwrap_err();
    assert_eq!(err.api(), Some(&api));
    assert!(err.is("forbidden: *"));
    assert_eq!(err.retry_after(), None);
}

#[tokio::test]
async fn invoke_raw_returns_json() {
    let recorder = Recorder::replying([Ok(json!({ "short_description": "hi" }))]);
    let client = client_with(&recorder, Pruning::Empty);

    let value = client
        .invoke_raw("getMyShortDescription", Params::new().with("language_code", "en"))
        .await
        .unwrap();
    assert_eq!(value["short_description"], "hi");
    assert_eq!(recorder.calls()[0].method, "getMyShortDescription");
}

// ─── Pruning ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn default_pruning_keeps_zero_offsets() {
    let recorder = Recorder::replying([Ok(json!([]))]);
    let client = client_with(&recorder, Pruning::Empty);

    client.invoke(&GetUpdates::new().offset(0i64)).await.unwrap();
    assert_eq!(recorder.calls()[0].json, Some(json!({ "offset": 0 })));
}

#[tokio::test]
async fn falsy_pruning_drops_zero_offsets() {
    let recorder = Recorder::replying([Ok(json!([]))]);
    let client = client_with(&recorder, Pruning::Falsy);

    client.invoke(&GetUpdates::new().offset(0i64).limit(10)).await.unwrap();
    assert_eq!(recorder.calls()[0].json, Some(json!({ "limit": 10 })));
}

// ─── Uploads ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn local_files_make_the_request_multipart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.pdf");
    std::fs::File::create(&path).unwrap().write_all(b"%PDF-1.4").unwrap();

    let recorder = Recorder::replying([Ok(message_json(10, ""))]);
    let client = client_with(&recorder, Pruning::Empty);
    client.send_document(42, InputFile::path(&path)).await.unwrap();

    let calls = recorder.calls();
    assert!(calls[0].multipart);
    assert_eq!(calls[0].json, None);
    assert_eq!(calls[0].keys, ["chat_id", "document"]);
}

#[tokio::test]
async fn missing_files_fail_before_dispatch() {
    let dir = tempfile::tempdir().unwrap();
    let recorder = Recorder::replying([]);
    let client = client_with(&recorder, Pruning::Empty);

    let err = client
        .send_photo(42, InputFile::path(dir.path().join("nope.jpg")))
        .await
        .unwrap_err();
    assert!(matches!(err, InvocationError::Upload { .. }), "{err}");
    assert!(recorder.calls().is_empty());
}

// ─── Updates ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn updates_advance_the_offset_past_each_batch() {
    let recorder = Recorder::replying([
        Ok(json!([{ "update_id": 10 }, { "update_id": 11 }])),
        Ok(json!([])),
        Ok(json!([{ "update_id": 12, "message": message_json(1, "/start") }])),
    ]);
    let client = client_with(&recorder, Pruning::Empty);
    let mut updates = client.updates().timeout(5);

    assert_eq!(updates.next().await.unwrap().update_id, 10);
    assert_eq!(updates.next().await.unwrap().update_id, 11);
    let third = updates.next().await.unwrap();
    assert_eq!(third.update_id, 12);
    assert_eq!(third.message().and_then(|m| m.text.as_deref()), Some("/start"));
    assert_eq!(updates.next_offset(), Some(13));

    let calls = recorder.calls();
    assert_eq!(calls.len(), 3);
    assert_eq!(calls[0].json, Some(json!({ "timeout": 5 })));
    assert_eq!(calls[1].json, Some(json!({ "offset": 12, "timeout": 5 })));
    assert_eq!(calls[2].json, Some(json!({ "offset": 12, "timeout": 5 })));
}

#[tokio::test]
async fn update_errors_surface_and_polling_resumes() {
    let recorder = Recorder::replying([
        Err(TransportError::Other("connection reset".into())),
        Ok(json!([{ "update_id": 1 }])),
    ]);
    let client = client_with(&recorder, Pruning::Empty);
    let mut updates = client.updates();

    assert!(updates.next().await.is_err());
    assert_eq!(updates.next().await.unwrap().update_id, 1);
}

// ─── Chat actions ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn typing_guard_sends_the_action_immediately() {
    let recorder = Recorder::replying([Ok(json!(true))]);
    let client = client_with(&recorder, Pruning::Empty);

    let guard = client.typing(42).await.unwrap();
    drop(guard);

    let calls = recorder.calls();
    assert_eq!(calls[0].method, "sendChatAction");
    assert_eq!(calls[0].json, Some(json!({ "chat_id": 42, "action": "typing" })));
}
