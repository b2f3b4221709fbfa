//! HTTPS transport backed by `reqwest`.
//!
//! Requests without uploads go out as a JSON body. Requests with at least one
//! upload go out as `multipart/form-data`: strings as plain text fields,
//! other JSON values as their JSON text, uploads as streamed file parts.
//! Uploads nested inside a list are sent as parts named `<key>_<index>` and
//! replaced in the list by `attach://<key>_<index>`.

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde_json::Value;
use tokio_util::io::ReaderStream;

use crate::config::{Config, DEFAULT_API_URL};
use crate::errors::TransportError;
use crate::prepare::{PreparedRequest, PreparedValue, Upload, UploadContent};
use crate::transport::{Transport, unwrap_envelope};

// ─── HttpTransport ────────────────────────────────────────────────────────────

/// The default [`Transport`]: one HTTPS POST per call, no retries.
#[derive(Clone)]
pub struct HttpTransport {
    http:    reqwest::Client,
    config:  Config,
}

impl HttpTransport {
    /// Talk to the public Bot API server with `token`.
    pub fn new(token: impl Into<String>) -> Result<Self, TransportError> {
        Self::from_config(&Config::new(token))
    }

    pub fn from_config(config: &Config) -> Result<Self, TransportError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self::with_client(builder.build()?, config.clone()))
    }

    /// Use a preconfigured `reqwest` client (proxies, custom TLS, …).
    pub fn with_client(http: reqwest::Client, config: Config) -> Self {
        Self { http, config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Download the file at `file_path` (from `getFile`) into memory.
    pub async fn download(&self, file_path: &str) -> Result<Vec<u8>, TransportError> {
        let response = self.http.get(self.config.file_url(file_path)).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TransportError::Status { status: status.as_u16(), body });
        }
        Ok(response.bytes().await?.to_vec())
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn call(&self, method: &str, request: PreparedRequest) -> Result<String, TransportError> {
        let builder = self.http.post(self.config.method_url(method));
        let builder = if request.has_uploads() {
            builder.multipart(multipart_form(request)?)
        } else {
            let body = request.to_json().unwrap_or_else(|| Value::Object(Default::default()));
            builder.json(&body)
        };

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        tracing::trace!("[botwire] {method} → HTTP {status}, {} bytes", body.len());
        unwrap_envelope(status, &body)
    }

    fn name(&self) -> &str {
        if self.config.api_url == DEFAULT_API_URL { "http" } else { "http (local server)" }
    }
}

// ─── Multipart ────────────────────────────────────────────────────────────────

/// One `multipart/form-data` field, before it is handed to reqwest.
#[derive(Debug)]
enum Field {
    Text { name: String, value: String },
    File { name: String, upload: Upload },
}

fn multipart_form(request: PreparedRequest) -> Result<Form, TransportError> {
    let mut form = Form::new();
    for field in form_fields(request) {
        form = match field {
            Field::Text { name, value }  => form.text(name, value),
            Field::File { name, upload } => form.part(name, file_part(upload)?),
        };
    }
    Ok(form)
}

fn form_fields(request: PreparedRequest) -> Vec<Field> {
    let mut fields = Vec::with_capacity(request.len());
    for (key, value) in request {
        match value {
            PreparedValue::Json(Value::String(s)) => fields.push(Field::Text { name: key, value: s }),
            PreparedValue::Json(v)                => fields.push(Field::Text { name: key, value: v.to_string() }),
            PreparedValue::Upload(upload)         => fields.push(Field::File { name: key, upload }),
            PreparedValue::List(items) => {
                let mut parts = Vec::new();
                let rendered = render_list(&key, items, &mut parts);
                fields.push(Field::Text { name: key, value: rendered.to_string() });
                fields.extend(parts.into_iter().map(|(name, upload)| Field::File { name, upload }));
            }
        }
    }
    fields
}

/// Render a list as JSON, replacing each upload with `attach://<key>_<index>`
/// and collecting the upload under that name in `parts`.
fn render_list(key: &str, items: Vec<PreparedValue>, parts: &mut Vec<(String, Upload)>) -> Value {
    let rendered = items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            let name = format!("{key}_{index}");
            match item {
                PreparedValue::Json(v) => v,
                PreparedValue::Upload(upload) => {
                    let reference = Value::String(format!("attach://{name}"));
                    parts.push((name, upload));
                    reference
                }
                PreparedValue::List(inner) => render_list(&name, inner, parts),
            }
        })
        .collect();
    Value::Array(rendered)
}

fn file_part(upload: Upload) -> Result<Part, TransportError> {
    let Upload { name, mime, content } = upload;
    let part = match content {
        UploadContent::Bytes(data) => Part::bytes(data),
        UploadContent::File(file) => {
            let len = file.metadata()?.len();
            let stream = ReaderStream::new(tokio::fs::File::from_std(file));
            Part::stream_with_length(reqwest::Body::wrap_stream(stream), len)
        }
    };
    Ok(part.file_name(name).mime_str(&mime)?)
}

// ─── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::io::Write as _;
    use std::time::Duration;

    use serde_json::json;

    use super::*;

    fn request(entries: Vec<(&str, PreparedValue)>) -> PreparedRequest {
        entries.into_iter().map(|(k, v)| (k.to_owned(), v)).collect()
    }

    fn text<'a>(fields: &'a [Field], key: &str) -> Option<&'a str> {
        fields.iter().find_map(|f| match f {
            Field::Text { name, value } if name == key => Some(value.as_str()),
            _                                          => None,
        })
    }

    fn file<'a>(fields: &'a [Field], key: &str) -> Option<&'a Upload> {
        fields.iter().find_map(|f| match f {
            Field::File { name, upload } if name == key => Some(upload),
            _                                           => None,
        })
    }

    #[test]
    fn flat_uploads_become_named_parts() {
        let fields = form_fields(request(vec![
            ("chat_id",  PreparedValue::Json(json!(42))),
            ("caption",  PreparedValue::Json(json!("quarterly <b>numbers</b>"))),
            ("silent",   PreparedValue::Json(json!(true))),
            ("document", PreparedValue::Upload(Upload::bytes("report.pdf", b"%PDF".to_vec()))),
        ]));

        assert_eq!(fields.len(), 4);
        assert_eq!(text(&fields, "chat_id"), Some("42"));
        assert_eq!(text(&fields, "caption"), Some("quarterly <b>numbers</b>"));
        assert_eq!(text(&fields, "silent"), Some("true"));
        let upload = file(&fields, "document").unwrap();
        assert_eq!(upload.name, "report.pdf");
        assert_eq!(upload.mime, "application/pdf");
    }

    #[test]
    fn objects_go_out_as_json_text() {
        let markup = json!({ "inline_keyboard": [[{ "text": "Yes", "callback_data": "y" }]] });
        let fields = form_fields(request(vec![
            ("reply_markup", PreparedValue::Json(markup.clone())),
            ("photo",        PreparedValue::Upload(Upload::bytes("cat.png", vec![0x89]))),
        ]));
        let sent: Value = serde_json::from_str(text(&fields, "reply_markup").unwrap()).unwrap();
        assert_eq!(sent, markup);
    }

    #[test]
    fn list_uploads_are_referenced_by_attach_names() {
        let fields = form_fields(request(vec![(
            "files",
            PreparedValue::List(vec![
                PreparedValue::Json(json!("x")),
                PreparedValue::Upload(Upload::bytes("a.txt", b"hi".to_vec())),
            ]),
        )]));

        let listed: Value = serde_json::from_str(text(&fields, "files").unwrap()).unwrap();
        assert_eq!(listed, json!(["x", "attach://files_1"]));
        assert_eq!(file(&fields, "files_1").map(|u| u.name.as_str()), Some("a.txt"));
        assert!(file(&fields, "files_0").is_none());
    }

    #[test]
    fn nested_list_uploads_get_path_names() {
        let fields = form_fields(request(vec![(
            "files",
            PreparedValue::List(vec![PreparedValue::List(vec![
                PreparedValue::Json(json!({ "type": "photo", "media": "AgAD" })),
                PreparedValue::Upload(Upload::bytes("b.jpg", vec![0xFF])),
            ])]),
        )]));

        let listed: Value = serde_json::from_str(text(&fields, "files").unwrap()).unwrap();
        assert_eq!(listed, json!([[{ "type": "photo", "media": "AgAD" }, "attach://files_0_1"]]));
        assert_eq!(file(&fields, "files_0_1").map(|u| u.mime.as_str()), Some("image/jpeg"));
    }

    #[tokio::test]
    async fn open_files_stream_into_the_form() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::File::create(&path).unwrap().write_all(b"hello").unwrap();

        let form = multipart_form(request(vec![
            ("chat_id",  PreparedValue::Json(json!(1))),
            ("document", PreparedValue::Upload(Upload::open(&path).unwrap())),
        ]))
        .unwrap();
        assert!(!form.boundary().is_empty());
    }

    #[tokio::test]
    async fn network_errors_do_not_reveal_the_token() {
        let config = Config {
            api_url: "http://127.0.0.1:9".into(),
            timeout: Some(Duration::from_secs(5)),
            ..Config::new("123:SUPERSECRET")
        };
        let transport = HttpTransport::from_config(&config).unwrap();

        let err = transport.call("getMe", PreparedRequest::default()).await.unwrap_err();
        assert!(matches!(err, TransportError::Http(_)), "{err:?}");
        let shown = format!("{err} / {err:?}");
        assert!(!shown.contains("SUPERSECRET"), "{shown}");

        let err = transport.download("photos/file_0.jpg").await.unwrap_err();
        assert!(!format!("{err} / {err:?}").contains("SUPERSECRET"));
    }
}
