//! Request preparation and response decoding.
//!
//! [`Codec`] turns the typed [`Params`] map built by a request struct into a
//! transport-ready [`PreparedRequest`], and decodes the transport's JSON back
//! into the declared return shape. It holds no state besides its
//! [`Pruning`] policy, so one instance is shared by every call a
//! [`crate::Client`] makes.
//!
//! Preparation is one pass:
//! 1. drop top-level parameters the pruning policy treats as absent;
//! 2. walk what is left, lists included: file references become strings or
//!    open uploads, Remote Types become their wire JSON, primitives pass
//!    through.
//!
//! Nothing here touches the network. The only side effect is opening local
//! files named by [`InputFile::Path`]; the handles move into the prepared
//! request and are closed once the transport has consumed it.

use std::fs;
use std::path::Path;

use botwire_types::{InputFile, Param, Params};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::errors::InvocationError;

// ─── Pruning ──────────────────────────────────────────────────────────────────

/// Which top-level parameters preparation drops.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Pruning {
    /// Drop `null`, empty strings and empty lists. Explicit `false` and `0`
    /// are sent.
    #[default]
    Empty,
    /// Also drop `false`, `0`, `0.0` and `"0"`, like a PHP `array_filter`.
    /// Kept for wire compatibility with clients that relied on it.
    Falsy,
}

impl Pruning {
    fn drops(self, value: &Param) -> bool {
        match self {
            Self::Empty => value.is_empty(),
            Self::Falsy => value.is_falsy(),
        }
    }
}

// ─── Upload ───────────────────────────────────────────────────────────────────

/// Bytes behind an [`Upload`].
#[derive(Debug)]
pub enum UploadContent {
    /// A local file opened during preparation.
    File(fs::File),
    /// In-memory content.
    Bytes(Vec<u8>),
}

/// A file part for a multipart request.
#[derive(Debug)]
pub struct Upload {
    /// File name sent in the part's `Content-Disposition`.
    pub name: String,
    /// MIME type guessed from the file name's extension.
    pub mime: String,
    pub content: UploadContent,
}

impl Upload {
    fn new(name: String, content: UploadContent) -> Self {
        let mime = mime_guess::from_path(&name).first_or_octet_stream().essence_str().to_owned();
        Self { name, mime, content }
    }

    /// Open `path` for streaming.
    pub fn open(path: &Path) -> Result<Self, InvocationError> {
        let file = fs::File::open(path).map_err(|source| InvocationError::Upload {
            path: path.to_path_buf(),
            source,
        })?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "file".to_owned());
        Ok(Self::new(name, UploadContent::File(file)))
    }

    pub fn bytes(name: impl Into<String>, data: Vec<u8>) -> Self {
        Self::new(name.into(), UploadContent::Bytes(data))
    }
}

// ─── PreparedValue ────────────────────────────────────────────────────────────

/// One prepared parameter value.
#[derive(Debug)]
pub enum PreparedValue {
    /// Plain JSON: primitives, rendered Remote Types, file ids and URLs.
    Json(Value),
    /// A file to stream as a multipart part.
    Upload(Upload),
    /// A list holding at least one upload. Lists without uploads collapse
    /// into [`PreparedValue::Json`].
    List(Vec<PreparedValue>),
}

impl PreparedValue {
    pub fn has_uploads(&self) -> bool {
        match self {
            Self::Json(_)    => false,
            Self::Upload(_)  => true,
            Self::List(list) => list.iter().any(Self::has_uploads),
        }
    }

    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Self::Json(v) => Some(v),
            _             => None,
        }
    }

    pub fn as_upload(&self) -> Option<&Upload> {
        match self {
            Self::Upload(u) => Some(u),
            _               => None,
        }
    }
}

// ─── PreparedRequest ──────────────────────────────────────────────────────────

/// The transport-ready form of a request: ordered `(key, value)` pairs.
#[derive(Debug, Default)]
pub struct PreparedRequest {
    entries: Vec<(String, PreparedValue)>,
}

impl PreparedRequest {
    pub fn get(&self, key: &str) -> Option<&PreparedValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn len(&self) -> usize { self.entries.len() }

    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PreparedValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Whether this request has to go out as multipart.
    pub fn has_uploads(&self) -> bool {
        self.entries.iter().any(|(_, v)| v.has_uploads())
    }

    /// The request as a JSON object, or `None` if it carries uploads.
    pub fn to_json(&self) -> Option<Value> {
        let mut map = serde_json::Map::with_capacity(self.entries.len());
        for (k, v) in &self.entries {
            map.insert(k.clone(), v.as_json()?.clone());
        }
        Some(Value::Object(map))
    }
}

impl IntoIterator for PreparedRequest {
    type Item = (String, PreparedValue);
    type IntoIter = std::vec::IntoIter<(String, PreparedValue)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl FromIterator<(String, PreparedValue)> for PreparedRequest {
    fn from_iter<I: IntoIterator<Item = (String, PreparedValue)>>(iter: I) -> Self {
        Self { entries: iter.into_iter().collect() }
    }
}

// ─── Codec ────────────────────────────────────────────────────────────────────

/// The serializer a [`crate::Client`] owns.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Codec {
    pruning: Pruning,
}

impl Codec {
    pub fn new(pruning: Pruning) -> Self {
        Self { pruning }
    }

    pub fn pruning(&self) -> Pruning {
        self.pruning
    }

    /// Prune and resolve a parameter map.
    pub fn prepare(&self, mut params: Params) -> Result<PreparedRequest, InvocationError> {
        let pruning = self.pruning;
        params.retain(|_, v| !pruning.drops(v));
        params
            .into_iter()
            .map(|(key, value)| {
                let prepared = resolve(&key, value)?;
                Ok((key, prepared))
            })
            .collect()
    }

    /// Decode the transport's `result` JSON into the declared shape.
    pub fn decode<T: DeserializeOwned>(&self, method: &str, body: &str) -> Result<T, InvocationError> {
        serde_json::from_str(body).map_err(|source| InvocationError::Decode {
            method: method.to_owned(),
            source,
        })
    }
}

fn resolve(key: &str, value: Param) -> Result<PreparedValue, InvocationError> {
    Ok(match value {
        Param::Null      => PreparedValue::Json(Value::Null),
        Param::Bool(b)   => PreparedValue::Json(Value::Bool(b)),
        Param::Int(i)    => PreparedValue::Json(Value::from(i)),
        Param::Float(f)  => PreparedValue::Json(Value::from(f)),
        Param::Str(s)    => PreparedValue::Json(Value::String(s)),
        Param::Object(o) => PreparedValue::Json(o.wire_value().map_err(|source| InvocationError::Encode {
            key: key.to_owned(),
            source,
        })?),
        Param::File(f)   => resolve_file(f)?,
        Param::List(items) => {
            let items = items
                .into_iter()
                .map(|item| resolve(key, item))
                .collect::<Result<Vec<_>, _>>()?;
            if items.iter().any(PreparedValue::has_uploads) {
                PreparedValue::List(items)
            } else {
                PreparedValue::Json(Value::Array(
                    items.into_iter().filter_map(|v| match v {
                        PreparedValue::Json(j) => Some(j),
                        _                      => None,
                    }).collect(),
                ))
            }
        }
    })
}

fn resolve_file(file: InputFile) -> Result<PreparedValue, InvocationError> {
    Ok(match file {
        InputFile::FileId(id)            => PreparedValue::Json(Value::String(id)),
        InputFile::Url(url)              => PreparedValue::Json(Value::String(url)),
        InputFile::Path(path)            => PreparedValue::Upload(Upload::open(&path)?),
        InputFile::Memory { name, data } => PreparedValue::Upload(Upload::bytes(name, data)),
    })
}

// ─── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use botwire_types::types::{LabeledPrice, MessageEntity};
    use serde_json::json;

    use super::*;

    fn params(entries: Vec<(&str, Param)>) -> Params {
        entries.into_iter().collect()
    }

    #[test]
    fn empty_values_are_pruned() {
        let req = Codec::default()
            .prepare(params(vec![
                ("text",    Param::Str("hi".into())),
                ("caption", Param::Str(String::new())),
                ("tags",    Param::List(vec![])),
                ("markup",  Param::Null),
            ]))
            .unwrap();
        assert_eq!(req.to_json(), Some(json!({ "text": "hi" })));
    }

    #[test]
    fn empty_pruning_keeps_false_and_zero() {
        let req = Codec::new(Pruning::Empty)
            .prepare(params(vec![
                ("offset",  Param::Int(0)),
                ("silent",  Param::Bool(false)),
                ("payload", Param::Str("0".into())),
            ]))
            .unwrap();
        assert_eq!(req.to_json(), Some(json!({ "offset": 0, "silent": false, "payload": "0" })));
    }

    #[test]
    fn falsy_pruning_drops_false_and_zero() {
        let req = Codec::new(Pruning::Falsy)
            .prepare(params(vec![
                ("offset",  Param::Int(0)),
                ("silent",  Param::Bool(false)),
                ("ratio",   Param::Float(0.0)),
                ("payload", Param::Str("0".into())),
                ("limit",   Param::Int(5)),
            ]))
            .unwrap();
        assert_eq!(req.to_json(), Some(json!({ "limit": 5 })));
    }

    #[test]
    fn nested_objects_in_lists_render_independently() {
        let list = vec![
            LabeledPrice::new("a", 1),
            LabeledPrice::new("b", 2),
        ];
        let req = Codec::default()
            .prepare(Params::new().with("prices", list))
            .unwrap();
        assert_eq!(
            req.get("prices").and_then(PreparedValue::as_json),
            Some(&json!([{ "label": "a", "amount": 1 }, { "label": "b", "amount": 2 }]))
        );
    }

    #[test]
    fn object_optionals_stay_omitted_after_preparation() {
        let entity = MessageEntity::new("bold", 0, 4);
        let req = Codec::default().prepare(Params::new().with("entities", vec![entity])).unwrap();
        assert_eq!(
            req.to_json(),
            Some(json!({ "entities": [{ "type": "bold", "offset": 0, "length": 4 }] }))
        );
    }

    #[test]
    fn file_ids_and_urls_pass_through_as_strings() {
        let req = Codec::default()
            .prepare(
                Params::new()
                    .with("photo", InputFile::file_id("AAQC-file-id"))
                    .with("thumb", InputFile::url("https://example.org/t.jpg")),
            )
            .unwrap();
        assert!(!req.has_uploads());
        assert_eq!(
            req.to_json(),
            Some(json!({ "photo": "AAQC-file-id", "thumb": "https://example.org/t.jpg" }))
        );
    }

    #[test]
    fn local_paths_become_open_uploads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cat.png");
        fs::File::create(&path).unwrap().write_all(b"\x89PNG").unwrap();

        let req = Codec::default().prepare(Params::new().with("photo", InputFile::path(&path))).unwrap();
        assert!(req.has_uploads());
        assert_eq!(req.to_json(), None);

        let upload = req.get("photo").and_then(PreparedValue::as_upload).unwrap();
        assert_eq!(upload.name, "cat.png");
        assert_eq!(upload.mime, "image/png");
        assert!(matches!(upload.content, UploadContent::File(_)));
    }

    #[test]
    fn missing_local_file_is_an_upload_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gone.jpg");
        let err = Codec::default()
            .prepare(Params::new().with("photo", InputFile::path(&path)))
            .unwrap_err();
        assert!(matches!(err, InvocationError::Upload { path: p, .. } if p == path));
    }

    #[test]
    fn lists_with_uploads_stay_lists() {
        let req = Codec::default()
            .prepare(Params::new().with(
                "files",
                vec![InputFile::file_id("x"), InputFile::memory("a.txt", b"hi".to_vec())],
            ))
            .unwrap();
        match req.get("files") {
            Some(PreparedValue::List(items)) => {
                assert_eq!(items[0].as_json(), Some(&json!("x")));
                assert_eq!(items[1].as_upload().map(|u| u.mime.as_str()), Some("text/plain"));
            }
            other => panic!("expected a list, got {other:?}"),
        }
    }

    #[test]
    fn decode_reports_the_method() {
        let err = Codec::default().decode::<i32>("getChatMembersCount", "\"many\"").unwrap_err();
        assert!(err.to_string().contains("getChatMembersCount"), "{err}");
    }
}
