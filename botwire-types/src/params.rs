//! Request parameter model.
//!
//! A [`Params`] map is built fresh for every call from the method's typed
//! arguments. Values stay typed ([`Param::Object`], [`Param::File`]) until the
//! client prepares the request, so rendering and file resolution happen in
//! exactly one place.

use std::path::{Path, PathBuf};

use crate::types::{ChatAction, ChatId, ParseMode};
use crate::wire::WireObject;

// ─── Param ────────────────────────────────────────────────────────────────────

/// One value in a request parameter map.
#[derive(Debug)]
pub enum Param {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    /// A Remote Type, rendered to wire form during preparation.
    Object(Box<dyn WireObject>),
    /// A file reference, resolved during preparation.
    File(InputFile),
    List(Vec<Param>),
}

impl Param {
    /// `true` for `Null`, an empty string or an empty list.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Null     => true,
            Self::Str(s)   => s.is_empty(),
            Self::List(l)  => l.is_empty(),
            _              => false,
        }
    }

    /// `true` for anything PHP's `array_filter` would drop: the empty values
    /// plus `false`, `0`, `0.0` and `"0"`.
    pub fn is_falsy(&self) -> bool {
        match self {
            Self::Bool(b)  => !*b,
            Self::Int(i)   => *i == 0,
            Self::Float(f) => *f == 0.0,
            Self::Str(s)   => s.is_empty() || s == "0",
            _              => self.is_empty(),
        }
    }
}

// ─── Params ───────────────────────────────────────────────────────────────────

/// Ordered map from wire parameter name to value.
#[derive(Debug, Default)]
pub struct Params {
    entries: Vec<(String, Param)>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `value` under `key`, replacing any previous value in place.
    pub fn push(&mut self, key: impl Into<String>, value: Param) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None       => self.entries.push((key, value)),
        }
    }

    /// Builder form of [`Params::push`] that converts the value for you.
    pub fn with(mut self, key: impl Into<String>, value: impl ToParam) -> Self {
        self.push(key, value.to_param());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Param> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    pub fn len(&self) -> usize { self.entries.len() }

    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Keep only the entries for which `keep` returns `true`.
    pub fn retain(&mut self, mut keep: impl FnMut(&str, &Param) -> bool) {
        self.entries.retain(|(k, v)| keep(k, v));
    }
}

impl IntoIterator for Params {
    type Item = (String, Param);
    type IntoIter = std::vec::IntoIter<(String, Param)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<K: Into<String>> FromIterator<(K, Param)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, Param)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (k, v) in iter {
            params.push(k, v);
        }
        params
    }
}

/// Strip the raw-identifier prefix so `r#type` goes out as `type`.
pub fn wire_key(field: &'static str) -> &'static str {
    field.strip_prefix("r#").unwrap_or(field)
}

// ─── InputFile ────────────────────────────────────────────────────────────────

/// A file to send: something already on Telegram's servers, something
/// Telegram can fetch, or local content to upload as a multipart attachment.
#[derive(Clone, Debug, PartialEq)]
pub enum InputFile {
    /// Identifier of a file already stored by Telegram.
    FileId(String),
    /// HTTP URL for Telegram to download.
    Url(String),
    /// Local file, opened and streamed when the request is prepared.
    Path(PathBuf),
    /// In-memory content.
    Memory { name: String, data: Vec<u8> },
}

impl InputFile {
    pub fn file_id(id: impl Into<String>) -> Self { Self::FileId(id.into()) }

    pub fn url(url: impl Into<String>) -> Self { Self::Url(url.into()) }

    pub fn path(path: impl AsRef<Path>) -> Self { Self::Path(path.as_ref().to_path_buf()) }

    pub fn memory(name: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        Self::Memory { name: name.into(), data: data.into() }
    }

    /// Classify a bare string: an existing local file, an `http(s)://` URL,
    /// or otherwise a Telegram file id.
    pub fn guess(value: impl Into<String>) -> Self {
        let value = value.into();
        if Path::new(&value).is_file() {
            Self::Path(PathBuf::from(value))
        } else if value.starts_with("http://") || value.starts_with("https://") {
            Self::Url(value)
        } else {
            Self::FileId(value)
        }
    }

    /// Whether preparing this reference produces an upload.
    pub fn is_upload(&self) -> bool {
        matches!(self, Self::Path(_) | Self::Memory { .. })
    }
}

/// Classifies with [`InputFile::guess`].
impl From<String> for InputFile {
    fn from(value: String) -> Self { Self::guess(value) }
}

/// Classifies with [`InputFile::guess`].
impl From<&str> for InputFile {
    fn from(value: &str) -> Self { Self::guess(value) }
}

impl From<PathBuf> for InputFile {
    fn from(path: PathBuf) -> Self { Self::Path(path) }
}

impl From<&Path> for InputFile {
    fn from(path: &Path) -> Self { Self::Path(path.to_path_buf()) }
}

// ─── ToParam ──────────────────────────────────────────────────────────────────

/// Conversion of a typed argument into a [`Param`].
pub trait ToParam {
    fn to_param(&self) -> Param;
}

impl ToParam for bool {
    fn to_param(&self) -> Param { Param::Bool(*self) }
}

impl ToParam for i32 {
    fn to_param(&self) -> Param { Param::Int(i64::from(*self)) }
}

impl ToParam for i64 {
    fn to_param(&self) -> Param { Param::Int(*self) }
}

impl ToParam for f64 {
    fn to_param(&self) -> Param { Param::Float(*self) }
}

impl ToParam for String {
    fn to_param(&self) -> Param { Param::Str(self.clone()) }
}

impl ToParam for &str {
    fn to_param(&self) -> Param { Param::Str((*self).to_owned()) }
}

impl ToParam for InputFile {
    fn to_param(&self) -> Param { Param::File(self.clone()) }
}

impl ToParam for ChatId {
    fn to_param(&self) -> Param {
        match self {
            ChatId::Id(id)         => Param::Int(*id),
            ChatId::Username(name) => Param::Str(name.clone()),
        }
    }
}

impl ToParam for ParseMode {
    fn to_param(&self) -> Param { Param::Str(self.as_str().to_owned()) }
}

impl ToParam for ChatAction {
    fn to_param(&self) -> Param { Param::Str(self.as_str().to_owned()) }
}

impl<T: ToParam> ToParam for Option<T> {
    fn to_param(&self) -> Param {
        match self {
            Some(v) => v.to_param(),
            None    => Param::Null,
        }
    }
}

impl<T: ToParam> ToParam for Vec<T> {
    fn to_param(&self) -> Param {
        Param::List(self.iter().map(ToParam::to_param).collect())
    }
}
