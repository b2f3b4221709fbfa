//! The [`RemoteType`] contract and JSON helpers.
//!
//! Wire form is the provider's JSON: snake_case keys, unset optional fields
//! omitted entirely (never `null`), required fields always present.

use std::fmt;

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Specialized `Result` for wire conversions.
pub type Result<T> = std::result::Result<T, serde_json::Error>;

// ─── RemoteType ───────────────────────────────────────────────────────────────

/// A record matching a schema defined by the Bot API.
///
/// Serialization is a pure function of the field values. Decoding ignores
/// unknown keys, leaves missing optional fields unset and fails on a missing
/// required field.
pub trait RemoteType:
    Serialize + DeserializeOwned + Clone + fmt::Debug + Send + Sync + 'static
{
    /// The type's name in the Bot API documentation.
    const NAME: &'static str;

    /// Link to this type's documentation anchor.
    fn doc_url() -> String {
        format!("https://core.telegram.org/bots/api#{}", Self::NAME.to_ascii_lowercase())
    }

    /// Render `self` to its wire form.
    fn to_wire(&self) -> Result<Value> {
        serde_json::to_value(self)
    }

    /// Populate a value from its wire form.
    fn from_wire(value: Value) -> Result<Self> {
        serde_json::from_value(value)
    }
}

/// Object-safe view of a [`RemoteType`], used to keep typed values inside a
/// [`crate::Params`] map until the request is prepared.
pub trait WireObject: fmt::Debug + Send + Sync {
    /// Render to wire form.
    fn wire_value(&self) -> Result<Value>;

    /// Name of the underlying type.
    fn type_name(&self) -> &'static str;
}

impl<T: RemoteType> WireObject for T {
    fn wire_value(&self) -> Result<Value> {
        self.to_wire()
    }

    fn type_name(&self) -> &'static str {
        T::NAME
    }
}

/// Decode any wire value from a JSON string.
pub fn from_str<T: DeserializeOwned>(json: &str) -> Result<T> {
    serde_json::from_str(json)
}

/// Encode any wire value to a JSON string.
pub fn to_string<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string(value)
}

// ─── OrBool ───────────────────────────────────────────────────────────────────

/// Two-member return shape: a full object, or a boolean sentinel.
///
/// Edit methods return the edited [`crate::types::Message`] for ordinary
/// messages and `true` for inline ones. The member is picked from the shape
/// of the decoded JSON: a bare boolean yields [`OrBool::Bool`], an object
/// yields [`OrBool::Object`], anything else is a decoding error.
#[derive(Clone, Debug, PartialEq)]
pub enum OrBool<T> {
    Object(T),
    Bool(bool),
}

impl<T> OrBool<T> {
    /// The object member, if that is what the server returned.
    pub fn object(self) -> Option<T> {
        match self {
            Self::Object(v) => Some(v),
            Self::Bool(_)   => None,
        }
    }

    /// `true` unless the server returned a bare `false`.
    pub fn is_success(&self) -> bool {
        !matches!(self, Self::Bool(false))
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for OrBool<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::Bool(b) => Ok(Self::Bool(b)),
            object @ Value::Object(_) => T::deserialize(object)
                .map(Self::Object)
                .map_err(D::Error::custom),
            other => Err(D::Error::custom(format_args!(
                "expected an object or a boolean, found `{other}`"
            ))),
        }
    }
}

impl<T: Serialize> Serialize for OrBool<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Self::Object(v) => v.serialize(serializer),
            Self::Bool(b)   => serializer.serialize_bool(*b),
        }
    }
}
