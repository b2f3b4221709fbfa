use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

/// Telegram Passport data shared with the bot by the user.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PassportData {
    pub data: Vec<EncryptedPassportElement>,
    /// Required to decrypt the data.
    pub credentials: EncryptedCredentials,
}

/// A file uploaded to Telegram Passport. Files are in JPEG format.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PassportFile {
    pub file_id: String,
    pub file_unique_id: String,
    pub file_size: i64,
    /// Unix time when the file was uploaded.
    pub file_date: i64,
}

/// Documents or other Telegram Passport elements shared with the bot.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EncryptedPassportElement {
    #[serde(rename = "type")]
    pub kind: String,
    /// Base64-encoded encrypted data.
    pub data: Option<String>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    pub files: Option<Vec<PassportFile>>,
    pub front_side: Option<PassportFile>,
    pub reverse_side: Option<PassportFile>,
    pub selfie: Option<PassportFile>,
    pub translation: Option<Vec<PassportFile>>,
    /// Base64-encoded element hash, for `PassportElementError*`.
    pub hash: String,
}

#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EncryptedCredentials {
    pub data: String,
    pub hash: String,
    /// Secret, encrypted with the bot's public RSA key.
    pub secret: String,
}

// ─── PassportElementError ─────────────────────────────────────────────────────

/// An error in the Telegram Passport element which was submitted that
/// should be resolved by the user. Tagged on the wire by `source`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum PassportElementError {
    /// An issue in one of the data fields.
    Data {
        #[serde(rename = "type")]
        kind: String,
        field_name: String,
        data_hash: String,
        message: String,
    },
    FrontSide {
        #[serde(rename = "type")]
        kind: String,
        file_hash: String,
        message: String,
    },
    ReverseSide {
        #[serde(rename = "type")]
        kind: String,
        file_hash: String,
        message: String,
    },
    Selfie {
        #[serde(rename = "type")]
        kind: String,
        file_hash: String,
        message: String,
    },
    File {
        #[serde(rename = "type")]
        kind: String,
        file_hash: String,
        message: String,
    },
    Files {
        #[serde(rename = "type")]
        kind: String,
        file_hashes: Vec<String>,
        message: String,
    },
    TranslationFile {
        #[serde(rename = "type")]
        kind: String,
        file_hash: String,
        message: String,
    },
    TranslationFiles {
        #[serde(rename = "type")]
        kind: String,
        file_hashes: Vec<String>,
        message: String,
    },
    /// An issue in an unspecified place.
    Unspecified {
        #[serde(rename = "type")]
        kind: String,
        element_hash: String,
        message: String,
    },
}

impl PassportElementError {
    /// The error text shown to the user.
    pub fn message(&self) -> &str {
        match self {
            Self::Data { message, .. }
            | Self::FrontSide { message, .. }
            | Self::ReverseSide { message, .. }
            | Self::Selfie { message, .. }
            | Self::File { message, .. }
            | Self::Files { message, .. }
            | Self::TranslationFile { message, .. }
            | Self::TranslationFiles { message, .. }
            | Self::Unspecified { message, .. } => message,
        }
    }
}

remote_types!(
    PassportData,
    PassportFile,
    EncryptedPassportElement,
    EncryptedCredentials,
    PassportElementError,
);
