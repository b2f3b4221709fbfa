use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::PhotoSize;

#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sticker {
    pub file_id: String,
    pub file_unique_id: String,
    pub width: i32,
    pub height: i32,
    pub is_animated: bool,
    /// In `.webp` or `.jpg` format.
    pub thumb: Option<PhotoSize>,
    pub emoji: Option<String>,
    pub set_name: Option<String>,
    /// For mask stickers, where the mask should be placed.
    pub mask_position: Option<MaskPosition>,
    pub file_size: Option<i64>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StickerSet {
    pub name: String,
    pub title: String,
    pub is_animated: bool,
    pub contains_masks: bool,
    pub stickers: Vec<Sticker>,
    /// In `.webp`, `.tgs` or `.jpg` format.
    pub thumb: Option<PhotoSize>,
}

/// Where a mask should be placed on a face by default.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MaskPosition {
    /// One of `forehead`, `eyes`, `mouth` or `chin`.
    pub point: String,
    /// Shift by X-axis measured in widths of the mask scaled to the face size.
    pub x_shift: f64,
    pub y_shift: f64,
    pub scale: f64,
}

remote_types!(Sticker, StickerSet, MaskPosition);
