//! Face Customization Record
//!
//! `face.json` is the customization record of the archive: the face type,
//! the customization knobs whose meaning depends on that type, and the
//! named complication slots. Several wire keys are multi-word strings
//! ("face type", "top left") rather than identifier-safe names; those
//! remappings are a compatibility requirement and are re-emitted exactly
//! on encode.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The customization record of a watch face.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Face {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(rename = "face type")]
    pub face_type: FaceType,
    /// Absent for some face types; absence is distinct from `false` and is
    /// preserved on re-encode.
    #[serde(rename = "resource directory", skip_serializing_if = "Option::is_none")]
    pub resource_directory: Option<bool>,
    pub customization: Customization,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub complications: Option<Complications>,
}

fn default_version() -> u32 {
    4
}

/// Closed enumeration of known face types.
///
/// Decoding any other string fails with an unknown-face-type error. Device
/// software may introduce face types this model does not know yet, and
/// failing loudly beats mis-decoding the rest of the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaceType {
    /// Uses color/content/position customization; slots top and bottom
    Photos,
    /// Uses content/style customization; corner and bottom-center slots
    Kaleidoscope,
    /// aka infograph; no customization knobs
    WhistlerAnalog,
}

impl FaceType {
    /// The wire spelling of this face type.
    pub fn as_str(&self) -> &'static str {
        match self {
            FaceType::Photos => "photos",
            FaceType::Kaleidoscope => "kaleidoscope",
            FaceType::WhistlerAnalog => "whistler-analog",
        }
    }
}

impl Serialize for FaceType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for FaceType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        match raw.as_str() {
            "photos" => Ok(FaceType::Photos),
            "kaleidoscope" => Ok(FaceType::Kaleidoscope),
            "whistler-analog" => Ok(FaceType::WhistlerAnalog),
            other => Err(D::Error::custom(format!("unknown face type `{}`", other))),
        }
    }
}

/// Face customization knobs.
///
/// All four fields are independently optional; which combinations are legal
/// depends on the face type (photos: color/content/position, kaleidoscope:
/// content/style, whistler-analog: none). The model does not enforce that
/// cross-field rule.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Customization {
    /// photos: "none"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// photos: "custom", kaleidoscope: "asset custom"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// "top"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    /// kaleidoscope: "radial"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
}

/// The fixed closed set of named complication slots.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Complications {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<ComplicationItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom: Option<ComplicationItem>,
    #[serde(rename = "top left", skip_serializing_if = "Option::is_none")]
    pub top_left: Option<ComplicationItem>,
    #[serde(rename = "top right", skip_serializing_if = "Option::is_none")]
    pub top_right: Option<ComplicationItem>,
    #[serde(rename = "bottom left", skip_serializing_if = "Option::is_none")]
    pub bottom_left: Option<ComplicationItem>,
    #[serde(rename = "bottom center", skip_serializing_if = "Option::is_none")]
    pub bottom_center: Option<ComplicationItem>,
    #[serde(rename = "bottom right", skip_serializing_if = "Option::is_none")]
    pub bottom_right: Option<ComplicationItem>,
    #[serde(rename = "slot 1", skip_serializing_if = "Option::is_none")]
    pub slot_1: Option<ComplicationItem>,
    #[serde(rename = "slot 2", skip_serializing_if = "Option::is_none")]
    pub slot_2: Option<ComplicationItem>,
    #[serde(rename = "slot 3", skip_serializing_if = "Option::is_none")]
    pub slot_3: Option<ComplicationItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bezel: Option<ComplicationItem>,
}

/// One occupied complication slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplicationItem {
    /// "date", "weather", "heartrate", "com.apple.shortcuts.watch"
    pub app: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<String>,
    #[serde(
        rename = "complication descriptor",
        skip_serializing_if = "Option::is_none"
    )]
    pub complication_descriptor: Option<ComplicationDescriptor>,
}

/// Rich descriptor carried by third-party complications.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplicationDescriptor {
    pub display_name: String,
    /// Family codes 0 through 12
    pub supported_families: Vec<i32>,
    /// UUID string
    pub identifier: String,
    /// Base64 of an archived user-activity payload; carried opaque
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_activity: Option<String>,
}
