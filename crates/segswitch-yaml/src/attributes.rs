//! Style attributes loaded from YAML.
//!
//! A style document is a flat mapping of the attribute names a switch
//! recognizes:
//!
//! ```yaml
//! backgroundColor: "#333333"
//! cursorColor: 4278255360     # packed 0xAARRGGBB
//! checkedTextColor: "#ffffff"
//! uncheckedTextColor: "#ffffffcc"
//! leftText: "on"
//! rightText: "off"
//! ```
//!
//! Every attribute is optional. Colors are validated while loading, so a
//! widget consuming [`StyleAttributes`] never sees a malformed value.

use crate::error::ParseError;
use segswitch_core::Color;
use serde::{Deserialize, Serialize};

/// Names of every recognized attribute, in document order.
pub const ATTRIBUTE_NAMES: [&str; 6] = [
    "backgroundColor",
    "cursorColor",
    "checkedTextColor",
    "uncheckedTextColor",
    "leftText",
    "rightText",
];

/// Validated style attributes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleAttributes {
    /// Fill color of the track
    pub background_color: Option<Color>,
    /// Fill color of the active indicator
    pub cursor_color: Option<Color>,
    /// Color of the left ("on") label
    pub checked_text_color: Option<Color>,
    /// Color of the right ("off") label
    pub unchecked_text_color: Option<Color>,
    /// Left label text
    pub left_text: Option<String>,
    /// Right label text
    pub right_text: Option<String>,
}

/// A color as written in a style document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
enum ColorValue {
    /// Packed `0xAARRGGBB`
    Argb(u32),
    /// `#rrggbb` or `#rrggbbaa`
    Hex(String),
}

impl ColorValue {
    fn resolve(&self, field: &str) -> Result<Color, ParseError> {
        match self {
            Self::Argb(argb) => Ok(Color::from_argb(*argb)),
            Self::Hex(hex) => Color::from_hex(hex).map_err(|e| ParseError::InvalidValue {
                field: field.to_string(),
                message: e.to_string(),
            }),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct RawAttributes {
    #[serde(default)]
    background_color: Option<ColorValue>,
    #[serde(default)]
    cursor_color: Option<ColorValue>,
    #[serde(default)]
    checked_text_color: Option<ColorValue>,
    #[serde(default)]
    unchecked_text_color: Option<ColorValue>,
    #[serde(default)]
    left_text: Option<String>,
    #[serde(default)]
    right_text: Option<String>,
}

fn resolve(value: Option<&ColorValue>, field: &str) -> Result<Option<Color>, ParseError> {
    value.map(|v| v.resolve(field)).transpose()
}

impl StyleAttributes {
    /// Parse and validate a style document.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed, names an unknown attribute,
    /// or holds a color that cannot be parsed.
    pub fn from_yaml(yaml: &str) -> Result<Self, ParseError> {
        let raw: RawAttributes = serde_yaml_ng::from_str(yaml)?;
        Ok(Self {
            background_color: resolve(raw.background_color.as_ref(), ATTRIBUTE_NAMES[0])?,
            cursor_color: resolve(raw.cursor_color.as_ref(), ATTRIBUTE_NAMES[1])?,
            checked_text_color: resolve(raw.checked_text_color.as_ref(), ATTRIBUTE_NAMES[2])?,
            unchecked_text_color: resolve(raw.unchecked_text_color.as_ref(), ATTRIBUTE_NAMES[3])?,
            left_text: raw.left_text,
            right_text: raw.right_text,
        })
    }

    /// True when no attribute is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
