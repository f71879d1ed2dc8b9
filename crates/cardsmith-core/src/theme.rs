//! Card palette and color helpers.

use serde::{Deserialize, Serialize};

/// Four-color palette applied to a rendered card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    /// Accent bars, headings, the front pill and the first swatch
    pub primary_color: String,
    /// Second gradient stop and swatch
    pub secondary_color: String,
    /// Color of field labels and captions
    pub label_color: String,
    /// Color of field values and the QR modules
    pub value_color: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary_color: "#1e3a8a".to_string(),
            secondary_color: "#3b82f6".to_string(),
            label_color: "#4b5563".to_string(),
            value_color: "#111827".to_string(),
        }
    }
}

/// One of the four palette slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemeColor {
    Primary,
    Secondary,
    Label,
    Value,
}

impl ThemeColor {
    pub const ALL: [ThemeColor; 4] = [
        ThemeColor::Primary,
        ThemeColor::Secondary,
        ThemeColor::Label,
        ThemeColor::Value,
    ];

    /// Human label for color pickers
    pub fn display_name(&self) -> &'static str {
        match self {
            ThemeColor::Primary => "Primary",
            ThemeColor::Secondary => "Secondary",
            ThemeColor::Label => "Label text",
            ThemeColor::Value => "Value text",
        }
    }
}

/// Partial palette update. `None` keeps the current color.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemePatch {
    pub primary_color: Option<String>,
    pub secondary_color: Option<String>,
    pub label_color: Option<String>,
    pub value_color: Option<String>,
}

impl ThemePatch {
    /// Patch that replaces a single slot.
    pub fn single(slot: ThemeColor, value: impl Into<String>) -> Self {
        let value = Some(value.into());
        match slot {
            ThemeColor::Primary => Self {
                primary_color: value,
                ..Self::default()
            },
            ThemeColor::Secondary => Self {
                secondary_color: value,
                ..Self::default()
            },
            ThemeColor::Label => Self {
                label_color: value,
                ..Self::default()
            },
            ThemeColor::Value => Self {
                value_color: value,
                ..Self::default()
            },
        }
    }
}

impl Theme {
    pub fn color(&self, slot: ThemeColor) -> &str {
        match slot {
            ThemeColor::Primary => &self.primary_color,
            ThemeColor::Secondary => &self.secondary_color,
            ThemeColor::Label => &self.label_color,
            ThemeColor::Value => &self.value_color,
        }
    }

    /// Copy of this theme with every color present in `patch` replaced.
    pub fn merged(&self, patch: ThemePatch) -> Theme {
        Theme {
            primary_color: patch
                .primary_color
                .unwrap_or_else(|| self.primary_color.clone()),
            secondary_color: patch
                .secondary_color
                .unwrap_or_else(|| self.secondary_color.clone()),
            label_color: patch.label_color.unwrap_or_else(|| self.label_color.clone()),
            value_color: patch.value_color.unwrap_or_else(|| self.value_color.clone()),
        }
    }
}

/// Convert a `#rrggbb` color to `rgba(r, g, b, opacity)`.
///
/// Any other form (short hex, named colors, already-translucent values) is
/// returned unchanged.
pub fn to_rgba(color: &str, opacity: f32) -> String {
    match parse_hex6(color) {
        Some((r, g, b)) => format!("rgba({}, {}, {}, {})", r, g, b, opacity),
        None => color.to_string(),
    }
}

fn parse_hex6(color: &str) -> Option<(u8, u8, u8)> {
    let digits = color.strip_prefix('#')?;
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}
