//! Scannable code: the payload a scanner reads and the symbol drawn on the card.
//!
//! The payload carries five fields under short keys:
//!
//! ```text
//! {"id":"STU-1","name":"Ann","prog":"CS","blood":"O+","exp":"2025-01-01"}
//! ```
//!
//! The symbol always uses error correction level H so a logo can sit on top
//! of it. Modules under the logo are cleared ("excavated") rather than
//! painted over.

use std::fmt::Write as _;

use qrcode::{Color, EcLevel, QrCode};
use serde::{Deserialize, Serialize};

use crate::error::CardResult;
use crate::state::{CardState, ImageRef};

/// Logo edge relative to the symbol edge (14 px on a 60 px code).
pub const LOGO_FRACTION: f64 = 14.0 / 60.0;

/// Structured text embedded in the card's QR code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QrPayload {
    pub id: String,
    pub name: String,
    pub prog: String,
    pub blood: String,
    pub exp: String,
}

impl QrPayload {
    pub fn from_state(state: &CardState) -> Self {
        Self {
            id: state.student_id.clone(),
            name: state.student_name.clone(),
            prog: state.program.clone(),
            blood: state.blood_group.clone(),
            exp: state.expiry_date.clone(),
        }
    }

    /// Compact JSON with keys in `id, name, prog, blood, exp` order.
    pub fn to_json(&self) -> CardResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Cell rectangle cleared under a centered logo, in module units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Excavation {
    pub x: usize,
    pub y: usize,
    pub w: usize,
    pub h: usize,
}

impl Excavation {
    /// Every cell touched by a centered box `fraction` of the symbol wide.
    pub fn centered(width: usize, fraction: f64) -> Self {
        let size = width as f64 * fraction;
        let start = width as f64 / 2.0 - size / 2.0;
        let x = start.floor();
        let w = (size + start - x).ceil();
        let (x, w) = (x.max(0.0) as usize, w as usize);
        Self { x, y: x, w, h: w }
    }

    fn contains(&self, col: usize, row: usize) -> bool {
        (self.x..self.x + self.w).contains(&col) && (self.y..self.y + self.h).contains(&row)
    }
}

/// Encoded QR module grid, without a quiet zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrSymbol {
    width: usize,
    modules: Vec<bool>,
    excavation: Option<Excavation>,
}

impl QrSymbol {
    /// Encode `data` at level H, clearing room for a logo if requested.
    pub fn encode(data: &str, excavate_logo: bool) -> CardResult<Self> {
        let code = QrCode::with_error_correction_level(data.as_bytes(), EcLevel::H)?;
        let width = code.width();
        let mut modules: Vec<bool> = code
            .to_colors()
            .into_iter()
            .map(|c| c == Color::Dark)
            .collect();

        let excavation = excavate_logo.then(|| Excavation::centered(width, LOGO_FRACTION));
        if let Some(cut) = excavation {
            for row in 0..width {
                for col in 0..width {
                    if cut.contains(col, row) {
                        modules[row * width + col] = false;
                    }
                }
            }
        }

        Ok(Self {
            width,
            modules,
            excavation,
        })
    }

    /// Modules per side
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn is_dark(&self, col: usize, row: usize) -> bool {
        self.modules[row * self.width + col]
    }

    pub fn excavation(&self) -> Option<Excavation> {
        self.excavation
    }

    /// SVG fragment drawing the symbol in a `size` square at (`x`, `y`).
    ///
    /// Dark modules are painted in `fg`; light modules stay transparent. The
    /// logo, when given, is centered at [`LOGO_FRACTION`] of `size`.
    pub fn to_svg(&self, x: f64, y: f64, size: f64, fg: &str, logo: Option<&ImageRef>) -> String {
        let scale = size / self.width as f64;
        let mut path = String::new();
        for row in 0..self.width {
            for col in 0..self.width {
                if self.is_dark(col, row) {
                    let _ = write!(path, "M{} {}h1v1h-1z", col, row);
                }
            }
        }

        let mut out = String::new();
        let _ = write!(
            out,
            "<g transform=\"translate({} {}) scale({})\"><path fill=\"{}\" shape-rendering=\"crispEdges\" d=\"{}\"/></g>",
            x,
            y,
            scale,
            html_escape::encode_double_quoted_attribute(fg),
            path
        );

        if let Some(logo) = logo {
            let edge = size * LOGO_FRACTION;
            let _ = write!(
                out,
                "<image x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" preserveAspectRatio=\"xMidYMid meet\" href=\"{}\"/>",
                x + (size - edge) / 2.0,
                y + (size - edge) / 2.0,
                edge,
                edge,
                html_escape::encode_double_quoted_attribute(logo.as_str())
            );
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{CardField, CardSerial};

    fn sample_state() -> CardState {
        CardState::new(CardSerial::new("SN-123456"))
            .with_field(CardField::StudentId, "STU-1")
            .with_field(CardField::StudentName, "Ann")
            .with_field(CardField::Program, "CS")
            .with_field(CardField::BloodGroup, "O+")
            .with_field(CardField::ExpiryDate, "2025-01-01")
            .with_field(CardField::CollegeName, "not in payload")
    }

    #[test]
    fn payload_has_five_short_keys() {
        let payload = QrPayload::from_state(&sample_state());
        assert_eq!(
            payload,
            QrPayload {
                id: "STU-1".into(),
                name: "Ann".into(),
                prog: "CS".into(),
                blood: "O+".into(),
                exp: "2025-01-01".into(),
            }
        );
        assert_eq!(
            payload.to_json().unwrap(),
            r#"{"id":"STU-1","name":"Ann","prog":"CS","blood":"O+","exp":"2025-01-01"}"#
        );
    }

    #[test]
    fn payload_json_parses_back_as_object() {
        let json = QrPayload::from_state(&sample_state()).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 5);
        assert_eq!(object["blood"], "O+");
    }

    #[test]
    fn excavation_covers_center() {
        // 25x25 symbol, logo box ~5.83 modules wide starting at ~9.58
        let cut = Excavation::centered(25, LOGO_FRACTION);
        assert_eq!(cut, Excavation { x: 9, y: 9, w: 7, h: 7 });
        assert!(cut.contains(12, 12));
        assert!(!cut.contains(8, 12));
        assert!(!cut.contains(16, 16));
    }

    #[test]
    fn logo_clears_modules() {
        let json = QrPayload::from_state(&sample_state()).to_json().unwrap();
        let plain = QrSymbol::encode(&json, false).unwrap();
        let holed = QrSymbol::encode(&json, true).unwrap();

        assert_eq!(plain.width(), holed.width());
        assert!(plain.excavation().is_none());
        let cut = holed.excavation().unwrap();
        for row in cut.y..cut.y + cut.h {
            for col in cut.x..cut.x + cut.w {
                assert!(!holed.is_dark(col, row));
            }
        }
        // Finder pattern corner is untouched
        assert!(holed.is_dark(0, 0));
        assert_eq!(plain.is_dark(0, 0), holed.is_dark(0, 0));
    }

    #[test]
    fn svg_uses_foreground_and_logo() {
        let symbol = QrSymbol::encode("hello", true).unwrap();
        let logo = ImageRef::from_data_uri("data:image/png;base64,AAAA");
        let svg = symbol.to_svg(10.0, 20.0, 60.0, "#111827", Some(&logo));
        assert!(svg.contains("fill=\"#111827\""));
        assert!(svg.contains("translate(10 20)"));
        assert!(svg.contains("href=\"data:image/png;base64,AAAA\""));

        let bare = symbol.to_svg(0.0, 0.0, 60.0, "#000000", None);
        assert!(!bare.contains("<image"));
    }
}
