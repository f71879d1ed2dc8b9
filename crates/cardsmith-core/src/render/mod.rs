//! Card renderer: a pure function from ([`CardState`], [`Side`]) to SVG markup.
//!
//! The same markup feeds the live preview and the PNG export, so what the
//! user sees is exactly what gets rasterized. Rendering never mutates the
//! state and always produces byte-identical output for identical input.
//!
//! ## Layout
//!
//! Both sides share a 600x375 canvas with a white background and two faint
//! radial tints. See [`front`] and [`back`] for the per-side composition.

mod back;
mod front;

use std::borrow::Cow;
use std::fmt::{self, Write as _};
use std::str::FromStr;

use crate::error::CardError;
use crate::state::CardState;
use crate::theme::{to_rgba, Theme};

/// Logical card width in pixels
pub const CARD_WIDTH: u32 = 600;
/// Logical card height in pixels
pub const CARD_HEIGHT: u32 = 375;

pub(crate) const SANS: &str = "Helvetica, Arial, sans-serif";
pub(crate) const SERIF: &str = "Georgia, 'Times New Roman', serif";
pub(crate) const MONO: &str = "'Courier New', monospace";

/// Which face of the card is rendered or exported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Side {
    #[default]
    Front,
    Back,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Front => "front",
            Side::Back => "back",
        }
    }

    pub fn toggled(&self) -> Side {
        match self {
            Side::Front => Side::Back,
            Side::Back => Side::Front,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Side {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "front" => Ok(Side::Front),
            "back" => Ok(Side::Back),
            _ => Err(CardError::UnknownSide(s.to_string())),
        }
    }
}

/// Rendered SVG document for one side of a card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardSvg {
    markup: String,
    width: u32,
    height: u32,
}

impl CardSvg {
    /// Wrap existing markup with its logical size.
    pub fn from_markup(markup: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            markup: markup.into(),
            width,
            height,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.markup
    }

    pub fn into_string(self) -> String {
        self.markup
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}

impl fmt::Display for CardSvg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.markup)
    }
}

/// Render one side of the card.
pub fn render_card(state: &CardState, side: Side) -> CardSvg {
    let mut out = String::with_capacity(8 * 1024);
    let theme = &state.theme;

    let _ = write!(
        out,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" class=\"card-svg card-svg--{side}\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\" font-family=\"{font}\">",
        side = side,
        w = CARD_WIDTH,
        h = CARD_HEIGHT,
        font = SANS,
    );
    write_defs(&mut out, theme);
    let _ = write!(
        out,
        "<rect width=\"{w}\" height=\"{h}\" fill=\"#ffffff\"/><rect width=\"{w}\" height=\"{h}\" fill=\"url(#tint-primary)\"/><rect width=\"{w}\" height=\"{h}\" fill=\"url(#tint-secondary)\"/>",
        w = CARD_WIDTH,
        h = CARD_HEIGHT,
    );

    match side {
        Side::Front => front::render(&mut out, state),
        Side::Back => back::render(&mut out, state),
    }

    out.push_str("</svg>");
    CardSvg {
        markup: out,
        width: CARD_WIDTH,
        height: CARD_HEIGHT,
    }
}

fn write_defs(out: &mut String, theme: &Theme) {
    let primary = attr(&theme.primary_color);
    let secondary = attr(&theme.secondary_color);
    let _ = write!(
        out,
        "<defs>\
         <linearGradient id=\"accent\" x1=\"0\" y1=\"0\" x2=\"1\" y2=\"0\">\
         <stop offset=\"0\" stop-color=\"{primary}\"/><stop offset=\"1\" stop-color=\"{secondary}\"/>\
         </linearGradient>\
         <radialGradient id=\"tint-primary\" cx=\"0\" cy=\"0\" r=\"0.5\">\
         <stop offset=\"0\" stop-color=\"{tint_p}\"/><stop offset=\"1\" stop-color=\"{tint_p}\" stop-opacity=\"0\"/>\
         </radialGradient>\
         <radialGradient id=\"tint-secondary\" cx=\"1\" cy=\"1\" r=\"0.5\">\
         <stop offset=\"0\" stop-color=\"{tint_s}\"/><stop offset=\"1\" stop-color=\"{tint_s}\" stop-opacity=\"0\"/>\
         </radialGradient>\
         <clipPath id=\"portrait-clip\"><rect x=\"{px}\" y=\"{py}\" width=\"{pw}\" height=\"{ph}\" rx=\"6\"/></clipPath>\
         <clipPath id=\"instructions-clip\"><rect x=\"{ix}\" y=\"{iy}\" width=\"{iw}\" height=\"{ih}\"/></clipPath>\
         </defs>",
        primary = primary,
        secondary = secondary,
        tint_p = attr(&to_rgba(&theme.primary_color, 0.03)),
        tint_s = attr(&to_rgba(&theme.secondary_color, 0.03)),
        px = front::PORTRAIT.x,
        py = front::PORTRAIT.y,
        pw = front::PORTRAIT.w,
        ph = front::PORTRAIT.h,
        ix = back::INSTRUCTIONS.x,
        iy = back::INSTRUCTIONS.y,
        iw = back::INSTRUCTIONS.w,
        ih = back::INSTRUCTIONS.h,
    );
}

/// Axis-aligned box in card coordinates.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Frame {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

/// Text run with its presentation attributes.
pub(crate) struct Text<'a> {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub fill: &'a str,
    pub weight: u16,
    pub anchor: &'static str,
    pub family: Option<&'static str>,
    pub opacity: Option<f64>,
    pub letter_spacing: Option<f64>,
}

impl<'a> Text<'a> {
    pub fn at(x: f64, y: f64, size: f64, fill: &'a str) -> Self {
        Self {
            x,
            y,
            size,
            fill,
            weight: 400,
            anchor: "start",
            family: None,
            opacity: None,
            letter_spacing: None,
        }
    }

    pub fn weight(mut self, weight: u16) -> Self {
        self.weight = weight;
        self
    }

    pub fn anchor(mut self, anchor: &'static str) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn family(mut self, family: &'static str) -> Self {
        self.family = Some(family);
        self
    }

    pub fn opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity);
        self
    }

    pub fn spacing(mut self, letter_spacing: f64) -> Self {
        self.letter_spacing = Some(letter_spacing);
        self
    }

    pub fn write(&self, out: &mut String, content: &str) {
        let _ = write!(
            out,
            "<text x=\"{}\" y=\"{}\" font-size=\"{}\" font-weight=\"{}\" fill=\"{}\" text-anchor=\"{}\"",
            self.x,
            self.y,
            self.size,
            self.weight,
            attr(self.fill),
            self.anchor
        );
        if let Some(family) = self.family {
            let _ = write!(out, " font-family=\"{}\"", family);
        }
        if let Some(opacity) = self.opacity {
            let _ = write!(out, " fill-opacity=\"{}\"", opacity);
        }
        if let Some(spacing) = self.letter_spacing {
            let _ = write!(out, " letter-spacing=\"{}\"", spacing);
        }
        let _ = write!(out, ">{}</text>", html_escape::encode_text(content));
    }
}

/// Escape a value for use inside a double-quoted attribute.
pub(crate) fn attr(value: &str) -> Cow<'_, str> {
    html_escape::encode_double_quoted_attribute(value)
}

/// Embedded image filling `frame`.
pub(crate) fn image(out: &mut String, frame: Frame, href: &str, fit: &str, clip: Option<&str>) {
    let _ = write!(
        out,
        "<image x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" preserveAspectRatio=\"{}\"",
        frame.x, frame.y, frame.w, frame.h, fit
    );
    if let Some(clip) = clip {
        let _ = write!(out, " clip-path=\"url(#{})\"", clip);
    }
    let _ = write!(out, " href=\"{}\"/>", attr(href));
}

/// `value`, or `fallback` when the value is empty.
pub(crate) fn or_placeholder<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() {
        fallback
    } else {
        value
    }
}

/// Shorten `text` so it fits roughly `max_width` at `size`, ending in an ellipsis.
pub(crate) fn ellipsize(text: &str, size: f64, max_width: f64) -> Cow<'_, str> {
    // Average advance of uppercase sans glyphs
    let max_chars = (max_width / (size * 0.62)).floor().max(1.0) as usize;
    if text.chars().count() <= max_chars {
        return Cow::Borrowed(text);
    }
    let kept: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    Cow::Owned(format!("{}\u{2026}", kept.trim_end()))
}

/// Break `text` into lines of roughly `max_width` at `size`, on word
/// boundaries. Words wider than a line are split.
pub(crate) fn wrap_words(text: &str, size: f64, max_width: f64) -> Vec<String> {
    let max_chars = (max_width / (size * 0.62)).floor().max(1.0) as usize;
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        while word.len() > max_chars {
            if current_len > 0 {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            let rest = word.split_off(max_chars);
            lines.push(word.into_iter().collect());
            word = rest;
        }

        if current_len > 0 && current_len + 1 + word.len() > max_chars {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current_len += word.len();
        current.extend(word);
    }
    if current_len > 0 {
        lines.push(current);
    }
    lines
}
