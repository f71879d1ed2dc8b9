//! Cardsmith Core Library
//!
//! State, rendering and export for two-sided identity cards.
//!
//! ## Overview
//!
//! A [`CardState`] holds every editable field of one card. The renderer turns
//! a state and a [`Side`] into SVG markup; the same markup is shown in the
//! editor preview and rasterized to PNG on export. The front carries a QR
//! code whose [`QrPayload`] is a five-key JSON object.
//!
//! ## Quick Start
//!
//! ```ignore
//! use cardsmith_core::{render_card, CardDefaults, CardField, Side};
//!
//! let defaults = CardDefaults::fresh();
//! let card = defaults
//!     .build()
//!     .with_field(CardField::StudentName, "Jane Doe")
//!     .with_field(CardField::StudentId, "STU-2024-001");
//!
//! let svg = render_card(&card, Side::Front);
//! println!("{}", svg);
//! ```

pub mod error;
pub mod export;
pub mod intake;
pub mod qr;
pub mod render;
pub mod state;
pub mod theme;

// Re-exports
pub use error::{CardError, CardResult};
pub use export::{
    export_file_name, export_png, export_side, ExportGate, ExportTicket, Rasterizer,
    EXPORT_SCALE, SETTLE_DELAY,
};
pub use intake::{image_ref_from_bytes, intake, load_image, IntakeOutcome};
pub use qr::{QrPayload, QrSymbol};
pub use render::{render_card, CardSvg, Side, CARD_HEIGHT, CARD_WIDTH};
pub use state::{
    CardDefaults, CardField, CardSerial, CardState, ImageRef, ImageSlot, DEFAULT_INSTRUCTIONS,
};
pub use theme::{to_rgba, Theme, ThemeColor, ThemePatch};
