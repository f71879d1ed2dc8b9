//! Editor state provider for Cardsmith.
//!
//! The [`EditorStore`] owns the card being edited and the preview side. All
//! writes go through its methods, each of which replaces the card with a new
//! state; every replacement re-runs the pure renderer in the preview.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! let store = EditorStore::provide(CardDefaults::fresh());
//!
//! // In child components
//! let store = use_editor();
//! store.set_field(CardField::StudentName, "Ann".to_string());
//! ```

use std::path::PathBuf;

use cardsmith_core::{
    CardDefaults, CardField, CardState, ExportGate, ImageRef, ImageSlot, Side, ThemeColor,
    ThemePatch,
};
use dioxus::prelude::*;

/// Observable state of the export control.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ExportStatus {
    #[default]
    Idle,
    InProgress,
}

/// Short-lived message shown in the header.
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub text: String,
    pub is_error: bool,
}

/// Handle to the editor state shared with every component.
#[derive(Clone, Copy, PartialEq)]
pub struct EditorStore {
    /// The card being edited
    pub card: Signal<CardState>,
    /// Side shown in the preview and exported
    pub side: Signal<Side>,
    /// Export button state
    pub export_status: Signal<ExportStatus>,
    /// Non-blocking message for the user
    pub notice: Signal<Option<Notice>>,
    defaults: Signal<CardDefaults>,
    gate: Signal<ExportGate>,
}

impl EditorStore {
    /// Create the store from the session defaults and provide it as context.
    pub fn provide(defaults: CardDefaults) -> Self {
        use_context_provider(move || Self {
            card: Signal::new(defaults.build()),
            side: Signal::new(Side::Front),
            export_status: Signal::new(ExportStatus::Idle),
            notice: Signal::new(None),
            defaults: Signal::new(defaults),
            gate: Signal::new(ExportGate::new()),
        })
    }

    /// Replace one text field.
    pub fn set_field(mut self, field: CardField, value: String) {
        let next = self.card.read().with_field(field, value);
        self.card.set(next);
    }

    /// Set or clear one image slot.
    pub fn set_image(mut self, slot: ImageSlot, image: Option<ImageRef>) {
        tracing::debug!(?slot, present = image.is_some(), "Image slot updated");
        let next = self.card.read().with_image(slot, image);
        self.card.set(next);
    }

    /// Replace one palette color.
    pub fn set_color(mut self, slot: ThemeColor, value: String) {
        let next = self.card.read().with_theme(ThemePatch::single(slot, value));
        self.card.set(next);
    }

    /// Show `side` in the preview. The card itself is untouched.
    pub fn show_side(mut self, side: Side) {
        self.side.set(side);
    }

    /// Discard every edit and restore the session's default card.
    pub fn reset(mut self) {
        let fresh = self.defaults.read().build();
        tracing::info!("Editor reset to defaults");
        self.card.set(fresh);
    }

    pub fn gate(&self) -> ExportGate {
        self.gate.read().clone()
    }

    pub fn exporting(&self) -> bool {
        *self.export_status.read() == ExportStatus::InProgress
    }

    pub fn notify(mut self, text: impl Into<String>, is_error: bool) {
        self.notice.set(Some(Notice {
            text: text.into(),
            is_error,
        }));
    }

    pub fn dismiss_notice(mut self) {
        self.notice.set(None);
    }
}

/// Hook to access the editor store from context.
pub fn use_editor() -> EditorStore {
    use_context::<EditorStore>()
}

/// Directory exported PNGs are written to.
pub fn get_export_dir() -> PathBuf {
    crate::get_export_dir()
}
