//! Property-based tests for card state and rendering
//!
//! Uses proptest to verify that edits stay isolated, rendering is pure and
//! color conversion is exact.

use cardsmith_core::{
    render_card, to_rgba, CardDefaults, CardField, CardSerial, CardState, ImageRef, ImageSlot,
    QrPayload, Side, ThemeColor, ThemePatch, DEFAULT_INSTRUCTIONS,
};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

fn field_strategy() -> impl Strategy<Value = CardField> {
    prop::sample::select(CardField::ALL.to_vec())
}

fn slot_strategy() -> impl Strategy<Value = ImageSlot> {
    prop::sample::select(vec![ImageSlot::Logo, ImageSlot::Signature, ImageSlot::Portrait])
}

fn color_slot_strategy() -> impl Strategy<Value = ThemeColor> {
    prop::sample::select(ThemeColor::ALL.to_vec())
}

/// Any text a user could type, including empty and markup-looking strings
fn text_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9 <>&\"'\\-+./\n]{0,60}").expect("valid regex")
}

fn image_strategy() -> impl Strategy<Value = Option<ImageRef>> {
    prop::option::of(
        prop::string::string_regex("[A-Za-z0-9+/]{4,32}")
            .expect("valid regex")
            .prop_map(|b64| ImageRef::from_data_uri(format!("data:image/png;base64,{}", b64))),
    )
}

/// Operations the editor can apply to a card
#[derive(Debug, Clone)]
enum EditOp {
    Field(CardField, String),
    Image(ImageSlot, Option<ImageRef>),
    Color(ThemeColor, String),
}

fn edit_ops_strategy(max_ops: usize) -> impl Strategy<Value = Vec<EditOp>> {
    prop::collection::vec(
        prop_oneof![
            4 => (field_strategy(), text_strategy()).prop_map(|(f, v)| EditOp::Field(f, v)),
            1 => (slot_strategy(), image_strategy()).prop_map(|(s, i)| EditOp::Image(s, i)),
            1 => (color_slot_strategy(), "#[0-9a-f]{6}").prop_map(|(c, v)| EditOp::Color(c, v)),
        ],
        0..max_ops,
    )
}

fn apply(state: &CardState, op: &EditOp) -> CardState {
    match op {
        EditOp::Field(field, value) => state.with_field(*field, value.clone()),
        EditOp::Image(slot, image) => state.with_image(*slot, image.clone()),
        EditOp::Color(slot, value) => state.with_theme(ThemePatch::single(*slot, value.clone())),
    }
}

fn edited(ops: &[EditOp]) -> CardState {
    let base = CardState::new(CardSerial::new("SN-500500"));
    ops.iter().fold(base, |state, op| apply(&state, op))
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Replacing one field leaves every other field, the theme and images alone
    #[test]
    fn field_update_is_isolated(
        ops in edit_ops_strategy(20),
        field in field_strategy(),
        value in text_strategy(),
    ) {
        let before = edited(&ops);
        let after = before.with_field(field, value.clone());

        prop_assert_eq!(after.field(field), value.as_str());
        for other in CardField::ALL {
            if other != field {
                prop_assert_eq!(after.field(other), before.field(other));
            }
        }
        prop_assert_eq!(&after.theme, &before.theme);
        prop_assert_eq!(&after.logo, &before.logo);
        prop_assert_eq!(&after.principal_signature, &before.principal_signature);
        prop_assert_eq!(&after.photo, &before.photo);
        prop_assert_eq!(&after.card_serial, &before.card_serial);
    }

    /// Rendering twice with identical state yields identical markup
    #[test]
    fn render_is_idempotent(ops in edit_ops_strategy(20)) {
        let state = edited(&ops);
        for side in [Side::Front, Side::Back] {
            let first = render_card(&state, side);
            let second = render_card(&state.clone(), side);
            prop_assert_eq!(first, second);
        }
    }

    /// Rendering never changes the state it reads
    #[test]
    fn render_does_not_mutate(ops in edit_ops_strategy(10)) {
        let state = edited(&ops);
        let copy = state.clone();
        let _ = render_card(&state, Side::Front);
        let _ = render_card(&state, Side::Back);
        prop_assert_eq!(state, copy);
    }

    /// Reset restores the literal defaults no matter what was edited
    #[test]
    fn reset_restores_defaults(ops in edit_ops_strategy(30)) {
        let defaults = CardDefaults::with_serial(CardSerial::new("SN-777777"));
        let mut state = defaults.build();
        for op in &ops {
            state = apply(&state, op);
        }
        let reset = defaults.build();

        prop_assert_eq!(reset.instructions.as_str(), DEFAULT_INSTRUCTIONS);
        prop_assert_eq!(reset.card_serial.as_str(), "SN-777777");
        prop_assert_eq!(reset, CardState::new(CardSerial::new("SN-777777")));
    }

    /// Any #rrggbb converts to its exact channel values
    #[test]
    fn rgba_conversion_is_exact(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
        let hex = format!("#{:02x}{:02x}{:02x}", r, g, b);
        prop_assert_eq!(to_rgba(&hex, 0.5), format!("rgba({}, {}, {}, 0.5)", r, g, b));
        prop_assert_eq!(to_rgba(&hex.to_uppercase(), 0.5), format!("rgba({}, {}, {}, 0.5)", r, g, b));
    }

    /// Anything that is not exactly #rrggbb passes through unchanged
    #[test]
    fn rgba_passthrough(color in "[^#].{0,12}|#[0-9a-f]{0,5}|#[0-9a-f]{7,9}") {
        prop_assert_eq!(to_rgba(&color, 0.2), color);
    }

    /// The payload always mirrors the five scanned fields
    #[test]
    fn payload_tracks_state(ops in edit_ops_strategy(20)) {
        let state = edited(&ops);
        let json = QrPayload::from_state(&state).to_json().unwrap();
        let parsed: QrPayload = serde_json::from_str(&json).unwrap();

        prop_assert_eq!(parsed.id, state.student_id);
        prop_assert_eq!(parsed.name, state.student_name);
        prop_assert_eq!(parsed.prog, state.program);
        prop_assert_eq!(parsed.blood, state.blood_group);
        prop_assert_eq!(parsed.exp, state.expiry_date);
    }
}
