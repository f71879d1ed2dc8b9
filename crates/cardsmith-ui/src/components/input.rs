//! Field Components
//!
//! Labelled controls for card values: one-line text, multi-line text and
//! palette swatches. Every keystroke is reported through `oninput`, so the
//! card preview redraws as the user types.

use dioxus::prelude::*;

/// Native control flavor for one-line fields.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum InputKind {
    #[default]
    Text,
    /// Browser date picker; the value stays a free-form string
    Date,
    /// Phone keypad on touch devices
    Tel,
}

impl InputKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputKind::Text => "text",
            InputKind::Date => "date",
            InputKind::Tel => "tel",
        }
    }
}

#[component]
fn Labelled(id: String, label: String, children: Element) -> Element {
    rsx! {
        div { class: "form-field",
            label { class: "input-label", r#for: "{id}", "{label}" }
            {children}
        }
    }
}

/// Single-line card field
///
/// ```rust,ignore
/// rsx! {
///     Input {
///         id: "field-student_name".to_string(),
///         label: "Full Name".to_string(),
///         value: card().student_name.clone(),
///         placeholder: "John Doe".to_string(),
///         oninput: move |s| store.set_field(CardField::StudentName, s),
///     }
/// }
/// ```
#[component]
pub fn Input(
    /// Element id, also ties the label to the control
    id: String,
    label: String,
    value: String,
    oninput: EventHandler<String>,
    #[props(default)] placeholder: Option<String>,
    #[props(default)] kind: InputKind,
) -> Element {
    rsx! {
        Labelled { id: id.clone(), label: label,
            input {
                id: "{id}",
                class: "input-field",
                r#type: kind.as_str(),
                value: "{value}",
                placeholder: placeholder.unwrap_or_default(),
                oninput: move |e| oninput.call(e.value()),
            }
        }
    }
}

/// Multi-line card field; line breaks reach the card unchanged
#[component]
pub fn TextArea(
    id: String,
    label: String,
    value: String,
    oninput: EventHandler<String>,
    #[props(default = 3)] rows: u32,
) -> Element {
    rsx! {
        Labelled { id: id.clone(), label: label,
            textarea {
                id: "{id}",
                class: "input-field textarea",
                rows: "{rows}",
                value: "{value}",
                oninput: move |e| oninput.call(e.value()),
            }
        }
    }
}

/// Native color picker swatch for one palette slot
#[component]
pub fn ColorInput(
    /// Current color, `#rrggbb`
    value: String,
    oninput: EventHandler<String>,
    /// Tooltip and accessible name
    title: String,
) -> Element {
    rsx! {
        input {
            class: "color-input",
            r#type: "color",
            title: "{title}",
            "aria-label": "{title}",
            value: "{value}",
            oninput: move |e| oninput.call(e.value()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_kinds_map_to_html_types() {
        assert_eq!(InputKind::default(), InputKind::Text);
        assert_eq!(InputKind::Text.as_str(), "text");
        assert_eq!(InputKind::Date.as_str(), "date");
        assert_eq!(InputKind::Tel.as_str(), "tel");
    }
}
