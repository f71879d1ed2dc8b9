//! Button Components
//!
//! Button styles used by the editor chrome:
//! - Primary: filled blue, used for export
//! - Ghost: borderless, used for print and the side toggle
//! - Danger: red on hover, used for reset and image removal

use dioxus::prelude::*;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    /// Main action - filled blue
    #[default]
    Primary,
    /// Subtle/secondary action
    Ghost,
    /// Destructive action
    Danger,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Ghost => "btn-ghost",
            ButtonVariant::Danger => "btn-danger",
        }
    }
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Visual style variant
    #[props(default)]
    pub variant: ButtonVariant,
    /// Button content (text, icons, etc.)
    pub children: Element,
    /// Click handler
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    /// Whether the button is disabled
    #[props(default = false)]
    pub disabled: bool,
    /// Shows a spinner in front of the content and marks the button busy
    #[props(default = false)]
    pub busy: bool,
    /// Tooltip text
    #[props(default)]
    pub title: Option<String>,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Styled button
///
/// A busy button is always disabled, so a second click cannot start the
/// same action again while the first is still running.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::Primary,
///         busy: exporting(),
///         onclick: move |_| start_export(),
///         "Export FRONT"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let full_class = button_class(props.variant, props.busy, props.class.as_deref());
    let disabled = props.disabled || props.busy;

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            disabled: disabled,
            "aria-busy": if props.busy { "true" } else { "false" },
            title: props.title.as_deref().unwrap_or(""),
            onclick: move |_| {
                if disabled {
                    return;
                }
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            if props.busy {
                span { class: "spinner", "aria-hidden": "true" }
            }
            {props.children}
        }
    }
}

fn button_class(variant: ButtonVariant, busy: bool, extra: Option<&str>) -> String {
    let mut class = variant.class().to_string();
    if busy {
        class.push_str(" is-busy");
    }
    if let Some(extra) = extra.filter(|e| !e.is_empty()) {
        class.push(' ');
        class.push_str(extra);
    }
    class
}

/// Icon button for compact actions (remove image, etc.)
#[derive(Clone, PartialEq, Props)]
pub struct IconButtonProps {
    /// The icon content (character or element)
    pub children: Element,
    /// Click handler
    pub onclick: EventHandler<()>,
    /// Accessible label for screen readers
    pub aria_label: String,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

#[component]
pub fn IconButton(props: IconButtonProps) -> Element {
    let extra_class = props.class.as_deref().unwrap_or("");
    let full_class = if extra_class.is_empty() {
        "icon-btn".to_string()
    } else {
        format!("icon-btn {}", extra_class)
    };

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            "aria-label": "{props.aria_label}",
            title: "{props.aria_label}",
            onclick: move |e| {
                e.stop_propagation();
                props.onclick.call(());
            },
            {props.children}
        }
    }
}

/// Close button with X icon
#[component]
pub fn CloseButton(onclick: EventHandler<()>) -> Element {
    rsx! {
        IconButton {
            onclick: onclick,
            aria_label: "Remove".to_string(),
            class: "close-btn".to_string(),
            "\u{00D7}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_variant_classes() {
        assert_eq!(ButtonVariant::Primary.class(), "btn-primary");
        assert_eq!(ButtonVariant::Ghost.class(), "btn-ghost");
        assert_eq!(ButtonVariant::Danger.class(), "btn-danger");
    }

    #[test]
    fn button_variant_default() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Primary);
    }

    #[test]
    fn busy_and_extra_classes() {
        assert_eq!(button_class(ButtonVariant::Primary, false, None), "btn-primary");
        assert_eq!(
            button_class(ButtonVariant::Primary, true, Some("export-btn")),
            "btn-primary is-busy export-btn"
        );
        assert_eq!(button_class(ButtonVariant::Ghost, false, Some("")), "btn-ghost");
    }
}
