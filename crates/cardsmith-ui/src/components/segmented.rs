//! Segmented Control Component
//!
//! Row of mutually exclusive options, used for the front/back preview toggle.

use dioxus::prelude::*;

/// Properties for the SegmentedControl component
#[derive(Clone, PartialEq, Props)]
pub struct SegmentedControlProps {
    /// Option labels, in display order
    pub options: Vec<String>,
    /// Currently selected option
    pub selected: String,
    /// Handler called with the clicked option
    pub on_select: EventHandler<String>,
    /// Accessible name of the group
    #[props(default = "Options".to_string())]
    pub label: String,
}

/// Displays a pill-shaped row of toggle buttons
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     SegmentedControl {
///         options: vec!["FRONT".to_string(), "BACK".to_string()],
///         selected: side().as_str().to_uppercase(),
///         on_select: move |s: String| side.set(s.parse().unwrap_or_default())
///     }
/// }
/// ```
#[component]
pub fn SegmentedControl(props: SegmentedControlProps) -> Element {
    rsx! {
        div {
            class: "segmented",
            role: "radiogroup",
            "aria-label": "{props.label}",
            for option in props.options.iter() {
                {
                    let value = option.clone();
                    let is_selected = props.selected == *option;
                    let on_select = props.on_select;
                    rsx! {
                        button {
                            key: "{option}",
                            class: segment_class(is_selected),
                            r#type: "button",
                            role: "radio",
                            "aria-checked": if is_selected { "true" } else { "false" },
                            onclick: move |_| on_select.call(value.clone()),
                            "{option}"
                        }
                    }
                }
            }
        }
    }
}

fn segment_class(selected: bool) -> &'static str {
    if selected {
        "segmented__option segmented__option--active"
    } else {
        "segmented__option"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_segment_class() {
        assert!(segment_class(true).contains("--active"));
        assert!(!segment_class(false).contains("--active"));
    }
}
