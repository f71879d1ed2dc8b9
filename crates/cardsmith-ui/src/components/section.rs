//! Form Section Component
//!
//! White card grouping related editor fields under an icon and heading.

use dioxus::prelude::*;

/// Properties for the FormSection component
#[derive(Clone, PartialEq, Props)]
pub struct FormSectionProps {
    /// Section heading
    pub title: String,
    /// Short glyph shown before the heading
    #[props(default)]
    pub icon: Option<String>,
    /// Section body
    pub children: Element,
}

/// Titled group of form fields
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     FormSection { title: "Student Identity".to_string(), icon: "\u{1F464}".to_string(),
///         Input { value: name(), oninput: move |s| name.set(s) }
///     }
/// }
/// ```
#[component]
pub fn FormSection(props: FormSectionProps) -> Element {
    rsx! {
        section { class: "form-section no-print",
            div { class: "form-section__header",
                if let Some(icon) = &props.icon {
                    span { class: "form-section__icon", "aria-hidden": "true", "{icon}" }
                }
                h2 { class: "form-section__title", "{props.title}" }
            }
            div { class: "form-section__body", {props.children} }
        }
    }
}
