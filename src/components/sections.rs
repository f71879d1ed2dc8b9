//! Editor form sections.
//!
//! Each input is bound to one [`CardField`]: it shows the current value and
//! writes every keystroke back through the store.

use cardsmith_core::{CardField, ImageSlot, ThemeColor};
use cardsmith_ui::{ColorInput, FormSection, Input, InputKind, TextArea};
use dioxus::prelude::*;

use super::images::{ImageAspect, ImageUpload};
use crate::context::use_editor;

#[component]
fn BoundInput(
    field: CardField,
    label: String,
    #[props(default)] placeholder: Option<String>,
    #[props(default)] kind: InputKind,
) -> Element {
    let store = use_editor();
    let value = store.card.read().field(field).to_string();

    rsx! {
        Input {
            id: format!("field-{}", field.name()),
            value: value,
            label: label,
            placeholder: placeholder,
            kind: kind,
            oninput: move |s: String| store.set_field(field, s),
        }
    }
}

#[component]
pub fn InstitutionSection() -> Element {
    let store = use_editor();
    let theme = store.card.read().theme.clone();

    rsx! {
        FormSection { title: "Institution Branding".to_string(), icon: "\u{1F3EB}".to_string(),
            BoundInput {
                field: CardField::CollegeName,
                label: "College Name".to_string(),
                placeholder: "e.g. Government Engineering College".to_string(),
            }
            BoundInput {
                field: CardField::Affiliation,
                label: "Affiliation".to_string(),
                placeholder: "Affiliated to ...".to_string(),
            }
            div { class: "form-grid",
                BoundInput {
                    field: CardField::CollegeAddress,
                    label: "College Address".to_string(),
                }
                BoundInput {
                    field: CardField::CollegePhone,
                    label: "College Phone".to_string(),
                    kind: InputKind::Tel,
                }
            }
            div { class: "form-grid",
                ImageUpload { slot: ImageSlot::Logo, aspect: ImageAspect::Square }
                ImageUpload { slot: ImageSlot::Signature, aspect: ImageAspect::Video }
            }
            div { class: "form-field",
                span { class: "input-label", "Card Colors" }
                div { class: "color-row",
                    for slot in ThemeColor::ALL {
                        ColorInput {
                            title: slot.display_name().to_string(),
                            value: theme.color(slot).to_string(),
                            oninput: move |c: String| store.set_color(slot, c),
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn StudentSection() -> Element {
    rsx! {
        FormSection { title: "Student Identity".to_string(), icon: "\u{1F464}".to_string(),
            BoundInput {
                field: CardField::StudentName,
                label: "Full Name".to_string(),
                placeholder: "John Doe".to_string(),
            }
            div { class: "form-grid",
                BoundInput {
                    field: CardField::StudentId,
                    label: "Student ID".to_string(),
                    placeholder: "STU-2024-001".to_string(),
                }
                BoundInput {
                    field: CardField::RollNo,
                    label: "Roll No".to_string(),
                }
            }
            div { class: "form-grid",
                BoundInput {
                    field: CardField::Program,
                    label: "Program / Course".to_string(),
                    placeholder: "B.Tech Computer Science".to_string(),
                }
                BoundInput {
                    field: CardField::BloodGroup,
                    label: "Blood Group".to_string(),
                    placeholder: "O+".to_string(),
                }
            }
            div { class: "form-grid",
                BoundInput {
                    field: CardField::Dob,
                    label: "Date of Birth".to_string(),
                    kind: InputKind::Date,
                }
                BoundInput {
                    field: CardField::ExpiryDate,
                    label: "Valid Upto".to_string(),
                    kind: InputKind::Date,
                }
            }
            div { class: "form-grid",
                BoundInput {
                    field: CardField::Mobile,
                    label: "Mobile".to_string(),
                    kind: InputKind::Tel,
                }
                BoundInput {
                    field: CardField::Address,
                    label: "Address".to_string(),
                }
            }
            ImageUpload { slot: ImageSlot::Portrait, aspect: ImageAspect::Portrait }
        }
    }
}

#[component]
pub fn ReverseSection() -> Element {
    let store = use_editor();
    let instructions = store.card.read().instructions.clone();

    rsx! {
        FormSection { title: "Reverse Side Details".to_string(), icon: "\u{1F504}".to_string(),
            TextArea {
                id: "field-instructions".to_string(),
                value: instructions,
                label: "Instructions / Terms".to_string(),
                rows: 4,
                oninput: move |s: String| store.set_field(CardField::Instructions, s),
            }
            div { class: "form-grid",
                BoundInput {
                    field: CardField::EmergencyContact,
                    label: "Emergency Contact".to_string(),
                    kind: InputKind::Tel,
                }
                BoundInput {
                    field: CardField::Website,
                    label: "Website".to_string(),
                    placeholder: "www.college-website.com".to_string(),
                }
            }
        }
    }
}
