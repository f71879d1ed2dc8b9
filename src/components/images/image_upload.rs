//! Image Upload Component
//!
//! Native file picker feeding one image slot of the card. The picked file is
//! embedded whole as a data URI; nothing is cropped or re-encoded.

use cardsmith_core::{intake, IntakeOutcome, ImageSlot};
use cardsmith_ui::CloseButton;
use dioxus::prelude::*;
use rfd::FileDialog;

use crate::context::use_editor;

/// Extensions offered by the default picker filter.
const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp", "gif", "svg"];

/// Shape of the thumbnail well in the editor.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ImageAspect {
    /// 1:1, logos
    #[default]
    Square,
    /// 16:9, signatures
    Video,
    /// 3:4, portraits
    Portrait,
}

impl ImageAspect {
    pub fn class(&self) -> &'static str {
        match self {
            ImageAspect::Square => "aspect-square",
            ImageAspect::Video => "aspect-video",
            ImageAspect::Portrait => "aspect-portrait",
        }
    }
}

/// Image picker bound to a card slot
///
/// # Examples
///
/// ```rust,ignore
/// rsx! {
///     ImageUpload {
///         slot: ImageSlot::Portrait,
///         aspect: ImageAspect::Portrait,
///     }
/// }
/// ```
#[component]
pub fn ImageUpload(
    /// Card slot this picker writes to
    slot: ImageSlot,
    /// Thumbnail shape
    #[props(default)]
    aspect: ImageAspect,
) -> Element {
    let store = use_editor();
    let mut loading = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    let current = store.card.read().image(slot).cloned();
    let label = slot.display_name();

    let handle_pick = move |_| {
        if loading() {
            return;
        }
        loading.set(true);
        error.set(None);

        spawn(async move {
            // Native dialog blocks its thread
            let picked = tokio::task::spawn_blocking(move || {
                FileDialog::new()
                    .add_filter("Images", IMAGE_EXTENSIONS)
                    .add_filter("All files", &["*"])
                    .set_title(format!("Select {}", label))
                    .pick_file()
            })
            .await;

            match picked {
                Ok(Some(path)) => match intake(Some(&path)).await {
                    IntakeOutcome::Loaded(image) => store.set_image(slot, Some(image)),
                    IntakeOutcome::Cleared => store.set_image(slot, None),
                    IntakeOutcome::Failed(reason) => {
                        error.set(Some(format!("Could not read image: {}", reason)));
                    }
                },
                Ok(None) => {
                    tracing::debug!(?slot, "Image selection cancelled");
                }
                Err(e) => {
                    tracing::warn!("File picker task failed: {}", e);
                    error.set(Some(format!("File picker error: {}", e)));
                }
            }
            loading.set(false);
        });
    };

    let well_class = format!("image-well {}", aspect.class());

    rsx! {
        div { class: "form-field image-upload",
            span { class: "input-label", "{label}" }
            div { class: "{well_class}",
                onclick: handle_pick,
                title: "Choose image",
                if let Some(image) = current {
                    img {
                        class: "image-well__preview",
                        src: image.as_str().to_string(),
                        alt: "{label}",
                    }
                    CloseButton { onclick: move |_| store.set_image(slot, None) }
                } else if loading() {
                    span { class: "image-well__hint", "Loading..." }
                } else {
                    span { class: "image-well__hint", "+ Upload" }
                }
            }
            if let Some(err) = error() {
                div { class: "image-upload__error", "{err}" }
            }
        }
    }
}
