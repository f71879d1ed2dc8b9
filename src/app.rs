use cardsmith_core::Rasterizer;
use dioxus::prelude::*;

use crate::components::{CardPreview, InstitutionSection, NavHeader, ReverseSection, StudentSection};
use crate::context::EditorStore;
use crate::get_defaults;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles and the editor store, then lays out the form
/// column next to the live preview.
#[component]
pub fn App() -> Element {
    EditorStore::provide(get_defaults());

    // Font loading for export is slow; do it before the first click.
    use_hook(|| {
        spawn(async {
            if let Err(e) = tokio::task::spawn_blocking(|| {
                Rasterizer::shared();
            })
            .await
            {
                tracing::warn!("Failed to warm up rasterizer: {}", e);
            }
        });
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        div { class: "app-shell",
            NavHeader {}
            main { class: "workspace",
                div { class: "editor-column no-print",
                    InstitutionSection {}
                    StudentSection {}
                    ReverseSection {}
                }
                CardPreview {}
            }
        }
    }
}
