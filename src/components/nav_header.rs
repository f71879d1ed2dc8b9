//! Navigation Header Component
//!
//! App title, print, export of the visible side, reset, and the toast area
//! for export results.

use std::time::Duration;

use cardsmith_core::{export_side, CardError, Rasterizer, Side};
use cardsmith_ui::{Button, ButtonVariant, CloseButton};
use dioxus::prelude::*;
use rfd::{MessageButtons, MessageDialog, MessageLevel};

use crate::context::{get_export_dir, use_editor, ExportStatus};

/// How long a success toast stays up.
const TOAST_DURATION: Duration = Duration::from_secs(4);

fn export_label(side: Side) -> String {
    format!("Export {}", side.as_str().to_uppercase())
}

fn toast_class(is_error: bool) -> &'static str {
    if is_error {
        "toast toast--error"
    } else {
        "toast"
    }
}

#[component]
pub fn NavHeader() -> Element {
    let store = use_editor();
    let side = *store.side.read();
    let exporting = store.exporting();

    let on_print = move |_| {
        tracing::info!("Opening print dialog");
        let _ = document::eval("window.print();");
    };

    let on_export = move |_| {
        if store.exporting() {
            return;
        }
        let mut status = store.export_status;
        let card = store.card;
        let gate = store.gate();
        let side = *store.side.peek();
        status.set(ExportStatus::InProgress);
        store.dismiss_notice();

        spawn(async move {
            let dir = get_export_dir();
            let result =
                export_side(&gate, Rasterizer::shared(), move || card.cloned(), side, &dir).await;
            status.set(ExportStatus::Idle);

            match result {
                Ok(path) => {
                    store.notify(format!("Saved {}", path.display()), false);
                    spawn(async move {
                        tokio::time::sleep(TOAST_DURATION).await;
                        store.dismiss_notice();
                    });
                }
                Err(CardError::ExportBusy) => {
                    tracing::debug!("Export already running, click ignored");
                }
                Err(e) => {
                    tracing::error!("Export of {} side failed: {}", side, e);
                    let description = format!(
                        "Could not export the card image: {}.\n\nPlease try again, or use Print instead.",
                        e
                    );
                    let _ = tokio::task::spawn_blocking(move || {
                        MessageDialog::new()
                            .set_level(MessageLevel::Error)
                            .set_title("Export failed")
                            .set_description(description)
                            .set_buttons(MessageButtons::Ok)
                            .show()
                    })
                    .await;
                }
            }
        });
    };

    let notice = store.notice.read().clone();
    let label = export_label(side);

    rsx! {
        header { class: "nav-header no-print",
            div { class: "nav-brand",
                span { class: "nav-brand__mark", "\u{1FAAA}" }
                div {
                    h1 { class: "nav-brand__title", "Cardsmith" }
                    p { class: "nav-brand__subtitle", "Identity Card Designer" }
                }
            }

            if let Some(notice) = notice {
                div {
                    class: toast_class(notice.is_error),
                    role: "status",
                    span { "{notice.text}" }
                    CloseButton { onclick: move |_| store.dismiss_notice() }
                }
            }

            div { class: "nav-actions",
                Button {
                    variant: ButtonVariant::Danger,
                    title: "Discard all edits".to_string(),
                    onclick: move |_| store.reset(),
                    "Reset"
                }
                Button {
                    variant: ButtonVariant::Ghost,
                    onclick: on_print,
                    "Print"
                }
                Button {
                    variant: ButtonVariant::Primary,
                    busy: exporting,
                    onclick: on_export,
                    if exporting { "Exporting..." } else { "{label}" }
                }
            }
        }
    }
}
