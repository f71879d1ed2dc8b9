//! Card Preview Component
//!
//! Shows one side of the card at its native 600x375 size. The markup comes
//! straight from the renderer, so the preview matches the exported PNG.

use cardsmith_core::{render_card, Side, CARD_HEIGHT, CARD_WIDTH};
use cardsmith_ui::SegmentedControl;
use dioxus::prelude::*;

use crate::context::use_editor;

const SIDE_OPTIONS: [Side; 2] = [Side::Front, Side::Back];

fn side_label(side: Side) -> String {
    side.as_str().to_uppercase()
}

#[component]
pub fn CardPreview() -> Element {
    let store = use_editor();
    let svg = use_memo(move || render_card(&store.card.read(), *store.side.read()));

    let selected = side_label(*store.side.read());
    let markup = svg.read().as_str().to_string();
    let options: Vec<String> = SIDE_OPTIONS.iter().copied().map(side_label).collect();

    rsx! {
        section { class: "preview-column",
            div { class: "preview-toolbar no-print",
                span { class: "preview-toolbar__title", "Live Preview" }
                SegmentedControl {
                    options: options,
                    selected: selected,
                    label: "Card side".to_string(),
                    on_select: move |label: String| {
                        match label.parse::<Side>() {
                            Ok(side) => store.show_side(side),
                            Err(e) => tracing::warn!("Ignoring side toggle: {}", e),
                        }
                    },
                }
            }
            div {
                class: "card-stage",
                style: "width: {CARD_WIDTH}px; height: {CARD_HEIGHT}px;",
                dangerous_inner_html: "{markup}",
            }
            p { class: "preview-hint no-print",
                "Export saves the visible side as a high resolution PNG."
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_labels_parse_back_to_sides() {
        for side in SIDE_OPTIONS {
            assert_eq!(side_label(side).parse::<Side>().ok(), Some(side));
        }
    }
}
