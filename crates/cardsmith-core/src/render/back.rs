//! Back face: dashed instructions panel with contact and serial footer,
//! website line and palette swatches underneath.

use std::fmt::Write as _;

use super::{attr, ellipsize, or_placeholder, wrap_words, Frame, Text, MONO};
use crate::state::CardState;
use crate::theme::to_rgba;

const PANEL: Frame = Frame {
    x: 32.0,
    y: 32.0,
    w: 536.0,
    h: 276.0,
};
const INNER_X: f64 = PANEL.x + 24.0;
const INNER_RIGHT: f64 = PANEL.x + PANEL.w - 24.0;
const FOOTER_Y: f64 = PANEL.y + PANEL.h - 58.0;
pub(super) const INSTRUCTIONS: Frame = Frame {
    x: INNER_X,
    y: PANEL.y + 52.0,
    w: INNER_RIGHT - INNER_X,
    h: FOOTER_Y - (PANEL.y + 52.0) - 8.0,
};
const LINE_HEIGHT: f64 = 17.0;
const INSTRUCTION_SIZE: f64 = 11.0;

pub(super) fn render(out: &mut String, state: &CardState) {
    let theme = &state.theme;
    let faint = to_rgba(&theme.primary_color, 0.1);

    let _ = write!(
        out,
        "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" rx=\"8\" fill=\"none\" stroke=\"{}\" stroke-width=\"2\" stroke-dasharray=\"6 4\"/>",
        PANEL.x,
        PANEL.y,
        PANEL.w,
        PANEL.h,
        attr(&to_rgba(&theme.primary_color, 0.2))
    );

    Text::at(INNER_X, PANEL.y + 34.0, 14.0, &theme.primary_color)
        .weight(700)
        .spacing(1.4)
        .write(out, "INSTRUCTIONS & INFORMATION");
    divider(out, PANEL.y + 44.0, &faint);

    // Source line breaks are kept, long lines wrap, blank lines keep their spacing
    out.push_str("<g clip-path=\"url(#instructions-clip)\">");
    let mut row = 0usize;
    for line in state.instructions.lines() {
        let wrapped = wrap_words(line, INSTRUCTION_SIZE, INSTRUCTIONS.w);
        if wrapped.is_empty() {
            row += 1;
            continue;
        }
        for text in wrapped {
            let y = INSTRUCTIONS.y + 12.0 + row as f64 * LINE_HEIGHT;
            Text::at(INNER_X, y, INSTRUCTION_SIZE, "#4b5563").write(out, &text);
            row += 1;
        }
    }
    out.push_str("</g>");

    divider(out, FOOTER_Y, &faint);
    let contact = or_placeholder(
        or_placeholder(&state.emergency_contact, &state.college_phone),
        "Not Provided",
    );
    let half = (INNER_RIGHT - INNER_X) / 2.0 - 8.0;
    Text::at(INNER_X, FOOTER_Y + 22.0, 10.0, &theme.label_color)
        .weight(700)
        .opacity(0.6)
        .write(out, "EMERGENCY CONTACT");
    Text::at(INNER_X, FOOTER_Y + 40.0, 12.0, &theme.value_color)
        .weight(600)
        .write(out, &ellipsize(contact, 12.0, half));
    Text::at(INNER_RIGHT, FOOTER_Y + 22.0, 10.0, &theme.label_color)
        .weight(700)
        .anchor("end")
        .opacity(0.6)
        .write(out, "SERIAL NUMBER");
    Text::at(INNER_RIGHT, FOOTER_Y + 40.0, 12.0, &theme.value_color)
        .anchor("end")
        .family(MONO)
        .write(out, state.card_serial.as_str());

    // Below the panel
    let base = PANEL.y + PANEL.h + 26.0;
    Text::at(PANEL.x + 8.0, base, 10.0, &theme.label_color)
        .weight(500)
        .write(
            out,
            &ellipsize(
                or_placeholder(&state.website, "www.college-website.com"),
                10.0,
                PANEL.w - 60.0,
            ),
        );
    let _ = write!(
        out,
        "<circle cx=\"{}\" cy=\"{}\" r=\"6\" fill=\"{}\"/><circle cx=\"{}\" cy=\"{}\" r=\"6\" fill=\"{}\" fill-opacity=\"0.5\"/>",
        PANEL.x + PANEL.w - 24.0,
        base - 4.0,
        attr(&theme.primary_color),
        PANEL.x + PANEL.w - 8.0,
        base - 4.0,
        attr(&theme.secondary_color)
    );
}

fn divider(out: &mut String, y: f64, stroke: &str) {
    let _ = write!(
        out,
        "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{}\" stroke-width=\"1\"/>",
        INNER_X,
        y,
        INNER_RIGHT,
        y,
        attr(stroke)
    );
}

#[cfg(test)]
mod tests {
    use crate::render::{render_card, Side};
    use crate::state::{CardField, CardSerial, CardState, DEFAULT_INSTRUCTIONS};

    fn back(state: &CardState) -> String {
        render_card(state, Side::Back).into_string()
    }

    fn blank() -> CardState {
        CardState::new(CardSerial::new("SN-424242"))
    }

    #[test]
    fn default_back_face() {
        let svg = back(&blank());
        for line in DEFAULT_INSTRUCTIONS.lines() {
            assert!(svg.contains(&format!(">{}<", line)), "missing {}", line);
        }
        assert!(svg.contains(">INSTRUCTIONS &amp; INFORMATION<"));
        assert!(svg.contains(">Not Provided<"));
        assert!(svg.contains(">SN-424242<"));
        assert!(svg.contains(">www.college-website.com<"));
        assert!(svg.contains("rgba(30, 58, 138, 0.2)"));
    }

    #[test]
    fn emergency_contact_falls_back_to_college_phone() {
        let with_phone = blank().with_field(CardField::CollegePhone, "+44 20 1234 5678");
        assert!(back(&with_phone).contains(">+44 20 1234 5678<"));

        let with_both = with_phone.with_field(CardField::EmergencyContact, "+1 234 567 890");
        let svg = back(&with_both);
        assert!(svg.contains(">+1 234 567 890<"));
        assert!(!svg.contains(">+44 20 1234 5678<"));
    }

    #[test]
    fn instruction_lines_are_preserved() {
        let state = blank().with_field(CardField::Instructions, "first\n\nthird\r\nfourth");
        let svg = back(&state);
        let first = svg.find(">first<").unwrap();
        let third = svg.find(">third<").unwrap();
        let fourth = svg.find(">fourth<").unwrap();
        assert!(first < third && third < fourth);
        assert!(!svg.contains('\r'));
    }

    #[test]
    fn long_instruction_wraps_inside_panel() {
        let sentence = "Students must carry this card at all times on campus and show it on request to security staff, faculty or the library desk.";
        assert!(sentence.len() >= 120);
        let state = blank().with_field(CardField::Instructions, format!("{}\nlast", sentence));
        let svg = back(&state);

        let runs: Vec<&str> = svg
            .split("font-size=\"11\"")
            .skip(1)
            .filter_map(|chunk| {
                let start = chunk.find('>')? + 1;
                let end = chunk.find("</text>")?;
                Some(&chunk[start..end])
            })
            .collect();

        assert!(runs.len() >= 3, "expected wrapped runs, got {:?}", runs);
        let max_chars = (super::INSTRUCTIONS.w / (11.0 * 0.62)).floor() as usize;
        assert!(runs.iter().all(|r| r.chars().count() <= max_chars));
        assert_eq!(runs[..runs.len() - 1].join(" "), sentence);
        assert_eq!(runs.last(), Some(&"last"));
    }

    #[test]
    fn website_replaces_placeholder() {
        let state = blank().with_field(CardField::Website, "www.gtu.edu");
        let svg = back(&state);
        assert!(svg.contains(">www.gtu.edu<"));
        assert!(!svg.contains("college-website"));
    }
}
