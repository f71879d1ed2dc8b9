//! Front face: branding header with QR code, title pill, student details,
//! portrait and signature, framed by two gradient accent bars.

use std::fmt::Write as _;

use super::{attr, ellipsize, image, or_placeholder, Frame, Text, SERIF};
use crate::qr::{QrPayload, QrSymbol};
use crate::state::CardState;

const PAD: f64 = 24.0;
const LOGO: Frame = Frame {
    x: PAD,
    y: PAD,
    w: 64.0,
    h: 64.0,
};
const QR: Frame = Frame {
    x: 600.0 - PAD - 62.0,
    y: PAD + 4.0,
    w: 60.0,
    h: 60.0,
};
pub(super) const PORTRAIT: Frame = Frame {
    x: 472.0,
    y: 138.0,
    w: 96.0,
    h: 112.0,
};
const SIGNATURE: Frame = Frame {
    x: 480.0,
    y: 262.0,
    w: 80.0,
    h: 24.0,
};

const TABLE_X: f64 = 32.0;
const TABLE_TOP: f64 = 160.0;
const ROW_HEIGHT: f64 = 22.0;
const VALUE_X: f64 = TABLE_X + 80.0;
const VALUE_WIDTH: f64 = PORTRAIT.x - VALUE_X - 16.0;

pub(super) fn render(out: &mut String, state: &CardState) {
    let theme = &state.theme;

    // Accent bars
    out.push_str("<rect x=\"0\" y=\"0\" width=\"600\" height=\"8\" fill=\"url(#accent)\"/>");
    out.push_str("<rect x=\"0\" y=\"369\" width=\"600\" height=\"6\" fill=\"url(#accent)\"/>");

    render_logo(out, state);
    render_qr(out, state);

    // Institution block, centered between logo and code
    let college = or_placeholder(&state.college_name, "YOUR COLLEGE NAME").to_uppercase();
    let title_width = QR.x - (LOGO.x + LOGO.w) - 16.0;
    let title_size = fit_title(&college, title_width);
    Text::at(300.0, 52.0, title_size, &theme.primary_color)
        .weight(700)
        .anchor("middle")
        .family(SERIF)
        .write(out, &college);
    Text::at(300.0, 68.0, 9.0, &theme.label_color)
        .weight(500)
        .anchor("middle")
        .opacity(0.7)
        .write(
            out,
            &ellipsize(
                or_placeholder(&state.affiliation, "Affiliated to University Name"),
                9.0,
                title_width,
            ),
        );
    Text::at(300.0, 84.0, 10.0, &theme.label_color)
        .weight(600)
        .anchor("middle")
        .write(
            out,
            &ellipsize(
                or_placeholder(&state.college_address, "City, State, Country"),
                10.0,
                title_width,
            ),
        );

    // Title pill
    out.push_str("<rect x=\"200\" y=\"102\" width=\"200\" height=\"22\" rx=\"11\" fill=\"url(#accent)\"/>");
    Text::at(300.0, 117.0, 11.0, "#ffffff")
        .weight(700)
        .anchor("middle")
        .spacing(2.2)
        .write(out, "IDENTITY CARD");

    // Details table
    let rows = [
        ("ID NO", or_placeholder(&state.student_id, "---"), true),
        ("NAME", or_placeholder(&state.student_name, "STUDENT NAME"), true),
        ("COURSE", or_placeholder(&state.program, "---"), false),
        ("BLOOD", or_placeholder(&state.blood_group, "---"), false),
        ("VALID UPTO", or_placeholder(&state.expiry_date, "---"), false),
    ];
    for (i, (label, value, bold)) in rows.into_iter().enumerate() {
        let y = TABLE_TOP + i as f64 * ROW_HEIGHT;
        Text::at(TABLE_X, y, 10.0, &theme.label_color)
            .weight(700)
            .opacity(0.7)
            .write(out, label);
        Text::at(VALUE_X - 10.0, y, 13.0, "#000000")
            .weight(700)
            .anchor("middle")
            .opacity(0.4)
            .write(out, ":");
        let value = value.to_uppercase();
        Text::at(VALUE_X, y, 13.0, &theme.value_color)
            .weight(if bold { 700 } else { 500 })
            .spacing(0.3)
            .write(out, &ellipsize(&value, 13.0, VALUE_WIDTH));
    }

    render_portrait(out, state);
    render_signature(out, state);
}

fn render_logo(out: &mut String, state: &CardState) {
    let theme = &state.theme;
    match &state.logo {
        Some(logo) => image(out, LOGO, logo.as_str(), "xMidYMid meet", None),
        None => {
            let _ = write!(
                out,
                "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"2\" stroke-dasharray=\"4 3\"/>",
                LOGO.x + LOGO.w / 2.0,
                LOGO.y + LOGO.h / 2.0,
                LOGO.w / 2.0 - 1.0,
                attr(&theme.secondary_color)
            );
            Text::at(LOGO.x + LOGO.w / 2.0, LOGO.y + LOGO.h / 2.0 + 3.5, 10.0, &theme.primary_color)
                .weight(700)
                .anchor("middle")
                .write(out, "LOGO");
        }
    }
}

fn render_qr(out: &mut String, state: &CardState) {
    let symbol = QrPayload::from_state(state)
        .to_json()
        .and_then(|json| QrSymbol::encode(&json, state.logo.is_some()));
    match symbol {
        Ok(symbol) => out.push_str(&symbol.to_svg(
            QR.x,
            QR.y,
            QR.w,
            &state.theme.value_color,
            state.logo.as_ref(),
        )),
        Err(e) => {
            // Overlong fields can exceed QR capacity; keep the card usable.
            tracing::warn!("QR code not rendered: {}", e);
            let _ = write!(
                out,
                "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"none\" stroke=\"#9ca3af\" stroke-dasharray=\"3 3\"/>",
                QR.x, QR.y, QR.w, QR.h
            );
            Text::at(QR.x + QR.w / 2.0, QR.y + QR.h / 2.0 + 3.0, 8.0, "#9ca3af")
                .anchor("middle")
                .write(out, "NO QR");
        }
    }
}

fn render_portrait(out: &mut String, state: &CardState) {
    let _ = write!(
        out,
        "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" rx=\"6\" fill=\"#f9fafb\" stroke=\"#e5e7eb\"/>",
        PORTRAIT.x, PORTRAIT.y, PORTRAIT.w, PORTRAIT.h
    );
    match &state.photo {
        Some(photo) => image(
            out,
            PORTRAIT,
            photo.as_str(),
            "xMidYMid slice",
            Some("portrait-clip"),
        ),
        None => Text::at(
            PORTRAIT.x + PORTRAIT.w / 2.0,
            PORTRAIT.y + PORTRAIT.h / 2.0 + 3.5,
            10.0,
            "#9ca3af",
        )
        .anchor("middle")
        .write(out, "PHOTO"),
    }
}

fn render_signature(out: &mut String, state: &CardState) {
    if let Some(signature) = &state.principal_signature {
        image(out, SIGNATURE, signature.as_str(), "xMidYMid meet", None);
    }
    let line_y = SIGNATURE.y + SIGNATURE.h;
    let _ = write!(
        out,
        "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"#9ca3af\" stroke-width=\"1\"/>",
        SIGNATURE.x,
        line_y,
        SIGNATURE.x + SIGNATURE.w,
        line_y
    );
    Text::at(SIGNATURE.x + SIGNATURE.w / 2.0, line_y + 14.0, 10.0, &state.theme.label_color)
        .weight(700)
        .anchor("middle")
        .write(out, "Principal Signature");
}

/// Largest title size up to 24px that keeps the name on one line.
fn fit_title(title: &str, max_width: f64) -> f64 {
    let chars = title.chars().count().max(1) as f64;
    (max_width / (chars * 0.68)).clamp(12.0, 24.0).floor()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{render_card, Side};
    use crate::state::{CardField, CardSerial, ImageRef, ImageSlot};

    fn front(state: &CardState) -> String {
        render_card(state, Side::Front).into_string()
    }

    fn blank() -> CardState {
        CardState::new(CardSerial::new("SN-100001"))
    }

    #[test]
    fn placeholders_when_empty() {
        let svg = front(&blank());
        for text in [
            ">YOUR COLLEGE NAME<",
            ">Affiliated to University Name<",
            ">City, State, Country<",
            ">STUDENT NAME<",
            ">---<",
            ">LOGO<",
            ">PHOTO<",
            ">IDENTITY CARD<",
            ">Principal Signature<",
        ] {
            assert!(svg.contains(text), "missing {}", text);
        }
        assert!(!svg.contains("<image"));
    }

    #[test]
    fn values_replace_placeholders() {
        let state = blank()
            .with_field(CardField::StudentName, "Jane Doe")
            .with_field(CardField::StudentId, "stu-9")
            .with_field(CardField::Program, "B.Sc CS")
            .with_field(CardField::BloodGroup, "O+")
            .with_field(CardField::ExpiryDate, "2026-06-30");
        let svg = front(&state);
        assert!(svg.contains(">JANE DOE<"));
        assert!(svg.contains(">STU-9<"));
        assert!(svg.contains(">B.SC CS<"));
        assert!(svg.contains(">O+<"));
        assert!(svg.contains(">2026-06-30<"));
        assert!(!svg.contains(">STUDENT NAME<"));
        assert!(!svg.contains(">---<"));
    }

    #[test]
    fn images_embed_directly() {
        let logo = ImageRef::from_data_uri("data:image/png;base64,TE9HTw==");
        let photo = ImageRef::from_data_uri("data:image/jpeg;base64,UEhPVE8=");
        let sig = ImageRef::from_data_uri("data:image/png;base64,U0lH");
        let state = blank()
            .with_image(ImageSlot::Logo, Some(logo))
            .with_image(ImageSlot::Portrait, Some(photo))
            .with_image(ImageSlot::Signature, Some(sig));
        let svg = front(&state);
        // Logo appears twice: header and QR overlay
        assert_eq!(svg.matches("TE9HTw==").count(), 2);
        assert!(svg.contains("UEhPVE8="));
        assert!(svg.contains("clip-path=\"url(#portrait-clip)\""));
        assert!(svg.contains("U0lH"));
        assert!(!svg.contains(">LOGO<"));
        assert!(!svg.contains(">PHOTO<"));
    }

    #[test]
    fn qr_follows_value_color() {
        let state = blank().with_theme(crate::theme::ThemePatch::single(
            crate::theme::ThemeColor::Value,
            "#00aa00",
        ));
        assert!(front(&state).contains("<path fill=\"#00aa00\""));
    }

    #[test]
    fn overlong_payload_degrades() {
        let state = blank().with_field(CardField::StudentName, "x".repeat(4000));
        let svg = front(&state);
        assert!(svg.contains(">NO QR<"));
    }

    #[test]
    fn title_size_shrinks_for_long_names() {
        assert_eq!(fit_title("MIT", 400.0), 24.0);
        assert!(fit_title(&"W".repeat(60), 400.0) < 24.0);
        assert_eq!(fit_title(&"W".repeat(500), 400.0), 12.0);
    }
}
