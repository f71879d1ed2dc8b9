//! CLI Integration Tests
//!
//! These tests verify the CLI commands work correctly end-to-end.
//! They test the "wiring" between the CLI and the core library.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

// ============================================================================
// Test Utilities
// ============================================================================

/// Create a CLI command with a fixed serial
fn cli_cmd() -> Command {
    let mut cmd = Command::cargo_bin("cardsmith").expect("Failed to find cardsmith binary");
    cmd.arg("--serial").arg("SN-123456");
    cmd
}

/// Smallest valid PNG: 1x1 transparent pixel
const TINY_PNG: &[u8] = &[
    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44,
    0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00, 0x00, 0x1F,
    0x15, 0xC4, 0x89, 0x00, 0x00, 0x00, 0x0A, 0x49, 0x44, 0x41, 0x54, 0x78, 0x9C, 0x63, 0x00,
    0x01, 0x00, 0x00, 0x05, 0x00, 0x01, 0x0D, 0x0A, 0x2D, 0xB4, 0x00, 0x00, 0x00, 0x00, 0x49,
    0x45, 0x4E, 0x44, 0xAE, 0x42, 0x60, 0x82,
];

// ============================================================================
// Payload Command Tests
// ============================================================================

#[test]
fn test_payload_reflects_fields() {
    let output = cli_cmd()
        .args(["--set", "student_id=STU-2024-001"])
        .args(["--set", "student_name=Jane Doe"])
        .args(["--set", "program=BCA"])
        .args(["--set", "blood_group=O+"])
        .args(["--set", "expiry_date=2026-12-31"])
        .arg("payload")
        .output()
        .expect("Failed to run cardsmith");

    assert!(output.status.success());
    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("payload should be JSON");
    assert_eq!(json["id"], "STU-2024-001");
    assert_eq!(json["name"], "Jane Doe");
    assert_eq!(json["prog"], "BCA");
    assert_eq!(json["blood"], "O+");
    assert_eq!(json["exp"], "2026-12-31");
    assert_eq!(json.as_object().map(|o| o.len()), Some(5));
}

#[test]
fn test_payload_accepts_camel_case_field_names() {
    cli_cmd()
        .args(["--set", "studentName=Ann"])
        .arg("payload")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"name\":\"Ann\""));
}

#[test]
fn test_unknown_field_is_rejected() {
    cli_cmd()
        .args(["--set", "favourite_color=blue", "payload"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown card field"));
}

#[test]
fn test_assignment_without_equals_is_rejected() {
    cli_cmd()
        .args(["--set", "student_name", "payload"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("FIELD=VALUE"));
}

// ============================================================================
// SVG Command Tests
// ============================================================================

#[test]
fn test_svg_front_contains_uppercased_name() {
    cli_cmd()
        .args(["--set", "student_name=Jane Doe", "svg"])
        .assert()
        .success()
        .stdout(predicate::str::contains("<svg"))
        .stdout(predicate::str::contains("JANE DOE"))
        .stdout(predicate::str::contains("IDENTITY CARD"));
}

#[test]
fn test_svg_back_shows_serial() {
    cli_cmd()
        .args(["svg", "--side", "back"])
        .assert()
        .success()
        .stdout(predicate::str::contains("SN-123456"))
        .stdout(predicate::str::contains("Not Provided"));
}

#[test]
fn test_svg_written_to_file() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("card.svg");

    cli_cmd()
        .args(["svg", "--out"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote"));

    let markup = std::fs::read_to_string(&out).unwrap();
    assert!(markup.starts_with("<svg"));
}

#[test]
fn test_invalid_side_is_rejected() {
    cli_cmd()
        .args(["svg", "--side", "top"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown card side"));
}

#[test]
fn test_images_are_embedded() {
    let dir = TempDir::new().unwrap();
    let logo = dir.path().join("logo.png");
    std::fs::write(&logo, TINY_PNG).unwrap();

    cli_cmd()
        .arg("--logo")
        .arg(&logo)
        .arg("svg")
        .assert()
        .success()
        .stdout(predicate::str::contains("data:image/png;base64,"));
}

#[test]
fn test_missing_image_fails() {
    let dir = TempDir::new().unwrap();

    cli_cmd()
        .arg("--photo")
        .arg(dir.path().join("missing.jpg"))
        .arg("svg")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Student Portrait"));
}

#[test]
fn test_custom_primary_color() {
    cli_cmd()
        .args(["--primary", "#0f766e", "svg"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#0f766e"));
}

// ============================================================================
// PNG Command Tests
// ============================================================================

#[test]
fn test_png_front_named_after_student() {
    let dir = TempDir::new().unwrap();

    cli_cmd()
        .args(["--set", "student_name=Jane Doe", "png", "--out-dir"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Jane Doe_front.png"));

    let path = dir.path().join("Jane Doe_front.png");
    let img = image::open(&path).expect("exported file should be a PNG");
    assert_eq!(img.width(), 1800);
    assert_eq!(img.height(), 1125);
}

#[test]
fn test_png_back_without_name_uses_fallback() {
    let dir = TempDir::new().unwrap();

    cli_cmd()
        .args(["png", "--side", "back", "--out-dir"])
        .arg(dir.path())
        .assert()
        .success();

    assert!(dir.path().join("id_back.png").exists());
    let leftovers: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "part"))
        .collect();
    assert!(leftovers.is_empty());
}
