//! End-to-end card generation without any network: the upload key stays
//! empty, so every QR payload is the deterministic local reference.

use eduid_common::model::card::CardRequest;
use eduid_core::services::cards::{generate, generate_card, CANVAS_HEIGHT, CANVAS_WIDTH};
use eduid_core::AppConfig;
use image::{Rgba, RgbaImage};
use std::path::PathBuf;

fn test_config(dir: &tempfile::TempDir) -> AppConfig {
    AppConfig {
        db_path: dir.path().join("pipeline.db"),
        output_dir: dir.path().join("cards"),
        upload_key: String::new(),
        ..AppConfig::default()
    }
}

fn request(student_id: &str) -> CardRequest {
    CardRequest {
        name: "Ada Lovelace".into(),
        student_id: student_id.into(),
        course: "BSc Computing".into(),
        year: "2".into(),
        department: "Computer".into(),
        phone: "555-0100".into(),
        email: "ada@example.com".into(),
        ..Default::default()
    }
}

fn fixture_image(dir: &tempfile::TempDir, name: &str, color: [u8; 4]) -> PathBuf {
    let path = dir.path().join(name);
    RgbaImage::from_pixel(64, 64, Rgba(color)).save(&path).unwrap();
    path
}

#[test]
fn card_has_fixed_dimensions_without_assets() {
    let dir = tempfile::tempdir().unwrap();
    let card = generate_card(&test_config(&dir), &request("S123")).unwrap();
    assert_eq!(card.dimensions(), (CANVAS_WIDTH, CANVAS_HEIGHT));
}

#[test]
fn card_has_fixed_dimensions_with_all_assets() {
    let dir = tempfile::tempdir().unwrap();
    let mut req = request("S123");
    req.background = Some(fixture_image(&dir, "bg.png", [220, 240, 220, 255]));
    req.logo = Some(fixture_image(&dir, "logo.png", [0, 0, 200, 255]));
    req.photo = Some(fixture_image(&dir, "photo.png", [200, 0, 0, 255]));

    let card = generate_card(&test_config(&dir), &req).unwrap();
    assert_eq!(card.dimensions(), (CANVAS_WIDTH, CANVAS_HEIGHT));
}

#[test]
fn staged_file_is_written_and_overwritten() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(&dir);
    let staged = generate::staged_path(&config, "S123");

    generate_card(&config, &request("S123")).unwrap();
    assert!(staged.exists());
    let first = std::fs::read(&staged).unwrap();

    // Same id with a photo this time: the staged file is replaced in place.
    let mut req = request("S123");
    req.photo = Some(fixture_image(&dir, "photo.png", [200, 0, 0, 255]));
    generate_card(&config, &req).unwrap();
    let second = std::fs::read(&staged).unwrap();
    assert_ne!(first, second);
}

#[test]
fn staged_file_is_pre_qr() {
    // The QR anchor region of the staged image must still be background;
    // the glyph is pasted only onto the in-memory result.
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(&dir);
    let card = generate_card(&config, &request("S77")).unwrap();

    let staged = image::open(generate::staged_path(&config, "S77"))
        .unwrap()
        .to_rgb8();

    // Center of the QR slot: (410..590, 580..760).
    let (qx, qy) = (410 + 90, 580 + 90);
    assert_eq!(staged.get_pixel(qx, qy).0, [255, 255, 255]);
    // The finished card carries QR modules somewhere in that slot.
    let mut has_dark = false;
    for y in 580..760 {
        for x in 410..590 {
            if card.get_pixel(x, y).0[0] < 64 {
                has_dark = true;
            }
        }
    }
    assert!(has_dark, "finished card should carry a QR glyph");
}

#[test]
fn different_photos_change_only_the_photo_region() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(&dir);

    let mut red_req = request("S123");
    red_req.photo = Some(fixture_image(&dir, "red.png", [200, 0, 0, 255]));
    let mut blue_req = request("S123");
    blue_req.photo = Some(fixture_image(&dir, "blue.png", [0, 0, 200, 255]));

    let red = generate_card(&config, &red_req).unwrap();
    let blue = generate_card(&config, &blue_req).unwrap();

    // Photo slot differs.
    let (cx, cy) = (CANVAS_WIDTH / 2, 150 + 150);
    assert_ne!(red.get_pixel(cx, cy), blue.get_pixel(cx, cy));

    // Same student id means same payload, so the text band between the name
    // row and the QR anchor is byte-identical.
    for y in 470..575 {
        for x in 0..CANVAS_WIDTH {
            assert_eq!(
                red.get_pixel(x, y),
                blue.get_pixel(x, y),
                "text band diverged at ({x}, {y})"
            );
        }
    }
}

#[test]
fn empty_optional_fields_render_fine() {
    let dir = tempfile::tempdir().unwrap();
    let req = CardRequest {
        name: "Ada".into(),
        student_id: "S1".into(),
        ..Default::default()
    };
    let card = generate_card(&test_config(&dir), &req).unwrap();
    assert_eq!(card.dimensions(), (CANVAS_WIDTH, CANVAS_HEIGHT));
}
