use eduid_common::model::card::CardRequest;
use image::RgbImage;
use log::debug;
use std::fs;
use std::path::PathBuf;

use super::{compose, qr, upload, QR_SIZE};
use crate::config::AppConfig;
use crate::error::{CoreError, CoreResult};
use crate::fonts::FontSet;

/// Render a finished card.
///
/// Fails with `Validation` when name or student id is missing, and with an
/// I/O or image error when the staged file cannot be written. Missing
/// optional assets never fail the call.
pub fn generate_card(config: &AppConfig, request: &CardRequest) -> CoreResult<RgbImage> {
    if !request.has_mandatory_fields() {
        return Err(CoreError::Validation(
            "name and student id are required".to_string(),
        ));
    }

    let fonts = FontSet::resolve(config);
    let mut canvas = compose::render_base(request, &fonts);

    // Stage the pre-QR card: the upload (or the fallback reference) works
    // from this file. Same student id overwrites; staging is transient.
    fs::create_dir_all(&config.output_dir)?;
    let staged = staged_path(config, &request.student_id);
    canvas.save(&staged)?;
    debug!("staged pre-QR card at {}", staged.display());

    let payload = upload::resolve_qr_payload(config, &staged);
    let glyph = qr::render_qr(&payload, QR_SIZE)?;
    compose::paste_qr(&mut canvas, &glyph);

    Ok(compose::flatten(canvas))
}

/// Where the pre-QR card for this student id is staged.
pub fn staged_path(config: &AppConfig, student_id: &str) -> PathBuf {
    config
        .output_dir
        .join(format!("{}_card.png", sanitize(student_id)))
}

/// Keep the staged filename safe regardless of what the form contained.
fn sanitize(student_id: &str) -> String {
    student_id
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}
