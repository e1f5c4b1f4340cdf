use eduid_common::model::card::{CardRecord, CardRequest};
use genpdf::elements::Image as PdfImage;
use image::RgbImage;
use log::info;
use png::{BitDepth as PngBitDepth, ColorType as PngColorType, Encoder as PngEncoder};
use std::fs::File;
use std::path::Path;

use super::{generate_card, CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::config::AppConfig;
use crate::error::{CoreError, CoreResult};
use crate::services::records::{insert_record, list_records};

const PT_TO_MM: f64 = 25.4 / 72.0;

/// Place the finished raster as the sole content of a single PDF page whose
/// size equals the card's pixel dimensions in points (one pixel per point at
/// 72 dpi). The raster goes through a temporary PNG which is removed when the
/// call returns; a crash in between may orphan it.
pub fn write_card_pdf(config: &AppConfig, card: &RgbImage, target: &Path) -> CoreResult<()> {
    let mut tmp = tempfile::Builder::new()
        .suffix(".png")
        .tempfile()?;
    {
        let file = tmp.as_file_mut();
        let mut encoder = PngEncoder::new(file, card.width(), card.height());
        encoder.set_color(PngColorType::Rgb);
        encoder.set_depth(PngBitDepth::Eight);
        let mut writer = encoder
            .write_header()
            .map_err(|e| CoreError::Render(format!("PNG header: {e}")))?;
        writer
            .write_image_data(card.as_raw())
            .map_err(|e| CoreError::Render(format!("PNG data: {e}")))?;
    }

    let font_family = load_font(config)?;
    let mut doc = genpdf::Document::new(font_family);
    doc.set_title("Student ID Card");
    doc.set_paper_size(genpdf::Size::new(
        CANVAS_WIDTH as f64 * PT_TO_MM,
        CANVAS_HEIGHT as f64 * PT_TO_MM,
    ));
    let mut decorator = genpdf::SimplePageDecorator::new();
    decorator.set_margins(0);
    doc.set_page_decorator(decorator);

    let mut element = PdfImage::from_path(tmp.path())
        .map_err(|e| CoreError::Pdf(format!("embedding card raster: {e}")))?;
    element.set_dpi(72.0);
    element.set_position(genpdf::Position::new(0.0, 0.0));
    doc.push(element);

    // Create the target ourselves so an unwritable path surfaces as Io, not
    // as a render failure.
    let mut out = File::create(target)?;
    doc.render(&mut out)
        .map_err(|e| CoreError::Pdf(format!("rendering document: {e}")))?;

    info!("card PDF written to {}", target.display());
    Ok(())
    // tmp dropped here, removing the staging PNG.
}

/// Generate a card from `request`, write it to `target` and persist a record
/// carrying the PDF path.
pub fn export_pdf(config: &AppConfig, request: &CardRequest, target: &Path) -> CoreResult<()> {
    let card = generate_card(config, request)?;
    write_card_pdf(config, &card, target)?;
    insert_record(
        config,
        &CardRecord::from_request(request, &target.display().to_string()),
    )?;
    Ok(())
}

/// Re-export the first stored record with this student id. The record carries
/// no image assets, so the card renders on a plain background; no new row is
/// inserted.
pub fn export_record_pdf(config: &AppConfig, student_id: &str, target: &Path) -> CoreResult<()> {
    let records = list_records(config, Some(student_id))?;
    let record = records.first().ok_or_else(|| {
        CoreError::Validation(format!("no record found for student id '{student_id}'"))
    })?;
    let card = generate_card(config, &record.to_request())?;
    write_card_pdf(config, &card, target)
}

/// genpdf needs a real TTF family even for an image-only page. Arial first,
/// then LiberationSans, from the configured dir and known system locations,
/// and finally the faces bundled with the crate.
fn load_font(config: &AppConfig) -> CoreResult<genpdf::fonts::FontFamily<genpdf::fonts::FontData>> {
    let dirs = [
        config.fonts_dir.as_path(),
        Path::new("/usr/share/fonts/truetype/liberation"),
        Path::new("/usr/share/fonts/liberation"),
        Path::new("/usr/share/fonts/liberation-sans-fonts"),
    ];
    for dir in dirs {
        for family in ["Arial", "LiberationSans"] {
            if let Ok(found) = genpdf::fonts::from_files(dir, family, None) {
                return Ok(found);
            }
        }
    }

    let regular = genpdf::fonts::FontData::new(crate::fonts::EMBEDDED_REGULAR.to_vec(), None)
        .map_err(|e| CoreError::Pdf(format!("bundled regular face rejected: {e}")))?;
    let bold = genpdf::fonts::FontData::new(crate::fonts::EMBEDDED_BOLD.to_vec(), None)
        .map_err(|e| CoreError::Pdf(format!("bundled bold face rejected: {e}")))?;
    Ok(genpdf::fonts::FontFamily {
        regular: regular.clone(),
        bold: bold.clone(),
        italic: regular,
        bold_italic: bold,
    })
}
