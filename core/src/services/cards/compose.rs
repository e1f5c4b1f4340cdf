//! Raster compositing for the card: background, circular-cropped assets,
//! text and the final QR paste. Optional assets that are missing or
//! unreadable are logged and skipped; this module never fails a render over
//! them.

use eduid_common::model::card::CardRequest;
use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage, RgbImage};
use log::warn;
use rusttype::{point, Font, Scale};
use std::path::Path;

use super::{
    CANVAS_HEIGHT, CANVAS_WIDTH, INFO_LINE_HEIGHT, INFO_SIZE, INFO_START_Y, INFO_X, LOGO_POS,
    LOGO_SIZE, NAME_SIZE, NAME_Y, PHOTO_SIZE, PHOTO_Y, QR_POS, TITLE_SIZE, TITLE_TEXT, TITLE_Y,
};
use crate::fonts::FontSet;

const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);
const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Render every card element except the QR glyph.
pub fn render_base(request: &CardRequest, fonts: &FontSet) -> RgbaImage {
    let mut canvas = load_background(request.background.as_deref());

    if let Some(bold) = &fonts.bold {
        draw_text_centered(&mut canvas, bold, TITLE_SIZE, TITLE_Y, TITLE_TEXT);
    }

    if let Some(path) = request.logo.as_deref() {
        if let Some(logo) = load_rounded(path, LOGO_SIZE.0, LOGO_SIZE.1) {
            imageops::overlay(&mut canvas, &logo, LOGO_POS.0, LOGO_POS.1);
        }
    }

    if let Some(path) = request.photo.as_deref() {
        if let Some(photo) = load_rounded(path, PHOTO_SIZE.0, PHOTO_SIZE.1) {
            let x = (CANVAS_WIDTH - PHOTO_SIZE.0) as i64 / 2;
            imageops::overlay(&mut canvas, &photo, x, PHOTO_Y);
        }
    }

    if let Some(bold) = &fonts.bold {
        draw_text_centered(&mut canvas, bold, NAME_SIZE, NAME_Y, &request.name);
    }

    if let Some(regular) = &fonts.regular {
        let lines = [
            ("ID", request.student_id.as_str()),
            ("Course", request.course.as_str()),
            ("Year", request.year.as_str()),
            ("Department", request.department.as_str()),
            ("Phone", request.phone.as_str()),
            ("Email", request.email.as_str()),
        ];
        let mut y = INFO_START_Y;
        for (label, value) in lines {
            draw_text(
                &mut canvas,
                regular,
                INFO_SIZE,
                INFO_X,
                y,
                &format!("{label}: {value}"),
            );
            y += INFO_LINE_HEIGHT;
        }
    }

    canvas
}

/// Paste the rendered QR glyph at its fixed anchor. Additive: nothing else on
/// the canvas is touched.
pub fn paste_qr(canvas: &mut RgbaImage, qr: &RgbaImage) {
    imageops::overlay(canvas, qr, QR_POS.0, QR_POS.1);
}

/// Drop the alpha channel for the final output by flattening over white.
pub fn flatten(canvas: RgbaImage) -> RgbImage {
    let (w, h) = canvas.dimensions();
    let mut background = RgbaImage::from_pixel(w, h, WHITE);
    imageops::overlay(&mut background, &canvas, 0, 0);
    image::DynamicImage::ImageRgba8(background).to_rgb8()
}

fn load_background(path: Option<&Path>) -> RgbaImage {
    if let Some(path) = path {
        match image::open(path) {
            Ok(img) => {
                // Non-uniform scaling to the canvas is intended.
                return img
                    .resize_exact(CANVAS_WIDTH, CANVAS_HEIGHT, FilterType::Lanczos3)
                    .to_rgba8();
            }
            Err(e) => warn!("background '{}' skipped: {e}", path.display()),
        }
    }
    RgbaImage::from_pixel(CANVAS_WIDTH, CANVAS_HEIGHT, WHITE)
}

/// Load an optional asset, resize it to the slot and crop it to the inscribed
/// ellipse. `None` when the file cannot be read or decoded.
fn load_rounded(path: &Path, width: u32, height: u32) -> Option<RgbaImage> {
    let img = match image::open(path) {
        Ok(img) => img,
        Err(e) => {
            warn!("asset '{}' skipped: {e}", path.display());
            return None;
        }
    };
    let mut img = img
        .resize_exact(width, height, FilterType::Lanczos3)
        .to_rgba8();
    apply_ellipse_mask(&mut img);
    Some(img)
}

/// Zero the alpha of every pixel outside the ellipse inscribed in the image
/// rectangle.
fn apply_ellipse_mask(img: &mut RgbaImage) {
    let (w, h) = img.dimensions();
    let (rx, ry) = (w as f32 / 2.0, h as f32 / 2.0);
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let dx = (x as f32 + 0.5 - rx) / rx;
        let dy = (y as f32 + 0.5 - ry) / ry;
        if dx * dx + dy * dy > 1.0 {
            pixel.0[3] = 0;
        }
    }
}

fn text_width(font: &Font<'_>, px: f32, text: &str) -> f32 {
    let scale = Scale::uniform(px);
    let v_metrics = font.v_metrics(scale);
    font.layout(text, scale, point(0.0, v_metrics.ascent))
        .last()
        .map(|g| g.position().x + g.unpositioned().h_metrics().advance_width)
        .unwrap_or(0.0)
}

fn draw_text_centered(img: &mut RgbaImage, font: &Font<'_>, px: f32, y: i32, text: &str) {
    let width = text_width(font, px, text);
    let x = ((CANVAS_WIDTH as f32 - width) / 2.0) as i32;
    draw_text(img, font, px, x, y, text);
}

/// Rasterise `text` with (`x`, `y`) as the top-left of the line box,
/// alpha-blending each glyph's coverage into the canvas.
fn draw_text(img: &mut RgbaImage, font: &Font<'_>, px: f32, x: i32, y: i32, text: &str) {
    let scale = Scale::uniform(px);
    let v_metrics = font.v_metrics(scale);
    let baseline = y as f32 + v_metrics.ascent;

    for glyph in font.layout(text, scale, point(x as f32, baseline)) {
        let Some(bb) = glyph.pixel_bounding_box() else {
            continue;
        };
        glyph.draw(|gx, gy, coverage| {
            let px_x = gx as i32 + bb.min.x;
            let px_y = gy as i32 + bb.min.y;
            if px_x < 0 || px_y < 0 {
                return;
            }
            let (px_x, px_y) = (px_x as u32, px_y as u32);
            if px_x >= img.width() || px_y >= img.height() {
                return;
            }
            let alpha = coverage.clamp(0.0, 1.0);
            if alpha <= 0.0 {
                return;
            }
            let dst = img.get_pixel_mut(px_x, px_y);
            let inv = 1.0 - alpha;
            for c in 0..3 {
                dst.0[c] = (BLACK.0[c] as f32 * alpha + dst.0[c] as f32 * inv) as u8;
            }
            dst.0[3] = 255;
        });
    }
}
