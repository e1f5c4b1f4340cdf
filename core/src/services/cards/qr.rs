use image::imageops::FilterType;
use image::{Rgba, RgbaImage};
use qrcode::{Color, QrCode};

use crate::error::{CoreError, CoreResult};

/// Modules drawn per side as the quiet zone around the code.
const QUIET_ZONE: u32 = 4;
/// Pixels per module before the final resize.
const MODULE_SCALE: u32 = 4;

/// Encode `text` and rasterise it to an opaque `size`×`size` glyph: black
/// modules on white, nearest-neighbour scaled so module edges stay crisp.
/// Deterministic for identical input.
pub fn render_qr(text: &str, size: u32) -> CoreResult<RgbaImage> {
    let code = QrCode::new(text.as_bytes())
        .map_err(|e| CoreError::Render(format!("QR encoding failed: {e}")))?;

    let modules = code.width() as u32;
    let side = (modules + 2 * QUIET_ZONE) * MODULE_SCALE;
    let mut img = RgbaImage::from_pixel(side, side, Rgba([255, 255, 255, 255]));

    for y in 0..modules {
        for x in 0..modules {
            if code[(x as usize, y as usize)] == Color::Dark {
                for dy in 0..MODULE_SCALE {
                    for dx in 0..MODULE_SCALE {
                        let px = (QUIET_ZONE + x) * MODULE_SCALE + dx;
                        let py = (QUIET_ZONE + y) * MODULE_SCALE + dy;
                        img.put_pixel(px, py, Rgba([0, 0, 0, 255]));
                    }
                }
            }
        }
    }

    Ok(image::DynamicImage::ImageRgba8(img)
        .resize_exact(size, size, FilterType::Nearest)
        .to_rgba8())
}
