//! # Card Pipeline
//!
//! Produces the printable 630×1000 student identity card. The flow is a
//! deliberate two-phase compose:
//!
//! 1. `compose` renders everything except the QR glyph and the result is
//!    staged to disk.
//! 2. `upload` resolves the QR payload *from that staged file* (the uploaded
//!    image is the argument that produces the very URL the QR encodes) and
//!    falls back to a local file reference when the upload fails.
//! 3. The QR glyph is pasted onto the in-memory image; no re-render happens.
//!
//! `generate` orchestrates the phases and `pdf` places the finished raster on
//! a single exactly-sized PDF page.
//!
//! All layout coordinates are fixed constants taken from the original card
//! design; content that overflows its slot is clipped rather than reflowed.

pub mod compose;
pub mod generate;
pub mod pdf;
pub mod qr;
pub mod upload;

pub use generate::generate_card;
pub use pdf::{export_pdf, export_record_pdf, write_card_pdf};

/// Canvas size in pixels; the PDF page uses the same figures in points.
pub const CANVAS_WIDTH: u32 = 630;
pub const CANVAS_HEIGHT: u32 = 1000;

pub(crate) const TITLE_TEXT: &str = "STUDENT";
pub(crate) const TITLE_Y: i32 = 40;
pub(crate) const TITLE_SIZE: f32 = 48.0;

pub(crate) const LOGO_SIZE: (u32, u32) = (120, 120);
pub(crate) const LOGO_POS: (i64, i64) = (25, 25);

pub(crate) const PHOTO_SIZE: (u32, u32) = (250, 300);
pub(crate) const PHOTO_Y: i64 = 150;

pub(crate) const NAME_Y: i32 = PHOTO_Y as i32 + 320;
pub(crate) const NAME_SIZE: f32 = 40.0;

pub(crate) const INFO_X: i32 = 50;
pub(crate) const INFO_START_Y: i32 = NAME_Y + 90;
pub(crate) const INFO_LINE_HEIGHT: i32 = 45;
pub(crate) const INFO_SIZE: f32 = 26.0;

pub(crate) const QR_SIZE: u32 = 180;
pub(crate) const QR_POS: (i64, i64) = (
    CANVAS_WIDTH as i64 - QR_SIZE as i64 - 40,
    NAME_Y as i64 + 110,
);
