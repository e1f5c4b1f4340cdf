//! TrueType font resolution for the card compositor.
//!
//! The original shipped with Arial and fell back to a bitmap default when it
//! was missing. The same contract holds here: disk candidates are tried
//! first (configured dir, then known system locations) and a bundled DejaVu
//! Sans face is the last resort, so text always renders and a missing font
//! never fails the render.

use crate::config::AppConfig;
use log::warn;
use rusttype::Font;
use std::fs;
use std::path::{Path, PathBuf};

const BOLD_CANDIDATES: &[&str] = &["arialbd.ttf", "LiberationSans-Bold.ttf"];
const REGULAR_CANDIDATES: &[&str] = &["arial.ttf", "LiberationSans-Regular.ttf"];

/// Directories searched after the configured fonts dir.
const SYSTEM_FONT_DIRS: &[&str] = &[
    "/usr/share/fonts/truetype/liberation",
    "/usr/share/fonts/liberation",
    "/usr/share/fonts/liberation-sans-fonts",
];

/// Bundled fallback faces (DejaVu Sans, Bitstream Vera license).
pub(crate) const EMBEDDED_BOLD: &[u8] = include_bytes!("../assets/fonts/DejaVuSans-Bold.ttf");
pub(crate) const EMBEDDED_REGULAR: &[u8] = include_bytes!("../assets/fonts/DejaVuSans.ttf");

/// The two faces the card layout uses: bold for title and name, regular for
/// the info lines. `None` only if even the bundled face fails to parse,
/// which would mean a corrupted build.
pub struct FontSet {
    pub bold: Option<Font<'static>>,
    pub regular: Option<Font<'static>>,
}

impl FontSet {
    /// Resolve both faces, logging when a disk face is unavailable.
    pub fn resolve(config: &AppConfig) -> Self {
        let bold = load_first(&config.fonts_dir, BOLD_CANDIDATES).or_else(|| {
            warn!("no bold TTF face found on disk; using the bundled DejaVu Sans Bold");
            Font::try_from_bytes(EMBEDDED_BOLD)
        });
        let regular = load_first(&config.fonts_dir, REGULAR_CANDIDATES).or_else(|| {
            warn!("no regular TTF face found on disk; using the bundled DejaVu Sans");
            Font::try_from_bytes(EMBEDDED_REGULAR)
        });
        Self { bold, regular }
    }
}

fn load_first(fonts_dir: &Path, candidates: &[&str]) -> Option<Font<'static>> {
    for name in candidates {
        let mut paths: Vec<PathBuf> = vec![fonts_dir.join(name)];
        paths.extend(SYSTEM_FONT_DIRS.iter().map(|d| Path::new(d).join(name)));
        for path in paths {
            if let Ok(bytes) = fs::read(&path) {
                match Font::try_from_vec(bytes) {
                    Some(font) => return Some(font),
                    None => warn!("unparsable font file skipped: {}", path.display()),
                }
            }
        }
    }
    None
}
