//! Font resolution and text measurement for the launch-screen composer.
//!
//! Fonts are resolved by walking an ordered list of sources: well-known
//! system font paths first, then an embedded DejaVu Sans that is always
//! available. Text measurement has its own fallback: precise scaled-advance
//! measurement when every glyph is mapped, otherwise a character-count
//! estimate.

use ab_glyph::{Font, FontVec, PxScale, ScaleFont};
use std::fs;

/// DejaVu Sans, embedded so the last resolution step can never fail.
const FALLBACK_FONT_DATA: &[u8] = include_bytes!("../assets/fonts/DejaVuSans.ttf");

/// Width-per-character factor for the estimated measurement, as a fraction
/// of the pixel size. Roughly matches an average sans-serif advance.
const ESTIMATE_ADVANCE_FACTOR: f32 = 0.5;

/// A single font-resolution strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontSource {
    /// Read a font file from an absolute path.
    Path(&'static str),
    /// Use the embedded fallback font.
    Embedded,
}

/// System font locations tried before the embedded fallback, most
/// preferred first. Covers macOS, Windows, and common Linux layouts.
pub const SYSTEM_FONT_PATHS: &[&str] = &[
    "/System/Library/Fonts/Helvetica.ttc",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
];

/// The default resolution chain: every system path, then the embedded font.
pub fn default_sources() -> Vec<FontSource> {
    let mut sources: Vec<FontSource> = SYSTEM_FONT_PATHS
        .iter()
        .map(|&path| FontSource::Path(path))
        .collect();
    sources.push(FontSource::Embedded);
    sources
}

/// Try each source in order, returning the first font that loads.
pub fn resolve_font(sources: &[FontSource]) -> Option<FontVec> {
    for source in sources {
        let data = match source {
            FontSource::Path(path) => match fs::read(path) {
                Ok(data) => data,
                Err(_) => continue,
            },
            FontSource::Embedded => FALLBACK_FONT_DATA.to_vec(),
        };
        if let Ok(font) = FontVec::try_from_vec(data) {
            return Some(font);
        }
    }
    None
}

/// Resolve through the default chain. The embedded terminal step makes
/// this infallible.
pub fn load_font() -> FontVec {
    resolve_font(&default_sources()).unwrap_or_else(|| {
        FontVec::try_from_vec(FALLBACK_FONT_DATA.to_vec())
            .expect("embedded fallback font data is a valid TrueType font")
    })
}

/// Precise text width in pixels: scaled advances plus kerning.
///
/// Returns `None` when any character maps to the font's `.notdef` glyph,
/// which signals the caller to fall back to [`estimate_text_width`].
pub fn measure_text(font: &FontVec, px: f32, text: &str) -> Option<f32> {
    let scaled = font.as_scaled(PxScale::from(px));
    let mut width = 0.0;
    let mut prev = None;
    for c in text.chars() {
        let id = scaled.glyph_id(c);
        if id.0 == 0 {
            return None;
        }
        if let Some(prev_id) = prev {
            width += scaled.kern(prev_id, id);
        }
        width += scaled.h_advance(id);
        prev = Some(id);
    }
    Some(width)
}

/// Character-count width estimate used when precise measurement fails.
pub fn estimate_text_width(px: f32, text: &str) -> f32 {
    text.chars().count() as f32 * px * ESTIMATE_ADVANCE_FACTOR
}

/// Measured width when available, estimated width otherwise.
pub fn text_width(font: &FontVec, px: f32, text: &str) -> f32 {
    measure_text(font, px, text).unwrap_or_else(|| estimate_text_width(px, text))
}
