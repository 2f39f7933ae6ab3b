//! Glyph metrics scanning.
//!
//! Walks the subfont's code-point range querying the face for horizontal
//! advances, ceiling-rounds them to whole pixels, and accumulates the slot
//! layout for the strip. Vertical metrics come from the face once, not per
//! glyph.

use typenine_fonts::Face;

use crate::config::{Config, OnMissingGlyph};
use crate::error::{Error, Result};
use crate::index::GLYPH_COUNT;

/// One glyph's slot in the strip layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphSlot {
    /// The code point this slot renders.
    pub codepoint: char,
    /// Horizontal pixel position where the slot begins.
    pub x_px: u32,
    /// Slot width in pixels (the ceiled advance).
    pub width_px: u32,
    /// Whether the font lacks a glyph for this code point.
    pub missing: bool,
}

/// The scanned layout: per-glyph slots plus shared vertical metrics.
#[derive(Debug, Clone)]
pub struct GlyphScan {
    /// Slots for code points 0..=126, in order.
    pub slots: Vec<GlyphSlot>,
    /// Total strip width in pixels (sum of slot widths).
    pub width_px: u32,
    /// Strip height in pixels: ceil(ascent) + ceil(descent).
    pub size_px: u32,
    /// Baseline row: ceil(ascent).
    pub ascent_px: u32,
}

/// Scan the face across the subfont's code-point range.
///
/// Advances are rounded up to whole pixels so no glyph pixel column is
/// clipped. Code points absent from the font are resolved per
/// [`OnMissingGlyph`]; a substitute box reserves half an em.
///
/// # Errors
///
/// Returns [`Error::MissingGlyph`] under the `Fail` policy,
/// [`Error::GlyphTooWide`] if an advance exceeds the 8-bit width field,
/// and [`Error::StripTooTall`] if the strip height exceeds the 8-bit
/// bottom field.
pub fn scan(face: &dyn Face, config: &Config) -> Result<GlyphScan> {
    let ascent_px = ceil_px(face.ascent());
    let size_px = ascent_px + ceil_px(face.descent());
    if size_px > u32::from(u8::MAX) {
        return Err(Error::StripTooTall(size_px));
    }

    let mut slots = Vec::with_capacity(GLYPH_COUNT);
    let mut x_px = 0u32;
    for cp in 0..GLYPH_COUNT {
        let ch = char::from(cp as u8);
        let (width_px, missing) = match face.advance(ch) {
            Some(advance) => (ceil_px(advance), false),
            None => match config.on_missing {
                OnMissingGlyph::ZeroWidth => (0, true),
                OnMissingGlyph::SubstituteBox => (ceil_px(config.px_size() / 2.0), true),
                OnMissingGlyph::Fail => return Err(Error::MissingGlyph(ch)),
            },
        };
        if width_px > u32::from(u8::MAX) {
            return Err(Error::GlyphTooWide {
                codepoint: ch,
                width_px,
            });
        }
        slots.push(GlyphSlot {
            codepoint: ch,
            x_px,
            width_px,
            missing,
        });
        x_px += width_px;
    }

    Ok(GlyphScan {
        slots,
        width_px: x_px,
        size_px,
        ascent_px,
    })
}

/// Ceiling-round a pixel measure, clamping negatives to zero.
fn ceil_px(v: f64) -> u32 {
    v.ceil().max(0.0) as u32
}
