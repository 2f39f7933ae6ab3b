//! Subfont metric table construction.

use crate::scan::GlyphScan;

/// Number of glyphs in the subfont (code points 0x00 through 0x7E).
pub const GLYPH_COUNT: usize = 127;

/// Metric table length: one entry per glyph plus the trailing sentinel.
pub const TABLE_ENTRIES: usize = GLYPH_COUNT + 1;

/// One entry of the subfont metric table.
///
/// Field layout mirrors the 6-byte wire record: a 16-bit strip offset
/// followed by four single-byte fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GlyphMetric {
    /// Horizontal pixel position in the strip where the glyph begins.
    pub x: i16,
    /// First of the glyph's rows within the strip; always 0 here.
    pub top: u8,
    /// One past the last of the glyph's rows; the strip height for every
    /// real glyph.
    pub bottom: u8,
    /// Left bearing; always 0 here.
    pub left: i8,
    /// Pixel advance.
    pub width: u8,
}

/// Build the metric table for a finished scan.
///
/// One entry per slot in order, then a sentinel carrying the total strip
/// width in `x` and zeros elsewhere — a reader computes the last glyph's
/// span as `next.x - this.x`. Field ranges were validated during the
/// scan, so the narrowing casts here cannot truncate.
#[must_use]
pub fn build_index(scan: &GlyphScan) -> Vec<GlyphMetric> {
    let mut table = Vec::with_capacity(scan.slots.len() + 1);
    for slot in &scan.slots {
        table.push(GlyphMetric {
            x: slot.x_px as i16,
            top: 0,
            bottom: scan.size_px as u8,
            left: 0,
            width: slot.width_px as u8,
        });
    }
    table.push(GlyphMetric {
        x: scan.width_px as i16,
        ..GlyphMetric::default()
    });
    table
}
