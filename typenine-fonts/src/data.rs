//! Font data wrapper around `ttf-parser`.

use std::sync::Arc;

use crate::error::FontError;

/// Parsed font data.
///
/// Stores owned font bytes and cached global metrics. A
/// `ttf_parser::Face` is created on demand for individual queries —
/// re-parsing is sub-microsecond (header validation and offset table
/// construction, no allocation).
#[derive(Clone)]
pub struct FontData {
    bytes: Arc<[u8]>,
    /// Font units per em (design coordinate space).
    units_per_em: u16,
    /// Global ascender in design units (positive).
    ascender: i16,
    /// Global descender in design units (negative).
    descender: i16,
}

impl FontData {
    /// Parse font data from an owned byte buffer.
    ///
    /// # Errors
    ///
    /// Returns [`FontError::Parse`] if the data is not a valid
    /// OpenType/TrueType font.
    pub fn from_bytes(bytes: Arc<[u8]>) -> Result<Self, FontError> {
        let face =
            ttf_parser::Face::parse(&bytes, 0).map_err(|e| FontError::Parse(e.to_string()))?;
        Ok(Self {
            units_per_em: face.units_per_em(),
            ascender: face.ascender(),
            descender: face.descender(),
            bytes,
        })
    }

    /// Create a temporary `Face` reference for queries.
    fn face(&self) -> ttf_parser::Face<'_> {
        #[expect(clippy::expect_used, reason = "bytes were validated at construction")]
        ttf_parser::Face::parse(&self.bytes, 0).expect("font bytes validated at construction")
    }

    /// Font units per em (design coordinate space).
    #[must_use]
    pub const fn units_per_em(&self) -> u16 {
        self.units_per_em
    }

    /// Global ascender in design units (positive, above the baseline).
    #[must_use]
    pub const fn ascender(&self) -> i16 {
        self.ascender
    }

    /// Global descender in design units (negative, below the baseline).
    #[must_use]
    pub const fn descender(&self) -> i16 {
        self.descender
    }

    /// Scale factor from design units to pixels at the given pixel size.
    #[must_use]
    pub fn scale(&self, px_size: f64) -> f64 {
        px_size / f64::from(self.units_per_em)
    }

    /// Whether a character has a glyph in this font.
    #[must_use]
    pub fn has_glyph(&self, ch: char) -> bool {
        self.face().glyph_index(ch).is_some()
    }

    /// Map a character to its glyph ID. Returns `None` if not in the cmap.
    #[must_use]
    pub fn glyph_id(&self, ch: char) -> Option<u16> {
        self.face().glyph_index(ch).map(|g| g.0)
    }

    /// Horizontal advance width for a glyph, in design units.
    #[must_use]
    pub fn advance_width(&self, glyph_id: u16) -> Option<u16> {
        self.face().glyph_hor_advance(ttf_parser::GlyphId(glyph_id))
    }
}

impl std::fmt::Debug for FontData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontData")
            .field("units_per_em", &self.units_per_em)
            .field("ascender", &self.ascender)
            .field("descender", &self.descender)
            .field("bytes_len", &self.bytes.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn garbage_bytes_are_rejected() {
        let bytes: Arc<[u8]> = Arc::from(&b"definitely not a font"[..]);
        let err = FontData::from_bytes(bytes);
        assert!(err.is_err(), "garbage should not parse");
    }

    #[test]
    fn empty_bytes_are_rejected() {
        let bytes: Arc<[u8]> = Arc::from(&[][..]);
        assert!(FontData::from_bytes(bytes).is_err());
    }
}
