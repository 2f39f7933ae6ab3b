//! Pipeline configuration.

/// Policy for code points the font has no glyph for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OnMissingGlyph {
    /// Give the code point a zero advance and draw nothing.
    #[default]
    ZeroWidth,
    /// Reserve half an em and draw a hollow box in the slot.
    SubstituteBox,
    /// Abort the scan at the first missing code point.
    Fail,
}

/// Immutable settings for one pipeline run.
#[derive(Debug, Clone, Copy)]
pub struct Config {
    /// Font size in points.
    pub size: f64,
    /// Target resolution in dots per inch.
    pub dpi: f64,
    /// Missing-glyph policy.
    pub on_missing: OnMissingGlyph,
}

impl Config {
    /// Pixel size the face is rendered at: `size × dpi / 72`.
    #[must_use]
    pub fn px_size(&self) -> f64 {
        self.size * self.dpi / 72.0
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            size: 14.0,
            dpi: 72.0,
            on_missing: OnMissingGlyph::default(),
        }
    }
}
