//! Scaled face abstraction over the rendering engines.

use std::sync::Arc;

use crate::data::FontData;
use crate::error::FontError;

/// A glyph bitmap produced by the rasterizer.
///
/// `xmin`/`ymin` position the bitmap relative to the pen: `xmin` is the
/// horizontal offset of the left edge, `ymin` the offset of the *bottom*
/// edge from the baseline (Y up, negative for descenders).
#[derive(Debug, Clone, Default)]
pub struct RasterGlyph {
    pub xmin: i32,
    pub ymin: i32,
    pub width: usize,
    pub height: usize,
    /// Row-major coverage values, 0 (blank) to 255 (fully inked),
    /// `width * height` bytes, top row first.
    pub coverage: Vec<u8>,
}

/// A font face fixed at a pixel size, ready for metric queries and drawing.
///
/// This is the seam between the strip pipeline and the rendering engines.
/// Implementations may back onto real font data or, in tests, synthetic
/// fixed metrics.
pub trait Face {
    /// Ascent above the baseline, in pixels.
    fn ascent(&self) -> f64;

    /// Descent below the baseline, in pixels (positive).
    fn descent(&self) -> f64;

    /// Horizontal advance for a code point, in pixels. `None` when the
    /// font has no glyph for the code point.
    fn advance(&self, ch: char) -> Option<f64>;

    /// Rasterize the glyph for a code point to a coverage bitmap.
    ///
    /// # Errors
    ///
    /// Returns [`FontError::Raster`] if the rendering engine cannot
    /// produce a bitmap.
    fn rasterize(&self, ch: char) -> Result<RasterGlyph, FontError>;
}

/// Production [`Face`]: `ttf-parser` metrics plus `fontdue` coverage,
/// scaled to `size × dpi / 72` pixels.
pub struct ScaledFace {
    data: FontData,
    engine: fontdue::Font,
    px_size: f32,
}

impl ScaledFace {
    /// Load a face from raw TTF/OTF bytes at the given point size and
    /// resolution.
    ///
    /// # Errors
    ///
    /// Returns [`FontError::Parse`] if either engine rejects the data.
    pub fn new(bytes: Arc<[u8]>, size: f64, dpi: f64) -> Result<Self, FontError> {
        let data = FontData::from_bytes(Arc::clone(&bytes))?;
        let engine = fontdue::Font::from_bytes(&*bytes, fontdue::FontSettings::default())
            .map_err(|e| FontError::Parse(e.to_owned()))?;
        Ok(Self {
            data,
            engine,
            px_size: (size * dpi / 72.0) as f32,
        })
    }

    /// The pixel size this face is scaled to.
    #[must_use]
    pub const fn px_size(&self) -> f32 {
        self.px_size
    }

    fn scale(&self) -> f64 {
        self.data.scale(f64::from(self.px_size))
    }
}

impl Face for ScaledFace {
    fn ascent(&self) -> f64 {
        f64::from(self.data.ascender()) * self.scale()
    }

    fn descent(&self) -> f64 {
        -f64::from(self.data.descender()) * self.scale()
    }

    fn advance(&self, ch: char) -> Option<f64> {
        let gid = self.data.glyph_id(ch)?;
        let units = self.data.advance_width(gid)?;
        Some(f64::from(units) * self.scale())
    }

    fn rasterize(&self, ch: char) -> Result<RasterGlyph, FontError> {
        let (metrics, coverage) = self.engine.rasterize(ch, self.px_size);
        Ok(RasterGlyph {
            xmin: metrics.xmin,
            ymin: metrics.ymin,
            width: metrics.width,
            height: metrics.height,
            coverage,
        })
    }
}

impl std::fmt::Debug for ScaledFace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScaledFace")
            .field("data", &self.data)
            .field("px_size", &self.px_size)
            .finish_non_exhaustive()
    }
}
