//! Pipeline driver: scan, composite, index.

use typenine_fonts::Face;

use crate::config::Config;
use crate::error::Result;
use crate::index::{build_index, GlyphMetric};
use crate::scan::scan;
use crate::strip::{composite, RasterStrip};

/// The finished products of one pipeline run.
#[derive(Debug)]
pub struct Rendered {
    /// The packed glyph raster.
    pub strip: RasterStrip,
    /// The metric table, one entry per glyph plus the sentinel.
    pub index: Vec<GlyphMetric>,
    /// Strip height in pixels.
    pub size_px: u32,
    /// Baseline row in pixels.
    pub ascent_px: u32,
}

/// Run the full pipeline over a loaded face.
///
/// Stages run strictly in order — scan, composite, index — and the first
/// failure aborts the run; there are no retries.
///
/// # Errors
///
/// Propagates scan validation failures and rasterizer draw failures.
pub fn render(face: &dyn Face, config: &Config) -> Result<Rendered> {
    let scanned = scan(face, config)?;
    let strip = composite(face, &scanned)?;
    let index = build_index(&scanned);
    Ok(Rendered {
        strip,
        index,
        size_px: scanned.size_px,
        ascent_px: scanned.ascent_px,
    })
}
