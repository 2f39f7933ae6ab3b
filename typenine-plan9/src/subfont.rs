//! Plan 9 subfont metric serialization.

use std::io::{self, Write};

use typenine_core::{GlyphMetric, GLYPH_COUNT};

use crate::field;

/// Bytes per metric record on the wire.
pub const RECORD_LEN: usize = 6;

/// Serialize the subfont header and metric table.
///
/// Three header fields — glyph count, strip height, baseline — then one
/// 6-byte record per table entry with no separators: x offset as
/// little-endian 16-bit, top, bottom, left bearing (signed value
/// reinterpreted as a byte), width.
///
/// # Errors
///
/// Propagates any write failure.
pub fn write_subfont<W: Write>(
    w: &mut W,
    table: &[GlyphMetric],
    size_px: u32,
    ascent_px: u32,
) -> io::Result<()> {
    field(w, GLYPH_COUNT)?;
    field(w, size_px)?;
    field(w, ascent_px)?;
    for entry in table {
        let [x_lo, x_hi] = entry.x.to_le_bytes();
        w.write_all(&[
            x_lo,
            x_hi,
            entry.top,
            entry.bottom,
            entry.left as u8,
            entry.width,
        ])?;
    }
    Ok(())
}
