//! Plan 9 image serialization.

use std::io::{self, Write};

use typenine_core::RasterStrip;

use crate::field;

/// Channel descriptor for one-byte-per-pixel greyscale.
const CHANNEL_TAG: &str = "k8";

/// Serialize the strip as an uncompressed Plan 9 image.
///
/// Emits five header fields — the `k8` channel tag and the bounds
/// (0, 0, width, height) — followed by exactly `width × height` raw pixel
/// bytes, top row first, left to right. Degenerate strips (zero width or
/// height) still emit the full header and zero pixel bytes.
///
/// # Errors
///
/// Propagates any write failure.
pub fn write_image<W: Write>(w: &mut W, strip: &RasterStrip) -> io::Result<()> {
    field(w, CHANNEL_TAG)?;
    field(w, 0)?;
    field(w, 0)?;
    field(w, strip.width())?;
    field(w, strip.height())?;
    w.write_all(strip.pixels())
}
