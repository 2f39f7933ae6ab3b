//! Plan 9 bitmap-font wire formats.
//!
//! Serializes a finished glyph strip and metric table into the byte
//! layouts a Plan 9 consumer reads: the uncompressed greyscale image
//! format, the subfont metric blob appended to it, and the two-line font
//! descriptor naming the subfont file.
//!
//! Key layout points:
//! - Headers are ASCII: 11-character right-aligned decimal fields, each
//!   followed by one space (the C `%11d ` convention). A reader may parse
//!   them fixed-width or by whitespace splitting; both work.
//! - Pixel data is raw and uncompressed, one byte per pixel, row-major,
//!   top row first.
//! - Metric records are exactly 6 bytes with the 16-bit offset stored
//!   little-endian. An off-by-one anywhere shifts every subsequent glyph
//!   lookup, so record sizes are fixed constants here.

pub mod descriptor;
pub mod image;
pub mod subfont;

pub use descriptor::write_descriptor;
pub use image::write_image;
pub use subfont::write_subfont;

use std::fmt::Display;
use std::io::{self, Write};

/// Bytes per header field: 11 characters plus the trailing space.
pub const FIELD_WIDTH: usize = 12;

/// Write one header field: an 11-character right-aligned value followed
/// by a single space.
fn field<W: Write>(w: &mut W, value: impl Display) -> io::Result<()> {
    write!(w, "{value:>11} ")
}
