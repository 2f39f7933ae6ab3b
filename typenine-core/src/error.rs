//! Pipeline error types.

use std::fmt;

use typenine_fonts::FontError;

/// Convenience alias for pipeline results.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by the rendering pipeline.
///
/// Every variant is terminal: the pipeline never retries, and the first
/// failure aborts all remaining stages.
#[derive(Debug)]
pub enum Error {
    /// The font has no glyph for a code point and the policy is
    /// [`OnMissingGlyph::Fail`](crate::config::OnMissingGlyph::Fail).
    MissingGlyph(char),
    /// The rasterizer failed while drawing into the strip.
    Draw(FontError),
    /// A single glyph advance does not fit the 8-bit width field.
    GlyphTooWide {
        /// The offending code point.
        codepoint: char,
        /// Its ceiled advance in pixels.
        width_px: u32,
    },
    /// The strip height does not fit the 8-bit bottom field.
    StripTooTall(u32),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingGlyph(ch) => {
                write!(f, "font has no glyph for U+{:04X}", u32::from(*ch))
            }
            Self::Draw(e) => write!(f, "draw failed: {e}"),
            Self::GlyphTooWide {
                codepoint,
                width_px,
            } => write!(
                f,
                "glyph U+{:04X} is {width_px} pixels wide (limit 255)",
                u32::from(*codepoint)
            ),
            Self::StripTooTall(h) => {
                write!(f, "strip height {h} exceeds the 255 pixel limit")
            }
        }
    }
}

impl std::error::Error for Error {}
