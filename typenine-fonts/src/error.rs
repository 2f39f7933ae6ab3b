//! Font loading and rasterization errors.

use std::fmt;

/// Errors that can occur when loading or rasterizing a font.
#[derive(Debug)]
pub enum FontError {
    /// The font data could not be parsed.
    Parse(String),
    /// The rendering engine failed to produce a bitmap for a glyph.
    Raster {
        /// Code point whose glyph failed to rasterize.
        codepoint: char,
        /// Reason reported by the rendering engine.
        reason: String,
    },
}

impl fmt::Display for FontError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(msg) => write!(f, "font parse error: {msg}"),
            Self::Raster { codepoint, reason } => {
                write!(
                    f,
                    "cannot rasterize U+{:04X}: {reason}",
                    u32::from(*codepoint)
                )
            }
        }
    }
}

impl std::error::Error for FontError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_display() {
        let err = FontError::Parse("bad magic".to_owned());
        assert_eq!(format!("{err}"), "font parse error: bad magic");
    }

    #[test]
    fn raster_error_names_codepoint() {
        let err = FontError::Raster {
            codepoint: 'A',
            reason: "no outline".to_owned(),
        };
        let s = format!("{err}");
        assert!(s.contains("U+0041"), "missing code point: {s}");
        assert!(s.contains("no outline"), "missing reason: {s}");
    }
}
