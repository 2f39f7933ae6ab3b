//! Font descriptor serialization.

use std::io::{self, Write};

/// Code-point range covered by the generated subfont, as it appears in
/// the descriptor.
const RANGE: &str = "0x0000 0x007F";

/// Write the two-line font descriptor.
///
/// Line 1 carries the strip height and baseline; line 2 maps the covered
/// code-point range to the subfont file. A font-loading consumer reads
/// this first to find the right subfont for a requested code point.
///
/// # Errors
///
/// Propagates any write failure.
pub fn write_descriptor<W: Write>(
    w: &mut W,
    size_px: u32,
    ascent_px: u32,
    subfont_name: &str,
) -> io::Result<()> {
    writeln!(w, "{size_px} {ascent_px}")?;
    writeln!(w, "{RANGE} {subfont_name}")
}

#[cfg(test)]
#[expect(clippy::expect_used, reason = "tests may panic")]
mod tests {
    use super::*;

    #[test]
    fn descriptor_is_two_exact_lines() {
        let mut buf = Vec::new();
        write_descriptor(&mut buf, 16, 12, "R.14.1").expect("write");
        let text = String::from_utf8(buf).expect("ascii");
        assert_eq!(text, "16 12\n0x0000 0x007F R.14.1\n");
    }

    #[test]
    fn subfont_name_is_written_verbatim() {
        let mut buf = Vec::new();
        write_descriptor(&mut buf, 20, 15, "R.18.1").expect("write");
        let text = String::from_utf8(buf).expect("ascii");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines, ["20 15", "0x0000 0x007F R.18.1"]);
    }
}
