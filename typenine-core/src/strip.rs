//! Greyscale strip allocation and glyph compositing.

use typenine_fonts::{Face, RasterGlyph};

use crate::error::{Error, Result};
use crate::scan::{GlyphScan, GlyphSlot};

/// Intensity of fully inked pixels.
const FOREGROUND: u8 = u8::MAX;

/// A single-channel raster holding every glyph side by side.
///
/// Pixels are row-major, top row first, one byte per pixel. Background is
/// 0; inked pixels range up to 255.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterStrip {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl RasterStrip {
    /// Allocate a strip filled with the background value.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize],
        }
    }

    /// Build a strip from existing pixel data. Returns `None` when the
    /// buffer length does not match `width × height`.
    #[must_use]
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<u8>) -> Option<Self> {
        if pixels.len() == width as usize * height as usize {
            Some(Self {
                width,
                height,
                pixels,
            })
        } else {
            None
        }
    }

    /// Strip width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Strip height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// The raw pixel buffer, row-major, top row first.
    #[must_use]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Read one pixel. Out-of-bounds reads return the background value.
    #[must_use]
    pub fn get(&self, x: u32, y: u32) -> u8 {
        if x >= self.width || y >= self.height {
            return 0;
        }
        self.pixels[y as usize * self.width as usize + x as usize]
    }

    /// Max-blend one pixel; out-of-bounds writes are discarded.
    fn blend_max(&mut self, x: i64, y: i64, value: u8) {
        if x < 0 || y < 0 || x >= i64::from(self.width) || y >= i64::from(self.height) {
            return;
        }
        let idx = y as usize * self.width as usize + x as usize;
        self.pixels[idx] = self.pixels[idx].max(value);
    }
}

/// Render every slot of the scan into a freshly allocated strip.
///
/// The pen starts on the baseline row and moves right by one slot width
/// per glyph; slots never overlap, so draw order cannot clobber earlier
/// glyphs. Missing slots draw nothing unless the scan reserved a
/// substitute box for them.
///
/// # Errors
///
/// Returns [`Error::Draw`] if the rasterizer fails for any glyph.
pub fn composite(face: &dyn Face, scan: &GlyphScan) -> Result<RasterStrip> {
    let mut strip = RasterStrip::new(scan.width_px, scan.size_px);
    for slot in &scan.slots {
        if slot.missing {
            if slot.width_px > 0 {
                draw_box(&mut strip, slot);
            }
            continue;
        }
        let glyph = face.rasterize(slot.codepoint).map_err(Error::Draw)?;
        blit(&mut strip, &glyph, slot.x_px, scan.ascent_px);
    }
    Ok(strip)
}

/// Copy a coverage bitmap into the strip at the pen position.
///
/// The bitmap's bearings are relative to the pen with Y up; the strip is
/// Y down with the baseline at `ascent_px`. Pixels landing outside the
/// strip (oblique overhangs at either end) are clipped.
fn blit(strip: &mut RasterStrip, glyph: &RasterGlyph, pen_x: u32, baseline: u32) {
    let left = i64::from(pen_x) + i64::from(glyph.xmin);
    let top = i64::from(baseline) - i64::from(glyph.ymin) - glyph.height as i64;
    for row in 0..glyph.height {
        for col in 0..glyph.width {
            let value = glyph.coverage[row * glyph.width + col];
            if value > 0 {
                strip.blend_max(left + col as i64, top + row as i64, value);
            }
        }
    }
}

/// Hollow box marking a missing glyph, inset one pixel from its slot.
fn draw_box(strip: &mut RasterStrip, slot: &GlyphSlot) {
    if slot.width_px < 3 || strip.height() < 3 {
        return;
    }
    let left = i64::from(slot.x_px) + 1;
    let right = i64::from(slot.x_px + slot.width_px) - 2;
    let top = 1i64;
    let bottom = i64::from(strip.height()) - 2;
    for x in left..=right {
        strip.blend_max(x, top, FOREGROUND);
        strip.blend_max(x, bottom, FOREGROUND);
    }
    for y in top..=bottom {
        strip.blend_max(left, y, FOREGROUND);
        strip.blend_max(right, y, FOREGROUND);
    }
}

#[cfg(test)]
#[expect(clippy::expect_used, reason = "tests may panic")]
mod tests {
    use typenine_fonts::FontError;

    use super::*;
    use crate::config::{Config, OnMissingGlyph};
    use crate::scan::scan;

    /// Face drawing a 2×2 solid block one pixel right of the pen.
    struct BlockFace {
        missing: Vec<char>,
        fail_on: Option<char>,
    }

    impl BlockFace {
        fn new() -> Self {
            Self {
                missing: Vec::new(),
                fail_on: None,
            }
        }
    }

    impl Face for BlockFace {
        fn ascent(&self) -> f64 {
            4.0
        }
        fn descent(&self) -> f64 {
            2.0
        }
        fn advance(&self, ch: char) -> Option<f64> {
            if self.missing.contains(&ch) {
                None
            } else {
                Some(4.0)
            }
        }
        fn rasterize(&self, ch: char) -> std::result::Result<RasterGlyph, FontError> {
            if self.fail_on == Some(ch) {
                return Err(FontError::Raster {
                    codepoint: ch,
                    reason: "synthetic failure".to_owned(),
                });
            }
            Ok(RasterGlyph {
                xmin: 1,
                ymin: 0,
                width: 2,
                height: 2,
                coverage: vec![FOREGROUND; 4],
            })
        }
    }

    #[test]
    fn strip_starts_blank() {
        let strip = RasterStrip::new(8, 4);
        assert!(strip.pixels().iter().all(|&p| p == 0));
        assert_eq!(strip.pixels().len(), 32);
    }

    #[test]
    fn from_pixels_rejects_wrong_length() {
        assert!(RasterStrip::from_pixels(4, 4, vec![0; 15]).is_none());
        assert!(RasterStrip::from_pixels(4, 4, vec![0; 16]).is_some());
    }

    #[test]
    fn glyphs_land_on_the_baseline() {
        let face = BlockFace::new();
        let scanned = scan(&face, &Config::default()).expect("scan");
        let strip = composite(&face, &scanned).expect("composite");

        assert_eq!(strip.width(), 4 * scanned.slots.len() as u32);
        assert_eq!(strip.height(), 6);

        // Block for slot 0: rows 2..4 (baseline 4, height 2, ymin 0),
        // columns 1..3 (pen 0, xmin 1).
        assert_eq!(strip.get(1, 2), FOREGROUND);
        assert_eq!(strip.get(2, 3), FOREGROUND);
        assert_eq!(strip.get(0, 2), 0);
        assert_eq!(strip.get(1, 4), 0);

        // Slot 5 starts at x = 20.
        assert_eq!(strip.get(21, 2), FOREGROUND);
        assert_eq!(strip.get(20, 2), 0);
    }

    #[test]
    fn zero_width_slots_draw_nothing() {
        let mut face = BlockFace::new();
        face.missing.push('\u{2}');
        let scanned = scan(&face, &Config::default()).expect("scan");
        let strip = composite(&face, &scanned).expect("composite");

        // Slot 2 is empty; slot 3's block begins right where slot 2 was.
        let x = scanned.slots[3].x_px;
        assert_eq!(strip.get(x + 1, 2), FOREGROUND);
        assert_eq!(strip.width(), 4 * (scanned.slots.len() as u32 - 1));
    }

    #[test]
    fn substitute_box_outlines_the_slot() {
        let mut face = BlockFace::new();
        face.missing.push('\u{2}');
        let config = Config {
            size: 4.0,
            dpi: 72.0,
            on_missing: OnMissingGlyph::SubstituteBox,
        };
        let scanned = scan(&face, &config).expect("scan");
        let strip = composite(&face, &scanned).expect("composite");

        // 4pt at 72 dpi: px_size 4, box width ceil(4/2) = 2 — too narrow
        // for a box, so nothing is drawn in the slot.
        let slot = scanned.slots[2];
        assert_eq!(slot.width_px, 2);
        for dx in 0..slot.width_px {
            for y in 0..strip.height() {
                assert_eq!(strip.get(slot.x_px + dx, y), 0);
            }
        }
    }

    #[test]
    fn wide_substitute_box_has_hollow_border() {
        let mut face = BlockFace::new();
        face.missing.push('\u{2}');
        let config = Config {
            size: 14.0,
            dpi: 72.0,
            on_missing: OnMissingGlyph::SubstituteBox,
        };
        let scanned = scan(&face, &config).expect("scan");
        let strip = composite(&face, &scanned).expect("composite");

        // Box width ceil(14/2) = 7, strip height 6: border on rows 1 and
        // 4, columns x+1 and x+5.
        let x = scanned.slots[2].x_px;
        assert_eq!(strip.get(x + 1, 1), FOREGROUND);
        assert_eq!(strip.get(x + 5, 1), FOREGROUND);
        assert_eq!(strip.get(x + 3, 4), FOREGROUND);
        assert_eq!(strip.get(x + 1, 3), FOREGROUND);
        // Interior stays blank.
        assert_eq!(strip.get(x + 3, 2), 0);
        // The slot edge itself stays blank (one pixel inset).
        assert_eq!(strip.get(x, 1), 0);
    }

    #[test]
    fn rasterizer_failure_aborts_compositing() {
        let mut face = BlockFace::new();
        face.fail_on = Some('\u{9}');
        let scanned = scan(&face, &Config::default()).expect("scan");
        let err = composite(&face, &scanned);
        assert!(matches!(err, Err(Error::Draw(_))));
    }

    #[test]
    fn overhanging_pixels_are_clipped() {
        /// Face whose bitmap pokes past the left edge of the strip.
        struct Overhang;

        impl Face for Overhang {
            fn ascent(&self) -> f64 {
                3.0
            }
            fn descent(&self) -> f64 {
                0.0
            }
            fn advance(&self, _ch: char) -> Option<f64> {
                Some(2.0)
            }
            fn rasterize(&self, _ch: char) -> std::result::Result<RasterGlyph, FontError> {
                Ok(RasterGlyph {
                    xmin: -1,
                    ymin: 0,
                    width: 2,
                    height: 3,
                    coverage: vec![FOREGROUND; 6],
                })
            }
        }

        let face = Overhang;
        let scanned = scan(&face, &Config::default()).expect("scan");
        // Must not panic; the column at x = -1 is discarded.
        let strip = composite(&face, &scanned).expect("composite");
        assert_eq!(strip.get(0, 0), FOREGROUND);
    }
}
