//! Font loading, scaled metrics, and glyph rasterization for `typenine`.
//!
//! This crate wraps `ttf-parser` for outline parsing and metric queries
//! and `fontdue` for coverage rasterization. It is intentionally
//! independent of the strip pipeline — all types are plain `f64`/integer
//! values. The [`Face`] trait is the seam the pipeline consumes, so tests
//! can substitute a synthetic face with fixed metrics.

pub mod data;
pub mod error;
pub mod face;

pub use data::FontData;
pub use error::FontError;
pub use face::{Face, RasterGlyph, ScaledFace};
