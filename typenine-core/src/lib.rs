//! Glyph strip rendering pipeline for Plan 9 subfont generation.
//!
//! The pipeline runs in fixed order: scan the face for per-glyph advances,
//! composite every glyph into one baseline-aligned greyscale strip, then
//! build the per-glyph metric table the Plan 9 encoders serialize. Each
//! stage hands its product to the next by value; nothing is mutated after
//! encoding begins.

pub mod config;
pub mod error;
pub mod index;
pub mod pipeline;
pub mod scan;
pub mod strip;

pub use config::{Config, OnMissingGlyph};
pub use error::{Error, Result};
pub use index::{build_index, GlyphMetric, GLYPH_COUNT, TABLE_ENTRIES};
pub use pipeline::{render, Rendered};
pub use scan::{scan, GlyphScan, GlyphSlot};
pub use strip::{composite, RasterStrip};
