//! Layout model types.
//!
//! This module defines the page layout tree the mapper produces and the
//! renderers consume: a document owns regions, text regions own lines,
//! lines own words and words own glyphs. Every element carries a pixel
//! polygon.

mod document;
mod geometry;
mod region;
mod text;

pub use document::{Document, Metadata};
pub use geometry::{Point, Polygon, Rect};
pub use region::{Region, RegionKind};
pub use text::{Glyph, TextLine, Word};
