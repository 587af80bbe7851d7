//! Cloud Vision wire types.
//!
//! Requests are built here and responses deserialized here; nothing in this
//! module interprets the annotations. That is the mapper's job.

pub mod request;
pub mod response;

pub use request::{
    AnnotateImageRequest, BatchAnnotateImagesRequest, Feature, FeatureType, ImageContext,
};
pub use response::{
    AnnotateImageResponse, BatchAnnotateImagesResponse, Block, BlockType, BoundingPoly, BreakType,
    DetectedBreak, LocalizedObjectAnnotation, NormalizedVertex, Page, Paragraph, Status, Symbol,
    TextAnnotation, TextProperty, Vertex, Word,
};
