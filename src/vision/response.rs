//! Annotate response types, mirroring the Cloud Vision v1 JSON.
//!
//! Proto3 JSON omits zero values (a vertex at `x = 0` has no `x` field,
//! an unset enum is absent), so every field is defaulted.

use serde::{Deserialize, Serialize};

/// Response to a batch annotate call.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BatchAnnotateImagesResponse {
    /// One response per request image
    pub responses: Vec<AnnotateImageResponse>,
}

/// Annotations for a single image.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnnotateImageResponse {
    /// Hierarchical OCR result (document text detection)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_text_annotation: Option<TextAnnotation>,

    /// Object localization result
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub localized_object_annotations: Vec<LocalizedObjectAnnotation>,

    /// Per-image error, set instead of annotations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<Status>,
}

/// google.rpc.Status
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Status {
    pub code: i32,
    pub message: String,
}

/// Structured text: pages, blocks, paragraphs, words, symbols.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextAnnotation {
    pub pages: Vec<Page>,
    /// Flat UTF-8 text of everything detected
    pub text: String,
}

/// A detected page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Page {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    pub blocks: Vec<Block>,
    pub confidence: f32,
}

/// A logical block on the page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Block {
    pub bounding_box: Option<BoundingPoly>,
    pub paragraphs: Vec<Paragraph>,
    pub block_type: BlockType,
    pub confidence: f32,
}

/// Detected block type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BlockType {
    Text,
    Table,
    Picture,
    Ruler,
    Barcode,
    /// Any value this crate does not know about
    #[default]
    #[serde(other)]
    Unknown,
}

/// A paragraph: a sequence of words.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Paragraph {
    pub bounding_box: Option<BoundingPoly>,
    pub words: Vec<Word>,
    pub confidence: f32,
}

/// A word: a sequence of symbols.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Word {
    pub bounding_box: Option<BoundingPoly>,
    pub symbols: Vec<Symbol>,
    pub confidence: f32,
}

/// A single character.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Symbol {
    pub property: Option<TextProperty>,
    pub bounding_box: Option<BoundingPoly>,
    pub text: String,
    pub confidence: f32,
}

impl Symbol {
    /// Break type detected after this symbol, if the service reported one.
    pub fn detected_break(&self) -> Option<BreakType> {
        self.property
            .as_ref()
            .and_then(|p| p.detected_break.as_ref())
            .map(|b| b.break_type)
    }
}

/// Additional information attached to a symbol.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextProperty {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub detected_languages: Vec<DetectedLanguage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detected_break: Option<DetectedBreak>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DetectedLanguage {
    pub language_code: String,
    pub confidence: f32,
}

/// Break detected at the end of a symbol.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DetectedBreak {
    #[serde(rename = "type")]
    pub break_type: BreakType,
    pub is_prefix: bool,
}

/// What follows a symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BreakType {
    Space,
    SureSpace,
    /// Line-wrapping break
    EolSureSpace,
    /// End-of-line hyphen that is not present in text
    Hyphen,
    /// Line break that ends a paragraph
    LineBreak,
    /// Any value this crate does not know about
    #[default]
    #[serde(other)]
    Unknown,
}

impl BreakType {
    /// Whether the word carrying this break is the last one on its line.
    pub fn ends_line(&self) -> bool {
        matches!(
            self,
            BreakType::LineBreak | BreakType::EolSureSpace | BreakType::Hyphen
        )
    }
}

/// An outline given as pixel or normalized vertices.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BoundingPoly {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub vertices: Vec<Vertex>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub normalized_vertices: Vec<NormalizedVertex>,
}

/// Pixel vertex; may be slightly negative near image edges.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vertex {
    pub x: i32,
    pub y: i32,
}

/// Vertex relative to the image size, in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizedVertex {
    pub x: f32,
    pub y: f32,
}

/// A detected object with a label.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LocalizedObjectAnnotation {
    /// Knowledge Graph entity id
    pub mid: String,
    pub language_code: String,
    /// Object name, e.g. "Cat"
    pub name: String,
    pub score: f32,
    pub bounding_poly: Option<BoundingPoly>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_omitted_zero_fields() {
        let json = r#"{"vertices":[{},{"x":12},{"x":12,"y":7},{"y":7}]}"#;
        let poly: BoundingPoly = serde_json::from_str(json).unwrap();
        assert_eq!(poly.vertices[0], Vertex { x: 0, y: 0 });
        assert_eq!(poly.vertices[1], Vertex { x: 12, y: 0 });
        assert!(poly.normalized_vertices.is_empty());
    }

    #[test]
    fn test_deserialize_enums() {
        let json = r#"{"blockType":"PICTURE"}"#;
        let block: Block = serde_json::from_str(json).unwrap();
        assert_eq!(block.block_type, BlockType::Picture);

        let json = r#"{"blockType":"SOMETHING_NEW"}"#;
        let block: Block = serde_json::from_str(json).unwrap();
        assert_eq!(block.block_type, BlockType::Unknown);

        let json = r#"{"text":"x","property":{"detectedBreak":{"type":"EOL_SURE_SPACE"}}}"#;
        let symbol: Symbol = serde_json::from_str(json).unwrap();
        assert_eq!(symbol.detected_break(), Some(BreakType::EolSureSpace));
    }

    #[test]
    fn test_unrecognized_values_fall_back_to_unknown() {
        let json = r#"{"type":"WIDE_SPACE","isPrefix":true}"#;
        let detected: DetectedBreak = serde_json::from_str(json).unwrap();
        assert_eq!(detected.break_type, BreakType::Unknown);
        assert!(detected.is_prefix);

        let json = r#"{"type":"UNKNOWN"}"#;
        let detected: DetectedBreak = serde_json::from_str(json).unwrap();
        assert_eq!(detected.break_type, BreakType::Unknown);

        assert_eq!(BlockType::default(), BlockType::Unknown);
        assert_eq!(BreakType::default(), BreakType::Unknown);
        assert_eq!(serde_json::to_string(&BlockType::Unknown).unwrap(), "\"UNKNOWN\"");
        assert_eq!(serde_json::to_string(&BreakType::LineBreak).unwrap(), "\"LINE_BREAK\"");
    }

    #[test]
    fn test_symbol_without_break() {
        let symbol: Symbol = serde_json::from_str(r#"{"text":"a"}"#).unwrap();
        assert_eq!(symbol.detected_break(), None);
    }

    #[test]
    fn test_break_ends_line() {
        assert!(BreakType::LineBreak.ends_line());
        assert!(BreakType::EolSureSpace.ends_line());
        assert!(BreakType::Hyphen.ends_line());
        assert!(!BreakType::Space.ends_line());
        assert!(!BreakType::SureSpace.ends_line());
        assert!(!BreakType::Unknown.ends_line());
    }

    #[test]
    fn test_deserialize_error_response() {
        let json = r#"{"responses":[{"error":{"code":3,"message":"Bad image data."}}]}"#;
        let batch: BatchAnnotateImagesResponse = serde_json::from_str(json).unwrap();
        let error = batch.responses[0].error.as_ref().unwrap();
        assert_eq!(error.code, 3);
        assert!(batch.responses[0].full_text_annotation.is_none());
    }
}
