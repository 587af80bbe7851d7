//! Annotate request types and builder.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::mapper::Mode;

/// Batch of image annotation requests.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BatchAnnotateImagesRequest {
    pub requests: Vec<AnnotateImageRequest>,
}

impl BatchAnnotateImagesRequest {
    /// Wrap a single request.
    pub fn single(request: AnnotateImageRequest) -> Self {
        Self {
            requests: vec![request],
        }
    }
}

/// Request to annotate one image.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotateImageRequest {
    pub image: Image,
    pub features: Vec<Feature>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_context: Option<ImageContext>,
}

impl AnnotateImageRequest {
    /// Create a request for the given image bytes, with no features yet.
    pub fn new(image_bytes: &[u8]) -> Self {
        Self {
            image: Image {
                content: STANDARD.encode(image_bytes),
            },
            features: Vec::new(),
            image_context: None,
        }
    }

    /// Create a request with the feature matching a mapping mode.
    pub fn for_mode(image_bytes: &[u8], mode: Mode) -> Self {
        Self::new(image_bytes).with_feature(FeatureType::from(mode))
    }

    /// Add a feature to detect.
    pub fn with_feature(mut self, feature_type: FeatureType) -> Self {
        self.features.push(Feature {
            feature_type,
            max_results: None,
        });
        self
    }

    /// Add a language hint (e.g. "en"). Empty hints are ignored.
    pub fn with_language_hint(mut self, language: impl Into<String>) -> Self {
        let language = language.into();
        if language.is_empty() {
            return self;
        }
        self.image_context
            .get_or_insert_with(ImageContext::default)
            .language_hints
            .push(language);
        self
    }
}

/// Image payload, sent inline as base64.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Image {
    pub content: String,
}

/// A detection feature.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feature {
    #[serde(rename = "type")]
    pub feature_type: FeatureType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<u32>,
}

/// Feature selector understood by the annotate endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FeatureType {
    /// Dense document OCR with full hierarchy
    DocumentTextDetection,
    /// Sparse OCR
    TextDetection,
    /// Labeled object bounding boxes
    ObjectLocalization,
}

impl From<Mode> for FeatureType {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Ocr => FeatureType::DocumentTextDetection,
            Mode::Object => FeatureType::ObjectLocalization,
        }
    }
}

/// Extra context passed with the image.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageContext {
    pub language_hints: Vec<String>,
}
