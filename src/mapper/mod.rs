//! Annotate response to layout document mapping.
//!
//! Text mode walks page → block → paragraph → word → symbol and produces
//! text regions with lines, words and glyphs; non-text blocks become
//! regions of their own kind. Object mode turns each localized object into
//! a labeled image region. Elements whose outline has two points or fewer
//! are dropped together with their content.

mod geometry;
mod objects;
mod options;
mod text;

pub use geometry::{to_polygon, ScaleBasis};
pub use objects::map_object_annotations;
pub use options::{MapOptions, Mode, DEFAULT_FALLBACK_SIZE};
pub use text::{
    finish_text_line, map_page, map_paragraph, map_symbols, map_text_annotation, region_kind,
};

use crate::error::{Error, Result};
use crate::model::Document;
use crate::vision::{AnnotateImageResponse, BatchAnnotateImagesResponse};

/// Map the response for one image according to `options.mode`.
///
/// A response-level error status is returned as [`Error::Service`]. A
/// response without a text annotation is treated like one with no pages.
pub fn map_response(response: &AnnotateImageResponse, options: &MapOptions) -> Result<Document> {
    if let Some(ref status) = response.error {
        return Err(Error::Service {
            code: status.code,
            message: status.message.clone(),
        });
    }

    match options.mode {
        Mode::Ocr => match response.full_text_annotation {
            Some(ref annotation) => map_text_annotation(annotation, options),
            None => Err(Error::NoPages),
        },
        Mode::Object => map_object_annotations(&response.localized_object_annotations, options),
    }
}

/// Map the first response of a batch.
pub fn map_batch(batch: &BatchAnnotateImagesResponse, options: &MapOptions) -> Result<Document> {
    let response = batch
        .responses
        .first()
        .ok_or_else(|| Error::MissingResponse("batch contains no responses".into()))?;
    map_response(response, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vision::{Status, TextAnnotation};

    #[test]
    fn test_service_error() {
        let response = AnnotateImageResponse {
            error: Some(Status {
                code: 3,
                message: "Bad image data.".into(),
            }),
            ..Default::default()
        };
        let result = map_response(&response, &MapOptions::default());
        assert!(matches!(result, Err(Error::Service { code: 3, .. })));
    }

    #[test]
    fn test_missing_text_annotation() {
        let result = map_response(&AnnotateImageResponse::default(), &MapOptions::default());
        assert!(matches!(result, Err(Error::NoPages)));
    }

    #[test]
    fn test_empty_text_annotation() {
        let response = AnnotateImageResponse {
            full_text_annotation: Some(TextAnnotation::default()),
            ..Default::default()
        };
        let result = map_response(&response, &MapOptions::default());
        assert!(matches!(result, Err(Error::NoPages)));
    }

    #[test]
    fn test_empty_objects() {
        let options = MapOptions::new().objects();
        let result = map_response(&AnnotateImageResponse::default(), &options);
        assert!(matches!(result, Err(Error::NoObjects)));
    }

    #[test]
    fn test_empty_batch() {
        let result = map_batch(&BatchAnnotateImagesResponse::default(), &MapOptions::default());
        assert!(matches!(result, Err(Error::MissingResponse(_))));
    }
}
