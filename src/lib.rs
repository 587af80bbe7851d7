//! # visionpage
//!
//! Convert Google Cloud Vision annotate responses into PAGE XML layout
//! documents.
//!
//! The library maps either the hierarchical document text annotation
//! (page → block → paragraph → word → symbol) or localized object
//! annotations onto a PAGE-style layout tree of regions, text lines, words
//! and glyphs, and writes it as PAGE XML 2019-07-15, JSON or plain text.
//!
//! ## Quick Start
//!
//! ```no_run
//! use visionpage::{parse_response_file, MapOptions, render};
//!
//! fn main() -> visionpage::Result<()> {
//!     // Load a saved images:annotate response
//!     let batch = parse_response_file("response.json")?;
//!
//!     // Map it onto a layout document
//!     let options = MapOptions::new().with_image_filename("scan.png");
//!     let doc = visionpage::mapper::map_batch(&batch, &options)?;
//!
//!     // Write PAGE XML
//!     let xml = render::to_page_xml(&doc, &render::PageXmlOptions::default())?;
//!     println!("{}", xml);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Two mapping modes**: document text or localized objects
//! - **Coordinate scaling**: absolute or normalized vertices, clamped to pixels
//! - **PAGE XML output**: regions, lines, words and glyphs with confidences
//! - **Blocking client** (feature `client`): upload an image and map the answer

#[cfg(feature = "client")]
pub mod client;
pub mod convert;
pub mod detect;
pub mod error;
pub mod mapper;
pub mod model;
pub mod render;
pub mod vision;

// Re-export commonly used types
#[cfg(feature = "client")]
pub use client::{Auth, ClientConfig, VisionClient};
pub use convert::{ConvertOptions, ConvertResult, OutputFormat};
pub use detect::{detect_format_from_bytes, load_image, SourceImage};
pub use error::{Error, Result};
pub use mapper::{MapOptions, Mode};
pub use model::{
    Document, Glyph, Metadata, Point, Polygon, Rect, Region, RegionKind, TextLine, Word,
};
pub use render::{JsonFormat, LayoutStats, PageXmlOptions};
pub use vision::{AnnotateImageResponse, BatchAnnotateImagesResponse};

use std::fs;
use std::path::Path;

/// Parse an `images:annotate` response body.
///
/// # Example
///
/// ```
/// use visionpage::parse_response;
///
/// let batch = parse_response(r#"{"responses": [{}]}"#).unwrap();
/// assert_eq!(batch.responses.len(), 1);
/// ```
pub fn parse_response(json: &str) -> Result<BatchAnnotateImagesResponse> {
    Ok(serde_json::from_str(json)?)
}

/// Parse an `images:annotate` response saved to a file.
pub fn parse_response_file<P: AsRef<Path>>(path: P) -> Result<BatchAnnotateImagesResponse> {
    let json = fs::read_to_string(path)?;
    parse_response(&json)
}

/// Map a response body straight to PAGE XML with default writer options.
///
/// # Example
///
/// ```no_run
/// use visionpage::{response_to_page_xml, MapOptions};
///
/// let json = std::fs::read_to_string("response.json").unwrap();
/// let xml = response_to_page_xml(&json, &MapOptions::new()).unwrap();
/// std::fs::write("page.xml", xml).unwrap();
/// ```
pub fn response_to_page_xml(json: &str, options: &MapOptions) -> Result<String> {
    let batch = parse_response(json)?;
    let doc = mapper::map_batch(&batch, options)?;
    render::to_page_xml(&doc, &PageXmlOptions::default())
}

/// Extract the plain text of a response body.
pub fn response_to_text(json: &str) -> Result<String> {
    let batch = parse_response(json)?;
    let doc = mapper::map_batch(&batch, &MapOptions::default())?;
    Ok(render::to_text(&doc))
}

/// Builder for mapping responses and rendering layout documents.
///
/// # Example
///
/// ```no_run
/// use visionpage::VisionPage;
///
/// let json = std::fs::read_to_string("response.json")?;
/// let xml = VisionPage::new()
///     .with_image_filename("scan.png")
///     .map_json(&json)?
///     .to_page_xml()?;
/// # Ok::<(), visionpage::Error>(())
/// ```
pub struct VisionPage {
    map_options: MapOptions,
    page_xml_options: PageXmlOptions,
    language: Option<String>,
}

impl VisionPage {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            map_options: MapOptions::default(),
            page_xml_options: PageXmlOptions::default(),
            language: None,
        }
    }

    /// Set the mapping mode.
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.map_options = self.map_options.with_mode(mode);
        self
    }

    /// Map localized objects instead of text.
    pub fn objects(mut self) -> Self {
        self.map_options = self.map_options.objects();
        self
    }

    /// Set the language hint sent with recognition requests.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Set the image file name recorded in the document.
    pub fn with_image_filename(mut self, filename: impl Into<String>) -> Self {
        self.map_options = self.map_options.with_image_filename(filename);
        self
    }

    /// Set the source image pixel size.
    pub fn with_image_size(mut self, width: u32, height: u32) -> Self {
        self.map_options = self.map_options.with_image_size(width, height);
        self
    }

    /// Take file name and pixel size from an image on disk.
    pub fn with_image<P: AsRef<Path>>(mut self, path: P) -> Self {
        let path = path.as_ref();
        let (width, height) = detect::image_size_or_default(path);
        self.map_options = self
            .map_options
            .with_image_filename(detect::image_filename(path))
            .with_image_size(width, height);
        self
    }

    /// Set PAGE XML writer options.
    pub fn with_page_xml_options(mut self, options: PageXmlOptions) -> Self {
        self.page_xml_options = options;
        self
    }

    /// Map the response for one image.
    pub fn map_response(self, response: &AnnotateImageResponse) -> Result<VisionPageResult> {
        let document = mapper::map_response(response, &self.map_options)?;
        Ok(self.finish(document))
    }

    /// Map the first response of a batch.
    pub fn map_batch(self, batch: &BatchAnnotateImagesResponse) -> Result<VisionPageResult> {
        let document = mapper::map_batch(batch, &self.map_options)?;
        Ok(self.finish(document))
    }

    /// Parse and map a response body.
    pub fn map_json(self, json: &str) -> Result<VisionPageResult> {
        let batch = parse_response(json)?;
        self.map_batch(&batch)
    }

    /// Build the annotate request for an image.
    pub fn request_for(&self, image: &SourceImage) -> vision::BatchAnnotateImagesRequest {
        let mut request =
            vision::AnnotateImageRequest::for_mode(&image.bytes, self.map_options.mode);
        if let Some(ref language) = self.language {
            request = request.with_language_hint(language.clone());
        }
        vision::BatchAnnotateImagesRequest::single(request)
    }

    /// Take file name and, unless set explicitly, pixel size from a
    /// loaded image.
    pub fn with_source_image(mut self, image: &SourceImage) -> Self {
        if self.map_options.image_size.is_none() {
            match image.dimensions() {
                Ok((width, height)) => {
                    self.map_options = self.map_options.with_image_size(width, height);
                }
                Err(e) => log::warn!("{}", e),
            }
        }
        self.map_options = self
            .map_options
            .with_image_filename(image.filename.clone());
        self
    }

    /// Load an image, upload it, then map the answer.
    #[cfg(feature = "client")]
    pub fn recognize<P: AsRef<Path>>(
        self,
        path: P,
        client: &VisionClient,
    ) -> Result<VisionPageResult> {
        let image = load_image(path)?;
        self.recognize_image(&image, client)
    }

    /// Upload an already loaded image, then map the answer.
    ///
    /// The file name and, unless set explicitly, the pixel size are taken
    /// from the image.
    #[cfg(feature = "client")]
    pub fn recognize_image(
        self,
        image: &SourceImage,
        client: &VisionClient,
    ) -> Result<VisionPageResult> {
        let builder = self.with_source_image(image);
        let request = builder.request_for(image);
        log::info!(
            "Requesting {} for {} ({} bytes)",
            builder.map_options.mode,
            image.filename,
            image.bytes.len()
        );
        let batch = client.annotate(&request)?;
        builder.map_batch(&batch)
    }

    fn finish(self, document: Document) -> VisionPageResult {
        log::info!(
            "Mapped {} region(s) for '{}'",
            document.region_count(),
            document.image_filename
        );
        VisionPageResult {
            document,
            page_xml_options: self.page_xml_options,
        }
    }
}

impl Default for VisionPage {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of mapping a response.
pub struct VisionPageResult {
    /// The mapped document
    pub document: Document,
    /// PAGE XML writer options to use
    page_xml_options: PageXmlOptions,
}

impl VisionPageResult {
    /// Convert to PAGE XML.
    pub fn to_page_xml(&self) -> Result<String> {
        render::to_page_xml(&self.document, &self.page_xml_options)
    }

    /// Write PAGE XML to a file.
    pub fn save_page_xml<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        render::save_page_xml(&self.document, &self.page_xml_options, path)
    }

    /// Convert to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.document, format)
    }

    /// Convert to plain text.
    pub fn to_text(&self) -> String {
        render::to_text(&self.document)
    }

    /// Element counts and confidence summary.
    pub fn stats(&self) -> LayoutStats {
        LayoutStats::collect(&self.document)
    }

    /// Get the document.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Take the document.
    pub fn into_document(self) -> Document {
        self.document
    }
}
