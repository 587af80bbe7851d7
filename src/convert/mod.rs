//! One-shot conversion of annotate responses into output documents.
//!
//! # Example
//!
//! ```no_run
//! use visionpage::convert::{convert_batch, ConvertOptions, OutputFormat};
//! use visionpage::vision::BatchAnnotateImagesResponse;
//!
//! fn main() -> visionpage::Result<()> {
//!     let json = std::fs::read_to_string("response.json")?;
//!     let batch: BatchAnnotateImagesResponse = serde_json::from_str(&json)?;
//!
//!     let options = ConvertOptions::new().with_format(OutputFormat::PageXml);
//!     let result = convert_batch(&batch, &options)?;
//!     std::fs::write("page.xml", &result.content)?;
//!     Ok(())
//! }
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::mapper::{self, MapOptions};
use crate::model::Document;
use crate::render::{self, JsonFormat, LayoutStats, PageXmlOptions};
use crate::vision::{AnnotateImageResponse, BatchAnnotateImagesResponse};

/// Options for response conversion.
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Mapping options
    pub map: MapOptions,

    /// Output format
    pub output_format: OutputFormat,

    /// JSON layout when `output_format` is `Json`
    pub json_format: JsonFormat,

    /// PAGE XML writer options
    pub page_xml: PageXmlOptions,
}

impl ConvertOptions {
    /// Create new conversion options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set mapping options.
    pub fn with_map_options(mut self, options: MapOptions) -> Self {
        self.map = options;
        self
    }

    /// Set output format.
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    /// Set JSON layout.
    pub fn with_json_format(mut self, format: JsonFormat) -> Self {
        self.json_format = format;
        self
    }

    /// Set PAGE XML writer options.
    pub fn with_page_xml_options(mut self, options: PageXmlOptions) -> Self {
        self.page_xml = options;
        self
    }
}

/// Output format for conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// PAGE XML 2019-07-15
    #[default]
    PageXml,

    /// JSON dump of the layout tree
    Json,

    /// Plain text
    Text,
}

impl OutputFormat {
    /// MIME type of the rendered output.
    pub fn mime_type(&self) -> &'static str {
        match self {
            OutputFormat::PageXml => "application/xml",
            OutputFormat::Json => "application/json",
            OutputFormat::Text => "text/plain",
        }
    }

    /// Conventional file extension.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::PageXml => "xml",
            OutputFormat::Json => "json",
            OutputFormat::Text => "txt",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::PageXml => f.write_str("page-xml"),
            OutputFormat::Json => f.write_str("json"),
            OutputFormat::Text => f.write_str("text"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "page-xml" | "pagexml" | "page" | "xml" => Ok(OutputFormat::PageXml),
            "json" => Ok(OutputFormat::Json),
            "text" | "txt" => Ok(OutputFormat::Text),
            other => Err(Error::Other(format!("Unknown output format: {}", other))),
        }
    }
}

/// Result of a conversion.
#[derive(Debug, Clone)]
pub struct ConvertResult {
    /// Rendered content
    pub content: String,

    /// Layout statistics of the mapped document
    pub stats: LayoutStats,

    /// MIME type of the output
    pub mime_type: &'static str,
}

impl ConvertResult {
    /// Get content length in bytes.
    pub fn content_len(&self) -> usize {
        self.content.len()
    }
}

/// Render an already mapped document.
pub fn convert_document(doc: &Document, options: &ConvertOptions) -> Result<ConvertResult> {
    let content = match options.output_format {
        OutputFormat::PageXml => render::to_page_xml(doc, &options.page_xml)?,
        OutputFormat::Json => render::to_json(doc, options.json_format)?,
        OutputFormat::Text => render::to_text(doc),
    };

    Ok(ConvertResult {
        content,
        stats: LayoutStats::collect(doc),
        mime_type: options.output_format.mime_type(),
    })
}

/// Map and render the response for one image.
pub fn convert_response(
    response: &AnnotateImageResponse,
    options: &ConvertOptions,
) -> Result<ConvertResult> {
    let doc = mapper::map_response(response, &options.map)?;
    convert_document(&doc, options)
}

/// Map and render the first response of a batch.
pub fn convert_batch(
    batch: &BatchAnnotateImagesResponse,
    options: &ConvertOptions,
) -> Result<ConvertResult> {
    let doc = mapper::map_batch(batch, &options.map)?;
    convert_document(&doc, options)
}
