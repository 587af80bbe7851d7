//! Rendering options and configuration.

/// PAGE content schema namespace written to the root element.
pub const PAGE_NAMESPACE: &str = "http://schema.primaresearch.org/PAGE/gts/pagecontent/2019-07-15";

/// Location of the matching XSD.
pub const PAGE_SCHEMA_LOCATION: &str = "http://schema.primaresearch.org/PAGE/gts/pagecontent/2019-07-15 http://schema.primaresearch.org/PAGE/gts/pagecontent/2019-07-15/pagecontent.xsd";

/// Options for PAGE XML output.
#[derive(Debug, Clone)]
pub struct PageXmlOptions {
    /// Indent nested elements
    pub indent: bool,

    /// Spaces per indentation level
    pub indent_size: usize,

    /// Value of the `pcGtsId` root attribute
    pub pcgts_id: Option<String>,

    /// Write glyph elements
    pub include_glyphs: bool,

    /// Write confidence attributes on words and glyphs
    pub include_confidence: bool,
}

impl PageXmlOptions {
    /// Create new options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Write everything on one line.
    pub fn compact(mut self) -> Self {
        self.indent = false;
        self
    }

    /// Set the indentation width.
    pub fn with_indent_size(mut self, size: usize) -> Self {
        self.indent = size > 0;
        self.indent_size = size;
        self
    }

    /// Set the `pcGtsId` attribute.
    pub fn with_pcgts_id(mut self, id: impl Into<String>) -> Self {
        self.pcgts_id = Some(id.into());
        self
    }

    /// Enable or disable glyph output.
    pub fn with_glyphs(mut self, include: bool) -> Self {
        self.include_glyphs = include;
        self
    }

    /// Enable or disable confidence attributes.
    pub fn with_confidence(mut self, include: bool) -> Self {
        self.include_confidence = include;
        self
    }
}

impl Default for PageXmlOptions {
    fn default() -> Self {
        Self {
            indent: true,
            indent_size: 2,
            pcgts_id: None,
            include_glyphs: true,
            include_confidence: true,
        }
    }
}
