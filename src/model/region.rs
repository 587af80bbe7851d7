//! Layout regions.

use super::{Polygon, TextLine};
use serde::{Deserialize, Serialize};

/// Classification of a layout region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegionKind {
    Text,
    Image,
    Table,
    Separator,
    Graphic,
    Unknown,
}

impl RegionKind {
    /// PAGE XML element name for this kind.
    pub fn element_name(&self) -> &'static str {
        match self {
            RegionKind::Text => "TextRegion",
            RegionKind::Image => "ImageRegion",
            RegionKind::Table => "TableRegion",
            RegionKind::Separator => "SeparatorRegion",
            RegionKind::Graphic => "GraphicRegion",
            RegionKind::Unknown => "UnknownRegion",
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, RegionKind::Text)
    }
}

/// A classified area on the page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Region {
    /// Region classification
    pub kind: RegionKind,

    /// Outline of the region
    pub coords: Polygon,

    /// Free-form `custom` attribute (object label in object mode)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom: Option<String>,

    /// Text lines; only populated for text regions
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub text_lines: Vec<TextLine>,

    /// Composed region text; only set for text regions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl Region {
    /// Create a region of the given kind.
    pub fn new(kind: RegionKind, coords: Polygon) -> Self {
        Self {
            kind,
            coords,
            custom: None,
            text_lines: Vec::new(),
            text: None,
        }
    }

    /// Create a text region.
    pub fn text(coords: Polygon) -> Self {
        Self::new(RegionKind::Text, coords)
    }

    /// Set the custom attribute.
    pub fn with_custom(mut self, custom: impl Into<String>) -> Self {
        self.custom = Some(custom.into());
        self
    }

    /// Add a text line.
    pub fn add_text_line(&mut self, line: TextLine) {
        self.text_lines.push(line);
    }

    /// Join line texts with newlines; no separator follows the last line.
    pub fn compose_text(&self) -> String {
        self.text_lines
            .iter()
            .map(|l| l.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn is_text(&self) -> bool {
        self.kind.is_text()
    }
}
