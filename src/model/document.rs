//! Document-level types.

use super::{Region, RegionKind};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A layout document for one page image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Document metadata (creator, timestamps)
    pub metadata: Metadata,

    /// Page width in pixels
    pub width: u32,

    /// Page height in pixels
    pub height: u32,

    /// File name of the source image
    pub image_filename: String,

    /// Regions in the order they were produced
    pub regions: Vec<Region>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self {
            metadata: Metadata::default(),
            width: 0,
            height: 0,
            image_filename: String::new(),
            regions: Vec::new(),
        }
    }

    /// Set the page size in pixels.
    pub fn set_size(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    /// Add a region to the document.
    pub fn add_region(&mut self, region: Region) {
        self.regions.push(region);
    }

    /// Get the number of regions.
    pub fn region_count(&self) -> usize {
        self.regions.len()
    }

    /// Iterate over regions of one kind.
    pub fn regions_of_kind(&self, kind: RegionKind) -> impl Iterator<Item = &Region> {
        self.regions.iter().filter(move |r| r.kind == kind)
    }

    /// Check if the document has any regions.
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Get plain text content of all text regions.
    pub fn plain_text(&self) -> String {
        self.regions
            .iter()
            .filter_map(|r| r.text.as_deref())
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

/// Document metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    /// Creating application
    pub creator: String,

    /// Creation time
    pub created: DateTime<Utc>,

    /// Last modification time
    pub last_change: DateTime<Utc>,

    /// Free-form comments
    pub comments: Option<String>,
}

impl Metadata {
    /// Metadata stamped with the current time.
    pub fn now(creator: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            creator: creator.into(),
            created: now,
            last_change: now,
            comments: None,
        }
    }
}

impl Default for Metadata {
    fn default() -> Self {
        Self::now(concat!("visionpage ", env!("CARGO_PKG_VERSION")))
    }
}
