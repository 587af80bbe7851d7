//! Layout statistics.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::model::{Document, Glyph, Region, TextLine, Word};

use super::visitor::{walk, LayoutVisitor, VisitorAction};

/// Element counts and confidence summary of a document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LayoutStats {
    /// Total number of regions
    pub region_count: u32,

    /// Regions per PAGE element name
    pub regions_by_kind: BTreeMap<String, u32>,

    /// Number of text lines
    pub line_count: u32,

    /// Number of words
    pub word_count: u32,

    /// Number of glyphs
    pub glyph_count: u32,

    /// Number of characters in region texts
    pub char_count: u32,

    /// Mean word confidence, if there are words
    pub mean_word_confidence: Option<f32>,

    #[serde(skip)]
    confidence_sum: f64,
}

impl LayoutStats {
    /// Collect statistics for a document.
    pub fn collect(doc: &Document) -> Self {
        let mut stats = Self::default();
        walk(doc, &mut stats);
        stats
    }

    /// Check if the document had no regions.
    pub fn is_empty(&self) -> bool {
        self.region_count == 0
    }
}

impl LayoutVisitor for LayoutStats {
    fn visit_region(&mut self, _index: usize, region: &Region) -> VisitorAction {
        self.region_count += 1;
        *self
            .regions_by_kind
            .entry(region.kind.element_name().to_string())
            .or_insert(0) += 1;
        if let Some(ref text) = region.text {
            self.char_count += text.chars().count() as u32;
        }
        VisitorAction::Continue
    }

    fn visit_text_line(&mut self, _line: &TextLine) -> VisitorAction {
        self.line_count += 1;
        VisitorAction::Continue
    }

    fn visit_word(&mut self, word: &Word) -> VisitorAction {
        self.word_count += 1;
        self.confidence_sum += f64::from(word.confidence);
        VisitorAction::Continue
    }

    fn visit_glyph(&mut self, _glyph: &Glyph) {
        self.glyph_count += 1;
    }

    fn on_document_end(&mut self, _doc: &Document) {
        if self.word_count > 0 {
            self.mean_word_confidence = Some((self.confidence_sum / self.word_count as f64) as f32);
        }
    }
}
