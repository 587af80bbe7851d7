//! Visitor pattern for walking the layout tree.
//!
//! [`walk`] visits regions, lines, words and glyphs depth-first in document
//! order. Visitors decide per element whether its children are visited.
//!
//! # Example
//!
//! ```
//! use visionpage::model::{Document, Word};
//! use visionpage::render::visitor::{walk, LayoutVisitor, VisitorAction};
//!
//! struct LowConfidence(Vec<String>);
//!
//! impl LayoutVisitor for LowConfidence {
//!     fn visit_word(&mut self, word: &Word) -> VisitorAction {
//!         if word.confidence < 0.5 {
//!             self.0.push(word.text.clone());
//!         }
//!         VisitorAction::SkipChildren
//!     }
//! }
//!
//! let mut visitor = LowConfidence(Vec::new());
//! walk(&Document::new(), &mut visitor);
//! assert!(visitor.0.is_empty());
//! ```

use crate::model::{Document, Glyph, Region, TextLine, Word};

/// Action returned by visitor methods to control the walk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum VisitorAction {
    /// Visit the element's children.
    #[default]
    Continue,

    /// Do not descend into this element.
    SkipChildren,
}

impl VisitorAction {
    /// Check if children should be skipped.
    pub fn should_skip(&self) -> bool {
        matches!(self, VisitorAction::SkipChildren)
    }
}

/// Trait for visiting layout elements.
///
/// All methods return `VisitorAction::Continue` by default.
pub trait LayoutVisitor {
    /// Called once before any region.
    fn on_document_start(&mut self, doc: &Document) {
        let _ = doc;
    }

    /// Called for each region, text or not.
    ///
    /// # Arguments
    /// * `index` - Position of the region in the document
    /// * `region` - The region
    fn visit_region(&mut self, index: usize, region: &Region) -> VisitorAction {
        let _ = (index, region);
        VisitorAction::Continue
    }

    /// Called for each text line of a visited region.
    fn visit_text_line(&mut self, line: &TextLine) -> VisitorAction {
        let _ = line;
        VisitorAction::Continue
    }

    /// Called for each word of a visited line.
    fn visit_word(&mut self, word: &Word) -> VisitorAction {
        let _ = word;
        VisitorAction::Continue
    }

    /// Called for each glyph of a visited word.
    fn visit_glyph(&mut self, glyph: &Glyph) {
        let _ = glyph;
    }

    /// Called once after the last region.
    fn on_document_end(&mut self, doc: &Document) {
        let _ = doc;
    }
}

/// Walk the document depth-first.
pub fn walk<V: LayoutVisitor + ?Sized>(doc: &Document, visitor: &mut V) {
    visitor.on_document_start(doc);

    for (index, region) in doc.regions.iter().enumerate() {
        if visitor.visit_region(index, region).should_skip() {
            continue;
        }
        for line in &region.text_lines {
            if visitor.visit_text_line(line).should_skip() {
                continue;
            }
            for word in &line.words {
                if visitor.visit_word(word).should_skip() {
                    continue;
                }
                for glyph in &word.glyphs {
                    visitor.visit_glyph(glyph);
                }
            }
        }
    }

    visitor.on_document_end(doc);
}
