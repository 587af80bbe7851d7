//! Plain text rendering for layout documents.

use crate::model::Document;

/// Convert a document to plain text.
///
/// Text regions are separated by a blank line; regions without text are
/// skipped.
pub fn to_text(doc: &Document) -> String {
    doc.plain_text().trim().to_string()
}
