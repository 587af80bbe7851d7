//! Rendering module for converting layout documents to output formats.

mod json;
mod options;
mod page_xml;
mod stats;
mod text;
pub mod visitor;

pub use json::{to_json, JsonFormat};
pub use options::{PageXmlOptions, PAGE_NAMESPACE, PAGE_SCHEMA_LOCATION};
pub use page_xml::{save_page_xml, to_page_xml, write_page_xml};
pub use stats::LayoutStats;
pub use text::to_text;
pub use visitor::{walk, LayoutVisitor, VisitorAction};
