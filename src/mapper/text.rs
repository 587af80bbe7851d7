//! Text mode: page, blocks, paragraphs, words and symbols.

use log::{debug, warn};

use crate::error::{Error, Result};
use crate::model::{Document, Glyph, Region, RegionKind, TextLine, Word};
use crate::vision::{self, BlockType, BreakType, TextAnnotation};

use super::geometry::{to_polygon, ScaleBasis};
use super::options::MapOptions;

/// Map a text annotation to a document.
///
/// Only the first page is mapped; the service returns one page per image.
pub fn map_text_annotation(annotation: &TextAnnotation, options: &MapOptions) -> Result<Document> {
    let page = annotation.pages.first().ok_or(Error::NoPages)?;
    if annotation.pages.len() > 1 {
        warn!(
            "Response has {} pages, only the first one is mapped",
            annotation.pages.len()
        );
    }
    Ok(map_page(page, options))
}

/// Map one page to a document.
///
/// The page size becomes both the document size and the scaling basis
/// for normalized vertices.
pub fn map_page(page: &vision::Page, options: &MapOptions) -> Document {
    let mut doc = Document::new();
    doc.set_size(page.width, page.height);
    doc.image_filename = options.image_filename.clone();

    let basis = ScaleBasis::new(page.width, page.height);
    for block in &page.blocks {
        map_block(block, basis, &mut doc);
    }

    debug!(
        "Mapped page {}x{} to {} regions",
        page.width,
        page.height,
        doc.region_count()
    );
    doc
}

/// Classify a block type as a region kind.
pub fn region_kind(block_type: BlockType) -> RegionKind {
    match block_type {
        BlockType::Text => RegionKind::Text,
        BlockType::Picture => RegionKind::Image,
        BlockType::Table => RegionKind::Table,
        BlockType::Ruler => RegionKind::Separator,
        BlockType::Barcode => RegionKind::Graphic,
        BlockType::Unknown => RegionKind::Unknown,
    }
}

fn map_block(block: &vision::Block, basis: ScaleBasis, doc: &mut Document) {
    let kind = region_kind(block.block_type);

    // Text blocks are replaced by their paragraphs
    if kind.is_text() {
        for paragraph in &block.paragraphs {
            if let Some(region) = map_paragraph(paragraph, basis) {
                doc.add_region(region);
            }
        }
        return;
    }

    let coords = to_polygon(block.bounding_box.as_ref(), basis);
    if coords.is_degenerate() {
        debug!("Dropping {:?} block with {} points", block.block_type, coords.len());
        return;
    }
    doc.add_region(Region::new(kind, coords));
}

/// Map a paragraph to a text region, or `None` if its outline is degenerate.
pub fn map_paragraph(paragraph: &vision::Paragraph, basis: ScaleBasis) -> Option<Region> {
    let coords = to_polygon(paragraph.bounding_box.as_ref(), basis);
    if coords.is_degenerate() {
        debug!(
            "Dropping paragraph with {} points and {} words",
            coords.len(),
            paragraph.words.len()
        );
        return None;
    }

    let mut region = Region::text(coords);
    let mut current_line: Option<TextLine> = None;

    for source in &paragraph.words {
        let coords = to_polygon(source.bounding_box.as_ref(), basis);
        if coords.is_degenerate() {
            debug!("Dropping word with {} points", coords.len());
            continue;
        }

        let mut word = Word::new(coords, source.confidence);
        let break_type = map_symbols(&source.symbols, basis, &mut word);

        let mut text = word.compose_text();
        if break_type == BreakType::Hyphen {
            text.push('-');
        }
        word.text = text;

        current_line.get_or_insert_with(TextLine::new).add_word(word);

        if break_type.ends_line() {
            if let Some(line) = current_line.take() {
                region.add_text_line(finish_text_line(line));
            }
        }
    }

    if let Some(line) = current_line.take() {
        region.add_text_line(finish_text_line(line));
    }

    region.text = Some(region.compose_text());
    Some(region)
}

/// Add glyphs for all symbols with usable outlines and resolve the break
/// type of the word.
///
/// The last symbol reporting a known break decides; symbols without one
/// leave the previous value in place.
pub fn map_symbols(symbols: &[vision::Symbol], basis: ScaleBasis, word: &mut Word) -> BreakType {
    let mut break_type = BreakType::Unknown;

    for symbol in symbols {
        if let Some(detected) = symbol.detected_break() {
            if detected != BreakType::Unknown {
                break_type = detected;
            }
        }

        let coords = to_polygon(symbol.bounding_box.as_ref(), basis);
        if coords.is_degenerate() {
            debug!("Dropping symbol {:?} with {} points", symbol.text, coords.len());
            continue;
        }
        word.add_glyph(Glyph::new(coords, symbol.text.clone(), symbol.confidence));
    }

    break_type
}

/// Set outline and text of a completed line.
///
/// A single-word line copies the word outline; otherwise the line gets the
/// rectangle enclosing the bounding boxes of all words.
pub fn finish_text_line(mut line: TextLine) -> TextLine {
    line.coords = match line.words.as_slice() {
        [only] => only.coords.clone(),
        words => words
            .iter()
            .filter_map(|w| w.coords.bounding_box())
            .reduce(|a, b| a.union(&b))
            .map(|r| r.to_polygon())
            .unwrap_or_default(),
    };
    line.text = line.compose_text();
    line
}
