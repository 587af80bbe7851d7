//! PAGE XML rendering.
//!
//! Writes the 2019-07-15 PAGE content schema. Element ids are derived from
//! the position in the tree: `r0`, `r0_l1`, `r0_l1_w2`, `r0_l1_w2_g3`.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::{DateTime, SecondsFormat, Utc};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::error::{Error, Result};
use crate::model::{Document, Glyph, Metadata, Polygon, Region, TextLine, Word};

use super::options::{PageXmlOptions, PAGE_NAMESPACE, PAGE_SCHEMA_LOCATION};

const XSI_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema-instance";

/// Convert a document to a PAGE XML string.
pub fn to_page_xml(doc: &Document, options: &PageXmlOptions) -> Result<String> {
    let mut buf = Vec::new();
    write_page_xml(doc, options, &mut buf)?;
    String::from_utf8(buf).map_err(|e| Error::Render(format!("PAGE XML is not UTF-8: {}", e)))
}

/// Write a document as PAGE XML to a file.
pub fn save_page_xml<P: AsRef<Path>>(
    doc: &Document,
    options: &PageXmlOptions,
    path: P,
) -> Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    write_page_xml(doc, options, &mut out)?;
    out.flush()?;
    Ok(())
}

/// Write a document as PAGE XML to any writer.
pub fn write_page_xml<W: Write>(doc: &Document, options: &PageXmlOptions, out: W) -> Result<()> {
    let writer = if options.indent {
        Writer::new_with_indent(out, b' ', options.indent_size)
    } else {
        Writer::new(out)
    };
    let mut renderer = PageXmlRenderer { writer, options };
    renderer.document(doc)
}

struct PageXmlRenderer<'a, W: Write> {
    writer: Writer<W>,
    options: &'a PageXmlOptions,
}

impl<W: Write> PageXmlRenderer<'_, W> {
    fn document(&mut self, doc: &Document) -> Result<()> {
        self.writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

        let mut root = BytesStart::new("PcGts");
        root.push_attribute(("xmlns", PAGE_NAMESPACE));
        root.push_attribute(("xmlns:xsi", XSI_NAMESPACE));
        root.push_attribute(("xsi:schemaLocation", PAGE_SCHEMA_LOCATION));
        if let Some(ref id) = self.options.pcgts_id {
            root.push_attribute(("pcGtsId", id.as_str()));
        }
        self.writer.write_event(Event::Start(root))?;

        self.metadata(&doc.metadata)?;

        let width = doc.width.to_string();
        let height = doc.height.to_string();
        let mut page = BytesStart::new("Page");
        page.push_attribute(("imageFilename", doc.image_filename.as_str()));
        page.push_attribute(("imageWidth", width.as_str()));
        page.push_attribute(("imageHeight", height.as_str()));
        self.writer.write_event(Event::Start(page))?;

        for (index, region) in doc.regions.iter().enumerate() {
            self.region(&format!("r{}", index), region)?;
        }

        self.end("Page")?;
        self.end("PcGts")
    }

    fn metadata(&mut self, metadata: &Metadata) -> Result<()> {
        self.start("Metadata")?;
        self.text_element("Creator", &metadata.creator)?;
        self.text_element("Created", &timestamp(&metadata.created))?;
        self.text_element("LastChange", &timestamp(&metadata.last_change))?;
        if let Some(ref comments) = metadata.comments {
            self.text_element("Comments", comments)?;
        }
        self.end("Metadata")
    }

    fn region(&mut self, id: &str, region: &Region) -> Result<()> {
        let name = region.kind.element_name();
        let mut start = BytesStart::new(name);
        start.push_attribute(("id", id));
        if let Some(ref custom) = region.custom {
            start.push_attribute(("custom", custom.as_str()));
        }
        self.writer.write_event(Event::Start(start))?;

        self.coords(&region.coords)?;
        for (index, line) in region.text_lines.iter().enumerate() {
            self.text_line(&format!("{}_l{}", id, index), line)?;
        }
        if let Some(ref text) = region.text {
            self.text_equiv(text, None)?;
        }

        self.end(name)
    }

    fn text_line(&mut self, id: &str, line: &TextLine) -> Result<()> {
        self.start_with_id("TextLine", id)?;
        self.coords(&line.coords)?;
        for (index, word) in line.words.iter().enumerate() {
            self.word(&format!("{}_w{}", id, index), word)?;
        }
        self.text_equiv(&line.text, None)?;
        self.end("TextLine")
    }

    fn word(&mut self, id: &str, word: &Word) -> Result<()> {
        self.start_with_id("Word", id)?;
        self.coords(&word.coords)?;
        if self.options.include_glyphs {
            for (index, glyph) in word.glyphs.iter().enumerate() {
                self.glyph(&format!("{}_g{}", id, index), glyph)?;
            }
        }
        self.text_equiv(&word.text, Some(word.confidence))?;
        self.end("Word")
    }

    fn glyph(&mut self, id: &str, glyph: &Glyph) -> Result<()> {
        self.start_with_id("Glyph", id)?;
        self.coords(&glyph.coords)?;
        self.text_equiv(&glyph.text, Some(glyph.confidence))?;
        self.end("Glyph")
    }

    fn coords(&mut self, polygon: &Polygon) -> Result<()> {
        let points = polygon.to_string();
        let mut coords = BytesStart::new("Coords");
        coords.push_attribute(("points", points.as_str()));
        self.writer.write_event(Event::Empty(coords))?;
        Ok(())
    }

    fn text_equiv(&mut self, text: &str, confidence: Option<f32>) -> Result<()> {
        if text.is_empty() {
            return Ok(());
        }
        let mut start = BytesStart::new("TextEquiv");
        if let Some(conf) = confidence.filter(|_| self.options.include_confidence) {
            start.push_attribute(("conf", conf.clamp(0.0, 1.0).to_string().as_str()));
        }
        self.writer.write_event(Event::Start(start))?;
        self.text_element("Unicode", text)?;
        self.end("TextEquiv")
    }

    fn text_element(&mut self, name: &str, text: &str) -> Result<()> {
        self.start(name)?;
        self.writer.write_event(Event::Text(BytesText::new(text)))?;
        self.end(name)
    }

    fn start(&mut self, name: &str) -> Result<()> {
        self.writer.write_event(Event::Start(BytesStart::new(name)))?;
        Ok(())
    }

    fn start_with_id(&mut self, name: &str, id: &str) -> Result<()> {
        let mut start = BytesStart::new(name);
        start.push_attribute(("id", id));
        self.writer.write_event(Event::Start(start))?;
        Ok(())
    }

    fn end(&mut self, name: &str) -> Result<()> {
        self.writer.write_event(Event::End(BytesEnd::new(name)))?;
        Ok(())
    }
}

fn timestamp(time: &DateTime<Utc>) -> String {
    time.to_rfc3339_opts(SecondsFormat::Secs, true)
}
