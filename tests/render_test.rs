//! Integration tests for PAGE XML, JSON and text output.

use std::collections::HashMap;

use quick_xml::events::Event;
use quick_xml::Reader;
use serde_json::json;
use visionpage::convert::{convert_document, ConvertOptions, OutputFormat};
use visionpage::render::{self, PageXmlOptions, PAGE_NAMESPACE};
use visionpage::{Document, JsonFormat, VisionPage};

fn rect(left: i32, top: i32, right: i32, bottom: i32) -> serde_json::Value {
    json!({"vertices": [
        {"x": left, "y": top}, {"x": right, "y": top},
        {"x": right, "y": bottom}, {"x": left, "y": bottom}
    ]})
}

fn sample_document() -> Document {
    let response = json!({
        "responses": [{
            "fullTextAnnotation": {
                "pages": [{
                    "width": 800,
                    "height": 600,
                    "blocks": [
                        {
                            "blockType": "TEXT",
                            "paragraphs": [{
                                "boundingBox": rect(10, 10, 300, 60),
                                "words": [
                                    {
                                        "confidence": 0.9,
                                        "boundingBox": rect(10, 10, 50, 60),
                                        "symbols": [
                                            {"text": "A", "confidence": 0.9, "boundingBox": rect(10, 10, 30, 60)},
                                            {"text": "&", "confidence": 0.8, "boundingBox": rect(30, 10, 50, 60)}
                                        ]
                                    },
                                    {
                                        "confidence": 0.7,
                                        "boundingBox": rect(60, 10, 100, 60),
                                        "symbols": [
                                            {"text": "B", "confidence": 0.7, "boundingBox": rect(60, 10, 100, 60),
                                             "property": {"detectedBreak": {"type": "LINE_BREAK"}}}
                                        ]
                                    }
                                ]
                            }]
                        },
                        {"blockType": "PICTURE", "boundingBox": rect(400, 100, 700, 500)}
                    ]
                }]
            }
        }]
    });

    VisionPage::new()
        .with_image_filename("scan.png")
        .map_json(&response.to_string())
        .unwrap()
        .into_document()
}

/// Count start and empty elements by local name.
fn element_counts(xml: &str) -> HashMap<String, usize> {
    let mut reader = Reader::from_str(xml);
    let mut counts = HashMap::new();
    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                *counts.entry(name).or_insert(0) += 1;
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => panic!("invalid XML: {}", e),
        }
    }
    counts
}

#[test]
fn test_page_xml_structure() {
    let xml = render::to_page_xml(&sample_document(), &PageXmlOptions::default()).unwrap();

    assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
    assert!(xml.contains(PAGE_NAMESPACE));
    assert!(xml.contains("imageFilename=\"scan.png\""));
    assert!(xml.contains("imageWidth=\"800\""));
    assert!(xml.contains("imageHeight=\"600\""));

    let counts = element_counts(&xml);
    assert_eq!(counts.get("PcGts"), Some(&1));
    assert_eq!(counts.get("TextRegion"), Some(&1));
    assert_eq!(counts.get("ImageRegion"), Some(&1));
    assert_eq!(counts.get("TextLine"), Some(&1));
    assert_eq!(counts.get("Word"), Some(&2));
    assert_eq!(counts.get("Glyph"), Some(&3));
    // region, image region, line, two words, three glyphs
    assert_eq!(counts.get("Coords"), Some(&8));
}

#[test]
fn test_page_xml_text_and_ids() {
    let xml = render::to_page_xml(&sample_document(), &PageXmlOptions::default()).unwrap();

    assert!(xml.contains("<Unicode>A&amp;B</Unicode>"));
    assert!(xml.contains("<Word id=\"r0_l0_w1\">"));
    assert!(xml.contains("<Glyph id=\"r0_l0_w0_g1\">"));
    assert!(xml.contains("<ImageRegion id=\"r1\">"));
    assert!(xml.contains("<TextEquiv conf=\"0.7\">"));
    assert!(xml.contains("points=\"10,10 100,10 100,60 10,60\""));
}

#[test]
fn test_page_xml_options() {
    let options = PageXmlOptions::new()
        .compact()
        .with_glyphs(false)
        .with_confidence(false)
        .with_pcgts_id("pc-1");
    let xml = render::to_page_xml(&sample_document(), &options).unwrap();

    assert!(!xml.contains('\n'));
    assert!(xml.contains("pcGtsId=\"pc-1\""));
    assert!(!xml.contains("<Glyph"));
    assert!(!xml.contains("conf="));
}

#[test]
fn test_save_page_xml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scan.xml");

    render::save_page_xml(&sample_document(), &PageXmlOptions::default(), &path).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    let counts = element_counts(&written);
    assert_eq!(counts.get("Page"), Some(&1));
    assert_eq!(counts.get("Metadata"), Some(&1));
    assert_eq!(counts.get("Creator"), Some(&1));
}

#[test]
fn test_json_output() {
    let doc = sample_document();
    let pretty = render::to_json(&doc, JsonFormat::Pretty).unwrap();
    let compact = render::to_json(&doc, JsonFormat::Compact).unwrap();
    assert!(pretty.len() > compact.len());

    let value: serde_json::Value = serde_json::from_str(&compact).unwrap();
    assert_eq!(value["image_filename"], "scan.png");
    assert_eq!(value["regions"][0]["kind"], "text");
    assert_eq!(value["regions"][1]["kind"], "image");
    assert_eq!(value["regions"][0]["text_lines"][0]["text"], "A&B");
}

#[test]
fn test_text_output() {
    let doc = sample_document();
    assert_eq!(render::to_text(&doc), "A&B");

    let result =
        convert_document(&doc, &ConvertOptions::new().with_format(OutputFormat::Text)).unwrap();
    assert_eq!(result.content, "A&B");
    assert_eq!(result.mime_type, "text/plain");
    assert_eq!(result.stats.region_count, 2);
}
