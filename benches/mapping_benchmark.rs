//! Benchmarks for response mapping and PAGE XML output.
//!
//! Run with: cargo bench
//!
//! These benchmarks use a synthetic text response with a fixed grid of
//! paragraphs, lines and words.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use visionpage::mapper::{map_batch, MapOptions};
use visionpage::render::{self, PageXmlOptions};
use visionpage::vision::{
    AnnotateImageResponse, BatchAnnotateImagesResponse, Block, BlockType, BoundingPoly,
    BreakType, DetectedBreak, Page, Paragraph, Symbol, TextAnnotation, TextProperty, Vertex, Word,
};

fn bbox(left: i32, top: i32, right: i32, bottom: i32) -> Option<BoundingPoly> {
    Some(BoundingPoly {
        vertices: vec![
            Vertex { x: left, y: top },
            Vertex { x: right, y: top },
            Vertex { x: right, y: bottom },
            Vertex { x: left, y: bottom },
        ],
        normalized_vertices: Vec::new(),
    })
}

fn word(left: i32, top: i32, line_end: bool) -> Word {
    let symbols = (0..5)
        .map(|i| {
            let x = left + i * 10;
            let property = (line_end && i == 4).then(|| TextProperty {
                detected_break: Some(DetectedBreak {
                    break_type: BreakType::LineBreak,
                    is_prefix: false,
                }),
                ..Default::default()
            });
            Symbol {
                property,
                bounding_box: bbox(x, top, x + 10, top + 30),
                text: "x".to_string(),
                confidence: 0.9,
            }
        })
        .collect();

    Word {
        bounding_box: bbox(left, top, left + 50, top + 30),
        symbols,
        confidence: 0.9,
    }
}

/// Creates a synthetic one-page response.
fn create_test_response(paragraphs: i32, lines: i32, words: i32) -> BatchAnnotateImagesResponse {
    let mut block = Block {
        block_type: BlockType::Text,
        ..Default::default()
    };

    for p in 0..paragraphs {
        let top = p * lines * 40;
        let mut paragraph = Paragraph {
            bounding_box: bbox(0, top, words * 60, top + lines * 40),
            ..Default::default()
        };
        for l in 0..lines {
            for w in 0..words {
                paragraph
                    .words
                    .push(word(w * 60, top + l * 40, w == words - 1));
            }
        }
        block.paragraphs.push(paragraph);
    }

    let page = Page {
        width: (words * 60) as u32,
        height: (paragraphs * lines * 40) as u32,
        blocks: vec![block],
        confidence: 0.9,
    };

    BatchAnnotateImagesResponse {
        responses: vec![AnnotateImageResponse {
            full_text_annotation: Some(TextAnnotation {
                pages: vec![page],
                text: String::new(),
            }),
            ..Default::default()
        }],
    }
}

/// Benchmark text-mode mapping at various sizes.
fn bench_mapping(c: &mut Criterion) {
    let mut group = c.benchmark_group("text_mapping");
    let options = MapOptions::new();

    for paragraphs in [1, 10, 50].iter() {
        let batch = create_test_response(*paragraphs, 10, 8);

        group.bench_function(format!("{}_paragraphs", paragraphs), |b| {
            b.iter(|| map_batch(black_box(&batch), &options).unwrap());
        });
    }

    group.finish();
}

/// Benchmark PAGE XML serialization.
fn bench_page_xml(c: &mut Criterion) {
    let doc = map_batch(&create_test_response(20, 10, 8), &MapOptions::new()).unwrap();
    let options = PageXmlOptions::default();

    c.bench_function("page_xml_20_paragraphs", |b| {
        b.iter(|| render::to_page_xml(black_box(&doc), &options).unwrap());
    });
}

/// Benchmark JSON response decoding.
fn bench_decode(c: &mut Criterion) {
    let json = serde_json::to_string(&create_test_response(10, 10, 8)).unwrap();

    c.bench_function("decode_response_10_paragraphs", |b| {
        b.iter(|| visionpage::parse_response(black_box(&json)).unwrap());
    });
}

criterion_group!(benches, bench_mapping, bench_page_xml, bench_decode);
criterion_main!(benches);
