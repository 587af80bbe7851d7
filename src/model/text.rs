//! Text line, word and glyph types.

use super::Polygon;
use serde::{Deserialize, Serialize};

/// A line of text inside a text region.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TextLine {
    /// Outline of the line
    pub coords: Polygon,

    /// Composed line text
    pub text: String,

    /// Words on the line, in reading order
    pub words: Vec<Word>,
}

impl TextLine {
    /// Create a new empty line.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a word and return a mutable reference to it.
    pub fn add_word(&mut self, word: Word) -> &mut Word {
        self.words.push(word);
        let last = self.words.len() - 1;
        &mut self.words[last]
    }

    /// Concatenate the texts of all words, without separators.
    pub fn compose_text(&self) -> String {
        self.words.iter().map(|w| w.text.as_str()).collect()
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }
}

/// A single word.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Word {
    /// Outline of the word
    pub coords: Polygon,

    /// Composed word text
    pub text: String,

    /// Recognition confidence in `0.0..=1.0`
    pub confidence: f32,

    /// Glyphs of the word
    pub glyphs: Vec<Glyph>,
}

impl Word {
    /// Create a word with an outline and confidence.
    pub fn new(coords: Polygon, confidence: f32) -> Self {
        Self {
            coords,
            text: String::new(),
            confidence,
            glyphs: Vec::new(),
        }
    }

    /// Add a glyph.
    pub fn add_glyph(&mut self, glyph: Glyph) {
        self.glyphs.push(glyph);
    }

    /// Concatenate glyph texts, without separators.
    pub fn compose_text(&self) -> String {
        self.glyphs.iter().map(|g| g.text.as_str()).collect()
    }
}

/// A single character or grapheme.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Glyph {
    /// Outline of the glyph
    pub coords: Polygon,

    /// Glyph text
    pub text: String,

    /// Recognition confidence in `0.0..=1.0`
    pub confidence: f32,
}

impl Glyph {
    /// Create a new glyph.
    pub fn new(coords: Polygon, text: impl Into<String>, confidence: f32) -> Self {
        Self {
            coords,
            text: text.into(),
            confidence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_compose_text() {
        let mut word = Word::new(Polygon::new(), 0.9);
        word.add_glyph(Glyph::new(Polygon::new(), "a", 0.9));
        word.add_glyph(Glyph::new(Polygon::new(), "b", 0.8));
        assert_eq!(word.compose_text(), "ab");
    }

    #[test]
    fn test_line_compose_text() {
        let mut line = TextLine::new();
        line.add_word(Word::new(Polygon::new(), 1.0)).text = "foo".into();
        line.add_word(Word::new(Polygon::new(), 1.0)).text = "bar-".into();
        assert_eq!(line.compose_text(), "foobar-");
        assert_eq!(line.word_count(), 2);
    }
}
