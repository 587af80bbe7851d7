//! Mapping options and configuration.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Pixel size used as scaling basis when the real image size is unknown.
pub const DEFAULT_FALLBACK_SIZE: (u32, u32) = (100, 100);

/// Options for mapping an annotate response to a document.
#[derive(Debug, Clone)]
pub struct MapOptions {
    /// Which part of the response to map
    pub mode: Mode,

    /// File name recorded in the document
    pub image_filename: String,

    /// Pixel size of the source image (object mode scaling basis)
    pub image_size: Option<(u32, u32)>,

    /// Scaling basis when `image_size` is unknown
    pub fallback_size: (u32, u32),
}

impl MapOptions {
    /// Create new map options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the mapping mode.
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Map localized objects instead of text.
    pub fn objects(mut self) -> Self {
        self.mode = Mode::Object;
        self
    }

    /// Set the image file name stored in the document.
    pub fn with_image_filename(mut self, filename: impl Into<String>) -> Self {
        self.image_filename = filename.into();
        self
    }

    /// Set the source image pixel size.
    pub fn with_image_size(mut self, width: u32, height: u32) -> Self {
        self.image_size = Some((width, height));
        self
    }

    /// Set the scaling basis used when the image size is unknown.
    pub fn with_fallback_size(mut self, width: u32, height: u32) -> Self {
        self.fallback_size = (width, height);
        self
    }
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            mode: Mode::Ocr,
            image_filename: String::new(),
            image_size: None,
            fallback_size: DEFAULT_FALLBACK_SIZE,
        }
    }
}

/// Recognition mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Hierarchical document text
    #[default]
    Ocr,
    /// Localized, labeled objects
    Object,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Ocr => f.write_str("ocr"),
            Mode::Object => f.write_str("object"),
        }
    }
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ocr" => Ok(Mode::Ocr),
            "object" => Ok(Mode::Object),
            other => Err(Error::Other(format!("Unknown mode: {}", other))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_options_builder() {
        let options = MapOptions::new()
            .objects()
            .with_image_filename("cat.jpg")
            .with_image_size(640, 480);

        assert_eq!(options.mode, Mode::Object);
        assert_eq!(options.image_filename, "cat.jpg");
        assert_eq!(options.image_size, Some((640, 480)));
    }

    #[test]
    fn test_default_options() {
        let options = MapOptions::default();
        assert_eq!(options.mode, Mode::Ocr);
        assert_eq!(options.image_size, None);
        assert_eq!(options.fallback_size, (100, 100));
    }

    #[test]
    fn test_mode_parse() {
        assert_eq!("ocr".parse::<Mode>().unwrap(), Mode::Ocr);
        assert_eq!("Object".parse::<Mode>().unwrap(), Mode::Object);
        assert!("faces".parse::<Mode>().is_err());
        assert_eq!(Mode::Object.to_string(), "object");
    }
}
