//! Input image checks before upload.

use crate::error::{Error, Result};
use crate::mapper::DEFAULT_FALLBACK_SIZE;
use image::ImageFormat;
use std::fs;
use std::path::Path;

/// Largest image the annotate endpoint accepts inline (10 MiB).
pub const UPLOAD_LIMIT_BYTES: u64 = 10 * 1024 * 1024;

/// An image read from disk and ready to upload.
#[derive(Debug, Clone)]
pub struct SourceImage {
    /// Raw file content
    pub bytes: Vec<u8>,
    /// Format guessed from the magic bytes
    pub format: ImageFormat,
    /// File name without directories
    pub filename: String,
}

impl SourceImage {
    /// Pixel size decoded from the image header.
    pub fn dimensions(&self) -> Result<(u32, u32)> {
        let reader =
            image::ImageReader::with_format(std::io::Cursor::new(&self.bytes), self.format);
        reader
            .into_dimensions()
            .map_err(|e| Error::Other(format!("Cannot read image dimensions: {}", e)))
    }
}

/// Read an image, enforcing existence, the upload limit and a known format.
///
/// # Example
/// ```no_run
/// use visionpage::detect::load_image;
///
/// let image = load_image("scan.png").unwrap();
/// println!("{} is {:?}", image.filename, image.format);
/// ```
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<SourceImage> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(Error::ImageNotFound(path.display().to_string()));
    }

    let size = fs::metadata(path)?.len();
    if size > UPLOAD_LIMIT_BYTES {
        return Err(Error::UploadTooLarge {
            size,
            limit: UPLOAD_LIMIT_BYTES,
        });
    }

    let bytes = fs::read(path)?;
    let format = detect_format_from_bytes(&bytes)?;
    log::debug!("Loaded {} ({} bytes, {:?})", path.display(), size, format);

    Ok(SourceImage {
        bytes,
        format,
        filename: image_filename(path),
    })
}

/// Guess the image format from magic bytes.
pub fn detect_format_from_bytes(data: &[u8]) -> Result<ImageFormat> {
    image::guess_format(data).map_err(|_| Error::UnknownImageFormat)
}

/// Check if bytes start like a known image format.
pub fn is_image_bytes(data: &[u8]) -> bool {
    detect_format_from_bytes(data).is_ok()
}

/// Pixel size of the image at `path`, or the fallback size if it cannot be
/// read.
pub fn image_size_or_default<P: AsRef<Path>>(path: P) -> (u32, u32) {
    let path = path.as_ref();
    match image::image_dimensions(path) {
        Ok(size) => size,
        Err(e) => {
            log::warn!(
                "Cannot read dimensions of {}: {}; using {}x{}",
                path.display(),
                e,
                DEFAULT_FALLBACK_SIZE.0,
                DEFAULT_FALLBACK_SIZE.1
            );
            DEFAULT_FALLBACK_SIZE
        }
    }
}

/// File name component of a path, as recorded in the document.
pub fn image_filename<P: AsRef<Path>>(path: P) -> String {
    let path = path.as_ref();
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
