//! Error types for visionpage library.

use std::io;
use thiserror::Error;

/// Result type alias for visionpage operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while requesting, mapping or rendering.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Error decoding or encoding annotation JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error writing PAGE XML.
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Transport-level failure talking to the annotate endpoint.
    #[error("HTTP error: {0}")]
    Http(String),

    /// The service answered with an error status for the image.
    #[error("Service error {code}: {message}")]
    Service {
        /// google.rpc.Code value
        code: i32,
        /// Human readable message
        message: String,
    },

    /// The response has no entry for the image.
    #[error("Missing response: {0}")]
    MissingResponse(String),

    /// The text annotation contains no pages.
    #[error("No page in result")]
    NoPages,

    /// The object localization result is empty.
    #[error("No localized objects in result")]
    NoObjects,

    /// The input image does not exist.
    #[error("Image not found: {0}")]
    ImageNotFound(String),

    /// The input image exceeds the service upload limit.
    #[error("Image is {size} bytes, upload limit is {limit} bytes")]
    UploadTooLarge {
        /// Actual file size
        size: u64,
        /// Allowed maximum
        limit: u64,
    },

    /// The input is not an image format the service accepts.
    #[error("Unknown image format")]
    UnknownImageFormat,

    /// No usable credentials were supplied.
    #[error("Credentials error: {0}")]
    Credentials(String),

    /// Error during rendering (PAGE XML, text, JSON).
    #[error("Rendering error: {0}")]
    Render(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Process exit code reported by the command-line tool for this error.
    ///
    /// 1 service error, 2 no page, 3 I/O, 4 credentials, 5 general,
    /// 6 image not found, 7 upload limit exceeded, 8 no objects.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Service { .. } => 1,
            Error::NoPages => 2,
            Error::Io(_) => 3,
            Error::Credentials(_) => 4,
            Error::ImageNotFound(_) => 6,
            Error::UploadTooLarge { .. } => 7,
            Error::NoObjects => 8,
            _ => 5,
        }
    }
}

#[cfg(feature = "client")]
impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Http(err.to_string())
    }
}
