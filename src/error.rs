//! Error types for pdf-outline.

use std::io;
use thiserror::Error;

/// Result type alias for pdf-outline operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Message shown to end users for any failure.
///
/// Surfaces facing users (CLI output, JSON error bodies) print this instead of
/// the internal error detail.
pub const USER_FACING_MESSAGE: &str = "Failed to parse PDF file";

/// Error types that can occur while producing an outline.
///
/// The outline pipeline itself is total; every variant here originates in a
/// text source or in an output surface.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input is neither a PDF nor plain text.
    #[error("Unknown file format")]
    UnknownFormat,

    /// The PDF header carries a version string we do not recognize.
    #[error("Unsupported PDF version: {0}")]
    UnsupportedVersion(String),

    /// The text source could not produce text from the document.
    #[error("Text extraction failed: {0}")]
    Extraction(String),

    /// The input bytes are not valid text.
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// No registered text source handles the input.
    #[error("No text source for: {0}")]
    UnsupportedSource(String),

    /// Error while serializing the result.
    #[error("Rendering error: {0}")]
    Render(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Whether this error means the document could not be turned into text.
    pub fn is_extraction_failure(&self) -> bool {
        matches!(
            self,
            Error::Extraction(_)
                | Error::Encoding(_)
                | Error::UnknownFormat
                | Error::UnsupportedVersion(_)
        )
    }

    /// The generic message to show to users.
    pub fn user_message(&self) -> &'static str {
        USER_FACING_MESSAGE
    }
}

#[cfg(feature = "pdf")]
impl From<pdf_extract::OutputError> for Error {
    fn from(err: pdf_extract::OutputError) -> Self {
        Error::Extraction(err.to_string())
    }
}

impl From<std::string::FromUtf8Error> for Error {
    fn from(err: std::string::FromUtf8Error) -> Self {
        Error::Encoding(err.to_string())
    }
}
