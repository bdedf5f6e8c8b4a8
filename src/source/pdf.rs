//! PDF text source backed by `pdf-extract`.
//!
//! `pdf_extract` can panic on malformed input instead of returning an
//! error, so every call runs inside [`std::panic::catch_unwind`] and a panic
//! is reported as [`Error::Extraction`].

use std::panic::{self, AssertUnwindSafe};

use crate::detect::{detect_format_from_bytes, SourceFormat};
use crate::error::{Error, Result};

use super::TextSource;

/// Text source for PDF documents.
#[derive(Debug, Clone, Default)]
pub struct PdfTextSource {
    _private: (),
}

impl PdfTextSource {
    /// Create a new PDF text source.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl TextSource for PdfTextSource {
    fn supported_extensions(&self) -> &[&str] {
        &["pdf"]
    }

    fn name(&self) -> &str {
        "pdf"
    }

    fn extract_text_bytes(&self, bytes: &[u8]) -> Result<String> {
        match detect_format_from_bytes(bytes)? {
            SourceFormat::Pdf { version } => log::debug!("Decoding PDF {}", version),
            SourceFormat::PlainText => return Err(Error::UnknownFormat),
        }

        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            pdf_extract::extract_text_from_mem(bytes)
        }));

        match result {
            Ok(Ok(text)) => {
                if text.trim().is_empty() {
                    log::warn!("PDF produced no text (scanned or image-only document?)");
                }
                Ok(text)
            }
            Ok(Err(e)) => Err(e.into()),
            Err(_) => Err(Error::Extraction(
                "PDF decoder panicked (malformed document)".into(),
            )),
        }
    }
}
