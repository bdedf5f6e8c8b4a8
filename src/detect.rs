//! Input format detection.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Format of a document handed to a text source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceFormat {
    /// PDF with its header version (e.g., "1.7", "2.0")
    Pdf { version: String },
    /// UTF-8 text
    PlainText,
}

impl std::fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceFormat::Pdf { version } => write!(f, "PDF {}", version),
            SourceFormat::PlainText => write!(f, "plain text"),
        }
    }
}

/// PDF magic bytes: %PDF-
const PDF_MAGIC: &[u8] = b"%PDF-";
const VERSION_LEN: usize = 3; // e.g., "1.7"

/// How many leading bytes are inspected when sniffing from a file.
const SNIFF_LEN: usize = 1024;

/// Detect the format of a file by reading its first bytes.
///
/// # Example
/// ```no_run
/// use pdf_outline::detect::detect_format_from_path;
///
/// let format = detect_format_from_path("report.pdf").unwrap();
/// println!("{}", format);
/// ```
pub fn detect_format_from_path<P: AsRef<Path>>(path: P) -> Result<SourceFormat> {
    let file = File::open(path)?;
    let mut header = Vec::with_capacity(SNIFF_LEN);
    file.take(SNIFF_LEN as u64).read_to_end(&mut header)?;
    detect_format_from_bytes(&header)
}

/// Detect the format of a byte buffer.
///
/// * `Ok(SourceFormat::Pdf { .. })` if the data starts with a `%PDF-x.y` header
/// * `Ok(SourceFormat::PlainText)` if the data is NUL-free UTF-8
/// * `Err(Error::UnknownFormat)` otherwise
///
/// Only a prefix of a large text file may be passed, so a UTF-8 sequence cut
/// at the end of the buffer is tolerated.
pub fn detect_format_from_bytes(data: &[u8]) -> Result<SourceFormat> {
    if data.starts_with(PDF_MAGIC) {
        let version_end = PDF_MAGIC.len() + VERSION_LEN;
        if data.len() < version_end {
            return Err(Error::UnknownFormat);
        }
        let version = String::from_utf8_lossy(&data[PDF_MAGIC.len()..version_end]).to_string();
        if !is_valid_version(&version) {
            return Err(Error::UnsupportedVersion(version));
        }
        return Ok(SourceFormat::Pdf { version });
    }

    if data.is_empty() || looks_like_text(data) {
        Ok(SourceFormat::PlainText)
    } else {
        Err(Error::UnknownFormat)
    }
}

fn looks_like_text(data: &[u8]) -> bool {
    if data.contains(&0) {
        return false;
    }
    match std::str::from_utf8(data) {
        Ok(_) => true,
        // error_len() == None means the input ended mid-sequence
        Err(e) => e.error_len().is_none(),
    }
}

/// Check if a version string looks like "d.d".
fn is_valid_version(version: &str) -> bool {
    let bytes = version.as_bytes();
    bytes.len() == 3 && bytes[0].is_ascii_digit() && bytes[1] == b'.' && bytes[2].is_ascii_digit()
}

/// Check if bytes start with a valid PDF header.
pub fn is_pdf_bytes(data: &[u8]) -> bool {
    matches!(
        detect_format_from_bytes(data),
        Ok(SourceFormat::Pdf { .. })
    )
}
