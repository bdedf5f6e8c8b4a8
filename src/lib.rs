//! # pdf-outline
//!
//! Heuristic document outline inference for Rust.
//!
//! This library takes the plain text extracted from a document and infers a
//! lightweight outline: a title plus an ordered list of heading candidates,
//! each with a level (H1–H3) and an estimated page.
//!
//! ## Quick Start
//!
//! ```
//! use pdf_outline::{extract_outline, HeadingLevel};
//!
//! let text = "Chapter 1: Introduction\nSome text.\n3. Results\n";
//! let result = extract_outline(text);
//!
//! assert_eq!(result.title, "Chapter 1: Introduction");
//! assert_eq!(result.outline.len(), 2);
//! assert_eq!(result.outline[1].level, HeadingLevel::H3);
//! ```
//!
//! ## Features
//!
//! - **Rule-based classification**: keywords, numbered headings, all-caps lines
//! - **Fallback outline**: opening lines are used when nothing classifies
//! - **Pluggable text sources**: PDF (via `pdf-extract`) and plain text
//! - **Parallel batches**: many files at once with Rayon
//!
//! The heuristics look at text only. They know nothing about fonts or
//! layout, and page numbers are estimates.

pub mod batch;
pub mod detect;
pub mod error;
pub mod model;
pub mod outline;
pub mod render;
pub mod source;

// Re-export commonly used types
pub use batch::{extract_batch, BatchEntry, BatchSummary};
pub use detect::{detect_format_from_bytes, detect_format_from_path, SourceFormat};
pub use error::{Error, Result};
pub use model::{HeadingCandidate, HeadingLevel, Line, OutlineReport, OutlineResult};
pub use outline::{FallbackPrimary, OutlineExtractor, OutlineOptions};
pub use render::JsonFormat;
pub use source::{PlainTextSource, SourceRegistry, TextSource};

#[cfg(feature = "pdf")]
pub use source::PdfTextSource;

use std::path::Path;

/// Infer the outline of already-extracted text with default options.
pub fn extract_outline(text: &str) -> OutlineResult {
    OutlineExtractor::default().extract(text)
}

/// Infer the outline of already-extracted text with custom options.
///
/// # Example
///
/// ```
/// use pdf_outline::{extract_outline_with_options, FallbackPrimary, OutlineOptions};
///
/// let options = OutlineOptions::new()
///     .with_max_entries(5)
///     .with_fallback_primary(FallbackPrimary::FirstEmitted);
/// let result = extract_outline_with_options("ok\nplain opening line", &options);
/// assert_eq!(result.outline[0].text, "plain opening line");
/// ```
pub fn extract_outline_with_options(text: &str, options: &OutlineOptions) -> OutlineResult {
    OutlineExtractor::new(options.clone()).extract(text)
}

/// Extract text from a file and infer its outline.
///
/// The text source is chosen by file extension. If the source fails, the
/// error is returned and no outline is produced.
///
/// # Example
///
/// ```no_run
/// use pdf_outline::extract_file;
///
/// let result = extract_file("report.pdf").unwrap();
/// println!("{}", result.title);
/// ```
pub fn extract_file<P: AsRef<Path>>(path: P) -> Result<OutlineResult> {
    Outliner::new().outline_file(path)
}

/// Extract text from document bytes and infer its outline.
///
/// `ext` selects the text source (e.g., `"pdf"`, `"txt"`).
pub fn extract_bytes(data: &[u8], ext: &str) -> Result<OutlineResult> {
    Outliner::new().outline_bytes(data, ext)
}

/// Read a file asynchronously and infer its outline on a blocking task.
#[cfg(feature = "async")]
pub async fn extract_file_async<P: AsRef<Path>>(path: P) -> Result<OutlineResult> {
    let path = path.as_ref();
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .ok_or_else(|| Error::UnsupportedSource(path.display().to_string()))?
        .to_string();
    let data = tokio::fs::read(path).await?;

    tokio::task::spawn_blocking(move || extract_bytes(&data, &ext))
        .await
        .map_err(|e| Error::Other(format!("Outline task failed: {}", e)))?
}

/// Builder for extracting outlines from files, bytes, or text.
///
/// # Example
///
/// ```no_run
/// use pdf_outline::{FallbackPrimary, Outliner};
///
/// let result = Outliner::new()
///     .with_max_entries(10)
///     .with_fallback_primary(FallbackPrimary::FirstEmitted)
///     .outline_file("report.pdf")?;
/// # Ok::<(), pdf_outline::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Outliner {
    options: OutlineOptions,
    registry: SourceRegistry,
}

impl Outliner {
    /// Create a new builder with default options and sources.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the outline options.
    pub fn with_options(mut self, options: OutlineOptions) -> Self {
        self.options = options;
        self
    }

    /// Set the maximum number of outline entries.
    pub fn with_max_entries(mut self, entries: usize) -> Self {
        self.options = self.options.with_max_entries(entries);
        self
    }

    /// Set the fallback H1 policy.
    pub fn with_fallback_primary(mut self, primary: FallbackPrimary) -> Self {
        self.options = self.options.with_fallback_primary(primary);
        self
    }

    /// Use a custom source registry.
    pub fn with_registry(mut self, registry: SourceRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Build the extractor for the current options.
    pub fn extractor(&self) -> OutlineExtractor {
        OutlineExtractor::new(self.options.clone())
    }

    /// Get the source registry.
    pub fn registry(&self) -> &SourceRegistry {
        &self.registry
    }

    /// Infer the outline of already-extracted text.
    pub fn outline_text(&self, text: &str) -> OutlineResult {
        self.extractor().extract(text)
    }

    /// Extract text from a file and infer its outline.
    pub fn outline_file<P: AsRef<Path>>(&self, path: P) -> Result<OutlineResult> {
        let text = self.registry.extract_text(path.as_ref())?;
        Ok(self.outline_text(&text))
    }

    /// Extract text from bytes and infer its outline.
    pub fn outline_bytes(&self, data: &[u8], ext: &str) -> Result<OutlineResult> {
        let text = self.registry.extract_text_bytes(data, ext)?;
        Ok(self.outline_text(&text))
    }

    /// Extract outlines for many files in parallel.
    pub fn batch<P: AsRef<Path> + Sync>(&self, paths: &[P]) -> Vec<BatchEntry> {
        extract_batch(paths, &self.registry, &self.extractor())
    }
}
