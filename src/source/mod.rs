//! Text sources: the upstream step that turns a document into raw text.
//!
//! A [`TextSource`] produces the text blob the outline pipeline works on,
//! or fails with [`Error::Extraction`]. Sources are registered by file
//! extension in a [`SourceRegistry`].
//!
//! # Example
//!
//! ```no_run
//! use pdf_outline::source::SourceRegistry;
//! use std::path::Path;
//!
//! fn main() -> pdf_outline::Result<()> {
//!     let registry = SourceRegistry::with_defaults();
//!     let text = registry.extract_text(Path::new("report.pdf"))?;
//!     println!("{} bytes of text", text.len());
//!     Ok(())
//! }
//! ```

#[cfg(feature = "pdf")]
mod pdf;
mod text;

#[cfg(feature = "pdf")]
pub use pdf::PdfTextSource;
pub use text::PlainTextSource;

use crate::error::{Error, Result};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

/// Trait for text sources.
///
/// Implement this trait to add support for a new document format.
pub trait TextSource: Send + Sync {
    /// Get the supported file extensions for this source.
    ///
    /// Extensions should be lowercase without the leading dot (e.g., `["pdf"]`).
    fn supported_extensions(&self) -> &[&str];

    /// Get the name of this source.
    fn name(&self) -> &str;

    /// Extract raw text from the bytes of a document.
    fn extract_text_bytes(&self, bytes: &[u8]) -> Result<String>;

    /// Extract raw text from a file.
    fn extract_text(&self, path: &Path) -> Result<String> {
        let bytes = std::fs::read(path)?;
        self.extract_text_bytes(&bytes)
    }

    /// Check if this source supports the given extension.
    fn supports_extension(&self, ext: &str) -> bool {
        let ext_lower = ext.to_lowercase();
        self.supported_extensions().iter().any(|e| *e == ext_lower)
    }
}

/// Registry mapping file extensions to text sources.
#[derive(Clone)]
pub struct SourceRegistry {
    by_extension: HashMap<String, Arc<dyn TextSource>>,
    by_name: HashMap<String, Arc<dyn TextSource>>,
}

impl SourceRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            by_extension: HashMap::new(),
            by_name: HashMap::new(),
        }
    }

    /// Create a registry with the built-in sources.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(PlainTextSource::new()));
        #[cfg(feature = "pdf")]
        registry.register(Arc::new(PdfTextSource::new()));
        registry
    }

    /// Register a source for all its supported extensions.
    ///
    /// A later registration replaces an earlier one for the same extension.
    pub fn register(&mut self, source: Arc<dyn TextSource>) {
        for ext in source.supported_extensions() {
            self.by_extension.insert(ext.to_lowercase(), source.clone());
        }
        self.by_name.insert(source.name().to_lowercase(), source);
    }

    /// Get a source by file extension.
    pub fn get_by_extension(&self, ext: &str) -> Option<Arc<dyn TextSource>> {
        self.by_extension.get(&ext.to_lowercase()).cloned()
    }

    /// Get a source by name.
    pub fn get_by_name(&self, name: &str) -> Option<Arc<dyn TextSource>> {
        self.by_name.get(&name.to_lowercase()).cloned()
    }

    /// Check if an extension is supported.
    pub fn supports(&self, ext: &str) -> bool {
        self.by_extension.contains_key(&ext.to_lowercase())
    }

    /// Get all supported extensions, sorted.
    pub fn supported_extensions(&self) -> Vec<&str> {
        let mut exts: Vec<&str> = self.by_extension.keys().map(|s| s.as_str()).collect();
        exts.sort_unstable();
        exts
    }

    /// Extract text from a file using the source for its extension.
    pub fn extract_text(&self, path: &Path) -> Result<String> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| Error::UnsupportedSource(path.display().to_string()))?;

        let source = self
            .get_by_extension(ext)
            .ok_or_else(|| Error::UnsupportedSource(ext.to_string()))?;

        log::debug!("Extracting text from {} with '{}'", path.display(), source.name());
        source.extract_text(path)
    }

    /// Extract text from bytes using the source for the given extension.
    pub fn extract_text_bytes(&self, bytes: &[u8], ext: &str) -> Result<String> {
        let source = self
            .get_by_extension(ext)
            .ok_or_else(|| Error::UnsupportedSource(ext.to_string()))?;

        source.extract_text_bytes(bytes)
    }
}

impl Default for SourceRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl std::fmt::Debug for SourceRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceRegistry")
            .field("extensions", &self.supported_extensions())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_with_defaults() {
        let registry = SourceRegistry::with_defaults();
        assert!(registry.supports("txt"));
        assert!(registry.supports("TXT"));
        assert!(!registry.supports("docx"));
        #[cfg(feature = "pdf")]
        assert!(registry.supports("pdf"));
    }

    #[test]
    fn test_registry_get_by_name() {
        let registry = SourceRegistry::with_defaults();
        let source = registry.get_by_name("text");
        assert!(source.is_some());
        assert_eq!(source.unwrap().name(), "text");
    }

    #[test]
    fn test_extract_bytes_unknown_extension() {
        let registry = SourceRegistry::with_defaults();
        let result = registry.extract_text_bytes(b"hello", "docx");
        assert!(matches!(result, Err(Error::UnsupportedSource(_))));
    }

    #[test]
    fn test_extract_path_without_extension() {
        let registry = SourceRegistry::with_defaults();
        let result = registry.extract_text(Path::new("README"));
        assert!(matches!(result, Err(Error::UnsupportedSource(_))));
    }
}
