//! Integration tests for text sources and the source registry.

use std::path::Path;
use std::sync::Arc;

use pdf_outline::error::{Error, Result};
use pdf_outline::source::{PlainTextSource, SourceRegistry, TextSource};
use pdf_outline::Outliner;

/// Mock source for testing.
struct MockSource {
    extensions: Vec<&'static str>,
    name: &'static str,
    text: Option<&'static str>,
}

impl MockSource {
    fn new(extensions: Vec<&'static str>, name: &'static str, text: &'static str) -> Self {
        Self {
            extensions,
            name,
            text: Some(text),
        }
    }

    fn failing(extensions: Vec<&'static str>, name: &'static str) -> Self {
        Self {
            extensions,
            name,
            text: None,
        }
    }
}

impl TextSource for MockSource {
    fn supported_extensions(&self) -> &[&str] {
        &self.extensions
    }

    fn name(&self) -> &str {
        self.name
    }

    fn extract_text_bytes(&self, _bytes: &[u8]) -> Result<String> {
        match self.text {
            Some(text) => Ok(text.to_string()),
            None => Err(Error::Extraction(format!("{} could not decode", self.name))),
        }
    }
}

#[test]
fn test_source_registry_new() {
    let registry = SourceRegistry::new();

    // Empty registry should support nothing
    assert!(!registry.supports("pdf"));
    assert!(!registry.supports("txt"));
    assert!(registry.supported_extensions().is_empty());
}

#[test]
fn test_source_registry_register() {
    let mut registry = SourceRegistry::new();
    registry.register(Arc::new(MockSource::new(vec!["doc", "docx"], "word", "")));

    assert!(registry.supports("doc"));
    assert!(registry.supports("DOCX")); // Case insensitive
    assert_eq!(registry.supported_extensions(), vec!["doc", "docx"]);
}

#[test]
fn test_source_registry_get_by_name() {
    let registry = SourceRegistry::with_defaults();

    assert!(registry.get_by_name("text").is_some());
    assert!(registry.get_by_name("TEXT").is_some()); // Case insensitive
    assert!(registry.get_by_name("unknown").is_none());
}

#[test]
fn test_later_registration_wins() {
    let mut registry = SourceRegistry::with_defaults();
    registry.register(Arc::new(MockSource::new(vec!["txt"], "custom", "OVERRIDDEN")));

    let source = registry.get_by_extension("txt").unwrap();
    assert_eq!(source.name(), "custom");
    // other extensions of the replaced source stay mapped
    assert_eq!(registry.get_by_extension("md").unwrap().name(), "text");
}

#[test]
fn test_outliner_with_mock_source() {
    let mut registry = SourceRegistry::new();
    registry.register(Arc::new(MockSource::new(
        vec!["mock"],
        "mock",
        "Chapter 1: Introduction\nbody\nSection 1.1\n",
    )));

    let result = Outliner::new()
        .with_registry(registry)
        .outline_bytes(b"ignored", "mock")
        .unwrap();

    assert_eq!(result.title, "Chapter 1: Introduction");
    assert_eq!(result.outline.len(), 2);
}

#[test]
fn test_extraction_failure_propagates_unchanged() {
    let mut registry = SourceRegistry::new();
    registry.register(Arc::new(MockSource::failing(vec!["bad"], "broken")));

    let err = Outliner::new()
        .with_registry(registry)
        .outline_bytes(b"whatever", "bad")
        .unwrap_err();

    assert!(matches!(err, Error::Extraction(ref msg) if msg == "broken could not decode"));
    assert!(err.is_extraction_failure());
    assert_eq!(err.user_message(), "Failed to parse PDF file");
}

#[test]
fn test_registry_path_without_extension() {
    let registry = SourceRegistry::with_defaults();
    let result = registry.extract_text(Path::new("noextension"));
    assert!(matches!(result, Err(Error::UnsupportedSource(_))));
}

#[test]
fn test_registry_missing_file_is_io_error() {
    let registry = SourceRegistry::with_defaults();
    let result = registry.extract_text(Path::new("/definitely/not/here.txt"));
    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn test_plain_text_source_reads_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.txt");
    std::fs::write(&path, "ABSTRACT\nSome findings.\n").unwrap();

    let text = PlainTextSource::new().extract_text(&path).unwrap();
    assert_eq!(text, "ABSTRACT\nSome findings.\n");
}

#[cfg(feature = "pdf")]
#[test]
fn test_pdf_source_rejects_text_with_pdf_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fake.pdf");
    std::fs::write(&path, "Chapter 1\n").unwrap();

    let err = SourceRegistry::with_defaults()
        .extract_text(&path)
        .unwrap_err();
    assert!(err.is_extraction_failure());
}
