//! Plain text source.

use crate::error::Result;

use super::TextSource;

/// Text source for files that already contain plain text.
#[derive(Debug, Clone, Default)]
pub struct PlainTextSource {
    _private: (),
}

impl PlainTextSource {
    /// Create a new plain text source.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl TextSource for PlainTextSource {
    fn supported_extensions(&self) -> &[&str] {
        &["txt", "text", "md"]
    }

    fn name(&self) -> &str {
        "text"
    }

    fn extract_text_bytes(&self, bytes: &[u8]) -> Result<String> {
        Ok(String::from_utf8(bytes.to_vec())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_plain_text_extensions() {
        let source = PlainTextSource::new();
        assert!(source.supports_extension("txt"));
        assert!(source.supports_extension("MD"));
        assert!(!source.supports_extension("pdf"));
    }

    #[test]
    fn test_utf8_passthrough() {
        let source = PlainTextSource::new();
        let text = source.extract_text_bytes("Chapter 1\nÉtude".as_bytes()).unwrap();
        assert_eq!(text, "Chapter 1\nÉtude");
    }

    #[test]
    fn test_invalid_utf8_is_extraction_failure() {
        let source = PlainTextSource::new();
        let err = source.extract_text_bytes(&[0x43, 0xff, 0x0a]).unwrap_err();
        assert!(matches!(err, Error::Encoding(_)));
        assert!(err.is_extraction_failure());
    }
}
