//! Normalized text line.

use serde::{Deserialize, Serialize};

/// A trimmed, non-empty line of the source text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    /// Trimmed text, never empty
    pub text: String,

    /// Position within the sequence of non-empty lines (0-indexed)
    pub index: usize,
}

impl Line {
    /// Create a new line.
    pub fn new(text: impl Into<String>, index: usize) -> Self {
        Self {
            text: text.into(),
            index,
        }
    }

    /// Length in characters (not bytes).
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_len_counts_chars() {
        let line = Line::new("Résumé", 0);
        assert_eq!(line.char_len(), 6);
        assert_eq!(line.text.len(), 8);
    }
}
