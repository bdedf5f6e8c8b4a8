//! Document-level outline types.

use super::{HeadingCandidate, HeadingLevel};
use serde::{Deserialize, Serialize};

/// Inferred outline of a document: a title plus ordered heading candidates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlineResult {
    /// Document title, never empty
    pub title: String,

    /// Heading candidates in source order
    pub outline: Vec<HeadingCandidate>,
}

impl OutlineResult {
    /// Create a new outline result.
    pub fn new(title: impl Into<String>, outline: Vec<HeadingCandidate>) -> Self {
        Self {
            title: title.into(),
            outline,
        }
    }

    /// Number of heading candidates.
    pub fn len(&self) -> usize {
        self.outline.len()
    }

    /// Check if no heading candidates were found.
    pub fn is_empty(&self) -> bool {
        self.outline.is_empty()
    }

    /// Iterate over candidates of one level.
    pub fn headings_at(&self, level: HeadingLevel) -> impl Iterator<Item = &HeadingCandidate> {
        self.outline.iter().filter(move |h| h.level == level)
    }

    /// Highest estimated page among the candidates.
    pub fn last_page(&self) -> Option<u32> {
        self.outline.iter().map(|h| h.page).max()
    }
}

/// How an outline was produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlineReport {
    /// Non-empty lines after normalization
    pub line_count: usize,

    /// Lines accepted by the heading classifier
    pub classified_count: usize,

    /// Whether the fallback outline was used
    pub used_fallback: bool,

    /// Whether candidates were dropped by the entry limit
    pub truncated: bool,
}
