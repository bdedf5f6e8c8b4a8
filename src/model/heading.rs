//! Heading-level types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Hierarchy level of a heading candidate.
///
/// `H1` is the top of the visual hierarchy. The derived ordering follows
/// declaration order (`H1 < H2 < H3`), i.e. it sorts by depth, not rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
}

impl HeadingLevel {
    /// Wire name ("H1", "H2", "H3").
    pub fn as_str(&self) -> &'static str {
        match self {
            HeadingLevel::H1 => "H1",
            HeadingLevel::H2 => "H2",
            HeadingLevel::H3 => "H3",
        }
    }

    /// Nesting depth, 1-indexed.
    pub fn depth(&self) -> u8 {
        match self {
            HeadingLevel::H1 => 1,
            HeadingLevel::H2 => 2,
            HeadingLevel::H3 => 3,
        }
    }
}

impl fmt::Display for HeadingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A line judged to be a heading, with its level and estimated page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawHeadingCandidate")]
pub struct HeadingCandidate {
    /// Heading text (trimmed source line)
    pub text: String,

    /// Inferred hierarchy level
    pub level: HeadingLevel,

    /// Estimated page number (1-indexed, approximate)
    pub page: u32,
}

impl HeadingCandidate {
    /// Create a new heading candidate.
    ///
    /// A page of 0 is raised to 1.
    pub fn new(text: impl Into<String>, level: HeadingLevel, page: u32) -> Self {
        Self {
            text: text.into(),
            level,
            page: page.max(1),
        }
    }
}

/// Unchecked wire form; parsed candidates go through [`HeadingCandidate::new`].
#[derive(Deserialize)]
struct RawHeadingCandidate {
    text: String,
    level: HeadingLevel,
    page: u32,
}

impl From<RawHeadingCandidate> for HeadingCandidate {
    fn from(raw: RawHeadingCandidate) -> Self {
        Self::new(raw.text, raw.level, raw.page)
    }
}
