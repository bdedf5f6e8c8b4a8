//! Heading classification and level assignment.
//!
//! A line is a heading candidate when it is short enough and any of three
//! rules holds: it contains a structural keyword, it starts with a number
//! followed by a period, or it is written entirely in capitals. The level of
//! an accepted line comes from which keyword group it contains.

use std::sync::OnceLock;

use regex::Regex;

use super::options::OutlineOptions;
use crate::model::HeadingLevel;

/// Keywords that mark a line as structural.
pub const HEADING_KEYWORDS: [&str; 7] = [
    "chapter",
    "section",
    "part",
    "introduction",
    "conclusion",
    "summary",
    "abstract",
];

/// Keywords that place a heading at H1.
const H1_KEYWORDS: [&str; 4] = ["chapter", "part", "introduction", "conclusion"];

/// Keywords that place a heading at H2.
const H2_KEYWORDS: [&str; 3] = ["section", "summary", "abstract"];

fn numbered_heading_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // ASCII digits only
    RE.get_or_init(|| Regex::new(r"^[0-9]+\.").expect("numbered heading pattern is valid"))
}

fn contains_any(lower: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| lower.contains(k))
}

/// Rule that accepted a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingRule {
    /// Contains a structural keyword
    Keyword,
    /// Starts with `<digits>.`
    Numbered,
    /// Entirely upper case and long enough
    AllCaps,
}

/// Rule-based heading classifier.
#[derive(Debug, Clone, Copy)]
pub struct HeadingClassifier {
    max_heading_chars: usize,
    min_caps_chars: usize,
}

impl HeadingClassifier {
    /// Create a classifier with the given length thresholds.
    pub fn new(max_heading_chars: usize, min_caps_chars: usize) -> Self {
        Self {
            max_heading_chars,
            min_caps_chars,
        }
    }

    /// Create a classifier from outline options.
    pub fn from_options(options: &OutlineOptions) -> Self {
        Self::new(options.max_heading_chars, options.min_caps_chars)
    }

    /// Check whether a trimmed line is a heading candidate.
    pub fn is_heading(&self, text: &str) -> bool {
        self.matching_rule(text).is_some()
    }

    /// Return the first rule that accepts the line, if any.
    ///
    /// Lines over the length limit are rejected before any rule runs.
    pub fn matching_rule(&self, text: &str) -> Option<HeadingRule> {
        let chars = text.chars().count();
        if chars > self.max_heading_chars {
            return None;
        }

        if contains_any(&text.to_lowercase(), &HEADING_KEYWORDS) {
            return Some(HeadingRule::Keyword);
        }
        if numbered_heading_regex().is_match(text) {
            return Some(HeadingRule::Numbered);
        }
        if chars > self.min_caps_chars && text == text.to_uppercase() {
            return Some(HeadingRule::AllCaps);
        }
        None
    }
}

impl Default for HeadingClassifier {
    fn default() -> Self {
        Self::from_options(&OutlineOptions::default())
    }
}

/// Assign a hierarchy level to an accepted heading line.
///
/// H1 keywords take precedence over H2 keywords; lines with neither are H3.
pub fn assign_level(text: &str) -> HeadingLevel {
    let lower = text.to_lowercase();

    if contains_any(&lower, &H1_KEYWORDS) {
        HeadingLevel::H1
    } else if contains_any(&lower, &H2_KEYWORDS) {
        HeadingLevel::H2
    } else {
        HeadingLevel::H3
    }
}
