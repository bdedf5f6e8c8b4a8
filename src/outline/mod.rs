//! Outline inference from plain text.
//!
//! The pipeline is linear and pure:
//!
//! 1. [`normalize_lines`] splits the text into trimmed, non-empty lines.
//! 2. [`HeadingClassifier`] accepts heading-like lines; each accepted line
//!    gets a level from [`assign_level`] and a page from [`estimate_page`].
//! 3. If nothing was accepted, [`select_fallback`] builds candidates from
//!    the opening lines.
//! 4. The first line becomes the title and the candidate list is cut to the
//!    entry limit.
//!
//! # Example
//!
//! ```
//! use pdf_outline::outline::OutlineExtractor;
//! use pdf_outline::HeadingLevel;
//!
//! let extractor = OutlineExtractor::default();
//! let result = extractor.extract("Chapter 1: Introduction\nSome prose follows here.");
//!
//! assert_eq!(result.title, "Chapter 1: Introduction");
//! assert_eq!(result.outline[0].level, HeadingLevel::H1);
//! ```

mod classify;
mod fallback;
mod normalize;
mod options;
mod page;

pub use classify::{assign_level, HeadingClassifier, HeadingRule, HEADING_KEYWORDS};
pub use fallback::select_fallback;
pub use normalize::{normalize_lines, normalize_lines_nfc};
pub use options::{
    FallbackPrimary, OutlineOptions, MAX_OUTLINE_ENTRIES, UNTITLED_DOCUMENT,
};
pub use page::estimate_page;

use crate::model::{HeadingCandidate, Line, OutlineReport, OutlineResult};

/// Pick the document title: the first line, or the placeholder.
///
/// A blank placeholder falls back to [`UNTITLED_DOCUMENT`].
pub fn select_title(lines: &[Line], placeholder: &str) -> String {
    match lines.first() {
        Some(line) => line.text.clone(),
        None if placeholder.trim().is_empty() => UNTITLED_DOCUMENT.to_string(),
        None => placeholder.to_string(),
    }
}

/// Turns raw text into an [`OutlineResult`].
#[derive(Debug, Clone)]
pub struct OutlineExtractor {
    options: OutlineOptions,
    classifier: HeadingClassifier,
}

impl OutlineExtractor {
    /// Create an extractor with custom options.
    pub fn new(options: OutlineOptions) -> Self {
        let classifier = HeadingClassifier::from_options(&options);
        Self {
            options,
            classifier,
        }
    }

    /// Get the extractor options.
    pub fn options(&self) -> &OutlineOptions {
        &self.options
    }

    /// Infer the outline of a text.
    pub fn extract(&self, text: &str) -> OutlineResult {
        self.extract_with_report(text).0
    }

    /// Infer the outline of a text and report how it was produced.
    pub fn extract_with_report(&self, text: &str) -> (OutlineResult, OutlineReport) {
        let lines = if self.options.normalize_unicode {
            normalize_lines_nfc(text)
        } else {
            normalize_lines(text)
        };

        let mut report = OutlineReport {
            line_count: lines.len(),
            ..Default::default()
        };

        let mut outline = self.classify(&lines);
        report.classified_count = outline.len();

        if outline.is_empty() {
            outline = select_fallback(&lines, &self.options);
            report.used_fallback = true;
            log::debug!(
                "No headings classified in {} lines, fallback produced {}",
                lines.len(),
                outline.len()
            );
        }

        let max_entries = self.options.max_entries.min(MAX_OUTLINE_ENTRIES);
        if outline.len() > max_entries {
            log::debug!(
                "Truncating outline from {} to {} entries",
                outline.len(),
                max_entries
            );
            outline.truncate(max_entries);
            report.truncated = true;
        }

        let title = select_title(&lines, &self.options.untitled_placeholder);
        (OutlineResult::new(title, outline), report)
    }

    fn classify(&self, lines: &[Line]) -> Vec<HeadingCandidate> {
        lines
            .iter()
            .filter(|line| self.classifier.is_heading(&line.text))
            .map(|line| {
                HeadingCandidate::new(
                    line.text.clone(),
                    assign_level(&line.text),
                    estimate_page(line.index, self.options.lines_per_page),
                )
            })
            .collect()
    }
}

impl Default for OutlineExtractor {
    fn default() -> Self {
        Self::new(OutlineOptions::default())
    }
}
