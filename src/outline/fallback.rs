//! Fallback outline for documents with no classified headings.

use super::options::{FallbackPrimary, OutlineOptions};
use crate::model::{HeadingCandidate, HeadingLevel, Line};

/// Build heading candidates from the opening lines of a document.
///
/// Inspects the first `fallback_scan_lines` lines; every line whose length
/// lies strictly between `fallback_min_chars` and `fallback_max_chars`
/// becomes a candidate on page 1. One line is H1 according to
/// `fallback_primary`, the rest are H2.
pub fn select_fallback(lines: &[Line], options: &OutlineOptions) -> Vec<HeadingCandidate> {
    let mut candidates = Vec::new();

    for (position, line) in lines.iter().take(options.fallback_scan_lines).enumerate() {
        let chars = line.char_len();
        if chars <= options.fallback_min_chars || chars >= options.fallback_max_chars {
            continue;
        }

        let primary = match options.fallback_primary {
            FallbackPrimary::FirstInspected => position == 0,
            FallbackPrimary::FirstEmitted => candidates.is_empty(),
        };
        let level = if primary {
            HeadingLevel::H1
        } else {
            HeadingLevel::H2
        };

        candidates.push(HeadingCandidate::new(line.text.clone(), level, 1));
    }

    candidates
}
