//! Line normalization.

use crate::model::Line;
use unicode_normalization::UnicodeNormalization;

/// Characters stripped from both ends of a line.
///
/// Unicode whitespace except NEL (U+0085), plus the byte-order mark, which
/// some extractors leave at the start of the text.
fn is_trimmable(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{FEFF}'
}

/// Split raw text into trimmed, non-empty lines.
///
/// Lines are split on `\n` only; a `\r` left over from CRLF endings is
/// trimmed. Each kept line is indexed by its position among the kept lines.
pub fn normalize_lines(text: &str) -> Vec<Line> {
    text.split('\n')
        .map(|raw| raw.trim_matches(is_trimmable))
        .filter(|trimmed| !trimmed.is_empty())
        .enumerate()
        .map(|(index, trimmed)| Line::new(trimmed, index))
        .collect()
}

/// Like [`normalize_lines`], with each line in Unicode NFC form.
pub fn normalize_lines_nfc(text: &str) -> Vec<Line> {
    normalize_lines(text)
        .into_iter()
        .map(|line| Line::new(line.text.nfc().collect::<String>(), line.index))
        .collect()
}
