//! Outline inference options and configuration.

/// Default title when the text has no non-empty line.
pub const UNTITLED_DOCUMENT: &str = "Untitled Document";

/// Hard upper bound on outline entries, whatever the options say.
pub const MAX_OUTLINE_ENTRIES: usize = 20;

/// Options for outline inference.
///
/// The defaults reproduce the reference heuristics exactly; changing them
/// trades compatibility for tuning.
#[derive(Debug, Clone)]
pub struct OutlineOptions {
    /// Lines longer than this (in characters) are treated as prose
    pub max_heading_chars: usize,

    /// All-caps lines must be longer than this (in characters)
    pub min_caps_chars: usize,

    /// Assumed lines per page for page estimation (at least 1)
    pub lines_per_page: usize,

    /// Maximum number of outline entries (1 to [`MAX_OUTLINE_ENTRIES`])
    pub max_entries: usize,

    /// Number of leading lines the fallback inspects
    pub fallback_scan_lines: usize,

    /// Fallback candidates must be longer than this (in characters)
    pub fallback_min_chars: usize,

    /// Fallback candidates must be shorter than this (in characters)
    pub fallback_max_chars: usize,

    /// Which fallback line receives the H1 level
    pub fallback_primary: FallbackPrimary,

    /// Title used when the text has no lines
    pub untitled_placeholder: String,

    /// Normalize each line to Unicode NFC before classification
    pub normalize_unicode: bool,
}

impl OutlineOptions {
    /// Create new outline options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the prose cutoff length.
    pub fn with_max_heading_chars(mut self, chars: usize) -> Self {
        self.max_heading_chars = chars;
        self
    }

    /// Set the assumed number of lines per page.
    pub fn with_lines_per_page(mut self, lines: usize) -> Self {
        self.lines_per_page = lines.max(1);
        self
    }

    /// Set the maximum number of outline entries.
    ///
    /// Clamped to `1..=MAX_OUTLINE_ENTRIES`.
    pub fn with_max_entries(mut self, entries: usize) -> Self {
        self.max_entries = entries.clamp(1, MAX_OUTLINE_ENTRIES);
        self
    }

    /// Set how many leading lines the fallback inspects.
    pub fn with_fallback_scan_lines(mut self, lines: usize) -> Self {
        self.fallback_scan_lines = lines;
        self
    }

    /// Set the fallback H1 policy.
    pub fn with_fallback_primary(mut self, primary: FallbackPrimary) -> Self {
        self.fallback_primary = primary;
        self
    }

    /// Set the placeholder title.
    ///
    /// An empty placeholder is ignored so the title is never empty.
    pub fn with_untitled_placeholder(mut self, title: impl Into<String>) -> Self {
        let title = title.into();
        if !title.trim().is_empty() {
            self.untitled_placeholder = title;
        }
        self
    }

    /// Enable or disable NFC normalization of lines.
    pub fn with_unicode_normalization(mut self, normalize: bool) -> Self {
        self.normalize_unicode = normalize;
        self
    }
}

impl Default for OutlineOptions {
    fn default() -> Self {
        Self {
            max_heading_chars: 100,
            min_caps_chars: 3,
            lines_per_page: 50,
            max_entries: MAX_OUTLINE_ENTRIES,
            fallback_scan_lines: 10,
            fallback_min_chars: 3,
            fallback_max_chars: 100,
            fallback_primary: FallbackPrimary::FirstInspected,
            untitled_placeholder: UNTITLED_DOCUMENT.to_string(),
            normalize_unicode: false,
        }
    }
}

/// Which line of the fallback scan is promoted to H1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FallbackPrimary {
    /// The first inspected line is H1, even when it is skipped by the
    /// length band (the fallback output may then contain no H1)
    #[default]
    FirstInspected,
    /// The first emitted candidate is H1
    FirstEmitted,
}
