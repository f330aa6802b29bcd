//! Line normalization for subtitle text.
//!
//! Handles line-ending normalization, splitting into trimmed non-empty
//! lines, and order-preserving deduplication.

use std::collections::HashSet;

/// Text normalizer for subtitle content.
#[derive(Debug, Clone)]
pub struct TextNormalizer {
    /// Whether to rewrite `\r\n` and lone `\r` line breaks as `\n`.
    normalize_line_endings: bool,
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self {
            normalize_line_endings: true,
        }
    }
}

impl TextNormalizer {
    /// Create a new text normalizer with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether to normalize line endings to `\n`.
    pub fn with_normalize_line_endings(mut self, normalize: bool) -> Self {
        self.normalize_line_endings = normalize;
        self
    }

    /// Normalize line endings to `\n` if enabled.
    ///
    /// Returns the input unchanged when disabled or when it has no `\r`.
    pub fn normalize_line_endings(&self, text: &str) -> String {
        if !self.normalize_line_endings || !text.contains('\r') {
            return text.to_string();
        }

        text.replace("\r\n", "\n").replace('\r', "\n")
    }

    /// Split text on `\n` into trimmed, non-empty lines.
    pub fn to_lines(&self, text: &str) -> Vec<String> {
        text.split('\n')
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// Remove repeated lines, keeping each one the first time it appears.
///
/// Comparison is exact and case-sensitive. Returns the kept lines in their
/// original order and the number of lines dropped.
pub fn dedupe_lines(lines: Vec<String>) -> (Vec<String>, usize) {
    let total = lines.len();
    let mut seen: HashSet<String> = HashSet::with_capacity(total);
    let mut unique = Vec::with_capacity(total);

    for line in lines {
        if seen.insert(line.clone()) {
            unique.push(line);
        }
    }

    let dropped = total - unique.len();
    (unique, dropped)
}
