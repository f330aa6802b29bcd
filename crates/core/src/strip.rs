//! Removal of cue index and timestamp lines.
//!
//! A timestamp block is an index line made only of digits, followed directly
//! by a `HH:MM:SS,mmm --> HH:MM:SS,mmm` line. Both lines and their line
//! breaks are deleted. Anything that does not match that exact shape is
//! left in place.

use regex::{Captures, Regex};
use std::borrow::Cow;
use std::sync::LazyLock;

/// Regex matching one index line plus its time-range line.
static TIMESTAMP_BLOCK_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^\d+\n\d{2}:\d{2}:\d{2},\d{3} --> \d{2}:\d{2}:\d{2},\d{3}\n").unwrap()
});

/// Delete every timestamp block from `text`.
///
/// Returns the remaining text and the number of blocks removed. Expects
/// `\n` line breaks; run the text through
/// [`TextNormalizer::normalize_line_endings`](crate::TextNormalizer::normalize_line_endings)
/// first if it may contain `\r\n`.
pub fn strip_timestamp_blocks(text: &str) -> (Cow<'_, str>, usize) {
    let mut removed = 0;
    let cleaned = TIMESTAMP_BLOCK_REGEX.replace_all(text, |_: &Captures<'_>| {
        removed += 1;
        ""
    });

    (cleaned, removed)
}
