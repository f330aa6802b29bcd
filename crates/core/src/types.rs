//! Domain types for representing a converted transcript.

use serde::{Deserialize, Serialize};

/// The result of converting one subtitle document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcript {
    /// Unique, trimmed, non-empty lines in first-occurrence order.
    pub lines: Vec<String>,

    /// Number of index/timestamp blocks removed from the input.
    pub removed_blocks: usize,

    /// Number of repeated lines dropped during deduplication.
    pub duplicates_dropped: usize,
}

impl Transcript {
    /// Join all lines into a single space-separated paragraph.
    pub fn to_paragraph(&self) -> String {
        self.lines.join(" ")
    }

    /// Whether no text survived the conversion.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
