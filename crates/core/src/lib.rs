//! Core conversion of subtitle files into deduplicated plain-text transcripts.

pub mod convert;
pub mod error;
pub mod normalize;
pub mod strip;
pub mod types;

pub use convert::{srt_to_text, SrtConverter};
pub use error::{Error, Result};
pub use normalize::{dedupe_lines, TextNormalizer};
pub use strip::strip_timestamp_blocks;
pub use types::Transcript;
