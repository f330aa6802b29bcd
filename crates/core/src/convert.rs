//! Subtitle file to transcript conversion.

use crate::normalize::dedupe_lines;
use crate::strip::strip_timestamp_blocks;
use crate::{Error, Result, TextNormalizer, Transcript};
use std::io::ErrorKind;
use std::path::Path;

/// UTF-8 byte-order mark, dropped from the start of the input.
const BOM: char = '\u{feff}';

/// Read a whole file and decode it as UTF-8.
///
/// A missing path maps to [`Error::FileNotFound`] and invalid UTF-8 to
/// [`Error::Decode`]. A single leading byte-order mark is dropped.
pub fn read_document(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => Error::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => Error::Io(e),
    })?;

    log::debug!("Read {} bytes from {}", bytes.len(), path.display());

    let mut content = String::from_utf8(bytes).map_err(|source| Error::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    if content.starts_with(BOM) {
        content.replace_range(..BOM.len_utf8(), "");
    }

    Ok(content)
}

/// Converter from subtitle documents to deduplicated transcripts.
#[derive(Debug, Clone, Default)]
pub struct SrtConverter {
    normalizer: TextNormalizer,
}

impl SrtConverter {
    /// Create a converter with the default normalizer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom text normalizer.
    pub fn with_normalizer(mut self, normalizer: TextNormalizer) -> Self {
        self.normalizer = normalizer;
        self
    }

    /// Convert subtitle text that is already in memory.
    pub fn convert_str(&self, content: &str) -> Transcript {
        let normalized = self.normalizer.normalize_line_endings(content);
        let (cleaned, removed_blocks) = strip_timestamp_blocks(&normalized);
        let lines = self.normalizer.to_lines(&cleaned);
        let (lines, duplicates_dropped) = dedupe_lines(lines);

        log::debug!(
            "Removed {} timestamp blocks, kept {} lines, dropped {} duplicates",
            removed_blocks,
            lines.len(),
            duplicates_dropped
        );

        Transcript {
            lines,
            removed_blocks,
            duplicates_dropped,
        }
    }

    /// Read and convert a subtitle file.
    pub fn convert_file(&self, path: &Path) -> Result<Transcript> {
        let content = read_document(path)?;
        Ok(self.convert_str(&content))
    }
}

/// Convert the subtitle file at `path` into a single-paragraph transcript.
pub fn srt_to_text(path: impl AsRef<Path>) -> Result<String> {
    let transcript = SrtConverter::new().convert_file(path.as_ref())?;
    Ok(transcript.to_paragraph())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SAMPLE: &str = "1\n00:00:01,000 --> 00:00:02,000\nHello world\n\n\
                          2\n00:00:03,000 --> 00:00:04,000\nHello world\n\n\
                          3\n00:00:05,500 --> 00:00:06,000\nGoodbye\n";

    fn write_temp(bytes: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(bytes).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_convert_sample() {
        let transcript = SrtConverter::new().convert_str(SAMPLE);
        assert_eq!(transcript.to_paragraph(), "Hello world Goodbye");
        assert_eq!(transcript.removed_blocks, 3);
        assert_eq!(transcript.duplicates_dropped, 1);
    }

    #[test]
    fn test_plain_text_joined_in_order() {
        let transcript = SrtConverter::new().convert_str("  first line\nsecond line  \n\nthird\n");
        assert_eq!(transcript.to_paragraph(), "first line second line third");
    }

    #[test]
    fn test_whitespace_line_is_not_a_duplicate() {
        let transcript = SrtConverter::new().convert_str("Hi\n   \nThere\n\t\n");
        assert_eq!(transcript.lines, vec!["Hi", "There"]);
        assert_eq!(transcript.duplicates_dropped, 0);
    }

    #[test]
    fn test_malformed_timestamp_appears_in_output() {
        let transcript =
            SrtConverter::new().convert_str("1\n00:00:01 --> 00:00:02\nHello\n");
        assert_eq!(transcript.to_paragraph(), "1 00:00:01 --> 00:00:02 Hello");
        assert_eq!(transcript.removed_blocks, 0);
    }

    #[test]
    fn test_crlf_input() {
        let crlf = SAMPLE.replace('\n', "\r\n");
        let transcript = SrtConverter::new().convert_str(&crlf);
        assert_eq!(transcript.to_paragraph(), "Hello world Goodbye");
    }

    #[test]
    fn test_crlf_input_without_normalization() {
        let converter =
            SrtConverter::new().with_normalizer(TextNormalizer::new().with_normalize_line_endings(false));
        let transcript = converter.convert_str("1\r\n00:00:01,000 --> 00:00:02,000\r\nHello\r\n");
        assert_eq!(transcript.removed_blocks, 0);
        assert_eq!(
            transcript.to_paragraph(),
            "1 00:00:01,000 --> 00:00:02,000 Hello"
        );
    }

    #[test]
    fn test_empty_input() {
        let transcript = SrtConverter::new().convert_str("");
        assert!(transcript.is_empty());
        assert_eq!(transcript.to_paragraph(), "");
    }

    #[test]
    fn test_srt_to_text_from_file() {
        let file = write_temp(SAMPLE.as_bytes());
        assert_eq!(srt_to_text(file.path()).unwrap(), "Hello world Goodbye");
    }

    #[test]
    fn test_bom_dropped() {
        let mut bytes = "\u{feff}".as_bytes().to_vec();
        bytes.extend_from_slice(SAMPLE.as_bytes());
        let file = write_temp(&bytes);
        assert_eq!(srt_to_text(file.path()).unwrap(), "Hello world Goodbye");
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = srt_to_text(dir.path().join("missing.srt")).unwrap_err();
        assert!(err.is_not_found());
        assert!(matches!(err, Error::FileNotFound { .. }));
    }

    #[test]
    fn test_invalid_utf8() {
        let file = write_temp(&[b'H', b'i', 0xff, 0xfe, b'\n']);
        let err = srt_to_text(file.path()).unwrap_err();
        assert!(matches!(err, Error::Decode { .. }));
        assert!(!err.is_not_found());
    }
}
