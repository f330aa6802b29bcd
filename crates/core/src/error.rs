//! Error types for subtitle conversion.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while converting a subtitle file.
#[derive(Error, Debug)]
pub enum Error {
    /// The input path does not exist.
    #[error("File not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// The input bytes are not valid UTF-8.
    #[error("Failed to decode {} as UTF-8: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// Any other failure reading the input file.
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether this error means the input file does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::FileNotFound { .. })
    }
}
