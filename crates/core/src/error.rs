//! Error types for PPTX slide text extraction.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during slide text extraction.
///
/// Everything that goes wrong while interpreting the bytes collapses into
/// [`Error::CorruptArchive`]; the concrete cause is only logged.
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to obtain the input bytes.
    #[error("Failed to read file: {0}")]
    Read(#[from] std::io::Error),

    /// The input is not a readable PPTX archive, or one of its slide parts
    /// could not be decoded as text.
    #[error("Not a valid PPTX archive")]
    CorruptArchive,
}

impl Error {
    /// Whether this error came from the input source rather than its contents.
    pub fn is_read(&self) -> bool {
        matches!(self, Self::Read(_))
    }
}
