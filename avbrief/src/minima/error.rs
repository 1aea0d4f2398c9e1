//! Reference-data loader error types.

/// Errors that can occur when loading the airport reference file.
#[derive(Debug, thiserror::Error)]
pub enum MinimaError {
    /// Reading the file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file ended before the blank line terminating the header
    #[error("reference file has no blank line after the header")]
    MissingHeader,
}
