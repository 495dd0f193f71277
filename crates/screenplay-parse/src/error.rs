//! Error types for the extraction layer.
//!
//! Uses [`thiserror`] for ergonomic error derivation. Provides
//! [`ExtractError`] that wraps backend-specific failures and converts into
//! [`ScriptError`] for unified error handling across the library.

use screenplay_core::ScriptError;
use thiserror::Error;

/// Maximum accepted PDF size in bytes (15 MB).
pub const MAX_PDF_BYTES: usize = 15 * 1024 * 1024;

/// Minimum accepted PDF size in bytes.
pub const MIN_PDF_BYTES: usize = 1024;

/// Error type for PDF extraction operations.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The input does not start with the `%PDF` magic bytes.
    #[error("not a PDF file: missing %PDF header")]
    BadHeader,

    /// The input is too small to be a real PDF.
    #[error("PDF too small: {0} bytes (minimum {MIN_PDF_BYTES})")]
    TooSmall(usize),

    /// The input exceeds the maximum accepted size.
    #[error("PDF too large: {0} bytes (maximum {MAX_PDF_BYTES})")]
    TooLarge(usize),

    /// Error from PDF parsing (structure, syntax, object resolution).
    #[error("PDF parse error: {0}")]
    Parse(String),

    /// Error reading PDF data.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<lopdf::Error> for ExtractError {
    fn from(err: lopdf::Error) -> Self {
        ExtractError::Parse(err.to_string())
    }
}

impl From<ExtractError> for ScriptError {
    fn from(err: ExtractError) -> Self {
        ScriptError::Pdf(err.to_string())
    }
}
