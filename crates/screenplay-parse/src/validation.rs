//! PDF binary validation.
//!
//! Cheap checks applied before handing bytes to the parser: size bounds and
//! the `%PDF` magic. These reject the common failure modes (empty uploads,
//! renamed files, runaway inputs) with specific messages.

use crate::error::{ExtractError, MAX_PDF_BYTES, MIN_PDF_BYTES};

/// Validate raw PDF bytes before parsing.
pub fn validate_pdf_bytes(bytes: &[u8]) -> Result<(), ExtractError> {
    if bytes.len() < MIN_PDF_BYTES {
        return Err(ExtractError::TooSmall(bytes.len()));
    }
    if bytes.len() > MAX_PDF_BYTES {
        return Err(ExtractError::TooLarge(bytes.len()));
    }
    if &bytes[..4] != b"%PDF" {
        return Err(ExtractError::BadHeader);
    }
    Ok(())
}
