//! Error types for screenplay processing.
//!
//! Provides [`ScriptError`] for failures at any stage of the pipeline:
//! input validation at the boundary, PDF extraction in a backend crate,
//! and (rare) unexpected failures inside the classifier.

use std::fmt;

/// Fatal error types for screenplay processing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptError {
    /// Bad argument shape, size, or type at an API boundary.
    Validation(String),
    /// Failure inside the PDF extraction collaborator.
    Pdf(String),
    /// Unexpected failure inside the classifier. The classifier is total
    /// on well-formed input, so this indicates a defect or malformed state.
    Classification(String),
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScriptError::Validation(msg) => write!(f, "validation error: {msg}"),
            ScriptError::Pdf(msg) => write!(f, "PDF error: {msg}"),
            ScriptError::Classification(msg) => write!(f, "classification error: {msg}"),
        }
    }
}

impl std::error::Error for ScriptError {}

impl From<std::io::Error> for ScriptError {
    fn from(err: std::io::Error) -> Self {
        ScriptError::Pdf(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_display() {
        let err = ScriptError::Validation("missing pages".to_string());
        assert_eq!(err.to_string(), "validation error: missing pages");
    }

    #[test]
    fn pdf_error_display() {
        let err = ScriptError::Pdf("truncated xref".to_string());
        assert_eq!(err.to_string(), "PDF error: truncated xref");
    }

    #[test]
    fn classification_error_display() {
        let err = ScriptError::Classification("empty group".to_string());
        assert_eq!(err.to_string(), "classification error: empty group");
    }

    #[test]
    fn implements_std_error() {
        let err: Box<dyn std::error::Error> =
            Box::new(ScriptError::Validation("test".to_string()));
        assert_eq!(err.to_string(), "validation error: test");
    }

    #[test]
    fn from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing file");
        let err: ScriptError = io_err.into();
        assert!(matches!(err, ScriptError::Pdf(_)));
        assert!(err.to_string().contains("missing file"));
    }

    #[test]
    fn clone_and_eq() {
        let err1 = ScriptError::Pdf("test".to_string());
        let err2 = err1.clone();
        assert_eq!(err1, err2);
    }
}
