//! screenplay: convert PDF screenplays into structured, typed elements.
//!
//! This is the public API facade crate for screenplay-rs. It re-exports
//! types from screenplay-core and uses screenplay-parse for PDF reading.
//!
//! # Architecture
//!
//! - **screenplay-core**: data types and the multi-pass classifier
//! - **screenplay-parse**: lopdf-backed positioned-span extraction
//! - **screenplay** (this crate): pipeline orchestration, language
//!   detection, and text/JSON export
//!
//! # Example
//!
//! ```ignore
//! let script = screenplay::parse_pdf_file("draft.pdf")?;
//! println!("{}", script.title.as_deref().unwrap_or("(untitled)"));
//! println!("{}", screenplay::export::to_text(&script));
//! ```

#![deny(missing_docs)]

/// Renderings of a script: text, JSON, outline, debug.
pub mod export;
/// Language detection for extracted text.
pub mod language;

pub use screenplay_core::{
    assemble, classify_document, Boundary, ClassifyOptions, Context, DocumentInput, ElementKind,
    GroupOptions, GroupedPage, PageInput, Script, ScriptError, ScriptMetadata, ScriptPage, Span,
    TextElement,
};
pub use screenplay_parse::{
    extract_document, extract_document_file, ExtractError, MAX_PDF_BYTES, MIN_PDF_BYTES,
};

/// Classify an already-extracted document into a [`Script`].
///
/// Runs the classifier and assembler over `input` as-is; the input's
/// language label is carried onto the script unchanged.
///
/// # Errors
///
/// Returns [`ScriptError`] when the input shape is invalid.
pub fn classify_input(input: &DocumentInput) -> Result<Script, ScriptError> {
    let pages = classify_document(input, &ClassifyOptions::default())?;
    Ok(assemble(pages, input.language.clone()))
}

/// Parse a PDF screenplay from bytes: validate, extract positioned spans,
/// detect the language, classify, and assemble.
///
/// # Errors
///
/// Returns [`ScriptError::Pdf`] for extraction failures and
/// [`ScriptError::Validation`] for malformed input shapes.
pub fn parse_pdf_bytes(bytes: &[u8]) -> Result<Script, ScriptError> {
    let mut input = extract_document(bytes)?;

    let text: String = input
        .pages
        .iter()
        .flat_map(|p| p.text_items.iter())
        .map(|s| s.text.as_str())
        .collect::<Vec<_>>()
        .join("\n");
    input.language = language::detect_language(&text);

    classify_input(&input)
}

/// Parse a PDF screenplay from a file on disk.
///
/// # Errors
///
/// Returns [`ScriptError::Pdf`] when the file cannot be read or parsed.
pub fn parse_pdf_file(path: impl AsRef<std::path::Path>) -> Result<Script, ScriptError> {
    let bytes = std::fs::read(path.as_ref()).map_err(|e| ScriptError::Pdf(e.to_string()))?;
    parse_pdf_bytes(&bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_input_carries_language() {
        let input = DocumentInput::new(
            vec![PageInput::new(
                1,
                vec![Span::new("INT. KITCHEN - DAY", 72.0, 200.0, 130.0, 12.0)],
            )],
            "English",
        );
        let script = classify_input(&input).unwrap();
        assert_eq!(script.language, "English");
        assert_eq!(script.metadata.scene_count, 1);
    }

    #[test]
    fn parse_pdf_bytes_rejects_junk() {
        let err = parse_pdf_bytes(b"junk").unwrap_err();
        assert!(matches!(err, ScriptError::Pdf(_)));
    }

    #[test]
    fn parse_pdf_file_missing_path() {
        let err = parse_pdf_file("/nonexistent/script.pdf").unwrap_err();
        assert!(matches!(err, ScriptError::Pdf(_)));
    }
}
