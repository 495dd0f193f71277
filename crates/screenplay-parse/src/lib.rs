//! lopdf-backed positioned-span extraction for screenplay-rs.
//!
//! Opens PDF bytes, validates the binary (size bounds, `%PDF` magic),
//! walks each page's content stream, and produces the [`DocumentInput`]
//! shape the classifier consumes: per-page positioned spans with y
//! normalized to a top-left origin and page dimensions defaulted to
//! US Letter when absent.
//!
//! The language field of the returned [`DocumentInput`] is left as
//! `"unknown"` — detection is the facade's job.

#![deny(missing_docs)]

/// Error types for the extraction layer.
pub mod error;
/// Content stream interpretation into positioned spans.
pub mod interpreter;
/// PDF binary validation (size bounds, magic).
pub mod validation;

pub use error::{ExtractError, MAX_PDF_BYTES, MIN_PDF_BYTES};
pub use interpreter::extract_page_spans;
pub use validation::validate_pdf_bytes;

use lopdf::{Document, Object, ObjectId};
use screenplay_core::{DocumentInput, PageInput, DEFAULT_PAGE_HEIGHT, DEFAULT_PAGE_WIDTH};

/// Look up a key in a page dictionary, walking up the page tree via
/// `/Parent` when the key is not on the page itself.
fn resolve_inherited<'a>(
    doc: &'a Document,
    page_id: ObjectId,
    key: &[u8],
) -> Option<&'a Object> {
    let mut current = Some(page_id);
    while let Some(id) = current {
        let dict = doc.get_object(id).ok().and_then(|o| o.as_dict().ok())?;
        if let Ok(value) = dict.get(key) {
            return Some(value);
        }
        current = dict
            .get(b"Parent")
            .ok()
            .and_then(|o| o.as_reference().ok());
    }
    None
}

/// Page dimensions from the (possibly inherited) MediaBox, defaulting to
/// US Letter when absent or malformed.
fn page_dimensions(doc: &Document, page_id: ObjectId) -> (f64, f64) {
    let numbers: Option<Vec<f64>> = resolve_inherited(doc, page_id, b"MediaBox")
        .and_then(|obj| obj.as_array().ok())
        .map(|array| {
            array
                .iter()
                .filter_map(|o| match o {
                    Object::Integer(i) => Some(*i as f64),
                    Object::Real(f) => Some(*f as f64),
                    _ => None,
                })
                .collect()
        });
    match numbers.as_deref() {
        Some([llx, lly, urx, ury]) => (urx - llx, ury - lly),
        _ => (DEFAULT_PAGE_WIDTH, DEFAULT_PAGE_HEIGHT),
    }
}

/// Extract a classifier-ready document from PDF bytes.
///
/// Validates the binary first, then emits one [`PageInput`] per page with
/// 1-based page numbers in document order.
///
/// # Errors
///
/// Returns [`ExtractError`] when the bytes fail validation or cannot be
/// parsed as a PDF.
pub fn extract_document(bytes: &[u8]) -> Result<DocumentInput, ExtractError> {
    validate_pdf_bytes(bytes)?;
    let doc = Document::load_mem(bytes)?;

    let mut pages = Vec::new();
    for (page_number, page_id) in doc.get_pages() {
        let (width, height) = page_dimensions(&doc, page_id);
        let spans = extract_page_spans(&doc, page_id, height)?;
        pages.push(PageInput {
            page_number: page_number as usize,
            width,
            height,
            text_items: spans,
        });
    }

    Ok(DocumentInput::new(pages, "unknown"))
}

/// Extract a classifier-ready document from a PDF file on disk.
///
/// # Errors
///
/// Returns [`ExtractError`] on I/O failure or any [`extract_document`]
/// failure.
pub fn extract_document_file(
    path: impl AsRef<std::path::Path>,
) -> Result<DocumentInput, ExtractError> {
    let bytes = std::fs::read(path.as_ref())?;
    extract_document(&bytes)
}
