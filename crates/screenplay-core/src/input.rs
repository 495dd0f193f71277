//! Input shape consumed by the classifier.
//!
//! A [`DocumentInput`] is what a PDF extraction backend hands to the core:
//! one [`PageInput`] per page with 1-based page numbers, page dimensions
//! (defaulted to US Letter when absent), and positioned text spans with
//! y already normalized to a top-left origin.

use crate::element::Span;
use crate::error::ScriptError;

/// Default page width in points (US Letter).
pub const DEFAULT_PAGE_WIDTH: f64 = 612.0;
/// Default page height in points (US Letter).
pub const DEFAULT_PAGE_HEIGHT: f64 = 792.0;

#[allow(dead_code)]
fn default_page_width() -> f64 {
    DEFAULT_PAGE_WIDTH
}

#[allow(dead_code)]
fn default_page_height() -> f64 {
    DEFAULT_PAGE_HEIGHT
}

/// One extracted page: 1-based page number, dimensions, and text spans.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageInput {
    /// 1-based page number as emitted by the extractor.
    pub page_number: usize,
    /// Page width in points (default: 612).
    #[cfg_attr(feature = "serde", serde(default = "default_page_width"))]
    pub width: f64,
    /// Page height in points (default: 792).
    #[cfg_attr(feature = "serde", serde(default = "default_page_height"))]
    pub height: f64,
    /// Positioned text spans in reading order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub text_items: Vec<Span>,
}

impl PageInput {
    /// Create a page with US Letter dimensions.
    pub fn new(page_number: usize, text_items: Vec<Span>) -> Self {
        Self {
            page_number,
            width: DEFAULT_PAGE_WIDTH,
            height: DEFAULT_PAGE_HEIGHT,
            text_items,
        }
    }
}

/// The extracted document handed to the classifier.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DocumentInput {
    /// Extracted pages in order.
    pub pages: Vec<PageInput>,
    /// Language label from the detection collaborator ("unknown" if none).
    #[cfg_attr(feature = "serde", serde(default = "default_language"))]
    pub language: String,
    /// Total page count reported by the extractor.
    #[cfg_attr(feature = "serde", serde(default))]
    pub total_pages: usize,
}

#[allow(dead_code)]
fn default_language() -> String {
    "unknown".to_string()
}

impl DocumentInput {
    /// Create a document from pages, deriving `total_pages`.
    pub fn new(pages: Vec<PageInput>, language: impl Into<String>) -> Self {
        let total_pages = pages.len();
        Self {
            pages,
            language: language.into(),
            total_pages,
        }
    }

    /// Parse a document from JSON, mapping malformed input to
    /// [`ScriptError::Validation`].
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self, ScriptError> {
        serde_json::from_str(json).map_err(|e| ScriptError::Validation(e.to_string()))
    }

    /// Check structural invariants of the input shape.
    pub fn validate(&self) -> Result<(), ScriptError> {
        for page in &self.pages {
            if page.width <= 0.0 || page.height <= 0.0 {
                return Err(ScriptError::Validation(format!(
                    "page {} has non-positive dimensions {}x{}",
                    page.page_number, page.width, page.height
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_page_uses_letter_dimensions() {
        let page = PageInput::new(1, Vec::new());
        assert_eq!(page.width, 612.0);
        assert_eq!(page.height, 792.0);
    }

    #[test]
    fn new_document_derives_total_pages() {
        let doc = DocumentInput::new(vec![PageInput::new(1, Vec::new())], "English");
        assert_eq!(doc.total_pages, 1);
        assert_eq!(doc.language, "English");
    }

    #[test]
    fn validate_rejects_bad_dimensions() {
        let mut doc = DocumentInput::new(vec![PageInput::new(1, Vec::new())], "English");
        doc.pages[0].width = 0.0;
        let err = doc.validate().unwrap_err();
        assert!(matches!(err, ScriptError::Validation(_)));
    }

    #[test]
    fn validate_accepts_empty_document() {
        let doc = DocumentInput::new(Vec::new(), "unknown");
        assert!(doc.validate().is_ok());
    }

    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;

        #[test]
        fn from_json_applies_defaults() {
            let json = r#"{
                "pages": [
                    {"page_number": 1, "text_items": [
                        {"text": "INT. HOUSE - DAY", "x": 72.0, "y": 200.0,
                         "width": 120.0, "height": 18.0}
                    ]}
                ]
            }"#;
            let doc = DocumentInput::from_json(json).unwrap();
            assert_eq!(doc.pages[0].width, 612.0);
            assert_eq!(doc.pages[0].height, 792.0);
            assert_eq!(doc.language, "unknown");
            assert!(doc.pages[0].text_items[0].font_size.is_none());
        }

        #[test]
        fn from_json_missing_pages_is_validation_error() {
            let err = DocumentInput::from_json(r#"{"language": "English"}"#).unwrap_err();
            assert!(matches!(err, ScriptError::Validation(_)));
        }

        #[test]
        fn from_json_non_map_is_validation_error() {
            let err = DocumentInput::from_json("[1, 2, 3]").unwrap_err();
            assert!(matches!(err, ScriptError::Validation(_)));
        }
    }
}
