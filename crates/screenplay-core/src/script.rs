//! The assembled screenplay document model.

use crate::element::{ElementKind, TextElement};

/// A page of the assembled script: a flat, ordered list of typed elements.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScriptPage {
    /// 0-based page index.
    pub page_number: usize,
    /// Page width in points.
    pub width: f64,
    /// Page height in points.
    pub height: f64,
    /// Elements in reading order.
    pub elements: Vec<TextElement>,
}

/// Summary counts over an assembled script.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScriptMetadata {
    /// Total number of elements across all pages.
    pub element_count: usize,
    /// Number of scene headings (including a synthetic opening).
    pub scene_count: usize,
    /// Number of dialogue lines.
    pub dialogue_count: usize,
    /// Elements left without a type after the final pass.
    pub unclassified_count: usize,
}

/// A fully classified and assembled screenplay.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Script {
    /// Title extracted from page 0, `None` when the title page has none.
    pub title: Option<String>,
    /// Pages with flat element lists, 0-based.
    pub pages: Vec<ScriptPage>,
    /// All element text in document order.
    pub full_text: String,
    /// Language label from the detection collaborator.
    pub language: String,
    /// Number of pages.
    pub total_pages: usize,
    /// Summary counts.
    pub metadata: ScriptMetadata,
}

impl Script {
    /// Iterate all elements in document order.
    pub fn elements(&self) -> impl Iterator<Item = &TextElement> {
        self.pages.iter().flat_map(|p| p.elements.iter())
    }

    /// Iterate elements of the given kind in document order.
    pub fn elements_of_kind(&self, kind: ElementKind) -> impl Iterator<Item = &TextElement> + '_ {
        self.elements().filter(move |e| e.kind == Some(kind))
    }
}
