//! Post-classification assembly into a [`Script`].
//!
//! Flattens classified groups into per-page element lists, extracts the
//! title from page 0, and synthesizes an OPENING scene heading when the
//! screenplay starts without one.

use crate::element::{ElementKind, TextElement};
use crate::grouping::GroupedPage;
use crate::script::{Script, ScriptMetadata, ScriptPage};

/// Assemble classified pages into a [`Script`].
pub fn assemble(pages: Vec<GroupedPage>, language: impl Into<String>) -> Script {
    let mut script_pages: Vec<ScriptPage> = pages
        .into_iter()
        .map(|page| ScriptPage {
            page_number: page.page_number,
            width: page.width,
            height: page.height,
            elements: page.groups.into_iter().flatten().collect(),
        })
        .collect();

    let title = extract_title(&script_pages);

    if needs_synthetic_opening(&script_pages) {
        let opening = synthetic_opening(&script_pages[1]);
        script_pages[1].elements.insert(0, opening);
    }

    let full_text = build_full_text(&script_pages);
    let metadata = build_metadata(&script_pages);
    let total_pages = script_pages.len();

    Script {
        title,
        pages: script_pages,
        full_text,
        language: language.into(),
        total_pages,
        metadata,
    }
}

/// Join the text of all page-0 title elements, `None` when there are none.
fn extract_title(pages: &[ScriptPage]) -> Option<String> {
    let page0 = pages.first()?;
    let lines: Vec<&str> = page0
        .elements
        .iter()
        .filter(|e| e.is_kind(ElementKind::Title))
        .map(|e| e.text.as_str())
        .collect();
    if lines.is_empty() {
        None
    } else {
        Some(lines.join("\n"))
    }
}

/// A synthetic OPENING heading is needed iff the document has at least two
/// pages, page 0 carries no scene heading, and page 1 does not itself start
/// with a scene heading or transition.
fn needs_synthetic_opening(pages: &[ScriptPage]) -> bool {
    if pages.len() < 2 {
        return false;
    }
    let page0_has_heading = pages[0]
        .elements
        .iter()
        .any(|e| e.is_kind(ElementKind::SceneHeading));
    if page0_has_heading {
        return false;
    }
    !pages[1].elements.first().is_some_and(|e| {
        e.is_kind(ElementKind::SceneHeading) || e.is_kind(ElementKind::Transition)
    })
}

fn synthetic_opening(page1: &ScriptPage) -> TextElement {
    let y = page1
        .elements
        .first()
        .map_or(144.0, |first| first.y - 24.0);
    TextElement {
        text: "OPENING".to_string(),
        x: 72.0,
        y,
        width: 70.0,
        height: 12.0,
        font_size: Some(12.0),
        font_name: None,
        gap_to_prev: None,
        gap_to_next: None,
        centered: false,
        kind: Some(ElementKind::SceneHeading),
        is_dual_dialogue: false,
    }
}

fn build_full_text(pages: &[ScriptPage]) -> String {
    pages
        .iter()
        .map(|page| {
            page.elements
                .iter()
                .map(|e| e.text.as_str())
                .collect::<Vec<_>>()
                .join("\n")
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn build_metadata(pages: &[ScriptPage]) -> ScriptMetadata {
    let mut metadata = ScriptMetadata::default();
    for el in pages.iter().flat_map(|p| p.elements.iter()) {
        metadata.element_count += 1;
        match el.kind {
            Some(ElementKind::SceneHeading) => metadata.scene_count += 1,
            Some(ElementKind::Dialogue) => metadata.dialogue_count += 1,
            None => metadata.unclassified_count += 1,
            _ => {}
        }
    }
    metadata
}
