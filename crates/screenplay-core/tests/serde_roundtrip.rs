//! Serde serialization/deserialization round-trip tests.
//!
//! These tests verify that all public data types can be serialized to JSON
//! and deserialized back, producing equal values.

#![cfg(feature = "serde")]

use screenplay_core::*;

/// Helper: serialize to JSON string, deserialize back, assert equality.
fn roundtrip<T>(value: &T)
where
    T: serde::Serialize + serde::de::DeserializeOwned + PartialEq + std::fmt::Debug,
{
    let json = serde_json::to_string(value).expect("serialize failed");
    let restored: T = serde_json::from_str(&json).expect("deserialize failed");
    assert_eq!(*value, restored, "round-trip mismatch for JSON: {json}");
}

fn sample_element(kind: Option<ElementKind>) -> TextElement {
    TextElement {
        text: "INT. KITCHEN - DAY".to_string(),
        x: 72.0,
        y: 200.0,
        width: 130.0,
        height: 18.0,
        font_size: Some(12.0),
        font_name: Some("Courier".to_string()),
        gap_to_prev: Some(12.0),
        gap_to_next: None,
        centered: false,
        kind,
        is_dual_dialogue: false,
    }
}

// --- Element types ---

#[test]
fn test_serde_element_kind_all_variants() {
    for kind in [
        ElementKind::Title,
        ElementKind::AuthorMarker,
        ElementKind::Author,
        ElementKind::SourceMarker,
        ElementKind::SourceCredit,
        ElementKind::SourceNames,
        ElementKind::Notes,
        ElementKind::PageNumber,
        ElementKind::SceneNumber,
        ElementKind::SceneHeading,
        ElementKind::Subheading,
        ElementKind::Character,
        ElementKind::Parenthetical,
        ElementKind::Dialogue,
        ElementKind::Action,
        ElementKind::Transition,
        ElementKind::Continuation,
    ] {
        roundtrip(&kind);
    }
}

#[test]
fn test_element_kind_serializes_as_snake_case_tag() {
    let json = serde_json::to_string(&ElementKind::SceneHeading).unwrap();
    assert_eq!(json, "\"scene_heading\"");
    assert_eq!(
        serde_json::to_string(&ElementKind::AuthorMarker).unwrap(),
        "\"author_marker\""
    );
}

#[test]
fn test_serde_span() {
    roundtrip(&Span::new("Hello", 72.0, 100.0, 36.0, 18.0));
    let mut with_font = Span::new("Hello", 72.0, 100.0, 36.0, 18.0);
    with_font.font_size = Some(12.0);
    with_font.font = Some("Courier".to_string());
    roundtrip(&with_font);
}

#[test]
fn test_serde_text_element() {
    roundtrip(&sample_element(None));
    roundtrip(&sample_element(Some(ElementKind::SceneHeading)));
}

// --- Context types ---

#[test]
fn test_serde_boundary() {
    roundtrip(&Boundary::new(0, 2, 5));
}

// --- Grouped page ---

#[test]
fn test_serde_grouped_page() {
    let page = GroupedPage {
        page_number: 0,
        width: 612.0,
        height: 792.0,
        groups: vec![vec![sample_element(Some(ElementKind::SceneHeading))]],
        raw_spans: vec![Span::new("INT. KITCHEN - DAY", 72.0, 200.0, 130.0, 18.0)],
    };
    roundtrip(&page);
}

// --- Input types ---

#[test]
fn test_serde_page_input() {
    roundtrip(&PageInput::new(
        1,
        vec![Span::new("Hello", 72.0, 100.0, 36.0, 18.0)],
    ));
}

#[test]
fn test_serde_document_input() {
    roundtrip(&DocumentInput::new(
        vec![PageInput::new(1, Vec::new()), PageInput::new(2, Vec::new())],
        "English",
    ));
}

// --- Script types ---

#[test]
fn test_serde_script_metadata() {
    roundtrip(&ScriptMetadata {
        element_count: 10,
        scene_count: 2,
        dialogue_count: 4,
        unclassified_count: 0,
    });
}

#[test]
fn test_serde_script_page() {
    roundtrip(&ScriptPage {
        page_number: 0,
        width: 612.0,
        height: 792.0,
        elements: vec![sample_element(Some(ElementKind::Action))],
    });
}

#[test]
fn test_serde_full_script() {
    let input = DocumentInput::new(
        vec![PageInput::new(
            1,
            vec![
                Span::new("INT. HOUSE - DAY", 72.0, 200.0, 115.0, 18.0),
                Span::new("John enters.", 72.0, 230.0, 86.0, 18.0),
                Span::new("JOHN", 240.0, 270.0, 28.0, 18.0),
                Span::new("Hello, world.", 150.0, 290.0, 93.0, 18.0),
            ],
        )],
        "English",
    );
    let pages = classify_document(&input, &ClassifyOptions::default()).unwrap();
    let script = assemble(pages, "English");
    roundtrip(&script);
}

// --- Classified output survives the input shape ---

#[test]
fn test_classifier_idempotent_over_roundtripped_input() {
    // Classify, rebuild an equivalent input from the classified output's
    // raw geometry, classify again: classifications must match.
    let spans = vec![
        Span::new("INT. HOUSE - DAY", 72.0, 200.0, 115.0, 18.0),
        Span::new("John enters.", 72.0, 230.0, 86.0, 18.0),
        Span::new("JOHN", 240.0, 270.0, 28.0, 18.0),
        Span::new("Hello, world.", 150.0, 290.0, 93.0, 18.0),
    ];
    let input = DocumentInput::new(vec![PageInput::new(1, spans)], "English");
    let first = classify_document(&input, &ClassifyOptions::default()).unwrap();

    let rebuilt_pages: Vec<PageInput> = first
        .iter()
        .map(|page| PageInput {
            page_number: page.page_number + 1,
            width: page.width,
            height: page.height,
            text_items: page.raw_spans.clone(),
        })
        .collect();
    let rebuilt = DocumentInput::new(rebuilt_pages, "English");
    let second = classify_document(&rebuilt, &ClassifyOptions::default()).unwrap();

    assert_eq!(first, second);
}
