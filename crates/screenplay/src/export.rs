//! Renderings of a [`Script`]: screenplay-layout text, JSON, a structural
//! outline, and a per-element debug listing.

use screenplay_core::{ElementKind, Script, ScriptError};

/// Column indents (in spaces) for the text rendering, approximating
/// standard screenplay layout at 10 cpi.
const CHARACTER_INDENT: usize = 22;
const PARENTHETICAL_INDENT: usize = 16;
const DIALOGUE_INDENT: usize = 10;
const TRANSITION_INDENT: usize = 45;

/// Render a script as screenplay-layout plain text.
///
/// Scene headings, subheadings, and action sit flush left; character cues,
/// parentheticals, and dialogue are indented to their columns; transitions
/// push right. Page and scene numbers are layout artifacts and are
/// omitted. Pages are separated by a form-feed-free blank line.
pub fn to_text(script: &Script) -> String {
    let mut out = String::new();

    for page in &script.pages {
        let mut page_lines: Vec<String> = Vec::new();
        for el in &page.elements {
            let text = el.text.trim();
            match el.kind {
                Some(ElementKind::PageNumber) | Some(ElementKind::SceneNumber) => continue,
                Some(ElementKind::SceneHeading)
                | Some(ElementKind::Subheading)
                | Some(ElementKind::Transition) => {
                    if !page_lines.is_empty() {
                        page_lines.push(String::new());
                    }
                    if el.kind == Some(ElementKind::Transition) {
                        page_lines.push(format!("{}{}", " ".repeat(TRANSITION_INDENT), text));
                    } else {
                        page_lines.push(text.to_string());
                    }
                }
                Some(ElementKind::Character) => {
                    if !page_lines.is_empty() {
                        page_lines.push(String::new());
                    }
                    page_lines.push(format!("{}{}", " ".repeat(CHARACTER_INDENT), text));
                }
                Some(ElementKind::Parenthetical) | Some(ElementKind::Continuation) => {
                    page_lines.push(format!("{}{}", " ".repeat(PARENTHETICAL_INDENT), text));
                }
                Some(ElementKind::Dialogue) => {
                    page_lines.push(format!("{}{}", " ".repeat(DIALOGUE_INDENT), text));
                }
                _ => page_lines.push(text.to_string()),
            }
        }
        if !page_lines.is_empty() {
            if !out.is_empty() {
                out.push_str("\n\n");
            }
            out.push_str(&page_lines.join("\n"));
        }
    }
    out.push('\n');
    out
}

/// Render a script as compact JSON.
pub fn to_json(script: &Script) -> Result<String, ScriptError> {
    serde_json::to_string(script).map_err(|e| ScriptError::Classification(e.to_string()))
}

/// Render a script as pretty-printed JSON.
pub fn to_json_pretty(script: &Script) -> Result<String, ScriptError> {
    serde_json::to_string_pretty(script).map_err(|e| ScriptError::Classification(e.to_string()))
}

/// Render a structural outline: pages and their typed elements, without
/// geometry. Useful for eyeballing classification results.
pub fn to_structured(script: &Script) -> Result<String, ScriptError> {
    let pages: Vec<serde_json::Value> = script
        .pages
        .iter()
        .map(|page| {
            serde_json::json!({
                "page_number": page.page_number,
                "elements": page
                    .elements
                    .iter()
                    .map(|el| {
                        serde_json::json!({
                            "type": el.kind.map(|k| k.as_str()),
                            "text": el.text,
                        })
                    })
                    .collect::<Vec<_>>(),
            })
        })
        .collect();
    let outline = serde_json::json!({
        "title": script.title,
        "language": script.language,
        "total_pages": script.total_pages,
        "pages": pages,
    });
    serde_json::to_string_pretty(&outline).map_err(|e| ScriptError::Classification(e.to_string()))
}

/// Render a per-element debug listing: one line per element with its kind
/// and position.
pub fn to_debug(script: &Script) -> String {
    let mut out = String::new();
    for page in &script.pages {
        out.push_str(&format!("--- page {} ---\n", page.page_number));
        for el in &page.elements {
            let kind = el.kind.map_or("unclassified", |k| k.as_str());
            let dual = if el.is_dual_dialogue { " dual" } else { "" };
            out.push_str(&format!(
                "[{kind}{dual}] {:?} @ ({:.1}, {:.1})\n",
                el.text, el.x, el.y
            ));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use screenplay_core::{ScriptMetadata, ScriptPage, TextElement};

    fn element(text: &str, kind: Option<ElementKind>) -> TextElement {
        TextElement {
            text: text.to_string(),
            x: 72.0,
            y: 100.0,
            width: 100.0,
            height: 12.0,
            font_size: Some(12.0),
            font_name: None,
            gap_to_prev: None,
            gap_to_next: None,
            centered: false,
            kind,
            is_dual_dialogue: false,
        }
    }

    fn sample_script() -> Script {
        Script {
            title: Some("MY FILM".to_string()),
            pages: vec![ScriptPage {
                page_number: 0,
                width: 612.0,
                height: 792.0,
                elements: vec![
                    element("INT. HOUSE - DAY", Some(ElementKind::SceneHeading)),
                    element("John enters.", Some(ElementKind::Action)),
                    element("JOHN", Some(ElementKind::Character)),
                    element("(beat)", Some(ElementKind::Parenthetical)),
                    element("Hello.", Some(ElementKind::Dialogue)),
                    element("12", Some(ElementKind::PageNumber)),
                    element("CUT TO:", Some(ElementKind::Transition)),
                ],
            }],
            full_text: String::new(),
            language: "English".to_string(),
            total_pages: 1,
            metadata: ScriptMetadata::default(),
        }
    }

    #[test]
    fn text_layout_indents_by_kind() {
        let text = to_text(&sample_script());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "INT. HOUSE - DAY");
        assert_eq!(lines[1], "John enters.");
        assert_eq!(lines[2], ""); // blank before character
        assert_eq!(lines[3], format!("{}JOHN", " ".repeat(22)));
        assert_eq!(lines[4], format!("{}(beat)", " ".repeat(16)));
        assert_eq!(lines[5], format!("{}Hello.", " ".repeat(10)));
        assert_eq!(lines[6], ""); // blank before transition
        assert_eq!(lines[7], format!("{}CUT TO:", " ".repeat(45)));
        // Page number omitted
        assert!(!text.contains("12"));
    }

    #[test]
    fn json_round_trips() {
        let script = sample_script();
        let json = to_json(&script).unwrap();
        let restored: Script = serde_json::from_str(&json).unwrap();
        assert_eq!(script, restored);
    }

    #[test]
    fn json_pretty_is_multiline() {
        let json = to_json_pretty(&sample_script()).unwrap();
        assert!(json.contains('\n'));
        assert!(json.contains("\"scene_heading\""));
    }

    #[test]
    fn structured_outline_has_types_and_text() {
        let out = to_structured(&sample_script()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["title"], "MY FILM");
        assert_eq!(value["pages"][0]["elements"][0]["type"], "scene_heading");
        assert_eq!(value["pages"][0]["elements"][0]["text"], "INT. HOUSE - DAY");
    }

    #[test]
    fn debug_listing_shows_kind_and_position() {
        let out = to_debug(&sample_script());
        assert!(out.contains("--- page 0 ---"));
        assert!(out.contains("[scene_heading] \"INT. HOUSE - DAY\" @ (72.0, 100.0)"));
        assert!(out.contains("[page_number] \"12\""));
    }
}
