//! Content stream interpretation: text operators → positioned spans.
//!
//! A deliberately small interpreter. Screenplay PDFs are monospaced,
//! single-column, Latin text, so the core consumes line-level spans rather
//! than individual characters: one [`Span`] is emitted per show-text
//! operator (`Tj`, `TJ`, `'`, `"`). Positioning tracks the text-line origin
//! through `Tm`/`Td`/`TD`/`T*`/`TL`; glyph advance is estimated at 0.6 em
//! (Courier, the screenplay standard). PDF bottom-left y is flipped to the
//! top-left origin the classifier expects.

use lopdf::content::Content;
use lopdf::{Dictionary, Document, Object, ObjectId};
use screenplay_core::Span;

use crate::error::ExtractError;

/// Average glyph advance as a fraction of the font size (Courier metrics).
const GLYPH_ADVANCE_EM: f64 = 0.6;

/// Font size assumed when no `Tf` has been seen.
const DEFAULT_FONT_SIZE: f64 = 12.0;

/// Text positioning state while walking a content stream.
#[derive(Debug, Clone)]
struct TextState {
    /// Text-line origin in page space.
    line_x: f64,
    line_y: f64,
    /// Horizontal cursor, advanced by each shown string on the line.
    cursor_x: f64,
    font_size: f64,
    leading: f64,
    font_resource: Option<String>,
}

impl Default for TextState {
    fn default() -> Self {
        Self {
            line_x: 0.0,
            line_y: 0.0,
            cursor_x: 0.0,
            font_size: DEFAULT_FONT_SIZE,
            leading: 0.0,
            font_resource: None,
        }
    }
}

impl TextState {
    fn begin_text(&mut self) {
        self.line_x = 0.0;
        self.line_y = 0.0;
        self.cursor_x = 0.0;
    }

    fn set_text_matrix(&mut self, e: f64, f: f64) {
        self.line_x = e;
        self.line_y = f;
        self.cursor_x = e;
    }

    fn move_text_position(&mut self, tx: f64, ty: f64) {
        self.line_x += tx;
        self.line_y += ty;
        self.cursor_x = self.line_x;
    }

    fn move_to_next_line(&mut self) {
        let leading = self.leading;
        self.move_text_position(0.0, -leading);
    }
}

/// Convert a lopdf numeric object (Integer or Real) to f64.
fn object_to_f64(obj: &Object) -> Option<f64> {
    match obj {
        Object::Integer(i) => Some(*i as f64),
        Object::Real(f) => Some(*f as f64),
        _ => None,
    }
}

fn get_f64(operands: &[Object], index: usize) -> Option<f64> {
    operands.get(index).and_then(object_to_f64)
}

/// Decode a PDF string's bytes as Latin-1.
fn decode_pdf_string(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}

/// Resolve a possibly-referenced dictionary.
fn resolve_dict<'a>(doc: &'a Document, obj: &'a Object) -> Option<&'a Dictionary> {
    match obj {
        Object::Dictionary(dict) => Some(dict),
        Object::Reference(id) => doc.get_object(*id).ok().and_then(|o| o.as_dict().ok()),
        _ => None,
    }
}

/// Find the font resource dictionary for a page, walking up the page tree
/// for inherited resources.
fn page_font_dict(doc: &Document, page_id: ObjectId) -> Option<&Dictionary> {
    let mut current = Some(page_id);
    while let Some(id) = current {
        let dict = doc.get_object(id).ok().and_then(|o| o.as_dict().ok())?;
        if let Ok(resources) = dict.get(b"Resources") {
            if let Some(fonts) = resolve_dict(doc, resources)
                .and_then(|res| res.get(b"Font").ok())
                .and_then(|f| resolve_dict(doc, f))
            {
                return Some(fonts);
            }
        }
        current = dict
            .get(b"Parent")
            .ok()
            .and_then(|o| o.as_reference().ok());
    }
    None
}

/// Resolve a `Tf` resource name (e.g. "F1") to its BaseFont name.
fn base_font_name(doc: &Document, fonts: Option<&Dictionary>, resource: &str) -> Option<String> {
    let font_obj = fonts?.get(resource.as_bytes()).ok()?;
    let font_dict = resolve_dict(doc, font_obj)?;
    match font_dict.get(b"BaseFont").ok()? {
        Object::Name(name) => Some(String::from_utf8_lossy(name).into_owned()),
        _ => None,
    }
}

/// Emit one span for a shown string, flipping y to the top-left origin.
fn emit_span(spans: &mut Vec<Span>, state: &mut TextState, text: String, page_height: f64) {
    if text.trim().is_empty() {
        // Pure-whitespace show operators position but carry no content.
        state.cursor_x += GLYPH_ADVANCE_EM * state.font_size * text.chars().count() as f64;
        return;
    }
    let width = GLYPH_ADVANCE_EM * state.font_size * text.chars().count() as f64;
    spans.push(Span {
        text,
        x: state.cursor_x,
        y: page_height - state.line_y - state.font_size,
        width,
        height: state.font_size,
        font_size: Some(state.font_size),
        font: state.font_resource.clone(),
    });
    state.cursor_x += width;
}

/// Concatenate the strings of a `TJ` array operand.
fn tj_array_text(operands: &[Object]) -> String {
    let mut text = String::new();
    if let Some(Object::Array(items)) = operands.first() {
        for item in items {
            if let Object::String(bytes, _) = item {
                text.push_str(&decode_pdf_string(bytes));
            }
        }
    }
    text
}

/// Interpret a page's content stream into positioned spans.
///
/// `page_height` is the page's MediaBox height, used to normalize y to a
/// top-left origin.
pub fn extract_page_spans(
    doc: &Document,
    page_id: ObjectId,
    page_height: f64,
) -> Result<Vec<Span>, ExtractError> {
    let data = doc.get_page_content(page_id)?;
    let content = Content::decode(&data)?;
    let fonts = page_font_dict(doc, page_id);

    let mut spans = Vec::new();
    let mut state = TextState::default();

    for op in &content.operations {
        match op.operator.as_str() {
            "BT" => state.begin_text(),
            "ET" => {}
            "Tf" => {
                if op.operands.len() >= 2 {
                    if let Some(Object::Name(name)) = op.operands.first() {
                        let resource = String::from_utf8_lossy(name).into_owned();
                        state.font_resource =
                            base_font_name(doc, fonts, &resource).or(Some(resource));
                    }
                    if let Some(size) = get_f64(&op.operands, 1) {
                        state.font_size = size;
                    }
                }
            }
            "Tm" => {
                if op.operands.len() >= 6 {
                    let e = get_f64(&op.operands, 4).unwrap_or(0.0);
                    let f = get_f64(&op.operands, 5).unwrap_or(0.0);
                    state.set_text_matrix(e, f);
                }
            }
            "Td" => {
                if op.operands.len() >= 2 {
                    let tx = get_f64(&op.operands, 0).unwrap_or(0.0);
                    let ty = get_f64(&op.operands, 1).unwrap_or(0.0);
                    state.move_text_position(tx, ty);
                }
            }
            "TD" => {
                if op.operands.len() >= 2 {
                    let tx = get_f64(&op.operands, 0).unwrap_or(0.0);
                    let ty = get_f64(&op.operands, 1).unwrap_or(0.0);
                    state.leading = -ty;
                    state.move_text_position(tx, ty);
                }
            }
            "TL" => {
                if let Some(leading) = get_f64(&op.operands, 0) {
                    state.leading = leading;
                }
            }
            "T*" => state.move_to_next_line(),
            "Tj" => {
                if let Some(Object::String(bytes, _)) = op.operands.first() {
                    let text = decode_pdf_string(bytes);
                    emit_span(&mut spans, &mut state, text, page_height);
                }
            }
            "TJ" => {
                let text = tj_array_text(&op.operands);
                emit_span(&mut spans, &mut state, text, page_height);
            }
            "'" => {
                state.move_to_next_line();
                if let Some(Object::String(bytes, _)) = op.operands.first() {
                    let text = decode_pdf_string(bytes);
                    emit_span(&mut spans, &mut state, text, page_height);
                }
            }
            "\"" => {
                // aw ac (string) ": spacing operands are irrelevant at span
                // granularity.
                state.move_to_next_line();
                if let Some(Object::String(bytes, _)) = op.operands.get(2) {
                    let text = decode_pdf_string(bytes);
                    emit_span(&mut spans, &mut state, text, page_height);
                }
            }
            _ => {}
        }
    }

    Ok(spans)
}
