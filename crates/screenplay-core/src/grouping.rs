//! Span enrichment and vertical grouping.
//!
//! Converts raw positioned [`Span`]s into [`TextElement`]s carrying
//! gap-to-neighbor and centering information, then chunks the elements of a
//! page into logical groups wherever the vertical gap reaches a threshold.

use crate::element::{Span, TextElement};

/// Options for span enrichment and grouping.
#[derive(Debug, Clone)]
pub struct GroupOptions {
    /// Vertical gap (in points) at which a new group starts (default: 10).
    pub gap_threshold: f64,
}

impl Default for GroupOptions {
    fn default() -> Self {
        Self {
            gap_threshold: 10.0,
        }
    }
}

/// A page of grouped text elements, ready for classification.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GroupedPage {
    /// 0-based page index.
    pub page_number: usize,
    /// Page width in points.
    pub width: f64,
    /// Page height in points.
    pub height: f64,
    /// Groups of vertically-contiguous elements, in reading order.
    pub groups: Vec<Vec<TextElement>>,
    /// The raw spans this page was built from.
    pub raw_spans: Vec<Span>,
}

/// Decide whether a span is horizontally centered on the page.
///
/// The span's horizontal midpoint is compared to the page midpoint with a
/// base tolerance of 20pt, widened to 35pt for spans starting in the
/// 280–320pt band (long centered lines). Two bands are excluded even when
/// close to center: the left-dialogue column (x in 170–190, deviation > 8)
/// and the character column (x in 240–270, deviation > 18).
pub fn is_centered(x: f64, width: f64, page_width: f64) -> bool {
    let midpoint = x + width / 2.0;
    let deviation = (midpoint - page_width / 2.0).abs();

    if (170.0..=190.0).contains(&x) && deviation > 8.0 {
        return false;
    }
    if (240.0..=270.0).contains(&x) && deviation > 18.0 {
        return false;
    }

    let tolerance = if (280.0..=320.0).contains(&x) {
        35.0
    } else {
        20.0
    };
    deviation <= tolerance
}

/// Map spans to [`TextElement`]s, computing vertical gaps and centering.
///
/// `gap_to_prev` of element *i* is `max(0, y_i − (y_{i−1} + height_{i−1}))`
/// and `gap_to_next` is the symmetric quantity; both are `None` at the page
/// edges. Input order is preserved.
pub fn build_text_elements(spans: &[Span], page_width: f64) -> Vec<TextElement> {
    spans
        .iter()
        .enumerate()
        .map(|(i, span)| {
            let gap_to_prev = (i > 0).then(|| {
                let prev = &spans[i - 1];
                (span.y - (prev.y + prev.height)).max(0.0)
            });
            let gap_to_next = (i + 1 < spans.len()).then(|| {
                let next = &spans[i + 1];
                (next.y - (span.y + span.height)).max(0.0)
            });
            TextElement {
                text: span.text.clone(),
                x: span.x,
                y: span.y,
                width: span.width,
                height: span.height,
                font_size: span.font_size,
                font_name: span.font.clone(),
                gap_to_prev,
                gap_to_next,
                centered: is_centered(span.x, span.width, page_width),
                kind: None,
                is_dual_dialogue: false,
            }
        })
        .collect()
}

/// Chunk elements into groups, starting a new group after any element whose
/// `gap_to_next` reaches `threshold`. Empty groups are dropped.
pub fn group_by_gap(elements: Vec<TextElement>, threshold: f64) -> Vec<Vec<TextElement>> {
    let mut groups = Vec::new();
    let mut current = Vec::new();

    for element in elements {
        let split_after = element.gap_to_next.is_some_and(|gap| gap >= threshold);
        current.push(element);
        if split_after {
            groups.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        groups.push(current);
    }
    groups
}

/// Build a [`GroupedPage`] from raw spans. Centering is judged against the
/// page's own width.
pub fn build_grouped_page(
    page_number: usize,
    width: f64,
    height: f64,
    spans: Vec<Span>,
    options: &GroupOptions,
) -> GroupedPage {
    let elements = build_text_elements(&spans, width);
    let groups = group_by_gap(elements, options.gap_threshold);
    GroupedPage {
        page_number,
        width,
        height,
        groups,
        raw_spans: spans,
    }
}
