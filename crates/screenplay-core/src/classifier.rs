//! The screenplay classifier.
//!
//! A multi-pass, position- and pattern-driven state machine:
//!
//! 1. **Pre-pass** — scan the whole document for the first element whose
//!    text is a scene heading or transition; its position is the screenplay
//!    boundary separating title-page content from the body.
//! 2. **Main pass** — walk pages/groups/elements in order, applying the
//!    per-kind predicates in a fixed priority sequence and updating the
//!    [`Context`] (column discovery, title-page flags) on each hit.
//! 3. **Second pass** — per-group retroactive transformations: title
//!    recovery on page 0, dual-dialogue detection in the body, and
//!    subheading recovery.
//! 4. **Final pass** — any still-unclassified element at or after the
//!    boundary becomes action, provided a scene heading was found somewhere
//!    in the document.

use crate::context::{Boundary, Context};
use crate::element::{ElementKind, TextElement};
use crate::error::ScriptError;
use crate::grouping::{self, GroupOptions, GroupedPage};
use crate::input::DocumentInput;
use crate::patterns;
use crate::predicates;

/// Options controlling classification.
#[derive(Debug, Clone, Default)]
pub struct ClassifyOptions {
    /// Span grouping options.
    pub grouping: GroupOptions,
}

/// Classify an extracted document into grouped, typed pages.
///
/// Deterministic: the same input always yields the same classifications.
/// Empty documents and empty pages classify to empty output without error.
pub fn classify_document(
    input: &DocumentInput,
    options: &ClassifyOptions,
) -> Result<Vec<GroupedPage>, ScriptError> {
    input.validate()?;

    let mut pages: Vec<GroupedPage> = input
        .pages
        .iter()
        .enumerate()
        .map(|(idx, page)| {
            grouping::build_grouped_page(
                idx,
                page.width,
                page.height,
                page.text_items.clone(),
                &options.grouping,
            )
        })
        .collect();

    let boundary = find_boundary(&pages);
    let mut ctx = Context::with_boundary(boundary);

    main_pass(&mut pages, &mut ctx);
    second_pass(&mut pages, &ctx);
    final_pass(&mut pages, &ctx);

    Ok(pages)
}

/// Locate the screenplay boundary: the document-order position of the first
/// element whose text is a scene heading or transition. `None` when the
/// document has no body.
pub fn find_boundary(pages: &[GroupedPage]) -> Option<Boundary> {
    for (page_idx, page) in pages.iter().enumerate() {
        for (group_idx, group) in page.groups.iter().enumerate() {
            for (el_idx, el) in group.iter().enumerate() {
                if patterns::is_scene_heading(&el.text) || patterns::is_transition(&el.text) {
                    return Some(Boundary::new(page_idx, group_idx, el_idx));
                }
            }
        }
    }
    None
}

fn main_pass(pages: &mut [GroupedPage], ctx: &mut Context) {
    for (page_idx, page) in pages.iter_mut().enumerate() {
        ctx.begin_page(page_idx, page.width, page.height);
        for (group_idx, group) in page.groups.iter_mut().enumerate() {
            for el_idx in 0..group.len() {
                let position = Boundary::new(page_idx, group_idx, el_idx);
                let started = ctx.screenplay_started(position);
                if let Some(kind) = classify_element(group, el_idx, ctx, started) {
                    group[el_idx].kind = Some(kind);
                    update_context(ctx, &group[el_idx], kind);
                }
            }
        }
    }
}

/// Apply the per-kind predicates in priority order; first match wins.
fn classify_element(
    group: &[TextElement],
    index: usize,
    ctx: &Context,
    started: bool,
) -> Option<ElementKind> {
    let el = &group[index];

    if predicates::is_title(el, index, group, ctx) {
        Some(ElementKind::Title)
    } else if predicates::is_author_marker(el, ctx) {
        Some(ElementKind::AuthorMarker)
    } else if predicates::is_author(el, index, group, ctx) {
        Some(ElementKind::Author)
    } else if predicates::is_source_credit(el, ctx) {
        Some(ElementKind::SourceCredit)
    } else if predicates::is_source_marker(el, ctx) {
        Some(ElementKind::SourceMarker)
    } else if predicates::is_source_names(el, ctx) {
        Some(ElementKind::SourceNames)
    } else if predicates::is_page_number(el) {
        Some(ElementKind::PageNumber)
    } else if predicates::is_notes(el, ctx) {
        Some(ElementKind::Notes)
    } else if predicates::is_scene_heading(el) {
        Some(ElementKind::SceneHeading)
    } else if predicates::is_character(el, index, group, ctx, started) {
        Some(ElementKind::Character)
    } else if predicates::is_action(el, ctx, started) {
        Some(ElementKind::Action)
    } else if predicates::is_parenthetical(el, index, group) {
        Some(ElementKind::Parenthetical)
    } else if predicates::is_dialogue(el, ctx, started) {
        Some(ElementKind::Dialogue)
    } else if predicates::is_continuation(el) {
        Some(ElementKind::Continuation)
    } else if predicates::is_subheading(el, ctx, started) {
        Some(ElementKind::Subheading)
    } else if predicates::is_transition(el, index) {
        Some(ElementKind::Transition)
    } else if predicates::is_scene_number(el) {
        Some(ElementKind::SceneNumber)
    } else {
        None
    }
}

fn update_context(ctx: &mut Context, el: &TextElement, kind: ElementKind) {
    match kind {
        ElementKind::AuthorMarker => ctx.recent_author_marker = true,
        ElementKind::Author => ctx.recent_author_marker = false,
        ElementKind::SceneHeading => ctx.note_scene_heading(el.x, el.y),
        ElementKind::Character => ctx.note_character(el.x),
        ElementKind::Dialogue => ctx.note_dialogue(el.x),
        _ => {}
    }
}

fn second_pass(pages: &mut [GroupedPage], ctx: &Context) {
    for (page_idx, page) in pages.iter_mut().enumerate() {
        for (group_idx, group) in page.groups.iter_mut().enumerate() {
            if page_idx == 0 {
                recover_titles(group);
            }
            if ctx.screenplay_started(Boundary::new(page_idx, group_idx, 0)) {
                detect_dual_dialogue(group);
            }
            recover_subheadings(group, ctx);
        }
    }
}

/// Retroactive title recovery on page 0.
///
/// A centered all-caps or title-case run above the first author marker is
/// the title, even when the main pass saw it as a character name or left it
/// unclassified. A "screenplay" line that was taken for a title is really
/// an author marker.
fn recover_titles(group: &mut [TextElement]) {
    let is_marker = |e: &TextElement| {
        e.is_kind(ElementKind::AuthorMarker)
            || (e.is_kind(ElementKind::Title) && e.trimmed().to_lowercase() == "screenplay")
    };
    let first_marker = group.iter().position(is_marker);

    if let Some(first) = first_marker {
        for el in &mut group[..first] {
            let trimmed = el.trimmed();
            let eligible = matches!(
                el.kind,
                None | Some(ElementKind::Character) | Some(ElementKind::Title)
            );
            if el.centered
                && eligible
                && (patterns::is_all_caps(trimmed) || patterns::is_title_case(trimmed))
                && trimmed.to_lowercase() != "screenplay"
            {
                el.kind = Some(ElementKind::Title);
            }
        }
    }

    for el in group.iter_mut() {
        if el.is_kind(ElementKind::Title) && el.trimmed().to_lowercase() == "screenplay" {
            el.kind = Some(ElementKind::AuthorMarker);
        }
    }
}

/// Detect dual dialogue within a group.
///
/// Two character-shaped, unclassified elements sitting in the left
/// (150–220) and right (350–450) cue bands mark a dual block. The cues
/// become characters and the off-column lines under them become dialogue.
fn detect_dual_dialogue(group: &mut [TextElement]) {
    let candidates = |lo: f64, hi: f64, group: &[TextElement]| -> Vec<usize> {
        group
            .iter()
            .enumerate()
            .filter(|(_, e)| {
                e.is_unclassified()
                    && patterns::is_character(&e.text)
                    && (lo..=hi).contains(&e.x)
            })
            .map(|(i, _)| i)
            .collect()
    };

    let left = candidates(150.0, 220.0, group);
    let right = candidates(350.0, 450.0, group);
    if left.is_empty() || right.is_empty() {
        return;
    }

    for &i in left.iter().chain(right.iter()) {
        group[i].kind = Some(ElementKind::Character);
        group[i].is_dual_dialogue = true;
    }

    for el in group.iter_mut() {
        let left_column = (80.0..=140.0).contains(&el.x)
            && matches!(el.kind, None | Some(ElementKind::Action));
        let right_column = el.is_unclassified() && (300.0..=370.0).contains(&el.x);
        if left_column || right_column {
            el.kind = Some(ElementKind::Dialogue);
            el.is_dual_dialogue = true;
        }
    }
}

/// Reclassify leftover subheading-shaped text at the scene-heading column
/// (within 5pt) or hard left margin (x ≤ 110).
fn recover_subheadings(group: &mut [TextElement], ctx: &Context) {
    for el in group.iter_mut() {
        let at_heading_column = ctx
            .scene_heading_x
            .is_some_and(|sh_x| (el.x - sh_x).abs() <= 5.0);
        if el.is_unclassified()
            && patterns::is_subheading(&el.text)
            && (at_heading_column || el.x <= 110.0)
        {
            el.kind = Some(ElementKind::Subheading);
        }
    }
}

/// Leftover elements in the screenplay body become action, but only once
/// the document has proven to be a screenplay by containing a scene
/// heading. Title-page leftovers before the boundary keep their unset type.
fn final_pass(pages: &mut [GroupedPage], ctx: &Context) {
    if !ctx.scene_heading_found {
        return;
    }
    for (page_idx, page) in pages.iter_mut().enumerate() {
        for (group_idx, group) in page.groups.iter_mut().enumerate() {
            for (el_idx, el) in group.iter_mut().enumerate() {
                if el.is_unclassified()
                    && ctx.screenplay_started(Boundary::new(page_idx, group_idx, el_idx))
                {
                    el.kind = Some(ElementKind::Action);
                }
            }
        }
    }
}
