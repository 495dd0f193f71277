//! Per-kind classifier predicates.
//!
//! Each predicate combines the pure text patterns with geometric checks
//! against the [`Context`]: discovered column x-positions, the current page
//! index, and whether the screenplay body has begun at the position being
//! classified (`started`).

use crate::context::Context;
use crate::element::{ElementKind, TextElement};
use crate::patterns;

/// Title line on the title page: centered, short, title-shaped, and not one
/// of the marker phrases that share the page.
pub fn is_title(el: &TextElement, _index: usize, group: &[TextElement], ctx: &Context) -> bool {
    let trimmed = el.trimmed();
    ctx.page_number == 0
        && el.centered
        && trimmed.len() <= 50
        && group.len() <= 3
        && patterns::is_title_like(trimmed)
        && !patterns::is_author_marker(trimmed)
        && !patterns::is_source_marker(trimmed)
        && !patterns::is_source_names(trimmed)
        && !ctx.recent_author_marker
}

/// Author-marker phrase ("By", "Screenplay by", …) on the title page.
pub fn is_author_marker(el: &TextElement, ctx: &Context) -> bool {
    ctx.page_number == 0 && el.centered && patterns::is_author_marker(&el.text)
}

/// Author name on the title page: directly after a literal marker phrase,
/// or name-shaped while an author marker is pending.
pub fn is_author(el: &TextElement, index: usize, group: &[TextElement], ctx: &Context) -> bool {
    if ctx.page_number != 0 || !el.centered {
        return false;
    }
    let after_literal_marker = index > 0 && patterns::is_author_marker(&group[index - 1].text);
    after_literal_marker
        || (ctx.recent_author_marker && patterns::looks_like_person_name(&el.text))
}

/// "Story by …" style credit on the title page.
pub fn is_source_credit(el: &TextElement, ctx: &Context) -> bool {
    ctx.page_number == 0 && el.centered && patterns::is_source_credit(&el.text)
}

/// "Based on …" attribution on the title page.
pub fn is_source_marker(el: &TextElement, ctx: &Context) -> bool {
    ctx.page_number == 0 && el.centered && patterns::is_source_marker(&el.text)
}

/// Draft/version/date line on the title page.
pub fn is_source_names(el: &TextElement, ctx: &Context) -> bool {
    ctx.page_number == 0 && el.centered && patterns::is_source_names(&el.text)
}

/// Studio/copyright note on the title page, or anything in the header band.
pub fn is_notes(el: &TextElement, ctx: &Context) -> bool {
    (ctx.page_number == 0 && patterns::is_notes(&el.text)) || el.y < 40.0
}

/// Bare page number in the top or bottom margin band.
pub fn is_page_number(el: &TextElement) -> bool {
    patterns::is_page_number(&el.text) && (el.y < 100.0 || el.y > 700.0)
}

/// Scene number in the left or right margin, outside the header/footer bands.
pub fn is_scene_number(el: &TextElement) -> bool {
    patterns::is_scene_number(&el.text)
        && (el.x < 100.0 || el.x >= 500.0)
        && (100.0..=700.0).contains(&el.y)
}

/// Scene heading, by text pattern alone (highest-reliability signal).
pub fn is_scene_heading(el: &TextElement) -> bool {
    patterns::is_scene_heading(&el.text)
}

/// Character name: character-column position, character-shaped text, and a
/// group structure consistent with a character cue.
pub fn is_character(
    el: &TextElement,
    index: usize,
    group: &[TextElement],
    ctx: &Context,
    started: bool,
) -> bool {
    if !ctx.character_position(el.x)
        || !patterns::is_character(&el.text)
        || !(started || ctx.page_number <= 2)
    {
        return false;
    }
    if index > 0 {
        // Mid-group characters must be visually separated from the line above.
        let prev = &group[index - 1];
        el.gap_to_prev.is_some_and(|g| g > 15.0) || (el.x - prev.x).abs() > 50.0
    } else {
        // A leading character cue heads a tight block (its dialogue), or
        // stands alone.
        group.len() == 1
            || group[1..]
                .iter()
                .all(|e| e.gap_to_prev.is_none_or(|g| g <= 3.0))
    }
}

/// True if some earlier element in the group is, or looks like, a character.
fn preceded_by_character(index: usize, group: &[TextElement]) -> bool {
    group[..index].iter().any(|e| {
        e.is_kind(ElementKind::Character)
            || (patterns::is_character(&e.text) && (180.0..=400.0).contains(&e.x))
    })
}

/// Parenthetical direction inside a dialogue block.
pub fn is_parenthetical(el: &TextElement, index: usize, group: &[TextElement]) -> bool {
    patterns::is_parenthetical(&el.text)
        && (180.0..=280.0).contains(&el.x)
        && preceded_by_character(index, group)
}

/// Dialogue line in the dialogue column.
pub fn is_dialogue(el: &TextElement, ctx: &Context, started: bool) -> bool {
    (started || ctx.page_number <= 2)
        && ctx.character_x.is_some()
        && ctx.dialogue_position(el.x)
}

/// Continuation marker, by text pattern alone.
pub fn is_continuation(el: &TextElement) -> bool {
    patterns::is_continuation(&el.text)
}

/// Subheading at the scene-heading column or left margin.
pub fn is_subheading(el: &TextElement, ctx: &Context, started: bool) -> bool {
    started && patterns::is_subheading(&el.text) && ctx.action_position(el.x)
}

/// Action line at the scene-heading column (or left margin before one is
/// established) that is not a heading or transition by text.
pub fn is_action(el: &TextElement, ctx: &Context, started: bool) -> bool {
    started
        && ctx.action_position(el.x)
        && !patterns::is_transition(&el.text)
        && !patterns::is_scene_heading(&el.text)
}

/// Transition at the head of a group, hugging either margin.
pub fn is_transition(el: &TextElement, index: usize) -> bool {
    index == 0 && patterns::is_transition(&el.text) && (el.x <= 180.0 || el.x >= 400.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn el(text: &str, x: f64, y: f64) -> TextElement {
        TextElement {
            text: text.to_string(),
            x,
            y,
            width: 100.0,
            height: 12.0,
            font_size: Some(12.0),
            font_name: None,
            gap_to_prev: None,
            gap_to_next: None,
            centered: false,
            kind: None,
            is_dual_dialogue: false,
        }
    }

    fn centered_el(text: &str, x: f64, y: f64) -> TextElement {
        TextElement {
            centered: true,
            ..el(text, x, y)
        }
    }

    fn page0_ctx() -> Context {
        let mut ctx = Context::default();
        ctx.begin_page(0, 612.0, 792.0);
        ctx
    }

    // --- title page predicates ---

    #[test]
    fn title_requires_centering_and_page_zero() {
        let ctx = page0_ctx();
        let e = centered_el("BATMAN BEGINS", 250.0, 120.0);
        let group = vec![e.clone()];
        assert!(is_title(&e, 0, &group, &ctx));

        let flush = el("BATMAN BEGINS", 72.0, 120.0);
        assert!(!is_title(&flush, 0, &group, &ctx));

        let mut ctx1 = ctx.clone();
        ctx1.begin_page(1, 612.0, 792.0);
        assert!(!is_title(&e, 0, &group, &ctx1));
    }

    #[test]
    fn title_blocked_by_pending_author_marker() {
        let mut ctx = page0_ctx();
        ctx.recent_author_marker = true;
        let e = centered_el("DAVID GOYER", 250.0, 200.0);
        let group = vec![e.clone()];
        assert!(!is_title(&e, 0, &group, &ctx));
    }

    #[test]
    fn title_rejects_marker_phrases_and_big_groups() {
        let ctx = page0_ctx();
        let by = centered_el("By", 300.0, 150.0);
        let group = vec![by.clone()];
        assert!(!is_title(&by, 0, &group, &ctx));

        let e = centered_el("BATMAN BEGINS", 250.0, 120.0);
        let big: Vec<TextElement> = (0..4).map(|i| el("x", 72.0, 100.0 + i as f64)).collect();
        assert!(!is_title(&e, 0, &big, &ctx));
    }

    #[test]
    fn author_after_literal_marker() {
        let ctx = page0_ctx();
        let marker = centered_el("By", 300.0, 150.0);
        let name = centered_el("DAVID GOYER", 260.0, 170.0);
        let group = vec![marker, name.clone()];
        assert!(is_author(&name, 1, &group, &ctx));
    }

    #[test]
    fn author_with_pending_marker_flag() {
        let mut ctx = page0_ctx();
        ctx.recent_author_marker = true;
        let name = centered_el("DAVID GOYER", 260.0, 170.0);
        let group = vec![name.clone()];
        assert!(is_author(&name, 0, &group, &ctx));

        ctx.recent_author_marker = false;
        assert!(!is_author(&name, 0, &group, &ctx));
    }

    #[test]
    fn notes_on_page_zero_or_header_band() {
        let ctx = page0_ctx();
        assert!(is_notes(&el("© 2024 Studio", 72.0, 500.0), &ctx));
        assert!(is_notes(&el("anything", 72.0, 20.0), &ctx));

        let mut ctx5 = ctx.clone();
        ctx5.begin_page(5, 612.0, 792.0);
        assert!(!is_notes(&el("© 2024 Studio", 72.0, 500.0), &ctx5));
        assert!(is_notes(&el("header", 72.0, 10.0), &ctx5));
    }

    // --- margin numbers ---

    #[test]
    fn page_number_needs_margin_band() {
        assert!(is_page_number(&el("12", 300.0, 50.0)));
        assert!(is_page_number(&el("12", 300.0, 750.0)));
        assert!(!is_page_number(&el("12", 300.0, 400.0)));
        assert!(!is_page_number(&el("hello", 300.0, 50.0)));
    }

    #[test]
    fn scene_number_needs_side_margin() {
        assert!(is_scene_number(&el("12A", 60.0, 300.0)));
        assert!(is_scene_number(&el("12", 540.0, 300.0)));
        assert!(!is_scene_number(&el("12", 300.0, 300.0)));
        assert!(!is_scene_number(&el("12", 60.0, 50.0)));
    }

    // --- character ---

    #[test]
    fn character_alone_in_group() {
        let ctx = page0_ctx();
        let c = el("JOHN", 240.0, 200.0);
        let group = vec![c.clone()];
        assert!(is_character(&c, 0, &group, &ctx, true));
    }

    #[test]
    fn character_leading_a_tight_block() {
        let ctx = page0_ctx();
        let c = el("JOHN", 240.0, 200.0);
        let mut d = el("Hello there.", 150.0, 214.0);
        d.gap_to_prev = Some(2.0);
        let group = vec![c.clone(), d];
        assert!(is_character(&c, 0, &group, &ctx, true));
    }

    #[test]
    fn character_rejected_when_block_is_loose() {
        let ctx = page0_ctx();
        let c = el("JOHN", 240.0, 200.0);
        let mut d = el("Hello there.", 150.0, 220.0);
        d.gap_to_prev = Some(8.0);
        let group = vec![c.clone(), d];
        assert!(!is_character(&c, 0, &group, &ctx, true));
    }

    #[test]
    fn mid_group_character_needs_separation() {
        let ctx = page0_ctx();
        let a = el("Some action.", 240.0, 180.0);
        let mut c = el("JOHN", 240.0, 200.0);
        c.gap_to_prev = Some(8.0);
        let group = vec![a, c.clone()];
        // same x, small gap → rejected
        assert!(!is_character(&c, 1, &group, &ctx, true));

        let mut far = c.clone();
        far.gap_to_prev = Some(20.0);
        let group2 = vec![group[0].clone(), far.clone()];
        assert!(is_character(&far, 1, &group2, &ctx, true));

        let mut shifted = c.clone();
        shifted.x = 340.0; // |340 - 240| > 50
        let group3 = vec![group[0].clone(), shifted.clone()];
        assert!(is_character(&shifted, 1, &group3, &ctx, true));
    }

    #[test]
    fn character_respects_established_column() {
        let mut ctx = page0_ctx();
        ctx.note_character(240.0);
        let c = el("JOHN", 300.0, 200.0);
        let group = vec![c.clone()];
        assert!(!is_character(&c, 0, &group, &ctx, true));
    }

    #[test]
    fn character_before_boundary_only_on_early_pages() {
        let mut ctx = Context::default();
        ctx.begin_page(3, 612.0, 792.0);
        let c = el("JOHN", 240.0, 200.0);
        let group = vec![c.clone()];
        assert!(!is_character(&c, 0, &group, &ctx, false));
        assert!(is_character(&c, 0, &group, &ctx, true));
    }

    // --- parenthetical ---

    #[test]
    fn parenthetical_after_character() {
        let mut c = el("JOHN", 240.0, 200.0);
        c.kind = Some(ElementKind::Character);
        let p = el("(beat)", 220.0, 214.0);
        let group = vec![c, p.clone()];
        assert!(is_parenthetical(&p, 1, &group));
    }

    #[test]
    fn parenthetical_after_character_shaped_text() {
        // Unclassified but character-shaped, in the geometric fallback band
        let c = el("JOHN", 240.0, 200.0);
        let p = el("(beat)", 220.0, 214.0);
        let group = vec![c, p.clone()];
        assert!(is_parenthetical(&p, 1, &group));
    }

    #[test]
    fn parenthetical_needs_column_and_predecessor() {
        let c = el("JOHN", 240.0, 200.0);
        let wide = el("(beat)", 100.0, 214.0);
        let group = vec![c.clone(), wide.clone()];
        assert!(!is_parenthetical(&wide, 1, &group));

        let p = el("(beat)", 220.0, 200.0);
        let alone = vec![p.clone()];
        assert!(!is_parenthetical(&p, 0, &alone));
    }

    // --- dialogue ---

    #[test]
    fn dialogue_needs_established_columns() {
        let mut ctx = page0_ctx();
        let d = el("Hello, world.", 150.0, 290.0);
        assert!(!is_dialogue(&d, &ctx, true));

        ctx.note_scene_heading(72.0, 200.0);
        ctx.note_character(240.0);
        assert!(is_dialogue(&d, &ctx, true));
        assert!(!is_dialogue(&el("Nope", 72.0, 290.0), &ctx, true));
    }

    #[test]
    fn dialogue_before_boundary_only_on_early_pages() {
        let mut ctx = Context::default();
        ctx.begin_page(4, 612.0, 792.0);
        ctx.note_scene_heading(72.0, 200.0);
        ctx.note_character(240.0);
        let d = el("Hello.", 150.0, 290.0);
        assert!(!is_dialogue(&d, &ctx, false));
        assert!(is_dialogue(&d, &ctx, true));
    }

    // --- subheading / action / transition ---

    #[test]
    fn subheading_at_heading_column() {
        let mut ctx = page0_ctx();
        ctx.note_scene_heading(72.0, 200.0);
        assert!(is_subheading(&el("LATER", 72.0, 300.0), &ctx, true));
        assert!(!is_subheading(&el("LATER", 72.0, 300.0), &ctx, false));
        assert!(!is_subheading(&el("LATER", 240.0, 300.0), &ctx, true));
    }

    #[test]
    fn action_excludes_headings_and_transitions() {
        let ctx = page0_ctx();
        assert!(is_action(&el("John enters.", 72.0, 230.0), &ctx, true));
        assert!(!is_action(&el("John enters.", 72.0, 230.0), &ctx, false));
        assert!(!is_action(&el("INT. HOUSE - DAY", 72.0, 230.0), &ctx, true));
        assert!(!is_action(&el("CUT TO:", 72.0, 230.0), &ctx, true));
        assert!(!is_action(&el("John enters.", 200.0, 230.0), &ctx, true));
    }

    #[test]
    fn transition_position_and_group_head() {
        assert!(is_transition(&el("CUT TO:", 450.0, 300.0), 0));
        assert!(is_transition(&el("FADE IN:", 72.0, 300.0), 0));
        assert!(!is_transition(&el("CUT TO:", 450.0, 300.0), 1));
        assert!(!is_transition(&el("CUT TO:", 300.0, 300.0), 0));
    }
}
