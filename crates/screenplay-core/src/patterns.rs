//! Pure text predicates over span text.
//!
//! Every predicate operates on trimmed text and carries no geometric or
//! contextual knowledge; combining these with position checks is the job of
//! the element predicates. Case-sensitive unless noted.

use std::sync::LazyLock;

use regex::Regex;

static SCENE_HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:INT/EXT|EXT/INT|INT|EXT)\.?\s+.+$").unwrap());

static CHARACTER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z][^():]*?(?:\s*\(.*?\))?$").unwrap());

static CONTINUATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\((?:MORE TO COME|MORE|CONT'D|CONTINUED|CONT)\)$").unwrap());

static PAGE_NUMBER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:page\s+)?\d+\.?$|^-?\d+-?$|^\d{1,3}$").unwrap()
});

static SCENE_NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]?\d+[A-Z]?\.?$|^\d+[A-Z]?-\d*$").unwrap());

static SUBHEADING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^(?:OPEN ON:?|LATER|MOMENTS LATER|CONTINUOUS|MEANWHILE|SAME TIME|",
        r"THE NEXT (?:DAY|MORNING|NIGHT)|THAT NIGHT|DAWN|DUSK|MORNING|AFTERNOON|EVENING|NIGHT|",
        r"\d+\s+(?:YEARS?|MONTHS?|WEEKS?|DAYS?|HOURS?)\s+LATER)$"
    ))
    .unwrap()
});

static NUMERIC_DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\d{1,2}/\d{1,2}/\d{2,4}\b").unwrap());

static WRITTEN_DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?:January|February|March|April|May|June|July|August|September|",
        r"October|November|December)\s+\d{1,2},?\s+\d{4}"
    ))
    .unwrap()
});

/// Transitions recognized by [`is_transition`], matched case-insensitively.
const TRANSITIONS: &[&str] = &[
    "FADE IN:",
    "FADE OUT.",
    "CUT TO:",
    "DISSOLVE TO:",
    "MATCH CUT TO:",
    "SMASH CUT TO:",
    "JUMP CUT TO:",
    "CROSS CUT TO:",
    "INTERCUT:",
    "INTERCUT WITH:",
    "BURN TO:",
    "BURN TO PINK:",
    "MONTAGE:",
    "END MONTAGE",
    "BACK TO:",
    "FLASHBACK:",
    "END FLASHBACK",
    "FREEZE FRAME",
    "THE END",
];

const AUTHOR_MARKERS: &[&str] = &[
    "written",
    "by",
    "written by",
    "screenplay by",
    "teleplay by",
    "story by",
];

const SOURCE_MARKERS: &[&str] = &["based on", "adapted from", "inspired by"];

const SOURCE_CREDIT_PREFIXES: &[&str] = &[
    "story by",
    "original screenplay by",
    "characters by",
    "original story by",
];

const NOTES_MARKERS: &[&str] = &[
    "Bros",
    "Pictures",
    "Productions",
    "Entertainment",
    "Studios",
    "Films",
    "©",
    "Copyright",
    "@",
];

/// True if the trimmed text is a scene heading (slugline), e.g.
/// "INT. KITCHEN - DAY" or "EXT/INT CAR - NIGHT".
pub fn is_scene_heading(text: &str) -> bool {
    SCENE_HEADING_RE.is_match(text.trim())
}

/// True if the trimmed text has the shape of a character name: starts with
/// an uppercase letter, contains no parens or colons in the name itself,
/// optionally followed by an extension like "(V.O.)", and does not end
/// with a colon.
pub fn is_character(text: &str) -> bool {
    let trimmed = text.trim();
    !trimmed.ends_with(':') && CHARACTER_RE.is_match(trimmed)
}

/// True if the trimmed text is one of the recognized transitions
/// (case-insensitive).
pub fn is_transition(text: &str) -> bool {
    let trimmed = text.trim();
    TRANSITIONS.iter().any(|t| trimmed.eq_ignore_ascii_case(t))
}

/// True if the trimmed text is fully parenthesized and is not a
/// continuation marker.
pub fn is_parenthetical(text: &str) -> bool {
    let trimmed = text.trim();
    trimmed.starts_with('(') && trimmed.ends_with(')') && !is_continuation(trimmed)
}

/// True if the trimmed, uppercased text is a continuation marker such as
/// "(MORE)" or "(CONT'D)".
pub fn is_continuation(text: &str) -> bool {
    CONTINUATION_RE.is_match(&text.trim().to_uppercase())
}

/// True if the trimmed text equals its uppercase form and contains at
/// least one ASCII letter.
pub fn is_all_caps(text: &str) -> bool {
    let trimmed = text.trim();
    trimmed.chars().any(|c| c.is_ascii_alphabetic()) && trimmed == trimmed.to_uppercase()
}

/// True if the trimmed text is a short all-caps subheading: not a scene
/// heading, transition, or continuation, and either not shaped like a
/// character name or matching a known subheading phrase ("LATER",
/// "OPEN ON:", time/date markers).
pub fn is_subheading(text: &str) -> bool {
    let trimmed = text.trim();
    is_all_caps(trimmed)
        && trimmed.len() <= 20
        && !is_scene_heading(trimmed)
        && !is_transition(trimmed)
        && !is_continuation(trimmed)
        && (!is_character(trimmed) || SUBHEADING_RE.is_match(trimmed))
}

/// True if the trimmed text is exactly an author-marker phrase such as
/// "By" or "Screenplay by" (case-insensitive).
pub fn is_author_marker(text: &str) -> bool {
    let lower = text.trim().to_lowercase();
    AUTHOR_MARKERS.contains(&lower.as_str())
}

/// True if the text contains a source attribution such as "based on"
/// (case-insensitive).
pub fn is_source_marker(text: &str) -> bool {
    let lower = text.to_lowercase();
    SOURCE_MARKERS.iter().any(|m| lower.contains(m))
}

/// True if the trimmed text starts with a source-credit phrase such as
/// "story by" (case-insensitive).
pub fn is_source_credit(text: &str) -> bool {
    let lower = text.trim().to_lowercase();
    SOURCE_CREDIT_PREFIXES.iter().any(|p| lower.starts_with(p))
}

/// True if the text looks like a draft/version/date line: contains
/// DRAFT, VERSION, REVISION, or FINAL, or a numeric or written-out date.
pub fn is_source_names(text: &str) -> bool {
    ["DRAFT", "VERSION", "REVISION", "FINAL"]
        .iter()
        .any(|m| text.contains(m))
        || NUMERIC_DATE_RE.is_match(text)
        || WRITTEN_DATE_RE.is_match(text)
}

/// True if the text contains a studio, copyright, or contact marker.
pub fn is_notes(text: &str) -> bool {
    NOTES_MARKERS.iter().any(|m| text.contains(m))
}

/// True if the trimmed text matches a page-number shape, e.g. "12",
/// "12.", "-12-", or "page 12".
pub fn is_page_number(text: &str) -> bool {
    PAGE_NUMBER_RE.is_match(text.trim())
}

/// True if the trimmed text matches a scene-number shape, e.g. "12",
/// "12A", "A12.", or "3-".
pub fn is_scene_number(text: &str) -> bool {
    SCENE_NUMBER_RE.is_match(text.trim())
}

/// Number of whitespace-separated words that begin with an uppercase
/// ASCII letter.
pub fn proper_word_count(text: &str) -> usize {
    text.split_whitespace()
        .filter(|w| w.chars().next().is_some_and(|c| c.is_ascii_uppercase()))
        .count()
}

/// True if every word of the trimmed text starts with an uppercase
/// ASCII letter.
pub fn is_title_case(text: &str) -> bool {
    let trimmed = text.trim();
    !trimmed.is_empty()
        && trimmed
            .split_whitespace()
            .all(|w| w.chars().next().is_some_and(|c| c.is_ascii_uppercase()))
}

/// True if the trimmed text is plausible as a screenplay title: all-caps
/// or title-case, at most six capitalized words, and not one of the
/// marker phrases that share the title page.
pub fn is_title_like(text: &str) -> bool {
    let trimmed = text.trim();
    let lower = trimmed.to_lowercase();
    (is_all_caps(trimmed) || is_title_case(trimmed))
        && proper_word_count(trimmed) <= 6
        && !matches!(lower.as_str(), "by" | "written" | "based on the novel")
}

/// True if the trimmed text is plausible as a human name: one to four
/// words, at most 50 characters, contains letters, and does not mention
/// source or draft markers.
pub fn looks_like_person_name(text: &str) -> bool {
    let trimmed = text.trim();
    let lower = trimmed.to_lowercase();
    let word_count = trimmed.split_whitespace().count();
    (1..=4).contains(&word_count)
        && trimmed.len() <= 50
        && trimmed.chars().any(|c| c.is_alphabetic())
        && !lower.contains("based on")
        && !lower.contains("novel")
        && !lower.contains("draft")
        && !lower.contains("version")
}
