//! Language detection for extracted screenplay text.
//!
//! Thin wrapper over [`whatlang`]. The classifier itself never interprets
//! the label — it is stored on the [`Script`](screenplay_core::Script) for
//! downstream tooling.

/// Label used when detection fails or there is no text.
pub const UNKNOWN_LANGUAGE: &str = "unknown";

/// Detect the language of `text`, returning its English name
/// (e.g. "English", "Spanish"), or [`UNKNOWN_LANGUAGE`] when the text is
/// empty or detection is inconclusive.
pub fn detect_language(text: &str) -> String {
    if text.trim().is_empty() {
        return UNKNOWN_LANGUAGE.to_string();
    }
    match whatlang::detect(text) {
        Some(info) => info.lang().eng_name().to_string(),
        None => UNKNOWN_LANGUAGE.to_string(),
    }
}
