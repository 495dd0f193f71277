//! Screenplay element data types.
//!
//! [`Span`] is a raw positioned text run as produced by a PDF extraction
//! backend. [`TextElement`] is a span enriched with vertical-gap and
//! centering information, and ultimately tagged with an [`ElementKind`]
//! by the classifier.

/// The closed set of screenplay element kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum ElementKind {
    /// Title of the screenplay, on the title page.
    Title,
    /// A credit marker such as "Written by" or "Screenplay by".
    AuthorMarker,
    /// An author name following an author marker.
    Author,
    /// "Based on" / "adapted from" / "inspired by" attribution.
    SourceMarker,
    /// "Story by" / "original screenplay by" style credit.
    SourceCredit,
    /// Draft, version, or date line on the title page.
    SourceNames,
    /// Studio names, copyright lines, and other header-band notes.
    Notes,
    /// A bare page number in the top or bottom margin.
    PageNumber,
    /// A scene number in the left or right margin.
    SceneNumber,
    /// A scene heading (slugline), e.g. "INT. KITCHEN - DAY".
    SceneHeading,
    /// A short all-caps subheading, e.g. "LATER" or "OPEN ON:".
    Subheading,
    /// A character name introducing dialogue.
    Character,
    /// A parenthetical direction inside dialogue.
    Parenthetical,
    /// A line of spoken dialogue.
    Dialogue,
    /// Action / scene description.
    Action,
    /// A transition such as "CUT TO:" or "FADE OUT.".
    Transition,
    /// A continuation marker such as "(MORE)" or "(CONT'D)".
    Continuation,
}

impl ElementKind {
    /// Returns the snake_case string tag for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementKind::Title => "title",
            ElementKind::AuthorMarker => "author_marker",
            ElementKind::Author => "author",
            ElementKind::SourceMarker => "source_marker",
            ElementKind::SourceCredit => "source_credit",
            ElementKind::SourceNames => "source_names",
            ElementKind::Notes => "notes",
            ElementKind::PageNumber => "page_number",
            ElementKind::SceneNumber => "scene_number",
            ElementKind::SceneHeading => "scene_heading",
            ElementKind::Subheading => "subheading",
            ElementKind::Character => "character",
            ElementKind::Parenthetical => "parenthetical",
            ElementKind::Dialogue => "dialogue",
            ElementKind::Action => "action",
            ElementKind::Transition => "transition",
            ElementKind::Continuation => "continuation",
        }
    }
}

impl std::fmt::Display for ElementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A raw positioned text run on a PDF page.
///
/// Coordinates are in points with the origin at the top-left of the page;
/// `y` grows downward. Backends emitting bottom-left-origin coordinates
/// must normalize before constructing spans.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Span {
    /// The text content of this span.
    pub text: String,
    /// Left edge in points.
    pub x: f64,
    /// Top edge in points (y=0 at page top).
    pub y: f64,
    /// Width in points.
    pub width: f64,
    /// Height in points.
    pub height: f64,
    /// Font size in points, if known.
    #[cfg_attr(feature = "serde", serde(default))]
    pub font_size: Option<f64>,
    /// Font name, if known.
    #[cfg_attr(feature = "serde", serde(default))]
    pub font: Option<String>,
}

impl Span {
    /// Create a span with no font information.
    pub fn new(text: impl Into<String>, x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            width,
            height,
            font_size: None,
            font: None,
        }
    }
}

/// A text span enriched for classification.
///
/// Carries the vertical gap to its neighbors within the page, whether it is
/// horizontally centered, and (after classification) its element kind.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextElement {
    /// The text content of this element.
    pub text: String,
    /// Left edge in points.
    pub x: f64,
    /// Top edge in points (y=0 at page top).
    pub y: f64,
    /// Width in points.
    pub width: f64,
    /// Height in points.
    pub height: f64,
    /// Font size in points, if known.
    #[cfg_attr(feature = "serde", serde(default))]
    pub font_size: Option<f64>,
    /// Font name, if known.
    #[cfg_attr(feature = "serde", serde(default))]
    pub font_name: Option<String>,
    /// Vertical gap to the previous element on the page (≥ 0), `None` at the top edge.
    #[cfg_attr(feature = "serde", serde(default))]
    pub gap_to_prev: Option<f64>,
    /// Vertical gap to the next element on the page (≥ 0), `None` at the bottom edge.
    #[cfg_attr(feature = "serde", serde(default))]
    pub gap_to_next: Option<f64>,
    /// Whether this element is horizontally centered on the page.
    #[cfg_attr(feature = "serde", serde(default))]
    pub centered: bool,
    /// The classified element kind, `None` until classified.
    #[cfg_attr(feature = "serde", serde(default))]
    pub kind: Option<ElementKind>,
    /// Whether this element is part of a dual-dialogue block.
    #[cfg_attr(feature = "serde", serde(default))]
    pub is_dual_dialogue: bool,
}

impl TextElement {
    /// The trimmed text of this element.
    pub fn trimmed(&self) -> &str {
        self.text.trim()
    }

    /// True if this element has been assigned the given kind.
    pub fn is_kind(&self, kind: ElementKind) -> bool {
        self.kind == Some(kind)
    }

    /// True if this element has not been classified yet.
    pub fn is_unclassified(&self) -> bool {
        self.kind.is_none()
    }
}
