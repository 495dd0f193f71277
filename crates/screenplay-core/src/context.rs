//! Mutable classification state threaded through the classifier.
//!
//! [`Context`] holds the discovered column x-positions (first-write-wins),
//! the document-wide screenplay boundary, and the transient title-page
//! flags. [`Boundary`] is a document-order position triple.

/// A document-order position: (page index, group index, element index).
///
/// Ordering is lexicographic, so `a <= b` means "a occurs at or before b
/// in document order".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Boundary {
    /// 0-based page index.
    pub page: usize,
    /// Group index within the page.
    pub group: usize,
    /// Element index within the group.
    pub element: usize,
}

impl Boundary {
    /// Create a position triple.
    pub fn new(page: usize, group: usize, element: usize) -> Self {
        Self {
            page,
            group,
            element,
        }
    }
}

/// Mutable state threaded through classification.
///
/// The three column x-positions are set exactly once, by the first element
/// classified into the corresponding role, and never reassigned. The
/// screenplay boundary is determined by a pre-pass and is immutable during
/// classification.
#[derive(Debug, Clone, Default)]
pub struct Context {
    /// Left-margin column established by the first scene heading.
    pub scene_heading_x: Option<f64>,
    /// Character-name column established by the first character.
    pub character_x: Option<f64>,
    /// Dialogue column established by the first dialogue line.
    pub dialogue_x: Option<f64>,
    /// y of the first scene heading seen.
    pub first_scene_heading_y: Option<f64>,
    /// Whether any scene heading has been classified.
    pub scene_heading_found: bool,
    /// Position of the first scene-heading-or-transition in the document.
    pub boundary: Option<Boundary>,
    /// Set when an author marker is classified, cleared by the next author.
    pub recent_author_marker: bool,
    /// 0-based index of the page currently being classified.
    pub page_number: usize,
    /// Width of the page currently being classified.
    pub page_width: f64,
    /// Height of the page currently being classified.
    pub page_height: f64,
}

impl Context {
    /// Create a context with the given boundary.
    pub fn with_boundary(boundary: Option<Boundary>) -> Self {
        Self {
            boundary,
            ..Self::default()
        }
    }

    /// Merge the metadata of the page about to be classified.
    pub fn begin_page(&mut self, page_number: usize, width: f64, height: f64) {
        self.page_number = page_number;
        self.page_width = width;
        self.page_height = height;
    }

    /// True iff `position` is at or after the screenplay boundary.
    pub fn screenplay_started(&self, position: Boundary) -> bool {
        self.boundary.is_some_and(|b| position >= b)
    }

    /// Record a classified scene heading: establishes the left-margin column
    /// and the first-heading y, both first-write-wins.
    pub fn note_scene_heading(&mut self, x: f64, y: f64) {
        if self.scene_heading_x.is_none() {
            self.scene_heading_x = Some(x);
        }
        if self.first_scene_heading_y.is_none() {
            self.first_scene_heading_y = Some(y);
        }
        self.scene_heading_found = true;
    }

    /// Record a classified character: establishes the character column,
    /// first-write-wins.
    pub fn note_character(&mut self, x: f64) {
        if self.character_x.is_none() {
            self.character_x = Some(x);
        }
    }

    /// Record a classified dialogue line: establishes the dialogue column,
    /// first-write-wins.
    pub fn note_dialogue(&mut self, x: f64) {
        if self.dialogue_x.is_none() {
            self.dialogue_x = Some(x);
        }
    }

    /// True if `x` sits in the character column: within 1pt of the
    /// established column, or in the 180–400 band before one exists.
    pub fn character_position(&self, x: f64) -> bool {
        match self.character_x {
            Some(col) => (x - col).abs() <= 1.0,
            None => (180.0..=400.0).contains(&x),
        }
    }

    /// True if `x` sits at the scene-heading column: within 1pt of the
    /// established column, or at the left margin (x ≤ 140) before one exists.
    pub fn action_position(&self, x: f64) -> bool {
        match self.scene_heading_x {
            Some(col) => (x - col).abs() <= 1.0,
            None => x <= 140.0,
        }
    }

    /// True if `x` sits in the dialogue column. Requires both the
    /// scene-heading and character columns to be established; before the
    /// dialogue column itself exists, any x strictly between them counts.
    pub fn dialogue_position(&self, x: f64) -> bool {
        let (Some(sh_x), Some(ch_x)) = (self.scene_heading_x, self.character_x) else {
            return false;
        };
        match self.dialogue_x {
            Some(col) => (x - col).abs() <= 1.0,
            None => sh_x < x && x < ch_x,
        }
    }
}
