//! Backend-independent data types and algorithms for screenplay-rs.
//!
//! This crate provides the foundational types ([`Span`], [`TextElement`],
//! [`ElementKind`], [`Script`]) and the screenplay classifier: a multi-pass,
//! position- and pattern-driven state machine that assigns each positioned
//! text span a screenplay element type. It has no required external
//! dependencies beyond `regex` — all functionality is pure Rust with no I/O.
//!
//! # Modules
//!
//! - [`element`] — Element data: [`Span`], [`TextElement`], [`ElementKind`]
//! - [`patterns`] — Pure text predicates (scene headings, transitions, markers)
//! - [`grouping`] — Span enrichment and vertical grouping: [`GroupedPage`]
//! - [`context`] — Classification state: [`Context`], [`Boundary`]
//! - [`predicates`] — Per-kind predicates combining patterns with geometry
//! - [`classifier`] — The multi-pass classifier: [`classify_document`]
//! - [`assembler`] — Post-classification assembly: [`assemble`]
//! - [`script`] — Output model: [`Script`], [`ScriptPage`], [`ScriptMetadata`]
//! - [`input`] — Input shape: [`DocumentInput`], [`PageInput`]
//! - [`error`] — Errors: [`ScriptError`]
//!
//! # Pipeline
//!
//! positioned spans → grouping → classifier (boundary scan, sequential
//! passes) → assembler → [`Script`].

#![deny(missing_docs)]

/// Post-classification assembly into pages of typed elements.
pub mod assembler;
/// The multi-pass screenplay classifier.
pub mod classifier;
/// Mutable classification state and document positions.
pub mod context;
/// Span, text element, and element kind types.
pub mod element;
/// Error types for screenplay processing.
pub mod error;
/// Span enrichment (gaps, centering) and vertical grouping.
pub mod grouping;
/// Input shape consumed by the classifier.
pub mod input;
/// Pure text predicates over span text.
pub mod patterns;
/// Per-kind classifier predicates (patterns + geometry + context).
pub mod predicates;
/// The assembled screenplay document model.
pub mod script;

pub use assembler::assemble;
pub use classifier::{classify_document, find_boundary, ClassifyOptions};
pub use context::{Boundary, Context};
pub use element::{ElementKind, Span, TextElement};
pub use error::ScriptError;
pub use grouping::{
    build_grouped_page, build_text_elements, group_by_gap, is_centered, GroupOptions, GroupedPage,
};
pub use input::{DocumentInput, PageInput, DEFAULT_PAGE_HEIGHT, DEFAULT_PAGE_WIDTH};
pub use script::{Script, ScriptMetadata, ScriptPage};
