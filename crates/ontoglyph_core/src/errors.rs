//! Error types raised by the core.
//!
//! Only index construction can fail. Resolver queries are total, and the validator reports problems as data
//! (see [`crate::validate::Diagnostic`]) rather than as errors.

use miette::Diagnostic;
use thiserror::Error;

/// Reasons an index cannot be built from a vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum IndexError {
    #[error("duplicate grapheme {grapheme} at {path}, already used at {first_path}")]
    #[diagnostic(
        code(ontoglyph::index::duplicate_grapheme),
        help("Each grapheme may appear once across all categories. Run `ontoglyph validate` to list every conflict.")
    )]
    DuplicateGrapheme {
        grapheme: String,
        path: String,
        first_path: String,
    },

    #[error("missing grapheme at {path}")]
    #[diagnostic(
        code(ontoglyph::index::empty_grapheme),
        help("An empty grapheme would match every text. Give the definition a non-empty grapheme.")
    )]
    EmptyGrapheme { path: String },
}
