//! Canonical emoji vocabulary for annotating case notes, plus the mechanical operations over it.
//!
//! This crate is intentionally small and dependency-light. It contains:
//! - the vocabulary data model and the shipped canonical vocabulary ([`vocab`]),
//! - a grapheme index builder ([`index`]),
//! - a resolver that finds and looks up known symbols in text ([`resolver`]),
//! - a validator that reports structural defects in a vocabulary ([`validate`]),
//! - a Markdown reference renderer ([`reference`]).
//!
//! ## Notes
//!
//! - This is a "semantic core" crate: **no IO**, and the only shared state is the lazily built canonical
//!   vocabulary/resolver pair.
//! - Resolver queries are total. Vocabulary defects come back from [`validate::validate`] as data, never as panics.
//!
//! ## Examples
//! ```rust
//! let found = ontoglyph_core::find_symbols_in_text("🔍 check dates 🔍");
//! assert_eq!(found, ["🔍"]);
//!
//! let defs = ontoglyph_core::resolve_symbols(["🧠", "not a symbol"]);
//! assert_eq!(defs[0].category.as_str(), "reasoning");
//! ```

pub mod errors;
pub mod index;
pub mod reference;
pub mod resolver;
pub mod validate;
pub mod vocab;

pub use errors::IndexError;
pub use resolver::Resolver;
pub use validate::{Diagnostic, DiagnosticKind, validate, validate_canonical};
pub use vocab::{CategoryId, Context, SymbolDefinition, UsageLevel, Vocabulary};

/// [`Resolver::resolve_symbols`] against the canonical resolver.
pub fn resolve_symbols<I, S>(graphemes: I) -> Vec<&'static SymbolDefinition>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Resolver::canonical().resolve_symbols(graphemes)
}

/// [`Resolver::find_symbols_in_text`] against the canonical resolver.
pub fn find_symbols_in_text(text: &str) -> Vec<&'static str> {
    Resolver::canonical().find_symbols_in_text(text)
}

/// [`Resolver::resolve_text`] against the canonical resolver.
pub fn resolve_text(text: &str) -> Vec<&'static SymbolDefinition> {
    Resolver::canonical().resolve_text(text)
}
