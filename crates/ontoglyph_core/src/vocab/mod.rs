//! Vocabulary definitions.
//!
//! This module is the "front door" for vocabulary data: the wire-level model ([`model`]) and the shipped canonical
//! vocabulary ([`canonical`]).
//!
//! Callers work with [`CategoryId`] and [`SymbolDefinition`] values instead of matching on raw strings; the canonical
//! tables provide spellings and metadata.
//!
//! ## Notes
//! - Vocabulary data is **pure**: no IO, no side effects. Loading a custom vocabulary from disk is the caller's job.
//!
//! ## See also
//! - `cargo run -p ontoglyph_core --bin generate_vocab_reference` to regenerate the Markdown reference.

pub mod canonical;
pub mod model;

pub use canonical::{VOCABULARY_VERSION, canonical};
pub use model::{Category, CategoryId, Context, SymbolDefinition, SymbolPath, UsageLevel, Vocabulary};
