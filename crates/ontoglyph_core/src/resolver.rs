//! Symbol resolution against one built index.
//!
//! A [`Resolver`] answers "which known symbols are relevant here" for a single vocabulary. Every query is total:
//! unknown graphemes and texts without symbols give empty results, never errors.
//!
//! ## Lifecycle
//! - [`Resolver::canonical`] is built on first use and shared for the rest of the process. Binaries should grab it
//!   once at start-up and pass `&Resolver` down to whatever needs it.
//! - [`Resolver::new`] builds a fresh, uncached resolver over a caller-supplied vocabulary.
//! - Nothing needs tearing down; a resolver owns only memory.
//!
//! ## Examples
//! ```rust
//! use ontoglyph_core::resolver::Resolver;
//!
//! let resolver = Resolver::canonical();
//! let found = resolver.resolve_text("⏳ Waiting on the school. 📌 Seen twice.");
//! let graphemes: Vec<&str> = found.iter().map(|d| d.grapheme.as_str()).collect();
//! assert_eq!(graphemes, ["📌", "⏳"]);
//! ```

use std::sync::OnceLock;

use indexmap::IndexMap;

use crate::errors::IndexError;
use crate::index::{Index, build_index};
use crate::vocab::{SymbolDefinition, Vocabulary, canonical};

/// Lookup service over one immutable [`Index`].
#[derive(Debug, Clone)]
pub struct Resolver {
    index: Index,
}

impl Resolver {
    /// Build a resolver over `vocabulary`.
    ///
    /// ## Errors
    /// Fails when the vocabulary has duplicate or empty graphemes (see [`build_index`]).
    pub fn new(vocabulary: &Vocabulary) -> Result<Self, IndexError> {
        let index = build_index(vocabulary)?;
        tracing::debug!(symbols = index.len(), "resolver ready");
        Ok(Self { index })
    }

    /// Return the process-wide resolver over the canonical vocabulary.
    ///
    /// The first caller builds it; concurrent first calls block until the single build finishes.
    pub fn canonical() -> &'static Resolver {
        static CANONICAL: OnceLock<Resolver> = OnceLock::new();
        CANONICAL.get_or_init(|| {
            Resolver::new(canonical()).expect("INVARIANT: canonical vocabulary has unique, non-empty graphemes")
        })
    }

    /// Borrow the underlying index.
    pub fn index(&self) -> &Index {
        &self.index
    }

    /// Look up each grapheme in order, skipping unknown ones.
    ///
    /// Order and multiplicity of the input are preserved: a grapheme given twice yields the same definition
    /// reference twice.
    pub fn resolve_symbols<I, S>(&self, graphemes: I) -> Vec<&SymbolDefinition>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        graphemes
            .into_iter()
            .filter_map(|g| self.index.get(g.as_ref()))
            .collect()
    }

    /// Return every known grapheme that occurs in `text`, once each, in index order.
    pub fn find_symbols_in_text(&self, text: &str) -> Vec<&str> {
        if text.is_empty() {
            return Vec::new();
        }
        self.index.graphemes().filter(|g| text.contains(*g)).collect()
    }

    /// Resolve every known symbol that occurs in `text`.
    ///
    /// Always equal to `resolve_symbols(find_symbols_in_text(text))`.
    pub fn resolve_text(&self, text: &str) -> Vec<&SymbolDefinition> {
        self.resolve_symbols(self.find_symbols_in_text(text))
    }

    /// Return a detached copy of the index for callers that want to inspect or edit a working copy.
    pub fn snapshot_index(&self) -> IndexMap<String, SymbolDefinition> {
        self.index.to_map()
    }
}
