//! Flat grapheme -> definition lookup built from a vocabulary.
//!
//! The index is a derived cache. The vocabulary stays authoritative; an index never changes after it is built.
//!
//! ## Notes
//! - Construction rejects duplicate and empty graphemes instead of letting a later definition silently replace an
//!   earlier one. A vocabulary that fails here will also fail [`crate::validate::validate`], which lists every defect
//!   rather than stopping at the first.
//! - Iteration order is the vocabulary's traversal order (category, then key).

use std::collections::HashMap;

use indexmap::IndexMap;

use crate::errors::IndexError;
use crate::vocab::{SymbolDefinition, Vocabulary};

/// Read-only grapheme -> definition map.
#[derive(Debug, Clone, Default)]
pub struct Index {
    entries: IndexMap<String, SymbolDefinition>,
}

impl Index {
    /// Look up the definition for a grapheme.
    pub fn get(&self, grapheme: &str) -> Option<&SymbolDefinition> {
        self.entries.get(grapheme)
    }

    pub fn contains(&self, grapheme: &str) -> bool {
        self.entries.contains_key(grapheme)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate known graphemes in traversal order.
    pub fn graphemes(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Iterate `(grapheme, definition)` pairs in traversal order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SymbolDefinition)> {
        self.entries.iter().map(|(g, def)| (g.as_str(), def))
    }

    /// Return an independent copy of the entries.
    ///
    /// Definitions are cloned, so changing the copy never affects this index.
    pub fn to_map(&self) -> IndexMap<String, SymbolDefinition> {
        self.entries.clone()
    }
}

/// Build an index over every definition in `vocabulary`.
///
/// ## Errors
/// - [`IndexError::EmptyGrapheme`] when a definition has an empty grapheme.
/// - [`IndexError::DuplicateGrapheme`] when a grapheme was already indexed from an earlier path.
///
/// ## Examples
/// ```rust
/// use ontoglyph_core::index::build_index;
/// use ontoglyph_core::vocab::canonical;
///
/// let index = build_index(canonical()).unwrap();
/// assert_eq!(index.get("📌").map(|d| d.category.as_str()), Some("structure"));
/// ```
#[tracing::instrument(skip_all, fields(definitions = vocabulary.len()))]
pub fn build_index(vocabulary: &Vocabulary) -> Result<Index, IndexError> {
    let mut entries: IndexMap<String, SymbolDefinition> = IndexMap::with_capacity(vocabulary.len());
    let mut first_paths: HashMap<&str, String> = HashMap::new();

    for (path, def) in vocabulary.definitions() {
        if def.grapheme.is_empty() {
            return Err(IndexError::EmptyGrapheme { path: path.to_string() });
        }
        if let Some(first_path) = first_paths.get(def.grapheme.as_str()) {
            return Err(IndexError::DuplicateGrapheme {
                grapheme: def.grapheme.clone(),
                path: path.to_string(),
                first_path: first_path.clone(),
            });
        }
        first_paths.insert(def.grapheme.as_str(), path.to_string());
        entries.insert(def.grapheme.clone(), def.clone());
    }

    tracing::debug!(entries = entries.len(), "built symbol index");
    Ok(Index { entries })
}
