//! Structural validation of a vocabulary.
//!
//! [`validate`] walks the vocabulary directly, in the same category-then-key order as everything else, and reports
//! defects as an ordered list of [`Diagnostic`]s. An empty list means the vocabulary is valid.
//!
//! The validator does not build an index, so it still works on vocabularies that [`crate::index::build_index`]
//! rejects, and it reports every defect instead of the first.
//!
//! ## Checks
//! - empty category (`Category <name> must contain at least one symbol`)
//! - missing grapheme (`Missing emoji at <path>`)
//! - grapheme reused across paths (`Duplicate emoji <g> at <path>, already used at <first>`)
//! - empty allowed contexts (`allowedContext must be non-empty array at <path>`)
//!
//! ## Not checked
//! - `conflictsWith` symmetry, dangling `conflictsWith` graphemes, or conflict cycles.
//! - Whether a record's `category` tag matches the table it sits in.

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

use crate::vocab::{SymbolPath, Vocabulary, canonical};

/// What kind of defect a diagnostic reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DiagnosticKind {
    EmptyCategory,
    MissingGrapheme,
    DuplicateGrapheme,
    EmptyContexts,
}

/// One validation issue.
///
/// `Display` renders `message`, the stable human-readable text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    /// Dotted path of the offending entry (`category.key`), or the category name for category-level issues.
    pub path: String,
    pub message: String,
}

impl Diagnostic {
    fn empty_category(category: &str) -> Self {
        Self {
            kind: DiagnosticKind::EmptyCategory,
            path: category.to_string(),
            message: format!("Category {category} must contain at least one symbol"),
        }
    }

    fn missing_grapheme(path: String) -> Self {
        Self {
            kind: DiagnosticKind::MissingGrapheme,
            message: format!("Missing emoji at {path}"),
            path,
        }
    }

    fn duplicate_grapheme(grapheme: &str, path: String, first_path: &str) -> Self {
        Self {
            kind: DiagnosticKind::DuplicateGrapheme,
            message: format!("Duplicate emoji {grapheme} at {path}, already used at {first_path}"),
            path,
        }
    }

    fn empty_contexts(path: String) -> Self {
        Self {
            kind: DiagnosticKind::EmptyContexts,
            message: format!("allowedContext must be non-empty array at {path}"),
            path,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validate `vocabulary` and return every defect found, in traversal order.
///
/// ## Notes
/// - A definition may produce several diagnostics (e.g. missing grapheme and empty contexts).
/// - Definitions with a missing grapheme are not tracked for duplicates.
///
/// ## Examples
/// ```rust
/// use ontoglyph_core::validate::validate;
/// use ontoglyph_core::vocab::canonical;
///
/// assert!(validate(canonical()).is_empty());
/// ```
#[tracing::instrument(skip_all, fields(definitions = vocabulary.len()))]
pub fn validate(vocabulary: &Vocabulary) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    let mut seen: HashMap<&str, String> = HashMap::new();

    for (category, table) in vocabulary.categories() {
        if table.is_empty() {
            diagnostics.push(Diagnostic::empty_category(category.as_str()));
            continue;
        }

        for (key, def) in table {
            let path = SymbolPath { category, key: key.as_str() }.to_string();

            if def.grapheme.is_empty() {
                diagnostics.push(Diagnostic::missing_grapheme(path.clone()));
            } else if let Some(first_path) = seen.get(def.grapheme.as_str()) {
                diagnostics.push(Diagnostic::duplicate_grapheme(&def.grapheme, path.clone(), first_path));
            } else {
                seen.insert(def.grapheme.as_str(), path.clone());
            }

            if def.allowed_contexts.is_empty() {
                diagnostics.push(Diagnostic::empty_contexts(path));
            }
        }
    }

    if !diagnostics.is_empty() {
        tracing::debug!(count = diagnostics.len(), "vocabulary has defects");
    }
    diagnostics
}

/// Validate the canonical vocabulary.
pub fn validate_canonical() -> Vec<Diagnostic> {
    validate(canonical())
}
