//! Data model shared by every vocabulary: symbol definitions, the fixed category set, and the vocabulary container.
//!
//! The types here are the wire contract consumers rely on. They serialize with the camelCase field names
//! (`grapheme`, `allowedContexts`, `usageLevel`, `conflictsWith`, ...) and round-trip losslessly through JSON.
//!
//! ## Notes
//! - Fields that a malformed vocabulary may omit or set to `null` (`grapheme`, `allowedContexts`, `conflictsWith`, and
//!   whole categories) default to empty on deserialization so the validator can report them instead of the parser
//!   failing.
//! - Category tables are [`IndexMap`]s: key order is the declared order, which is also the traversal order used by
//!   the index builder, the validator, and the reference docs.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

/// Stable identifier for the eight fixed vocabulary categories.
///
/// ## Examples
/// ```rust
/// use ontoglyph_core::vocab::CategoryId;
///
/// assert_eq!(CategoryId::parse("legalPolicy"), Some(CategoryId::LegalPolicy));
/// assert_eq!(CategoryId::LegalPolicy.as_str(), "legalPolicy");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CategoryId {
    Structure,
    LegalPolicy,
    Reasoning,
    Tasks,
    Privacy,
    Actors,
    State,
    Control,
}

impl CategoryId {
    /// All categories in declared (traversal) order.
    pub const ALL: [CategoryId; 8] = [
        CategoryId::Structure,
        CategoryId::LegalPolicy,
        CategoryId::Reasoning,
        CategoryId::Tasks,
        CategoryId::Privacy,
        CategoryId::Actors,
        CategoryId::State,
        CategoryId::Control,
    ];

    /// Return the wire spelling of the category tag.
    pub fn as_str(self) -> &'static str {
        match self {
            CategoryId::Structure => "structure",
            CategoryId::LegalPolicy => "legalPolicy",
            CategoryId::Reasoning => "reasoning",
            CategoryId::Tasks => "tasks",
            CategoryId::Privacy => "privacy",
            CategoryId::Actors => "actors",
            CategoryId::State => "state",
            CategoryId::Control => "control",
        }
    }

    /// Return a human-readable heading for docs and terminal output.
    pub fn title(self) -> &'static str {
        match self {
            CategoryId::Structure => "Structure",
            CategoryId::LegalPolicy => "Legal & policy",
            CategoryId::Reasoning => "Reasoning",
            CategoryId::Tasks => "Tasks",
            CategoryId::Privacy => "Privacy",
            CategoryId::Actors => "Actors",
            CategoryId::State => "State",
            CategoryId::Control => "Control",
        }
    }

    /// Resolve a wire spelling to its category.
    ///
    /// Lookup is case-sensitive, matching the serialized form.
    pub fn parse(name: &str) -> Option<CategoryId> {
        CategoryId::ALL.into_iter().find(|c| c.as_str() == name)
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of participant allowed to use a symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Context {
    Human,
    Llm,
    Tool,
}

impl Context {
    pub const ALL: [Context; 3] = [Context::Human, Context::Llm, Context::Tool];

    pub fn as_str(self) -> &'static str {
        match self {
            Context::Human => "HUMAN",
            Context::Llm => "LLM",
            Context::Tool => "TOOL",
        }
    }
}

impl fmt::Display for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How strongly a symbol is expected to appear when its meaning applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum UsageLevel {
    Required,
    Optional,
    Conditional,
}

impl UsageLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            UsageLevel::Required => "REQUIRED",
            UsageLevel::Optional => "OPTIONAL",
            UsageLevel::Conditional => "CONDITIONAL",
        }
    }
}

impl fmt::Display for UsageLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One vocabulary entry: a grapheme plus its formal metadata.
///
/// ## Notes
/// - `grapheme` must be non-empty and unique across the whole vocabulary. Neither rule is enforced here; see
///   [`crate::validate`] and [`crate::index::build_index`].
/// - `conflicts_with` is advisory. Nothing checks that the named graphemes exist or that pairs are symmetric.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolDefinition {
    #[serde(default, deserialize_with = "null_as_default")]
    pub grapheme: String,
    pub category: CategoryId,
    pub meaning: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub allowed_contexts: Vec<Context>,
    pub usage_level: UsageLevel,
    #[serde(default, deserialize_with = "null_as_default")]
    pub conflicts_with: Vec<String>,
    pub example: String,
}

impl SymbolDefinition {
    /// Check whether the given participant kind may use this symbol.
    pub fn allows(&self, context: Context) -> bool {
        self.allowed_contexts.contains(&context)
    }
}

/// Read `null` as the type's empty value.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A category table: short key -> definition, in declared order.
pub type Category = IndexMap<String, SymbolDefinition>;

/// Dotted location of a definition inside a vocabulary (`category.key`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SymbolPath<'a> {
    pub category: CategoryId,
    pub key: &'a str,
}

impl fmt::Display for SymbolPath<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.category, self.key)
    }
}

/// A complete vocabulary: the eight fixed categories.
///
/// The canonical instance lives in [`crate::vocab::canonical`]; callers may build or deserialize their own.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Vocabulary {
    #[serde(deserialize_with = "null_as_default")]
    pub structure: Category,
    #[serde(deserialize_with = "null_as_default")]
    pub legal_policy: Category,
    #[serde(deserialize_with = "null_as_default")]
    pub reasoning: Category,
    #[serde(deserialize_with = "null_as_default")]
    pub tasks: Category,
    #[serde(deserialize_with = "null_as_default")]
    pub privacy: Category,
    #[serde(deserialize_with = "null_as_default")]
    pub actors: Category,
    #[serde(deserialize_with = "null_as_default")]
    pub state: Category,
    #[serde(deserialize_with = "null_as_default")]
    pub control: Category,
}

impl Vocabulary {
    /// Return the table for a category.
    pub fn category(&self, id: CategoryId) -> &Category {
        match id {
            CategoryId::Structure => &self.structure,
            CategoryId::LegalPolicy => &self.legal_policy,
            CategoryId::Reasoning => &self.reasoning,
            CategoryId::Tasks => &self.tasks,
            CategoryId::Privacy => &self.privacy,
            CategoryId::Actors => &self.actors,
            CategoryId::State => &self.state,
            CategoryId::Control => &self.control,
        }
    }

    /// Return the mutable table for a category (for building custom vocabularies).
    pub fn category_mut(&mut self, id: CategoryId) -> &mut Category {
        match id {
            CategoryId::Structure => &mut self.structure,
            CategoryId::LegalPolicy => &mut self.legal_policy,
            CategoryId::Reasoning => &mut self.reasoning,
            CategoryId::Tasks => &mut self.tasks,
            CategoryId::Privacy => &mut self.privacy,
            CategoryId::Actors => &mut self.actors,
            CategoryId::State => &mut self.state,
            CategoryId::Control => &mut self.control,
        }
    }

    /// Iterate categories in declared order.
    pub fn categories(&self) -> impl Iterator<Item = (CategoryId, &Category)> {
        CategoryId::ALL.into_iter().map(move |id| (id, self.category(id)))
    }

    /// Iterate every definition, category-then-key, with its path.
    ///
    /// This is the single traversal order used by the index builder, the validator, and doc generation.
    pub fn definitions(&self) -> impl Iterator<Item = (SymbolPath<'_>, &SymbolDefinition)> {
        self.categories().flat_map(|(category, table)| {
            table
                .iter()
                .map(move |(key, def)| (SymbolPath { category, key: key.as_str() }, def))
        })
    }

    /// Total number of definitions across all categories.
    pub fn len(&self) -> usize {
        self.categories().map(|(_, table)| table.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
