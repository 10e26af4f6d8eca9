//! Property tests for the keyword suggestion heuristic.

use std::collections::HashSet;

use ontoglyph::suggest::{suggest, suggest_graphemes};
use ontoglyph_core::Resolver;
use ontoglyph_core::vocab::canonical;
use proptest::prelude::*;

const WORDS: &[&str] = &[
    "urgent", "pending", "child", "police", "consent", "risk", "review", "the", "note", "2024-11-06", "because",
    "resolved", "escalated", "?", "done", "family", "redacted", "weekly", "maybe", "court",
];

/// Case-note-like text assembled from keywords and filler, with random casing.
fn note_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec((prop::sample::select(WORDS), any::<bool>()), 0..12).prop_map(|words| {
        words
            .into_iter()
            .map(|(w, upper)| if upper { w.to_uppercase() } else { w.to_string() })
            .collect::<Vec<_>>()
            .join(" ")
    })
}

proptest! {
    /// Property: every suggested grapheme appears at most once
    #[test]
    fn suggestions_have_no_duplicates(text in note_strategy()) {
        let graphemes = suggest_graphemes(&text);
        let unique: HashSet<&str> = graphemes.iter().copied().collect();
        prop_assert_eq!(unique.len(), graphemes.len());
    }

    /// Property: suggestions only name symbols the resolver knows
    #[test]
    fn suggestions_are_known_symbols(text in note_strategy()) {
        let resolver = Resolver::canonical();
        let defs = suggest(resolver, &text);
        prop_assert_eq!(defs.len(), suggest_graphemes(&text).len());
        for def in defs {
            prop_assert!(resolver.index().contains(&def.grapheme));
        }
    }

    /// Property: a resolver without a symbol never suggests it
    #[test]
    fn suggestions_respect_custom_vocabulary(text in note_strategy()) {
        let mut vocab = canonical().clone();
        vocab.state.shift_remove("critical");
        let custom = Resolver::new(&vocab).unwrap();

        prop_assert!(suggest(&custom, &text).iter().all(|d| d.grapheme != "🚨"));
    }

    /// Property: matching ignores case
    #[test]
    fn suggestions_ignore_case(text in note_strategy()) {
        prop_assert_eq!(suggest_graphemes(&text), suggest_graphemes(&text.to_lowercase()));
    }
}
