//! Property-based tests for the resolver.
//!
//! Texts are built from a mix of canonical graphemes and arbitrary filler so that matches actually happen.

use ontoglyph_core::Resolver;
use ontoglyph_core::vocab::canonical;
use proptest::prelude::*;

fn canonical_graphemes() -> Vec<String> {
    canonical().definitions().map(|(_, d)| d.grapheme.clone()).collect()
}

fn fragment() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::sample::select(canonical_graphemes()),
        "[a-zA-Z0-9 .,:-]{0,12}",
        any::<String>(),
    ]
}

fn text() -> impl Strategy<Value = String> {
    prop::collection::vec(fragment(), 0..8).prop_map(|parts| parts.concat())
}

proptest! {
    /// resolve_text(t) == resolve_symbols(find_symbols_in_text(t))
    #[test]
    fn resolve_text_is_composition(t in text()) {
        let resolver = Resolver::canonical();
        let composed = resolver.resolve_symbols(resolver.find_symbols_in_text(&t));
        prop_assert_eq!(resolver.resolve_text(&t), composed);
    }

    /// Every reported grapheme occurs in the text, exactly once in the result.
    #[test]
    fn find_symbols_reports_each_occurring_grapheme_once(t in text()) {
        let found = Resolver::canonical().find_symbols_in_text(&t);
        for g in &found {
            prop_assert!(t.contains(*g));
            prop_assert_eq!(found.iter().filter(|x| *x == g).count(), 1);
        }
        for g in canonical_graphemes() {
            prop_assert_eq!(t.contains(g.as_str()), found.contains(&g.as_str()));
        }
    }

    /// Output length equals the number of known inputs, in input order.
    #[test]
    fn resolve_symbols_keeps_known_inputs(inputs in prop::collection::vec(fragment(), 0..10)) {
        let resolver = Resolver::canonical();
        let known: Vec<&String> = inputs.iter().filter(|g| resolver.index().contains(g)).collect();
        let resolved = resolver.resolve_symbols(&inputs);
        prop_assert_eq!(resolved.len(), known.len());
        for (def, g) in resolved.iter().zip(known) {
            prop_assert_eq!(&def.grapheme, g);
        }
    }
}
