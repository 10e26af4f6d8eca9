use std::collections::HashMap;

use ontoglyph_core::index::build_index;
use ontoglyph_core::vocab::{CategoryId, Vocabulary, canonical, canonical::table};
use ontoglyph_core::{Resolver, validate};

#[test]
fn graphemes_unique_and_resolvable() {
    let resolver = Resolver::canonical();
    let mut seen: HashMap<&'static str, (CategoryId, &'static str)> = HashMap::new();

    for id in CategoryId::ALL {
        for spec in table(id) {
            let resolved = resolver.resolve_symbols([spec.grapheme]);
            assert_eq!(resolved.len(), 1, "grapheme not resolvable: {}", spec.grapheme);
            assert_eq!(resolved[0].category, id, "category mismatch for {}", spec.grapheme);
            assert_eq!(resolved[0].meaning, spec.meaning, "meaning mismatch for {}", spec.grapheme);

            if let Some(prev) = seen.insert(spec.grapheme, (id, spec.key)) {
                panic!(
                    "duplicate grapheme {:?}: {}.{} and {}.{}",
                    spec.grapheme, prev.0, prev.1, id, spec.key
                );
            }
        }
    }
}

#[test]
fn keys_unique_within_category() {
    for id in CategoryId::ALL {
        let mut keys: Vec<&str> = table(id).iter().map(|s| s.key).collect();
        let total = keys.len();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), total, "duplicate key in {id}");
    }
}

#[test]
fn no_grapheme_contains_another() {
    let graphemes: Vec<&str> = CategoryId::ALL
        .iter()
        .flat_map(|&id| table(id).iter().map(|s| s.grapheme))
        .collect();

    let mut overlaps = Vec::new();
    for outer in &graphemes {
        for inner in &graphemes {
            if outer != inner && outer.contains(*inner) {
                overlaps.push(format!("{outer} contains {inner}"));
            }
        }
    }
    assert!(overlaps.is_empty(), "overlapping graphemes:\n{}", overlaps.join("\n"));
}

#[test]
fn every_symbol_finds_itself_in_its_example() {
    let resolver = Resolver::canonical();
    for (path, def) in canonical().definitions() {
        let found = resolver.find_symbols_in_text(&def.example);
        assert!(
            found.contains(&def.grapheme.as_str()),
            "example for {path} does not use {}: {:?}",
            def.grapheme,
            def.example
        );
    }
}

#[test]
fn canonical_conflicts_are_known_and_symmetric() {
    let index = build_index(canonical()).unwrap();
    for (path, def) in canonical().definitions() {
        for other in &def.conflicts_with {
            let Some(other_def) = index.get(other) else {
                panic!("{path} conflicts with unknown grapheme {other}");
            };
            assert!(
                other_def.conflicts_with.contains(&def.grapheme),
                "{path} conflicts with {other}, but not the other way round"
            );
        }
    }
}

#[test]
fn canonical_round_trips_through_json() {
    let json = serde_json::to_string(canonical()).unwrap();
    let parsed: Vocabulary = serde_json::from_str(&json).unwrap();
    assert_eq!(&parsed, canonical());

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
    for id in CategoryId::ALL {
        assert!(keys.contains(&id.as_str()), "category {id} missing from JSON");
    }
}

#[test]
fn custom_vocabulary_from_json_is_validated() {
    let json = r#"{
        "structure": {
            "first": {"grapheme": "🔍", "category": "structure", "meaning": "m",
                      "allowedContexts": ["HUMAN"], "usageLevel": "OPTIONAL", "example": "e"},
            "block": {"category": "structure", "meaning": "m", "usageLevel": "OPTIONAL", "example": "e"}
        },
        "reasoning": {
            "analyze": {"grapheme": "🔍", "category": "reasoning", "meaning": "m",
                        "allowedContexts": ["LLM"], "usageLevel": "REQUIRED", "example": "e"}
        }
    }"#;
    let vocab: Vocabulary = serde_json::from_str(json).unwrap();
    let messages: Vec<String> = validate(&vocab).into_iter().map(|d| d.message).collect();

    assert!(messages.contains(&"Missing emoji at structure.block".to_string()));
    assert!(messages.contains(&"allowedContext must be non-empty array at structure.block".to_string()));
    assert!(messages.contains(&"Duplicate emoji 🔍 at reasoning.analyze, already used at structure.first".to_string()));
    assert!(messages.contains(&"Category control must contain at least one symbol".to_string()));
    assert!(Resolver::new(&vocab).is_err());
}

#[test]
fn null_fields_are_reported_not_rejected() {
    let json = r#"{
        "structure": {
            "block": {"grapheme": null, "category": "structure", "meaning": "m",
                      "allowedContexts": null, "usageLevel": "OPTIONAL", "conflictsWith": null, "example": "e"}
        },
        "control": null
    }"#;
    let vocab: Vocabulary = serde_json::from_str(json).unwrap();
    assert!(vocab.structure["block"].grapheme.is_empty());
    assert!(vocab.structure["block"].conflicts_with.is_empty());

    let messages: Vec<String> = validate(&vocab).into_iter().map(|d| d.message).collect();
    assert_eq!(messages[0], "Missing emoji at structure.block");
    assert_eq!(messages[1], "allowedContext must be non-empty array at structure.block");
    assert!(messages.contains(&"Category control must contain at least one symbol".to_string()));
}
