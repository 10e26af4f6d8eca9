//! Keyword-based symbol suggestions.
//!
//! A static table maps case-insensitive patterns to graphemes. Suggestions are not scored or ranked: every entry
//! whose pattern matches contributes its grapheme once, in table order. Only graphemes the resolver knows are
//! returned, so a custom vocabulary without (say) `🚨` never gets it suggested.

use std::sync::OnceLock;

use ontoglyph_core::{Resolver, SymbolDefinition};
use regex::{Regex, RegexBuilder};

/// Pattern -> grapheme table, grouped in vocabulary category order.
const KEYWORDS: &[(&str, &str)] = &[
    // structure
    (r"\b\d{4}-\d{2}-\d{2}\b", "📌"),
    (r"\b(summary|in short|overall)\b", "🧾"),
    (r"\b(see|refer to|ref\.)\s", "🔗"),
    (r#"["“]"#, "💬"),
    // legal & policy
    (r"\b(law|statute|legal(ly)?|section \d+)\b", "⚖️"),
    (r"\b(polic(y|ies)|procedure)\b", "📜"),
    (r"\b(court|tribunal|judge)\b", "🏛️"),
    (r"\b(consent(ed)?|signed)\b", "✍️"),
    (r"\b(refused|declined|withdr(ew|awn))\b", "🙅"),
    (r"\b(deadline|due (by|within|on))\b", "📅"),
    (r"\b(evidence|photos?|photographs?|attached)\b", "📎"),
    // reasoning
    (r"\b(analy[sz](e|ed|is)|examin(e|ed|ation)|compared?)\b", "🔍"),
    (r"\b(because|therefore|suggests|implies)\b", "🧠"),
    (r"\b(maybe|might|possibly|perhaps)\b", "💡"),
    (r"\bassum(e|ed|ing|ption)\b", "🤔"),
    (r"\?", "❓"),
    // tasks
    (r"\b(todo|to do|needs? to)\b", "🔲"),
    (r"\b(done|completed|finished)\b", "✅"),
    (r"\b(blocked|on hold|cannot proceed)\b", "🚧"),
    (r"\b(follow[- ]up|weekly|recurring)\b", "🔁"),
    // privacy
    (r"\b(confidential|private|secret)\b", "🔒"),
    (r"\bredact(ed|ion)?\b", "⬛"),
    (r"\b(date of birth|dob|passport|home address)\b", "🪪"),
    // actors
    (r"\b(parent|mother|father|neighbour|caller)\b", "👤"),
    (r"\b(family|household|siblings)\b", "👥"),
    (r"\b(child|son|daughter|infant|baby)\b", "🧒"),
    (r"\b(school|police|council|hospital|agency)\b", "🏢"),
    // state
    (r"\b(pending|waiting|awaiting|investigation)\b", "⏳"),
    (r"\b(risk|concerns?|concerned|worr(y|ied))\b", "⚠️"),
    (r"\b(urgent|emergency|immediately|missing)\b", "🚨"),
    (r"\b(resolved|closed|settled)\b", "🟢"),
    (r"\bescalat(e|ed|ion)\b", "🔺"),
    // control
    (r"\b(stop|halt|do not)\b", "🛑"),
    (r"\bapproved?\b", "👍"),
    (r"\b(review|double-check)\b", "👀"),
];

fn compiled() -> &'static [(Regex, &'static str)] {
    static TABLE: OnceLock<Vec<(Regex, &'static str)>> = OnceLock::new();
    TABLE.get_or_init(|| {
        KEYWORDS
            .iter()
            .filter_map(|&(pattern, grapheme)| {
                match RegexBuilder::new(pattern).case_insensitive(true).build() {
                    Ok(re) => Some((re, grapheme)),
                    Err(e) => {
                        tracing::warn!(pattern, error = %e, "skipping invalid suggestion pattern");
                        None
                    }
                }
            })
            .collect()
    })
}

/// Return the graphemes whose keywords occur in `text`, once each, in table order.
pub fn suggest_graphemes(text: &str) -> Vec<&'static str> {
    let mut out: Vec<&'static str> = Vec::new();
    for (re, grapheme) in compiled() {
        let grapheme = *grapheme;
        if !out.contains(&grapheme) && re.is_match(text) {
            out.push(grapheme);
        }
    }
    out
}

/// Suggest definitions for `text`, restricted to symbols known to `resolver`.
pub fn suggest<'r>(resolver: &'r Resolver, text: &str) -> Vec<&'r SymbolDefinition> {
    resolver.resolve_symbols(suggest_graphemes(text))
}
