//! Tool definitions advertised by `tools/list`.

use serde_json::{Value, json};

use super::protocol::Tool;

pub const RESOLVE_SYMBOLS: &str = "resolve_symbols";
pub const FIND_SYMBOLS: &str = "find_symbols";
pub const RESOLVE_TEXT: &str = "resolve_text";
pub const VALIDATE_VOCABULARY: &str = "validate_vocabulary";
pub const SUGGEST_SYMBOLS: &str = "suggest_symbols";

fn format_property() -> Value {
    json!({
        "type": "string",
        "enum": ["plain", "colored", "json", "hybrid"],
        "description": "Response format (defaults to the server's configured format)"
    })
}

fn text_schema(description: &str) -> Value {
    json!({
        "type": "object",
        "properties": {
            "text": { "type": "string", "description": description },
            "format": format_property()
        },
        "required": ["text"]
    })
}

/// Get all available tools
pub fn get_tools() -> Vec<Tool> {
    vec![
        Tool {
            name: RESOLVE_SYMBOLS.into(),
            description: "Look up symbol definitions for the given graphemes. Unknown graphemes are skipped.".into(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "symbols": {
                        "type": "array",
                        "items": { "type": "string" },
                        "description": "Graphemes to look up, in order"
                    },
                    "format": format_property()
                },
                "required": ["symbols"]
            }),
        },
        Tool {
            name: FIND_SYMBOLS.into(),
            description: "List the known symbols that occur in a text, once each.".into(),
            input_schema: text_schema("Text to scan"),
        },
        Tool {
            name: RESOLVE_TEXT.into(),
            description: "Find the known symbols in a text and return their definitions.".into(),
            input_schema: text_schema("Text to scan"),
        },
        Tool {
            name: VALIDATE_VOCABULARY.into(),
            description: "Validate a vocabulary (the server's vocabulary when none is given).".into(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "vocabulary": {
                        "type": "object",
                        "description": "Vocabulary to validate, keyed by category"
                    },
                    "format": format_property()
                }
            }),
        },
        Tool {
            name: SUGGEST_SYMBOLS.into(),
            description: "Suggest symbols for plain text using a keyword table. No scoring.".into(),
            input_schema: text_schema("Text to annotate"),
        },
    ]
}
