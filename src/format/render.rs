//! Renderers for resolver, validator and suggestion results.
//!
//! Everything here works on the core's plain return values; nothing reaches back into the resolver.

use ontoglyph_core::validate::Diagnostic;
use ontoglyph_core::vocab::{CategoryId, SymbolDefinition};
use serde::Serialize;

use super::config::{OutputFormat, RenderConfig};

// ANSI escape codes.
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const BLUE: &str = "\x1b[34m";
const MAGENTA: &str = "\x1b[35m";
const CYAN: &str = "\x1b[36m";

const NO_SYMBOLS: &str = "No symbols found.";
const VALID: &str = "Vocabulary is valid.";

fn category_color(category: CategoryId) -> &'static str {
    match category {
        CategoryId::Structure => CYAN,
        CategoryId::LegalPolicy => MAGENTA,
        CategoryId::Reasoning => BLUE,
        CategoryId::Tasks => YELLOW,
        CategoryId::Privacy => RED,
        CategoryId::Actors => GREEN,
        CategoryId::State => YELLOW,
        CategoryId::Control => RED,
    }
}

/// Render resolved definitions.
pub fn render_definitions(defs: &[&SymbolDefinition], config: &RenderConfig) -> String {
    match config.format {
        OutputFormat::Plain => definitions_text(defs, config, false),
        OutputFormat::Colored => definitions_text(defs, config, true),
        OutputFormat::Json => to_json(&defs),
        OutputFormat::Hybrid => hybrid(definitions_text(defs, config, false), to_json(&defs)),
    }
}

/// Render a list of graphemes.
pub fn render_graphemes(graphemes: &[&str], config: &RenderConfig) -> String {
    match config.format {
        OutputFormat::Plain => graphemes_text(graphemes, false),
        OutputFormat::Colored => graphemes_text(graphemes, true),
        OutputFormat::Json => to_json(&graphemes),
        OutputFormat::Hybrid => hybrid(graphemes_text(graphemes, false), to_json(&graphemes)),
    }
}

/// Render validator diagnostics.
pub fn render_diagnostics(diagnostics: &[Diagnostic], config: &RenderConfig) -> String {
    match config.format {
        OutputFormat::Plain => diagnostics_text(diagnostics, false),
        OutputFormat::Colored => diagnostics_text(diagnostics, true),
        OutputFormat::Json => to_json(&diagnostics),
        OutputFormat::Hybrid => hybrid(diagnostics_text(diagnostics, false), to_json(&diagnostics)),
    }
}

fn definitions_text(defs: &[&SymbolDefinition], config: &RenderConfig, color: bool) -> String {
    if defs.is_empty() {
        return NO_SYMBOLS.to_string();
    }

    let mut lines = Vec::with_capacity(defs.len() * 2);
    for def in defs {
        let contexts = def
            .allowed_contexts
            .iter()
            .map(|c| c.as_str())
            .collect::<Vec<_>>()
            .join(", ");

        let mut details = vec![format!("    contexts: {contexts}; usage: {}", def.usage_level)];
        if !def.conflicts_with.is_empty() {
            details.push(format!("    conflicts with: {}", def.conflicts_with.join(" ")));
        }
        if config.show_examples {
            details.push(format!("    example: {}", def.example));
        }

        if color {
            let c = category_color(def.category);
            lines.push(format!("{c}{} [{}]{RESET} {}", def.grapheme, def.category, def.meaning));
            lines.extend(details.into_iter().map(|d| format!("{DIM}{d}{RESET}")));
        } else {
            lines.push(format!("{} [{}] {}", def.grapheme, def.category, def.meaning));
            lines.extend(details);
        }
    }
    lines.join("\n")
}

fn graphemes_text(graphemes: &[&str], color: bool) -> String {
    if graphemes.is_empty() {
        return NO_SYMBOLS.to_string();
    }
    if color {
        graphemes
            .iter()
            .map(|g| format!("{BOLD}{g}{RESET}"))
            .collect::<Vec<_>>()
            .join(" ")
    } else {
        graphemes.join(" ")
    }
}

fn diagnostics_text(diagnostics: &[Diagnostic], color: bool) -> String {
    if diagnostics.is_empty() {
        return if color {
            format!("{GREEN}{VALID}{RESET}")
        } else {
            VALID.to_string()
        };
    }

    let mut lines: Vec<String> = diagnostics
        .iter()
        .map(|d| {
            if color {
                format!("{RED}{}{RESET}", d.message)
            } else {
                d.message.clone()
            }
        })
        .collect();
    lines.push(match diagnostics.len() {
        1 => "1 problem found".to_string(),
        n => format!("{n} problems found"),
    });
    lines.join("\n")
}

fn hybrid(text: String, json: String) -> String {
    format!("{text}\n\n```json\n{json}\n```")
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string_pretty(value).expect("INVARIANT: result records serialize to JSON")
}
