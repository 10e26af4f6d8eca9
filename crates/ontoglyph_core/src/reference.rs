//! Markdown reference rendering for a vocabulary.
//!
//! Used by the `generate_vocab_reference` binary to produce `docs/vocabulary/reference.md`. Kept in the library so the
//! output can be tested without touching the filesystem.

use crate::vocab::{Category, CategoryId, Context, Vocabulary};

/// Render `vocabulary` as a Markdown reference page.
///
/// ## Notes
/// - One section per category, in declared order; rows follow table order.
/// - Output always ends with exactly one newline.
pub fn render_markdown(vocabulary: &Vocabulary, version: &str) -> String {
    let mut out = String::new();
    out.push_str("# Ontoglyph vocabulary reference\n\n");
    out.push_str("!!! warning \"Generated file\"\n");
    out.push_str("    Do not edit this page by hand.\n");
    out.push_str("    If it looks wrong/outdated, regenerate it from source and commit the result.\n");
    out.push('\n');
    out.push_str("    Regenerate with: `cargo run -p ontoglyph_core --bin generate_vocab_reference`\n\n");

    out.push_str(&format!("Vocabulary version: `{version}`\n\n"));

    out.push_str("## Contents\n\n");
    for (id, _) in vocabulary.categories() {
        out.push_str(&format!("- [{}](#{})\n", id.title(), anchor(id)));
    }
    out.push('\n');

    for (id, table) in vocabulary.categories() {
        render_category(&mut out, id, table);
    }

    trim_trailing_newlines_to_at_most_two(&mut out);
    while out.ends_with("\n\n") {
        out.pop();
    }
    if !out.ends_with('\n') {
        out.push('\n');
    }
    out
}

fn render_category(out: &mut String, id: CategoryId, table: &Category) {
    start_section(out, &format!("## {}", id.title()));

    if table.is_empty() {
        out.push_str("_No symbols._\n");
        return;
    }

    out.push_str("| Key | Symbol | Meaning | Contexts | Usage | Conflicts with | Example |\n");
    out.push_str("|---|---|---|---|---|---|---|\n");

    for (key, def) in table {
        let contexts = join(def.allowed_contexts.iter().map(|c: &Context| c.as_str()));
        let conflicts = join(def.conflicts_with.iter().map(String::as_str));
        out.push_str(&format!(
            "| `{}.{}` | {} | {} | {} | {} | {} | {} |\n",
            id,
            key,
            cell(&def.grapheme),
            cell(&def.meaning),
            contexts,
            def.usage_level,
            conflicts,
            cell(&def.example),
        ));
    }
}

fn anchor(id: CategoryId) -> String {
    id.title()
        .to_lowercase()
        .chars()
        .filter_map(|c| match c {
            ' ' => Some('-'),
            c if c.is_alphanumeric() || c == '-' => Some(c),
            _ => None,
        })
        .collect()
}

fn join<'a>(items: impl Iterator<Item = &'a str>) -> String {
    items.map(cell).collect::<Vec<_>>().join(", ")
}

fn cell(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', " ")
}

fn trim_trailing_newlines_to_at_most_two(out: &mut String) {
    let mut count = 0usize;
    for ch in out.chars().rev() {
        if ch == '\n' {
            count += 1;
        } else {
            break;
        }
    }
    while count > 2 {
        out.pop();
        count -= 1;
    }
}

fn ensure_single_blank_line(out: &mut String) {
    trim_trailing_newlines_to_at_most_two(out);
    if out.is_empty() || out.ends_with("\n\n") {
        return;
    }
    if out.ends_with('\n') {
        out.push('\n');
    } else {
        out.push_str("\n\n");
    }
}

fn start_section(out: &mut String, heading: &str) {
    ensure_single_blank_line(out);
    out.push_str(heading);
    out.push_str("\n\n");
}
