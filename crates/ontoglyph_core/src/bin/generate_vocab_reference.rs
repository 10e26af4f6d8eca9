//! Generate the Markdown vocabulary reference from the canonical tables.
//!
//! Writes `docs/vocabulary/reference.md` at the workspace root.
//!
//! ## Notes
//! - The generated file is meant to be checked into the repo and treated as a derived artifact.
//! - Do not edit the generated Markdown by hand; update `ontoglyph_core::vocab::canonical` instead.
//!
//! ## Examples
//! Run from the workspace root:
//! ```bash
//! cargo run -p ontoglyph_core --bin generate_vocab_reference
//! ```
//!
//! ## Panics
//! - If the workspace root cannot be resolved.
//! - If the output file cannot be written.

use std::fs;
use std::path::PathBuf;

use ontoglyph_core::reference::render_markdown;
use ontoglyph_core::vocab::{VOCABULARY_VERSION, canonical};

fn main() {
    let root = workspace_root();

    let out_dir = root.join("docs/vocabulary");
    fs::create_dir_all(&out_dir).expect("create docs/vocabulary/");

    let path = out_dir.join("reference.md");
    fs::write(&path, render_markdown(canonical(), VOCABULARY_VERSION)).expect("write reference.md");
    println!("wrote {}", path.display());
}

fn workspace_root() -> PathBuf {
    // crates/ontoglyph_core -> crates -> workspace root
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .and_then(|p| p.parent())
        .map(|p| p.to_path_buf())
        .expect("workspace root (two levels above crates/ontoglyph_core)")
}
