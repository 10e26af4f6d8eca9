#![forbid(unsafe_code)]
//! ontoglyph: an emoji vocabulary for annotating case notes.
//!
//! The vocabulary, index, resolver and validator live in [`ontoglyph_core`]. This crate adds the outer surfaces:
//! output formatting, the keyword suggestion heuristic, the JSON-RPC tool server and the CLI.
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **True invariants**: If a panic represents a logic error, use `.expect("INVARIANT: reason")` with a clear
//!   explanation.

pub mod cli;
pub mod format;
pub mod server;
pub mod suggest;
pub mod version;

pub use format::{OutputFormat, RenderConfig};
pub use ontoglyph_core::{Diagnostic, Resolver, SymbolDefinition, Vocabulary};
pub use server::ToolServer;
