//! Output formatting for CLI and tool-server results.
//!
//! Four output formats are supported:
//! - plain text, one entry per line
//! - colored text (ANSI, per-category colors)
//! - JSON in the wire shape of the core's records
//! - hybrid: plain text followed by a fenced JSON block, for chat-style consumers

mod config;
mod render;

pub use config::{OutputFormat, RenderConfig};
pub use render::{render_definitions, render_diagnostics, render_graphemes};
