//! ontoglyph version information.
//!
//! The CLI `--version` flag and the tool server's `initialize` reply both report this value.

/// The ontoglyph version string, taken from Cargo metadata at compile time.
pub const ONTOGLYPH_VERSION: &str = env!("CARGO_PKG_VERSION");
