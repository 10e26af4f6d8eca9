//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.
//! Output goes to the writer passed in, so tests can capture it.

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use miette::Diagnostic;
use ontoglyph_core::{CategoryId, Resolver, SymbolDefinition, Vocabulary, validate as validate_vocabulary};
use thiserror::Error;

use crate::format::{RenderConfig, render_definitions, render_diagnostics, render_graphemes};
use crate::server::ToolServer;

use super::{CliError, CliResult, ExitCode};

/// Maximum vocabulary file size (10 MB)
const MAX_VOCABULARY_SIZE: u64 = 10 * 1024 * 1024;

/// Reasons a custom vocabulary file cannot be loaded.
#[derive(Debug, Error, Diagnostic)]
pub enum VocabularyLoadError {
    #[error("cannot read vocabulary file '{}'", path.display())]
    #[diagnostic(code(ontoglyph::vocab::read))]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("vocabulary file '{}' is too large ({size} bytes, max {max} bytes)", path.display())]
    #[diagnostic(code(ontoglyph::vocab::too_large))]
    TooLarge { path: PathBuf, size: u64, max: u64 },

    #[error("vocabulary file '{}' is not valid vocabulary JSON", path.display())]
    #[diagnostic(
        code(ontoglyph::vocab::parse),
        help("Expected an object keyed by category (structure, legalPolicy, ...), each mapping symbol keys to definitions.")
    )]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Load a custom vocabulary from a JSON file.
pub fn load_vocabulary(path: &Path) -> CliResult<Vocabulary> {
    read_vocabulary(path).map_err(CliError::diagnostic)
}

fn read_vocabulary(path: &Path) -> Result<Vocabulary, VocabularyLoadError> {
    let read_err = |source| VocabularyLoadError::Read {
        path: path.to_path_buf(),
        source,
    };

    let metadata = fs::metadata(path).map_err(read_err)?;
    if metadata.len() > MAX_VOCABULARY_SIZE {
        return Err(VocabularyLoadError::TooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max: MAX_VOCABULARY_SIZE,
        });
    }

    let source = fs::read_to_string(path).map_err(read_err)?;
    let vocabulary: Vocabulary = serde_json::from_str(&source).map_err(|source| VocabularyLoadError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), symbols = vocabulary.len(), "loaded custom vocabulary");
    Ok(vocabulary)
}

/// Build a resolver for a custom vocabulary.
///
/// Index errors are rendered as diagnostics; `validate` lists every problem at once.
pub fn build_resolver(vocabulary: &Vocabulary) -> CliResult<Resolver> {
    Resolver::new(vocabulary).map_err(CliError::diagnostic)
}

/// Return `arg` if given, otherwise read all of `stdin`.
///
/// An interactive stdin is never read; with no argument that is a usage error, as is blank piped input.
pub fn read_input(arg: Option<String>, mut stdin: impl Read, interactive: bool) -> CliResult<String> {
    if let Some(text) = arg {
        return Ok(text);
    }
    if interactive {
        return Err(CliError::usage("Error: no input text (pass TEXT or pipe it on stdin)"));
    }

    let mut text = String::new();
    stdin
        .read_to_string(&mut text)
        .map_err(|e| CliError::usage(format!("Error reading stdin: {}", e)))?;
    if text.trim().is_empty() {
        return Err(CliError::usage("Error: no input text (pass TEXT or pipe it on stdin)"));
    }
    Ok(text)
}

fn emit(out: &mut dyn Write, rendered: &str) -> CliResult<()> {
    writeln!(out, "{}", rendered).map_err(|e| CliError::failure(format!("Error writing output: {}", e)))
}

/// `resolve`: definitions for every symbol occurring in `text`.
pub fn resolve(out: &mut dyn Write, resolver: &Resolver, text: &str, config: &RenderConfig) -> CliResult<ExitCode> {
    let defs = resolver.resolve_text(text);
    emit(out, &render_definitions(&defs, config))?;
    Ok(ExitCode::SUCCESS)
}

/// `find`: graphemes occurring in `text`.
pub fn find(out: &mut dyn Write, resolver: &Resolver, text: &str, config: &RenderConfig) -> CliResult<ExitCode> {
    let found = resolver.find_symbols_in_text(text);
    emit(out, &render_graphemes(&found, config))?;
    Ok(ExitCode::SUCCESS)
}

/// `lookup`: definitions for the given graphemes, skipping unknown ones.
pub fn lookup(
    out: &mut dyn Write,
    resolver: &Resolver,
    graphemes: &[String],
    config: &RenderConfig,
) -> CliResult<ExitCode> {
    let defs = resolver.resolve_symbols(graphemes);
    if defs.len() < graphemes.len() {
        tracing::debug!(requested = graphemes.len(), resolved = defs.len(), "skipped unknown graphemes");
    }
    emit(out, &render_definitions(&defs, config))?;
    Ok(ExitCode::SUCCESS)
}

/// `suggest`: keyword-based suggestions for plain text.
pub fn suggest(out: &mut dyn Write, resolver: &Resolver, text: &str, config: &RenderConfig) -> CliResult<ExitCode> {
    let defs = crate::suggest::suggest(resolver, text);
    emit(out, &render_definitions(&defs, config))?;
    Ok(ExitCode::SUCCESS)
}

/// `validate`: print diagnostics; exit 1 when there are any.
pub fn validate(out: &mut dyn Write, vocabulary: &Vocabulary, config: &RenderConfig) -> CliResult<ExitCode> {
    let diagnostics = validate_vocabulary(vocabulary);
    emit(out, &render_diagnostics(&diagnostics, config))?;
    if diagnostics.is_empty() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

/// `list`: every definition in traversal order, optionally for one category.
pub fn list(
    out: &mut dyn Write,
    vocabulary: &Vocabulary,
    category: Option<CategoryId>,
    config: &RenderConfig,
) -> CliResult<ExitCode> {
    let defs: Vec<&SymbolDefinition> = vocabulary
        .definitions()
        .filter(|(path, _)| category.is_none_or(|c| c == path.category))
        .map(|(_, def)| def)
        .collect();
    emit(out, &render_definitions(&defs, config))?;
    Ok(ExitCode::SUCCESS)
}

/// `serve`: run the tool server on stdio until stdin closes.
pub fn serve(resolver: &Resolver, vocabulary: &Vocabulary, config: &RenderConfig) -> CliResult<ExitCode> {
    let server = ToolServer::new(
        resolver,
        vocabulary,
        config.clone().with_format(crate::format::OutputFormat::Json),
    );
    server
        .run(io::stdin().lock(), io::stdout().lock())
        .map_err(|e| CliError::failure(format!("Tool server I/O error: {}", e)))?;
    Ok(ExitCode::SUCCESS)
}
