//! CLI module for ontoglyph
//!
//! ## Commands
//!
//! - `resolve [TEXT]` - Resolve every known symbol occurring in the text
//! - `find [TEXT]` - List the graphemes occurring in the text
//! - `lookup <GRAPHEME>...` - Look up definitions for specific graphemes
//! - `validate` - Check the vocabulary for structural problems
//! - `suggest [TEXT]` - Suggest symbols for plain text
//! - `list [--category NAME]` - Print the vocabulary
//! - `serve` - Run the JSON-RPC tool server on stdio
//!
//! Text arguments fall back to piped stdin when omitted; an interactive terminal is never read.
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::env;
use std::fmt;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use ontoglyph_core::vocab::canonical;
use ontoglyph_core::{CategoryId, Resolver, Vocabulary};

use crate::format::{OutputFormat, RenderConfig};
use crate::version::ONTOGLYPH_VERSION;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
    /// Bad invocation or unreadable input.
    pub const USAGE: ExitCode = ExitCode(2);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }

    /// Create a usage error (exit code 2).
    pub fn usage(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::USAGE)
    }

    /// Render a miette diagnostic as the error message.
    pub fn diagnostic(err: impl miette::Diagnostic + Send + Sync + 'static) -> Self {
        Self::failure(format!("{:?}", miette::Report::new(err)))
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Emoji vocabulary for annotating case notes
#[derive(Parser, Debug)]
#[command(name = "ontoglyph")]
#[command(version = ONTOGLYPH_VERSION)]
#[command(about = "Resolve, validate and suggest emoji annotations for case notes", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Plain)]
    pub format: OutputFormat,

    /// Use a custom vocabulary (JSON) instead of the built-in one
    #[arg(long, global = true, value_name = "FILE")]
    pub vocab: Option<PathBuf>,

    /// Include usage examples in text output
    #[arg(long, global = true)]
    pub examples: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve every known symbol occurring in the text
    Resolve {
        /// Text to scan (reads piped stdin when omitted)
        #[arg(value_name = "TEXT")]
        text: Option<String>,
    },

    /// List the graphemes occurring in the text
    Find {
        /// Text to scan (reads piped stdin when omitted)
        #[arg(value_name = "TEXT")]
        text: Option<String>,
    },

    /// Look up definitions for specific graphemes
    Lookup {
        /// Graphemes to look up; unknown ones are skipped
        #[arg(value_name = "GRAPHEME", required = true)]
        graphemes: Vec<String>,
    },

    /// Check the vocabulary for structural problems
    Validate,

    /// Suggest symbols for plain text
    Suggest {
        /// Text to scan (reads piped stdin when omitted)
        #[arg(value_name = "TEXT")]
        text: Option<String>,
    },

    /// Print the vocabulary
    List {
        /// Only print one category (for example `legalPolicy`)
        #[arg(long, value_name = "NAME", value_parser = parse_category)]
        category: Option<CategoryId>,
    },

    /// Run the JSON-RPC tool server on stdio
    Serve,
}

fn parse_category(name: &str) -> Result<CategoryId, String> {
    CategoryId::parse(name).ok_or_else(|| {
        let known: Vec<&str> = CategoryId::ALL.iter().map(|c| c.as_str()).collect();
        format!("unknown category `{name}` (expected one of: {})", known.join(", "))
    })
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Build the render configuration from global flags and the environment.
fn render_config(cli: &Cli) -> RenderConfig {
    let config = RenderConfig::new().with_format(cli.format).with_examples(cli.examples);
    if env::var_os("NO_COLOR").is_some() || !io::stdout().is_terminal() {
        config.without_color()
    } else {
        config
    }
}

/// Execute the CLI command and return result.
///
/// `validate` and `list` read the vocabulary directly, so they still work on vocabularies that cannot be indexed.
/// Every other command builds a resolver first.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    let config = render_config(&cli);
    let custom = cli.vocab.as_deref().map(commands::load_vocabulary).transpose()?;
    let vocabulary = custom.as_ref().unwrap_or_else(|| canonical());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut slot = None;

    match cli.command {
        Command::Validate => commands::validate(&mut out, vocabulary, &config),
        Command::List { category } => commands::list(&mut out, vocabulary, category, &config),
        Command::Resolve { text } => {
            let resolver = resolver_for(custom.as_ref(), &mut slot)?;
            commands::resolve(&mut out, resolver, &text_or_stdin(text)?, &config)
        }
        Command::Find { text } => {
            let resolver = resolver_for(custom.as_ref(), &mut slot)?;
            commands::find(&mut out, resolver, &text_or_stdin(text)?, &config)
        }
        Command::Lookup { graphemes } => {
            let resolver = resolver_for(custom.as_ref(), &mut slot)?;
            commands::lookup(&mut out, resolver, &graphemes, &config)
        }
        Command::Suggest { text } => {
            let resolver = resolver_for(custom.as_ref(), &mut slot)?;
            commands::suggest(&mut out, resolver, &text_or_stdin(text)?, &config)
        }
        Command::Serve => {
            drop(out);
            let resolver = resolver_for(custom.as_ref(), &mut slot)?;
            commands::serve(resolver, vocabulary, &config)
        }
    }
}

/// The canonical resolver, or one built into `slot` for a custom vocabulary.
fn resolver_for<'a>(custom: Option<&Vocabulary>, slot: &'a mut Option<Resolver>) -> CliResult<&'a Resolver> {
    match custom {
        Some(vocab) => {
            let resolver: &'a Resolver = slot.insert(commands::build_resolver(vocab)?);
            Ok(resolver)
        }
        None => Ok(Resolver::canonical()),
    }
}

/// The text argument, or piped stdin when it is omitted.
fn text_or_stdin(text: Option<String>) -> CliResult<String> {
    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    commands::read_input(text, stdin.lock(), interactive)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_resolve() {
        let cli = Cli::try_parse_from(["ontoglyph", "resolve", "📌 fact"]).unwrap();
        if let Command::Resolve { text } = cli.command {
            assert_eq!(text.as_deref(), Some("📌 fact"));
        } else {
            panic!("Expected Resolve command");
        }
        assert_eq!(cli.format, OutputFormat::Plain);
    }

    #[test]
    fn test_cli_parse_resolve_without_text() {
        let cli = Cli::try_parse_from(["ontoglyph", "resolve"]).unwrap();
        assert!(matches!(cli.command, Command::Resolve { text: None }));
    }

    #[test]
    fn test_cli_parse_lookup_requires_graphemes() {
        assert!(Cli::try_parse_from(["ontoglyph", "lookup"]).is_err());

        let cli = Cli::try_parse_from(["ontoglyph", "lookup", "🔍", "🧠"]).unwrap();
        if let Command::Lookup { graphemes } = cli.command {
            assert_eq!(graphemes, ["🔍", "🧠"]);
        } else {
            panic!("Expected Lookup command");
        }
    }

    #[test]
    fn test_cli_parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "ontoglyph",
            "validate",
            "--vocab",
            "custom.json",
            "--format",
            "json",
        ])
        .unwrap();
        assert!(matches!(cli.command, Command::Validate));
        assert_eq!(cli.vocab, Some(PathBuf::from("custom.json")));
        assert_eq!(cli.format, OutputFormat::Json);
    }

    #[test]
    fn test_cli_parse_list_category() {
        let cli = Cli::try_parse_from(["ontoglyph", "list", "--category", "legalPolicy"]).unwrap();
        if let Command::List { category } = cli.command {
            assert_eq!(category, Some(CategoryId::LegalPolicy));
        } else {
            panic!("Expected List command");
        }
    }

    #[test]
    fn test_cli_parse_unknown_category() {
        let err = Cli::try_parse_from(["ontoglyph", "list", "--category", "emotions"]).unwrap_err();
        assert!(err.to_string().contains("unknown category `emotions`"));
    }

    #[test]
    fn test_cli_parse_unknown_format() {
        assert!(Cli::try_parse_from(["ontoglyph", "find", "x", "--format", "xml"]).is_err());
    }

    #[test]
    fn test_cli_parse_serve_with_examples() {
        let cli = Cli::try_parse_from(["ontoglyph", "--examples", "serve"]).unwrap();
        assert!(matches!(cli.command, Command::Serve));
        assert!(cli.examples);
    }

    #[test]
    fn test_text_help_mentions_piped_stdin() {
        use clap::CommandFactory;

        let mut cmd = Cli::command();
        let help = cmd.find_subcommand_mut("find").unwrap().render_help().to_string();
        assert!(help.contains("reads piped stdin when omitted"));
    }

    #[test]
    fn test_cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["ontoglyph"]).is_err());
    }
}
