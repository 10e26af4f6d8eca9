//! Output configuration for rendered results.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// How results are rendered for humans or machines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain text, one entry per line
    #[default]
    Plain,
    /// Plain text with ANSI colors per category
    Colored,
    /// Pretty-printed JSON of the record shapes
    Json,
    /// Plain summary followed by a fenced JSON block
    Hybrid,
}

/// Rendering configuration
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Output format
    pub format: OutputFormat,
    /// Include each symbol's example line in text output
    pub show_examples: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Plain,
            show_examples: false,
        }
    }
}

impl RenderConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the output format
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Show or hide example lines
    pub fn with_examples(mut self, show: bool) -> Self {
        self.show_examples = show;
        self
    }

    /// Downgrade `Colored` to `Plain` (for `NO_COLOR` or non-terminal output).
    pub fn without_color(mut self) -> Self {
        if self.format == OutputFormat::Colored {
            self.format = OutputFormat::Plain;
        }
        self
    }
}
