//! Output formatting module

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;
use tomesplit_core::Segmentation;

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format and output the segmentation of one document
    fn format_document(&mut self, source: &str, books: Segmentation) -> Result<()>;

    /// Finalize output (e.g., write the collected JSON)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod stats;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use stats::StatsFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Outline of book and chapter titles
    #[default]
    Text,
    /// Nested JSON object: book title → chapter title → text
    Json,
    /// Markdown document with one heading per book and chapter
    Markdown,
    /// Chapter counts per book
    Stats,
}

impl OutputFormat {
    /// All formats, in the order they are listed
    pub const ALL: [OutputFormat; 4] = [
        OutputFormat::Text,
        OutputFormat::Json,
        OutputFormat::Markdown,
        OutputFormat::Stats,
    ];

    /// Name as accepted on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "markdown",
            OutputFormat::Stats => "stats",
        }
    }

    /// One-line description
    pub fn description(&self) -> &'static str {
        match self {
            OutputFormat::Text => "Outline of book and chapter titles with word counts",
            OutputFormat::Json => "Nested object: book title -> chapter title -> chapter text",
            OutputFormat::Markdown => "Full text with a heading per book and chapter",
            OutputFormat::Stats => "Chapter counts per book and totals",
        }
    }
}

/// Build the formatter for `format`.
///
/// `show_source` makes the line-oriented formats label each document with
/// its source, which matters once several files go to the same output.
pub fn create_formatter<'w>(
    format: OutputFormat,
    writer: Box<dyn Write + 'w>,
    show_source: bool,
    pretty_json: bool,
) -> Box<dyn OutputFormatter + 'w> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer, show_source)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer, pretty_json)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
        OutputFormat::Stats => Box::new(StatsFormatter::new(writer, show_source)),
    }
}
