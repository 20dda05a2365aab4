//! CLI command implementations

use crate::output::OutputFormat;
use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tomesplit_core::PatternSet;

pub mod clean;
pub mod generate_config;
pub mod segment;
pub mod validate;

/// Split long plain-text documents into books and chapters
#[derive(Debug, Parser)]
#[command(name = "tomesplit", version, about, long_about = None)]
pub struct Cli {
    /// Command to run
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        self.command.execute()
    }
}

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Split documents into books and chapters
    Segment(segment::SegmentArgs),

    /// Strip the trailing boilerplate from a document
    Clean(clean::CleanArgs),

    /// Check that a configuration file loads and its patterns compile
    Validate(validate::ValidateArgs),

    /// Write a configuration template holding the default patterns
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

impl Commands {
    /// Execute the command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Segment(args) => args.execute(),
            Commands::Clean(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::List { subcommand } => subcommand.execute(),
        }
    }
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List available output formats
    Formats,

    /// Show the built-in patterns
    Patterns,
}

impl ListCommands {
    /// Execute the list command
    pub fn execute(&self) -> Result<()> {
        match self {
            ListCommands::Formats => {
                for format in OutputFormat::ALL {
                    println!("{:<10} {}", format.as_str(), format.description());
                }
            }
            ListCommands::Patterns => {
                let patterns = PatternSet::default();
                println!("book:           {}", patterns.book);
                println!("chapter:        {}", patterns.chapter);
                println!("cleanup_marker: {}", patterns.cleanup_marker);
            }
        }
        Ok(())
    }
}

/// Pattern overrides shared by the commands that segment or clean
#[derive(Debug, Default, Args)]
pub struct PatternArgs {
    /// Book heading pattern (overrides the configuration file)
    #[arg(long, value_name = "REGEX")]
    pub book_pattern: Option<String>,

    /// Chapter heading pattern (overrides the configuration file)
    #[arg(long, value_name = "REGEX")]
    pub chapter_pattern: Option<String>,

    /// Start of trailing boilerplate (overrides the configuration file)
    #[arg(long, value_name = "REGEX")]
    pub cleanup_marker: Option<String>,
}

impl PatternArgs {
    /// Apply the overrides given on the command line
    pub fn apply(&self, mut patterns: PatternSet) -> PatternSet {
        if let Some(book) = &self.book_pattern {
            patterns = patterns.with_book(book.as_str());
        }
        if let Some(chapter) = &self.chapter_pattern {
            patterns = patterns.with_chapter(chapter.as_str());
        }
        if let Some(marker) = &self.cleanup_marker {
            patterns = patterns.with_cleanup_marker(marker.as_str());
        }
        patterns
    }
}

/// Initialize logging based on verbosity level
pub(crate) fn init_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    // A logger may already be installed when commands run inside tests.
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .try_init();
}
