//! Clean command implementation

use super::init_logging;
use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::FileReader;
use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use tomesplit_core::Segmenter;

/// Arguments for the clean command
#[derive(Debug, Args)]
pub struct CleanArgs {
    /// Input file (`-` for stdin)
    #[arg(short, long, value_name = "FILE", required = true)]
    pub input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Start of trailing boilerplate (overrides the configuration file)
    #[arg(long, value_name = "REGEX")]
    pub cleanup_marker: Option<String>,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl CleanArgs {
    /// Execute the clean command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, self.quiet);

        let config = CliConfig::load_or_default(self.config.as_deref())?;
        let mut patterns = config.patterns;
        if let Some(marker) = &self.cleanup_marker {
            patterns = patterns.with_cleanup_marker(marker.as_str());
        }
        let segmenter = Segmenter::new(patterns);

        let text = FileReader::read_text(&self.input)?;
        let cleaned = segmenter
            .clean(&text)
            .map_err(|e| CliError::SegmentationError(e.to_string()))?;

        log::info!(
            "Removed {} of {} bytes from {}",
            text.len() - cleaned.len(),
            text.len(),
            self.input.display()
        );

        match &self.output {
            Some(path) => fs::write(path, cleaned)
                .with_context(|| format!("Failed to write to {}", path.display()))?,
            None => {
                let mut stdout = io::stdout().lock();
                stdout.write_all(cleaned.as_bytes())?;
                stdout.flush()?;
            }
        }

        Ok(())
    }
}
