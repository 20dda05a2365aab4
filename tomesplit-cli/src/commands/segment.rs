//! Segment command implementation

use super::{init_logging, PatternArgs};
use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{create_formatter, OutputFormat};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use tomesplit_core::Segmenter;

/// Arguments for the segment command
#[derive(Debug, Args)]
pub struct SegmentArgs {
    /// Input files or patterns (supports glob, `-` for stdin)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout). Written only when every input succeeds
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from the configuration file, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub patterns: PatternArgs,

    /// Suppress progress and log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl SegmentArgs {
    /// Execute the segment command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, self.quiet);

        log::info!("Starting segmentation");
        log::debug!("Arguments: {:?}", self);

        let config = CliConfig::load_or_default(self.config.as_deref())?;
        let segmenter = Segmenter::new(self.patterns.apply(config.patterns));
        let format = self.format.unwrap_or(config.output.default_format);

        let files = resolve_patterns(&self.input)?;
        log::info!("Segmenting {} file(s) as {}", files.len(), format.as_str());

        // File output is buffered so a failing input leaves no partial file.
        let mut buffer = Vec::new();
        {
            let writer: Box<dyn Write + '_> = match &self.output {
                Some(_) => Box::new(&mut buffer),
                None => Box::new(io::stdout().lock()),
            };
            let mut formatter =
                create_formatter(format, writer, files.len() > 1, config.output.pretty_json);

            let mut progress = ProgressReporter::new(self.quiet || files.len() < 2);
            progress.init_files(files.len() as u64);

            for path in &files {
                let source = path.display().to_string();
                let text = FileReader::read_text(path)?;

                let books = segmenter
                    .segment(&text)
                    .map_err(|e| CliError::SegmentationError(format!("{source}: {e}")))?;

                let stats = books.stats();
                log::info!(
                    "{}: {} books, {} chapters",
                    source,
                    stats.book_count,
                    stats.chapter_count
                );
                if stats.book_count == 0 {
                    log::warn!("{source}: no book headings matched");
                }

                formatter.format_document(&source, books)?;
                progress.file_completed(&source);
            }

            progress.finish();
            formatter.finish()?;
        }

        if let Some(path) = &self.output {
            fs::write(path, &buffer)
                .with_context(|| format!("Failed to write output file: {}", path.display()))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const NOVEL: &str = "Contents\nBOOK ONE: 1805\n\nCHAPTER I\n\nWell, Prince.\n\n\
                         CHAPTER II\n\nAnna Pavlovna.\n\n\
                         *** END OF THE PROJECT GUTENBERG EBOOK WAR AND PEACE ***\nlicense\n";

    fn args(input: Vec<String>, output: PathBuf, format: OutputFormat) -> SegmentArgs {
        SegmentArgs {
            input,
            output: Some(output),
            format: Some(format),
            config: None,
            patterns: PatternArgs::default(),
            quiet: true,
            verbose: 0,
        }
    }

    #[test]
    fn test_execute_writes_json() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("novel.txt");
        let output = temp_dir.path().join("out.json");
        fs::write(&input, NOVEL).unwrap();

        args(
            vec![input.display().to_string()],
            output.clone(),
            OutputFormat::Json,
        )
        .execute()
        .unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(value["BOOK ONE:"]["CHAPTER II"], "Anna Pavlovna.");
    }

    #[test]
    fn test_execute_uses_config_patterns() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("play.txt");
        let config = temp_dir.path().join("tomesplit.toml");
        let output = temp_dir.path().join("out.txt");
        fs::write(&input, "ACT 1\nSCENE 1\nEnter ghost.\nSCENE 2\nExeunt.\n").unwrap();
        fs::write(
            &config,
            "[patterns]\nbook = '(ACT\\s+\\d+)'\nchapter = '(SCENE\\s+\\d+)'\n\n[output]\ndefault_format = \"stats\"\n",
        )
        .unwrap();

        let mut segment = args(vec![input.display().to_string()], output.clone(), OutputFormat::Text);
        segment.format = None;
        segment.config = Some(config);
        segment.execute().unwrap();

        let content = fs::read_to_string(&output).unwrap();
        assert!(content.contains("ACT 1"));
        assert!(content.contains("Total: 1 books, 2 chapters"));
    }

    #[test]
    fn test_execute_invalid_pattern_fails() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("novel.txt");
        fs::write(&input, NOVEL).unwrap();

        let mut segment = args(
            vec![input.display().to_string()],
            temp_dir.path().join("out.txt"),
            OutputFormat::Text,
        );
        segment.patterns.book_pattern = Some("(BOOK".to_string());

        let error = segment.execute().unwrap_err();
        assert!(matches!(
            error.downcast_ref::<CliError>(),
            Some(CliError::SegmentationError(_))
        ));
        assert!(error.to_string().contains("invalid book pattern"));
    }

    #[test]
    fn test_execute_failure_leaves_no_output_file() {
        let temp_dir = TempDir::new().unwrap();
        let good = temp_dir.path().join("a.txt");
        let bad = temp_dir.path().join("b.txt");
        let output = temp_dir.path().join("out.txt");
        fs::write(&good, NOVEL).unwrap();
        fs::write(&bad, [0xff, 0xfe, 0x00]).unwrap();

        let segment = args(
            vec![good.display().to_string(), bad.display().to_string()],
            output.clone(),
            OutputFormat::Text,
        );

        assert!(segment.execute().is_err());
        assert!(!output.exists());
    }
}
