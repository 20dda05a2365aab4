//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;
use tomesplit_core::{BOOK_PATTERN, CHAPTER_PATTERN, CLEANUP_MARKER};

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating configuration template...");
        println!("  Output file: {}", self.output.display());

        let template = Self::generate_template();

        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the patterns to match your document's headings");
        println!("2. Validate your configuration:");
        println!("   tomesplit validate --config {}", self.output.display());
        println!("3. Use it for segmentation:");
        println!(
            "   tomesplit segment -i input.txt --config {}",
            self.output.display()
        );

        Ok(())
    }

    /// Generate template configuration content
    fn generate_template() -> String {
        format!(
            r#"# tomesplit configuration

[patterns]
# Top-level headings. The first capture group (or the whole match when the
# pattern has no group) becomes the book title. Text before the first match
# is discarded.
book = '{BOOK_PATTERN}'

# Headings inside a book, handled the same way as book headings.
chapter = '{CHAPTER_PATTERN}'

# Everything from the first match to the end of the document is dropped
# before splitting. `.` also matches line breaks here.
cleanup_marker = '{CLEANUP_MARKER}'

[output]
# Format used when --format is not given: text, json, markdown or stats
default_format = "text"

# Indent JSON output
pretty_json = true
"#
        )
    }
}
