//! Validate command implementation

use crate::config::CliConfig;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the configuration file to validate
    #[arg(short, long, value_name = "FILE", required = true)]
    pub config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating configuration: {}", self.config.display());

        let config = match CliConfig::load(&self.config) {
            Ok(config) => config,
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e}");
                return Err(anyhow::anyhow!("Validation failed: {}", e));
            }
        };

        match config.patterns.validate() {
            Ok(()) => {
                println!("✓ Configuration is valid!");
                println!("  Book pattern:    {}", config.patterns.book);
                println!("  Chapter pattern: {}", config.patterns.chapter);
                println!("  Cleanup marker:  {}", config.patterns.cleanup_marker);
                println!("  Default format:  {}", config.output.default_format.as_str());
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e}");
                Err(anyhow::anyhow!("Validation failed: {}", e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn validate(toml_content: &str) -> Result<()> {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", toml_content).unwrap();

        ValidateArgs {
            config: temp_file.path().to_path_buf(),
        }
        .execute()
    }

    #[test]
    fn test_validate_args_debug() {
        let args = ValidateArgs {
            config: PathBuf::from("tomesplit.toml"),
        };

        let debug_str = format!("{:?}", args);
        assert!(debug_str.contains("ValidateArgs"));
        assert!(debug_str.contains("tomesplit.toml"));
    }

    #[test]
    fn test_validate_valid_config() {
        let result = validate(
            r#"
[patterns]
book = '(PART\s+\w+)'
chapter = '(Chapter\s+\d+)'
cleanup_marker = 'THE END'

[output]
default_format = "markdown"
"#,
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_validate_empty_config_uses_defaults() {
        assert!(validate("").is_ok());
    }

    #[test]
    fn test_validate_invalid_pattern() {
        let error = validate("[patterns]\nchapter = '(CHAPTER'\n").unwrap_err();
        assert!(error.to_string().contains("invalid chapter pattern"));
    }

    #[test]
    fn test_validate_malformed_toml() {
        assert!(validate("[patterns\nbook = ").is_err());
    }
}
