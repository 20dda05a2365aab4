//! Delimiter and cleanup-marker pattern configuration
//!
//! A [`PatternSet`] holds the three pattern sources the segmenter works with.
//! Patterns are stored as strings and only compiled when an operation needs
//! them, so building a set never fails.

use crate::error::{Error, PatternKind, Result};
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Numbered `BOOK <word>:` headings plus the two epilogue headings of the
/// Project Gutenberg edition of *War and Peace*.
pub const BOOK_PATTERN: &str = r"(BOOK\s+\w+:.*?|FIRST\s+EPILOGUE:.*?|SECOND\s+EPILOGUE.*)";

/// `CHAPTER <word>` headings.
pub const CHAPTER_PATTERN: &str = r"(CHAPTER\s+\w+)";

/// Start of the Project Gutenberg license trailer.
pub const CLEANUP_MARKER: &str =
    r"\*\*\* END OF THE PROJECT GUTENBERG EBOOK WAR AND PEACE \*\*\*";

/// The three patterns driving segmentation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PatternSet {
    /// Capturing pattern matching top-level headings
    pub book: String,
    /// Capturing pattern matching second-level headings
    pub chapter: String,
    /// Pattern marking the start of trailing boilerplate
    pub cleanup_marker: String,
}

impl Default for PatternSet {
    fn default() -> Self {
        Self {
            book: BOOK_PATTERN.to_string(),
            chapter: CHAPTER_PATTERN.to_string(),
            cleanup_marker: CLEANUP_MARKER.to_string(),
        }
    }
}

/// On-disk layout: patterns live under a `[patterns]` table so they can
/// share a file with other settings.
#[derive(Debug, Default, Deserialize)]
struct PatternFile {
    #[serde(default)]
    patterns: PatternSet,
}

impl PatternSet {
    /// Create a pattern set from explicit sources
    pub fn new(
        book: impl Into<String>,
        chapter: impl Into<String>,
        cleanup_marker: impl Into<String>,
    ) -> Self {
        Self {
            book: book.into(),
            chapter: chapter.into(),
            cleanup_marker: cleanup_marker.into(),
        }
    }

    /// Replace the book delimiter pattern
    pub fn with_book(mut self, pattern: impl Into<String>) -> Self {
        self.book = pattern.into();
        self
    }

    /// Replace the chapter delimiter pattern
    pub fn with_chapter(mut self, pattern: impl Into<String>) -> Self {
        self.chapter = pattern.into();
        self
    }

    /// Replace the cleanup marker pattern
    pub fn with_cleanup_marker(mut self, pattern: impl Into<String>) -> Self {
        self.cleanup_marker = pattern.into();
        self
    }

    /// Source of the pattern of the given kind
    pub fn get(&self, kind: PatternKind) -> &str {
        match kind {
            PatternKind::Book => &self.book,
            PatternKind::Chapter => &self.chapter,
            PatternKind::CleanupMarker => &self.cleanup_marker,
        }
    }

    /// Parse the `[patterns]` table of a TOML document.
    ///
    /// A missing table or missing keys fall back to the defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: PatternFile = toml::from_str(content)?;
        Ok(file.patterns)
    }

    /// Load the `[patterns]` table from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content).map_err(|e| match e {
            Error::Config(msg) => Error::Config(format!("{}: {msg}", path.display())),
            other => other,
        })
    }

    /// Compile all three patterns, reporting the first one that fails
    pub fn validate(&self) -> Result<()> {
        for kind in [
            PatternKind::Book,
            PatternKind::Chapter,
            PatternKind::CleanupMarker,
        ] {
            compile(kind, self.get(kind))?;
        }
        Ok(())
    }
}

/// Compile a pattern the way the segmenter uses it.
///
/// The cleanup marker is matched with `.` spanning newlines; the delimiter
/// patterns use the engine defaults.
pub(crate) fn build_regex(
    kind: PatternKind,
    pattern: &str,
) -> std::result::Result<Regex, regex::Error> {
    RegexBuilder::new(pattern)
        .dot_matches_new_line(kind == PatternKind::CleanupMarker)
        .build()
}

pub(crate) fn compile(kind: PatternKind, pattern: &str) -> Result<Regex> {
    build_regex(kind, pattern).map_err(|reason| Error::InvalidPattern {
        kind,
        pattern: pattern.to_string(),
        reason,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let patterns = PatternSet::default();
        assert_eq!(patterns.book, BOOK_PATTERN);
        assert_eq!(patterns.chapter, CHAPTER_PATTERN);
        assert_eq!(patterns.cleanup_marker, CLEANUP_MARKER);
        assert!(patterns.validate().is_ok());
    }

    #[test]
    fn test_overrides_are_independent() {
        let patterns = PatternSet::default().with_chapter(r"(Section \d+)");
        assert_eq!(patterns.book, BOOK_PATTERN);
        assert_eq!(patterns.chapter, r"(Section \d+)");
        assert_eq!(patterns.cleanup_marker, CLEANUP_MARKER);
    }

    #[test]
    fn test_invalid_pattern_is_stored() {
        let patterns = PatternSet::default().with_book("(BOOK");
        assert_eq!(patterns.get(PatternKind::Book), "(BOOK");

        match patterns.validate() {
            Err(Error::InvalidPattern { kind, pattern, .. }) => {
                assert_eq!(kind, PatternKind::Book);
                assert_eq!(pattern, "(BOOK");
            }
            other => panic!("Expected InvalidPattern, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_reports_marker() {
        let patterns = PatternSet::default().with_cleanup_marker("[end");
        match patterns.validate() {
            Err(Error::InvalidPattern { kind, .. }) => assert_eq!(kind, PatternKind::CleanupMarker),
            other => panic!("Expected InvalidPattern, got {other:?}"),
        }
    }

    #[test]
    fn test_from_toml_partial() {
        let toml = r#"
[patterns]
chapter = '(Section\s+\d+)'
"#;
        let patterns = PatternSet::from_toml_str(toml).unwrap();
        assert_eq!(patterns.book, BOOK_PATTERN);
        assert_eq!(patterns.chapter, r"(Section\s+\d+)");
    }

    #[test]
    fn test_from_toml_unknown_key_rejected() {
        let result = PatternSet::from_toml_str("[patterns]\nchapter_pattern = '(Kapitel \\d+)'\n");
        match result {
            Err(Error::Config(msg)) => assert!(msg.contains("chapter_pattern")),
            other => panic!("Expected Config error, got {other:?}"),
        }
    }

    #[test]
    fn test_from_toml_without_table() {
        let patterns = PatternSet::from_toml_str("[output]\npretty_json = true\n").unwrap();
        assert_eq!(patterns, PatternSet::default());
    }

    #[test]
    fn test_from_toml_malformed() {
        assert!(matches!(
            PatternSet::from_toml_str("[patterns\nbook = 1"),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(
            temp_file,
            "[patterns]\nbook = '(PART\\s+\\d+)'\ncleanup_marker = 'THE END'\n"
        )
        .unwrap();

        let patterns = PatternSet::from_file(temp_file.path()).unwrap();
        assert_eq!(patterns.book, r"(PART\s+\d+)");
        assert_eq!(patterns.chapter, CHAPTER_PATTERN);
        assert_eq!(patterns.cleanup_marker, "THE END");
    }

    #[test]
    fn test_from_missing_file() {
        assert!(matches!(
            PatternSet::from_file("/nonexistent/patterns.toml"),
            Err(Error::Io(_))
        ));
    }

    #[test]
    fn test_marker_dot_spans_lines() {
        let marker = build_regex(PatternKind::CleanupMarker, "END.OF").unwrap();
        assert!(marker.is_match("END\nOF"));

        let chapter = build_regex(PatternKind::Chapter, "END.OF").unwrap();
        assert!(!chapter.is_match("END\nOF"));
    }
}
