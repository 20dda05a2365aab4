//! Error types for segmentation and configuration

use std::fmt;
use std::string::FromUtf8Error;
use thiserror::Error;

/// Which of the three configured patterns an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternKind {
    /// Top-level section delimiter
    Book,
    /// Second-level section delimiter
    Chapter,
    /// Start of the trailing boilerplate
    CleanupMarker,
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternKind::Book => write!(f, "book"),
            PatternKind::Chapter => write!(f, "chapter"),
            PatternKind::CleanupMarker => write!(f, "cleanup marker"),
        }
    }
}

/// Errors raised by the segmenter and its configuration layer
#[derive(Error, Debug)]
pub enum Error {
    /// A configured pattern was rejected by the regex engine
    #[error("invalid {kind} pattern `{pattern}`: {reason}")]
    InvalidPattern {
        /// Which pattern failed
        kind: PatternKind,
        /// The pattern source as configured
        pattern: String,
        /// Compiler diagnostic
        reason: regex::Error,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// UTF-8 conversion error
    #[error("UTF-8 error: {0}")]
    Utf8(#[from] FromUtf8Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

/// Result type for segmentation operations
pub type Result<T> = std::result::Result<T, Error>;
