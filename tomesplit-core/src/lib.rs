//! Pattern-driven segmentation of long plain-text documents
//!
//! A [`Segmenter`] strips a trailing boilerplate section from a document,
//! splits what remains into books at every match of a book heading pattern,
//! and splits each book into chapters at every match of a chapter heading
//! pattern. The result is an ordered two-level map:
//! book title → chapter title → chapter text.
//!
//! The default [`PatternSet`] follows the heading conventions of the Project
//! Gutenberg edition of *War and Peace*; all three patterns can be replaced.
//!
//! # Example
//!
//! ```rust
//! use tomesplit_core::{PatternSet, Segmenter};
//!
//! let segmenter = Segmenter::new(PatternSet::default());
//!
//! let text = "Contents\n\
//!             BOOK ONE: 1805\n\nCHAPTER I\n\nWell, Prince.\n\n\
//!             CHAPTER II\n\nAnna Pavlovna.\n";
//! let books = segmenter.segment(text).unwrap();
//!
//! let chapters = books.get("BOOK ONE:").unwrap();
//! assert_eq!(chapters.keys().collect::<Vec<_>>(), vec!["CHAPTER I", "CHAPTER II"]);
//! assert_eq!(chapters.get("CHAPTER I").unwrap(), "Well, Prince.");
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod input;
pub mod patterns;
pub mod sections;
pub mod segmenter;

pub use error::{Error, PatternKind, Result};
pub use input::Input;
pub use patterns::{PatternSet, BOOK_PATTERN, CHAPTER_PATTERN, CLEANUP_MARKER};
pub use sections::{Chapters, SectionMap, Segmentation, SegmentationStats};
pub use segmenter::Segmenter;

/// Segment text with the default patterns
pub fn segment_text(text: &str) -> Result<Segmentation> {
    Segmenter::default().segment(text)
}

/// Segment a file with the default patterns
pub fn segment_file<P: AsRef<std::path::Path>>(path: P) -> Result<Segmentation> {
    Segmenter::default().segment_input(Input::from_file(path.as_ref().to_path_buf()))
}
