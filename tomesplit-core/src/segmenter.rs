//! Two-level book/chapter segmentation

use crate::error::{Error, PatternKind, Result};
use crate::input::Input;
use crate::patterns::{build_regex, PatternSet};
use crate::sections::{Chapters, Segmentation};
use regex::Regex;
use std::sync::OnceLock;

type CompiledPattern = OnceLock<std::result::Result<Regex, regex::Error>>;

/// Splits documents into books and chapters.
///
/// The segmenter holds its [`PatternSet`] and compiles each pattern the first
/// time an operation needs it. An invalid pattern is therefore accepted at
/// construction and reported by [`clean`](Self::clean) or
/// [`segment`](Self::segment). Compiled patterns are cached, and the cache is
/// safe to share between threads.
#[derive(Debug, Clone, Default)]
pub struct Segmenter {
    patterns: PatternSet,
    book: CompiledPattern,
    chapter: CompiledPattern,
    cleanup_marker: CompiledPattern,
}

impl Segmenter {
    /// Create a segmenter for the given patterns
    pub fn new(patterns: PatternSet) -> Self {
        log::info!("Initializing segmenter");
        log::debug!(
            "Initialized with book_pattern='{}', chapter_pattern='{}', cleanup_marker='{}'",
            patterns.book,
            patterns.chapter,
            patterns.cleanup_marker
        );

        Self {
            patterns,
            book: OnceLock::new(),
            chapter: OnceLock::new(),
            cleanup_marker: OnceLock::new(),
        }
    }

    /// The configured patterns
    pub fn patterns(&self) -> &PatternSet {
        &self.patterns
    }

    fn regex(&self, kind: PatternKind) -> Result<&Regex> {
        let cell = match kind {
            PatternKind::Book => &self.book,
            PatternKind::Chapter => &self.chapter,
            PatternKind::CleanupMarker => &self.cleanup_marker,
        };
        let source = self.patterns.get(kind);

        cell.get_or_init(|| build_regex(kind, source))
            .as_ref()
            .map_err(|reason| Error::InvalidPattern {
                kind,
                pattern: source.to_string(),
                reason: reason.clone(),
            })
    }

    /// Drop everything from the first cleanup marker to the end of `text`.
    ///
    /// Returns `text` unchanged when the marker does not occur.
    pub fn clean<'t>(&self, text: &'t str) -> Result<&'t str> {
        let marker = self.regex(PatternKind::CleanupMarker)?;

        log::info!("Cleaning text using cleanup marker");
        log::debug!("Original text length: {}", text.len());

        let cleaned = match marker.find(text) {
            Some(found) => &text[..found.start()],
            None => text,
        };

        log::debug!("Cleaned text length: {}", cleaned.len());
        Ok(cleaned)
    }

    /// Clean `text`, then split it into books and each book into chapters.
    ///
    /// Text before the first book heading is discarded, as is text before the
    /// first chapter heading of each book. Titles and bodies are trimmed.
    /// A repeated title replaces the earlier section's content.
    pub fn segment(&self, text: &str) -> Result<Segmentation> {
        log::info!("Segmenting text into books and chapters");

        let cleaned = self.clean(text)?;
        let book_delimiter = self.regex(PatternKind::Book)?;
        let chapter_delimiter = self.regex(PatternKind::Chapter)?;

        let books = split_sections(book_delimiter, cleaned);
        log::debug!("Found {} book sections", books.len());

        let mut segmented = Segmentation::new();
        for (book_title, book_content) in books {
            log::debug!(
                "Processing book: '{}' with content length: {}",
                book_title,
                book_content.len()
            );

            let sections = split_sections(chapter_delimiter, book_content);
            log::debug!(
                "Found {} chapter sections in book '{}'",
                sections.len(),
                book_title
            );

            let mut chapters = Chapters::new();
            for (chapter_title, chapter_content) in sections {
                log::trace!(
                    "Processed chapter: '{}' with content length: {}",
                    chapter_title,
                    chapter_content.len()
                );
                if chapters
                    .insert(chapter_title, chapter_content.to_string())
                    .is_some()
                {
                    log::debug!(
                        "Chapter title '{}' repeated in '{}', keeping the later one",
                        chapter_title,
                        book_title
                    );
                }
            }

            if segmented.insert(book_title, chapters).is_some() {
                log::debug!("Book title '{}' repeated, keeping the later one", book_title);
            }
        }

        log::info!("Completed text segmentation");
        Ok(segmented)
    }

    /// Read a document from `input` and segment it
    pub fn segment_input(&self, input: Input) -> Result<Segmentation> {
        let text = input.read_text()?;
        self.segment(&text)
    }
}

/// Split `text` at every match of `delimiter` and pair each delimiter with the
/// span that follows it, up to the next match or the end of the text.
///
/// The span before the first match is dropped. The delimiter text is the
/// first participating capture group, or the whole match for patterns without
/// groups. Both halves of each pair are trimmed.
fn split_sections<'t>(delimiter: &Regex, text: &'t str) -> Vec<(&'t str, &'t str)> {
    let mut sections = Vec::new();
    let mut open: Option<(&'t str, usize)> = None;

    for captures in delimiter.captures_iter(text) {
        let Some(whole) = captures.get(0) else {
            continue;
        };

        if let Some((title, body_start)) = open.take() {
            sections.push((title, text[body_start..whole.start()].trim()));
        }

        let title = captures
            .iter()
            .skip(1)
            .flatten()
            .next()
            .unwrap_or(whole)
            .as_str()
            .trim();
        open = Some((title, whole.end()));
    }

    if let Some((title, body_start)) = open {
        sections.push((title, text[body_start..].trim()));
    }

    sections
}
