//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use std::io::Write;
use tomesplit_core::Segmentation;

/// Text formatter - outputs an outline of book and chapter titles
pub struct TextFormatter<W: Write> {
    writer: W,
    show_source: bool,
    documents: usize,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W, show_source: bool) -> Self {
        Self {
            writer,
            show_source,
            documents: 0,
        }
    }
}

impl<W: Write> OutputFormatter for TextFormatter<W> {
    fn format_document(&mut self, source: &str, books: Segmentation) -> Result<()> {
        if self.show_source {
            if self.documents > 0 {
                writeln!(self.writer)?;
            }
            writeln!(self.writer, "==> {source} <==")?;
        }
        self.documents += 1;

        for (book_title, chapters) in books.iter() {
            writeln!(self.writer, "{book_title}")?;
            for (chapter_title, body) in chapters.iter() {
                let words = body.split_whitespace().count();
                writeln!(self.writer, "  {chapter_title} ({words} words)")?;
            }
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
