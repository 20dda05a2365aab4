//! Markdown output formatter

use super::OutputFormatter;
use anyhow::Result;
use std::io::Write;
use tomesplit_core::Segmentation;

/// Markdown formatter - outputs the full text with a heading per section
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    book_count: usize,
    chapter_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            book_count: 0,
            chapter_count: 0,
        }
    }
}

impl<W: Write> OutputFormatter for MarkdownFormatter<W> {
    fn format_document(&mut self, source: &str, books: Segmentation) -> Result<()> {
        writeln!(self.writer, "# {source}")?;
        writeln!(self.writer)?;

        for (book_title, chapters) in books.iter() {
            self.book_count += 1;
            writeln!(self.writer, "## {book_title}")?;
            writeln!(self.writer)?;

            for (chapter_title, body) in chapters.iter() {
                self.chapter_count += 1;
                writeln!(self.writer, "### {chapter_title}")?;
                writeln!(self.writer)?;
                if !body.is_empty() {
                    writeln!(self.writer, "{body}")?;
                    writeln!(self.writer)?;
                }
            }
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer, "---")?;
        writeln!(
            self.writer,
            "*Total books: {}, chapters: {}*",
            self.book_count, self.chapter_count
        )?;
        self.writer.flush()?;
        Ok(())
    }
}
