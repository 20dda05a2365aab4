//! Chapter-count output formatter

use super::OutputFormatter;
use anyhow::Result;
use std::io::Write;
use tomesplit_core::Segmentation;

/// Stats formatter - outputs chapter counts per book and totals
pub struct StatsFormatter<W: Write> {
    writer: W,
    show_source: bool,
}

impl<W: Write> StatsFormatter<W> {
    /// Create a new stats formatter
    pub fn new(writer: W, show_source: bool) -> Self {
        Self {
            writer,
            show_source,
        }
    }
}

impl<W: Write> OutputFormatter for StatsFormatter<W> {
    fn format_document(&mut self, source: &str, books: Segmentation) -> Result<()> {
        let stats = books.stats();
        let width = stats
            .chapters_per_book
            .iter()
            .map(|(title, _)| title.chars().count())
            .max()
            .unwrap_or(0);

        if self.show_source {
            writeln!(self.writer, "{source}")?;
        }
        for (title, count) in &stats.chapters_per_book {
            writeln!(self.writer, "{title:<width$}  {count:>4}")?;
        }
        writeln!(
            self.writer,
            "Total: {} books, {} chapters",
            stats.book_count, stats.chapter_count
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
