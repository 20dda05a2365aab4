//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use std::io::Write;
use tomesplit_core::{SectionMap, Segmentation};

/// JSON formatter - outputs the nested book → chapter → text mapping.
///
/// A single document is written as the mapping itself. Several documents are
/// wrapped in an object keyed by source.
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    documents: SectionMap<Segmentation>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            documents: SectionMap::new(),
        }
    }

    fn write_value<T: serde::Serialize>(&mut self, value: &T) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, value)?;
        } else {
            serde_json::to_writer(&mut self.writer, value)?;
        }
        Ok(())
    }
}

impl<W: Write> OutputFormatter for JsonFormatter<W> {
    fn format_document(&mut self, source: &str, books: Segmentation) -> Result<()> {
        self.documents.insert(source, books);
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        let documents = std::mem::take(&mut self.documents);
        if documents.len() == 1 {
            let (_, books) = documents.into_iter().next().unwrap_or_default();
            self.write_value(&books)?;
        } else {
            self.write_value(&documents)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
