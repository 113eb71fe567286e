// ============================================================
// CSV WRITER
// ============================================================
// Serialize the grade table to delimited text

use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::domain::error::{AppError, Result};
use crate::domain::gradebook::{ColumnSchema, ExportQuoting, Record};

/// Writes a header line of column names and one line per record
pub struct CsvWriter {
    quoting: ExportQuoting,
}

impl Default for CsvWriter {
    fn default() -> Self {
        Self {
            quoting: ExportQuoting::Necessary,
        }
    }
}

impl CsvWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quoting(mut self, quoting: ExportQuoting) -> Self {
        self.quoting = quoting;
        self
    }

    /// Serialize to a single newline-separated blob without a trailing newline
    pub fn write_table(&self, schema: &ColumnSchema, records: &[Record]) -> Result<String> {
        let mut lines = Vec::with_capacity(records.len() + 1);
        lines.push(self.format_line(&schema.headers())?);
        for record in records {
            lines.push(self.format_line(&record.ordered_values(schema))?);
        }
        Ok(lines.join("\n"))
    }

    fn format_line(&self, fields: &[&str]) -> Result<String> {
        // A lone empty field stays an empty line; the csv writer would emit `""`
        if self.quoting == ExportQuoting::Never || fields.iter().all(|f| f.is_empty()) {
            return Ok(fields.join(","));
        }

        let mut writer = WriterBuilder::new()
            .quote_style(QuoteStyle::Necessary)
            .terminator(Terminator::Any(b'\n'))
            .from_writer(Vec::new());
        writer.write_record(fields)?;

        let bytes = writer
            .into_inner()
            .map_err(|e| AppError::IoError(format!("Failed to flush CSV writer: {}", e)))?;
        let mut line = String::from_utf8(bytes).map_err(|e| {
            AppError::SerializationError(format!("CSV output is not UTF-8: {}", e))
        })?;

        if line.ends_with('\n') {
            line.pop();
        }
        Ok(line)
    }
}
