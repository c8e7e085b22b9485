//! CSV Table
//!
//! Splits raw comma-separated text into a header row and data rows. There is
//! no quoting or escaping: a comma always separates fields, so a literal comma
//! inside a field cannot be represented. Cells are kept as raw text; numeric
//! interpretation happens in [`crate::extract`].

use csv::ReaderBuilder;

use crate::error::{Result, SortBenchError};

/// A parsed table: the first non-blank line is the header, the rest are data rows.
///
/// Rows may be shorter (or longer) than the header. Missing trailing fields
/// are absent, never padded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvTable {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl CsvTable {
    /// Parse `text` into a table.
    ///
    /// Lines end in `\n` or `\r\n`; blank lines are skipped. Fails with
    /// `MalformedInput` unless there is a header and at least one data row.
    pub fn parse(text: &str) -> Result<Self> {
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .quoting(false)
            .from_reader(text.as_bytes());

        let mut lines: Vec<Vec<String>> = Vec::new();
        for (index, record) in reader.records().enumerate() {
            let record = record.map_err(|e| {
                SortBenchError::malformed(format!("Failed to parse CSV line {}: {}", index + 1, e))
            })?;

            // Whitespace-only lines come through as a single field.
            if record.len() == 1 && record[0].trim().is_empty() {
                continue;
            }

            let mut fields: Vec<String> = record.iter().map(str::to_string).collect();
            while fields.last().is_some_and(|f| f.is_empty()) {
                fields.pop();
            }
            lines.push(fields);
        }

        if lines.len() < 2 {
            return Err(SortBenchError::malformed(
                "CSV must have header and at least one data row",
            ));
        }

        let rows = lines.split_off(1);
        let header = lines.pop().unwrap_or_default();
        Ok(CsvTable { header, rows })
    }

    pub fn header(&self) -> &[String] {
        &self.header
    }

    /// Data rows, header excluded.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}
