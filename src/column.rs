//! Column selection by header name or by raw index.

use crate::csv_table::CsvTable;
use crate::error::{Result, SortBenchError};

/// Identifies the target column of a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnRef {
    /// Case-insensitive header name. The first matching header wins.
    Name(String),
    /// Zero-based position. Not checked against the header width; rows that
    /// are too short simply have no value for it.
    Index(usize),
}

impl ColumnRef {
    /// Resolve to a field position within a row.
    pub fn resolve(&self, table: &CsvTable) -> Result<usize> {
        match self {
            ColumnRef::Name(name) => {
                let wanted = name.trim();
                table
                    .header()
                    .iter()
                    .position(|h| caseless_eq(h.trim(), wanted))
                    .ok_or_else(|| SortBenchError::ColumnNotFound {
                        requested: name.clone(),
                        available: table.header().to_vec(),
                    })
            }
            ColumnRef::Index(index) => Ok(*index),
        }
    }

    /// Human-readable label used in error messages and logs.
    pub fn label(&self) -> String {
        match self {
            ColumnRef::Name(name) => name.clone(),
            ColumnRef::Index(index) => index.to_string(),
        }
    }
}

/// Case-insensitive comparison that also folds non-ASCII letters.
fn caseless_eq(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}
