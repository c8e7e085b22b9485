//! Error type shared by every stage of the extraction and sorting pipeline.

use thiserror::Error;

/// Failures that can arise while decoding a request, reading the CSV or
/// extracting a numeric column.
///
/// Every variant is recoverable: the service boundary turns it into an
/// `{"error": ...}` payload instead of propagating it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortBenchError {
    /// Too few CSV lines or an unparsable request structure.
    #[error("{0}")]
    MalformedInput(String),

    /// A column name that is not in the header.
    #[error("Column '{requested}' not found. Available columns: [{}]", .available.join(", "))]
    ColumnNotFound {
        requested: String,
        available: Vec<String>,
    },

    /// A cell that failed to parse under the strict policy.
    #[error("Non-numeric value found: '{0}'")]
    NonNumericValue(String),

    /// Strict extraction finished without a single value.
    #[error("No numeric data found in column: {0}")]
    EmptyNumericColumn(String),
}

impl SortBenchError {
    pub fn malformed(message: impl Into<String>) -> Self {
        SortBenchError::MalformedInput(message.into())
    }
}

pub type Result<T> = std::result::Result<T, SortBenchError>;
