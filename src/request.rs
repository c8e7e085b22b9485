//! Request Decoding
//!
//! The wire format is a marker-delimited text body rather than JSON:
//!
//! - column routes: `<csv-text>###<column-selector>`
//! - sort route: `<sort-type>###<column-index>###[v1, v2, ...]`
//!
//! This module is the only place that knows about `###` and the bracketed
//! list syntax. Everything downstream works with [`Job`].

use crate::algorithm::SortAlgorithm;
use crate::column::ColumnRef;
use crate::csv_table::CsvTable;
use crate::error::{Result, SortBenchError};
use crate::extract::parse_decimal;

const PART_SEPARATOR: &str = "###";

/// Which operation the transport asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Strict extraction by column name, then a full benchmark.
    BenchmarkColumn,
    /// Lenient extraction by column index.
    ExtractColumn,
    /// Sort a literal list of values with one algorithm or all of them.
    SortValues,
    /// Liveness check; the body is ignored.
    Status,
}

/// Benchmark everything, or run one algorithm and return its output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortMode {
    Benchmark,
    Single(SortAlgorithm),
}

impl SortMode {
    fn parse(text: &str) -> Result<Self> {
        let text = text.trim();
        if ["all", "benchmark", "compare"]
            .iter()
            .any(|k| text.eq_ignore_ascii_case(k))
        {
            return Ok(SortMode::Benchmark);
        }
        text.parse().map(SortMode::Single)
    }
}

/// A decoded request, free of wire-format details.
#[derive(Debug, Clone, PartialEq)]
pub enum Job {
    BenchmarkColumn {
        table: CsvTable,
        column: ColumnRef,
    },
    ExtractColumn {
        table: CsvTable,
        column: ColumnRef,
    },
    SortValues {
        mode: SortMode,
        column: usize,
        series: Vec<f64>,
    },
}

/// Decode `body` for `route`. `Route::Status` carries no job and is rejected.
pub fn decode(route: Route, body: &str) -> Result<Job> {
    let parts = split_parts(body);

    match route {
        Route::BenchmarkColumn => {
            let [csv, column, ..] = parts[..] else {
                return Err(SortBenchError::malformed(
                    "Invalid request format. Expected: CSV###COLUMN",
                ));
            };
            Ok(Job::BenchmarkColumn {
                table: CsvTable::parse(csv.trim())?,
                column: ColumnRef::Name(column.trim().to_string()),
            })
        }
        Route::ExtractColumn => {
            let [csv, column, ..] = parts[..] else {
                return Err(SortBenchError::malformed(
                    "Invalid request format. Expected: CSV###COLUMN_INDEX",
                ));
            };
            let table = CsvTable::parse(csv.trim())?;
            Ok(Job::ExtractColumn {
                table,
                column: ColumnRef::Index(parse_index(column)?),
            })
        }
        Route::SortValues => {
            let [sort_type, column, values, ..] = parts[..] else {
                return Err(SortBenchError::malformed(
                    "Invalid request format. Expected: SORT_TYPE###COLUMN_INDEX###[VALUES]",
                ));
            };
            Ok(Job::SortValues {
                mode: SortMode::parse(sort_type)?,
                column: parse_index(column)?,
                series: parse_value_list(values),
            })
        }
        Route::Status => Err(SortBenchError::malformed(
            "Status requests carry no body to decode",
        )),
    }
}

/// Split on every separator, dropping trailing parts that are exactly empty.
fn split_parts(body: &str) -> Vec<&str> {
    let mut parts: Vec<&str> = body.split(PART_SEPARATOR).collect();
    while parts.last().is_some_and(|p| p.is_empty()) {
        parts.pop();
    }
    parts
}

fn parse_index(text: &str) -> Result<usize> {
    let text = text.trim();
    text.parse()
        .map_err(|_| SortBenchError::malformed(format!("Invalid column index: '{}'", text)))
}

/// Parse `[v1, v2, ...]`. Entries that are not plain decimals are dropped.
pub fn parse_value_list(text: &str) -> Vec<f64> {
    let text = text.trim();
    let text = text.strip_prefix('[').unwrap_or(text);
    let text = text.strip_suffix(']').unwrap_or(text);

    text.split(',')
        .filter_map(|entry| parse_decimal(entry.trim()))
        .collect()
}
