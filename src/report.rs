//! Result Encoding
//!
//! Turns benchmark reports, sorted series and errors into the flat JSON
//! objects returned to clients, and renders reports as Markdown for the
//! offline `csvbench` tool.
//!
//! Field order is fixed by struct declaration order so the output is
//! reproducible:
//! - benchmark: `{"executionTimes": {...}, "bestAlgorithm": "...", "bestTime": n}`
//! - direct sort: `{"algorithm": "...", "column": i, "sortedValues": [...], "executionTime": n}`
//! - column extraction: `{"column": i, "values": [...]}`
//! - error: `{"error": "..."}`
//!
//! Values are written as plain decimal literals (`0.0000001`, never `1e-7`).

use std::fmt::Write;

use serde::ser::{Error as _, SerializeMap, SerializeSeq, Serializer};
use serde::Serialize;
use serde_json::value::RawValue;

use crate::benchmark::{AlgorithmResult, BenchmarkReport};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BenchmarkPayload<'a> {
    execution_times: ExecutionTimes<'a>,
    best_algorithm: &'static str,
    best_time: u64,
}

/// Timings keyed by algorithm name, in report order.
struct ExecutionTimes<'a>(&'a [AlgorithmResult]);

impl Serialize for ExecutionTimes<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for result in self.0 {
            map.serialize_entry(result.algorithm.name(), &result.elapsed)?;
        }
        map.end()
    }
}

/// A value series written without exponent notation.
struct PlainDecimals<'a>(&'a [f64]);

impl Serialize for PlainDecimals<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.0.len()))?;
        for &value in self.0 {
            let raw = RawValue::from_string(plain_decimal(value)).map_err(S::Error::custom)?;
            seq.serialize_element(&raw)?;
        }
        seq.end()
    }
}

/// Format `value` as a plain decimal literal with at least one fractional digit.
///
/// `f64`'s `Display` never switches to exponent notation and prints the
/// shortest digits that round-trip.
pub fn plain_decimal(value: f64) -> String {
    let mut text = value.to_string();
    if !text.contains('.') {
        text.push_str(".0");
    }
    text
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SortedPayload<'a> {
    algorithm: &'static str,
    column: usize,
    sorted_values: PlainDecimals<'a>,
    execution_time: u64,
}

#[derive(Serialize)]
struct ColumnPayload<'a> {
    column: usize,
    values: PlainDecimals<'a>,
}

#[derive(Serialize)]
struct ErrorPayload<'a> {
    error: &'a str,
}

/// Encode a full benchmark as timings plus the winner.
pub fn encode_benchmark(report: &BenchmarkReport) -> serde_json::Result<String> {
    serde_json::to_string(&BenchmarkPayload {
        execution_times: ExecutionTimes(&report.results),
        best_algorithm: report.winner.name(),
        best_time: report.winner_elapsed,
    })
}

/// Encode a single algorithm's sorted output and timing.
pub fn encode_sorted(result: &AlgorithmResult, column: usize) -> serde_json::Result<String> {
    serde_json::to_string(&SortedPayload {
        algorithm: result.algorithm.name(),
        column,
        sorted_values: PlainDecimals(result.sorted.as_deref().unwrap_or_default()),
        execution_time: result.elapsed,
    })
}

/// Encode the values extracted from one column.
pub fn encode_column(column: usize, values: &[f64]) -> serde_json::Result<String> {
    serde_json::to_string(&ColumnPayload {
        column,
        values: PlainDecimals(values),
    })
}

/// Encode an error message. Cannot fail: the payload is a single string.
pub fn encode_error(message: &str) -> String {
    serde_json::to_string(&ErrorPayload { error: message })
        .unwrap_or_else(|_| String::from(r#"{"error": "unencodable error message"}"#))
}

/// Render a benchmark as a Markdown document.
pub fn to_markdown_table(report: &BenchmarkReport, source: &str, column: &str) -> String {
    let unit = report.unit.suffix();
    let mut output = String::new();

    writeln!(output, "# Sorting Benchmark Report").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "**Source:** {}", source).unwrap();
    writeln!(output, "**Column:** {}", column).unwrap();
    writeln!(output, "**Values:** {}", format_size(report.series_len)).unwrap();
    writeln!(output).unwrap();

    writeln!(output, "## Results").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "| Algorithm | Time ({}) | Verified |", unit).unwrap();
    writeln!(output, "|-----------|-----------|----------|").unwrap();
    for result in &report.results {
        let marker = if result.algorithm == report.winner { " **(fastest)**" } else { "" };
        writeln!(
            output,
            "| {}{} | {} | {} |",
            result.algorithm.name(),
            marker,
            result.elapsed,
            if result.verified { "OK" } else { "FAILED" }
        )
        .unwrap();
    }
    writeln!(output).unwrap();

    writeln!(
        output,
        "**Fastest:** {} in {} {}",
        report.winner.name(),
        report.winner_elapsed,
        unit
    )
    .unwrap();

    // Relative cost, skipped when the winner rounds to zero
    if report.winner_elapsed > 0 {
        writeln!(output).unwrap();
        writeln!(output, "| Algorithm | Relative to fastest |").unwrap();
        writeln!(output, "|-----------|---------------------|").unwrap();
        for result in &report.results {
            let ratio = result.elapsed as f64 / report.winner_elapsed as f64;
            writeln!(output, "| {} | {:.2}x |", result.algorithm.name(), ratio).unwrap();
        }
    }

    writeln!(output).unwrap();
    writeln!(output, "---").unwrap();
    writeln!(output, "*Report generated by csvbench*").unwrap();

    output
}

/// Format a size as a human-readable string (e.g., "1K", "1M")
fn format_size(size: usize) -> String {
    if size >= 1_000_000_000 {
        format!("{}G", size / 1_000_000_000)
    } else if size >= 1_000_000 {
        format!("{}M", size / 1_000_000)
    } else if size >= 1_000 {
        format!("{}K", size / 1_000)
    } else {
        size.to_string()
    }
}
