//! Request boundary between the transport and the sorting core.
//!
//! [`handle`] decodes a body, runs the job and always produces a [`Reply`]:
//! every failure is turned into an `{"error": ...}` payload here and never
//! propagates to the transport.

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::benchmark::{run_benchmark, run_single, BenchmarkReport, TimingUnit};
use crate::column::ColumnRef;
use crate::csv_table::CsvTable;
use crate::error::SortBenchError;
use crate::extract::{extract, ExtractionPolicy};
use crate::report;
use crate::request::{self, Job, Route, SortMode};

/// Body returned for [`Route::Status`].
pub const STATUS_TEXT: &str = "SortServer is running!";

/// Coarse outcome, mapped to an HTTP status line by the transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusClass {
    Success,
    ClientError,
    ServerError,
}

/// What the transport should send back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub status: StatusClass,
    pub content_type: &'static str,
    pub body: String,
}

impl Reply {
    fn json(status: StatusClass, body: String) -> Self {
        Reply {
            status,
            content_type: "application/json",
            body,
        }
    }

    fn text(body: &str) -> Self {
        Reply {
            status: StatusClass::Success,
            content_type: "text/plain",
            body: body.to_string(),
        }
    }

    /// Error payload for failures outside the core, e.g. a lost worker thread.
    pub fn server_error(message: &str) -> Self {
        Reply::json(StatusClass::ServerError, report::encode_error(message))
    }
}

/// Timing resolution per mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceSettings {
    pub benchmark_unit: TimingUnit,
    pub sort_unit: TimingUnit,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        ServiceSettings {
            benchmark_unit: TimingUnit::Millis,
            sort_unit: TimingUnit::Nanos,
        }
    }
}

#[derive(Debug, Error)]
enum Failure {
    #[error(transparent)]
    Request(#[from] SortBenchError),
    #[error("Failed to encode response: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Handle one request. Never fails; errors come back as error payloads.
pub fn handle(route: Route, body: &str, settings: &ServiceSettings) -> Reply {
    if route == Route::Status {
        return Reply::text(STATUS_TEXT);
    }

    debug!(?route, bytes = body.len(), "handling request");
    match execute(route, body, settings) {
        Ok(payload) => Reply::json(StatusClass::Success, payload),
        Err(Failure::Request(e)) => {
            warn!(?route, error = %e, "request rejected");
            Reply::json(StatusClass::ClientError, report::encode_error(&e.to_string()))
        }
        Err(e @ Failure::Encode(_)) => {
            warn!(?route, error = %e, "response encoding failed");
            Reply::server_error(&e.to_string())
        }
    }
}

fn execute(route: Route, body: &str, settings: &ServiceSettings) -> Result<String, Failure> {
    match request::decode(route, body)? {
        Job::BenchmarkColumn { table, column } => {
            let report = benchmark_table(&table, &column, settings.benchmark_unit)?;
            Ok(report::encode_benchmark(&report)?)
        }
        Job::ExtractColumn { table, column } => {
            let position = column.resolve(&table)?;
            let values = extract(&table, position, ExtractionPolicy::Lenient, &column.label())?;
            info!(column = position, values = values.len(), "column extracted");
            Ok(report::encode_column(position, &values)?)
        }
        Job::SortValues {
            mode: SortMode::Benchmark,
            series,
            ..
        } => {
            let report = run_benchmark(&series, settings.benchmark_unit, false);
            log_report(&report);
            Ok(report::encode_benchmark(&report)?)
        }
        Job::SortValues {
            mode: SortMode::Single(algorithm),
            column,
            series,
        } => {
            let result = run_single(algorithm, &series, settings.sort_unit);
            info!(
                %algorithm,
                values = series.len(),
                elapsed = result.elapsed,
                unit = settings.sort_unit.suffix(),
                "direct sort complete"
            );
            Ok(report::encode_sorted(&result, column)?)
        }
    }
}

/// Strict-extract the named column of `table` and benchmark it.
pub fn benchmark_table(
    table: &CsvTable,
    column: &ColumnRef,
    unit: TimingUnit,
) -> Result<BenchmarkReport, SortBenchError> {
    let position = column.resolve(table)?;
    let series = extract(table, position, ExtractionPolicy::Strict, &column.label())?;
    info!(column = %column.label(), values = series.len(), "sorting numeric values");

    let report = run_benchmark(&series, unit, false);
    log_report(&report);
    Ok(report)
}

/// Parse CSV text, then strict-extract and benchmark the named column.
pub fn benchmark_csv(
    text: &str,
    column: &str,
    unit: TimingUnit,
) -> Result<BenchmarkReport, SortBenchError> {
    let table = CsvTable::parse(text)?;
    benchmark_table(&table, &ColumnRef::Name(column.trim().to_string()), unit)
}

fn log_report(report: &BenchmarkReport) {
    if !report.all_verified() {
        warn!("an algorithm produced unordered output");
    }
    info!(
        winner = %report.winner,
        elapsed = report.winner_elapsed,
        unit = report.unit.suffix(),
        values = report.series_len,
        "benchmark complete"
    );
}
