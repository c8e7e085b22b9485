//! Benchmark Harness
//!
//! Runs the sorting algorithms on private copies of one series, times every run
//! with a monotonic clock and picks the fastest. Runs are strictly serial so
//! that the timings are comparable.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::algorithm::{is_sorted, SortAlgorithm};

/// Resolution of the integer durations stored in results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimingUnit {
    Millis,
    Nanos,
}

impl TimingUnit {
    /// Truncate `duration` to a whole number of units.
    pub fn convert(self, duration: Duration) -> u64 {
        let value = match self {
            TimingUnit::Millis => duration.as_millis(),
            TimingUnit::Nanos => duration.as_nanos(),
        };
        u64::try_from(value).unwrap_or(u64::MAX)
    }

    pub fn suffix(self) -> &'static str {
        match self {
            TimingUnit::Millis => "ms",
            TimingUnit::Nanos => "ns",
        }
    }
}

/// Outcome of a single timed run.
#[derive(Debug, Clone, PartialEq)]
pub struct AlgorithmResult {
    pub algorithm: SortAlgorithm,
    /// Elapsed time in the run's [`TimingUnit`].
    pub elapsed: u64,
    /// Whether the output came out non-decreasing.
    pub verified: bool,
    pub sorted: Option<Vec<f64>>,
}

/// Outcome of running every algorithm on the same series.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkReport {
    /// One entry per algorithm, in declaration order.
    pub results: Vec<AlgorithmResult>,
    pub winner: SortAlgorithm,
    pub winner_elapsed: u64,
    pub unit: TimingUnit,
    pub series_len: usize,
}

impl BenchmarkReport {
    pub fn result(&self, algorithm: SortAlgorithm) -> Option<&AlgorithmResult> {
        self.results.iter().find(|r| r.algorithm == algorithm)
    }

    /// True when every run produced ordered output.
    pub fn all_verified(&self) -> bool {
        self.results.iter().all(|r| r.verified)
    }
}

/// Sort a private copy of `series` with `algorithm` and time it.
pub fn run_single(algorithm: SortAlgorithm, series: &[f64], unit: TimingUnit) -> AlgorithmResult {
    let mut data = series.to_vec();

    let start = Instant::now();
    algorithm.run(&mut data);
    let elapsed = start.elapsed();

    AlgorithmResult {
        algorithm,
        elapsed: unit.convert(elapsed),
        verified: is_sorted(&data),
        sorted: Some(data),
    }
}

/// Run all five algorithms serially in declaration order.
///
/// When `keep_sorted` is false the sorted copies are dropped as soon as each
/// run has been verified.
pub fn run_benchmark(series: &[f64], unit: TimingUnit, keep_sorted: bool) -> BenchmarkReport {
    let results: Vec<AlgorithmResult> = SortAlgorithm::ALL
        .iter()
        .map(|&algorithm| {
            let mut result = run_single(algorithm, series, unit);
            if !keep_sorted {
                result.sorted = None;
            }
            result
        })
        .collect();

    // ALL is never empty, so neither is `results`
    let (winner, winner_elapsed) =
        select_winner(&results).unwrap_or((SortAlgorithm::ALL[0], results[0].elapsed));

    BenchmarkReport {
        results,
        winner,
        winner_elapsed,
        unit,
        series_len: series.len(),
    }
}

/// Pick the entry with the smallest elapsed time.
///
/// Only a strictly smaller time replaces the current best, so on a tie the
/// earliest entry wins.
pub fn select_winner(results: &[AlgorithmResult]) -> Option<(SortAlgorithm, u64)> {
    let mut best: Option<(SortAlgorithm, u64)> = None;
    for result in results {
        match best {
            Some((_, best_elapsed)) if result.elapsed >= best_elapsed => {}
            _ => best = Some((result.algorithm, result.elapsed)),
        }
    }
    best
}
