//! CSV Sort Benchmark
//!
//! Extracts a numeric column from CSV text, sorts it with five classical
//! algorithms and reports how long each one took:
//! - **Insertion Sort**: O(n²), stable
//! - **Shell Sort**: gapped insertion sort, gaps n/2, n/4, ..., 1
//! - **Merge Sort**: O(n log n), stable, one auxiliary buffer
//! - **Quick Sort**: Lomuto partition, last-element pivot
//! - **Heap Sort**: O(n log n), in place
//!
//! [`service::handle`] is the entry point for transports; [`server`] wires it
//! to actix-web.

pub mod algorithm;
pub mod benchmark;
pub mod column;
pub mod config;
pub mod csv_table;
pub mod error;
pub mod extract;
pub mod heap_sort;
pub mod insertion_sort;
pub mod merge_sort;
pub mod quick_sort;
pub mod report;
pub mod request;
pub mod server;
pub mod service;
pub mod shell_sort;

pub use algorithm::SortAlgorithm;
pub use benchmark::{AlgorithmResult, BenchmarkReport, TimingUnit};
pub use error::{Result, SortBenchError};
