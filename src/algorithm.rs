//! The five benchmarked sorting algorithms as a closed set.

use std::fmt;
use std::str::FromStr;

use crate::error::SortBenchError;
use crate::{heap_sort, insertion_sort, merge_sort, quick_sort, shell_sort};

/// A sorting algorithm the harness knows how to run.
///
/// Variant order is the declaration order used for benchmark reports and for
/// breaking timing ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortAlgorithm {
    Insertion,
    Shell,
    Merge,
    Quick,
    Heap,
}

impl SortAlgorithm {
    /// All algorithms in declaration order.
    pub const ALL: [SortAlgorithm; 5] = [
        SortAlgorithm::Insertion,
        SortAlgorithm::Shell,
        SortAlgorithm::Merge,
        SortAlgorithm::Quick,
        SortAlgorithm::Heap,
    ];

    /// Display name, also used as the key in benchmark payloads.
    pub fn name(self) -> &'static str {
        match self {
            SortAlgorithm::Insertion => "Insertion Sort",
            SortAlgorithm::Shell => "Shell Sort",
            SortAlgorithm::Merge => "Merge Sort",
            SortAlgorithm::Quick => "Quick Sort",
            SortAlgorithm::Heap => "Heap Sort",
        }
    }

    /// Sort `data` ascending in place.
    pub fn run(self, data: &mut [f64]) {
        match self {
            SortAlgorithm::Insertion => insertion_sort::sort(data),
            SortAlgorithm::Shell => shell_sort::sort(data),
            SortAlgorithm::Merge => merge_sort::sort(data),
            SortAlgorithm::Quick => quick_sort::sort(data),
            SortAlgorithm::Heap => heap_sort::sort(data),
        }
    }
}

impl fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SortAlgorithm {
    type Err = SortBenchError;

    /// Accepts `"Quick Sort"`, `"quick"`, `"quick_sort"`, `"QuickSort"` and so on.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .collect::<String>()
            .to_ascii_lowercase();
        let key = key.strip_suffix("sort").unwrap_or(&key);

        match key {
            "insertion" => Ok(SortAlgorithm::Insertion),
            "shell" => Ok(SortAlgorithm::Shell),
            "merge" => Ok(SortAlgorithm::Merge),
            "quick" => Ok(SortAlgorithm::Quick),
            "heap" => Ok(SortAlgorithm::Heap),
            _ => Err(SortBenchError::malformed(format!(
                "Unknown sort type: '{}'. Expected one of: all, insertion, shell, merge, quick, heap",
                s.trim()
            ))),
        }
    }
}

/// Check if a slice is sorted in ascending order.
#[inline]
pub fn is_sorted(data: &[f64]) -> bool {
    data.windows(2).all(|w| w[0] <= w[1])
}
