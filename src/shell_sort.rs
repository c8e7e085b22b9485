//! Shell Sort Implementation
//!
//! Insertion sort over a shrinking gap sequence n/2, n/4, ..., 1. Early passes
//! move elements long distances cheaply so the final gap-1 pass has little
//! left to do. Not stable.
//!
//! Complexity: O(n²) worst case with this gap sequence, usually much better.

/// Sort a slice in-place using shell sort.
pub fn sort(data: &mut [f64]) {
    let n = data.len();
    let mut gap = n / 2;
    while gap > 0 {
        for i in gap..n {
            let temp = data[i];
            let mut j = i;
            while j >= gap && data[j - gap] > temp {
                data[j] = data[j - gap];
                j -= gap;
            }
            data[j] = temp;
        }
        gap /= 2;
    }
}
