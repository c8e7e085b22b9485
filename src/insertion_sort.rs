//! Insertion Sort Implementation
//!
//! Grows a sorted prefix one element at a time, shifting larger elements one
//! slot right to open a gap for the new key. Stable.
//!
//! Complexity: O(n²) comparisons in the worst case, O(n) on sorted input.

/// Sort a slice in-place using insertion sort.
pub fn sort(data: &mut [f64]) {
    for i in 1..data.len() {
        let key = data[i];
        let mut j = i;
        // Strict `>` keeps equal keys in their original order
        while j > 0 && data[j - 1] > key {
            data[j] = data[j - 1];
            j -= 1;
        }
        data[j] = key;
    }
}
