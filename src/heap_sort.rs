//! Heap Sort Implementation
//!
//! Builds a max-heap in place, then repeatedly swaps the root (the maximum)
//! to the end of the shrinking heap and restores the heap property with a
//! recursive sift-down. Not stable.
//!
//! Complexity: O(n log n) in all cases, O(1) extra space besides the
//! O(log n) sift-down recursion.

/// Sort a slice in-place using heap sort.
pub fn sort(data: &mut [f64]) {
    let n = data.len();

    for i in (0..n / 2).rev() {
        sift_down(data, n, i);
    }

    for end in (1..n).rev() {
        data.swap(0, end);
        sift_down(data, end, 0);
    }
}

/// Restore the max-heap property for the subtree rooted at `i` within `data[..n]`.
fn sift_down(data: &mut [f64], n: usize, i: usize) {
    let mut largest = i;
    let left = 2 * i + 1;
    let right = 2 * i + 2;

    if left < n && data[left] > data[largest] {
        largest = left;
    }
    if right < n && data[right] > data[largest] {
        largest = right;
    }

    if largest != i {
        data.swap(i, largest);
        sift_down(data, n, largest);
    }
}
