//! Merge Sort Implementation
//!
//! Top-down merge sort: split at the midpoint, sort both halves recursively,
//! then merge them through a single auxiliary buffer allocated once for the
//! whole slice. Ties take from the left run, so the sort is stable.
//!
//! Complexity: O(n log n) comparisons, O(n) extra space.

/// Sort a slice in-place using merge sort.
pub fn sort(data: &mut [f64]) {
    if data.len() <= 1 {
        return;
    }
    let mut temp = vec![0.0f64; data.len()];
    sort_range(data, &mut temp, 0, data.len() - 1);
}

/// Sort `data[left..=right]`, using the same span of `temp` as scratch.
fn sort_range(data: &mut [f64], temp: &mut [f64], left: usize, right: usize) {
    if left >= right {
        return;
    }
    let mid = left + (right - left) / 2;

    sort_range(data, temp, left, mid);
    sort_range(data, temp, mid + 1, right);

    temp[left..=right].copy_from_slice(&data[left..=right]);

    let (mut i, mut j, mut k) = (left, mid + 1, left);
    while i <= mid && j <= right {
        if temp[i] <= temp[j] {
            data[k] = temp[i];
            i += 1;
        } else {
            data[k] = temp[j];
            j += 1;
        }
        k += 1;
    }

    // At most one of the runs has leftovers
    while i <= mid {
        data[k] = temp[i];
        i += 1;
        k += 1;
    }
    while j <= right {
        data[k] = temp[j];
        j += 1;
        k += 1;
    }
}
