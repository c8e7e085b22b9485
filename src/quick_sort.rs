//! Quick Sort Implementation
//!
//! Lomuto partition with the last element as pivot. Everything `<=` the pivot
//! ends up on its left, the rest on its right, and both sides are sorted the
//! same way. Not stable.
//!
//! The recursive call always takes the smaller side and the loop continues
//! with the larger one, which keeps the stack depth at O(log n) even for the
//! sorted inputs that make this pivot choice quadratic.
//!
//! Complexity: O(n log n) average, O(n²) worst case (e.g. already sorted input).

/// Sort a slice in-place using quick sort.
pub fn sort(data: &mut [f64]) {
    let mut slice = data;
    while slice.len() > 1 {
        let current = std::mem::take(&mut slice);
        let pivot = partition(current);
        let (left, rest) = current.split_at_mut(pivot);
        let right = &mut rest[1..];

        if left.len() < right.len() {
            sort(left);
            slice = right;
        } else {
            sort(right);
            slice = left;
        }
    }
}

/// Partition around the last element and return the pivot's final index.
fn partition(data: &mut [f64]) -> usize {
    let high = data.len() - 1;
    let pivot = data[high];
    let mut store = 0;

    for j in 0..high {
        if data[j] <= pivot {
            data.swap(store, j);
            store += 1;
        }
    }
    data.swap(store, high);
    store
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::is_sorted;
    use rand::Rng;

    #[test]
    fn test_sort_empty() {
        let mut data: Vec<f64> = vec![];
        sort(&mut data);
        assert!(data.is_empty());
    }

    #[test]
    fn test_sort_single() {
        let mut data = vec![3.0];
        sort(&mut data);
        assert_eq!(data, vec![3.0]);
    }

    #[test]
    fn test_partition_places_pivot() {
        let mut data = vec![5.0, 3.0, 4.0, 1.0, 2.0];
        let p = partition(&mut data);
        assert_eq!(p, 1);
        assert_eq!(data[p], 2.0);
        assert!(data[..p].iter().all(|&x| x <= 2.0));
        assert!(data[p + 1..].iter().all(|&x| x > 2.0));
    }

    #[test]
    fn test_sort_large_sorted_input() {
        // Worst case for a last-element pivot; must not blow the stack
        let original: Vec<f64> = (0..5_000).map(f64::from).collect();
        let mut data = original.clone();
        sort(&mut data);
        assert_eq!(data, original);

        let mut reversed: Vec<f64> = original.iter().rev().copied().collect();
        sort(&mut reversed);
        assert_eq!(reversed, original);
    }

    #[test]
    fn test_sort_all_same() {
        let mut data = vec![9.0; 5_000];
        sort(&mut data);
        assert!(data.iter().all(|&x| x == 9.0));
    }

    #[test]
    fn test_sort_random() {
        let mut rng = rand::thread_rng();
        let mut data: Vec<f64> = (0..5000).map(|_| rng.gen_range(-1.0..1.0)).collect();
        let mut expected = data.clone();
        expected.sort_by(f64::total_cmp);

        sort(&mut data);
        assert!(is_sorted(&data));
        assert_eq!(data, expected);
    }
}
