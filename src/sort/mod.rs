//! Generic in-place sorting over ordered slices.
//!
//! Self-contained computations with no shared state; the demo binaries and
//! benchmarks feed them from a single thread.

/// Returns whether the slice is in non-decreasing order.
pub fn is_sorted<T: Ord>(arr: &[T]) -> bool {
    arr.windows(2).all(|pair| pair[0] <= pair[1])
}

/// Exchange sort: each pass swaps the smallest remaining element into the
/// front position. Quadratic in the slice length.
pub fn bubblesort<T: Ord>(arr: &mut [T]) {
    for i in 0..arr.len() {
        for j in i + 1..arr.len() {
            if arr[i] > arr[j] {
                arr.swap(i, j);
            }
        }
    }
}

/// In-place quicksort, recursing on both sides of the pivot.
///
/// Average `n log n`; quadratic on adversarial input since the pivot is
/// always the last element.
pub fn quicksort<T: Ord>(arr: &mut [T]) {
    if arr.len() <= 1 {
        return;
    }
    let pivot = partition(arr);
    let (left, right) = arr.split_at_mut(pivot);
    quicksort(left);
    quicksort(&mut right[1..]);
}

/// Moves everything not greater than the last element in front of it and
/// returns the pivot's final index.
fn partition<T: Ord>(arr: &mut [T]) -> usize {
    let last = arr.len() - 1;
    let mut store = 0;
    for i in 0..last {
        if arr[i] <= arr[last] {
            arr.swap(i, store);
            store += 1;
        }
    }
    arr.swap(store, last);
    store
}
