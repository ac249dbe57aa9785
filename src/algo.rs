//! The instrumented sorting algorithms.
//!
//! Three interchangeable strategies conform to the [`SortAlgorithm`] contract:
//! - [`QuickSort`]: in-place quicksort with the Lomuto partition scheme.
//! - [`MergeSort`]: stable top-down merge sort.
//! - [`ThreeWayQuickSort`]: out-of-place quicksort with a less/equal/greater
//!   partition pass, which handles duplicate-heavy inputs gracefully.
//!
//! Every algorithm records exactly one comparison on the tracker per pairwise
//! element comparison it performs. Keys are projected through the caller's key
//! function on each comparison; the projection itself is never counted.

use crate::core::{PerformanceTracker, SortAlgorithm, SortOrder};

/// Sorts `data` in place with the Lomuto partition scheme.
///
/// The pivot is always the last element of the current subrange. Elements that
/// strictly precede the pivot under `order` are swapped into the left region;
/// elements equal to the pivot stay on the greater-or-equal side until the
/// final pivot placement. Worst case O(n²) comparisons (already-ordered input
/// with this pivot choice), average O(n log n).
///
/// # Examples
///
/// ```
/// use sortmeter::algo::quick_sort;
/// use sortmeter::core::{PerformanceTracker, SortOrder};
///
/// let mut data = vec![3.0, 1.0, 2.0];
/// let mut tracker = PerformanceTracker::new();
/// quick_sort(&mut data, &mut tracker, &|x: &f64| *x, SortOrder::Ascending);
///
/// assert_eq!(data, vec![1.0, 2.0, 3.0]);
/// ```
pub fn quick_sort<T, K, F>(
    data: &mut [T],
    tracker: &mut PerformanceTracker,
    key: &F,
    order: SortOrder,
) where
    F: Fn(&T) -> K,
    K: PartialOrd,
{
    if data.len() <= 1 {
        return;
    }

    let pivot_index = lomuto_partition(data, tracker, key, order);
    let (left, right) = data.split_at_mut(pivot_index);
    quick_sort(left, tracker, key, order);
    quick_sort(&mut right[1..], tracker, key, order);
}

/// Single Lomuto pass over `data`, using the last element as pivot.
///
/// Returns the pivot's final index. Performs `data.len() - 1` comparisons.
fn lomuto_partition<T, K, F>(
    data: &mut [T],
    tracker: &mut PerformanceTracker,
    key: &F,
    order: SortOrder,
) -> usize
where
    F: Fn(&T) -> K,
    K: PartialOrd,
{
    let high = data.len() - 1;
    // The pivot never moves during the scan (swaps stay below `high`), so its
    // key can be projected once up front.
    let pivot_key = key(&data[high]);
    let mut boundary = 0;

    for j in 0..high {
        tracker.record_comparison();
        if order.precedes(&key(&data[j]), &pivot_key) {
            data.swap(boundary, j);
            boundary += 1;
        }
    }

    data.swap(boundary, high);
    boundary
}

/// Sorts by splitting at the midpoint, recursing, and merging.
///
/// Stable: when two elements project to equal keys, the element from the left
/// half (earlier in the input) is emitted first. Always O(n log n)
/// comparisons; never degrades on adversarial input. Returns a new vector.
///
/// # Examples
///
/// ```
/// use sortmeter::algo::merge_sort;
/// use sortmeter::core::{PerformanceTracker, SortOrder};
///
/// let data = vec!["banana", "apple", "cherry"];
/// let mut tracker = PerformanceTracker::new();
/// let sorted = merge_sort(&data, &mut tracker, &|s: &&str| s.to_string(), SortOrder::Ascending);
///
/// assert_eq!(sorted, vec!["apple", "banana", "cherry"]);
/// ```
pub fn merge_sort<T, K, F>(
    data: &[T],
    tracker: &mut PerformanceTracker,
    key: &F,
    order: SortOrder,
) -> Vec<T>
where
    T: Clone,
    F: Fn(&T) -> K,
    K: PartialOrd,
{
    if data.len() <= 1 {
        return data.to_vec();
    }

    let mid = data.len() / 2;
    let left = merge_sort(&data[..mid], tracker, key, order);
    let right = merge_sort(&data[mid..], tracker, key, order);

    merge(&left, &right, tracker, key, order)
}

/// Merges two sorted runs into one, one comparison per emitted element while
/// both runs are non-empty. The left run wins ties.
fn merge<T, K, F>(
    left: &[T],
    right: &[T],
    tracker: &mut PerformanceTracker,
    key: &F,
    order: SortOrder,
) -> Vec<T>
where
    T: Clone,
    F: Fn(&T) -> K,
    K: PartialOrd,
{
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let (mut i, mut j) = (0, 0);

    while i < left.len() && j < right.len() {
        tracker.record_comparison();
        if order.precedes(&key(&right[j]), &key(&left[i])) {
            merged.push(right[j].clone());
            j += 1;
        } else {
            merged.push(left[i].clone());
            i += 1;
        }
    }

    merged.extend_from_slice(&left[i..]);
    merged.extend_from_slice(&right[j..]);
    merged
}

/// Sorts by partitioning into less/equal/greater buckets around a middle pivot.
///
/// One linear scan classifies every element against the pivot key, recursion
/// continues only into the less and greater buckets, and the result is the
/// concatenation less + equal + greater. Duplicates of the pivot are retired
/// in a single pass, so duplicate-heavy inputs cost far fewer comparisons than
/// under the Lomuto scheme. Each classification is one pairwise comparison on
/// the tracker. Not stable. Returns a new vector.
pub fn three_way_quick_sort<T, K, F>(
    data: &[T],
    tracker: &mut PerformanceTracker,
    key: &F,
    order: SortOrder,
) -> Vec<T>
where
    T: Clone,
    F: Fn(&T) -> K,
    K: PartialOrd,
{
    if data.len() <= 1 {
        return data.to_vec();
    }

    let pivot_key = key(&data[data.len() / 2]);
    let mut less = Vec::new();
    let mut equal = Vec::new();
    let mut greater = Vec::new();

    for item in data {
        tracker.record_comparison();
        let item_key = key(item);
        if order.precedes(&item_key, &pivot_key) {
            less.push(item.clone());
        } else if order.precedes(&pivot_key, &item_key) {
            greater.push(item.clone());
        } else {
            // Includes keys that compare unordered (e.g. NaN projections);
            // parking them with the pivot keeps the recursion finite.
            equal.push(item.clone());
        }
    }

    let mut sorted = three_way_quick_sort(&less, tracker, key, order);
    sorted.extend(equal);
    sorted.extend(three_way_quick_sort(&greater, tracker, key, order));
    sorted
}

/// Strategy type for [`quick_sort`].
#[derive(Debug, Clone, Copy, Default)]
pub struct QuickSort;

impl SortAlgorithm for QuickSort {
    fn name(&self) -> &'static str {
        "Quick Sort"
    }

    fn sort<T, K, F>(
        &self,
        data: &mut Vec<T>,
        tracker: &mut PerformanceTracker,
        key: &F,
        order: SortOrder,
    ) where
        T: Clone,
        F: Fn(&T) -> K,
        K: PartialOrd,
    {
        quick_sort(data, tracker, key, order);
    }
}

/// Strategy type for [`merge_sort`].
#[derive(Debug, Clone, Copy, Default)]
pub struct MergeSort;

impl SortAlgorithm for MergeSort {
    fn name(&self) -> &'static str {
        "Merge Sort"
    }

    fn sort<T, K, F>(
        &self,
        data: &mut Vec<T>,
        tracker: &mut PerformanceTracker,
        key: &F,
        order: SortOrder,
    ) where
        T: Clone,
        F: Fn(&T) -> K,
        K: PartialOrd,
    {
        *data = merge_sort(data, tracker, key, order);
    }
}

/// Strategy type for [`three_way_quick_sort`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreeWayQuickSort;

impl SortAlgorithm for ThreeWayQuickSort {
    fn name(&self) -> &'static str {
        "Three-Way Quick Sort"
    }

    fn sort<T, K, F>(
        &self,
        data: &mut Vec<T>,
        tracker: &mut PerformanceTracker,
        key: &F,
        order: SortOrder,
    ) where
        T: Clone,
        F: Fn(&T) -> K,
        K: PartialOrd,
    {
        *data = three_way_quick_sort(data, tracker, key, order);
    }
}
