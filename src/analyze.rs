//! The analysis harness: run one algorithm, measure everything.

use std::time::Instant;

use crate::core::{AnalysisReport, PerformanceTracker, SortAlgorithm, SortOrder};
use crate::measure::DeepSize;

/// Runs `algorithm` over a defensive copy of `data` and measures the run.
///
/// A fresh [`PerformanceTracker`] is created per call, so comparison counts
/// never leak between runs, and the caller's sequence is never mutated; running
/// several algorithms over the same dataset therefore benchmarks them against
/// the identical initial ordering. Wall-clock time covers the sort call only.
/// The reported memory footprint is the deep size of the *sorted result*.
///
/// The harness itself never fails; a panic inside the algorithm or key
/// function propagates to the caller.
///
/// # Examples
///
/// ```
/// use sortmeter::algo::{MergeSort, QuickSort};
/// use sortmeter::analyze::analyze;
/// use sortmeter::core::SortOrder;
///
/// let data = vec![3.0, 1.0, 2.0];
/// let report = analyze(&QuickSort, &data, &|x: &f64| *x, SortOrder::Ascending);
///
/// assert_eq!(report.sorted, vec![1.0, 2.0, 3.0]);
/// assert_eq!(data, vec![3.0, 1.0, 2.0]); // input untouched
///
/// let merge_report = analyze(&MergeSort, &data, &|x: &f64| *x, SortOrder::Ascending);
/// assert_eq!(merge_report.sorted, report.sorted);
/// ```
pub fn analyze<A, T, K, F>(
    algorithm: &A,
    data: &[T],
    key: &F,
    order: SortOrder,
) -> AnalysisReport<T>
where
    A: SortAlgorithm,
    T: Clone + DeepSize,
    F: Fn(&T) -> K,
    K: PartialOrd,
{
    let mut tracker = PerformanceTracker::new();
    let mut working = data.to_vec();

    let start = Instant::now();
    algorithm.sort(&mut working, &mut tracker, key, order);
    let elapsed = start.elapsed();

    let memory_bytes = working.deep_size();

    AnalysisReport {
        sorted: working,
        elapsed,
        comparisons: tracker.comparisons(),
        memory_bytes,
    }
}
