//! Foundational types for sortmeter.
//!
//! This module defines:
//! - [`PerformanceTracker`]: the comparison counter shared by all algorithms.
//! - [`SortOrder`]: ascending/descending selection.
//! - [`SortAlgorithm`]: the trait every sorting strategy implements.
//! - [`AnalysisReport`]: the per-run measurement record produced by the harness.

use std::time::Duration;

/// Counts the pairwise element comparisons performed by a sorting algorithm.
///
/// The counter starts at zero and is incremented exactly once per comparison the
/// algorithm itself performs (never once per key-function call). Each analysis
/// run owns a fresh or freshly reset tracker; sharing one tracker across runs
/// cross-contaminates the counts.
///
/// # Examples
///
/// ```
/// use sortmeter::core::PerformanceTracker;
///
/// let mut tracker = PerformanceTracker::new();
/// tracker.record_comparison();
/// tracker.record_comparison();
/// assert_eq!(tracker.comparisons(), 2);
///
/// tracker.reset();
/// assert_eq!(tracker.comparisons(), 0);
/// ```
#[derive(Debug, Default)]
pub struct PerformanceTracker {
    comparisons: u64,
}

impl PerformanceTracker {
    /// Creates a tracker with a zeroed comparison count.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one pairwise element comparison.
    #[inline]
    pub fn record_comparison(&mut self) {
        self.comparisons += 1;
    }

    /// Returns the number of comparisons recorded so far.
    pub fn comparisons(&self) -> u64 {
        self.comparisons
    }

    /// Resets the comparison count to zero.
    pub fn reset(&mut self) {
        self.comparisons = 0;
    }
}

/// Direction in which a dataset is ordered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Non-decreasing output (the default).
    #[default]
    Ascending,
    /// Non-increasing output.
    Descending,
}

impl SortOrder {
    /// Returns `true` if `a` must be placed before `b` under this order.
    ///
    /// Equal keys never "precede" each other, so callers branching on this get
    /// Lomuto and stable-merge tie-break semantics for free: the element
    /// already on the right side stays there.
    #[inline]
    pub fn precedes<K: PartialOrd>(self, a: &K, b: &K) -> bool {
        match self {
            SortOrder::Ascending => a < b,
            SortOrder::Descending => a > b,
        }
    }
}

/// A sorting strategy conforming to the common instrumented contract.
///
/// Implementations replace the contents of `data` with a permutation of it,
/// ordered by `key(element)` under `order`, and record every pairwise element
/// comparison on `tracker`.
///
/// # Examples
///
/// ```
/// use sortmeter::core::{PerformanceTracker, SortAlgorithm, SortOrder};
/// use sortmeter::algo::MergeSort;
///
/// let mut data = vec![3.0, 1.0, 2.0];
/// let mut tracker = PerformanceTracker::new();
/// MergeSort.sort(&mut data, &mut tracker, &|x: &f64| *x, SortOrder::Ascending);
///
/// assert_eq!(data, vec![1.0, 2.0, 3.0]);
/// assert!(tracker.comparisons() > 0);
/// ```
pub trait SortAlgorithm {
    /// Human-readable algorithm name used in reports.
    fn name(&self) -> &'static str;

    /// Sorts `data` in place by `key` under `order`, counting comparisons.
    fn sort<T, K, F>(
        &self,
        data: &mut Vec<T>,
        tracker: &mut PerformanceTracker,
        key: &F,
        order: SortOrder,
    ) where
        T: Clone,
        F: Fn(&T) -> K,
        K: PartialOrd;
}

/// Measurements from one algorithm run, produced by [`analyze`].
///
/// Constructed once by the harness and never mutated afterwards.
///
/// [`analyze`]: crate::analyze::analyze
#[derive(Debug, Clone)]
pub struct AnalysisReport<T> {
    /// The sorted copy of the input.
    pub sorted: Vec<T>,
    /// Wall-clock time spent inside the sort call.
    pub elapsed: Duration,
    /// Pairwise comparisons performed by the algorithm.
    pub comparisons: u64,
    /// Estimated deep memory footprint of the sorted result, in bytes.
    pub memory_bytes: usize,
}

impl<T> AnalysisReport<T> {
    /// Elapsed time in seconds, for display alongside the comparison count.
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}
