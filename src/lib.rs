//! # Sortmeter
//!
//! `sortmeter` is a small instrumented benchmarking library (and interactive
//! CLI) that compares classic sorting algorithms — an in-place Lomuto
//! [quick sort](algo::QuickSort), a stable [merge sort](algo::MergeSort), and a
//! [three-way quick sort](algo::ThreeWayQuickSort) — on user-supplied data.
//!
//! Each run reports:
//!
//! - **Wall-clock time** of the sort call itself.
//! - **Comparison count**, recorded by a [`PerformanceTracker`] exactly once
//!   per pairwise element comparison the algorithm performs.
//! - **Deep memory footprint** of the sorted result, computed by walking the
//!   value's ownership graph while counting each allocation once (shared
//!   `Rc`/`Arc` values and reference cycles are safe).
//!
//! ## Usage
//!
//! ### Comparing algorithms
//!
//! The [`analyze`] harness copies the input, times the run, and packages the
//! measurements, so several algorithms can be compared against the identical
//! initial ordering:
//!
//! ```rust
//! use sortmeter::prelude::*;
//!
//! let data = vec![3.0, 1.0, 2.0];
//!
//! let quick = analyze(&QuickSort, &data, &|x: &f64| *x, SortOrder::Ascending);
//! let merge = analyze(&MergeSort, &data, &|x: &f64| *x, SortOrder::Ascending);
//!
//! assert_eq!(quick.sorted, vec![1.0, 2.0, 3.0]);
//! assert_eq!(quick.sorted, merge.sorted);
//! ```
//!
//! ### Key functions and direction
//!
//! Both algorithms are parameterized by a key projection and a [`SortOrder`],
//! so richer records sort without the algorithms knowing their shape:
//!
//! ```rust
//! use sortmeter::input::Person;
//! use sortmeter::prelude::*;
//!
//! let people = vec![
//!     Person::new("Bob", 30, 3.2),
//!     Person::new("Alice", 25, 3.9),
//! ];
//!
//! let report = analyze(
//!     &MergeSort,
//!     &people,
//!     &|p: &Person| (p.age, p.name_key()),
//!     SortOrder::Ascending,
//! );
//!
//! assert_eq!(report.sorted[0].name, "Alice");
//! ```
//!
//! ## Measurement notes
//!
//! - Quick sort uses the Lomuto partition with the last element as pivot:
//!   O(n²) comparisons on adversarially ordered input, O(n log n) on average.
//!   Merge sort stays within O(n log n) regardless of input order.
//! - The deep size numbers are estimates: spare container capacity counts as
//!   owned bytes, and each distinct heap allocation is counted at most once.
//!
//! [`PerformanceTracker`]: core::PerformanceTracker
//! [`analyze`]: analyze::analyze
//! [`SortOrder`]: core::SortOrder

pub mod algo;
pub mod analyze;
pub mod core;
pub mod input;
pub mod measure;

pub use crate::algo::{MergeSort, QuickSort, ThreeWayQuickSort};
pub use crate::analyze::analyze;
pub use crate::core::{AnalysisReport, PerformanceTracker, SortAlgorithm, SortOrder};
pub use crate::measure::DeepSize;

pub mod prelude {
    pub use crate::algo::{MergeSort, QuickSort, ThreeWayQuickSort};
    pub use crate::analyze::analyze;
    pub use crate::core::{AnalysisReport, PerformanceTracker, SortAlgorithm, SortOrder};
    pub use crate::measure::DeepSize;
}
