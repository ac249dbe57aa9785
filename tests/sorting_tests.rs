use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use sortmeter::prelude::*;

fn identity(x: &f64) -> f64 {
    *x
}

/// Sorts `data` with `algorithm` and returns (output, comparisons).
fn run<A: SortAlgorithm>(algorithm: &A, data: &[f64], order: SortOrder) -> (Vec<f64>, u64) {
    let mut working = data.to_vec();
    let mut tracker = PerformanceTracker::new();
    algorithm.sort(&mut working, &mut tracker, &identity, order);
    (working, tracker.comparisons())
}

fn expected(data: &[f64], order: SortOrder) -> Vec<f64> {
    let mut sorted = data.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());
    if order == SortOrder::Descending {
        sorted.reverse();
    }
    sorted
}

#[test]
fn test_basic_sort_all_algorithms() {
    let input = vec![5.0, 2.0, 8.0, 1.0, 9.0, 3.0];

    for order in [SortOrder::Ascending, SortOrder::Descending] {
        let want = expected(&input, order);
        assert_eq!(run(&QuickSort, &input, order).0, want);
        assert_eq!(run(&MergeSort, &input, order).0, want);
        assert_eq!(run(&ThreeWayQuickSort, &input, order).0, want);
    }
}

#[test]
fn test_edge_cases() {
    // Empty, single element, all equal, already sorted, reversed.
    let cases: Vec<Vec<f64>> = vec![
        vec![],
        vec![7.0],
        vec![4.0; 20],
        (0..20).map(f64::from).collect(),
        (0..20).rev().map(f64::from).collect(),
    ];

    for input in cases {
        let want = expected(&input, SortOrder::Ascending);
        assert_eq!(run(&QuickSort, &input, SortOrder::Ascending).0, want);
        assert_eq!(run(&MergeSort, &input, SortOrder::Ascending).0, want);
        assert_eq!(run(&ThreeWayQuickSort, &input, SortOrder::Ascending).0, want);
    }
}

#[test]
fn test_fuzz_random() {
    let mut rng = rand::rng();

    for _ in 0..200 {
        let len = rng.random_range(0..200);
        let input: Vec<f64> = (0..len).map(|_| rng.random_range(-1000.0..1000.0)).collect();

        for order in [SortOrder::Ascending, SortOrder::Descending] {
            let want = expected(&input, order);
            assert_eq!(run(&QuickSort, &input, order).0, want);
            assert_eq!(run(&MergeSort, &input, order).0, want);
            assert_eq!(run(&ThreeWayQuickSort, &input, order).0, want);
        }
    }
}

#[test]
fn test_fuzz_duplicate_heavy() {
    // Few distinct values stress the tie-break paths of every partition scheme.
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..100 {
        let len = rng.random_range(2..300);
        let input: Vec<f64> = (0..len)
            .map(|_| f64::from(rng.random_range(0..5i32)))
            .collect();

        let want = expected(&input, SortOrder::Ascending);
        assert_eq!(run(&QuickSort, &input, SortOrder::Ascending).0, want);
        assert_eq!(run(&MergeSort, &input, SortOrder::Ascending).0, want);
        assert_eq!(run(&ThreeWayQuickSort, &input, SortOrder::Ascending).0, want);
    }
}

#[test]
fn test_idempotence() {
    let mut rng = StdRng::seed_from_u64(7);
    let input: Vec<f64> = (0..100).map(|_| rng.random_range(0.0..50.0)).collect();

    let (once, _) = run(&MergeSort, &input, SortOrder::Ascending);
    let (twice, _) = run(&MergeSort, &once, SortOrder::Ascending);
    assert_eq!(once, twice);

    let (once, _) = run(&QuickSort, &input, SortOrder::Descending);
    let (twice, _) = run(&QuickSort, &once, SortOrder::Descending);
    assert_eq!(once, twice);
}

#[test]
fn test_merge_sort_stability() {
    // (key, input position): equal keys must keep their input order.
    let input: Vec<(u32, u32)> = vec![(2, 0), (1, 1), (2, 2), (1, 3), (2, 4), (1, 5)];

    let mut working = input.clone();
    let mut tracker = PerformanceTracker::new();
    MergeSort.sort(
        &mut working,
        &mut tracker,
        &|pair: &(u32, u32)| pair.0,
        SortOrder::Ascending,
    );

    assert_eq!(working, vec![(1, 1), (1, 3), (1, 5), (2, 0), (2, 2), (2, 4)]);
}

#[test]
fn test_key_function_orders_without_touching_elements() {
    let input = vec!["Banana".to_string(), "apple".to_string(), "Cherry".to_string()];

    let mut working = input.clone();
    let mut tracker = PerformanceTracker::new();
    QuickSort.sort(
        &mut working,
        &mut tracker,
        &|s: &String| s.to_lowercase(),
        SortOrder::Ascending,
    );

    // Case-insensitive order, original casing preserved.
    assert_eq!(working, vec!["apple", "Banana", "Cherry"]);
}

#[test]
fn test_comparison_counts_deterministic() {
    let mut rng = StdRng::seed_from_u64(99);
    let input: Vec<f64> = (0..150).map(|_| rng.random_range(0.0..1.0)).collect();

    let (_, quick_a) = run(&QuickSort, &input, SortOrder::Ascending);
    let (_, quick_b) = run(&QuickSort, &input, SortOrder::Ascending);
    assert_eq!(quick_a, quick_b);

    let (_, merge_a) = run(&MergeSort, &input, SortOrder::Ascending);
    let (_, merge_b) = run(&MergeSort, &input, SortOrder::Ascending);
    assert_eq!(merge_a, merge_b);

    let (_, three_a) = run(&ThreeWayQuickSort, &input, SortOrder::Ascending);
    let (_, three_b) = run(&ThreeWayQuickSort, &input, SortOrder::Ascending);
    assert_eq!(three_a, three_b);
}

#[test]
fn test_lomuto_worst_case_comparison_count() {
    // Already-sorted input with a last-element pivot degrades to n(n-1)/2.
    let input: Vec<f64> = (0..8).map(f64::from).collect();
    let (_, comparisons) = run(&QuickSort, &input, SortOrder::Ascending);
    assert_eq!(comparisons, 28);
}

#[test]
fn test_merge_sort_comparison_bound() {
    // Merge sort never exceeds n * ceil(log2 n) comparisons, whatever the
    // input order.
    let n = 128;
    let orders: Vec<Vec<f64>> = vec![
        (0..n).map(f64::from).collect(),
        (0..n).rev().map(f64::from).collect(),
        {
            let mut rng = StdRng::seed_from_u64(3);
            (0..n).map(|_| rng.random_range(0.0..1.0)).collect()
        },
    ];

    let bound = (n as u64) * (n as f64).log2().ceil() as u64;
    for input in orders {
        let (_, comparisons) = run(&MergeSort, &input, SortOrder::Ascending);
        assert!(comparisons <= bound, "{comparisons} > {bound}");
    }
}

#[test]
fn test_three_way_retires_duplicates_in_one_pass() {
    // Every element equals the pivot, so one scan finishes the sort.
    let input = vec![6.0; 50];
    let (_, comparisons) = run(&ThreeWayQuickSort, &input, SortOrder::Ascending);
    assert_eq!(comparisons, 50);
}

#[test]
fn test_tracker_reset() {
    let input = vec![3.0, 1.0, 2.0];
    let mut tracker = PerformanceTracker::new();

    let mut working = input.clone();
    QuickSort.sort(&mut working, &mut tracker, &identity, SortOrder::Ascending);
    assert!(tracker.comparisons() > 0);

    tracker.reset();
    assert_eq!(tracker.comparisons(), 0);

    // A reset tracker counts a second run as if it were the first.
    let mut working = input.clone();
    QuickSort.sort(&mut working, &mut tracker, &identity, SortOrder::Ascending);
    let first = tracker.comparisons();

    tracker.reset();
    let mut working = input;
    QuickSort.sort(&mut working, &mut tracker, &identity, SortOrder::Ascending);
    assert_eq!(tracker.comparisons(), first);
}
