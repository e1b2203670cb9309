//! Randomized leaf enumeration.
//!
//! Shuffling children changes the order leaves are reported in, never the
//! multiset of reported values.

use lazytree::{ChildOrder, LazyNode, TraversalPolicy};
use lock_tests::fixtures::{interval_tree, pruned_interval_tree, Interval, FIXTURE_SEED};
use lock_tests::logging::init_test_tracing;

fn sorted(mut values: Vec<Interval>) -> Vec<Interval> {
    values.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.total_cmp(&b.1)));
    values
}

#[test]
fn randomized_leaves_are_the_same_multiset() {
    init_test_tracing();
    let tree = interval_tree();
    let ordered: Vec<Interval> = tree.leaves(&TraversalPolicy::bounded(6)).collect();
    assert_eq!(ordered.len(), 64);

    let shuffled: Vec<Interval> = tree
        .leaves(&TraversalPolicy::bounded(6).randomized())
        .collect();
    assert_eq!(sorted(shuffled), sorted(ordered));
}

#[test]
fn randomized_pruned_leaves_keep_their_sizes() {
    init_test_tracing();
    let tree = pruned_interval_tree();
    let ordered: Vec<f64> = tree.leaves(&TraversalPolicy::default()).collect();
    for seed in 0..16 {
        let shuffled: Vec<f64> = tree
            .leaves(&TraversalPolicy::default().seeded(seed))
            .collect();
        assert_eq!(shuffled, ordered, "every pruned leaf has width 0.125");
    }
}

#[test]
fn seeded_shuffle_actually_permutes() {
    init_test_tracing();
    let tree = interval_tree();
    let ordered: Vec<Interval> = tree.leaves(&TraversalPolicy::bounded(6)).collect();
    let differs = (0..8).any(|seed| {
        let shuffled: Vec<Interval> = tree
            .leaves(&TraversalPolicy::bounded(6).seeded(seed))
            .collect();
        shuffled != ordered
    });
    assert!(differs, "no seed out of 8 permuted 64 leaves");
}

#[test]
fn seeded_shuffle_is_reproducible() {
    init_test_tracing();
    let policy = TraversalPolicy {
        max_depth: Some(6),
        child_order: ChildOrder::SeededShuffle(FIXTURE_SEED),
    };
    let first: Vec<Interval> = interval_tree().leaves(&policy).collect();
    for _ in 1..10 {
        let other: Vec<Interval> = interval_tree().leaves(&policy).collect();
        assert_eq!(first, other);
    }
}

#[test]
fn randomized_iddfs_keeps_each_level() {
    init_test_tracing();
    let tree = interval_tree();
    let policy = TraversalPolicy::bounded(4);
    let ordered: Vec<Vec<Interval>> = tree.iddfs_levels(&policy).collect();
    let shuffled: Vec<Vec<Interval>> = tree.iddfs_levels(&policy.randomized()).collect();
    assert_eq!(ordered.len(), shuffled.len());
    for (a, b) in ordered.into_iter().zip(shuffled) {
        assert_eq!(sorted(a), sorted(b));
    }
}
