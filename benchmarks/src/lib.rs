//! Shared trees and workloads for the lazytree benchmark suites.

use lazytree::{LazyNode, LazyTree, TraversalPolicy, TraversalStats};

/// A half-open interval `(lo, hi)`.
pub type Interval = (f64, f64);

/// The infinite interval tree rooted at `[0, 1)`, halving at every level.
#[must_use]
pub fn interval_tree() -> LazyTree<Interval> {
    LazyTree::new((0.0, 1.0), |&(lo, hi): &Interval| {
        let mid = lo + (hi - lo) / 2.0;
        [(lo, mid), (mid, hi)]
    })
}

/// The infinite complete `branching`-ary tree over heap indices.
#[must_use]
pub fn heap_tree(branching: u64) -> LazyTree<u64> {
    LazyTree::new(0u64, move |&n: &u64| {
        (1..=branching).map(move |k| branching * n + k)
    })
}

/// Which traversal a workload drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalKind {
    /// `bfs().take(n)`.
    Bfs,
    /// `cost_guided_traversal(size).take(n)`.
    CostGuided,
    /// `leaves` bounded at `depth`.
    Leaves,
    /// Flattened `iddfs` bounded at `depth`.
    Iddfs,
}

/// A named, fixed-size traversal over the interval tree.
#[derive(Debug, Clone, Copy)]
pub struct Workload {
    /// Report name.
    pub name: &'static str,
    /// Traversal to run.
    pub kind: TraversalKind,
    /// Values taken by the infinite traversals.
    pub take: usize,
    /// Depth bound of the depth-first traversals.
    pub depth: usize,
}

/// The workloads timed by the auditable report.
#[must_use]
pub fn standard_workloads() -> Vec<Workload> {
    vec![
        Workload {
            name: "bfs_4095",
            kind: TraversalKind::Bfs,
            take: 4095,
            depth: 0,
        },
        Workload {
            name: "cost_guided_4095",
            kind: TraversalKind::CostGuided,
            take: 4095,
            depth: 0,
        },
        Workload {
            name: "leaves_depth_12",
            kind: TraversalKind::Leaves,
            take: 0,
            depth: 12,
        },
        Workload {
            name: "iddfs_depth_11",
            kind: TraversalKind::Iddfs,
            take: 0,
            depth: 11,
        },
    ]
}

/// Run a workload to completion, returning the number of values produced
/// and the traversal's counters.
#[must_use]
pub fn run_workload(workload: &Workload) -> (usize, TraversalStats) {
    let tree = interval_tree();
    let policy = TraversalPolicy::bounded(workload.depth);
    match workload.kind {
        TraversalKind::Bfs => {
            let mut bfs = tree.bfs();
            let produced = bfs.by_ref().take(workload.take).count();
            (produced, bfs.stats())
        }
        TraversalKind::CostGuided => {
            let mut guided = tree.cost_guided_traversal(|&(lo, hi): &Interval| hi - lo);
            let produced = guided.by_ref().take(workload.take).count();
            (produced, guided.stats())
        }
        TraversalKind::Leaves => {
            let mut leaves = tree.leaves(&policy);
            let produced = leaves.by_ref().count();
            (produced, leaves.stats())
        }
        TraversalKind::Iddfs => {
            let mut iddfs = tree.iddfs(&policy);
            let produced = iddfs.by_ref().count();
            (produced, iddfs.stats())
        }
    }
}
