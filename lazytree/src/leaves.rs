//! Depth-first leaf enumeration.

use std::iter::FusedIterator;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing::{debug, trace};

use crate::contract::LazyNode;
use crate::policy::TraversalPolicy;
use crate::stats::TraversalStats;

/// Iterator over the views of a tree's frontier leaves.
///
/// A node is reported when it has no children (naturally or because it was
/// pruned) or when it sits at the policy's depth cutoff. Nodes at the cutoff
/// are reported without calling `children`, so the cutoff also bounds how
/// much of the tree is generated.
///
/// Exploration uses an explicit stack of `(node, depth)` pairs. Children are
/// pushed in reverse so they are explored in generation order; with a
/// shuffled [`ChildOrder`](crate::ChildOrder) they are permuted first. The
/// permutation changes the order of the reported leaves, never the multiset.
///
/// Created by [`LazyNode::leaves`].
pub struct Leaves<N> {
    stack: Vec<(N, usize)>,
    policy: TraversalPolicy,
    rng: Option<StdRng>,
    reached_cutoff: bool,
    stats: TraversalStats,
}

impl<N: LazyNode> Leaves<N> {
    pub(crate) fn new(root: N, policy: &TraversalPolicy) -> Self {
        Self::with_rng(root, *policy, policy.child_order.rng())
    }

    /// A pass whose permutation comes from a caller-owned generator.
    pub(crate) fn with_rng(root: N, policy: TraversalPolicy, rng: Option<StdRng>) -> Self {
        let mut stats = TraversalStats::default();
        stats.record_frontier(1);
        Self {
            stack: vec![(root, 0)],
            policy,
            rng,
            reached_cutoff: false,
            stats,
        }
    }

    /// Counters for the traversal so far.
    #[must_use]
    pub fn stats(&self) -> TraversalStats {
        self.stats
    }

    /// Whether the cutoff has hidden any expandable node.
    ///
    /// A leaf sitting exactly at the cutoff does not count. Once the iterator
    /// is exhausted, `false` means no deeper limit would report anything new.
    #[must_use]
    pub fn reached_cutoff(&self) -> bool {
        self.reached_cutoff
    }
}

impl<N: LazyNode> Iterator for Leaves<N> {
    type Item = N::View;

    /// # Panics
    ///
    /// Propagates any panic raised by the node's `children` or `view`.
    fn next(&mut self) -> Option<N::View> {
        while let Some((node, depth)) = self.stack.pop() {
            if self.policy.is_cutoff(depth) {
                if !node.is_leaf() {
                    self.reached_cutoff = true;
                }
                self.stats.visited += 1;
                return Some(node.view());
            }

            let mut children = node.children();
            self.stats.expanded += 1;
            if children.is_empty() {
                self.stats.visited += 1;
                return Some(node.view());
            }

            if let Some(rng) = self.rng.as_mut() {
                children.shuffle(rng);
            }
            trace!(depth, children = children.len(), "leaves: expanded node");
            self.stack
                .extend(children.into_iter().rev().map(|child| (child, depth + 1)));
            self.stats.record_frontier(self.stack.len());
        }
        debug!(
            visited = self.stats.visited,
            expanded = self.stats.expanded,
            reached_cutoff = self.reached_cutoff,
            "leaves: stack exhausted"
        );
        None
    }
}

impl<N: LazyNode> FusedIterator for Leaves<N> {}
