//! Cost-guided (best-first) traversal.

use std::iter::FusedIterator;

use tracing::{debug, trace};

use crate::contract::LazyNode;
use crate::frontier::{CostFrontier, CostKey};
use crate::stats::TraversalStats;

/// Best-first iterator over node views.
///
/// Nodes wait on a [`CostFrontier`] keyed by `cost(view)`. Each call to
/// `next` expands the previously visited node (costing and enqueueing its
/// children), then pops and yields the highest-cost view. Equal costs are
/// visited in enqueue order, so a constant cost reproduces [`Bfs`] order.
///
/// Each node's view is computed once, when the node is enqueued, and handed
/// out unchanged when it is visited.
///
/// Created by [`LazyNode::cost_guided_traversal`].
///
/// [`Bfs`]: crate::bfs::Bfs
pub struct CostGuided<N: LazyNode, K, F> {
    frontier: CostFrontier<(N, N::View), K>,
    cost: F,
    pending: Option<N>,
    stats: TraversalStats,
}

impl<N, K, F> CostGuided<N, K, F>
where
    N: LazyNode,
    K: CostKey,
    F: FnMut(&N::View) -> K,
{
    pub(crate) fn new(root: N, cost: F) -> Self {
        let mut traversal = Self {
            frontier: CostFrontier::new(),
            cost,
            pending: None,
            stats: TraversalStats::default(),
        };
        traversal.enqueue(root);
        traversal
    }

    /// Counters for the traversal so far.
    #[must_use]
    pub fn stats(&self) -> TraversalStats {
        TraversalStats {
            frontier_high_water: self.frontier.high_water(),
            ..self.stats
        }
    }

    fn enqueue(&mut self, node: N) {
        let view = node.view();
        let cost = (self.cost)(&view);
        self.frontier.push((node, view), cost);
    }

    fn expand(&mut self, node: &N) {
        let children = node.children();
        self.stats.expanded += 1;
        trace!(
            children = children.len(),
            queued = self.frontier.len(),
            "cost_guided: expanded node"
        );
        for child in children {
            self.enqueue(child);
        }
    }
}

impl<N, K, F> Iterator for CostGuided<N, K, F>
where
    N: LazyNode,
    K: CostKey,
    F: FnMut(&N::View) -> K,
{
    type Item = N::View;

    /// # Panics
    ///
    /// Propagates any panic raised by the cost function or by the node's
    /// `children` or `view`.
    fn next(&mut self) -> Option<N::View> {
        if let Some(previous) = self.pending.take() {
            self.expand(&previous);
        }
        let Some((current, view)) = self.frontier.pop() else {
            debug!(
                visited = self.stats.visited,
                expanded = self.stats.expanded,
                "cost_guided: frontier exhausted"
            );
            return None;
        };
        self.stats.visited += 1;
        self.pending = Some(current);
        Some(view)
    }
}

impl<N, K, F> FusedIterator for CostGuided<N, K, F>
where
    N: LazyNode,
    K: CostKey,
    F: FnMut(&N::View) -> K,
{
}
