//! Breadth-first traversal.

use std::collections::VecDeque;
use std::iter::FusedIterator;

use tracing::{debug, trace};

use crate::contract::LazyNode;
use crate::stats::TraversalStats;

/// Level-order iterator over node views.
///
/// Each call to `next` first expands the node visited by the previous call
/// (enqueueing its children at the back), then visits the node at the front
/// of the queue. Expansion is therefore deferred until the caller asks for
/// more, so taking `n` values never generates children of the `n`-th node.
///
/// Created by [`LazyNode::bfs`].
pub struct Bfs<N> {
    queue: VecDeque<N>,
    pending: Option<N>,
    stats: TraversalStats,
}

impl<N: LazyNode> Bfs<N> {
    pub(crate) fn new(root: N) -> Self {
        let mut stats = TraversalStats::default();
        stats.record_frontier(1);
        Self {
            queue: VecDeque::from([root]),
            pending: None,
            stats,
        }
    }

    /// Counters for the traversal so far.
    #[must_use]
    pub fn stats(&self) -> TraversalStats {
        self.stats
    }

    fn expand(&mut self, node: &N) {
        let children = node.children();
        self.stats.expanded += 1;
        trace!(children = children.len(), queued = self.queue.len(), "bfs: expanded node");
        self.queue.extend(children);
        self.stats.record_frontier(self.queue.len());
    }
}

impl<N: LazyNode> Iterator for Bfs<N> {
    type Item = N::View;

    /// # Panics
    ///
    /// Propagates any panic raised by the node's `children` or `view`.
    fn next(&mut self) -> Option<N::View> {
        if let Some(previous) = self.pending.take() {
            self.expand(&previous);
        }
        let Some(current) = self.queue.pop_front() else {
            debug!(
                visited = self.stats.visited,
                expanded = self.stats.expanded,
                "bfs: frontier exhausted"
            );
            return None;
        };
        let view = current.view();
        self.stats.visited += 1;
        self.pending = Some(current);
        Some(view)
    }
}

impl<N: LazyNode> FusedIterator for Bfs<N> {}
