//! Traversal statistics.

/// Counters kept by every traversal iterator.
///
/// Purely observational: nothing in this crate stops a traversal based on
/// these numbers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TraversalStats {
    /// Values yielded so far.
    pub visited: u64,
    /// Calls to `children()` made by the traversal.
    pub expanded: u64,
    /// Peak size of the queue, heap, or stack.
    pub frontier_high_water: u64,
    /// Depth passes started (iterative deepening only; 0 elsewhere).
    pub passes: u64,
}

impl TraversalStats {
    pub(crate) fn record_frontier(&mut self, len: usize) {
        let len = len as u64;
        if len > self.frontier_high_water {
            self.frontier_high_water = len;
        }
    }

    /// Fold the counters of a finished sub-traversal into `self`.
    pub(crate) fn absorb(&mut self, other: &TraversalStats) {
        self.visited += other.visited;
        self.expanded += other.expanded;
        self.frontier_high_water = self.frontier_high_water.max(other.frontier_high_water);
        self.passes += other.passes;
    }
}
