//! Node contract trait.

use crate::bfs::Bfs;
use crate::cost_guided::CostGuided;
use crate::frontier::CostKey;
use crate::iddfs::{Iddfs, IddfsLevels};
use crate::leaves::Leaves;
use crate::policy::TraversalPolicy;

/// One position in a lazily generated tree.
///
/// Every traversal in this crate is written against this trait alone, so any
/// node type that satisfies it can be traversed, not just [`crate::LazyTree`].
///
/// # Contract
///
/// - `children` returns an empty vector whenever `is_leaf` is true.
/// - `children`, `view` and `is_leaf` are pure: the same node gives the same
///   answers on every call. They may be expensive and are only called when a
///   traversal actually visits or expands the node.
/// - Nodes are immutable values. Cloning a node must be cheap relative to
///   expanding it.
///
/// Traversal state (queues, heaps, stacks) lives in the returned iterator,
/// never on the node, so the same node may be traversed any number of times
/// from independent call sites.
pub trait LazyNode: Clone {
    /// The value exposed to traversal consumers.
    type View;

    /// Derive this node's children, in generation order.
    fn children(&self) -> Vec<Self>;

    /// Project this node's raw value through its view.
    fn view(&self) -> Self::View;

    /// Whether this node's subtree is cut off from expansion.
    fn is_leaf(&self) -> bool;

    /// Breadth-first traversal yielding views in level order.
    ///
    /// The sequence is infinite for an infinite tree without leaves; bound it
    /// with `take` or similar.
    fn bfs(&self) -> Bfs<Self> {
        Bfs::new(self.clone())
    }

    /// Best-first traversal: always visits the highest-cost node on the
    /// frontier next, ties broken by enqueue order.
    fn cost_guided_traversal<K, F>(&self, cost: F) -> CostGuided<Self, K, F>
    where
        K: CostKey,
        F: FnMut(&Self::View) -> K,
    {
        CostGuided::new(self.clone(), cost)
    }

    /// Depth-first enumeration of the views of true leaves and of nodes at
    /// `policy.max_depth`.
    fn leaves(&self, policy: &TraversalPolicy) -> Leaves<Self> {
        Leaves::new(self.clone(), policy)
    }

    /// Iterative deepening, flattened: every leaf view of depth pass
    /// `0, 1, 2, ...` in one sequence.
    fn iddfs(&self, policy: &TraversalPolicy) -> Iddfs<Self> {
        Iddfs::new(self.clone(), policy)
    }

    /// Iterative deepening yielding one bundle of leaf views per depth pass.
    fn iddfs_levels(&self, policy: &TraversalPolicy) -> IddfsLevels<Self> {
        IddfsLevels::new(self.clone(), policy)
    }
}
