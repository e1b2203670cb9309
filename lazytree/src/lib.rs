//! Lazytree: trees whose structure is generated on demand.
//!
//! A tree is described by a root value and a function from a value to its
//! children. Nothing below the root exists until a traversal asks for it, so
//! the tree may be infinite (recursive subdivision of an interval, an
//! unbounded search space) as long as only a bounded frontier is visited.
//!
//! # Module dependency direction
//!
//! ```text
//! stats, policy, frontier  ←  bfs, cost_guided, leaves, iddfs  ←  contract  ←  node
//! (bookkeeping, config)       (traversal iterators)                (LazyNode)    (LazyTree)
//! ```
//!
//! # Key types
//!
//! - [`LazyTree`] — immutable node value with `map`/`prune`/view-reset transforms
//! - [`LazyNode`] — the contract every traversal consumes
//! - [`TraversalPolicy`] — depth bound and child ordering for depth-first traversals
//! - [`CostFrontier`] — max-cost heap with FIFO tie-breaking
//! - [`TraversalStats`] — observational counters exposed by every traversal
//!
//! # Example
//!
//! ```
//! use lazytree::{LazyNode, LazyTree, TraversalPolicy};
//!
//! let tree = LazyTree::new((0.0_f64, 1.0_f64), |&(lo, hi): &(f64, f64)| {
//!     let mid = lo + (hi - lo) / 2.0;
//!     [(lo, mid), (mid, hi)]
//! })
//! .map(|(lo, hi)| hi - lo)
//! .prune(|size: &f64| *size <= 0.2);
//!
//! let leaves: Vec<f64> = tree.leaves(&TraversalPolicy::default()).collect();
//! assert_eq!(leaves.len(), 8);
//! ```

#![forbid(unsafe_code)]

pub mod bfs;
pub mod contract;
pub mod cost_guided;
pub mod frontier;
pub mod iddfs;
pub mod leaves;
pub mod node;
pub mod policy;
pub mod stats;

pub use contract::LazyNode;
pub use frontier::{ByOrd, CostFrontier, CostKey};
pub use node::LazyTree;
pub use policy::{ChildOrder, TraversalPolicy};
pub use stats::TraversalStats;
