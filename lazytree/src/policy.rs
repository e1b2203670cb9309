//! Traversal policy types.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Depth bound and child ordering for the depth-first traversals
/// ([`leaves`](crate::LazyNode::leaves), [`iddfs`](crate::LazyNode::iddfs),
/// [`iddfs_levels`](crate::LazyNode::iddfs_levels)).
///
/// The default is unbounded depth in generation order. An unbounded leaf
/// enumeration only terminates if every path of the tree ends in a leaf;
/// that is the caller's responsibility.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TraversalPolicy {
    /// Depth cutoff (root = 0). Nodes at this depth are reported without
    /// being expanded. `None` means no cutoff.
    pub max_depth: Option<usize>,
    /// Order in which a node's children are explored.
    pub child_order: ChildOrder,
}

impl TraversalPolicy {
    /// Policy with a depth cutoff and generation order.
    #[must_use]
    pub fn bounded(max_depth: usize) -> Self {
        Self {
            max_depth: Some(max_depth),
            ..Self::default()
        }
    }

    /// The same policy with a different depth cutoff.
    #[must_use]
    pub fn with_max_depth(self, max_depth: usize) -> Self {
        Self {
            max_depth: Some(max_depth),
            ..self
        }
    }

    /// The same policy with children shuffled from OS entropy.
    #[must_use]
    pub fn randomized(self) -> Self {
        Self {
            child_order: ChildOrder::Shuffled,
            ..self
        }
    }

    /// The same policy with children shuffled by a seeded generator.
    #[must_use]
    pub fn seeded(self, seed: u64) -> Self {
        Self {
            child_order: ChildOrder::SeededShuffle(seed),
            ..self
        }
    }

    /// Whether a node at `depth` is reported without expansion.
    #[must_use]
    pub fn is_cutoff(&self, depth: usize) -> bool {
        self.max_depth.is_some_and(|limit| depth >= limit)
    }
}

/// Child exploration order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ChildOrder {
    /// The order the child generator produced. Default.
    #[default]
    AsGenerated,
    /// A fresh random permutation per expansion, seeded from OS entropy.
    Shuffled,
    /// A random permutation per expansion from a generator seeded once with
    /// the given value. Reproducible.
    SeededShuffle(u64),
}

impl ChildOrder {
    /// Whether children are permuted at all.
    #[must_use]
    pub fn is_randomized(self) -> bool {
        !matches!(self, Self::AsGenerated)
    }

    /// The generator driving the permutation, if any.
    pub(crate) fn rng(self) -> Option<StdRng> {
        match self {
            Self::AsGenerated => None,
            Self::Shuffled => Some(StdRng::from_entropy()),
            Self::SeededShuffle(seed) => Some(StdRng::seed_from_u64(seed)),
        }
    }
}
