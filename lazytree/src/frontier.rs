//! Cost-ordered frontier with deterministic tie-breaking.
//!
//! Entries pop highest cost first. Equal costs pop in the order they were
//! pushed: every push is stamped with a monotonically increasing sequence
//! number, and the sequence is the secondary key. Items themselves are never
//! compared.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// Total ordering over cost values.
///
/// Costs need a total order for the heap to be deterministic. Integers use
/// their natural order; floats use the IEEE 754 total order
/// ([`f64::total_cmp`]), so `NaN` compares above every number instead of
/// poisoning the heap and `-0.0` sorts below `+0.0`. Wrap any other [`Ord`]
/// type in [`ByOrd`].
pub trait CostKey {
    /// Compare two costs. `Greater` pops first.
    fn cmp_cost(&self, other: &Self) -> Ordering;
}

macro_rules! cost_key_via_ord {
    ($($t:ty),* $(,)?) => {
        $(
            impl CostKey for $t {
                fn cmp_cost(&self, other: &Self) -> Ordering {
                    self.cmp(other)
                }
            }
        )*
    };
}

cost_key_via_ord!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, bool, char);

impl CostKey for f32 {
    fn cmp_cost(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }
}

impl CostKey for f64 {
    fn cmp_cost(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }
}

impl<T: CostKey> CostKey for Reverse<T> {
    fn cmp_cost(&self, other: &Self) -> Ordering {
        other.0.cmp_cost(&self.0)
    }
}

impl<A: CostKey, B: CostKey> CostKey for (A, B) {
    fn cmp_cost(&self, other: &Self) -> Ordering {
        self.0
            .cmp_cost(&other.0)
            .then_with(|| self.1.cmp_cost(&other.1))
    }
}

/// Adapter giving any [`Ord`] type a [`CostKey`] order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ByOrd<T>(pub T);

impl<T: Ord> CostKey for ByOrd<T> {
    fn cmp_cost(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

/// A frontier entry: ordering key plus payload.
///
/// `BinaryHeap` is a max-heap. Higher cost is greater; on equal cost the
/// older (lower) sequence is greater, which makes ties FIFO.
struct FrontierEntry<T, K> {
    cost: K,
    sequence: u64,
    item: T,
}

impl<T, K: CostKey> FrontierEntry<T, K> {
    fn key_cmp(&self, other: &Self) -> Ordering {
        self.cost
            .cmp_cost(&other.cost)
            .then_with(|| Reverse(self.sequence).cmp(&Reverse(other.sequence)))
    }
}

impl<T, K: CostKey> PartialEq for FrontierEntry<T, K> {
    fn eq(&self, other: &Self) -> bool {
        self.key_cmp(other) == Ordering::Equal
    }
}

impl<T, K: CostKey> Eq for FrontierEntry<T, K> {}

impl<T, K: CostKey> PartialOrd for FrontierEntry<T, K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T, K: CostKey> Ord for FrontierEntry<T, K> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key_cmp(other)
    }
}

/// Best-first frontier manager.
///
/// Maintains:
/// - A `BinaryHeap` for O(log n) pop of the highest-cost item
/// - The next enqueue sequence number (the tie-breaker)
/// - The high-water mark of the heap size
pub struct CostFrontier<T, K> {
    heap: BinaryHeap<FrontierEntry<T, K>>,
    next_sequence: u64,
    high_water: u64,
}

impl<T, K: CostKey> CostFrontier<T, K> {
    /// Create a new empty frontier.
    #[must_use]
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_sequence: 0,
            high_water: 0,
        }
    }

    /// Push an item with its cost. Returns the sequence number it was
    /// stamped with.
    pub fn push(&mut self, item: T, cost: K) -> u64 {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.heap.push(FrontierEntry {
            cost,
            sequence,
            item,
        });
        let size = self.heap.len() as u64;
        if size > self.high_water {
            self.high_water = size;
        }
        sequence
    }

    /// Pop the highest-cost item, oldest first among equal costs.
    #[must_use]
    pub fn pop(&mut self) -> Option<T> {
        self.heap.pop().map(|e| e.item)
    }

    /// Cost of the item [`pop`](Self::pop) would return next.
    #[must_use]
    pub fn peek_cost(&self) -> Option<&K> {
        self.heap.peek().map(|e| &e.cost)
    }

    /// Current frontier size.
    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether the frontier is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// High-water mark of frontier size.
    #[must_use]
    pub fn high_water(&self) -> u64 {
        self.high_water
    }

    /// Total number of pushes so far.
    #[must_use]
    pub fn pushed(&self) -> u64 {
        self.next_sequence
    }
}

impl<T, K: CostKey> Default for CostFrontier<T, K> {
    fn default() -> Self {
        Self::new()
    }
}
