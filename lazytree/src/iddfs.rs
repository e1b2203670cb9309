//! Iterative-deepening depth-first traversal.
//!
//! Runs a bounded [`Leaves`] pass for each depth limit `0, 1, 2, ...` up to
//! the policy's `max_depth`. Leaves found at shallow limits are reported
//! again by every deeper pass; that repetition is the usual price of
//! iterative deepening and is not filtered out.
//!
//! With no `max_depth` the passes continue until one of them finds no
//! expandable node at its limit: every further pass would repeat it. On an infinite tree this never happens
//! and the iterator is infinite.

use std::iter::FusedIterator;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::contract::LazyNode;
use crate::leaves::Leaves;
use crate::policy::TraversalPolicy;
use crate::stats::TraversalStats;

/// Shared bookkeeping for the flattened and the bundled forms.
struct Passes<N> {
    root: N,
    policy: TraversalPolicy,
    /// Draws one seed per pass when children are shuffled.
    seeds: Option<StdRng>,
    next_depth: usize,
    finished: bool,
    stats: TraversalStats,
}

impl<N: LazyNode> Passes<N> {
    fn new(root: N, policy: &TraversalPolicy) -> Self {
        Self {
            root,
            policy: *policy,
            seeds: policy.child_order.rng(),
            next_depth: 0,
            finished: false,
            stats: TraversalStats::default(),
        }
    }

    /// Start the next depth pass, or `None` once the passes are done.
    fn start(&mut self) -> Option<Leaves<N>> {
        if self.finished {
            return None;
        }
        let depth = self.next_depth;
        if self.policy.max_depth.is_some_and(|limit| depth > limit) {
            self.finished = true;
            debug!(passes = self.stats.passes, "iddfs: depth bound reached");
            return None;
        }
        self.next_depth += 1;
        self.stats.passes += 1;
        debug!(depth, "iddfs: starting depth pass");

        let rng = self
            .seeds
            .as_mut()
            .map(|seeds| StdRng::seed_from_u64(seeds.gen()));
        Some(Leaves::with_rng(
            self.root.clone(),
            self.policy.with_max_depth(depth),
            rng,
        ))
    }

    /// Record a finished pass.
    fn finish(&mut self, pass: &Leaves<N>) {
        self.stats.absorb(&pass.stats());
        if !pass.reached_cutoff() {
            self.finished = true;
            debug!(
                passes = self.stats.passes,
                "iddfs: no expandable node at the last limit"
            );
        }
    }
}

/// Flattened iterative deepening: every leaf view of every depth pass.
///
/// Created by [`LazyNode::iddfs`].
pub struct Iddfs<N> {
    passes: Passes<N>,
    current: Option<Leaves<N>>,
}

impl<N: LazyNode> Iddfs<N> {
    pub(crate) fn new(root: N, policy: &TraversalPolicy) -> Self {
        Self {
            passes: Passes::new(root, policy),
            current: None,
        }
    }

    /// Counters accumulated over all passes so far, including the one in
    /// progress.
    #[must_use]
    pub fn stats(&self) -> TraversalStats {
        let mut stats = self.passes.stats;
        if let Some(pass) = &self.current {
            stats.absorb(&pass.stats());
        }
        stats
    }
}

impl<N: LazyNode> Iterator for Iddfs<N> {
    type Item = N::View;

    /// # Panics
    ///
    /// Propagates any panic raised by the node's `children` or `view`.
    fn next(&mut self) -> Option<N::View> {
        loop {
            if let Some(pass) = self.current.as_mut() {
                if let Some(view) = pass.next() {
                    return Some(view);
                }
                if let Some(done) = self.current.take() {
                    self.passes.finish(&done);
                }
            }
            self.current = Some(self.passes.start()?);
        }
    }
}

impl<N: LazyNode> FusedIterator for Iddfs<N> {}

/// Iterative deepening yielding one bundle of leaf views per depth pass.
///
/// Bundle `d` holds exactly what `leaves` reports with `max_depth = d`.
///
/// Created by [`LazyNode::iddfs_levels`].
pub struct IddfsLevels<N> {
    passes: Passes<N>,
}

impl<N: LazyNode> IddfsLevels<N> {
    pub(crate) fn new(root: N, policy: &TraversalPolicy) -> Self {
        Self {
            passes: Passes::new(root, policy),
        }
    }

    /// Counters accumulated over all completed passes.
    #[must_use]
    pub fn stats(&self) -> TraversalStats {
        self.passes.stats
    }
}

impl<N: LazyNode> Iterator for IddfsLevels<N> {
    type Item = Vec<N::View>;

    /// # Panics
    ///
    /// Propagates any panic raised by the node's `children` or `view`.
    fn next(&mut self) -> Option<Vec<N::View>> {
        let mut pass = self.passes.start()?;
        let bundle: Vec<N::View> = pass.by_ref().collect();
        self.passes.finish(&pass);
        Some(bundle)
    }
}

impl<N: LazyNode> FusedIterator for IddfsLevels<N> {}
