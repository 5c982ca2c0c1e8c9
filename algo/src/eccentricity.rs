/*
 * SPDX-FileCopyrightText: 2026 Spangraph developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Eccentricity bounds by the Takes–Kosters bounding algorithm.
//!
//! Given breadth-first trees from some sources, the [estimator](estimate)
//! computes the exact eccentricity of the sources, used in turn as
//! _pivots_, and propagates it to all nodes reachable from the pivot by the
//! triangle inequality: if `d` is the distance between the pivot `p` and a
//! node `v`, then
//!
//! ```text
//! max(ecc(p) − d, d) ≤ ecc(v) ≤ ecc(p) + d.
//! ```
//!
//! A node is _settled_ when its lower and upper bounds meet, and it is not
//! considered anymore; a pivot settles itself. The estimator stops when all
//! nodes are settled. If the sources are exhausted first, it returns an
//! [`InsufficientSources`] error carrying the partial bounds, which can be
//! completed by [exact computation](InsufficientSources::settle_exact).
//!
//! Eccentricities are computed within connected components: nodes not
//! reachable from a pivot receive no bound from it, and a node no pivot
//! reaches has an infinite upper bound.
//!
//! # Examples
//! ```
//! use dsi_progress_logger::no_logging;
//! use spangraph::prelude::*;
//! use spangraph_algo::{bfs, eccentricity};
//!
//! // A star with three leaves
//! let graph = VecGraph::from_edges([(0, 1), (0, 2), (0, 3)]);
//!
//! // The center alone bounds the leaves between 1 and 2
//! let trees = bfs::precompute(&graph, &[0], 1, no_logging![]);
//! let err = eccentricity::estimate(&graph, &trees, no_logging![]).unwrap_err();
//! assert_eq!(err.bounds().exact(0), Some(1));
//! assert_eq!(err.bounds().lower(3), 1);
//! assert_eq!(err.bounds().upper(3), Some(2));
//!
//! // A leaf as a second pivot settles the other leaves
//! let trees = bfs::precompute(&graph, &[0, 1], 2, no_logging![]);
//! let bounds = eccentricity::estimate(&graph, &trees, no_logging![])?;
//! assert_eq!(bounds.exact(3), Some(2));
//! assert_eq!(bounds.diameter(), 2);
//! # Ok::<(), eccentricity::InsufficientSources>(())
//! ```

use dsi_progress_logger::ProgressLog;
use kahan::KahanSum;
use log::{debug, info};
use spangraph::traits::Graph;
use spangraph::visits::breadth_first::BfsTree;
use sux::prelude::*;
use thiserror::Error;

/// Per-node eccentricity bounds.
///
/// For every node `v`, `lower(v) ≤ ecc(v) ≤ upper(v)`, where an upper bound
/// of `None` is infinite. A node is settled when the bounds coincide, and
/// then [`exact`](EccentricityBounds::exact) returns its eccentricity.
#[derive(Debug, Clone)]
pub struct EccentricityBounds {
    lower: Box<[usize]>,
    /// `usize::MAX` is infinite.
    upper: Box<[usize]>,
    settled: BitVec,
    num_settled: usize,
}

impl EccentricityBounds {
    /// Creates trivial bounds (zero and infinity) for `num_nodes` nodes.
    pub fn new(num_nodes: usize) -> Self {
        Self {
            lower: vec![0; num_nodes].into_boxed_slice(),
            upper: vec![usize::MAX; num_nodes].into_boxed_slice(),
            settled: BitVec::new(num_nodes),
            num_settled: 0,
        }
    }

    pub fn num_nodes(&self) -> usize {
        self.lower.len()
    }

    /// Returns the lower bound of `node`.
    #[inline(always)]
    pub fn lower(&self, node: usize) -> usize {
        self.lower[node]
    }

    /// Returns the upper bound of `node`, or `None` if it is infinite.
    #[inline(always)]
    pub fn upper(&self, node: usize) -> Option<usize> {
        Some(self.upper[node]).filter(|&upper| upper != usize::MAX)
    }

    /// Returns the eccentricity of `node` if it is settled.
    #[inline(always)]
    pub fn exact(&self, node: usize) -> Option<usize> {
        self.settled[node].then(|| self.lower[node])
    }

    #[inline(always)]
    pub fn is_settled(&self, node: usize) -> bool {
        self.settled[node]
    }

    pub fn num_settled(&self) -> usize {
        self.num_settled
    }

    pub fn num_unsettled(&self) -> usize {
        self.num_nodes() - self.num_settled
    }

    pub fn all_settled(&self) -> bool {
        self.num_settled == self.num_nodes()
    }

    /// Returns an iterator over the nodes that are not settled.
    pub fn unsettled(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.num_nodes()).filter(|&node| !self.settled[node])
    }

    /// Returns the largest eccentricity of a settled node.
    ///
    /// When all nodes are settled, this is the diameter of the graph (the
    /// largest diameter of a connected component, if the graph is
    /// disconnected). Otherwise, it is a lower bound.
    pub fn diameter(&self) -> usize {
        (0..self.num_nodes())
            .filter_map(|node| self.exact(node))
            .max()
            .unwrap_or(0)
    }

    /// Returns the mean and variance of the gaps between upper and lower
    /// bounds, over the nodes with a finite upper bound.
    pub fn stats(&self) -> BoundStats {
        let gaps = || {
            (0..self.num_nodes())
                .filter_map(|node| self.upper(node).map(|upper| (upper - self.lower[node]) as f64))
        };
        let num_bounded = gaps().count();
        if num_bounded == 0 {
            return BoundStats::default();
        }
        let mean =
            gaps().fold(KahanSum::<f64>::new(), |sum, gap| sum + gap).sum() / num_bounded as f64;
        let variance = gaps()
            .fold(KahanSum::<f64>::new(), |sum, gap| {
                sum + (gap - mean) * (gap - mean)
            })
            .sum()
            / num_bounded as f64;
        BoundStats {
            num_bounded,
            mean,
            variance,
        }
    }

    /// Uses the root of `tree` as a pivot: computes its eccentricity and
    /// tightens the bounds of all unsettled nodes it reaches.
    ///
    /// Returns false, doing nothing, if the root is already settled or is not
    /// a node. The tree must have been computed on `graph`.
    pub fn add_pivot(&mut self, graph: impl Graph, tree: &BfsTree) -> bool {
        let pivot = tree.root();
        if pivot >= self.num_nodes() || self.settled[pivot] {
            return false;
        }
        debug_assert_eq!(tree.num_nodes(), self.num_nodes());

        let eccentricity = graph.eccentricity(pivot);
        debug_assert_eq!(eccentricity, tree.depth());

        for &node in tree.order() {
            if self.settled[node] {
                continue;
            }
            // Nodes in the visit order are reachable
            let Some(distance) = tree.distance(node) else {
                continue;
            };
            self.tighten(
                node,
                eccentricity.saturating_sub(distance).max(distance),
                eccentricity + distance,
            );
        }

        debug!(
            "Pivot {pivot} has eccentricity {eccentricity}; {} nodes settled",
            self.num_settled
        );
        true
    }

    /// Tightens the bounds of `node`, settling it if they meet.
    fn tighten(&mut self, node: usize, lower: usize, upper: usize) {
        debug_assert!(!self.settled[node]);
        self.lower[node] = self.lower[node].max(lower);
        self.upper[node] = self.upper[node].min(upper);
        debug_assert!(self.lower[node] <= self.upper[node]);
        if self.lower[node] == self.upper[node] {
            self.settle(node, self.lower[node]);
        }
    }

    fn settle(&mut self, node: usize, eccentricity: usize) {
        self.lower[node] = eccentricity;
        self.upper[node] = eccentricity;
        self.settled.set(node, true);
        self.num_settled += 1;
    }
}

/// Summary statistics of the gaps between eccentricity bounds.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BoundStats {
    /// The number of nodes with a finite upper bound.
    pub num_bounded: usize,
    /// The mean gap.
    pub mean: f64,
    /// The (population) variance of the gaps.
    pub variance: f64,
}

/// The sources were exhausted before all nodes were settled.
///
/// The error carries the partial bounds computed so far; unsettled nodes keep
/// their last bounds.
#[derive(Error, Debug, Clone)]
#[error(
    "Sources exhausted with {} of {} nodes unsettled",
    .bounds.num_unsettled(),
    .bounds.num_nodes()
)]
pub struct InsufficientSources {
    bounds: EccentricityBounds,
}

impl InsufficientSources {
    /// Returns the partial bounds.
    pub fn bounds(&self) -> &EccentricityBounds {
        &self.bounds
    }

    pub fn into_bounds(self) -> EccentricityBounds {
        self.bounds
    }

    /// Completes the partial bounds by computing exactly the eccentricity of
    /// every unsettled node.
    pub fn settle_exact(
        self,
        graph: impl Graph,
        pl: &mut impl ProgressLog,
    ) -> EccentricityBounds {
        let mut bounds = self.bounds;
        let unsettled = bounds.unsettled().collect::<Vec<_>>();

        pl.item_name("node");
        pl.expected_updates(Some(unsettled.len()));
        pl.start("Computing exact eccentricities of unsettled nodes...");

        for node in unsettled {
            let eccentricity = graph.eccentricity(node);
            debug_assert!(bounds.lower[node] <= eccentricity);
            debug_assert!(eccentricity <= bounds.upper[node]);
            bounds.settle(node, eccentricity);
            pl.light_update();
        }

        pl.done();
        bounds
    }
}

/// Computes eccentricity bounds for all nodes of `graph` using `trees` as
/// pivots.
///
/// Trees are considered in order; a tree is skipped if its root is already
/// settled (e.g., a source drawn twice) or is not a node of the graph. The
/// trees must have been computed on `graph`.
///
/// # Errors
///
/// [`InsufficientSources`], carrying the partial bounds, if the trees are
/// exhausted before all nodes are settled.
pub fn estimate(
    graph: impl Graph,
    trees: &[BfsTree],
    pl: &mut impl ProgressLog,
) -> Result<EccentricityBounds, InsufficientSources> {
    let num_nodes = graph.num_nodes();
    let mut bounds = EccentricityBounds::new(num_nodes);

    pl.item_name("pivot");
    pl.expected_updates(Some(trees.len()));
    pl.start("Bounding eccentricities...");

    for tree in trees {
        if bounds.all_settled() {
            break;
        }
        if bounds.add_pivot(&graph, tree) {
            pl.update();
        }
    }

    pl.done();
    if bounds.all_settled() {
        info!("All {num_nodes} nodes settled");
        Ok(bounds)
    } else {
        info!(
            "Sources exhausted: {} of {num_nodes} nodes settled",
            bounds.num_settled()
        );
        Err(InsufficientSources { bounds })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats() {
        let mut bounds = EccentricityBounds::new(4);
        bounds.tighten(0, 1, 3);
        bounds.tighten(1, 2, 6);
        bounds.tighten(2, 2, 2);
        let stats = bounds.stats();
        assert_eq!(stats.num_bounded, 3);
        assert_eq!(stats.mean, 2.0);
        assert_eq!(stats.variance, 8.0 / 3.0);
        assert_eq!(bounds.num_settled(), 1);
        assert_eq!(bounds.exact(2), Some(2));
        assert_eq!(bounds.upper(3), None);
        assert_eq!(bounds.unsettled().collect::<Vec<_>>(), vec![0, 1, 3]);
        assert_eq!(bounds.diameter(), 2);
    }

    #[test]
    fn test_no_bounds() {
        let bounds = EccentricityBounds::new(2);
        assert_eq!(bounds.stats(), BoundStats::default());
        assert_eq!(bounds.diameter(), 0);
        assert!(!bounds.all_settled());
        assert!(EccentricityBounds::new(0).all_settled());
    }
}
