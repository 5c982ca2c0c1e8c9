/*
 * SPDX-FileCopyrightText: 2026 Spangraph developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Spanners made of breadth-first trees.
//!
//! A [`Spanner`] has the nodes of the original graph and the union, with
//! multiplicity, of the edges of some breadth-first trees. A
//! [`SpannerBuilder`] merges trees into a spanner one at a time, and stops
//! at the first tree that would exceed the edge budget: a tree with `t` edges
//! is rejected if
//!
//! ```text
//! budget_factor · |E(G)| < |E(spanner)| + 2t,
//! ```
//!
//! so the number of accepted edges never exceeds `budget_factor · |E(G)|`.

use crate::SpannerError;
use log::{debug, info};
use spangraph::graphs::vec_graph::VecGraph;
use spangraph::visits::breadth_first::BfsTree;

/// The default budget factor.
pub const DEFAULT_BUDGET_FACTOR: f64 = 0.8;

/// Checks that a budget factor is in (0..1].
pub fn check_budget_factor(budget_factor: f64) -> Result<(), SpannerError> {
    // NaN fails the check
    if budget_factor > 0.0 && budget_factor <= 1.0 {
        Ok(())
    } else {
        Err(SpannerError::InvalidBudgetFactor(budget_factor))
    }
}

/// A spanner: a set of nodes and a list of `(parent, child)` tree edges.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Spanner {
    num_nodes: usize,
    edges: Vec<(usize, usize)>,
}

impl Spanner {
    /// Creates a spanner with `num_nodes` nodes and no edges.
    pub fn new(num_nodes: usize) -> Self {
        Self {
            num_nodes,
            edges: vec![],
        }
    }

    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Returns the edges, in merge order.
    pub fn edges(&self) -> &[(usize, usize)] {
        &self.edges
    }

    /// Appends the edges of a tree.
    fn extend(&mut self, tree: &BfsTree) {
        debug_assert_eq!(tree.num_nodes(), self.num_nodes);
        self.edges.extend(tree.tree_edges());
    }

    /// Removes duplicate edges, regardless of their orientation, and returns
    /// the number of removed edges.
    ///
    /// After this call the edges are sorted, and each edge `(u, v)` has
    /// `u < v`.
    pub fn dedup(&mut self) -> usize {
        let num_edges = self.edges.len();
        for edge in self.edges.iter_mut() {
            if edge.0 > edge.1 {
                *edge = (edge.1, edge.0);
            }
        }
        self.edges.sort_unstable();
        self.edges.dedup();
        let removed = num_edges - self.edges.len();
        debug!("Removed {removed} duplicate edges");
        removed
    }

    /// Returns the spanner as a [`VecGraph`].
    pub fn to_graph(&self) -> VecGraph {
        let mut graph = VecGraph::empty(self.num_nodes);
        for &(u, v) in &self.edges {
            graph.add_edge(u, v);
        }
        graph
    }
}

/// Merges breadth-first trees into a [`Spanner`] within an edge budget.
///
/// # Examples
/// ```
/// use spangraph::prelude::*;
/// use spangraph_algo::spanner::SpannerBuilder;
///
/// // A cycle of length 10
/// let graph = VecGraph::from_edges((0..10).map(|i| (i, (i + 1) % 10)));
/// let trees = [graph.bfs(0), graph.bfs(5)];
///
/// // The whole budget is needed for one tree
/// let mut builder = SpannerBuilder::new(graph.num_nodes(), graph.num_edges(), 1.0)?;
/// assert!(!builder.try_merge(&trees[0]));
///
/// // but trees can be merged unconditionally
/// builder.merge(&trees[0]);
/// builder.merge(&trees[1]);
/// let spanner = builder.build();
///
/// assert_eq!(spanner.num_edges(), 18);
/// # Ok::<(), spangraph_algo::SpannerError>(())
/// ```
#[derive(Debug, Clone)]
pub struct SpannerBuilder {
    spanner: Spanner,
    budget: f64,
    num_merged: usize,
    stopped: bool,
}

impl SpannerBuilder {
    /// Creates a builder for a graph with the given number of nodes and
    /// edges.
    ///
    /// # Errors
    ///
    /// [`SpannerError::InvalidBudgetFactor`] if `budget_factor` is not in
    /// (0..1].
    pub fn new(num_nodes: usize, num_edges: u64, budget_factor: f64) -> Result<Self, SpannerError> {
        check_budget_factor(budget_factor)?;
        Ok(Self {
            spanner: Spanner::new(num_nodes),
            budget: budget_factor * num_edges as f64,
            num_merged: 0,
            stopped: false,
        })
    }

    /// Returns the spanner built so far.
    pub fn spanner(&self) -> &Spanner {
        &self.spanner
    }

    /// Returns the number of trees merged so far.
    pub fn num_merged(&self) -> usize {
        self.num_merged
    }

    /// Returns whether a tree has been rejected.
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Returns whether merging a tree with `num_tree_edges` edges would
    /// exceed the budget.
    pub fn exceeds_budget(&self, num_tree_edges: usize) -> bool {
        self.budget < (self.spanner.num_edges() + 2 * num_tree_edges) as f64
    }

    /// Merges a tree, without checking the budget.
    pub fn merge(&mut self, tree: &BfsTree) {
        self.spanner.extend(tree);
        self.num_merged += 1;
    }

    /// Merges a tree if it fits the budget, and returns whether it was
    /// merged.
    ///
    /// After the first rejection the builder is stopped, and all further
    /// trees are rejected.
    pub fn try_merge(&mut self, tree: &BfsTree) -> bool {
        if self.stopped || self.exceeds_budget(tree.num_tree_edges()) {
            if !self.stopped {
                info!(
                    "Tree rooted at {} with {} edges exceeds the budget of {:.1} edges ({} edges merged)",
                    tree.root(),
                    tree.num_tree_edges(),
                    self.budget,
                    self.spanner.num_edges()
                );
            }
            self.stopped = true;
            return false;
        }
        self.merge(tree);
        true
    }

    /// Merges trees in order until one is rejected, and returns the index of
    /// the last merged tree, if any.
    pub fn fold<'a>(&mut self, trees: impl IntoIterator<Item = &'a BfsTree>) -> Option<usize> {
        let mut last = None;
        for (index, tree) in trees.into_iter().enumerate() {
            if !self.try_merge(tree) {
                break;
            }
            last = Some(index);
        }
        last
    }

    /// Returns the spanner.
    pub fn build(self) -> Spanner {
        self.spanner
    }
}
