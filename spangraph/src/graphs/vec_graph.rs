/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 * SPDX-FileCopyrightText: 2026 Spangraph developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::algo::communities::{label_propagation, Communities};
use crate::traits::Graph;
use dsi_progress_logger::no_logging;

/// The seed used by [`VecGraph::communities`] to break ties during label
/// propagation.
pub const COMMUNITIES_SEED: u64 = 0;

/// A mutable undirected [`Graph`] implementation based on a vector of
/// vectors.
///
/// Every edge `{u, v}` is stored in the adjacency lists of both endpoints, in
/// insertion order; a loop `{u, u}` is stored once. Parallel edges are
/// allowed, and they are returned with multiplicity by
/// [`neighbors`](Graph::neighbors).
///
/// This graph supports [community detection](Graph::communities) by
/// [label propagation](label_propagation).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VecGraph {
    /// The number of edges in the graph.
    num_edges: u64,
    /// For each node, its list of neighbors.
    adj: Vec<Vec<usize>>,
}

impl VecGraph {
    /// Creates a new empty graph.
    pub fn new() -> Self {
        Self {
            num_edges: 0,
            adj: vec![],
        }
    }

    /// Creates a new graph with `n` nodes and no edges.
    pub fn empty(n: usize) -> Self {
        Self {
            num_edges: 0,
            adj: Vec::from_iter((0..n).map(|_| Vec::new())),
        }
    }

    /// Adds an isolated node to the graph (and all missing nodes with a smaller
    /// index) and returns true if it is a new node.
    pub fn add_node(&mut self, node: usize) -> bool {
        let len = self.adj.len();
        self.adj.extend((len..=node).map(|_| Vec::new()));
        len <= node
    }

    /// Adds an edge to the graph.
    ///
    /// # Panics
    ///
    /// This method will panic if one of the given nodes is greater or equal
    /// than the number of nodes in the graph.
    pub fn add_edge(&mut self, u: usize, v: usize) {
        let max = u.max(v);
        if max >= self.adj.len() {
            panic!(
                "Node {} does not exist (the graph has {} nodes)",
                max,
                self.adj.len(),
            );
        }
        self.adj[u].push(v);
        if u != v {
            self.adj[v].push(u);
        }
        self.num_edges += 1;
    }

    /// Adds edges from an [`IntoIterator`], adding new nodes as needed.
    ///
    /// The items must be pairs of the form `(usize, usize)` specifying an edge.
    pub fn add_edges(&mut self, edges: impl IntoIterator<Item = (usize, usize)>) {
        for (u, v) in edges {
            self.add_node(u.max(v));
            self.add_edge(u, v);
        }
    }

    /// Creates a new graph from an [`IntoIterator`] of edges.
    ///
    /// The number of nodes is one plus the largest endpoint.
    pub fn from_edges(edges: impl IntoIterator<Item = (usize, usize)>) -> Self {
        let mut g = Self::new();
        g.add_edges(edges);
        g
    }

    /// Returns an iterator over the edges of the graph as pairs `(u, v)` with
    /// `u ≤ v`.
    ///
    /// Each edge is returned once, parallel edges with multiplicity.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.adj
            .iter()
            .enumerate()
            .flat_map(|(u, adj)| adj.iter().filter(move |&&v| u <= v).map(move |&v| (u, v)))
    }

    /// Shrinks the capacity of the graph to fit its current size.
    pub fn shrink_to_fit(&mut self) {
        self.adj.shrink_to_fit();
        for s in self.adj.iter_mut() {
            s.shrink_to_fit();
        }
    }
}

impl Graph for VecGraph {
    type Neighbors<'a> = std::iter::Copied<std::slice::Iter<'a, usize>>;

    #[inline(always)]
    fn num_nodes(&self) -> usize {
        self.adj.len()
    }

    #[inline(always)]
    fn num_edges(&self) -> u64 {
        self.num_edges
    }

    #[inline(always)]
    fn neighbors(&self, node: usize) -> Self::Neighbors<'_> {
        self.adj[node].iter().copied()
    }

    #[inline(always)]
    fn degree(&self, node: usize) -> usize {
        self.adj[node].len()
    }

    fn communities(&self, resolution: f64) -> Option<Communities> {
        Some(label_propagation(
            self,
            resolution,
            COMMUNITIES_SEED,
            no_logging![],
        ))
    }
}
