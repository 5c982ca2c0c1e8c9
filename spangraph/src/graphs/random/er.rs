/*
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 * SPDX-FileCopyrightText: 2026 Spangraph developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::graphs::vec_graph::VecGraph;
use rand::{rngs::SmallRng, Rng, SeedableRng};

/// Undirected Erdös-Rényi random graphs.
///
/// The Erdös-Rényi random graph model is a simple model for generating random
/// graphs. It is parameterized by the number of nodes `n` and the probability
/// `p` of an edge between any two distinct nodes. In this implementation,
/// loops and parallel edges are never included.
///
/// The generation is quadratic in `n`, so the graph is materialized once in a
/// [`VecGraph`] by [`build`](ErdosRenyi::build).
#[derive(Debug, Clone)]
pub struct ErdosRenyi {
    n: usize,
    p: f64,
    seed: u64,
}

impl ErdosRenyi {
    /// Creates a new Erdös-Rényi random graph, given the number of
    /// nodes, the probability of an edge between any two nodes, and a
    /// seed for the [pseudorandom number generator](SmallRng).
    pub fn new(n: usize, p: f64, seed: u64) -> Self {
        assert!((0.0..=1.0).contains(&p), "p must be in [0..1]");
        Self { n, p, seed }
    }

    /// Returns an iterator over the edges `(u, v)`, with `u < v`, in
    /// lexicographical order.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let mut rng = SmallRng::seed_from_u64(self.seed);
        (0..self.n).flat_map(move |u| {
            ((u + 1)..self.n)
                .filter(|_| rng.random_bool(self.p))
                .map(move |v| (u, v))
                .collect::<Vec<_>>()
        })
    }

    /// Materializes the graph.
    pub fn build(&self) -> VecGraph {
        let mut graph = VecGraph::empty(self.n);
        for (u, v) in self.edges() {
            graph.add_edge(u, v);
        }
        graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::Graph;

    #[test]
    fn test_er() {
        let er = ErdosRenyi::new(10, 0.3, 0);
        let g = er.build();
        assert_eq!(g.num_nodes(), 10);
        assert_eq!(g.num_edges(), er.edges().count() as u64);
        assert_eq!(g, ErdosRenyi::new(10, 0.3, 0).build());
        for (u, v) in er.edges() {
            assert!(u < v);
        }
    }

    #[test]
    fn test_extremes() {
        assert_eq!(ErdosRenyi::new(5, 0.0, 1).build().num_edges(), 0);
        assert_eq!(ErdosRenyi::new(5, 1.0, 1).build().num_edges(), 10);
    }
}
