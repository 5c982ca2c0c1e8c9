/*
 * SPDX-FileCopyrightText: 2026 Spangraph developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::graphs::vec_graph::VecGraph;
use crate::traits::Graph;
use std::ops::RangeInclusive;

/// Returns the subgraph induced by a set of nodes.
///
/// `nodes` must be strictly increasing. Node `nodes[i]` of `graph` becomes
/// node `i` of the result; an edge is kept if both its endpoints are in
/// `nodes`, with its multiplicity.
///
/// # Panics
///
/// If `nodes` is not strictly increasing or contains a node that is not in
/// the graph.
///
/// # Examples
/// ```
/// use spangraph::prelude::*;
///
/// let graph = VecGraph::from_edges([(0, 1), (1, 2), (2, 3), (3, 0)]);
/// let sub = induced_subgraph(&graph, &[0, 1, 3]);
///
/// assert_eq!(sub.num_nodes(), 3);
/// assert_eq!(sub.edges().collect::<Vec<_>>(), vec![(0, 1), (0, 2)]);
/// ```
pub fn induced_subgraph(graph: impl Graph, nodes: &[usize]) -> VecGraph {
    assert!(
        nodes.windows(2).all(|w| w[0] < w[1]),
        "The nodes of an induced subgraph must be strictly increasing"
    );
    let num_nodes = graph.num_nodes();
    let mut map = vec![None; num_nodes];
    for (i, &node) in nodes.iter().enumerate() {
        assert!(
            node < num_nodes,
            "Node {node} does not exist (the graph has {num_nodes} nodes)"
        );
        map[node] = Some(i);
    }

    let mut sub = VecGraph::empty(nodes.len());
    for (i, &u) in nodes.iter().enumerate() {
        for v in graph.neighbors(u) {
            // Each edge is seen from its smaller endpoint; a loop once
            if u > v {
                continue;
            }
            if let Some(j) = map[v] {
                sub.add_edge(i, j);
            }
        }
    }
    sub
}

/// Returns the subgraph induced by a contiguous range of nodes.
///
/// Node `first + i` of `graph` becomes node `i` of the result.
///
/// # Panics
///
/// If the range contains a node that is not in the graph.
///
/// # Examples
/// ```
/// use spangraph::prelude::*;
///
/// let graph = VecGraph::from_edges([(0, 1), (1, 2), (2, 3)]);
/// let sub = subgraph(&graph, 1..=2);
///
/// assert_eq!(sub.num_nodes(), 2);
/// assert_eq!(sub.num_edges(), 1);
/// ```
pub fn subgraph(graph: impl Graph, nodes: RangeInclusive<usize>) -> VecGraph {
    let nodes = Vec::from_iter(nodes);
    induced_subgraph(graph, &nodes)
}
