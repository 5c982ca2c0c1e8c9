/*
 * SPDX-FileCopyrightText: 2026 Spangraph developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::induced_subgraph;
use crate::algo::components;
use crate::graphs::vec_graph::VecGraph;
use crate::traits::Graph;
use dsi_progress_logger::ProgressLog;
use log::info;

/// Returns the giant connected component of a graph, that is, the subgraph
/// induced by its largest connected component, together with the original
/// index of each of its nodes.
///
/// Ties between components of the same size are broken in favor of the
/// component containing the smallest node. The nodes of the component keep
/// their relative order. An empty graph yields an empty graph.
///
/// # Examples
/// ```
/// use dsi_progress_logger::no_logging;
/// use spangraph::prelude::*;
///
/// let graph = VecGraph::from_edges([(0, 1), (2, 3), (3, 4)]);
/// let (giant, nodes) = gcc(&graph, no_logging![]);
///
/// assert_eq!(giant.num_nodes(), 3);
/// assert_eq!(&*nodes, &[2, 3, 4]);
/// ```
pub fn gcc(graph: impl Graph, pl: &mut impl ProgressLog) -> (VecGraph, Box<[usize]>) {
    let mut cc = components::connected(&graph, pl);
    let sizes = cc.sort_by_size();
    info!(
        "The graph has {} connected components; the largest one has {} nodes",
        cc.num_components(),
        sizes.first().copied().unwrap_or(0)
    );

    let nodes = cc
        .components()
        .iter()
        .enumerate()
        .filter(|&(_, &c)| c == 0)
        .map(|(node, _)| node)
        .collect::<Box<[usize]>>();

    (induced_subgraph(&graph, &nodes), nodes)
}
