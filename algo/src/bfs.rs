/*
 * SPDX-FileCopyrightText: 2026 Spangraph developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Precomputation of breadth-first trees.
//!
//! Visits from distinct sources are independent, so they are performed in
//! parallel on the current [rayon] thread pool. The graph is only read.

use dsi_progress_logger::ConcurrentProgressLog;
use log::warn;
use rayon::prelude::*;
use spangraph::traits::Graph;
use spangraph::visits::breadth_first::BfsTree;

/// Computes a [`BfsTree`] for each of the first `count` sources.
///
/// The result has a tree for each of the first `min(count, sources.len())`
/// sources, in source order, except that each source that is not a node of
/// the graph is skipped with a warning; on an empty graph the result is
/// empty.
///
/// # Examples
/// ```
/// use dsi_progress_logger::no_logging;
/// use spangraph::prelude::*;
/// use spangraph_algo::bfs;
///
/// let graph = VecGraph::from_edges([(0, 1), (1, 2), (2, 3), (3, 4)]);
/// let trees = bfs::precompute(&graph, &[0, 2, 4], 2, no_logging![]);
///
/// assert_eq!(trees.len(), 2);
/// assert_eq!(trees[0].root(), 0);
/// assert_eq!(trees[1].depth(), 2);
/// ```
pub fn precompute(
    graph: impl Graph + Sync,
    sources: &[usize],
    count: usize,
    pl: &mut impl ConcurrentProgressLog,
) -> Vec<BfsTree> {
    let num_nodes = graph.num_nodes();
    let mut roots = Vec::with_capacity(count.min(sources.len()));
    for &source in sources.iter().take(count) {
        if source < num_nodes {
            roots.push(source);
        } else {
            warn!("Skipping source {source}, which is not a node (the graph has {num_nodes} nodes)");
        }
    }

    pl.item_name("visit");
    pl.expected_updates(Some(roots.len()));
    pl.start(format!(
        "Computing {} breadth-first visits on {} threads...",
        roots.len(),
        rayon::current_num_threads()
    ));

    let trees = roots
        .par_iter()
        .map_with(pl.clone(), |pl, &source| {
            let tree = graph.bfs(source);
            pl.update();
            tree
        })
        .collect::<Vec<_>>();

    pl.done();
    trees
}

#[cfg(test)]
mod tests {
    use super::*;
    use dsi_progress_logger::no_logging;
    use spangraph::graphs::vec_graph::VecGraph;

    #[test]
    fn test_caps() {
        let graph = VecGraph::from_edges([(0, 1), (1, 2)]);
        assert_eq!(precompute(&graph, &[0, 1], 5, no_logging![]).len(), 2);
        assert_eq!(precompute(&graph, &[0, 1], 1, no_logging![]).len(), 1);
        assert!(precompute(&graph, &[0, 1], 0, no_logging![]).is_empty());
        assert!(precompute(VecGraph::new(), &[0, 1], 2, no_logging![]).is_empty());
        assert_eq!(precompute(&graph, &[7, 2], 2, no_logging![])[0].root(), 2);
    }

    #[test]
    fn test_skips_every_bad_source() {
        let graph = VecGraph::from_edges([(0, 1), (1, 2)]);
        let trees = precompute(&graph, &[7, 2, 9, 0, 3, 1], 5, no_logging![]);
        let roots = trees.iter().map(BfsTree::root).collect::<Vec<_>>();
        // The cap applies before skipping
        assert_eq!(roots, vec![2, 0]);
    }
}
