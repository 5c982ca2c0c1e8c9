/*
 * SPDX-FileCopyrightText: 2026 Spangraph developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use anyhow::Result;
use dsi_progress_logger::no_logging;
use spangraph::prelude::*;
use spangraph_algo::eccentricity;
use spangraph_algo::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};

#[test]
fn test_idempotence() -> Result<()> {
    let graph = ErdosRenyi::new(200, 0.03, 1).build();
    for strategy in [Strategy::Random, Strategy::Community] {
        let config = SpannerConfig::default()
            .selection(SelectionConfig::default().strategy(strategy))
            .estimate(true);
        let a = spanner_graph(&graph, &config, no_logging![])?;
        let b = spanner_graph(&graph, &config, no_logging![])?;
        assert_eq!(a.sources, b.sources);
        assert_eq!(a.spanner, b.spanner);
        assert_eq!(a.last_merged, b.last_merged);
        let (a, b) = (a.estimate.unwrap(), b.estimate.unwrap());
        assert_eq!(a.diameter, b.diameter);
        assert_eq!(a.stats, b.stats);
    }
    Ok(())
}

#[test]
fn test_first_tree_rejected() -> Result<()> {
    // A cycle with a chord: a tree has four of the six edges
    let graph = VecGraph::from_edges([(0, 1), (1, 2), (2, 3), (3, 4), (4, 0), (0, 2)]);
    let config = SpannerConfig::default()
        .num_bfs(1)
        .budget_factor(1.0)
        .selection(SelectionConfig::default().num_sources(Some(1)));
    let output = spanner_graph(&graph, &config, no_logging![])?;
    assert_eq!(output.trees.len(), 1);
    assert_eq!(output.trees[0].num_tree_edges(), 4);
    assert_eq!(output.last_merged, None);
    assert_eq!(output.spanner.num_nodes(), 5);
    assert_eq!(output.spanner.num_edges(), 0);

    let output = spanner_graph(&graph, &config.clone().num_bfs(0), no_logging![])?;
    assert!(output.trees.is_empty());
    Ok(())
}

#[test]
fn test_budget_accepted() -> Result<()> {
    // Ten disjoint edges: every tree has one edge
    let graph = VecGraph::from_edges((0..10).map(|i| (2 * i, 2 * i + 1)));
    let config = SpannerConfig::default()
        .num_bfs(10)
        .selection(SelectionConfig::default().num_sources(Some(10)));
    let output = spanner_graph(&graph, &config, no_logging![])?;
    // s + 2 ≤ 8 holds for s = 0, …, 6
    assert_eq!(output.spanner.num_edges(), 7);
    assert_eq!(output.last_merged, Some(6));
    assert!(output.spanner.num_edges() <= 8);
    Ok(())
}

#[test]
fn test_estimate_and_tracking() -> Result<()> {
    let graph = ErdosRenyi::new(100, 0.05, 2).build();
    let config = SpannerConfig::default()
        .estimate(true)
        .track_bounds(true)
        .selection(SelectionConfig::default().num_sources(Some(50)));
    let output = spanner_graph(&graph, &config, no_logging![])?;
    let estimate = output.estimate.unwrap();

    let diameter = (0..graph.num_nodes())
        .map(|node| graph.eccentricity(node))
        .max()
        .unwrap_or(0);
    assert!(estimate.diameter <= diameter);
    assert_eq!(estimate.num_unsettled, estimate.bounds.num_unsettled());
    for tree in &output.trees {
        assert_eq!(
            estimate.bounds.exact(tree.root()),
            Some(graph.eccentricity(tree.root()))
        );
    }
    Ok(())
}

#[test]
fn test_unsupported_strategy() {
    struct Plain(VecGraph);

    impl Graph for Plain {
        type Neighbors<'a>
        = <VecGraph as Graph>::Neighbors<'a>
    where
        Self: 'a;

        fn num_nodes(&self) -> usize {
            self.0.num_nodes()
        }
        fn num_edges(&self) -> u64 {
            self.0.num_edges()
        }
        fn neighbors(&self, node: usize) -> Self::Neighbors<'_> {
            self.0.neighbors(node)
        }
        fn degree(&self, node: usize) -> usize {
            self.0.degree(node)
        }
    }

    let graph = Plain(VecGraph::from_edges([(0, 1)]));
    let config = SpannerConfig::default()
        .selection(SelectionConfig::default().strategy(Strategy::Community));
    assert!(matches!(
        spanner_graph(&graph, &config, no_logging![]),
        Err(SpannerError::UnsupportedStrategy)
    ));
}

/// A graph counting the exact eccentricity computations.
struct CountingEccentricity {
    graph: VecGraph,
    calls: AtomicUsize,
}

impl Graph for CountingEccentricity {
    type Neighbors<'a>
        = <VecGraph as Graph>::Neighbors<'a>
    where
        Self: 'a;

    fn num_nodes(&self) -> usize {
        self.graph.num_nodes()
    }
    fn num_edges(&self) -> u64 {
        self.graph.num_edges()
    }
    fn neighbors(&self, node: usize) -> Self::Neighbors<'_> {
        self.graph.neighbors(node)
    }
    fn degree(&self, node: usize) -> usize {
        self.graph.degree(node)
    }
    fn eccentricity(&self, node: usize) -> usize {
        self.calls.fetch_add(1, Ordering::Relaxed);
        self.graph.eccentricity(node)
    }
}

#[test]
fn test_tracking_is_incremental() -> Result<()> {
    // 20 disjoint triangles: every tree has 2 edges, so 29 trees fit a
    // budget of 60 edges
    let graph = CountingEccentricity {
        graph: VecGraph::from_edges((0..20).flat_map(|t| {
            let base = 3 * t;
            [(base, base + 1), (base + 1, base + 2), (base + 2, base)]
        })),
        calls: AtomicUsize::new(0),
    };
    let config = SpannerConfig::default()
        .budget_factor(1.0)
        .num_bfs(40)
        .track_bounds(true)
        .selection(SelectionConfig::default().num_sources(Some(40)));
    let output = spanner_graph(&graph, &config, no_logging![])?;
    assert_eq!(output.last_merged, Some(28));
    // At most one exact computation per merged tree
    assert!(graph.calls.load(Ordering::Relaxed) <= 29);

    // The tracked bounds agree with a fresh estimate on the merged trees
    let bounds = eccentricity::estimate(&graph.graph, &output.trees[..29], no_logging![])
        .unwrap_or_else(InsufficientSources::into_bounds);
    let mut incremental = EccentricityBounds::new(graph.num_nodes());
    for tree in &output.trees[..29] {
        incremental.add_pivot(&graph.graph, tree);
    }
    for node in 0..graph.num_nodes() {
        assert_eq!(incremental.lower(node), bounds.lower(node));
        assert_eq!(incremental.upper(node), bounds.upper(node));
    }
    Ok(())
}
