/*
 * SPDX-FileCopyrightText: 2026 Spangraph developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use anyhow::Result;
use dsi_progress_logger::no_logging;
use spangraph::prelude::*;
use spangraph_algo::prelude::*;
use spangraph_algo::sources::{take_exact, DEFAULT_NUM_RANDOM_SOURCES};

fn triangles(num: usize) -> VecGraph {
    VecGraph::from_edges((0..num).flat_map(|t| {
        let base = 3 * t;
        [(base, base + 1), (base + 1, base + 2), (base + 2, base)]
    }))
}

/// A graph without community detection.
struct Plain(VecGraph);

impl Graph for Plain {
    type Neighbors<'a> = <VecGraph as Graph>::Neighbors<'a>;

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

#[test]
fn test_three_triangles() -> Result<()> {
    let graph = triangles(3);
    assert_eq!(graph.num_nodes(), 9);
    let config = SelectionConfig::default().strategy(Strategy::Community);
    let sources = select_sources(&graph, &config)?;
    assert_eq!(sources.len(), 3);

    let mut triangles_seen = sources.iter().map(|&node| node / 3).collect::<Vec<_>>();
    triangles_seen.sort();
    assert_eq!(triangles_seen, vec![0, 1, 2]);
    assert_eq!(sources, vec![0, 3, 6]);
    Ok(())
}

#[test]
fn test_exact_count() -> Result<()> {
    let graph = triangles(3);
    let config = SelectionConfig::default()
        .strategy(Strategy::Community)
        .num_sources(Some(2));
    assert_eq!(select_sources(&graph, &config)?, vec![0, 3]);

    let config = config.num_sources(Some(3));
    let sources = select_sources(&graph, &config)?;
    assert_eq!(sources, vec![0, 3, 6]);
    assert_eq!(take_exact(&sources, 3)?, sources);
    Ok(())
}

#[test]
fn test_more_sources_than_communities() {
    let graph = triangles(3);
    let config = SelectionConfig::default()
        .strategy(Strategy::Community)
        .num_sources(Some(5));
    assert_eq!(
        select_sources(&graph, &config),
        Err(SpannerError::NotEnoughSources {
            requested: 5,
            available: 3
        })
    );

    // The whole pipeline fails before any visit
    let config = SpannerConfig::default().selection(config);
    assert!(matches!(
        spanner_graph(&graph, &config, no_logging![]),
        Err(SpannerError::NotEnoughSources { .. })
    ));
}

#[test]
fn test_unsupported() -> Result<()> {
    let graph = Plain(triangles(2));
    let config = SelectionConfig::default().strategy(Strategy::Community);
    assert_eq!(
        select_sources(&graph, &config),
        Err(SpannerError::UnsupportedStrategy)
    );
    // The random strategy only needs the number of nodes
    let sources = select_sources(&graph, &SelectionConfig::default())?;
    assert_eq!(sources.len(), DEFAULT_NUM_RANDOM_SOURCES);
    Ok(())
}

#[test]
fn test_random_deterministic() -> Result<()> {
    let graph = ErdosRenyi::new(1000, 0.001, 0).build();
    let config = SelectionConfig::default();
    let a = select_sources(&graph, &config)?;
    let b = select_sources(&graph, &config)?;
    assert_eq!(a, b);
    assert_eq!(a.len(), 15);
    assert!(a.iter().all(|&node| node < 1000));

    let c = select_sources(&graph, &config.clone().seed(43))?;
    assert_ne!(a, c);

    let d = select_sources(&graph, &config.clone().num_sources(Some(100)))?;
    assert_eq!(d.len(), 100);
    // The first draws do not depend on the count
    assert_eq!(&d[..15], &a[..]);
    Ok(())
}
