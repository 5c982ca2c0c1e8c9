/*
 * SPDX-FileCopyrightText: 2026 Spangraph developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! End-to-end spanner construction.
//!
//! [`spanner_graph`] selects sources, computes breadth-first trees from them,
//! merges the trees into a [`Spanner`] until the edge budget is exhausted,
//! and optionally bounds the eccentricities of the graph using the same
//! trees.
//!
//! # Examples
//! ```
//! use dsi_progress_logger::no_logging;
//! use spangraph::prelude::*;
//! use spangraph_algo::prelude::*;
//!
//! let graph = ErdosRenyi::new(100, 0.1, 0).build();
//! let config = SpannerConfig::default().num_bfs(10).estimate(true);
//!
//! let output = spanner_graph(&graph, &config, no_logging![])?;
//! assert_eq!(output.spanner.num_nodes(), 100);
//! assert!(output.spanner.num_edges() as f64 <= 0.8 * graph.num_edges() as f64);
//! assert!(output.estimate.is_some());
//! # Ok::<(), SpannerError>(())
//! ```

use crate::bfs;
use crate::eccentricity::{self, BoundStats, EccentricityBounds};
use crate::sources::{select_sources, SelectionConfig};
use crate::spanner::{check_budget_factor, Spanner, SpannerBuilder, DEFAULT_BUDGET_FACTOR};
use crate::SpannerError;
use dsi_progress_logger::ConcurrentProgressLog;
use log::{info, warn};
use spangraph::traits::Graph;
use spangraph::visits::breadth_first::BfsTree;

/// The default maximum number of breadth-first visits.
pub const DEFAULT_NUM_BFS: usize = 50;

/// The configuration of [`spanner_graph`].
#[derive(Debug, Clone, PartialEq)]
pub struct SpannerConfig {
    selection: SelectionConfig,
    num_bfs: usize,
    budget_factor: f64,
    estimate: bool,
    track_bounds: bool,
    dedup: bool,
}

impl Default for SpannerConfig {
    fn default() -> Self {
        Self {
            selection: SelectionConfig::default(),
            num_bfs: DEFAULT_NUM_BFS,
            budget_factor: DEFAULT_BUDGET_FACTOR,
            estimate: false,
            track_bounds: false,
            dedup: false,
        }
    }
}

impl SpannerConfig {
    /// Sets the configuration of source selection.
    pub fn selection(mut self, selection: SelectionConfig) -> Self {
        self.selection = selection;
        self
    }

    /// Sets the maximum number of breadth-first visits.
    pub fn num_bfs(mut self, num_bfs: usize) -> Self {
        self.num_bfs = num_bfs;
        self
    }

    /// Sets the budget factor, which must be in (0..1].
    pub fn budget_factor(mut self, budget_factor: f64) -> Self {
        self.budget_factor = budget_factor;
        self
    }

    /// Sets whether to bound eccentricities after construction.
    pub fn estimate(mut self, estimate: bool) -> Self {
        self.estimate = estimate;
        self
    }

    /// Sets whether to log statistics of the eccentricity bounds after
    /// each merge.
    pub fn track_bounds(mut self, track_bounds: bool) -> Self {
        self.track_bounds = track_bounds;
        self
    }

    /// Sets whether to remove duplicate edges from the spanner.
    pub fn dedup(mut self, dedup: bool) -> Self {
        self.dedup = dedup;
        self
    }

    pub fn get_selection(&self) -> &SelectionConfig {
        &self.selection
    }

    pub fn get_num_bfs(&self) -> usize {
        self.num_bfs
    }

    pub fn get_budget_factor(&self) -> f64 {
        self.budget_factor
    }

    /// Checks the configuration for structural errors.
    pub fn validate(&self) -> Result<(), SpannerError> {
        check_budget_factor(self.budget_factor)
    }
}

/// The result of eccentricity bounding.
#[derive(Debug, Clone)]
pub struct DiameterEstimate {
    /// The largest eccentricity of a settled node.
    pub diameter: usize,
    /// The number of nodes left unsettled.
    pub num_unsettled: usize,
    /// Statistics of the gaps between the bounds.
    pub stats: BoundStats,
    pub bounds: EccentricityBounds,
}

impl From<EccentricityBounds> for DiameterEstimate {
    fn from(bounds: EccentricityBounds) -> Self {
        Self {
            diameter: bounds.diameter(),
            num_unsettled: bounds.num_unsettled(),
            stats: bounds.stats(),
            bounds,
        }
    }
}

/// The result of [`spanner_graph`].
#[derive(Debug, Clone)]
pub struct SpannerOutput {
    /// The selected sources.
    pub sources: Vec<usize>,
    /// The breadth-first trees, one per visited source.
    pub trees: Vec<BfsTree>,
    /// The index in `trees` of the last tree merged into the spanner.
    pub last_merged: Option<usize>,
    /// The spanner.
    pub spanner: Spanner,
    /// The number of duplicate edges removed, if deduplication was
    /// requested.
    pub num_duplicates: Option<usize>,
    /// The eccentricity bounds, if requested.
    pub estimate: Option<DiameterEstimate>,
}

/// Builds a spanner of `graph`.
///
/// The result is a deterministic function of the graph and of the
/// configuration. Trees are computed in parallel on the current [rayon]
/// thread pool.
///
/// # Errors
///
/// If the configuration is [invalid](SpannerConfig::validate), or if the
/// source selection fails; in both cases, no visit is performed.
pub fn spanner_graph(
    graph: impl Graph + Sync,
    config: &SpannerConfig,
    pl: &mut impl ConcurrentProgressLog,
) -> Result<SpannerOutput, SpannerError> {
    config.validate()?;
    info!(
        "Building a spanner of a graph with {} nodes and {} edges",
        graph.num_nodes(),
        graph.num_edges()
    );

    let sources = select_sources(&graph, &config.selection)?;
    let trees = bfs::precompute(&graph, &sources, config.num_bfs, pl);

    let mut builder =
        SpannerBuilder::new(graph.num_nodes(), graph.num_edges(), config.budget_factor)?;
    let mut last_merged = None;
    // Bounds from the merged trees, updated one pivot at a time
    let mut tracked = config
        .track_bounds
        .then(|| EccentricityBounds::new(graph.num_nodes()));
    for (index, tree) in trees.iter().enumerate() {
        if !builder.try_merge(tree) {
            break;
        }
        last_merged = Some(index);

        if let Some(bounds) = tracked.as_mut() {
            bounds.add_pivot(&graph, tree);
            let stats = bounds.stats();
            info!(
                "Merged {} trees ({} edges): {} nodes settled, bound gap mean {:.3}, variance {:.3}",
                index + 1,
                builder.spanner().num_edges(),
                bounds.num_settled(),
                stats.mean,
                stats.variance
            );
        }
    }

    let mut spanner = builder.build();
    info!(
        "Merged {} of {} trees: the spanner has {} edges",
        last_merged.map_or(0, |index| index + 1),
        trees.len(),
        spanner.num_edges()
    );

    let num_duplicates = config.dedup.then(|| spanner.dedup());

    let estimate = config.estimate.then(|| {
        let bounds = match eccentricity::estimate(&graph, &trees, pl) {
            Ok(bounds) => bounds,
            Err(err) => {
                warn!("{err}; the diameter estimate is a lower bound");
                err.into_bounds()
            }
        };
        let estimate = DiameterEstimate::from(bounds);
        info!(
            "Estimated diameter: {} ({} nodes unsettled)",
            estimate.diameter, estimate.num_unsettled
        );
        estimate
    });

    Ok(SpannerOutput {
        sources,
        trees,
        last_merged,
        spanner,
        num_duplicates,
        estimate,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use dsi_progress_logger::no_logging;
    use spangraph::graphs::vec_graph::VecGraph;

    #[test]
    fn test_invalid_budget_factor() {
        let config = SpannerConfig::default().budget_factor(0.0);
        let graph = VecGraph::from_edges([(0, 1)]);
        assert_eq!(
            spanner_graph(&graph, &config, no_logging![]).unwrap_err(),
            SpannerError::InvalidBudgetFactor(0.0)
        );
    }

    #[test]
    fn test_empty_graph() -> Result<(), SpannerError> {
        let config = SpannerConfig::default().estimate(true).dedup(true);
        let output = spanner_graph(VecGraph::new(), &config, no_logging![])?;
        assert!(output.sources.is_empty());
        assert!(output.trees.is_empty());
        assert_eq!(output.last_merged, None);
        assert_eq!(output.spanner.num_nodes(), 0);
        assert_eq!(output.num_duplicates, Some(0));
        let estimate = output.estimate.unwrap();
        assert_eq!(estimate.diameter, 0);
        assert_eq!(estimate.num_unsettled, 0);
        Ok(())
    }
}
