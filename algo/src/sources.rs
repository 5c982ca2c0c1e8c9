/*
 * SPDX-FileCopyrightText: 2026 Spangraph developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Selection of the roots of the breadth-first visits.
//!
//! Sources can be selected by two [strategies](Strategy):
//!
//! - [`Random`](Strategy::Random) draws node indices uniformly at random,
//!   with replacement, using a [`SmallRng`] seeded explicitly by the
//!   configuration;
//! - [`Community`](Strategy::Community) partitions the graph into
//!   [communities](spangraph::traits::Graph::communities) and picks one
//!   representative per community.
//!
//! # Examples
//! ```
//! use spangraph::prelude::*;
//! use spangraph_algo::sources::*;
//!
//! let graph = VecGraph::from_edges([(0, 1), (1, 2), (2, 0), (3, 4), (4, 5), (5, 3)]);
//!
//! let config = SelectionConfig::default().strategy(Strategy::Community);
//! assert_eq!(select_sources(&graph, &config)?, vec![0, 3]);
//!
//! let config = SelectionConfig::default().num_sources(Some(4)).seed(0);
//! let sources = select_sources(&graph, &config)?;
//! assert_eq!(sources.len(), 4);
//! assert_eq!(sources, select_sources(&graph, &config)?);
//! # Ok::<(), spangraph_algo::SpannerError>(())
//! ```

use crate::SpannerError;
use log::{debug, info};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use spangraph::traits::Graph;
use sux::prelude::*;

/// The default seed of the pseudorandom number generator.
pub const DEFAULT_SEED: u64 = 42;

/// The default number of sources drawn by the [random
/// strategy](Strategy::Random).
pub const DEFAULT_NUM_RANDOM_SOURCES: usize = 15;

/// The default resolution of community detection.
pub const DEFAULT_RESOLUTION: f64 = 0.0001;

/// Strategies for the selection of sources.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Uniformly random nodes, with replacement.
    #[default]
    Random,
    /// The first node of each community, in node order.
    Community,
}

/// The configuration of source selection.
///
/// The default configuration uses the [random strategy](Strategy::Random)
/// with [`DEFAULT_NUM_RANDOM_SOURCES`] sources and seed [`DEFAULT_SEED`].
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionConfig {
    strategy: Strategy,
    num_sources: Option<usize>,
    seed: u64,
    resolution: f64,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            num_sources: None,
            seed: DEFAULT_SEED,
            resolution: DEFAULT_RESOLUTION,
        }
    }
}

impl SelectionConfig {
    /// Sets the selection strategy.
    pub fn strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Sets the number of sources.
    ///
    /// With `None`, the random strategy draws [`DEFAULT_NUM_RANDOM_SOURCES`]
    /// sources, and the community strategy returns a representative for each
    /// community. With `Some(count)`, the community strategy returns the
    /// representatives of the first `count` communities, and
    /// [fails](SpannerError::NotEnoughSources) if there are fewer.
    pub fn num_sources(mut self, num_sources: Option<usize>) -> Self {
        self.num_sources = num_sources;
        self
    }

    /// Sets the seed of the pseudorandom number generator.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the resolution of community detection.
    pub fn resolution(mut self, resolution: f64) -> Self {
        self.resolution = resolution;
        self
    }

    pub fn get_strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn get_num_sources(&self) -> Option<usize> {
        self.num_sources
    }

    pub fn get_seed(&self) -> u64 {
        self.seed
    }

    pub fn get_resolution(&self) -> f64 {
        self.resolution
    }
}

/// Selects sources in `graph` according to `config`.
///
/// The result is a deterministic function of the graph and of the
/// configuration. On an empty graph the result is empty.
///
/// # Errors
///
/// [`SpannerError::UnsupportedStrategy`] if the [community
/// strategy](Strategy::Community) is requested and the graph does not
/// support community detection.
///
/// [`SpannerError::NotEnoughSources`] if the community strategy is asked
/// for more sources than there are communities.
pub fn select_sources(
    graph: impl Graph,
    config: &SelectionConfig,
) -> Result<Vec<usize>, SpannerError> {
    let sources = match config.strategy {
        Strategy::Random => random_sources(
            graph.num_nodes(),
            config.num_sources.unwrap_or(DEFAULT_NUM_RANDOM_SOURCES),
            config.seed,
        ),
        Strategy::Community => community_sources(&graph, config)?,
    };
    info!(
        "Selected {} sources with the {:?} strategy",
        sources.len(),
        config.strategy
    );
    debug!("Sources: {sources:?}");
    Ok(sources)
}

fn random_sources(num_nodes: usize, count: usize, seed: u64) -> Vec<usize> {
    if num_nodes == 0 {
        return vec![];
    }
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..count).map(|_| rng.random_range(0..num_nodes)).collect()
}

fn community_sources(
    graph: &impl Graph,
    config: &SelectionConfig,
) -> Result<Vec<usize>, SpannerError> {
    let communities = graph
        .communities(config.resolution)
        .ok_or(SpannerError::UnsupportedStrategy)?;
    info!(
        "Found {} communities at resolution {}",
        communities.num_communities(),
        config.resolution
    );

    let num_communities = communities.num_communities();
    let mut represented = BitVec::new(num_communities);
    let mut sources = Vec::with_capacity(num_communities);

    for (node, &community) in communities.membership().iter().enumerate() {
        if sources.len() == num_communities {
            break;
        }
        if !represented[community] {
            represented.set(community, true);
            sources.push(node);
        }
    }

    match config.num_sources {
        Some(count) => take_exact(&sources, count),
        None => Ok(sources),
    }
}

/// Returns the first `count` sources, failing if there are fewer.
///
/// # Errors
///
/// [`SpannerError::NotEnoughSources`] if `sources` has fewer than `count`
/// elements.
///
/// # Examples
/// ```
/// use spangraph_algo::{sources::take_exact, SpannerError};
///
/// assert_eq!(take_exact(&[3, 1, 4], 2), Ok(vec![3, 1]));
/// assert_eq!(
///     take_exact(&[3, 1, 4], 5),
///     Err(SpannerError::NotEnoughSources { requested: 5, available: 3 })
/// );
/// ```
pub fn take_exact(sources: &[usize], count: usize) -> Result<Vec<usize>, SpannerError> {
    sources
        .get(..count)
        .map(<[usize]>::to_vec)
        .ok_or(SpannerError::NotEnoughSources {
            requested: count,
            available: sources.len(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use spangraph::graphs::vec_graph::VecGraph;

    #[test]
    fn test_random_range() {
        let sources = random_sources(7, 100, 0);
        assert_eq!(sources.len(), 100);
        assert!(sources.iter().all(|&s| s < 7));
        assert_eq!(sources, random_sources(7, 100, 0));
        assert_ne!(sources, random_sources(7, 100, 1));
    }

    #[test]
    fn test_empty() -> Result<(), SpannerError> {
        let graph = VecGraph::new();
        assert!(select_sources(&graph, &SelectionConfig::default())?.is_empty());
        let config = SelectionConfig::default().strategy(Strategy::Community);
        assert!(select_sources(&graph, &config)?.is_empty());
        Ok(())
    }

    #[test]
    fn test_community_cap() -> Result<(), SpannerError> {
        let graph = VecGraph::empty(5);
        let config = SelectionConfig::default()
            .strategy(Strategy::Community)
            .num_sources(Some(2));
        assert_eq!(select_sources(&graph, &config)?, vec![0, 1]);
        let config = config.num_sources(Some(5));
        assert_eq!(select_sources(&graph, &config)?, vec![0, 1, 2, 3, 4]);
        let config = config.num_sources(Some(10));
        assert_eq!(
            select_sources(&graph, &config),
            Err(SpannerError::NotEnoughSources {
                requested: 10,
                available: 5
            })
        );
        Ok(())
    }
}
