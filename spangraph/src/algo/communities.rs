/*
 * SPDX-FileCopyrightText: 2024 Tommaso Fontana
 * SPDX-FileCopyrightText: 2024 Sebastiano Vigna
 * SPDX-FileCopyrightText: 2026 Spangraph developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Community detection by label propagation.
//!
//! Label propagation assigns a _label_ to each node and then iteratively
//! updates every label to the one that maximizes an objective function based
//! on the frequency of labels among the node's neighbors and on a resolution
//! parameter ɣ: the value of label `ℓ` for a node having `k` neighbors with
//! label `ℓ` is `(1 + ɣ)k − ɣ(v + 1)`, where `v` is the number of other nodes
//! with label `ℓ`. Low ɣ values produce few large communities, while high ɣ
//! values produce many small ones.
//!
//! Nodes are updated in a pseudorandom order at each pass, and ties are
//! broken pseudorandomly, using a seeded [`SmallRng`]; a node keeps its label
//! if the label is among the best ones. The process stops when a pass does
//! not modify any label, or after [`MAX_UPDATES`] passes.
//!
//! # Examples
//! ```
//! use dsi_progress_logger::no_logging;
//! use spangraph::prelude::*;
//! use spangraph::algo::communities::label_propagation;
//!
//! // Two triangles
//! let graph = VecGraph::from_edges([(0, 1), (1, 2), (2, 0), (3, 4), (4, 5), (5, 3)]);
//! let communities = label_propagation(&graph, 0.0001, 0, no_logging![]);
//!
//! assert_eq!(communities.num_communities(), 2);
//! assert_eq!(communities.membership(), &[0, 0, 0, 1, 1, 1]);
//! ```

use crate::traits::Graph;
use dsi_progress_logger::ProgressLog;
use log::debug;
use rand::rngs::SmallRng;
use rand::seq::{IndexedRandom, SliceRandom};
use rand::SeedableRng;
use std::collections::HashMap;

/// The maximum number of label-propagation passes.
pub const MAX_UPDATES: usize = 100;

/// A partition of the nodes of a graph into communities.
///
/// Communities are numbered from 0 to
/// [`num_communities`](Communities::num_communities).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Communities {
    num_communities: usize,
    membership: Box<[usize]>,
}

impl Communities {
    /// Creates a partition from a membership array.
    ///
    /// # Panics
    ///
    /// If some community index is not smaller than `num_communities`.
    pub fn new(num_communities: usize, membership: Box<[usize]>) -> Self {
        assert!(
            membership.iter().all(|&c| c < num_communities),
            "community indices must be smaller than {num_communities}"
        );
        Self {
            num_communities,
            membership,
        }
    }

    /// Creates a partition from arbitrary labels, numbering communities in
    /// order of first appearance.
    pub fn from_labels(labels: &[usize]) -> Self {
        let mut index = HashMap::new();
        let membership = labels
            .iter()
            .map(|&label| {
                let next = index.len();
                *index.entry(label).or_insert(next)
            })
            .collect::<Box<[usize]>>();
        Self {
            num_communities: index.len(),
            membership,
        }
    }

    /// Returns the number of communities.
    pub fn num_communities(&self) -> usize {
        self.num_communities
    }

    /// Returns a slice containing, for each node, the index of the community
    /// it belongs to.
    #[inline(always)]
    pub fn membership(&self) -> &[usize] {
        &self.membership
    }

    /// Returns the sizes of all communities.
    pub fn compute_sizes(&self) -> Box<[usize]> {
        let mut sizes = vec![0; self.num_communities];
        for &community in self.membership.iter() {
            sizes[community] += 1;
        }
        sizes.into_boxed_slice()
    }
}

/// Runs label propagation on an undirected graph with resolution `gamma`.
///
/// # Arguments
///
/// * `graph` - The graph to partition.
///
/// * `gamma` - The resolution parameter ɣ.
///
/// * `seed` - The seed to use for pseudorandom number generation.
///
/// * `pl` - A progress logger.
pub fn label_propagation(
    graph: impl Graph,
    gamma: f64,
    seed: u64,
    pl: &mut impl ProgressLog,
) -> Communities {
    let num_nodes = graph.num_nodes();
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut labels = Vec::from_iter(0..num_nodes);
    let mut volumes = vec![1_usize; num_nodes];
    let mut can_change = vec![true; num_nodes];
    let mut update_perm = Vec::from_iter(0..num_nodes);
    let mut majorities = vec![];

    pl.item_name("update");
    pl.expected_updates(None);
    pl.start(format!("Running label propagation with gamma={gamma}..."));

    for update in 0..MAX_UPDATES {
        update_perm.shuffle(&mut rng);
        let mut modified = 0;

        for &node in &update_perm {
            // If no neighbor has changed, the label of a node
            // is very unlikely to change.
            if !can_change[node] {
                continue;
            }
            can_change[node] = false;
            if graph.degree(node) == 0 {
                continue;
            }

            let curr_label = labels[node];

            // compute the frequency of neighbor labels
            let mut map = HashMap::new();
            for succ in graph.neighbors(node) {
                *map.entry(labels[succ]).or_insert(0_usize) += 1;
            }
            map.entry(curr_label).or_insert(0);

            let mut max = f64::NEG_INFINITY;
            majorities.clear();
            for (&label, &count) in map.iter() {
                // The volume does not include the node itself
                let volume = volumes[label] - (label == curr_label) as usize;
                let val = (1.0 + gamma) * count as f64 - gamma * (volume + 1) as f64;

                if max == val {
                    majorities.push(label);
                }

                if val > max {
                    majorities.clear();
                    max = val;
                    majorities.push(label);
                }
            }

            if majorities.contains(&curr_label) {
                continue;
            }
            // HashMap order is not deterministic
            majorities.sort_unstable();
            let Some(&next_label) = majorities.choose(&mut rng) else {
                continue;
            };

            modified += 1;
            labels[node] = next_label;
            volumes[curr_label] -= 1;
            volumes[next_label] += 1;
            for succ in graph.neighbors(node) {
                can_change[succ] = true;
            }
        }

        pl.update();
        debug!("Update {update}: modified {modified} labels");

        if modified == 0 {
            break;
        }
    }

    pl.done();

    Communities::from_labels(&labels)
}
