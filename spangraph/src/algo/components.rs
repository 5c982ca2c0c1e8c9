/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 * SPDX-FileCopyrightText: 2026 Spangraph developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Connected components.
//!
//! # Examples
//! ```
//! use dsi_progress_logger::no_logging;
//! use spangraph::prelude::*;
//! use spangraph::algo::components;
//!
//! let graph = VecGraph::from_edges([(0, 1), (1, 2), (3, 4)]);
//!
//! let mut cc = components::connected(&graph, no_logging![]);
//! let sizes = cc.sort_by_size();
//!
//! assert_eq!(sizes, vec![3, 2].into_boxed_slice());
//! assert_eq!(cc.components(), &[0, 0, 0, 1, 1]);
//! ```

use crate::traits::Graph;
use crate::visits::{
    breadth_first::{self, EventPred},
    Sequential,
};
use dsi_progress_logger::ProgressLog;
use no_break::NoBreak;
use std::ops::ControlFlow::Continue;

/// Connected components.
///
/// An instance of this structure stores the [index of the
/// component](Components::components) of each node. Components are numbered
/// from 0 to [`num_components`](Components::num_components).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Components {
    num_components: usize,
    components: Box<[usize]>,
}

impl Components {
    pub fn new(num_components: usize, components: Box<[usize]>) -> Self {
        Components {
            num_components,
            components,
        }
    }

    /// Returns the number of connected components.
    pub fn num_components(&self) -> usize {
        self.num_components
    }

    /// Returns a slice containing, for each node, the index of the component
    /// it belongs to.
    #[inline(always)]
    pub fn components(&self) -> &[usize] {
        &self.components
    }

    /// Returns the sizes of all components.
    pub fn compute_sizes(&self) -> Box<[usize]> {
        let mut sizes = vec![0; self.num_components()];
        for &node_component in self.components() {
            sizes[node_component] += 1;
        }
        sizes.into_boxed_slice()
    }

    /// Renumbers the components by decreasing size.
    ///
    /// After a call to this method, the sizes of the components will be
    /// decreasing in the component index; ties keep the original order. The
    /// method returns the sizes of the components after the renumbering.
    pub fn sort_by_size(&mut self) -> Box<[usize]> {
        let mut sizes = self.compute_sizes();
        let mut sort_perm = Vec::from_iter(0..sizes.len());
        sort_perm.sort_by(|&x, &y| sizes[y].cmp(&sizes[x]));
        let mut inv_perm = vec![0; sizes.len()];
        sort_perm
            .iter()
            .enumerate()
            .for_each(|(i, &x)| inv_perm[x] = i);

        self.components
            .iter_mut()
            .for_each(|node_component| *node_component = inv_perm[*node_component]);
        sizes.sort_by(|&x, &y| y.cmp(&x));
        sizes
    }
}

/// Connected components of an undirected graph by sequential breadth-first
/// visits.
///
/// Components are numbered in order of their smallest node.
pub fn connected(graph: impl Graph, pl: &mut impl ProgressLog) -> Components {
    let num_nodes = graph.num_nodes();
    pl.item_name("node");
    pl.expected_updates(Some(num_nodes));
    pl.start("Computing connected components...");

    let mut visit = breadth_first::Seq::new(&graph);
    let mut components = vec![0; num_nodes];
    let mut number_of_components = 0;

    for root in 0..num_nodes {
        visit
            .visit([root], |event| {
                match event {
                    EventPred::Unknown { node, .. } => {
                        pl.light_update();
                        components[node] = number_of_components;
                    }
                    EventPred::Done {} => {
                        number_of_components += 1;
                    }
                    _ => (),
                }
                Continue(())
            })
            .continue_value_no_break();
    }

    pl.done();

    Components::new(number_of_components, components.into_boxed_slice())
}
