/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 * SPDX-FileCopyrightText: 2026 Spangraph developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*!

The basic trait to access undirected graphs.

A [`Graph`] has a dense set of nodes `0..num_nodes()` and a multiset of
undirected edges; the [neighbors](Graph::neighbors) of a node are returned
with multiplicity, so parallel edges appear as repeated neighbors.

Besides adjacency, the trait provides the primitives that spanner
construction needs: [single-source breadth-first visits](Graph::bfs),
[single-pair distances](Graph::distance), [exact eccentricities of a
node](Graph::eccentricity), and, optionally, [community
detection](Graph::communities). All primitives but the last have default
implementations based on the [sequential breadth-first
visit](crate::visits::breadth_first::Seq); community detection is a capability
that implementations opt into.

*/

use crate::algo::communities::Communities;
use crate::visits::{
    breadth_first::{BfsTree, EventPred, Seq},
    Sequential,
};
use no_break::NoBreak;
use std::ops::ControlFlow::{Break, Continue};

/// An undirected graph with random access to the neighbors of a node.
pub trait Graph {
    /// The type of the iterator over the neighbors of a node.
    type Neighbors<'a>: IntoIterator<Item = usize>
    where
        Self: 'a;

    /// Returns the number of nodes of the graph.
    fn num_nodes(&self) -> usize;

    /// Returns the number of (undirected) edges of the graph, counting
    /// parallel edges with multiplicity.
    fn num_edges(&self) -> u64;

    /// Returns the neighbors of a node.
    fn neighbors(&self, node: usize) -> Self::Neighbors<'_>;

    /// Returns the number of neighbors of a node.
    fn degree(&self, node: usize) -> usize;

    /// Visits the graph breadth-first from `root` and returns the resulting
    /// [`BfsTree`].
    ///
    /// # Panics
    ///
    /// If `root` is not a node of the graph.
    fn bfs(&self, root: usize) -> BfsTree
    where
        Self: Sized,
    {
        BfsTree::new(self, root)
    }

    /// Returns the length of a shortest path between `src` and `dst`, or
    /// `None` if `dst` is not reachable from `src`.
    fn distance(&self, src: usize, dst: usize) -> Option<usize>
    where
        Self: Sized,
    {
        Seq::new(self)
            .visit([src], |event| match event {
                EventPred::Unknown { node, distance, .. } if node == dst => Break(distance),
                _ => Continue(()),
            })
            .break_value()
    }

    /// Returns the eccentricity of `node`, that is, the largest distance from
    /// `node` to a node reachable from it.
    ///
    /// On disconnected graphs the eccentricity is computed within the
    /// connected component of `node`.
    fn eccentricity(&self, node: usize) -> usize
    where
        Self: Sized,
    {
        let mut eccentricity = 0;
        Seq::new(self)
            .visit([node], |event| {
                if let EventPred::Unknown { distance, .. } = event {
                    eccentricity = eccentricity.max(distance);
                }
                Continue(())
            })
            .continue_value_no_break();
        eccentricity
    }

    /// Partitions the nodes into communities at the given resolution.
    ///
    /// Returns `None` if the implementation does not support community
    /// detection, which is the default.
    fn communities(&self, _resolution: f64) -> Option<Communities> {
        None
    }
}

impl<G: Graph> Graph for &G {
    type Neighbors<'a>
        = G::Neighbors<'a>
    where
        Self: 'a;

    #[inline(always)]
    fn num_nodes(&self) -> usize {
        (**self).num_nodes()
    }

    #[inline(always)]
    fn num_edges(&self) -> u64 {
        (**self).num_edges()
    }

    #[inline(always)]
    fn neighbors(&self, node: usize) -> Self::Neighbors<'_> {
        (**self).neighbors(node)
    }

    #[inline(always)]
    fn degree(&self, node: usize) -> usize {
        (**self).degree(node)
    }

    fn bfs(&self, root: usize) -> BfsTree {
        (**self).bfs(root)
    }

    fn distance(&self, src: usize, dst: usize) -> Option<usize> {
        (**self).distance(src, dst)
    }

    fn eccentricity(&self, node: usize) -> usize {
        (**self).eccentricity(node)
    }

    fn communities(&self, resolution: f64) -> Option<Communities> {
        (**self).communities(resolution)
    }
}
