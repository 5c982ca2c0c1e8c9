/*
 * SPDX-FileCopyrightText: 2026 Spangraph developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::{EventPred, Seq};
use crate::traits::Graph;
use crate::visits::Sequential;
use no_break::NoBreak;
use nonmax::NonMaxUsize;
use std::ops::ControlFlow::Continue;

/// The materialized result of a breadth-first visit from a single root.
///
/// A tree stores, for every node of the graph, its parent, its rank (i.e., its
/// position in the visit order) and its distance from the root. Nodes that
/// are not reachable from the root have no parent, no rank and no distance:
/// the corresponding accessors return `None`, which must be interpreted as an
/// infinite distance.
///
/// The root has distance zero and no parent. For every other reachable node
/// `v` the distance of `v` is the distance of its parent plus one.
///
/// # Examples
///
/// ```
/// use spangraph::prelude::*;
///
/// let graph = VecGraph::from_edges([(0, 1), (1, 2), (2, 3), (3, 4)]);
/// let tree = graph.bfs(0);
///
/// assert_eq!(tree.order(), &[0, 1, 2, 3, 4]);
/// assert_eq!(tree.parent(0), None);
/// assert_eq!(tree.parent(3), Some(2));
/// assert_eq!(tree.distance(4), Some(4));
/// assert_eq!(tree.tree_edges().collect::<Vec<_>>(), vec![(0, 1), (1, 2), (2, 3), (3, 4)]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BfsTree {
    root: usize,
    /// Reachable nodes in discovery order; the root comes first.
    order: Box<[usize]>,
    parents: Box<[Option<NonMaxUsize>]>,
    ranks: Box<[Option<NonMaxUsize>]>,
    distances: Box<[Option<NonMaxUsize>]>,
}

impl BfsTree {
    /// Visits `graph` breadth-first from `root` and records the result.
    ///
    /// # Panics
    ///
    /// If `root` is not a node of the graph.
    pub fn new(graph: impl Graph, root: usize) -> Self {
        let num_nodes = graph.num_nodes();
        assert!(
            root < num_nodes,
            "Root {root} does not exist (the graph has {num_nodes} nodes)"
        );

        let mut order = Vec::new();
        let mut parents = vec![None; num_nodes];
        let mut ranks = vec![None; num_nodes];
        let mut distances = vec![None; num_nodes];

        Seq::new(graph)
            .visit([root], |event| {
                if let EventPred::Unknown {
                    node,
                    pred,
                    distance,
                } = event
                {
                    if node != root {
                        parents[node] = NonMaxUsize::new(pred);
                    }
                    ranks[node] = NonMaxUsize::new(order.len());
                    distances[node] = NonMaxUsize::new(distance);
                    order.push(node);
                }
                Continue(())
            })
            .continue_value_no_break();

        Self {
            root,
            order: order.into_boxed_slice(),
            parents: parents.into_boxed_slice(),
            ranks: ranks.into_boxed_slice(),
            distances: distances.into_boxed_slice(),
        }
    }

    /// Returns the root of the visit.
    #[inline(always)]
    pub fn root(&self) -> usize {
        self.root
    }

    /// Returns the number of nodes of the visited graph.
    #[inline(always)]
    pub fn num_nodes(&self) -> usize {
        self.parents.len()
    }

    /// Returns the nodes reachable from the root in discovery order.
    #[inline(always)]
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Returns the number of nodes reachable from the root, root included.
    #[inline(always)]
    pub fn num_reached(&self) -> usize {
        self.order.len()
    }

    /// Returns the parent of `node`, or `None` for the root and for
    /// unreachable nodes.
    #[inline(always)]
    pub fn parent(&self, node: usize) -> Option<usize> {
        self.parents[node].map(|x| x.get())
    }

    /// Returns the position of `node` in the visit order, or `None` if the
    /// node is unreachable.
    #[inline(always)]
    pub fn rank(&self, node: usize) -> Option<usize> {
        self.ranks[node].map(|x| x.get())
    }

    /// Returns the distance of `node` from the root, or `None` if the node is
    /// unreachable.
    #[inline(always)]
    pub fn distance(&self, node: usize) -> Option<usize> {
        self.distances[node].map(|x| x.get())
    }

    /// Returns the largest distance from the root, that is, the eccentricity
    /// of the root within its connected component.
    pub fn depth(&self) -> usize {
        self.order
            .last()
            .and_then(|&node| self.distance(node))
            .unwrap_or(0)
    }

    /// Returns the number of tree edges, that is, the number of reachable
    /// nodes other than the root.
    #[inline(always)]
    pub fn num_tree_edges(&self) -> usize {
        self.order.len().saturating_sub(1)
    }

    /// Returns an iterator over the tree edges as `(parent, child)` pairs, in
    /// increasing order of child.
    ///
    /// The root and unreachable nodes have no parent, and thus contribute no
    /// edge.
    pub fn tree_edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.parents
            .iter()
            .enumerate()
            .filter_map(|(node, parent)| parent.map(|parent| (parent.get(), node)))
    }
}
