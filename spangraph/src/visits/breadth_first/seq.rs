/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 * SPDX-FileCopyrightText: 2026 Spangraph developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::traits::Graph;
use crate::visits::{
    breadth_first::{EventPred, FilterArgsPred},
    Sequential,
};
use std::ops::ControlFlow::{self, Continue};
use sux::prelude::*;

/// A sequential breadth-first visit.
///
/// The visit proceeds level by level: the nodes at distance `d` from the
/// roots form the _frontier_, and scanning their neighbors builds the
/// frontier at distance `d + 1`. Parents and distances are not stored; they
/// are passed to the callback when a node is discovered.
///
/// # Examples
///
/// Let's compute the distances from 0:
///
/// ```
/// use spangraph::visits::*;
/// use spangraph::graphs::vec_graph::VecGraph;
/// use std::ops::ControlFlow::Continue;
/// use no_break::NoBreak;
///
/// let graph = VecGraph::from_edges([(0, 1), (1, 2), (2, 0), (1, 3)]);
/// let mut visit = breadth_first::Seq::new(&graph);
/// let mut d = [0; 4];
/// visit.visit(
///     [0],
///     |event| {
///          if let breadth_first::EventPred::Unknown { node, distance, .. } = event {
///              d[node] = distance;
///          }
///          Continue(())
///     },
/// ).continue_value_no_break();
///
/// assert_eq!(d, [0, 1, 1, 2]);
/// ```
///
/// A visit can be interrupted: here we stop at the first node at distance
/// two and return it.
///
/// ```
/// use spangraph::visits::*;
/// use spangraph::graphs::vec_graph::VecGraph;
/// use std::ops::ControlFlow::{Break, Continue};
///
/// let graph = VecGraph::from_edges([(0, 1), (1, 2), (2, 3), (3, 0), (2, 4)]);
/// let mut visit = breadth_first::Seq::new(&graph);
/// let far = visit.visit([0], |event| match event {
///     breadth_first::EventPred::Unknown { node, distance: 2, .. } => Break(node),
///     _ => Continue(()),
/// });
/// assert_eq!(far, Break(2));
/// ```
pub struct Seq<G: Graph> {
    graph: G,
    visited: BitVec,
    /// The nodes at the current distance.
    frontier: Vec<usize>,
    /// The nodes at the next distance, discovered so far.
    next: Vec<usize>,
}

impl<G: Graph> Seq<G> {
    /// Creates a new sequential visit of `graph`.
    pub fn new(graph: G) -> Self {
        let num_nodes = graph.num_nodes();
        Self {
            graph,
            visited: BitVec::new(num_nodes),
            frontier: vec![],
            next: vec![],
        }
    }
}

impl<G: Graph> Sequential<EventPred> for Seq<G> {
    fn visit_filtered_with<
        R: IntoIterator<Item = usize>,
        T,
        E,
        C: FnMut(&mut T, EventPred) -> ControlFlow<E, ()>,
        F: FnMut(&mut T, FilterArgsPred) -> bool,
    >(
        &mut self,
        roots: R,
        mut init: T,
        mut callback: C,
        mut filter: F,
    ) -> ControlFlow<E, ()> {
        self.frontier.clear();
        self.next.clear();

        for root in roots {
            if self.visited[root] {
                continue;
            }
            let args = FilterArgsPred {
                node: root,
                pred: root,
                distance: 0,
            };
            if !filter(&mut init, args) {
                continue;
            }
            // Init is emitted only if some root survives
            if self.frontier.is_empty() {
                callback(&mut init, EventPred::Init {})?;
            }
            self.visited.set(root, true);
            self.frontier.push(root);
            callback(
                &mut init,
                EventPred::Unknown {
                    node: root,
                    pred: root,
                    distance: 0,
                },
            )?;
        }

        if self.frontier.is_empty() {
            return Continue(());
        }

        let mut distance = 0;
        while !self.frontier.is_empty() {
            callback(
                &mut init,
                EventPred::DistanceChanged {
                    nodes: self.frontier.len(),
                    distance,
                },
            )?;
            distance += 1;

            for &pred in &self.frontier {
                for node in self.graph.neighbors(pred) {
                    if self.visited[node] {
                        callback(&mut init, EventPred::Known { node, pred })?;
                        continue;
                    }
                    if filter(
                        &mut init,
                        FilterArgsPred {
                            node,
                            pred,
                            distance,
                        },
                    ) {
                        self.visited.set(node, true);
                        self.next.push(node);
                        callback(
                            &mut init,
                            EventPred::Unknown {
                                node,
                                pred,
                                distance,
                            },
                        )?;
                    }
                }
            }

            std::mem::swap(&mut self.frontier, &mut self.next);
            self.next.clear();
        }

        callback(&mut init, EventPred::Done {})
    }

    fn reset(&mut self) {
        self.frontier.clear();
        self.next.clear();
        self.visited.fill(false);
    }
}
