/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 * SPDX-FileCopyrightText: 2026 Spangraph developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Breadth-first visits.
//!
//! Visits accept a callback function with argument [`EventPred`], and a
//! filter with argument [`FilterArgsPred`]. Since [`EventPred`] contains the
//! predecessor of the visited node, all post-initialization visit events can
//! be interpreted as edge events. The only exception is the
//! [`Unknown`](EventPred::Unknown) event at the root, whose predecessor is the
//! root itself.
//!
//! The materialized result of a single-source visit is a [`BfsTree`].

mod seq;
pub use seq::*;

mod tree;
pub use tree::*;

/// Types of callback events generated during breadth-first visits.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub enum EventPred {
    /// This event should be used to set up state at the start of the visit.
    ///
    /// Note that this event will not happen if the visit is empty, that
    /// is, all of the roots are already visited or filtered.
    Init {},
    /// The node has been encountered for the first time: we are traversing a
    /// new tree edge, unless all node fields are equal to the root.
    Unknown {
        /// The current node.
        node: usize,
        /// The predecessor of [node](`EventPred::Unknown::node`).
        pred: usize,
        /// The distance of the current node from the roots.
        distance: usize,
    },
    /// The node has been encountered before: we are traversing a non-tree
    /// edge.
    Known {
        /// The current node.
        node: usize,
        /// The predecessor of [node](`EventPred::Known::node`).
        pred: usize,
    },
    /// The nodes at a new distance are about to be processed.
    DistanceChanged {
        /// The number of nodes at that distance.
        nodes: usize,
        /// The distance of the nodes.
        distance: usize,
    },
    /// The visit has been completed.
    ///
    /// Note that this event will not happen if the visit is empty (that is, if
    /// the root has already been visited) or if the visit is stopped by a
    /// callback returning a [`Break`](std::ops::ControlFlow::Break).
    Done {},
}

/// Filter arguments for breadth-first visits.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub struct FilterArgsPred {
    /// The current node.
    pub node: usize,
    /// The predecessor of [node](`Self::node`).
    pub pred: usize,
    /// The distance of the current node from the roots.
    pub distance: usize,
}

impl super::Event for EventPred {
    type FilterArgs = FilterArgsPred;
}
