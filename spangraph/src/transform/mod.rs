/*
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2026 Spangraph developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Transformations on graphs.
//!
//! This module provides functions that restrict a graph to a subset of its
//! nodes. All functions return the result as a new [`VecGraph`] whose nodes
//! are renumbered densely from zero, preserving their relative order.
//!
//! # Induced subgraphs
//!
//! - [`induced_subgraph`]: returns the subgraph induced by a sorted set of
//!   nodes;
//! - [`subgraph`]: returns the subgraph induced by a range of nodes.
//!
//! # Connected components
//!
//! - [`gcc`]: returns the giant (i.e., largest) connected component of a
//!   graph.
//!
//! [`VecGraph`]: crate::graphs::vec_graph::VecGraph

mod subgraph;
pub use subgraph::*;

mod gcc;
pub use gcc::*;
