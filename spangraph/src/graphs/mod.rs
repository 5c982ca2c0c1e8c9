/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Implementations of graphs.

pub mod load;
pub mod random;
pub mod vec_graph;

pub use load::LoadError;

pub mod prelude {
    pub use super::random::ErdosRenyi;
    pub use super::vec_graph::VecGraph;
    pub use super::LoadError;
}
