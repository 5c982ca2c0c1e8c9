/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 * SPDX-FileCopyrightText: 2024 Stefano Zacchiroli
 * SPDX-FileCopyrightText: 2026 Spangraph developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

#![doc = include_str!("../README.md")]
#![deny(unstable_features)]
#![deny(trivial_casts)]
#![deny(unconditional_recursion)]
#![deny(clippy::empty_loop)]
#![deny(unreachable_code)]
#![deny(unreachable_pub)]
#![deny(unreachable_patterns)]
#![deny(unused_macro_rules)]
#![deny(unused_doc_comments)]
#![allow(clippy::type_complexity)]

pub mod algo;
pub mod graphs;
pub mod traits;
pub mod transform;
pub mod visits;

pub mod prelude {
    pub use crate::algo::communities::Communities;
    pub use crate::algo::components::Components;
    pub use crate::graphs::prelude::*;
    pub use crate::traits::*;
    pub use crate::transform::*;
    pub use crate::visits::breadth_first;
    pub use crate::visits::breadth_first::BfsTree;
    pub use crate::visits::Sequential;
}
