/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 * SPDX-FileCopyrightText: 2026 Spangraph developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

#![doc = include_str!("../README.md")]
#![deny(unreachable_pub)]
#![deny(unused_doc_comments)]

pub mod bfs;
pub mod eccentricity;
mod error;
pub use error::SpannerError;
pub mod orchestrator;
pub mod sources;
pub mod spanner;

pub mod prelude {
    pub use crate::eccentricity::{BoundStats, EccentricityBounds, InsufficientSources};
    pub use crate::orchestrator::{spanner_graph, DiameterEstimate, SpannerConfig, SpannerOutput};
    pub use crate::sources::{select_sources, SelectionConfig, Strategy};
    pub use crate::spanner::{Spanner, SpannerBuilder};
    pub use crate::SpannerError;
}
