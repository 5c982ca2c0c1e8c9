/*
 * SPDX-FileCopyrightText: 2026 Spangraph developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use thiserror::Error;

/// Structural errors in the construction of a spanner.
///
/// All these errors are detected before any visit is performed.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SpannerError {
    /// The community strategy was requested on a graph that does not support
    /// community detection.
    #[error("The community strategy requires a graph supporting community detection")]
    UnsupportedStrategy,

    /// The budget factor is not in the interval (0..1].
    #[error("The budget factor must be in (0..1], but it is {0}")]
    InvalidBudgetFactor(f64),

    /// More sources were requested than are available.
    #[error("{requested} sources requested, but only {available} are available")]
    NotEnoughSources { requested: usize, available: usize },
}
