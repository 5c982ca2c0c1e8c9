/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 * SPDX-FileCopyrightText: 2026 Spangraph developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Visits on undirected graphs.
//!
//! A visit reports what it sees through a callback whose argument implements
//! [`Event`]. The callback returns a `ControlFlow<E, ()>`: a
//! [`Break`](ControlFlow::Break) stops the visit and becomes its result. When
//! `E` is [`Infallible`](std::convert::Infallible) the visit cannot stop, and
//! [`continue_value_no_break`](no_break::NoBreak::continue_value_no_break)
//! unwraps the result.
//!
//! A filter, called with [`Event::FilterArgs`] whenever a node is discovered,
//! can exclude the node from the visit; excluded nodes are not marked as
//! visited, so they can be discovered again through other edges.
//!
//! The visited set persists across calls, so successive visits from
//! different roots explore each connected component once;
//! [`reset`](Sequential::reset) clears it.

pub mod breadth_first;

use std::ops::ControlFlow;

/// The argument of visit callbacks, usually an enum with a variant per kind
/// of event.
pub trait Event {
    /// The argument of visit filters.
    type FilterArgs;
}

/// A sequential visit.
///
/// Implementors provide [`visit_filtered_with`](Sequential::visit_filtered_with);
/// the other visit methods delegate to it.
pub trait Sequential<A: Event> {
    /// Visits the graph from `roots`, threading `init` through `callback` and
    /// `filter`.
    fn visit_filtered_with<
        R: IntoIterator<Item = usize>,
        T,
        E,
        C: FnMut(&mut T, A) -> ControlFlow<E, ()>,
        F: FnMut(&mut T, A::FilterArgs) -> bool,
    >(
        &mut self,
        roots: R,
        init: T,
        callback: C,
        filter: F,
    ) -> ControlFlow<E, ()>;

    /// Visits the graph from the specified nodes with a filter function.
    fn visit_filtered<
        R: IntoIterator<Item = usize>,
        E,
        C: FnMut(A) -> ControlFlow<E, ()>,
        F: FnMut(A::FilterArgs) -> bool,
    >(
        &mut self,
        roots: R,
        mut callback: C,
        mut filter: F,
    ) -> ControlFlow<E, ()> {
        self.visit_filtered_with(roots, (), |(), a| callback(a), |(), a| filter(a))
    }

    /// Visits the graph from the specified nodes.
    fn visit<R: IntoIterator<Item = usize>, E, C: FnMut(A) -> ControlFlow<E, ()>>(
        &mut self,
        roots: R,
        callback: C,
    ) -> ControlFlow<E, ()> {
        self.visit_filtered(roots, callback, |_| true)
    }

    /// Resets the visit status, making it possible to reuse it.
    fn reset(&mut self);
}
