/*
 * SPDX-FileCopyrightText: 2024 Sebastiano Vigna
 * SPDX-FileCopyrightText: 2026 Spangraph developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Basic algorithms on undirected graphs.

pub mod communities;
pub mod components;
