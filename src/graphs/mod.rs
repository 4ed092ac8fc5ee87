/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! In-memory graphs whose nodes are identified by their values.
//!
//! Both [`DirectedGraph`] and [`UndirectedGraph`] store their arcs in an
//! [`Adjacency`], a two-level map from a node to its successors and from each
//! successor to the [`Edge`] reaching it. An undirected edge is stored as two
//! mirrored arcs carrying the same weight.

mod adjacency;
pub use adjacency::*;

mod edge;
pub use edge::*;

mod directed;
pub use directed::*;

mod undirected;
pub use undirected::*;

/// Traits used to interact with graphs.
pub mod traits;
