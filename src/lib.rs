/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

pub mod algo;
pub mod graphs;

mod error;
pub use error::GraphError;

/// Module exposing all traits in a single level.
pub mod traits {
    use super::*;
    pub use algo::traits::*;
    pub use graphs::traits::*;
}

/// Use `use graph_algo::prelude::*;` to import common utilities, modules and
/// all traits.
pub mod prelude {
    use super::*;
    pub use algo::visits::breadth_first;
    pub use algo::visits::depth_first;
    pub use algo::{
        acyclicity, broadcast_time, distance, reachable_from, strong_connectivity,
        symm_acyclicity, symm_connectivity,
    };
    pub use error::GraphError;
    pub use graphs::{Adjacency, DirectedGraph, Edge, EdgeView, UndirectedGraph};
    pub use traits::*;
}
