/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Algorithms on graphs.
//!
//! Algorithms working on node indices take an [`Adjacency`](crate::graphs::Adjacency);
//! [`broadcast_time`] works on any [`Graph`](crate::traits::Graph) through its
//! public interface. All algorithms accept a progress logger, and
//! `no_logging![]` can be passed to disable logging.

pub mod visits;

mod acyclicity;
pub use acyclicity::*;

mod connectivity;
pub use connectivity::*;

mod distance;
pub use distance::*;

mod broadcast_time;
pub use broadcast_time::*;

/// Traits used to interact with the implemented algorithms.
pub mod traits {
    pub use super::visits::Sequential;
}
