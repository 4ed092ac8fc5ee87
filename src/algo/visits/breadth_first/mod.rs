/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Breadth-first visits.
//!
//! Implementations accept a callback function with argument [`EventPred`]
//! that will be called when discovering or rediscovering a node.

mod seq;
pub use seq::*;

/// Types of callback events generated during a breadth-first visit.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum EventPred {
    /// The node has been encountered for the first time: we are traversing a
    /// new tree arc, unless all fields are equal to the root.
    Unknown {
        curr: usize,
        pred: usize,
        root: usize,
        distance: usize,
    },
    /// The node has been encountered before: we are traversing a back arc, a
    /// forward arc, or a cross arc.
    ///
    /// `distance` is the length of the path to `curr` through `pred`, which is
    /// not necessarily the distance of `curr` from the root.
    Known {
        curr: usize,
        pred: usize,
        root: usize,
        distance: usize,
    },
}
