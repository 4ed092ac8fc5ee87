/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Depth-first visits.
//!
//! Implementations accept a callback function with argument [`EventNoPred`]
//! or [`EventPred`], depending on the type of visit. The callback is called
//! at the start of a visit, every time a new node is discovered, every time a
//! node is revisited, and, if the visit keeps track of predecessors, every
//! time the enumeration of the successors of a node is completed.
//!
//! Since [`EventPred`] contains the predecessor of the visited node, all
//! post-initialization events can be interpreted as arc events. The only
//! exceptions are the previsit and postvisit events of the root.

mod seq;
pub use seq::*;

/// Types of callback events generated during a depth-first visit
/// keeping track of parent nodes (and possibly of the visit path).
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum EventPred {
    /// Initialization: this event should be used to set up state at the start
    /// of the visit from `root`.
    Init { root: usize },
    /// The node has been encountered for the first time: we are traversing a
    /// new tree arc, unless all fields are equal to the root.
    Previsit {
        curr: usize,
        pred: usize,
        root: usize,
        depth: usize,
    },
    /// The node has been encountered before: we are traversing a back arc, a
    /// forward arc, or a cross arc.
    ///
    /// If the visit keeps track of the visit path, `on_stack` denotes whether
    /// the node is currently on the visit path, that is, if we are traversing
    /// a back arc. Otherwise, it is always false.
    Revisit {
        curr: usize,
        pred: usize,
        root: usize,
        depth: usize,
        on_stack: bool,
    },
    /// The enumeration of the successors of the node has been completed: we
    /// are retreating from a tree arc, unless all fields are equal to the
    /// root.
    Postvisit {
        curr: usize,
        pred: usize,
        root: usize,
        depth: usize,
    },
    /// The visit from `root` has been completed.
    Done { root: usize },
}

/// Types of callback events generated during a depth-first visit
/// not keeping track of parent nodes.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum EventNoPred {
    /// Initialization: this event should be used to set up state at the start
    /// of the visit from `root`.
    Init { root: usize },
    /// The node has been encountered for the first time.
    Previsit {
        curr: usize,
        root: usize,
        depth: usize,
    },
    /// The node has been encountered before.
    Revisit {
        curr: usize,
        root: usize,
        depth: usize,
    },
    /// The visit from `root` has been completed.
    Done { root: usize },
}
