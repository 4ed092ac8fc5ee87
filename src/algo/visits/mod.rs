/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Visits on the node indices of an [`Adjacency`](crate::graphs::Adjacency).
//!
//! Visits invoke a callback on a stream of events. The callback returns a
//! [`Result`]: returning an error interrupts the visit, and the error is
//! returned by the visit method. Visits that cannot be interrupted use
//! [`Infallible`](std::convert::Infallible) as error type.

pub mod breadth_first;
pub mod depth_first;

use dsi_progress_logger::ProgressLog;

/// A convenience type for visits that are interrupted as soon as the
/// callback has found what it was looking for.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct StoppedWhenDone;

/// A sequential visit.
///
/// Implementations of this trait must provide the
/// [`visit`](Sequential::visit) method, which should perform a visit of a graph
/// starting from a given node, the [`visit_all`](Sequential::visit_all) method,
/// which should perform a visit of the whole graph, and the
/// [`reset`](Sequential::reset) method.
///
/// For each node, the visit invokes a callback with argument of type `A`.
pub trait Sequential<A> {
    /// Visits the graph from the specified node.
    ///
    /// Nodes already known to the visit, because of a previous call since
    /// the last [reset](Sequential::reset), are not visited again.
    ///
    /// # Arguments
    /// * `root`: the index of the node to start the visit from.
    ///
    /// * `callback`: the callback function; returning an error interrupts the
    ///   visit.
    ///
    /// * `pl`: a progress logger.
    fn visit<E, C: FnMut(A) -> Result<(), E>>(
        &mut self,
        root: usize,
        callback: C,
        pl: &mut impl ProgressLog,
    ) -> Result<(), E>;

    /// Visits the whole graph, starting from every node in index order.
    ///
    /// See [`visit`](Sequential::visit) for more details.
    fn visit_all<E, C: FnMut(A) -> Result<(), E>>(
        &mut self,
        callback: C,
        pl: &mut impl ProgressLog,
    ) -> Result<(), E>;

    /// Resets the visit status, making it possible to reuse it.
    fn reset(&mut self);
}
