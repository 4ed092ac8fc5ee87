/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::algo::visits::{breadth_first::EventPred, Sequential};
use crate::graphs::Adjacency;
use dsi_progress_logger::ProgressLog;
use nonmax::NonMaxUsize;
use std::collections::VecDeque;
use std::hash::Hash;
use sux::bits::BitVec;

/// A sequential breadth-first visit.
///
/// This implementation uses an algorithm that is slightly different from the
/// classical textbook algorithm, as we do not store parents or distances of the
/// nodes from the root: Parents and distances are computed on the fly and
/// passed to the callback function by visiting nodes when they are discovered,
/// rather than when they are extracted from the queue.
///
/// This approach requires inserting a level separator between nodes at
/// different distances: to obtain this result in a compact way, nodes are
/// represented using [`NonMaxUsize`], so the `None` variant of
/// `Option<NonMaxUsize>` can be used as a separator.
///
/// Events are generated in nondecreasing order of distance, and every node is
/// extracted from the queue at most once, so visits terminate on graphs with
/// cycles.
///
/// # Examples
///
/// ```
/// use std::convert::Infallible;
/// use graph_algo::prelude::*;
/// use graph_algo::algo::visits::*;
/// use dsi_progress_logger::no_logging;
///
/// // Let's compute the distances from 0
///
/// let mut graph = DirectedGraph::new();
/// for (from, to) in [(0, 1), (1, 2), (2, 0), (1, 3), (3, 3)] {
///     graph.add_edge(from, to);
/// }
/// let mut visit = breadth_first::Seq::new(graph.adjacency());
/// let mut d = [0; 4];
/// visit.visit(
///     0,
///     |event| {
///         // Set distance from 0
///         if let breadth_first::EventPred::Unknown { curr, distance, .. } = event {
///             d[curr] = distance;
///         }
///         Ok::<(), Infallible>(())
///     },
///     no_logging![]
/// ).unwrap();
/// assert_eq!(d, [0, 1, 2, 2]);
/// ```
pub struct Seq<'a, T> {
    graph: &'a Adjacency<T>,
    visited: BitVec,
    /// The visit queue; to avoid storing distances, we use `None` as a
    /// separator between levels. [`NonMaxUsize`] is used to avoid
    /// storage for the option variant tag.
    queue: VecDeque<Option<NonMaxUsize>>,
}

impl<'a, T: Eq + Hash> Seq<'a, T> {
    /// Creates a new sequential visit.
    ///
    /// # Arguments
    /// * `graph`: an immutable reference to the graph to visit.
    pub fn new(graph: &'a Adjacency<T>) -> Self {
        let num_nodes = graph.num_nodes();
        Self {
            graph,
            visited: BitVec::new(num_nodes),
            queue: VecDeque::new(),
        }
    }
}

impl<'a, T: Eq + Hash> Sequential<EventPred> for Seq<'a, T> {
    fn visit<E, C: FnMut(EventPred) -> Result<(), E>>(
        &mut self,
        root: usize,
        mut callback: C,
        pl: &mut impl ProgressLog,
    ) -> Result<(), E> {
        if self.visited.get(root) {
            return Ok(());
        }

        callback(EventPred::Unknown {
            curr: root,
            pred: root,
            root,
            distance: 0,
        })?;

        self.visited.set(root, true);
        self.queue.push_back(Some(
            NonMaxUsize::new(root).expect("node index should never be usize::MAX"),
        ));
        self.queue.push_back(None);

        let mut distance = 1;

        while let Some(current_node) = self.queue.pop_front() {
            match current_node {
                Some(node) => {
                    let node = node.get();
                    for succ in self.graph.successors(node) {
                        if !self.visited.get(succ) {
                            callback(EventPred::Unknown {
                                curr: succ,
                                pred: node,
                                root,
                                distance,
                            })?;
                            self.visited.set(succ, true);
                            self.queue.push_back(Some(
                                NonMaxUsize::new(succ)
                                    .expect("node index should never be usize::MAX"),
                            ))
                        } else {
                            callback(EventPred::Known {
                                curr: succ,
                                pred: node,
                                root,
                                distance,
                            })?;
                        }
                    }
                    pl.light_update();
                }
                None => {
                    // We are at the end of the current level, so
                    // we increment the distance and add a separator.
                    if !self.queue.is_empty() {
                        distance += 1;
                        self.queue.push_back(None);
                    }
                }
            }
        }

        Ok(())
    }

    fn visit_all<E, C: FnMut(EventPred) -> Result<(), E>>(
        &mut self,
        mut callback: C,
        pl: &mut impl ProgressLog,
    ) -> Result<(), E> {
        for node in 0..self.graph.num_nodes() {
            self.visit(node, &mut callback, pl)?;
        }

        Ok(())
    }

    fn reset(&mut self) {
        self.queue.clear();
        self.visited.fill(false);
    }
}
