/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::traits::Graph;
use crate::GraphError;
use dsi_progress_logger::ProgressLog;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet};

/// An entry of the frontier: a node and the cumulative weight of the path
/// through which it has been reached.
///
/// The order is reversed, so that [`BinaryHeap`] behaves as a min-heap.
struct Frontier<'a, T> {
    node: &'a T,
    time: f64,
}

impl<T> PartialEq for Frontier<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T> Eq for Frontier<'_, T> {}

impl<T> PartialOrd for Frontier<'_, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Frontier<'_, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.time.total_cmp(&self.time)
    }
}

/// Computes the minimum time needed by a message broadcast from `origin` to
/// reach every node of the graph, where the weight of an edge is the time
/// needed to traverse it.
///
/// This is a uniform-cost search: nodes are settled in increasing order of
/// time, and the result is the time at which the last node is settled.
/// Weights are assumed to be nonnegative. The graph is accessed only through
/// [`outbound_edges`](Graph::outbound_edges) and [`size`](Graph::size), so both
/// directed and undirected graphs can be used.
///
/// Returns `Ok(None)` if some node cannot be reached from `origin`.
///
/// # Errors
///
/// [`GraphError::NodeNotFound`] if `origin` is not in the graph.
///
/// # Examples
///
/// ```
/// use graph_algo::prelude::*;
/// use dsi_progress_logger::no_logging;
///
/// let mut network = DirectedGraph::new();
/// network.add_weighted_edge("a", "b", 1.0);
/// network.add_weighted_edge("a", "c", 6.0);
/// network.add_weighted_edge("b", "c", 1.0);
/// assert_eq!(broadcast_time(&network, &"a", no_logging![])?, Some(2.0));
/// assert_eq!(broadcast_time(&network, &"b", no_logging![])?, None);
/// # Ok::<(), GraphError>(())
/// ```
pub fn broadcast_time<'a, G: Graph>(
    graph: &'a G,
    origin: &'a G::Node,
    pl: &mut impl ProgressLog,
) -> Result<Option<f64>, GraphError> {
    if !graph.contains_node(origin) {
        return Err(GraphError::node_not_found(origin));
    }

    let num_nodes = graph.size();
    let mut settled = HashSet::with_capacity(num_nodes);
    let mut frontier = BinaryHeap::new();
    frontier.push(Frontier {
        node: origin,
        time: 0.0,
    });

    pl.item_name("node");
    pl.expected_updates(Some(num_nodes));
    pl.start("Computing broadcast time...");

    while let Some(Frontier { node, time }) = frontier.pop() {
        if !settled.insert(node) {
            // Stale entry: the node has been reached earlier
            continue;
        }
        pl.light_update();

        if settled.len() == num_nodes {
            pl.done();
            return Ok(Some(time));
        }

        for edge in graph.outbound_edges(node)? {
            frontier.push(Frontier {
                node: edge.destination(),
                time: time + edge.weight(),
            });
        }
    }

    pl.info(format_args!(
        "{} nodes out of {} are not reachable from {:?}",
        num_nodes - settled.len(),
        num_nodes,
        origin
    ));
    pl.done();
    Ok(None)
}
