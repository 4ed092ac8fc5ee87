/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::algo::visits::{breadth_first, depth_first, Sequential};
use crate::graphs::Adjacency;
use crate::GraphError;
use dsi_progress_logger::ProgressLog;
use std::collections::HashSet;
use std::convert::Infallible;
use std::fmt::Debug;
use std::hash::Hash;

/// Returns the minimum positive number of arcs on a path from `from` to `to`,
/// or `None` if `from` or `to` are not nodes, or if there is no such path.
///
/// Arcs are counted, weights are ignored. The empty path is not considered,
/// so the distance of a node from itself is the length of the shortest cycle
/// containing it (1 for a self-loop), and it is `None` for a node that is not
/// on a cycle.
///
/// # Examples
///
/// ```
/// use graph_algo::prelude::*;
/// use dsi_progress_logger::no_logging;
///
/// let mut graph = DirectedGraph::new();
/// graph.add_edge("a", "b");
/// graph.add_edge("b", "a");
/// assert_eq!(distance(graph.adjacency(), &"a", &"b", no_logging![]), Some(1));
/// assert_eq!(distance(graph.adjacency(), &"a", &"a", no_logging![]), Some(2));
/// assert_eq!(distance(graph.adjacency(), &"a", &"c", no_logging![]), None);
/// ```
pub fn distance<T: Eq + Hash>(
    graph: &Adjacency<T>,
    from: &T,
    to: &T,
    pl: &mut impl ProgressLog,
) -> Option<usize> {
    let (Some(from), Some(to)) = (graph.index_of(from), graph.index_of(to)) else {
        return None;
    };

    let mut visit = breadth_first::Seq::new(graph);
    pl.item_name("node");
    pl.expected_updates(Some(graph.num_nodes()));
    pl.start("Computing distance...");

    // Events come in nondecreasing order of distance, so the first arc
    // reaching the target gives the distance; the root event has distance
    // zero and it is skipped. Arcs to known nodes must be considered, too,
    // because the target might be the root.
    let found = visit.visit(
        from,
        |event| match event {
            breadth_first::EventPred::Unknown { curr, distance, .. }
            | breadth_first::EventPred::Known { curr, distance, .. }
                if curr == to && distance > 0 =>
            {
                Err(distance)
            }
            _ => Ok(()),
        },
        pl,
    );

    pl.done();
    found.err()
}

/// Returns the nodes reachable from `source` by a path of positive length,
/// excluding `source` itself, even if it lies on a cycle.
///
/// # Errors
///
/// [`GraphError::NodeNotFound`] if `source` is not a node.
pub fn reachable_from<T: Eq + Hash + Clone + Debug>(
    graph: &Adjacency<T>,
    source: &T,
    pl: &mut impl ProgressLog,
) -> Result<HashSet<T>, GraphError> {
    let root = graph
        .index_of(source)
        .ok_or_else(|| GraphError::node_not_found(source))?;

    let mut visit = depth_first::SeqNoPred::new(graph);
    let mut reachable = HashSet::new();
    pl.item_name("node");
    pl.expected_updates(Some(graph.num_nodes()));
    pl.start("Computing reachable nodes...");

    visit
        .visit(
            root,
            |event| {
                if let depth_first::EventNoPred::Previsit { curr, .. } = event {
                    if curr != root {
                        reachable.extend(graph.node(curr).cloned());
                    }
                }
                Ok::<(), Infallible>(())
            },
            pl,
        )
        .unwrap_or_else(|never| match never {});

    pl.done();
    Ok(reachable)
}
