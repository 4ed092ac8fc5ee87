/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use anyhow::Result;
use dsi_progress_logger::prelude::*;
use graph_algo::algo::visits::{breadth_first::*, Sequential};
use graph_algo::prelude::*;
use std::collections::HashSet;
use std::convert::Infallible;

/// Builds a directed graph on nodes `0..n` in which node `i` has index `i`.
fn graph_from_arcs(n: usize, arcs: &[(usize, usize)]) -> DirectedGraph<usize> {
    let mut graph = DirectedGraph::with_nodes(0..n).unwrap();
    for &(from, to) in arcs {
        graph.add_edge(from, to);
    }
    graph
}

/// Returns the nodes reached by a visit from `root`, grouped by distance
/// and sorted.
fn levels(graph: &DirectedGraph<usize>, root: usize) -> Vec<Vec<usize>> {
    let mut levels: Vec<Vec<usize>> = vec![];
    Seq::new(graph.adjacency())
        .visit(
            root,
            |event| {
                if let EventPred::Unknown { curr, distance, .. } = event {
                    if levels.len() <= distance {
                        levels.resize(distance + 1, vec![]);
                    }
                    levels[distance].push(curr);
                }
                Ok::<(), Infallible>(())
            },
            no_logging![],
        )
        .unwrap();
    for level in &mut levels {
        level.sort();
    }
    levels
}

#[test]
fn test_levels() {
    let graph = graph_from_arcs(
        7,
        &[(0, 1), (0, 2), (1, 3), (2, 3), (3, 4), (4, 0), (2, 5)],
    );
    assert_eq!(
        levels(&graph, 0),
        vec![vec![0], vec![1, 2], vec![3, 5], vec![4]]
    );
    assert_eq!(
        levels(&graph, 3),
        vec![vec![3], vec![4], vec![0], vec![1, 2], vec![5]]
    );
    // Node 6 is isolated
    assert_eq!(levels(&graph, 6), vec![vec![6]]);
}

#[test]
fn test_known_events() {
    let graph = graph_from_arcs(3, &[(0, 1), (0, 2), (1, 2), (2, 0)]);
    let mut known = vec![];
    Seq::new(graph.adjacency())
        .visit(
            0,
            |event| {
                if let EventPred::Known {
                    curr,
                    pred,
                    distance,
                    ..
                } = event
                {
                    known.push((pred, curr, distance));
                }
                Ok::<(), Infallible>(())
            },
            no_logging![],
        )
        .unwrap();
    // The path through the known node is longer than its distance
    assert_eq!(known, vec![(1, 2, 2), (2, 0, 2)]);
}

#[test]
fn test_visit_all() {
    let graph = graph_from_arcs(5, &[(1, 0), (3, 4)]);
    let mut visit = Seq::new(graph.adjacency());
    let mut roots = vec![];
    visit
        .visit_all(
            |event| {
                if let EventPred::Unknown { curr, root, .. } = event {
                    if curr == root {
                        roots.push(root);
                    }
                }
                Ok::<(), Infallible>(())
            },
            no_logging![],
        )
        .unwrap();
    assert_eq!(roots, vec![0, 1, 2, 3]);

    // Once reset, already visited nodes can be roots again
    visit.reset();
    let mut count = 0;
    visit
        .visit(
            4,
            |_| {
                count += 1;
                Ok::<(), Infallible>(())
            },
            no_logging![],
        )
        .unwrap();
    assert_eq!(count, 1);
}

#[test]
fn test_interrupted_visit() {
    let graph = graph_from_arcs(4, &[(0, 1), (1, 2), (2, 3)]);
    let result = Seq::new(graph.adjacency()).visit(
        0,
        |event| match event {
            EventPred::Unknown { curr, distance, .. } if curr == 2 => Err(distance),
            _ => Ok(()),
        },
        no_logging![],
    );
    assert_eq!(result, Err(2));
}

#[test]
fn test_distance() -> Result<()> {
    let graph = graph_from_arcs(5, &[(0, 1), (1, 2), (2, 3), (0, 3), (3, 3)]);
    let adj = graph.adjacency();
    assert_eq!(distance(adj, &0, &3, no_logging![]), Some(1));
    assert_eq!(distance(adj, &1, &3, no_logging![]), Some(2));
    // The self-loop is a closed path of length one
    assert_eq!(distance(adj, &3, &3, no_logging![]), Some(1));
    // Node 0 is not on a cycle
    assert_eq!(distance(adj, &0, &0, no_logging![]), None);
    assert_eq!(distance(adj, &3, &0, no_logging![]), None);
    assert_eq!(distance(adj, &4, &0, no_logging![]), None);
    // Missing nodes
    assert_eq!(distance(adj, &9, &0, no_logging![]), None);
    assert_eq!(distance(adj, &0, &9, no_logging![]), None);

    let mut pl = ProgressLogger::default();
    assert_eq!(distance(adj, &0, &2, &mut pl), Some(2));
    Ok(())
}

#[test]
fn test_reachable_from() -> Result<()> {
    let graph = graph_from_arcs(5, &[(0, 1), (1, 2), (2, 0), (3, 4)]);
    let adj = graph.adjacency();
    assert_eq!(
        reachable_from(adj, &0, no_logging![])?,
        HashSet::from([1, 2])
    );
    assert_eq!(
        reachable_from(adj, &3, no_logging![])?,
        HashSet::from([4])
    );
    assert!(reachable_from(adj, &4, no_logging![])?.is_empty());
    assert!(matches!(
        reachable_from(adj, &5, no_logging![]),
        Err(GraphError::NodeNotFound { .. })
    ));
    Ok(())
}
