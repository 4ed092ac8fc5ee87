/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use dsi_progress_logger::prelude::*;
use graph_algo::algo::visits::{depth_first::*, Sequential, StoppedWhenDone};
use graph_algo::prelude::*;
use std::convert::Infallible;

/// Builds a directed graph on nodes `0..n` in which node `i` has index `i`.
fn graph_from_arcs(n: usize, arcs: &[(usize, usize)]) -> DirectedGraph<usize> {
    let mut graph = DirectedGraph::with_nodes(0..n).unwrap();
    for &(from, to) in arcs {
        graph.add_edge(from, to);
    }
    graph
}

#[test]
fn test_acyclicity() {
    let graph = graph_from_arcs(3, &[(1, 2), (0, 1)]);
    assert!(acyclicity(graph.adjacency(), no_logging![]));
    assert!(!graph.has_cycle());

    let graph = graph_from_arcs(3, &[(0, 1), (1, 2), (2, 0)]);
    assert!(!acyclicity(graph.adjacency(), no_logging![]));
    assert!(graph.has_cycle());

    let graph = graph_from_arcs(4, &[(0, 1), (0, 2), (2, 3), (1, 3)]);
    assert!(acyclicity(graph.adjacency(), no_logging![]));

    let graph = graph_from_arcs(2, &[(1, 1)]);
    assert!(!acyclicity(graph.adjacency(), no_logging![]));
}

#[test]
fn test_symm_acyclicity() {
    let mut graph = UndirectedGraph::with_nodes(0..4).unwrap();
    graph.add_edge(0, 1);
    graph.add_edge(1, 2);
    graph.add_edge(1, 3);
    assert!(symm_acyclicity(graph.adjacency(), no_logging![]));
    // The same arcs are a cycle for a directed visit
    assert!(!acyclicity(graph.adjacency(), no_logging![]));

    graph.add_edge(3, 0);
    assert!(!symm_acyclicity(graph.adjacency(), no_logging![]));
}

#[test]
fn test_events_pred() {
    let graph = graph_from_arcs(4, &[(0, 1), (1, 2), (2, 0), (1, 3)]);
    let mut visit = SeqPath::new(graph.adjacency());
    let mut events = vec![];
    visit
        .visit(
            0,
            |event| {
                events.push(event);
                Ok::<(), Infallible>(())
            },
            no_logging![],
        )
        .unwrap();

    assert_eq!(
        events,
        vec![
            EventPred::Init { root: 0 },
            EventPred::Previsit {
                curr: 0,
                pred: 0,
                root: 0,
                depth: 0
            },
            EventPred::Previsit {
                curr: 1,
                pred: 0,
                root: 0,
                depth: 1
            },
            EventPred::Previsit {
                curr: 2,
                pred: 1,
                root: 0,
                depth: 2
            },
            EventPred::Revisit {
                curr: 0,
                pred: 2,
                root: 0,
                depth: 3,
                on_stack: true
            },
            EventPred::Postvisit {
                curr: 2,
                pred: 1,
                root: 0,
                depth: 2
            },
            EventPred::Previsit {
                curr: 3,
                pred: 1,
                root: 0,
                depth: 2
            },
            EventPred::Postvisit {
                curr: 3,
                pred: 1,
                root: 0,
                depth: 2
            },
            EventPred::Postvisit {
                curr: 1,
                pred: 0,
                root: 0,
                depth: 1
            },
            EventPred::Postvisit {
                curr: 0,
                pred: 0,
                root: 0,
                depth: 0
            },
            EventPred::Done { root: 0 },
        ]
    );
}

#[test]
fn test_on_stack_only_with_path() {
    let graph = graph_from_arcs(3, &[(0, 1), (1, 2), (2, 0), (0, 2)]);

    let mut on_stack_revisits = 0;
    SeqPath::new(graph.adjacency())
        .visit_all(
            |event| {
                if let EventPred::Revisit { on_stack: true, .. } = event {
                    on_stack_revisits += 1;
                }
                Ok::<(), Infallible>(())
            },
            no_logging![],
        )
        .unwrap();
    // The back arc 2 -> 0; the forward arc 0 -> 2 reaches a completed node
    assert_eq!(on_stack_revisits, 1);

    let mut on_stack_revisits = 0;
    SeqPred::new(graph.adjacency())
        .visit_all(
            |event| {
                if let EventPred::Revisit { on_stack: true, .. } = event {
                    on_stack_revisits += 1;
                }
                Ok::<(), Infallible>(())
            },
            no_logging![],
        )
        .unwrap();
    assert_eq!(on_stack_revisits, 0);
}

#[test]
fn test_no_pred_visit_all() {
    let graph = graph_from_arcs(5, &[(0, 1), (2, 3), (3, 2)]);
    let mut visit = SeqNoPred::new(graph.adjacency());
    let mut roots = vec![];
    let mut previsited = 0;
    visit
        .visit_all(
            |event| {
                match event {
                    EventNoPred::Init { root } => roots.push(root),
                    EventNoPred::Previsit { .. } => previsited += 1,
                    _ => {}
                }
                Ok::<(), Infallible>(())
            },
            no_logging![],
        )
        .unwrap();
    assert_eq!(roots, vec![0, 2, 4]);
    assert_eq!(previsited, 5);
    assert!((0..5).all(|node| visit.known(node)));

    visit.reset();
    assert!((0..5).all(|node| !visit.known(node)));
}

#[test]
fn test_interrupted_visit() {
    let graph = graph_from_arcs(4, &[(0, 1), (1, 2), (2, 3)]);
    let mut visit = SeqNoPred::new(graph.adjacency());
    let result = visit.visit(
        0,
        |event| match event {
            EventNoPred::Previsit { curr: 2, .. } => Err(StoppedWhenDone),
            _ => Ok(()),
        },
        no_logging![],
    );
    assert_eq!(result, Err(StoppedWhenDone));
    assert!(visit.known(2));
    assert!(!visit.known(3));
}

#[test]
fn test_long_path() {
    // The visit is iterative, so a long path does not exhaust the stack
    let n = 100_000;
    let arcs = (0..n - 1).map(|i| (i, i + 1)).collect::<Vec<_>>();
    let mut graph = graph_from_arcs(n, &arcs);
    assert!(!graph.has_cycle());
    assert_eq!(graph.nodes_connected_to(&0).unwrap().len(), n - 1);
    assert!(!graph.is_connected_graph());

    graph.add_edge(n - 1, 0);
    assert!(graph.has_cycle());
}

#[test]
fn test_strong_connectivity_witness() {
    // Every node has 0 as first successor, so once the visit from 0 has
    // reached every node, every other visit stops at its first arc
    let n = 10_000;
    let mut arcs = (1..n).map(|i| (i, 0)).collect::<Vec<_>>();
    arcs.extend((0..n - 1).map(|i| (i, i + 1)));
    let mut graph = graph_from_arcs(n, &arcs);
    assert!(strong_connectivity(graph.adjacency(), no_logging![]));

    graph.remove_edge(&(n - 1), &0);
    assert!(!strong_connectivity(graph.adjacency(), no_logging![]));
}
