/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::algo::visits::{depth_first::*, Sequential, StoppedWhenDone};
use crate::graphs::Adjacency;
use dsi_progress_logger::ProgressLog;
use std::hash::Hash;

/// Returns whether the graph, seen as a directed graph, is acyclic.
///
/// The visit stops as soon as an arc reaches a node on the visit path; a
/// self-loop is such an arc.
pub fn acyclicity<T: Eq + Hash>(graph: &Adjacency<T>, pl: &mut impl ProgressLog) -> bool {
    let mut visit = SeqPath::new(graph);
    pl.item_name("node");
    pl.expected_updates(Some(graph.num_nodes()));
    pl.start("Checking acyclicity...");

    let acyclic = visit.visit_all(
        |event| {
            // Stop the visit as soon as a back arc is found.
            match event {
                EventPred::Revisit { on_stack: true, .. } => Err(StoppedWhenDone),
                _ => Ok(()),
            }
        },
        pl,
    );

    pl.done();
    acyclic.is_ok()
}

/// Returns whether the graph, seen as an undirected graph, is acyclic.
///
/// The graph must be symmetric, that is, every arc must have a mirrored arc.
/// The visit stops as soon as an arc reaches a node on the visit path, except
/// for the arc leading back to the parent in the visit tree, which is the
/// mirror of the tree arc just traversed. A self-loop is a cycle.
pub fn symm_acyclicity<T: Eq + Hash>(graph: &Adjacency<T>, pl: &mut impl ProgressLog) -> bool {
    let num_nodes = graph.num_nodes();
    let mut visit = SeqPath::new(graph);
    let mut parent = vec![0; num_nodes].into_boxed_slice();
    pl.item_name("node");
    pl.expected_updates(Some(num_nodes));
    pl.start("Checking acyclicity of symmetric graph...");

    let acyclic = visit.visit_all(
        |event| {
            match event {
                EventPred::Previsit { curr, pred, .. } => {
                    parent[curr] = pred;
                }
                EventPred::Revisit {
                    curr,
                    pred,
                    on_stack: true,
                    ..
                } => {
                    // The parent of a root is the root itself, so self-loops
                    // must be checked explicitly
                    if curr == pred || curr != parent[pred] {
                        return Err(StoppedWhenDone);
                    }
                }
                _ => {}
            }
            Ok(())
        },
        pl,
    );

    pl.done();
    acyclic.is_ok()
}
