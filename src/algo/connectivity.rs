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
use sux::bits::BitVec;

/// Returns whether the graph is strongly connected, that is, whether every
/// node can reach every other node. The empty graph is not connected.
///
/// Nodes are examined in index order. We keep track of the nodes that are
/// known to reach every node: a visit from a node succeeds as soon as it
/// reaches one of them, or when it has reached every node of the graph. The
/// first node whose visit fails shows that the graph is not strongly
/// connected.
pub fn strong_connectivity<T: Eq + Hash>(
    graph: &Adjacency<T>,
    pl: &mut impl ProgressLog,
) -> bool {
    let num_nodes = graph.num_nodes();
    if num_nodes == 0 {
        return false;
    }

    let mut visit = SeqNoPred::new(graph);
    let mut reaches_all = BitVec::new(num_nodes);
    pl.item_name("node");
    pl.expected_updates(Some(num_nodes));
    pl.start("Checking strong connectivity...");

    for node in 0..num_nodes {
        let mut reached = 0;
        let witness = visit.visit(
            node,
            |event| {
                if let EventNoPred::Previsit { curr, .. } = event {
                    if reaches_all.get(curr) {
                        return Err(StoppedWhenDone);
                    }
                    reached += 1;
                }
                Ok(())
            },
            pl,
        );

        if witness.is_err() || reached == num_nodes {
            reaches_all.set(node, true);
        } else {
            pl.info(format_args!("Node {} does not reach every node", node));
            pl.done();
            return false;
        }
        visit.reset();
    }

    pl.done();
    true
}

/// Returns whether a symmetric graph is connected. The empty graph is not
/// connected.
///
/// Since every arc has a mirrored arc, it is sufficient to check that a
/// visit from an arbitrary node reaches every other node.
pub fn symm_connectivity<T: Eq + Hash>(graph: &Adjacency<T>, pl: &mut impl ProgressLog) -> bool {
    let num_nodes = graph.num_nodes();
    if num_nodes == 0 {
        return false;
    }

    let mut visit = SeqNoPred::new(graph);
    let mut reached = 0;
    pl.item_name("node");
    pl.expected_updates(Some(num_nodes));
    pl.start("Checking connectivity of symmetric graph...");

    visit
        .visit(
            0,
            |event| {
                if let EventNoPred::Previsit { curr, .. } = event {
                    if curr != 0 {
                        reached += 1;
                    }
                }
                Ok::<(), std::convert::Infallible>(())
            },
            pl,
        )
        .unwrap_or_else(|never| match never {});

    pl.done();
    reached == num_nodes - 1
}
