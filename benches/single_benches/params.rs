/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use graph_algo::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const NUM_SAMPLES: usize = 20;

/// Pairs (number of nodes, number of arcs) of the random benchmark graphs.
pub const BENCH_SIZES: [(usize, usize); 3] =
    [(1_000, 5_000), (10_000, 50_000), (100_000, 500_000)];

/// Returns a random directed graph on nodes `0..num_nodes` with arc weights
/// in [0..1).
pub fn random_graph(num_nodes: usize, num_arcs: usize, seed: u64) -> DirectedGraph<usize> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = DirectedGraph::with_nodes(0..num_nodes).unwrap();
    for _ in 0..num_arcs {
        graph.add_weighted_edge(
            rng.random_range(0..num_nodes),
            rng.random_range(0..num_nodes),
            rng.random::<f64>(),
        );
    }
    graph
}

/// Returns a random undirected graph on nodes `0..num_nodes` with edge
/// weights in [0..1).
pub fn random_symm_graph(
    num_nodes: usize,
    num_edges: usize,
    seed: u64,
) -> UndirectedGraph<usize> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = UndirectedGraph::with_nodes(0..num_nodes).unwrap();
    for _ in 0..num_edges {
        graph.add_weighted_edge(
            rng.random_range(0..num_nodes),
            rng.random_range(0..num_nodes),
            rng.random::<f64>(),
        );
    }
    graph
}
