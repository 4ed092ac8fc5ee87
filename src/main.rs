/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use anyhow::{anyhow, bail, Context, Result};
use dsi_progress_logger::prelude::*;
use graph_algo::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Runs an algorithm on a random graph.
///
/// Usage: `graph-algo OPERATION NUM_NODES NUM_ARCS [SEED]`, where `OPERATION`
/// is one of `cycle`, `symm-cycle`, `connected`, `symm-connected`,
/// `distance` and `broadcast`. Operations starting with `symm-` use an
/// undirected graph. Arc weights are uniform in [0..1).
fn main() -> Result<()> {
    stderrlog::new()
        .verbosity(2)
        .timestamp(stderrlog::Timestamp::Second)
        .init()?;

    let mut args = std::env::args().skip(1);
    let operation = args.next().ok_or_else(|| anyhow!("No operation provided"))?;
    let num_nodes: usize = args
        .next()
        .ok_or_else(|| anyhow!("No number of nodes provided"))?
        .parse()
        .context("Expected integer number of nodes")?;
    let num_arcs: usize = args
        .next()
        .ok_or_else(|| anyhow!("No number of arcs provided"))?
        .parse()
        .context("Expected integer number of arcs")?;
    let seed: u64 = match args.next() {
        Some(seed) => seed.parse().context("Expected integer seed")?,
        None => 0,
    };
    if num_nodes == 0 {
        bail!("The graph must have at least one node");
    }

    let mut main_pl = progress_logger![display_memory = true];
    main_pl.info(format_args!(
        "Generating a graph with {} nodes and {} arcs (seed {})...",
        num_nodes, num_arcs, seed
    ));

    let mut rng = StdRng::seed_from_u64(seed);
    let arcs = (0..num_arcs)
        .map(|_| {
            (
                rng.random_range(0..num_nodes),
                rng.random_range(0..num_nodes),
                rng.random::<f64>(),
            )
        })
        .collect::<Vec<_>>();

    let mut directed = DirectedGraph::with_nodes(0..num_nodes)?;
    let mut undirected = UndirectedGraph::with_nodes(0..num_nodes)?;
    if operation.starts_with("symm-") {
        for (from, to, weight) in arcs {
            undirected.add_weighted_edge(from, to, weight);
        }
    } else {
        for (from, to, weight) in arcs {
            directed.add_weighted_edge(from, to, weight);
        }
    }

    match operation.as_str() {
        "cycle" => {
            let acyclic = acyclicity(directed.adjacency(), &mut main_pl);
            main_pl.info(format_args!("Acyclic: {}", acyclic));
        }
        "symm-cycle" => {
            let acyclic = symm_acyclicity(undirected.adjacency(), &mut main_pl);
            main_pl.info(format_args!("Acyclic: {}", acyclic));
        }
        "connected" => {
            let connected = strong_connectivity(directed.adjacency(), &mut main_pl);
            main_pl.info(format_args!("Strongly connected: {}", connected));
        }
        "symm-connected" => {
            let connected = symm_connectivity(undirected.adjacency(), &mut main_pl);
            main_pl.info(format_args!("Connected: {}", connected));
        }
        "distance" => {
            let dist = distance(directed.adjacency(), &0, &(num_nodes - 1), &mut main_pl);
            main_pl.info(format_args!(
                "Distance from 0 to {}: {:?}",
                num_nodes - 1,
                dist
            ));
        }
        "broadcast" => {
            let time = broadcast_time(&directed, &0, &mut main_pl)?;
            main_pl.info(format_args!("Broadcast time from 0: {:?}", time));
        }
        _ => bail!("Unknown operation {}", operation),
    }

    Ok(())
}
