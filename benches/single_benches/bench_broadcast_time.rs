/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::params::*;
use criterion::{BenchmarkId, Criterion, Throughput};
use dsi_progress_logger::no_logging;
use graph_algo::prelude::*;

pub fn bench_broadcast_time(c: &mut Criterion) {
    let mut group = c.benchmark_group("Broadcast time");
    group.sampling_mode(criterion::SamplingMode::Flat);
    group.sample_size(NUM_SAMPLES);
    for (num_nodes, num_arcs) in BENCH_SIZES {
        let graph = random_graph(num_nodes, num_arcs, 0);
        let symm_graph = random_symm_graph(num_nodes, num_arcs / 2, 0);
        let parameter = format!("{} nodes, {} arcs", num_nodes, num_arcs);
        group.throughput(Throughput::Elements(num_nodes as u64));

        group.bench_with_input(
            BenchmarkId::new("Directed", &parameter),
            &graph,
            |b, g| b.iter(|| broadcast_time(g, &0, no_logging![]).unwrap()),
        );

        group.bench_with_input(
            BenchmarkId::new("Undirected", &parameter),
            &symm_graph,
            |b, g| b.iter(|| broadcast_time(g, &0, no_logging![]).unwrap()),
        );
    }
    group.finish();
}
