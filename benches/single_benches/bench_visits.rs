/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::params::*;
use criterion::{BenchmarkId, Criterion, Throughput};
use dsi_progress_logger::no_logging;
use graph_algo::algo::visits::Sequential;
use graph_algo::prelude::*;
use std::convert::Infallible;

pub fn bench_visits(c: &mut Criterion) {
    let mut group = c.benchmark_group("Visits");
    group.sampling_mode(criterion::SamplingMode::Flat);
    group.sample_size(NUM_SAMPLES);
    for (num_nodes, num_arcs) in BENCH_SIZES {
        let graph = random_graph(num_nodes, num_arcs, 0);
        let symm_graph = random_symm_graph(num_nodes, num_arcs / 2, 0);
        let parameter = format!("{} nodes, {} arcs", num_nodes, num_arcs);
        group.throughput(Throughput::Elements(num_nodes as u64));

        group.bench_with_input(
            BenchmarkId::new("Breadth first", &parameter),
            &graph,
            |b, g| {
                b.iter(|| {
                    breadth_first::Seq::new(g.adjacency())
                        .visit_all(|_| Ok::<(), Infallible>(()), no_logging![])
                })
            },
        );

        group.bench_with_input(
            BenchmarkId::new("Depth first", &parameter),
            &graph,
            |b, g| {
                b.iter(|| {
                    depth_first::SeqPath::new(g.adjacency())
                        .visit_all(|_| Ok::<(), Infallible>(()), no_logging![])
                })
            },
        );

        group.bench_with_input(
            BenchmarkId::new("Acyclicity", &parameter),
            &graph,
            |b, g| b.iter(|| acyclicity(g.adjacency(), no_logging![])),
        );

        group.bench_with_input(
            BenchmarkId::new("Symmetric acyclicity", &parameter),
            &symm_graph,
            |b, g| b.iter(|| symm_acyclicity(g.adjacency(), no_logging![])),
        );

        group.bench_with_input(
            BenchmarkId::new("Symmetric connectivity", &parameter),
            &symm_graph,
            |b, g| b.iter(|| symm_connectivity(g.adjacency(), no_logging![])),
        );

        group.bench_with_input(
            BenchmarkId::new("Distance", &parameter),
            &graph,
            |b, g| {
                b.iter(|| distance(g.adjacency(), &0, &(num_nodes - 1), no_logging![]))
            },
        );
    }
    group.finish();
}
