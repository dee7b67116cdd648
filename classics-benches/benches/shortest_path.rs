//! Dijkstra benchmarks over random sparse digraphs.
#![expect(
    missing_docs,
    reason = "Criterion macros generate items without doc comments"
)]
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

use classics_benches::{
    error::BenchSetupError,
    params::GraphBenchParams,
    source::{SyntheticGraphConfig, random_digraph},
};
use classics_core::dijkstra;

const SEED: u64 = 42;

const SIZES: &[(usize, usize)] = &[(1_000, 4), (10_000, 4), (10_000, 16)];

fn dijkstra_sparse_impl(c: &mut Criterion) -> Result<(), BenchSetupError> {
    let mut group = c.benchmark_group("dijkstra");

    for &(node_count, degree) in SIZES {
        let graph = random_digraph(&SyntheticGraphConfig {
            node_count,
            degree,
            seed: SEED,
        })?;
        let params = GraphBenchParams { node_count, degree };

        group.bench_with_input(BenchmarkId::from_parameter(params), &graph, |b, graph| {
            b.iter(|| dijkstra(graph, 0));
        });
    }

    group.finish();
    Ok(())
}

fn dijkstra_sparse(c: &mut Criterion) {
    if let Err(err) = dijkstra_sparse_impl(c) {
        panic!("dijkstra benchmark setup failed: {err}");
    }
}

criterion_group!(benches, dijkstra_sparse);
criterion_main!(benches);
