//! Kruskal benchmarks over connected random edge lists.
#![expect(
    missing_docs,
    reason = "Criterion macros generate items without doc comments"
)]
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

use classics_benches::{
    error::BenchSetupError,
    params::GraphBenchParams,
    source::{SyntheticGraphConfig, random_edges},
};
use classics_core::kruskal;

const SEED: u64 = 42;

const SIZES: &[(usize, usize)] = &[(1_000, 4), (10_000, 4), (10_000, 16)];

fn kruskal_connected_impl(c: &mut Criterion) -> Result<(), BenchSetupError> {
    let mut group = c.benchmark_group("kruskal");
    group.sample_size(30);

    for &(node_count, degree) in SIZES {
        let edges = random_edges(&SyntheticGraphConfig {
            node_count,
            degree,
            seed: SEED,
        })?;
        let params = GraphBenchParams { node_count, degree };

        group.bench_with_input(
            BenchmarkId::from_parameter(params),
            &(node_count, edges),
            |b, (node_count, edges)| {
                b.iter(|| kruskal(*node_count, edges));
            },
        );
    }

    group.finish();
    Ok(())
}

fn kruskal_connected(c: &mut Criterion) {
    if let Err(err) = kruskal_connected_impl(c) {
        panic!("kruskal benchmark setup failed: {err}");
    }
}

criterion_group!(benches, kruskal_connected);
criterion_main!(benches);
