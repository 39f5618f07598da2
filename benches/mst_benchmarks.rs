/// Performance benchmarks for connectivity and spanning forest construction
///
/// Run with: cargo bench
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use shipgraph::{EdgeRecord, Graph};

/// Generate a random graph with a guaranteed spanning path plus extra random edges
fn generate_random_graph(num_nodes: usize, extra_edges: usize) -> Graph {
    let mut rng = StdRng::seed_from_u64(42);
    let mut records = Vec::with_capacity(num_nodes + extra_edges);

    for i in 1..num_nodes {
        records.push(EdgeRecord::new(
            format!("port{}", i - 1),
            format!("port{i}"),
            rng.gen_range(1..1000),
        ));
    }
    for _ in 0..extra_edges {
        let a = rng.gen_range(0..num_nodes);
        let b = rng.gen_range(0..num_nodes);
        records.push(EdgeRecord::new(
            format!("port{a}"),
            format!("port{b}"),
            rng.gen_range(1..1000),
        ));
    }

    records.into_iter().collect()
}

fn bench_construct_mst(c: &mut Criterion) {
    let mut group = c.benchmark_group("construct_mst");

    for size in [100, 1000, 10000].iter() {
        let graph = generate_random_graph(*size, size * 4);
        group.throughput(Throughput::Elements(graph.edge_count() as u64));
        group.sample_size(10);

        group.bench_with_input(BenchmarkId::from_parameter(size), &graph, |b, graph| {
            b.iter(|| black_box(graph.construct_mst()));
        });
    }

    group.finish();
}

fn bench_is_connected(c: &mut Criterion) {
    let mut group = c.benchmark_group("is_connected");

    for size in [100, 1000, 10000].iter() {
        let graph = generate_random_graph(*size, size * 4);
        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::from_parameter(size), &graph, |b, graph| {
            b.iter(|| black_box(graph.is_connected()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_construct_mst, bench_is_connected);

criterion_main!(benches);
