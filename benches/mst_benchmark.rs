use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use spanwood::{AnyGraph, GeneratorConfig, Graph, MinimumSpanningTree, Representation, Strategy};

const SIZES: [usize; 3] = [50, 100, 200];

fn random_graph(representation: Representation, vertices: usize, density: u8) -> AnyGraph {
    let mut graph = representation.empty();
    graph
        .generate(&GeneratorConfig {
            vertices,
            density,
            max_weight: 1_000,
            seed: Some(0x5eed),
        })
        .unwrap();
    graph
}

fn bench_strategies(c: &mut Criterion) {
    for density in [10u8, 60] {
        let mut group = c.benchmark_group(format!("Spanning Tree (density {density}%)"));
        for &vertices in &SIZES {
            for representation in Representation::ALL {
                let graph = random_graph(representation, vertices, density);
                for strategy in Strategy::ALL {
                    group.bench_with_input(
                        BenchmarkId::new(format!("{strategy}/{representation}"), vertices),
                        &graph,
                        |b, graph| b.iter(|| black_box(strategy.tree_edges(graph).unwrap())),
                    );
                }
            }
        }
        group.finish();
    }
}

fn bench_tree_materialization(c: &mut Criterion) {
    let mut group = c.benchmark_group("Spanning Tree Output");
    let graph = random_graph(Representation::Matrix, 200, 30);
    let strategy = Strategy::default();

    group.bench_function("tree_edges", |b| {
        b.iter(|| black_box(strategy.tree_edges(&graph).unwrap()));
    });
    group.bench_function("spanning_tree", |b| {
        b.iter(|| black_box(strategy.spanning_tree(&graph).unwrap()));
    });

    group.finish();
}

criterion_group!(benches, bench_strategies, bench_tree_materialization);
criterion_main!(benches);
