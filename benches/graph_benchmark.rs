use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use spanwood::graph::generator::generate_edges;
use spanwood::{
    AnyGraph, Edge, GeneratorConfig, Graph, GraphTranslator, ListGraph, MatrixGraph, Representation,
};

fn edges(vertices: usize, density: u8) -> Vec<Edge> {
    let config = GeneratorConfig {
        vertices,
        density,
        max_weight: 100,
        seed: None,
    };
    let mut rng = StdRng::seed_from_u64(42);
    generate_edges(&config, &mut rng).unwrap()
}

fn bench_load(c: &mut Criterion) {
    let mut group = c.benchmark_group("Graph Load");
    for vertices in [100, 400] {
        let edges = edges(vertices, 20);
        for representation in Representation::ALL {
            group.bench_with_input(
                BenchmarkId::new(representation.as_str(), vertices),
                &edges,
                |b, edges| b.iter(|| black_box(AnyGraph::from_edges(representation, edges).unwrap())),
            );
        }
    }
    group.finish();
}

fn bench_queries(c: &mut Criterion) {
    let edges = edges(400, 20);
    let matrix = MatrixGraph::from_edges(&edges).unwrap();
    let list = ListGraph::from_edges(&edges).unwrap();

    let mut group = c.benchmark_group("Graph Queries");

    // 1. Tier lookup, the Kruskal hot path
    group.bench_function("matrix::minimal_edges", |b| {
        b.iter(|| black_box(matrix.minimal_edges(black_box(50))));
    });
    group.bench_function("list::minimal_edges", |b| {
        b.iter(|| black_box(list.minimal_edges(black_box(50))));
    });

    // 2. Neighborhood lookup, the Prim hot path
    group.bench_function("matrix::incident_edges", |b| {
        b.iter(|| black_box(matrix.incident_edges(black_box(200))));
    });
    group.bench_function("list::incident_edges", |b| {
        b.iter(|| black_box(list.incident_edges(black_box(200))));
    });

    // 3. Whole edge set
    group.bench_function("matrix::edges", |b| b.iter(|| black_box(matrix.edges())));
    group.bench_function("list::edges", |b| b.iter(|| black_box(list.edges())));

    group.finish();
}

fn bench_translation(c: &mut Criterion) {
    let edges = edges(300, 30);
    let matrix = MatrixGraph::from_edges(&edges).unwrap();
    let list = ListGraph::from_edges(&edges).unwrap();

    let mut group = c.benchmark_group("Graph Translation");
    group.bench_function("matrix_to_list", |b| {
        b.iter(|| black_box(GraphTranslator::matrix_to_list(&matrix).unwrap()));
    });
    group.bench_function("list_to_matrix", |b| {
        b.iter(|| black_box(GraphTranslator::list_to_matrix(&list).unwrap()));
    });
    group.finish();
}

criterion_group!(benches, bench_load, bench_queries, bench_translation);
criterion_main!(benches);
