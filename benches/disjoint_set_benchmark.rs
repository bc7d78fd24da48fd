use criterion::{black_box, criterion_group, criterion_main, Criterion};
use spanwood::DisjointSet;

// Component labels relabeled on every merge: the quick-find scheme
// `DisjointSet` replaces in Kruskal.
struct ColorLabels {
    color: Vec<usize>,
}

impl ColorLabels {
    fn new(len: usize) -> Self {
        Self {
            color: (0..len).collect(),
        }
    }

    fn find(&self, id: usize) -> usize {
        self.color[id]
    }

    fn union(&mut self, id1: usize, id2: usize) -> bool {
        let keep = self.color[id1];
        let replace = self.color[id2];
        if keep == replace {
            return false;
        }
        for c in &mut self.color {
            if *c == replace {
                *c = keep;
            }
        }
        true
    }
}

fn bench_disjoint_set(c: &mut Criterion) {
    let mut group = c.benchmark_group("Disjoint Set");

    const N: usize = 2_000;
    const OPS: usize = 10_000;

    group.bench_function("DisjointSet", |b| {
        b.iter(|| {
            let mut ds = DisjointSet::new(N);
            for i in 0..OPS {
                let a = (i * 3) % N;
                let b = (i * 7) % N;
                black_box(ds.union(a, b));
                black_box(ds.find(a));
            }
        });
    });

    group.bench_function("DisjointSet::make_set", |b| {
        b.iter(|| {
            let mut ds = DisjointSet::default();
            for _ in 0..N {
                black_box(ds.make_set());
            }
        });
    });

    group.bench_function("Color relabeling", |b| {
        b.iter(|| {
            let mut ds = ColorLabels::new(N);
            for i in 0..OPS {
                let a = (i * 3) % N;
                let b = (i * 7) % N;
                black_box(ds.union(a, b));
                black_box(ds.find(a));
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_disjoint_set);
criterion_main!(benches);
