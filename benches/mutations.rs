use criterion::{black_box, criterion_group, criterion_main, Criterion};
use matrix_graph::Graph;

fn grown(n: usize) -> Graph<usize> {
    let mut g = Graph::new();
    assert_eq!(g.add_nodes(0..n), n);
    g
}

fn add_node(c: &mut Criterion) {
    let base = grown(64);
    c.bench_function("add_node/64", |b| {
        b.iter(|| {
            let mut g = base.clone();
            black_box(g.add_node(black_box(64)))
        })
    });
}

fn remove_node(c: &mut Criterion) {
    let base = grown(64);
    c.bench_function("remove_node/64", |b| {
        b.iter(|| {
            let mut g = base.clone();
            black_box(g.remove_node(black_box(&32)))
        })
    });
}

fn connected(c: &mut Criterion) {
    let mut g = grown(64);
    g.add_arc(&3, &60).unwrap();
    c.bench_function("connected/64", |b| {
        b.iter(|| black_box(g.connected(black_box(&60), black_box(&3)).unwrap()))
    });
}

criterion_group!(benches, add_node, remove_node, connected);
criterion_main!(benches);
