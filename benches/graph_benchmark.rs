use criterion::{black_box, criterion_group, criterion_main, Criterion};
use trellis::{LinkedQueue, UndirectedGraph};

/// A sparse graph made of `components` chains with a few chords each.
fn build(size: usize, components: usize) -> UndirectedGraph {
    let per = size / components;
    let mut graph = UndirectedGraph::new(size);
    for c in 0..components {
        let base = c * per;
        for i in 1..per {
            graph.add_edge(base + i - 1, base + i).unwrap();
            if i % 7 == 0 {
                graph.add_edge(base, base + i).unwrap();
            }
        }
    }
    graph
}

fn bench_graph_build(c: &mut Criterion) {
    c.bench_function("undirected_build_10k", |b| {
        b.iter(|| black_box(build(10_000, 4)));
    });
}

fn bench_graph_traversal(c: &mut Criterion) {
    let graph = build(10_000, 4);

    c.bench_function("undirected_dfs_10k", |b| {
        b.iter(|| black_box(graph.dfs()));
    });

    c.bench_function("undirected_bfs_array_queue_10k", |b| {
        b.iter(|| black_box(graph.bfs()));
    });

    c.bench_function("undirected_bfs_linked_queue_10k", |b| {
        b.iter(|| black_box(graph.bfs_with(LinkedQueue::with_capacity(graph.vertex_count()))));
    });

    c.bench_function("undirected_components_10k", |b| {
        b.iter(|| black_box(graph.connected_components()));
    });
}

fn bench_graph_path(c: &mut Criterion) {
    let graph = build(10_000, 4);

    c.bench_function("undirected_find_path_10k", |b| {
        b.iter(|| black_box(graph.find_path(0, 2_499).unwrap()));
    });

    c.bench_function("undirected_find_path_unreachable_10k", |b| {
        b.iter(|| black_box(graph.find_path(0, 9_999).unwrap()));
    });
}

criterion_group!(benches, bench_graph_build, bench_graph_traversal, bench_graph_path);
criterion_main!(benches);
