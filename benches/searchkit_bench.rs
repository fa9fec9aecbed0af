//! Criterion benchmarks for searchkit algorithms.
//!
//! Uses synthetic inputs (random keys, random connected graphs, open
//! grids) to measure pure algorithm overhead independent of any domain.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use searchkit::graph::WeightedGraph;
use searchkit::heap::MinHeap;
use searchkit::search::{self, manhattan_distance, HeuristicProblem, SearchProblem};

fn random_connected_graph(vertices: usize, extra_edges: usize, rng: &mut StdRng) -> WeightedGraph<usize> {
    let mut graph = WeightedGraph::with_vertices((0..vertices).collect());

    // Random spanning tree first so every vertex is reachable.
    for v in 1..vertices {
        let u = rng.random_range(0..v);
        graph.add_edge(u, v, rng.random_range(1.0..100.0)).unwrap();
    }
    for _ in 0..extra_edges {
        let u = rng.random_range(0..vertices);
        let v = rng.random_range(0..vertices);
        if u != v {
            graph.add_edge(u, v, rng.random_range(1.0..100.0)).unwrap();
        }
    }
    graph
}

fn bench_heap_churn(c: &mut Criterion) {
    let mut group = c.benchmark_group("heap_insert_pop");
    for size in [1_000usize, 10_000] {
        let mut rng = StdRng::seed_from_u64(42);
        let keys: Vec<i64> = (0..size).map(|_| rng.random_range(0..1_000_000)).collect();

        group.bench_with_input(BenchmarkId::from_parameter(size), &keys, |b, keys| {
            b.iter(|| {
                let mut heap = MinHeap::with_capacity(keys.len());
                for (i, &key) in keys.iter().enumerate() {
                    heap.insert(key, i);
                }
                while let Ok(element) = heap.pop() {
                    black_box(element);
                }
            });
        });
    }
    group.finish();
}

fn bench_dijkstra(c: &mut Criterion) {
    let mut group = c.benchmark_group("dijkstra");
    for vertices in [100usize, 1_000] {
        let mut rng = StdRng::seed_from_u64(42);
        let graph = random_connected_graph(vertices, vertices * 4, &mut rng);

        group.bench_with_input(BenchmarkId::from_parameter(vertices), &graph, |b, graph| {
            b.iter(|| black_box(graph.dijkstra(0).unwrap()));
        });
    }
    group.finish();
}

fn bench_mst(c: &mut Criterion) {
    let mut group = c.benchmark_group("mst");
    for vertices in [100usize, 1_000] {
        let mut rng = StdRng::seed_from_u64(7);
        let graph = random_connected_graph(vertices, vertices * 4, &mut rng);

        group.bench_with_input(BenchmarkId::from_parameter(vertices), &graph, |b, graph| {
            b.iter(|| black_box(graph.mst(0).unwrap()));
        });
    }
    group.finish();
}

// ===========================================================================
// Open grid: no obstacles, goal in the far corner
// ===========================================================================

struct OpenGrid {
    side: i64,
}

impl SearchProblem for OpenGrid {
    type State = (i64, i64);

    fn successors(&self, &(row, col): &(i64, i64)) -> Vec<(i64, i64)> {
        [(row + 1, col), (row - 1, col), (row, col + 1), (row, col - 1)]
            .into_iter()
            .filter(|&(r, c)| r >= 0 && r < self.side && c >= 0 && c < self.side)
            .collect()
    }

    fn is_goal(&self, &state: &(i64, i64)) -> bool {
        state == (self.side - 1, self.side - 1)
    }
}

impl HeuristicProblem for OpenGrid {
    fn estimate(&self, &state: &(i64, i64)) -> f64 {
        manhattan_distance(state, (self.side - 1, self.side - 1))
    }
}

fn bench_grid_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid_search");
    let grid = OpenGrid { side: 50 };

    group.bench_function("bfs", |b| {
        b.iter(|| black_box(search::bfs(&grid, (0, 0)).unwrap()));
    });
    group.bench_function("astar", |b| {
        b.iter(|| black_box(search::astar(&grid, (0, 0)).unwrap()));
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_heap_churn,
    bench_dijkstra,
    bench_mst,
    bench_grid_search
);
criterion_main!(benches);
