use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use greedy_misp::{solve, Graph, HeuristicConfig};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn random_graph(n: usize, p: f64) -> Graph {
    let mut rng = ChaCha8Rng::seed_from_u64(n as u64);
    Graph::erdos_renyi(n, p, &mut rng)
}

fn bench_deterministic(c: &mut Criterion) {
    let mut group = c.benchmark_group("deterministic");
    for &n in &[50, 100, 200] {
        for &p in &[0.1, 0.5, 0.9] {
            let graph = random_graph(n, p);
            let id = BenchmarkId::new(format!("n{n}"), format!("p{p}"));
            group.bench_with_input(id, &graph, |b, g| {
                b.iter(|| solve(black_box(g), &HeuristicConfig::default()).unwrap())
            });
        }
    }
    group.finish();
}

fn bench_randomized(c: &mut Criterion) {
    let mut group = c.benchmark_group("randomized_top_k");
    let graph = random_graph(100, 0.5);
    for &k in &[1, 5, 20] {
        let config = HeuristicConfig::top_k(k).unwrap().with_seed(1);
        group.bench_with_input(BenchmarkId::from_parameter(k), &graph, |b, g| {
            b.iter(|| solve(black_box(g), &config).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_deterministic, bench_randomized);
criterion_main!(benches);
