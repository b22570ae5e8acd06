//! Benchmark environment generation and collect search.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;
use vastu_khoj::{CollectSearch, Environment, EnvironmentConfig, EnvironmentGenerator};

/// Generate a reproducible environment for benchmarking.
fn seeded_environment(size: usize, collectibles: usize, obstacles: usize) -> Environment {
    let config = EnvironmentConfig::new(size, collectibles, obstacles).with_seed(42);
    EnvironmentGenerator::new(config)
        .and_then(|g| g.generate())
        .expect("benchmark environment")
}

fn bench_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("generation");

    for size in [5, 10, 20].iter() {
        let config = EnvironmentConfig::new(*size, 3, size * size / 5);
        let generator = EnvironmentGenerator::new(config).expect("valid config");

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            let mut rng = StdRng::seed_from_u64(7);
            b.iter(|| black_box(generator.generate_with_rng(&mut rng)))
        });
    }

    group.finish();
}

fn bench_search_by_collectibles(c: &mut Criterion) {
    let mut group = c.benchmark_group("search_collectibles");

    for count in [0, 2, 4, 6].iter() {
        let env = seeded_environment(10, *count, 15);
        let search = CollectSearch::for_environment(&env);

        group.bench_with_input(BenchmarkId::from_parameter(count), count, |b, _| {
            b.iter(|| black_box(search.find_path()))
        });
    }

    group.finish();
}

fn bench_search_by_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("search_size");

    for size in [5, 10, 20].iter() {
        let env = seeded_environment(*size, 3, size * size / 6);
        let search = CollectSearch::for_environment(&env);

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| black_box(search.find_path()))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_generation,
    bench_search_by_collectibles,
    bench_search_by_size
);
criterion_main!(benches);
