//! Criterion benchmarks for the annealing core.
//!
//! Measures single-step throughput of the Metropolis chain and full
//! annealing runs over random unit-disk graphs of increasing size.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use ud_mis_anneal::anneal::{AnnealConfig, AnnealRunner, MetropolisChain};
use ud_mis_anneal::energy::UdMisEnergy;
use ud_mis_anneal::graph::UnitDiskGraph;

/// Random points in a square sized so the expected degree stays bounded
/// as `n` grows, the regime unit-disk instances live in.
fn random_model(n: usize, seed: u64) -> UdMisEnergy {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let side = (n as f64).sqrt() * 1.2;
    let points: Vec<(f64, f64)> = (0..n)
        .map(|_| (rng.random_range(0.0..side), rng.random_range(0.0..side)))
        .collect();
    UdMisEnergy::new(UnitDiskGraph::from_points(&points), 1.35).unwrap()
}

fn bench_metropolis_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("metropolis_step");
    for &n in &[16usize, 64, 256] {
        let model = random_model(n, 1);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            let mut rng = ChaCha8Rng::seed_from_u64(2);
            let mut chain = MetropolisChain::new(&model, &mut rng);
            b.iter(|| black_box(chain.step(black_box(1.0), &mut rng)));
        });
    }
    group.finish();
}

fn bench_full_anneal(c: &mut Criterion) {
    let mut group = c.benchmark_group("anneal_run");
    group.sample_size(10);
    for &n in &[16usize, 64] {
        let model = random_model(n, 1);
        let config = AnnealConfig::default()
            .with_initial_temperature(100.0)
            .with_final_temperature(0.01)
            .with_steps(5000)
            .with_seed(3);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| AnnealRunner::run(black_box(&model), &config).unwrap());
        });
    }
    group.finish();
}

fn bench_total_energy(c: &mut Criterion) {
    use ud_mis_anneal::energy::EnergyModel;

    let mut group = c.benchmark_group("total_energy");
    for &n in &[64usize, 256] {
        let model = random_model(n, 1);
        let occupation = vec![true; n];
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| black_box(model.total_energy(black_box(&occupation))));
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_metropolis_step,
    bench_full_anneal,
    bench_total_energy
);
criterion_main!(benches);
