//! Criterion benchmarks for u-kpfs.
//!
//! Uses seeded synthetic instances so that every run measures the same
//! search trajectory; each driver is capped by iteration count rather than
//! by wall-clock time.

use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use u_kpfs::construction::Construction;
use u_kpfs::grasp::{GraspConfig, GraspRunner};
use u_kpfs::ils::{IlsConfig, IlsRunner};
use u_kpfs::local_search::LocalSearch;
use u_kpfs::sa::{SaConfig, SaRunner};
use u_kpfs::tabu::{TabuConfig, TabuRunner};
use u_kpfs::{DeltaEvaluator, ForfeitSet, Instance};

/// `n` items, `n / 5` forfeit sets of about 10 members each, capacity at
/// a third of the total weight.
fn synthetic(n: usize) -> Instance {
    let mut rng = StdRng::seed_from_u64(7);
    let profits: Vec<i64> = (0..n).map(|_| rng.random_range(10..100)).collect();
    let weights: Vec<i64> = (0..n).map(|_| rng.random_range(5..50)).collect();
    let capacity = weights.iter().sum::<i64>() / 3;

    let sets = (0..n / 5)
        .map(|_| {
            let mut members: Vec<usize> = (0..10).map(|_| rng.random_range(0..n)).collect();
            members.sort_unstable();
            members.dedup();
            ForfeitSet::new(rng.random_range(1..4), rng.random_range(5..40), members)
        })
        .collect();

    Instance::new(profits, weights, capacity, sets)
        .expect("synthetic instance is valid")
}

// Generous wall clock; the iteration cap ends every run.
const WALL: Duration = Duration::from_secs(60);

fn bench_delta(c: &mut Criterion) {
    let mut group = c.benchmark_group("delta_full_sweep");

    for &n in &[100, 500, 1000] {
        let instance = synthetic(n);
        let state = Construction::new(&instance).greedy();
        group.bench_with_input(BenchmarkId::from_parameter(n), &instance, |b, inst| {
            let eval = DeltaEvaluator::new(inst);
            b.iter(|| {
                let feasible = (0..inst.item_count())
                    .filter_map(|i| eval.evaluate_flip(black_box(&state), i))
                    .count();
                black_box(feasible)
            })
        });
    }
    group.finish();
}

fn bench_local_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("local_search_from_empty");
    group.sample_size(20);

    for &n in &[100, 500] {
        let instance = synthetic(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &instance, |b, inst| {
            let ls = LocalSearch::new(inst);
            b.iter(|| {
                let mut state = u_kpfs::SolutionState::empty(inst);
                let moves = ls.improve(&mut state);
                black_box((moves, state.objective()))
            })
        });
    }
    group.finish();
}

fn bench_drivers(c: &mut Criterion) {
    let mut group = c.benchmark_group("drivers_n200");
    group.sample_size(10);

    let instance = synthetic(200);

    let grasp = GraspConfig::default()
        .with_time_limit(WALL)
        .with_max_iterations(20)
        .with_seed(42);
    group.bench_function("grasp", |b| {
        b.iter(|| black_box(GraspRunner::run(black_box(&instance), &grasp)))
    });

    let ils = IlsConfig::default()
        .with_time_limit(WALL)
        .with_max_iterations(50)
        .with_seed(42);
    group.bench_function("ils", |b| {
        b.iter(|| black_box(IlsRunner::run(black_box(&instance), &ils)))
    });

    let sa = SaConfig::default()
        .with_time_limit(WALL)
        .with_max_iterations(20_000)
        .with_seed(42);
    group.bench_function("sa", |b| {
        b.iter(|| black_box(SaRunner::run(black_box(&instance), &sa)))
    });

    let tabu = TabuConfig::default()
        .with_time_limit(WALL)
        .with_max_iterations(200)
        .with_seed(42);
    group.bench_function("tabu", |b| {
        b.iter(|| black_box(TabuRunner::run(black_box(&instance), &tabu)))
    });

    group.finish();
}

criterion_group!(benches, bench_delta, bench_local_search, bench_drivers);
criterion_main!(benches);
