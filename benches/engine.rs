//! Engine step benchmarks
//!
//! The force pass is O(N²), so the step time should grow quadratically with
//! the ring size.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use orrery::config::SimulationConfig;
use orrery::physics::math::Vector;
use orrery::resources::RenderingRng;
use orrery::utils::color::random_body_color;
use orrery::{BodyStore, ForceLaw, PhysicsEngine, circular_layout};
use std::hint::black_box;

fn ring(count: usize) -> BodyStore {
    let config = SimulationConfig::default();
    let mut rng = RenderingRng::from_seed(42);
    circular_layout(count, config.window.center(), config.physics.body_mass, || {
        random_body_color(&mut rng)
    })
    .expect("benchmark layout should be valid")
}

// =============================================================================
// Step Benchmarks
// =============================================================================

fn bench_step_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("step_scaling");

    for &count in &[3, 12, 50, 200, 1_000] {
        let initial = ring(count);

        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("bodies", count), &count, |b, _| {
            let mut engine = PhysicsEngine::default();
            let mut store = initial.clone();
            b.iter(|| {
                engine
                    .step(black_box(&mut store), black_box(1.0 / 60.0))
                    .expect("fixed dt is valid");
            });
        });
    }

    group.finish();
}

fn bench_force_pass(c: &mut Criterion) {
    let mut group = c.benchmark_group("force_pass");
    let law = ForceLaw::default();

    for &count in &[12, 200] {
        let store = ring(count);
        let mut out: Vec<Vector> = Vec::with_capacity(count);

        group.bench_with_input(BenchmarkId::new("bodies", count), &count, |b, _| {
            b.iter(|| law.accelerations_into(black_box(store.as_slice()), &mut out));
        });
    }

    group.finish();
}

// =============================================================================
// Real-world Frame Budget
// =============================================================================

fn bench_sixty_frames(c: &mut Criterion) {
    c.bench_function("sixty_frames_12_bodies", |b| {
        b.iter(|| {
            let mut store = ring(12);
            let mut engine = PhysicsEngine::default();
            for _ in 0..60 {
                engine
                    .step(&mut store, 1.0 / 60.0)
                    .expect("fixed dt is valid");
            }
            black_box(store)
        });
    });
}

criterion_group!(step, bench_step_scaling, bench_force_pass);
criterion_group!(realworld, bench_sixty_frames);

criterion_main!(step, realworld);
