//! Step benchmark: Measure mover physics and lockstep simulation.
//!
//! Target: < 10ns per rectangle step

use bouncebox::surface::RecordingCanvas;
use bouncebox::{BounceRule, Config, RectangleState, Simulation, Size};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn rectangle_step(c: &mut Criterion) {
    let surface = Size::new(2048, 1400);
    let mut rng = StdRng::seed_from_u64(1);

    for bounce in [BounceRule::Symmetric, BounceRule::Classic] {
        let mut state = RectangleState::random(&mut rng, surface, bounce);
        c.bench_with_input(
            BenchmarkId::new("rectangle_step", format!("{bounce:?}")),
            &surface,
            |b, &surface| b.iter(|| black_box(&mut state).step(black_box(surface))),
        );
    }
}

fn simulation_round(c: &mut Criterion) {
    let mut group = c.benchmark_group("simulation_round");
    for count in [10usize, 100, 1000] {
        let config = Config {
            rectangle_count: count,
            seed: Some(42),
            ..Config::default()
        };
        group.bench_with_input(BenchmarkId::from_parameter(count), &config, |b, config| {
            b.iter_batched(
                || Simulation::new(config, RecordingCanvas::new()).unwrap(),
                |mut sim| {
                    sim.step().unwrap();
                    sim
                },
                criterion::BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, rectangle_step, simulation_round);
criterion_main!(benches);
