//! Filter Benchmarks
//!
//! Criterion benchmarks for the per-axis washout filters.

use criterion::{Criterion, criterion_group, criterion_main};
use washout_filters::prelude::*;

fn bench_bypass_filter(c: &mut Criterion) {
    c.bench_function("bypass_filter", |b| {
        b.iter(|| bypass_filter(std::hint::black_box(0.5)))
    });
}

fn bench_exponential_filter(c: &mut Criterion) {
    let mut state = ExponentialState::new();
    let mut phase = 0.0_f64;

    c.bench_function("exponential_filter", |b| {
        b.iter(|| {
            phase += 0.05;
            exponential_filter(
                std::hint::black_box(phase.sin()),
                std::hint::black_box(&mut state),
                std::hint::black_box(0.02),
            )
        })
    });
}

fn bench_classical_filter(c: &mut Criterion) {
    let mut state = ClassicalState::new();
    let mut phase = 0.0_f64;

    c.bench_function("classical_filter", |b| {
        b.iter(|| {
            phase += 0.05;
            classical_filter(
                std::hint::black_box(phase.sin()),
                std::hint::black_box(&mut state),
                std::hint::black_box(1.2),
                std::hint::black_box(0.05),
            )
        })
    });
}

fn bench_gain_clip_filter(c: &mut Criterion) {
    let clip = Some(ClipRange::symmetric(1.0));

    c.bench_function("gain_clip_filter", |b| {
        b.iter(|| {
            gain_clip_filter(
                std::hint::black_box(0.75),
                std::hint::black_box(1.5),
                std::hint::black_box(clip),
            )
        })
    });
}

fn bench_six_axis_classical(c: &mut Criterion) {
    let mut states = AxisStates::default();
    let raw = AxisVector::new([0.1, -0.2, 0.3, -0.4, 0.5, -0.6]);
    let clip = Some(ClipRange::symmetric(1.0));

    c.bench_function("six_axis_classical", |b| {
        b.iter(|| {
            let mut out = AxisVector::splat(0.0);
            for axis in AxisId::ALL {
                let hp = classical_filter(raw[axis], &mut states[axis].classical, 1.2, 0.05);
                out[axis] = gain_clip_filter(hp, 1.0, clip);
            }
            std::hint::black_box(out)
        })
    });
}

criterion_group!(
    benches,
    bench_bypass_filter,
    bench_exponential_filter,
    bench_classical_filter,
    bench_gain_clip_filter,
    bench_six_axis_classical,
);

criterion_main!(benches);
