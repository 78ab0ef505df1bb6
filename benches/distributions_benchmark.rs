use criterion::{criterion_group, criterion_main, Criterion};
use ndarray::Array1;
use std::hint::black_box;
use u_probability::{Distribution, Normal, Uniform};

fn bench_elementwise(c: &mut Criterion) {
    let xs = Array1::linspace(-5.0, 5.0, 10_000);
    let ps = Array1::linspace(0.0001, 0.9999, 10_000);
    let normal = Normal::new(0.0, 1.3).unwrap();
    let uniform = Uniform::new(-2.0, 2.0).unwrap();

    c.bench_function("normal_probability_10k", |b| {
        b.iter(|| black_box(normal.probability(black_box(&xs))))
    });

    c.bench_function("normal_cumulative_10k", |b| {
        b.iter(|| black_box(normal.cumulative(black_box(&xs))))
    });

    c.bench_function("normal_percentile_10k", |b| {
        b.iter(|| black_box(normal.percentile(black_box(&ps))))
    });

    c.bench_function("uniform_cumulative_10k", |b| {
        b.iter(|| black_box(uniform.cumulative(black_box(&xs))))
    });
}

fn bench_sampling(c: &mut Criterion) {
    let normal = Normal::new(0.0, 1.0).unwrap().with_seed(42);
    let uniform = Uniform::new(0.0, 1.0).unwrap().with_seed(42);
    let xs = Array1::<f64>::ones(10_000);

    c.bench_function("normal_sample_10k", |b| {
        b.iter(|| black_box(normal.sample(&[10_000])))
    });

    c.bench_function("uniform_sample_10k", |b| {
        b.iter(|| black_box(uniform.sample(&[10_000])))
    });

    c.bench_function("normal_add_array_10k", |b| {
        b.iter(|| black_box(&normal + black_box(&xs)))
    });
}

criterion_group!(benches, bench_elementwise, bench_sampling);
criterion_main!(benches);
