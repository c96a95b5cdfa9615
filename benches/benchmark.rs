// Benchmarks for the metric engine and the view-model calculate path
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::prelude::*;
use vecdist::{distance, DistanceViewModel, Metric, Point2};

fn generate_random_point(rng: &mut impl Rng) -> Point2 {
    Point2::new(rng.random_range(-1000.0..1000.0), rng.random_range(-1000.0..1000.0))
}

fn benchmark_metrics(c: &mut Criterion) {
    let mut group = c.benchmark_group("distance");
    let mut rng = rand::rng();
    let pairs: Vec<(Point2, Point2)> = (0..1000)
        .map(|_| (generate_random_point(&mut rng), generate_random_point(&mut rng)))
        .collect();

    group.bench_function("chebyshev", |b| {
        b.iter(|| {
            for (p, q) in &pairs {
                black_box(distance(Metric::Chebyshev, p, q, 1).unwrap());
            }
        });
    });

    for order in [1i64, 2, 3, 16] {
        group.bench_with_input(BenchmarkId::new("minkowski", order), &order, |b, &order| {
            b.iter(|| {
                for (p, q) in &pairs {
                    black_box(distance(Metric::Minkowski, p, q, order).unwrap());
                }
            });
        });
    }

    group.finish();
}

fn benchmark_view_model(c: &mut Criterion) {
    let mut group = c.benchmark_group("view_model");

    group.bench_function("edit_and_calculate", |b| {
        let mut rng = rand::rng();
        let mut vm = DistanceViewModel::in_memory();
        vm.set_metric(Metric::Minkowski);
        b.iter(|| {
            let p = generate_random_point(&mut rng);
            vm.set_vec1_x(p.x.to_string());
            vm.set_vec1_y(p.y.to_string());
            vm.set_vec2_x("0");
            vm.set_vec2_y("0");
            vm.set_dim("3");
            vm.on_focus_changed(true, false);
            vm.calculate();
            black_box(vm.result().len());
        });
    });

    group.finish();
}

criterion_group!(benches, benchmark_metrics, benchmark_view_model);
criterion_main!(benches);
