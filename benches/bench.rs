// Criterion benchmarks for Agri-Match

use agri_match::core::{calculate_distance, calculate_price, Matcher, PricingPolicy};
use agri_match::models::{JobType, Location, MatchingCriteria};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn bench_distance(c: &mut Criterion) {
    let ouaga = Location::new(12.3714, -1.5197);
    let bobo = Location::new(11.1771, -4.2979);

    c.bench_function("calculate_distance", |b| {
        b.iter(|| calculate_distance(black_box(&ouaga), black_box(&bobo)));
    });
}

fn bench_pricing(c: &mut Criterion) {
    c.bench_function("calculate_price", |b| {
        b.iter(|| {
            calculate_price(
                black_box(25_000.0),
                black_box(42.0),
                black_box(1.25),
                black_box(100.0),
            )
        });
    });
}

fn bench_matching(c: &mut Criterion) {
    let mut group = c.benchmark_group("matching");

    for results in [7usize, 50, 500].iter() {
        let matcher = Matcher::new(PricingPolicy::default(), *results, *results);
        let flat = MatchingCriteria::new(JobType::Worker, 50.0);
        let located = flat.clone().with_origin(Location::new(12.3714, -1.5197));

        group.bench_with_input(BenchmarkId::new("find_matches_flat", results), results, |b, _| {
            let mut rng = StdRng::seed_from_u64(1);
            b.iter(|| matcher.find_matches_with_rng(black_box(&flat), &mut rng));
        });

        group.bench_with_input(BenchmarkId::new("find_matches_origin", results), results, |b, _| {
            let mut rng = StdRng::seed_from_u64(1);
            b.iter(|| matcher.find_matches_with_rng(black_box(&located), &mut rng));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_distance, bench_pricing, bench_matching);

criterion_main!(benches);
