use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use wordhood::prelude::*;

fn bench_generate(c: &mut Criterion) {
    let alphabet = Alphabet::default();
    let mut group = c.benchmark_group("generate");

    for word in ["cat", "search", "levenshtein"] {
        group.bench_with_input(BenchmarkId::new("distance_1", word), word, |b, word| {
            b.iter(|| generate(black_box(word), Distance::new(1).unwrap(), &alphabet))
        });
    }

    group.sample_size(10);
    group.bench_function("distance_2/cat", |b| {
        b.iter(|| generate(black_box("cat"), Distance::new(2).unwrap(), &alphabet))
    });

    group.finish();
}

fn bench_parallel(c: &mut Criterion) {
    let distance = Distance::new(2).unwrap();
    let sequential = NeighborhoodGenerator::new(NeighborhoodConfig::new(distance)).unwrap();
    let parallel =
        NeighborhoodGenerator::new(NeighborhoodConfig::new(distance).with_parallel(true)).unwrap();

    let mut group = c.benchmark_group("distance_2_search");
    group.sample_size(10);
    group.bench_function("sequential", |b| {
        b.iter(|| sequential.generate(black_box("search")))
    });
    group.bench_function("parallel", |b| {
        b.iter(|| parallel.generate(black_box("search")))
    });
    group.finish();
}

criterion_group!(benches, bench_generate, bench_parallel);
criterion_main!(benches);
