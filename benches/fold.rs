use criterion::{black_box, criterion_group, criterion_main, Criterion};

use seqfold::{fold, ArraySource, OrderedSequence, RangeSource};

fn bench_inject(c: &mut Criterion) {
    let array = ArraySource::new((1..=10_000i64).collect());
    let range = RangeSource::new(1, 10_000);

    let mut group = c.benchmark_group("inject_sum_10k");
    group.bench_function("raw_fold", |b| {
        b.iter(|| fold(black_box(1..=10_000i64), 0, |sum, item| sum + item))
    });
    group.bench_function("array_source", |b| {
        b.iter(|| black_box(&array).inject(0, |sum, item| sum + item))
    });
    group.bench_function("range_source", |b| {
        b.iter(|| black_box(&range).inject(0, |sum, item| sum + item))
    });
    group.finish();
}

criterion_group!(benches, bench_inject);
criterion_main!(benches);
