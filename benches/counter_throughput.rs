// Criterion benchmark comparing the three counter operations without
// contention.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use design_patterns::CounterSingleton;

fn benchmark_counter_operations(c: &mut Criterion) {
    let counter = CounterSingleton::global();
    let mut group = c.benchmark_group("counter_operations");

    group.bench_function("increment", |b| b.iter(|| counter.increment()));
    group.bench_function("decrement", |b| b.iter(|| black_box(counter.decrement())));
    group.bench_function("value", |b| b.iter(|| black_box(counter.value())));

    group.finish();
}

criterion_group!(benches, benchmark_counter_operations);
criterion_main!(benches);
