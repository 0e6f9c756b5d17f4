/*!
 * Publish Path Benchmarks
 *
 * Measure snapshot-and-deliver cost against subscriber fan-out, plus
 * subscribe/unsubscribe churn on a single signal type
 */

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use signal_bus::{Callback, Signal, SignalPublish, SignalRegistry, SignalSubscribe};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

#[derive(Debug)]
struct Tick(u64);
impl Signal for Tick {}

fn bench_publish_fanout(c: &mut Criterion) {
    let mut group = c.benchmark_group("publish_fanout");

    for subscribers in [1usize, 4, 16, 64] {
        group.bench_with_input(
            BenchmarkId::from_parameter(subscribers),
            &subscribers,
            |b, &subscribers| {
                let registry = SignalRegistry::new();
                let hits = Arc::new(AtomicU64::new(0));
                let mut held = Vec::new();

                for _ in 0..subscribers {
                    let hits = hits.clone();
                    let cb: Callback<Tick> = Arc::new(move |tick: &Tick| {
                        hits.fetch_add(tick.0, Ordering::Relaxed);
                    });
                    registry.subscribe(cb.clone());
                    held.push(cb);
                }

                b.iter(|| registry.publish(Tick(black_box(1))));
            },
        );
    }

    group.finish();
}

fn bench_subscribe_unsubscribe_churn(c: &mut Criterion) {
    c.bench_function("subscribe_unsubscribe", |b| {
        let registry = SignalRegistry::new();

        b.iter(|| {
            let cb: Callback<Tick> = Arc::new(|_tick: &Tick| {});
            registry.subscribe(cb.clone());
            registry.unsubscribe(&cb);
        });
    });
}

fn bench_publish_no_subscribers(c: &mut Criterion) {
    c.bench_function("publish_no_subscribers", |b| {
        let registry = SignalRegistry::new();
        b.iter(|| registry.publish(Tick(black_box(1))));
    });
}

criterion_group!(
    benches,
    bench_publish_fanout,
    bench_subscribe_unsubscribe_churn,
    bench_publish_no_subscribers
);
criterion_main!(benches);
