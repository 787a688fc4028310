// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_event_state::velocity::VelocityTracker;

/// A zig-zag trail sampled every 8 ms, like a drag that keeps reversing.
fn zigzag(len: usize) -> VelocityTracker {
    let mut tracker = VelocityTracker::new();
    let mut position = -200.0;
    let mut step = 6.0;
    for i in 0..len {
        if i % 20 == 0 {
            step = -step;
        }
        position += step;
        tracker.push(position, i as u64 * 8);
    }
    tracker
}

fn bench_velocity(c: &mut Criterion) {
    let mut group = c.benchmark_group("velocity/estimate");

    // The recency window bounds the walk, so cost should stay flat as trails grow.
    for len in [4_usize, 16, 256, 4_096] {
        let tracker = zigzag(len);
        let now = tracker.last().map_or(0, |s| s.time);
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::new("window_100ms", len), &tracker, |b, t| {
            b.iter(|| black_box(t.velocity(black_box(now), 100)));
        });
        group.bench_with_input(BenchmarkId::new("window_unbounded", len), &tracker, |b, t| {
            b.iter(|| black_box(t.velocity(black_box(now), u64::MAX)));
        });
    }

    group.finish();
}

fn bench_push(c: &mut Criterion) {
    let mut group = c.benchmark_group("velocity/push");

    // 16 samples stay inline; longer drags spill to the heap.
    for len in [16_usize, 64, 1_024] {
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, &len| {
            b.iter(|| black_box(zigzag(len)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_velocity, bench_push);
criterion_main!(benches);
