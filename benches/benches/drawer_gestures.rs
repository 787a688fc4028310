// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size};
use understory_drawer::{Drawer, DrawerConfig, HeadlessSurface, Orientation};
use understory_timing::ManualFrames;

type BenchDrawer = Drawer<HeadlessSurface, ManualFrames, ()>;

fn drawer(orientation: Orientation) -> BenchDrawer {
    let surface = HeadlessSurface::new(Size::new(1_280.0, 800.0), Size::new(320.0, 320.0));
    let config = DrawerConfig::default().with_orientation(orientation);
    match Drawer::new(config, surface, ManualFrames::new(16), ()) {
        Ok(drawer) => drawer,
        Err(err) => panic!("bench config rejected: {err}"),
    }
}

fn pointer(orientation: Orientation, distance: f64) -> Point {
    match orientation {
        Orientation::Left => Point::new(distance, 400.0),
        Orientation::Right => Point::new(1_280.0 - distance, 400.0),
        Orientation::Top => Point::new(640.0, distance),
        Orientation::Bottom => Point::new(640.0, 800.0 - distance),
    }
}

/// Press, drag `moves` samples outward, release, and run the fling to completion.
fn drag_and_fling(drawer: &mut BenchDrawer, moves: u64) {
    let orientation = drawer.orientation();
    drawer.on_press_start(pointer(orientation, 5.0));
    for i in 1..=moves {
        let distance = 5.0 + (i as f64) * 300.0 / moves as f64;
        drawer.on_press_move(pointer(orientation, distance), i * 4);
    }
    drawer.on_press_end(moves * 4);
    while let Some(now) = drawer.frames_mut().next_frame() {
        drawer.on_frame(now);
    }
}

fn bench_drag_fling(c: &mut Criterion) {
    let mut group = c.benchmark_group("drawer/drag_fling");

    for moves in [8_u64, 64, 512] {
        for orientation in [Orientation::Left, Orientation::Bottom] {
            let id = BenchmarkId::new(orientation.name(), moves);
            group.bench_with_input(id, &moves, |b, &moves| {
                b.iter_batched(
                    || drawer(orientation),
                    |mut drawer| {
                        drag_and_fling(&mut drawer, moves);
                        black_box(drawer.location());
                    },
                    BatchSize::SmallInput,
                );
            });
        }
    }

    group.finish();
}

fn bench_eased_toggle(c: &mut Criterion) {
    c.bench_function("drawer/eased_toggle", |b| {
        b.iter_batched(
            || drawer(Orientation::Left),
            |mut drawer| {
                drawer.toggle(true);
                while let Some(now) = drawer.frames_mut().next_frame() {
                    drawer.on_frame(now);
                }
                black_box(drawer.is_open());
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_drag_fling, bench_eased_toggle);
criterion_main!(benches);
