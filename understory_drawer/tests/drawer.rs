// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end drawer behavior driven through `HeadlessSurface` and `ManualFrames`.

use kurbo::{Point, Size};
use understory_drawer::{
    Axis, Drawer, DrawerConfig, DrawerEvent, DrawerPhase, HeadlessSurface, Orientation,
    ReleaseDecision,
};
use understory_timing::ManualFrames;

type TestDrawer = Drawer<HeadlessSurface, ManualFrames, Vec<DrawerEvent>>;

fn drawer(config: DrawerConfig) -> TestDrawer {
    let surface = HeadlessSurface::new(Size::new(800.0, 600.0), Size::new(100.0, 600.0));
    Drawer::new(config, surface, ManualFrames::new(10), Vec::new()).unwrap()
}

/// Delivers frames until the drawer stops asking. Returns the frame times.
fn run_frames(drawer: &mut TestDrawer) -> Vec<u64> {
    let mut times = Vec::new();
    while let Some(now) = drawer.frames_mut().next_frame() {
        drawer.on_frame(now);
        times.push(now);
        assert!(times.len() < 1_000, "animation never finished");
    }
    times
}

fn locations(events: &[DrawerEvent]) -> Vec<f64> {
    events
        .iter()
        .filter_map(|event| match event {
            DrawerEvent::LocationChanged(location) => Some(*location),
            _ => None,
        })
        .collect()
}

fn count(events: &[DrawerEvent], wanted: DrawerEvent) -> usize {
    events.iter().filter(|event| **event == wanted).count()
}

fn drag(drawer: &mut TestDrawer, from: Point, moves: &[(f64, u64)]) {
    assert!(drawer.on_press_start(from));
    for &(x, time) in moves {
        drawer.on_press_move(Point::new(x, from.y), time);
    }
}

#[test]
fn threshold_confirms_drag_and_tracks_pointer() {
    let mut d = drawer(DrawerConfig::default());
    assert!(d.on_press_start(Point::new(0.0, 0.0)));

    assert!(!d.on_press_move(Point::new(5.0, 0.0), 10));
    assert!(!d.is_dragging());
    assert_eq!(d.location(), -100.0);

    assert!(d.on_press_move(Point::new(20.0, 0.0), 20));
    assert!(d.is_dragging());
    assert_eq!(d.phase(), DrawerPhase::Dragging);
    assert_eq!(d.location(), -90.0);
    assert_eq!(d.surface().offset(), Some((Orientation::Left, -90.0)));
    assert_eq!(d.listener().as_slice(), &[DrawerEvent::LocationChanged(-90.0)]);
}

#[test]
fn fling_open_matches_drag_speed() {
    let mut d = drawer(DrawerConfig::default());
    // Locations -80, -60, -40 at t = 0, 25, 50.
    drag(&mut d, Point::new(0.0, 0.0), &[(30.0, 0), (50.0, 25), (70.0, 50)]);
    d.frames_mut().advance(50);

    assert_eq!(d.on_press_end(50), Some(ReleaseDecision::Open(0.8)));
    assert_eq!(d.phase(), DrawerPhase::Opening);
    let job = d.debug_info().job.unwrap();
    assert!((job.duration - 50.0).abs() < 1e-9, "duration {}", job.duration);
    assert_eq!(d.listener().last(), Some(&DrawerEvent::Opening));

    d.listener_mut().clear();
    let times = run_frames(&mut d);
    // 40 units at 0.8 per ms from the release at t = 50.
    assert_eq!(times, [60, 70, 80, 90, 100]);
    assert_eq!(d.location(), 0.0);
    assert!(d.is_open());

    let trail = locations(d.listener());
    assert!(trail.windows(2).all(|w| w[0] <= w[1]), "not monotonic: {trail:?}");
    assert!((trail[0] + 32.0).abs() < 1e-9, "first frame at {}", trail[0]);
    assert_eq!(d.listener().last(), Some(&DrawerEvent::Opened));
}

#[test]
fn fling_progress_counts_from_release() {
    let mut d = drawer(DrawerConfig::default());
    drag(&mut d, Point::new(0.0, 0.0), &[(30.0, 0), (50.0, 25), (70.0, 50)]);
    d.frames_mut().advance(50);
    assert_eq!(d.on_press_end(50), Some(ReleaseDecision::Open(0.8)));

    // The host is late with the first frame; the panel has still been moving
    // at drag speed since the release.
    d.frames_mut().advance(20);
    run_frames_until(&mut d, 1);
    assert_eq!(d.frames().now(), 80);
    assert!((d.location() + 16.0).abs() < 1e-9, "location {}", d.location());

    assert_eq!(run_frames(&mut d), [90, 100]);
    assert_eq!(d.location(), 0.0);
    assert_eq!(d.listener().last(), Some(&DrawerEvent::Opened));
}

#[test]
fn fling_closed_from_open() {
    let mut d = drawer(DrawerConfig::default().with_initially_open(true));
    drag(
        &mut d,
        Point::new(110.0, 0.0),
        &[(90.0, 10), (70.0, 20), (50.0, 30)],
    );

    assert_eq!(d.on_press_end(30), Some(ReleaseDecision::Close(-2.0)));
    assert_eq!(d.phase(), DrawerPhase::Closing);
    run_frames(&mut d);
    assert_eq!(d.location(), -100.0);
    assert_eq!(d.phase(), DrawerPhase::Closed);
    assert_eq!(d.listener().last(), Some(&DrawerEvent::Closed));
}

#[test]
fn fling_duration_is_inverse_to_velocity() {
    let mut fast = drawer(DrawerConfig::default());
    drag(&mut fast, Point::new(0.0, 0.0), &[(20.0, 0), (40.0, 10), (60.0, 20)]);
    assert_eq!(fast.on_press_end(20), Some(ReleaseDecision::Open(2.0)));

    let mut slow = drawer(DrawerConfig::default());
    drag(&mut slow, Point::new(0.0, 0.0), &[(20.0, 0), (40.0, 20), (60.0, 40)]);
    assert_eq!(slow.on_press_end(40), Some(ReleaseDecision::Open(1.0)));

    let fast_job = fast.debug_info().job.unwrap();
    let slow_job = slow.debug_info().job.unwrap();
    assert!((fast_job.duration - 25.0).abs() < 1e-9);
    assert!((slow_job.duration - 2.0 * fast_job.duration).abs() < 1e-9);
}

#[test]
fn tap_toggles_open_and_closed() {
    let mut d = drawer(DrawerConfig::default());

    assert!(d.on_press_start(Point::new(10.0, 300.0)));
    d.on_press_move(Point::new(14.0, 320.0), 5);
    let now = d.frames().now();
    assert_eq!(d.on_press_end(now), Some(ReleaseDecision::Toggle));
    assert_eq!(d.phase(), DrawerPhase::Opening);
    run_frames(&mut d);
    assert_eq!(d.phase(), DrawerPhase::Open);

    assert!(d.on_press_start(Point::new(110.0, 300.0)));
    let now = d.frames().now();
    assert_eq!(d.on_press_end(now), Some(ReleaseDecision::Toggle));
    run_frames(&mut d);
    assert_eq!(d.phase(), DrawerPhase::Closed);

    let events = d.listener();
    assert_eq!(count(events, DrawerEvent::Opening), 1);
    assert_eq!(count(events, DrawerEvent::Opened), 1);
    assert_eq!(count(events, DrawerEvent::Closing), 1);
    assert_eq!(count(events, DrawerEvent::Closed), 1);
}

#[test]
fn short_drag_force_toggles_to_nearer_edge() {
    let mut d = drawer(DrawerConfig::default());
    drag(&mut d, Point::new(0.0, 0.0), &[(80.0, 10), (90.0, 20)]);
    assert_eq!(d.location(), -20.0);
    assert_eq!(d.on_press_end(30), Some(ReleaseDecision::ForceToggle));
    run_frames(&mut d);
    assert!(d.is_open());

    let mut d = drawer(DrawerConfig::default());
    drag(&mut d, Point::new(0.0, 0.0), &[(20.0, 10), (30.0, 20)]);
    assert_eq!(d.location(), -80.0);
    assert_eq!(d.on_press_end(30), Some(ReleaseDecision::ForceToggle));
    assert_eq!(d.phase(), DrawerPhase::Closing);
    run_frames(&mut d);
    assert_eq!(d.location(), -100.0);
    assert_eq!(d.listener().last(), Some(&DrawerEvent::Closed));
}

#[test]
fn open_is_idempotent() {
    let mut d = drawer(DrawerConfig::default().with_initially_open(true));
    d.open(true);
    d.open(true);

    assert!(d.listener().is_empty());
    assert!(!d.is_animating());
    assert_eq!(d.frames().requests(), 0);
}

#[test]
fn instant_close_fires_synchronously() {
    for initially_open in [true, false] {
        let mut d = drawer(DrawerConfig::default().with_initially_open(initially_open));
        d.close(false);

        assert_eq!(d.location(), -100.0);
        assert_eq!(
            d.listener().as_slice(),
            &[
                DrawerEvent::Closing,
                DrawerEvent::LocationChanged(-100.0),
                DrawerEvent::Closed
            ]
        );
        assert!(!d.frames().is_pending());
        assert_eq!(d.frames().requests(), 0);
    }
}

#[test]
fn orientation_switch_while_open_stays_open() {
    let mut d = drawer(DrawerConfig::default().with_initially_open(true));
    d.set_orientation(Orientation::Top);

    assert_eq!(d.orientation(), Orientation::Top);
    assert_eq!(d.location(), 0.0);
    assert!(d.is_open());
    assert_eq!(d.size(), 600.0);
    let surface = d.surface();
    assert_eq!(surface.edge(), Some(Orientation::Top));
    assert_eq!(surface.offset(), Some((Orientation::Top, 0.0)));
    assert_eq!(surface.extent(Axis::Vertical), Some(620.0));
    assert_eq!(
        d.listener().as_slice(),
        &[DrawerEvent::LocationChanged(0.0), DrawerEvent::Opened]
    );

    d.set_orientation(Orientation::Top);
    assert_eq!(d.listener().len(), 2);
    assert_eq!(d.surface().mounts(), 2);
}

#[test]
fn orientation_switch_mid_animation_settles_without_animating() {
    let mut d = drawer(DrawerConfig::default());
    d.open(true);
    run_frames_until(&mut d, 3);

    d.set_orientation(Orientation::Right);
    assert!(!d.is_animating());
    assert_eq!(d.location(), -100.0);
    assert_eq!(d.surface().offset(), Some((Orientation::Right, -100.0)));
    assert_eq!(d.listener().last(), Some(&DrawerEvent::Closed));
}

fn run_frames_until(drawer: &mut TestDrawer, frames: usize) {
    for _ in 0..frames {
        let now = drawer.frames_mut().next_frame().unwrap();
        drawer.on_frame(now);
    }
}

#[test]
fn invalid_orientation_name_keeps_previous_edge() {
    let mut d = drawer(DrawerConfig::default());
    let err = d.set_orientation_named("diagonal").unwrap_err();
    assert_eq!(err.name(), "diagonal");
    assert_eq!(d.orientation(), Orientation::Left);
    assert_eq!(d.surface().mounts(), 1);
    assert!(d.listener().is_empty());

    assert!(d.set_orientation_named("Bottom").is_ok());
    assert_eq!(d.orientation(), Orientation::Bottom);
}

#[test]
fn right_edge_measures_from_viewport_end() {
    let mut d = drawer(DrawerConfig::default().with_orientation(Orientation::Right));
    assert!(d.on_press_start(Point::new(795.0, 0.0)));
    assert!(d.on_press_move(Point::new(780.0, 0.0), 10));
    assert_eq!(d.location(), -90.0);
    assert_eq!(d.surface().offset(), Some((Orientation::Right, -90.0)));
}

#[test]
fn drag_is_clamped_and_settles_at_bounds() {
    let mut d = drawer(DrawerConfig::default());
    drag(
        &mut d,
        Point::new(0.0, 0.0),
        &[
            (-200.0, 10),
            (20.0, 20),
            (500.0, 30),
            (90.0, 40),
            (1_000.0, 50),
            (-50.0, 60),
        ],
    );

    let trail = locations(d.listener());
    assert_eq!(trail.len(), 6);
    assert!(trail.iter().all(|l| (-100.0..=0.0).contains(l)), "{trail:?}");
    // Reaching 0 settles open once; coming back to 0 while open does not repeat it.
    assert_eq!(count(d.listener(), DrawerEvent::Opened), 1);
    assert_eq!(count(d.listener(), DrawerEvent::Closed), 1);
    assert!(!d.is_open());
}

#[test]
fn release_at_open_edge_is_a_noop() {
    let mut d = drawer(DrawerConfig::default());
    drag(&mut d, Point::new(0.0, 0.0), &[(200.0, 10), (210.0, 20), (220.0, 30)]);
    assert!(d.is_open());

    // Stationary at the edge: zero velocity, force-toggle to the edge it is at.
    assert_eq!(d.on_press_end(30), Some(ReleaseDecision::ForceToggle));
    assert!(!d.is_animating());
    assert_eq!(count(d.listener(), DrawerEvent::Opened), 1);
    assert_eq!(count(d.listener(), DrawerEvent::Opening), 0);
    assert_eq!(d.frames().requests(), 0);
}

#[test]
fn second_press_does_not_disturb_drag() {
    let mut d = drawer(DrawerConfig::default());
    drag(&mut d, Point::new(0.0, 0.0), &[(60.0, 10)]);
    assert_eq!(d.location(), -50.0);

    assert!(!d.on_press_start(Point::new(300.0, 0.0)));
    assert!(d.is_dragging());
    assert!(d.on_press_move(Point::new(70.0, 0.0), 20));
    assert_eq!(d.location(), -40.0);
}

#[test]
fn non_interactive_drawer_ignores_pointer() {
    let mut d = drawer(DrawerConfig::default().with_interactive(false));
    assert!(!d.on_press_start(Point::new(10.0, 0.0)));
    assert!(!d.on_press_move(Point::new(60.0, 0.0), 10));
    assert_eq!(d.on_press_end(20), None);
    assert!(d.listener().is_empty());

    d.open(true);
    run_frames(&mut d);
    assert!(d.is_open());
}

#[test]
fn release_without_press_is_ignored() {
    let mut d = drawer(DrawerConfig::default());
    assert_eq!(d.on_press_end(10), None);
    d.on_press_cancel();
    assert!(d.listener().is_empty());
}

#[test]
fn superseded_frame_is_a_noop() {
    let mut d = drawer(DrawerConfig::default());
    d.open(true);
    d.close(false);
    assert!(d.frames().is_pending());
    let before = d.listener().len();

    assert_eq!(run_frames(&mut d), [10]);
    assert_eq!(d.listener().len(), before);
    assert_eq!(d.frames().requests(), 1);
    assert!(!d.listener().contains(&DrawerEvent::Opened));
}

#[test]
fn reversed_animation_never_reports_first_target() {
    let mut d = drawer(DrawerConfig::default());
    d.open(true);
    run_frames_until(&mut d, 5);
    d.toggle(true);
    assert_eq!(d.phase(), DrawerPhase::Closing);
    run_frames(&mut d);

    assert_eq!(d.location(), -100.0);
    assert!(!d.listener().contains(&DrawerEvent::Opened));
    assert_eq!(d.listener().last(), Some(&DrawerEvent::Closed));
}

#[test]
fn stalled_host_does_not_overshoot() {
    let mut d = drawer(DrawerConfig::default());
    d.open(true);
    run_frames_until(&mut d, 1);
    d.frames_mut().advance(5_000);
    run_frames(&mut d);

    assert_eq!(d.location(), 0.0);
    let trail = locations(d.listener());
    assert_eq!(trail, [-100.0, 0.0]);
    assert_eq!(d.listener().last(), Some(&DrawerEvent::Opened));
}

#[test]
fn cancelled_drag_returns_to_settled_edge() {
    let mut d = drawer(DrawerConfig::default());
    drag(&mut d, Point::new(0.0, 0.0), &[(60.0, 10)]);
    d.on_press_cancel();

    assert!(!d.is_pressed());
    assert_eq!(d.phase(), DrawerPhase::Closing);
    run_frames(&mut d);
    assert_eq!(d.location(), -100.0);
}

#[test]
fn drag_interrupts_animation() {
    let mut d = drawer(DrawerConfig::default());
    d.open(true);
    run_frames_until(&mut d, 2);

    drag(&mut d, Point::new(0.0, 0.0), &[(40.0, 100)]);
    assert!(!d.is_animating());
    assert_eq!(d.location(), -70.0);

    // The frame requested by the interrupted animation changes nothing.
    let before = d.listener().len();
    run_frames(&mut d);
    assert_eq!(d.listener().len(), before);
}

#[test]
fn resize_while_open_stays_flush() {
    let mut d = drawer(DrawerConfig::default().with_initially_open(true));
    d.set_size(150.0);

    assert_eq!(d.size(), 150.0);
    assert_eq!(d.location(), 0.0);
    assert_eq!(d.surface().extent(Axis::Horizontal), Some(170.0));
    assert_eq!(
        d.listener().as_slice(),
        &[DrawerEvent::LocationChanged(0.0), DrawerEvent::Opened]
    );
}

#[test]
fn resize_while_closed_resettles_silently() {
    let mut d = drawer(DrawerConfig::default());
    d.set_size(150.0);
    assert_eq!(d.location(), -150.0);
    assert_eq!(d.listener().as_slice(), &[DrawerEvent::LocationChanged(-150.0)]);

    d.surface_mut().set_content(Size::new(250.0, 600.0));
    d.refresh_layout();
    // An explicit size wins over content.
    assert_eq!(d.size(), 150.0);
}

#[test]
fn refresh_layout_follows_content() {
    let mut d = drawer(DrawerConfig::default());
    d.surface_mut().set_content(Size::new(250.0, 600.0));
    d.refresh_layout();

    assert_eq!(d.size(), 250.0);
    assert_eq!(d.location(), -250.0);
    assert_eq!(d.surface().extent(Axis::Horizontal), Some(270.0));
}

#[test]
fn layout_change_mid_open_still_opens() {
    let mut d = drawer(DrawerConfig::default());
    d.open(true);
    run_frames_until(&mut d, 10);

    assert_eq!(d.set_bar_thickness(30.0), Ok(()));
    assert!(d.is_animating());
    assert_eq!(d.phase(), DrawerPhase::Opening);
    run_frames(&mut d);

    assert_eq!(d.location(), 0.0);
    assert!(d.is_open());
    assert_eq!(d.surface().extent(Axis::Horizontal), Some(130.0));
    assert_eq!(d.listener().last(), Some(&DrawerEvent::Opened));
    assert_eq!(count(d.listener(), DrawerEvent::Opening), 1);
    assert_eq!(count(d.listener(), DrawerEvent::Closed), 0);
}

#[test]
fn resize_mid_close_lands_on_new_closed_edge() {
    let mut d = drawer(DrawerConfig::default().with_initially_open(true));
    d.close(true);
    run_frames_until(&mut d, 10);

    d.set_size(150.0);
    assert_eq!(d.phase(), DrawerPhase::Closing);
    run_frames(&mut d);

    assert_eq!(d.location(), -150.0);
    assert!(!d.is_open());
    assert_eq!(d.listener().last(), Some(&DrawerEvent::Closed));
    assert_eq!(count(d.listener(), DrawerEvent::Closed), 1);
    assert_eq!(count(d.listener(), DrawerEvent::Opened), 0);
}

#[test]
fn resize_mid_fling_keeps_fling_speed() {
    let mut d = drawer(DrawerConfig::default());
    drag(&mut d, Point::new(0.0, 0.0), &[(30.0, 0), (50.0, 25), (70.0, 50)]);
    d.frames_mut().advance(50);
    assert_eq!(d.on_press_end(50), Some(ReleaseDecision::Open(0.8)));
    run_frames_until(&mut d, 2);

    d.set_size(200.0);
    let job = d.debug_info().job.unwrap();
    assert!((job.velocity().unwrap() - 0.8).abs() < 1e-9);
    run_frames(&mut d);
    assert_eq!(d.location(), 0.0);
    assert_eq!(d.listener().last(), Some(&DrawerEvent::Opened));
}
