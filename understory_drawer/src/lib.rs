// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_drawer --heading-base-level=0

//! Understory Drawer: a headless edge drawer driven by tap, drag and fling gestures.
//!
//! A drawer is a panel anchored to one edge of a viewport. A thin handle
//! ("bar") stays visible when it is closed. Tapping the handle toggles the
//! drawer, dragging it moves the panel one-to-one with the pointer, and
//! releasing a drag flings the panel open or closed at the speed of the drag.
//!
//! The crate is split along the same seams as the behavior:
//!
//! - [`GestureTracker`] turns press/move/release input into a
//!   [`ReleaseDecision`], using a time-windowed velocity estimate.
//! - [`PositionAnimator`] owns the location and the single active
//!   [`AnimationJob`], either eased over a fixed duration or linear at a fling
//!   velocity.
//! - [`Drawer`] wires both to three host ports: a [`Surface`] it positions, a
//!   [`FrameScheduler`](understory_timing::FrameScheduler) it asks for frames,
//!   and a [`DrawerListener`] it notifies.
//!
//! Locations run from `-size` (closed) to `0` (open) and are clamped to that
//! range at every step.
//!
//! It does **not** render, lay out, or normalize input events. Hosts map their
//! pointer events to [`Drawer::on_press_start`], [`Drawer::on_press_move`] and
//! [`Drawer::on_press_end`], deliver frames to [`Drawer::on_frame`], and
//! implement [`Surface`] on top of whatever they draw with.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use understory_drawer::{Drawer, DrawerConfig, DrawerEvent, HeadlessSurface, Orientation};
//! use understory_timing::ManualFrames;
//!
//! let surface = HeadlessSurface::new(Size::new(800.0, 600.0), Size::new(800.0, 200.0));
//! let config = DrawerConfig::default()
//!     .with_orientation(Orientation::Bottom)
//!     .with_full_extent(true);
//! let listener: Vec<DrawerEvent> = Vec::new();
//! let mut drawer = Drawer::new(config, surface, ManualFrames::new(16), listener).unwrap();
//! assert_eq!(drawer.size(), 200.0);
//!
//! // Drag the handle up from the bottom edge and release quickly.
//! drawer.on_press_start(Point::new(400.0, 590.0));
//! for (i, y) in [560.0, 520.0, 480.0].into_iter().enumerate() {
//!     drawer.on_press_move(Point::new(400.0, y), 10 * (i as u64 + 1));
//! }
//! drawer.on_press_end(30);
//!
//! while let Some(now) = drawer.frames_mut().next_frame() {
//!     drawer.on_frame(now);
//! }
//! assert!(drawer.is_open());
//! assert_eq!(drawer.location(), 0.0);
//! assert_eq!(drawer.listener().last(), Some(&DrawerEvent::Opened));
//! ```
//!
//! ## Features
//!
//! - `std` (default): forwards to `kurbo/std`.
//! - `libm`: `no_std` float support through `kurbo/libm`.
//! - `serde`: `Serialize`/`Deserialize` for [`DrawerConfig`], [`Orientation`]
//!   and [`Axis`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod animator;
mod config;
mod drawer;
mod easing;
mod error;
mod events;
mod geometry;
mod gesture;
mod surface;

pub use animator::{AnimationJob, AnimationKind, Motion, PositionAnimator, Tick};
pub use config::DrawerConfig;
pub use drawer::{Drawer, DrawerDebugInfo, DrawerPhase};
pub use easing::Easing;
pub use error::{ConfigError, ParseOrientationError, UnknownEasing};
pub use events::{DrawerEvent, DrawerListener};
pub use geometry::{Axis, Geometry, Orientation};
pub use gesture::{GestureTracker, MIN_FLING_SAMPLES, PressMove, ReleaseDecision};
pub use surface::{HeadlessSurface, Surface};
