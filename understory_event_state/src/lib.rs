// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_event_state --heading-base-level=0

//! Understory Event State: pointer gesture state managers for UI.
//!
//! This crate provides small, focused state machines for pointer interactions
//! that need stateful tracking across several events:
//!
//! - [`drag`]: Track a press, tell a tap from a drag with an axis-projected
//!   slop threshold, and report movement deltas and total offsets.
//! - [`velocity`]: Record a time-stamped 1D sample trail during a drag and
//!   estimate the release velocity from its most recent tail.
//!
//! ## Design Philosophy
//!
//! Each state manager is designed to be:
//!
//! - **Minimal and focused**: Each handles one specific interaction pattern
//! - **Stateful but simple**: Track just enough state to compute transitions
//! - **Integration-friendly**: Work with any event routing or input normalization
//!
//! The crate does not assume any particular UI framework or event system.
//! Callers feed it positions and millisecond timestamps they already have, and
//! interpret the results (tap vs. drag, fling velocity) at a higher layer.
//!
//! ## Usage Patterns
//!
//! ### Tap or drag
//!
//! Use [`drag::DragState`] with a slop threshold to decide whether a press
//! turned into a drag:
//!
//! ```rust
//! # #[cfg(feature = "drag")]
//! # fn example() {
//! use kurbo::Point;
//! use understory_event_state::drag::{DragAxis, DragState};
//!
//! let mut drag = DragState::new(DragAxis::Horizontal, 10.0);
//!
//! drag.start(Point::new(0.0, 0.0));
//! // Within slop: still a tap candidate.
//! assert!(!drag.confirm(Point::new(5.0, 40.0)));
//! // Past slop along the horizontal axis: a drag.
//! assert!(drag.confirm(Point::new(20.0, 0.0)));
//! # }
//! ```
//!
//! ### Release velocity
//!
//! Use [`velocity::VelocityTracker`] to estimate how fast a drag was moving
//! when it was released:
//!
//! ```rust
//! # #[cfg(feature = "velocity")]
//! # fn example() {
//! use understory_event_state::velocity::VelocityTracker;
//!
//! let mut tracker = VelocityTracker::new();
//! tracker.push(-80.0, 0);
//! tracker.push(-40.0, 50);
//!
//! // 40 units in 50 ms, looking back at most 100 ms from t = 50.
//! assert_eq!(tracker.velocity(50, 100), Some(0.8));
//! # }
//! ```
//!
//! ## Features
//!
//! - `drag`: Enable drag state tracking (requires `kurbo` dependency)
//! - `velocity`: Enable the velocity tracker (requires `smallvec` dependency)
//!
//! This crate is `no_std` compatible for all modules.

#![no_std]

#[cfg(feature = "drag")]
pub mod drag;
#[cfg(feature = "velocity")]
pub mod velocity;
