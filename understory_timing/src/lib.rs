// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_timing --heading-base-level=0

//! Understory Timing: host-agnostic frame scheduling for UI runtimes.
//!
//! Animated widgets need "call me again on the next frame" without knowing
//! whether frames come from `requestAnimationFrame`, a winit redraw, a
//! terminal tick, or a test loop. This crate models that as a port:
//!
//! - [`FrameScheduler`]: the one operation a widget needs, `request_frame`.
//!   The host answers by calling the widget's own frame entry point with a
//!   millisecond timestamp.
//! - [`ManualFrames`]: a headless scheduler with a millisecond clock that
//!   advances by a fixed step. It records requests so tests and headless
//!   hosts can drive animations deterministically.
//!
//! A widget keeps at most one outstanding request. A frame that arrives after
//! the widget stopped needing it must be treated as a no-op by the widget, so
//! hosts never have to cancel requests.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_timing::{FrameScheduler, ManualFrames};
//!
//! let mut frames = ManualFrames::new(16);
//! frames.request_frame();
//! assert!(frames.is_pending());
//!
//! // The host loop: service one pending request per frame.
//! let mut serviced = 0;
//! while let Some(now) = frames.next_frame() {
//!     assert_eq!(now, 16);
//!     serviced += 1;
//! }
//! assert_eq!(serviced, 1);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

/// Port through which a widget asks its host for another frame.
pub trait FrameScheduler {
    /// Asks the host to deliver one frame callback soon.
    ///
    /// Repeated requests before the frame is delivered collapse into one.
    fn request_frame(&mut self);
}

/// Discards all requests. Useful for widgets that are only ever snapped.
impl FrameScheduler for () {
    fn request_frame(&mut self) {}
}

impl<F: FrameScheduler + ?Sized> FrameScheduler for &mut F {
    fn request_frame(&mut self) {
        (**self).request_frame();
    }
}

/// Headless frame scheduler with a fixed-step millisecond clock.
#[derive(Clone, Debug, Default)]
pub struct ManualFrames {
    now: u64,
    step: u64,
    pending: bool,
    requests: usize,
}

impl ManualFrames {
    /// Creates a scheduler at time zero that advances `step` ms per frame.
    #[must_use]
    pub fn new(step: u64) -> Self {
        Self {
            now: 0,
            step,
            pending: false,
            requests: 0,
        }
    }

    /// Current clock value in milliseconds.
    #[must_use]
    pub fn now(&self) -> u64 {
        self.now
    }

    /// Frame step in milliseconds.
    #[must_use]
    pub fn step(&self) -> u64 {
        self.step
    }

    /// Moves the clock forward without delivering a frame.
    ///
    /// Simulates a stalled host (for example a backgrounded tab).
    pub fn advance(&mut self, ms: u64) {
        self.now = self.now.saturating_add(ms);
    }

    /// Returns `true` if a frame has been requested and not yet delivered.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Total number of `request_frame` calls seen, including collapsed ones.
    #[must_use]
    pub fn requests(&self) -> usize {
        self.requests
    }

    /// Consumes the pending request, advancing the clock by one step.
    ///
    /// Returns the frame timestamp to hand to the widget, or `None` when
    /// nothing is pending.
    pub fn next_frame(&mut self) -> Option<u64> {
        if !self.pending {
            return None;
        }
        self.pending = false;
        self.now = self.now.saturating_add(self.step);
        Some(self.now)
    }
}

impl FrameScheduler for ManualFrames {
    fn request_frame(&mut self) {
        self.requests += 1;
        self.pending = true;
    }
}
