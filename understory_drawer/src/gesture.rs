// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture tracker: turns a press/move/release sequence into a drawer command.
//!
//! | Current state | Event                 | Next state    | Output                     |
//! | ------------- | --------------------- | ------------- | -------------------------- |
//! | Idle          | press                 | Pressed       | press accepted             |
//! | Idle          | move / release        | Idle          | nothing                    |
//! | Pressed       | press                 | Pressed       | second press rejected      |
//! | Pressed       | move within slop      | Pressed       | [`PressMove::Pending`]     |
//! | Pressed       | move past slop        | Dragging      | [`PressMove::Dragged`]     |
//! | Pressed       | release               | Idle          | [`ReleaseDecision::Toggle`]|
//! | Dragging      | move                  | Dragging      | [`PressMove::Dragged`]     |
//! | Dragging      | release               | Idle          | force-toggle or fling      |
//!
//! While dragging, every move produces a clamped location that the drawer
//! applies directly, and the location is recorded with its timestamp for the
//! release velocity estimate.

use kurbo::Point;
use understory_event_state::drag::{DragAxis, DragState};
use understory_event_state::velocity::VelocityTracker;

use crate::geometry::Geometry;

/// Fewer drag samples than this cannot produce a trustworthy velocity.
pub const MIN_FLING_SAMPLES: usize = 3;

/// What a release asks the drawer to do.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ReleaseDecision {
    /// The press never became a drag: toggle.
    Toggle,
    /// Not enough velocity information: settle at the nearer boundary.
    ForceToggle,
    /// Fling open at the given speed (units per millisecond, positive).
    Open(f64),
    /// Fling closed at the given speed (units per millisecond, negative).
    Close(f64),
}

/// Result of feeding a move to the tracker during a press.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PressMove {
    /// Still inside the slop; the press may yet be a tap.
    Pending,
    /// The press is a drag and the drawer should sit at `location`.
    Dragged {
        /// Clamped location under the pointer.
        location: f64,
        /// `true` on the move that confirmed the drag.
        started: bool,
    },
}

/// Single-pointer gesture tracker for one drawer.
#[derive(Clone, Debug)]
pub struct GestureTracker {
    drag: DragState,
    trail: VelocityTracker,
    velocity_window: u64,
    min_fling_velocity: f64,
}

impl GestureTracker {
    /// Creates an idle tracker.
    #[must_use]
    pub fn new(
        axis: DragAxis,
        drag_threshold: f64,
        velocity_window: u64,
        min_fling_velocity: f64,
    ) -> Self {
        Self {
            drag: DragState::new(axis, drag_threshold),
            trail: VelocityTracker::new(),
            velocity_window,
            min_fling_velocity,
        }
    }

    /// Changes the slop axis for future moves.
    pub fn set_axis(&mut self, axis: DragAxis) {
        self.drag.axis = axis;
    }

    /// Returns `true` while a press is active.
    #[must_use]
    pub fn is_pressed(&self) -> bool {
        self.drag.is_pressed()
    }

    /// Returns `true` once the active press is a confirmed drag.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_confirmed()
    }

    /// Samples recorded during the current drag.
    #[must_use]
    pub fn sample_count(&self) -> usize {
        self.trail.len()
    }

    /// Begins a press at `point`.
    ///
    /// Returns `false`, leaving the active press untouched, if a press is
    /// already being tracked.
    pub fn press_start(&mut self, point: Point) -> bool {
        if self.drag.is_pressed() {
            log::debug!("ignoring press at {point:?}: a press is already active");
            return false;
        }
        self.trail.clear();
        self.drag.start(point);
        true
    }

    /// Feeds a pointer move at `time` ms. Returns `None` with no active press.
    pub fn press_move(
        &mut self,
        point: Point,
        time: u64,
        geometry: &Geometry,
    ) -> Option<PressMove> {
        if !self.drag.is_pressed() {
            return None;
        }
        let was_dragging = self.drag.is_confirmed();
        if !self.drag.confirm(point) {
            return Some(PressMove::Pending);
        }
        let location = geometry.location_for_pointer(point);
        self.trail.push(location, time);
        if !was_dragging {
            log::debug!("press confirmed as drag at {point:?}, location {location}");
        }
        Some(PressMove::Dragged {
            location,
            started: !was_dragging,
        })
    }

    /// Ends the press at `time` ms and decides what the drawer should do.
    ///
    /// Returns `None` if no press was active. Drag state is cleared on every
    /// path.
    pub fn press_end(&mut self, time: u64) -> Option<ReleaseDecision> {
        if !self.drag.is_pressed() {
            return None;
        }
        let was_drag = self.drag.end();
        let decision = if !was_drag {
            ReleaseDecision::Toggle
        } else if self.trail.len() < MIN_FLING_SAMPLES {
            ReleaseDecision::ForceToggle
        } else {
            match self.trail.velocity(time, self.velocity_window) {
                Some(v) if v.is_finite() && v != 0.0 => {
                    let v = self.with_min_speed(v);
                    if v > 0.0 {
                        ReleaseDecision::Open(v)
                    } else {
                        ReleaseDecision::Close(v)
                    }
                }
                _ => ReleaseDecision::ForceToggle,
            }
        };
        self.trail.clear();
        log::debug!("release at t={time}: {decision:?}");
        Some(decision)
    }

    /// Abandons the active press without a decision.
    ///
    /// Returns `Some(true)` if the press had become a drag, `Some(false)` for
    /// a pending tap, and `None` if nothing was pressed.
    pub fn press_cancel(&mut self) -> Option<bool> {
        if !self.drag.is_pressed() {
            return None;
        }
        self.trail.clear();
        Some(self.drag.end())
    }

    fn with_min_speed(&self, velocity: f64) -> f64 {
        if velocity.abs() >= self.min_fling_velocity {
            velocity
        } else if velocity < 0.0 {
            -self.min_fling_velocity
        } else {
            self.min_fling_velocity
        }
    }
}
