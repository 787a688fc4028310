// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag state helper: tell taps from drags and track movement during a press.
//!
//! ## Usage
//!
//! 1) Start a press by calling [`DragState::start`] with the initial position.
//! 2) On each move event, call [`DragState::confirm`] to find out whether the
//!    press has moved far enough along its [`DragAxis`] to count as a drag.
//!    Once confirmed, it stays confirmed until the press ends.
//! 3) Optionally call [`DragState::update`] for the delta since the previous
//!    move, or [`DragState::total_offset`] for the offset from the anchor.
//! 4) End the press with [`DragState::end`] to reset state.
//!
//! A press that ends without ever being confirmed is a tap.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use understory_event_state::drag::{DragAxis, DragState};
//!
//! let mut drag = DragState::new(DragAxis::Vertical, 8.0);
//!
//! drag.start(Point::new(10.0, 20.0));
//! assert!(drag.is_pressed());
//!
//! // Horizontal motion does not count on a vertical axis.
//! assert!(!drag.confirm(Point::new(60.0, 22.0)));
//!
//! // Move to (10, 30) - 10 units down, past the 8 unit slop.
//! assert!(drag.confirm(Point::new(10.0, 30.0)));
//! assert!(drag.is_confirmed());
//!
//! let total = drag.total_offset(Point::new(10.0, 30.0)).unwrap();
//! assert_eq!(total.y, 10.0);
//! ```

use kurbo::{Point, Vec2};

/// Axis along which press displacement is measured against the slop.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum DragAxis {
    /// Only horizontal displacement counts.
    Horizontal,
    /// Only vertical displacement counts.
    Vertical,
    /// Euclidean displacement in any direction.
    #[default]
    Free,
}

impl DragAxis {
    /// Returns `true` if `offset` projected onto this axis is strictly longer
    /// than `threshold`.
    #[must_use]
    pub fn exceeds(self, offset: Vec2, threshold: f64) -> bool {
        match self {
            Self::Horizontal => offset.x.abs() > threshold,
            Self::Vertical => offset.y.abs() > threshold,
            Self::Free => offset.hypot2() > threshold * threshold,
        }
    }
}

/// Tracks a single press and whether it has become a drag.
#[derive(Debug, Clone, Default, Copy)]
pub struct DragState {
    /// Anchor position where the press started
    pub start_pos: Option<Point>,
    /// Last recorded pointer position during the press
    pub last_pos: Option<Point>,
    /// Axis used for the slop test
    pub axis: DragAxis,
    /// Slop distance that must be exceeded before the press is a drag
    pub threshold: f64,
    confirmed: bool,
}

impl DragState {
    /// Creates an idle drag state that measures slop along `axis`.
    #[must_use]
    pub fn new(axis: DragAxis, threshold: f64) -> Self {
        Self {
            start_pos: None,
            last_pos: None,
            axis,
            threshold,
            confirmed: false,
        }
    }

    /// Start tracking a new press from the given position.
    ///
    /// Any previous press is discarded; callers that must reject a second
    /// press check [`DragState::is_pressed`] first.
    pub fn start(&mut self, pos: Point) {
        self.start_pos = Some(pos);
        self.last_pos = Some(pos);
        self.confirmed = false;
    }

    /// Feed a move event and return whether the press is now a drag.
    ///
    /// Returns `false` when no press is active. Once the displacement from the
    /// anchor exceeds the threshold the press stays confirmed, even if the
    /// pointer comes back toward the anchor.
    pub fn confirm(&mut self, pos: Point) -> bool {
        let Some(start) = self.start_pos else {
            return false;
        };
        if !self.confirmed && self.axis.exceeds(pos - start, self.threshold) {
            self.confirmed = true;
        }
        self.last_pos = Some(pos);
        self.confirmed
    }

    /// Update the drag state with a new position, returning the movement delta since last update.
    pub fn update(&mut self, pos: Point) -> Option<Vec2> {
        if self.start_pos.is_some() {
            if let Some(last_pos) = self.last_pos {
                let delta = pos - last_pos;
                self.last_pos = Some(pos);
                Some(delta)
            } else {
                self.last_pos = Some(pos);
                None
            }
        } else {
            None
        }
    }

    /// Get total offset from the press anchor.
    pub fn total_offset(&self, current_pos: Point) -> Option<Vec2> {
        self.start_pos.map(|start_pos| current_pos - start_pos)
    }

    /// End the current press and reset state.
    ///
    /// Returns `true` if the press had been confirmed as a drag.
    pub fn end(&mut self) -> bool {
        let was_drag = self.start_pos.is_some() && self.confirmed;
        self.start_pos = None;
        self.last_pos = None;
        self.confirmed = false;
        was_drag
    }

    /// Returns `true` while a press is active, whether or not it is a drag yet.
    pub fn is_pressed(&self) -> bool {
        self.start_pos.is_some()
    }

    /// Returns `true` once the active press has moved past the slop.
    pub fn is_confirmed(&self) -> bool {
        self.start_pos.is_some() && self.confirmed
    }
}
