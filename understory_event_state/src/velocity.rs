// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Release velocity from a time-stamped 1D sample trail.
//!
//! A [`VelocityTracker`] records `(position, time)` pairs while a drag is in
//! progress. Nothing is evicted during a drag; the trail is trimmed logically
//! at read time by a recency window, so only the final segment of a gesture
//! that reversed direction decides the fling direction.
//!
//! ## Estimation
//!
//! [`VelocityTracker::velocity`] compares the most recent sample against the
//! oldest sample that is still inside the recency window:
//!
//! - The walk starts at the second most recent sample and moves backward.
//! - It stops at the first sample strictly older than `window` before `now`.
//! - Samples stamped with the same time as the most recent one are skipped,
//!   so a zero elapsed time never produces an infinite or NaN velocity.
//!
//! Velocity is expressed in position units per millisecond, and keeps the sign
//! of the position axis.
//!
//! ```
//! use understory_event_state::velocity::VelocityTracker;
//!
//! let mut tracker = VelocityTracker::new();
//! // Moving backward for a while...
//! tracker.push(0.0, 0);
//! tracker.push(-60.0, 100);
//! // ...then forward at the end.
//! tracker.push(-50.0, 180);
//! tracker.push(-30.0, 200);
//!
//! // Only the last 50 ms are considered: 20 units forward in 20 ms.
//! assert_eq!(tracker.velocity(200, 50), Some(1.0));
//! ```

use smallvec::SmallVec;

/// A single position sample taken at a millisecond timestamp.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Sample {
    /// Position along the tracked axis.
    pub position: f64,
    /// Timestamp in milliseconds.
    pub time: u64,
}

/// Append-only trail of samples for one drag.
#[derive(Clone, Debug, Default)]
pub struct VelocityTracker {
    samples: SmallVec<[Sample; 16]>,
}

impl VelocityTracker {
    /// Creates an empty tracker.
    #[must_use]
    pub fn new() -> Self {
        Self {
            samples: SmallVec::new(),
        }
    }

    /// Drops all samples. Call this when a new press begins.
    pub fn clear(&mut self) {
        self.samples.clear();
    }

    /// Appends a sample to the trail.
    pub fn push(&mut self, position: f64, time: u64) {
        log::trace!("velocity sample position={position} time={time}");
        self.samples.push(Sample { position, time });
    }

    /// Number of recorded samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns `true` if no samples have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// All recorded samples, oldest first.
    #[must_use]
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// The most recent sample, if any.
    #[must_use]
    pub fn last(&self) -> Option<Sample> {
        self.samples.last().copied()
    }

    /// Estimates the velocity at `now`, looking back at most `window`
    /// milliseconds.
    ///
    /// Returns `None` when there are fewer than two samples or no usable
    /// comparison sample lies inside the window.
    #[must_use]
    pub fn velocity(&self, now: u64, window: u64) -> Option<f64> {
        let (last, rest) = self.samples.split_last()?;
        let mut current = None;
        for sample in rest.iter().rev() {
            if now.saturating_sub(sample.time) > window {
                break;
            }
            if sample.time == last.time {
                continue;
            }
            current = Some(sample);
        }
        let current = current?;
        let elapsed = current.time as f64 - last.time as f64;
        let velocity = (current.position - last.position) / elapsed;
        log::trace!(
            "velocity {velocity} from t={} to t={} (window {window} ms)",
            current.time,
            last.time
        );
        Some(velocity)
    }
}
