// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Position animator: the drawer's location and its single animation job.
//!
//! The animator is pure state. It does not talk to surfaces, schedulers, or
//! listeners; [`Drawer`](crate::Drawer) forwards what it reports.
//!
//! Two motion laws are supported:
//!
//! - [`Motion::Eased`]: fixed duration, progress shaped by an [`Easing`].
//! - [`Motion::Linear`]: constant velocity, with the duration derived from the
//!   remaining distance and the release speed, so a fling continues at the
//!   speed of the drag that produced it.

use crate::easing::Easing;

/// Which boundary an animation or snap heads for.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AnimationKind {
    /// Toward location `0`.
    Open,
    /// Toward location `-size`.
    Close,
}

impl AnimationKind {
    /// The other boundary.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Open => Self::Close,
            Self::Close => Self::Open,
        }
    }

    /// Location of this boundary for a drawer of extent `size`.
    #[must_use]
    pub fn target(self, size: f64) -> f64 {
        match self {
            Self::Open => 0.0,
            Self::Close => -size,
        }
    }
}

/// Motion law of an animation job.
#[derive(Copy, Clone, Debug)]
pub enum Motion {
    /// Progress shaped by an easing curve.
    Eased(Easing),
    /// Constant velocity.
    Linear,
}

/// One in-flight animation.
#[derive(Copy, Clone, Debug)]
pub struct AnimationJob {
    /// Location when the job was created.
    pub start_location: f64,
    /// Location the job finishes at.
    pub end_location: f64,
    /// Timestamp the job started at: the triggering event's, or else the
    /// first frame that serviced it.
    pub start_time: Option<u64>,
    /// Length in milliseconds.
    pub duration: f64,
    /// Motion law.
    pub motion: Motion,
    /// Boundary the job heads for.
    pub kind: AnimationKind,
}

impl AnimationJob {
    /// A fixed-duration eased job.
    #[must_use]
    pub fn eased(kind: AnimationKind, from: f64, to: f64, duration: f64, easing: Easing) -> Self {
        Self {
            start_location: from,
            end_location: to,
            start_time: None,
            duration,
            motion: Motion::Eased(easing),
            kind,
        }
    }

    /// A constant-velocity job whose duration is `|to - from| / |velocity|`.
    ///
    /// A zero or non-finite velocity yields a zero-length job.
    #[must_use]
    pub fn fling(kind: AnimationKind, from: f64, to: f64, velocity: f64) -> Self {
        let speed = velocity.abs();
        let duration = if speed > 0.0 && speed.is_finite() {
            (to - from).abs() / speed
        } else {
            0.0
        };
        Self {
            start_location: from,
            end_location: to,
            start_time: None,
            duration,
            motion: Motion::Linear,
            kind,
        }
    }

    /// Pins the start time to `time`, when the job is driven by an event that
    /// carries a timestamp.
    ///
    /// Jobs left unpinned start on the first frame that services them.
    #[must_use]
    pub fn starting_at(mut self, time: Option<u64>) -> Self {
        self.start_time = time;
        self
    }

    /// Speed in units per millisecond for linear jobs.
    #[must_use]
    pub fn velocity(&self) -> Option<f64> {
        match self.motion {
            Motion::Linear if self.duration > 0.0 => {
                Some((self.end_location - self.start_location) / self.duration)
            }
            _ => None,
        }
    }

    /// Evaluates the job at `now`, returning the location and whether the job
    /// is finished.
    ///
    /// An unpinned job starts at the first call. Frames before a pinned start
    /// hold the start location. Elapsed time is clamped to the
    /// duration, so a late frame lands exactly on the end location instead of
    /// overshooting.
    pub fn sample(&mut self, now: u64) -> (f64, bool) {
        let start = *self.start_time.get_or_insert(now);
        let elapsed = now.saturating_sub(start) as f64;
        if self.duration.is_nan() || self.duration <= 0.0 || elapsed >= self.duration {
            return (self.end_location, true);
        }
        let t = elapsed / self.duration;
        let progress = match self.motion {
            Motion::Eased(easing) => easing.apply(t),
            Motion::Linear => t,
        };
        let location = self.start_location + (self.end_location - self.start_location) * progress;
        (location, false)
    }
}

/// Outcome of servicing one frame.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Tick {
    /// Location after the frame.
    pub location: f64,
    /// Set when the job completed on this frame.
    pub finished: Option<AnimationKind>,
}

/// Owner of the drawer location, the settled open flag, and the active job.
#[derive(Clone, Debug)]
pub struct PositionAnimator {
    location: f64,
    opened: bool,
    job: Option<AnimationJob>,
}

impl PositionAnimator {
    /// Creates an animator settled at the open or closed boundary.
    #[must_use]
    pub fn new(opened: bool, size: f64) -> Self {
        let kind = if opened {
            AnimationKind::Open
        } else {
            AnimationKind::Close
        };
        Self {
            location: kind.target(size).min(0.0),
            opened,
            job: None,
        }
    }

    /// Current location.
    #[must_use]
    pub fn location(&self) -> f64 {
        self.location
    }

    /// Last settled state: `true` once the drawer reached the open boundary,
    /// `false` once it reached the closed one.
    #[must_use]
    pub fn opened(&self) -> bool {
        self.opened
    }

    /// The active job, if any.
    #[must_use]
    pub fn job(&self) -> Option<&AnimationJob> {
        self.job.as_ref()
    }

    /// Returns `true` while a job is active.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.job.is_some()
    }

    /// Boundary the drawer is heading for: the active job's, else the settled one.
    #[must_use]
    pub fn heading(&self) -> AnimationKind {
        match self.job {
            Some(job) => job.kind,
            None if self.opened => AnimationKind::Open,
            None => AnimationKind::Close,
        }
    }

    /// Returns `true` if the drawer rests at `kind`'s boundary with no job.
    #[must_use]
    pub fn is_settled_at(&self, kind: AnimationKind, size: f64) -> bool {
        self.job.is_none()
            && self.opened == (kind == AnimationKind::Open)
            && self.location == kind.target(size).min(0.0)
    }

    /// Drops the active job without finishing it.
    pub fn cancel(&mut self) -> Option<AnimationJob> {
        self.job.take()
    }

    /// Stores an already-clamped location. Does not touch the job or `opened`.
    pub fn set_location(&mut self, location: f64) {
        self.location = location;
    }

    /// Flips `opened` if the location sits on the opposite boundary.
    ///
    /// Returns the boundary reached when the flag changed.
    pub fn sync_bounds(&mut self, size: f64) -> Option<AnimationKind> {
        if !self.opened && self.location >= 0.0 {
            self.opened = true;
            Some(AnimationKind::Open)
        } else if self.opened && self.location <= -size && size > 0.0 {
            self.opened = false;
            Some(AnimationKind::Close)
        } else {
            None
        }
    }

    /// Cancels any job and jumps to `kind`'s boundary. Returns the new location.
    pub fn snap(&mut self, kind: AnimationKind, size: f64) -> f64 {
        self.job = None;
        self.location = kind.target(size).min(0.0);
        self.opened = kind == AnimationKind::Open;
        self.location
    }

    /// Builds a job from the current location to `kind`'s boundary.
    ///
    /// With a velocity the job is a linear fling; otherwise it is eased over
    /// `duration` milliseconds.
    #[must_use]
    pub fn plan(
        &self,
        kind: AnimationKind,
        size: f64,
        velocity: Option<f64>,
        duration: f64,
        easing: Easing,
    ) -> AnimationJob {
        let to = kind.target(size);
        match velocity {
            Some(v) => AnimationJob::fling(kind, self.location, to, v),
            None => AnimationJob::eased(kind, self.location, to, duration, easing),
        }
    }

    /// Makes `job` the active job, superseding any previous one.
    pub fn start(&mut self, job: AnimationJob) -> Option<AnimationJob> {
        self.job.replace(job)
    }

    /// Services one frame at `now`. Returns `None` if no job is active.
    ///
    /// On completion the location snaps exactly to the target and `opened`
    /// follows the job's kind.
    pub fn tick(&mut self, now: u64) -> Option<Tick> {
        let job = self.job.as_mut()?;
        let (location, done) = job.sample(now);
        if done {
            let kind = job.kind;
            self.location = job.end_location;
            self.opened = kind == AnimationKind::Open;
            self.job = None;
            Some(Tick {
                location: self.location,
                finished: Some(kind),
            })
        } else {
            self.location = location;
            Some(Tick {
                location,
                finished: None,
            })
        }
    }
}
