// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The drawer: gesture tracker, position animator and host ports wired together.

use kurbo::Point;
use understory_timing::FrameScheduler;

use crate::animator::{AnimationJob, AnimationKind, PositionAnimator};
use crate::config::DrawerConfig;
use crate::error::{ConfigError, ParseOrientationError};
use crate::events::DrawerListener;
use crate::geometry::{Geometry, Orientation};
use crate::gesture::{GestureTracker, PressMove, ReleaseDecision};
use crate::surface::Surface;

/// Coarse interaction state of a drawer.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DrawerPhase {
    /// Settled at `-size`.
    Closed,
    /// Animating toward `0`.
    Opening,
    /// Settled at `0`.
    Open,
    /// Animating toward `-size`.
    Closing,
    /// Following a confirmed drag.
    Dragging,
}

/// An edge drawer driven by pointer gestures and programmatic commands.
///
/// The drawer owns three host ports:
///
/// - a [`Surface`] it mounts, sizes and moves,
/// - a [`FrameScheduler`] it asks for frames while animating,
/// - a [`DrawerListener`] it notifies of lifecycle changes.
///
/// Pointer input arrives through [`on_press_start`](Self::on_press_start),
/// [`on_press_move`](Self::on_press_move) and
/// [`on_press_end`](Self::on_press_end); frames arrive through
/// [`on_frame`](Self::on_frame). All timestamps are milliseconds on the
/// host's clock.
///
/// ```
/// use kurbo::{Point, Size};
/// use understory_drawer::{Drawer, DrawerConfig, DrawerEvent, HeadlessSurface};
/// use understory_timing::ManualFrames;
///
/// let surface = HeadlessSurface::new(Size::new(800.0, 600.0), Size::new(100.0, 600.0));
/// let mut drawer = Drawer::new(
///     DrawerConfig::default(),
///     surface,
///     ManualFrames::new(16),
///     Vec::<DrawerEvent>::new(),
/// )
/// .unwrap();
/// assert_eq!(drawer.location(), -100.0);
///
/// // A tap on the handle toggles the drawer open.
/// drawer.on_press_start(Point::new(10.0, 300.0));
/// drawer.on_press_end(40);
/// while let Some(now) = drawer.frames_mut().next_frame() {
///     drawer.on_frame(now);
/// }
///
/// assert!(drawer.is_open());
/// assert_eq!(drawer.listener().last(), Some(&DrawerEvent::Opened));
/// ```
#[derive(Debug)]
pub struct Drawer<S, F, L> {
    config: DrawerConfig,
    geometry: Geometry,
    gesture: GestureTracker,
    animator: PositionAnimator,
    surface: S,
    frames: F,
    listener: L,
    frame_pending: bool,
}

impl<S: Surface, F: FrameScheduler, L: DrawerListener> Drawer<S, F, L> {
    /// Validates `config`, mounts the panel on `surface` and places it at the
    /// initial boundary.
    ///
    /// No notifications are emitted during construction.
    pub fn new(
        config: DrawerConfig,
        mut surface: S,
        frames: F,
        listener: L,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        surface.mount(config.orientation, config.full_extent);
        let geometry = resolve_geometry(&config, &surface);
        let gesture = GestureTracker::new(
            config.orientation.axis().drag_axis(),
            config.drag_threshold,
            config.velocity_window,
            config.min_fling_velocity,
        );
        let animator = PositionAnimator::new(config.initially_open, geometry.size);
        let mut drawer = Self {
            config,
            geometry,
            gesture,
            animator,
            surface,
            frames,
            listener,
            frame_pending: false,
        };
        drawer.apply_extents();
        drawer
            .surface
            .set_offset(geometry.orientation, drawer.animator.location());
        log::debug!(
            "drawer mounted on {} edge: size {}, bar {}, open {}",
            geometry.orientation,
            geometry.size,
            geometry.bar_thickness,
            drawer.animator.opened()
        );
        Ok(drawer)
    }

    /// Opens the drawer, animated with the configured easing or instantly.
    pub fn open(&mut self, animate: bool) {
        self.move_to(AnimationKind::Open, animate, None, None);
    }

    /// Closes the drawer, animated with the configured easing or instantly.
    pub fn close(&mut self, animate: bool) {
        self.move_to(AnimationKind::Close, animate, None, None);
    }

    /// Heads for the boundary opposite the one the drawer is heading for.
    pub fn toggle(&mut self, animate: bool) {
        let kind = self.animator.heading().opposite();
        self.move_to(kind, animate, None, None);
    }

    /// Current location: `0` is open, `-size` is closed.
    #[must_use]
    pub fn location(&self) -> f64 {
        self.animator.location()
    }

    /// Moves the drawer directly to `location`, clamped to `[-size, 0]`.
    ///
    /// Cancels any animation. Reaching a boundary settles the drawer there.
    pub fn set_location(&mut self, location: f64) {
        if self.animator.cancel().is_some() {
            log::debug!("animation cancelled by direct location change");
        }
        let location = self.geometry.clamp(location);
        self.apply_location(location);
    }

    /// Edge the drawer is anchored to.
    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.geometry.orientation
    }

    /// Moves the drawer to another edge.
    ///
    /// The panel is remounted and jumps to the boundary it last settled at,
    /// without animating. Any press or animation in flight is dropped.
    pub fn set_orientation(&mut self, orientation: Orientation) {
        if orientation == self.geometry.orientation {
            return;
        }
        log::debug!("drawer orientation {} -> {orientation}", self.geometry.orientation);
        self.abandon_press();
        self.animator.cancel();
        self.config.orientation = orientation;
        self.gesture.set_axis(orientation.axis().drag_axis());
        self.surface.mount(orientation, self.config.full_extent);
        self.geometry = resolve_geometry(&self.config, &self.surface);
        self.apply_extents();
        let kind = self.settled_kind();
        self.snap(kind);
    }

    /// Like [`set_orientation`](Self::set_orientation), taking an edge name.
    ///
    /// An unknown name leaves the drawer untouched.
    pub fn set_orientation_named(&mut self, name: &str) -> Result<(), ParseOrientationError> {
        match name.parse() {
            Ok(orientation) => {
                self.set_orientation(orientation);
                Ok(())
            }
            Err(err) => {
                log::debug!("{err}; keeping {}", self.geometry.orientation);
                Err(err)
            }
        }
    }

    /// Open extent in use.
    #[must_use]
    pub fn size(&self) -> f64 {
        self.geometry.size
    }

    /// Fixes the open extent to `size`.
    ///
    /// A non-positive size is accepted; such a drawer never animates.
    pub fn set_size(&mut self, size: f64) {
        log::debug!("drawer size {} -> {size}", self.geometry.size);
        self.config.size = Some(size);
        self.relayout();
    }

    /// Drag handle thickness in use.
    #[must_use]
    pub fn bar_thickness(&self) -> f64 {
        self.geometry.bar_thickness
    }

    /// Changes the drag handle thickness.
    pub fn set_bar_thickness(&mut self, bar_thickness: f64) -> Result<(), ConfigError> {
        ConfigError::check_non_negative("bar_thickness", bar_thickness)?;
        self.config.bar_thickness = bar_thickness;
        self.relayout();
        Ok(())
    }

    /// Re-reads content and viewport extents from the surface.
    ///
    /// Call after the panel's content or the viewport changed size.
    pub fn refresh_layout(&mut self) {
        self.relayout();
    }

    /// Enables or disables pointer handling. Disabling cancels any press.
    pub fn set_interactive(&mut self, interactive: bool) {
        self.config.interactive = interactive;
        if !interactive {
            self.on_press_cancel();
        }
    }

    /// Begins a press at `point`.
    ///
    /// Returns `true` if the drawer took the press, in which case the host
    /// should suppress its own default handling. Returns `false` when the
    /// drawer is not interactive or is already tracking a press.
    pub fn on_press_start(&mut self, point: Point) -> bool {
        if !self.config.interactive {
            return false;
        }
        self.geometry.viewport_extent = self
            .surface
            .viewport_extent(self.geometry.orientation.axis());
        self.gesture.press_start(point)
    }

    /// Feeds a pointer move at `time`.
    ///
    /// Returns `true` if the move dragged the drawer.
    pub fn on_press_move(&mut self, point: Point, time: u64) -> bool {
        match self.gesture.press_move(point, time, &self.geometry) {
            Some(PressMove::Dragged { location, started }) => {
                if started && self.animator.cancel().is_some() {
                    log::debug!("animation cancelled by drag");
                }
                self.apply_location(location);
                true
            }
            Some(PressMove::Pending) | None => false,
        }
    }

    /// Ends the press at `time` and acts on the release.
    ///
    /// Returns the decision taken, or `None` if no press was active.
    pub fn on_press_end(&mut self, time: u64) -> Option<ReleaseDecision> {
        let decision = self.gesture.press_end(time)?;
        match decision {
            ReleaseDecision::Toggle => {
                let kind = self.animator.heading().opposite();
                self.move_to(kind, true, None, Some(time));
            }
            ReleaseDecision::ForceToggle => {
                let kind = if self.geometry.nearer_open(self.animator.location()) {
                    AnimationKind::Open
                } else {
                    AnimationKind::Close
                };
                self.move_to(kind, true, None, Some(time));
            }
            ReleaseDecision::Open(velocity) => {
                self.move_to(AnimationKind::Open, true, Some(velocity), Some(time));
            }
            ReleaseDecision::Close(velocity) => {
                self.move_to(AnimationKind::Close, true, Some(velocity), Some(time));
            }
        }
        Some(decision)
    }

    /// Abandons the active press without toggling.
    ///
    /// A drawer left mid-drag animates back to the boundary it last settled at.
    pub fn on_press_cancel(&mut self) {
        if self.gesture.press_cancel() == Some(true) {
            log::debug!("drag cancelled at location {}", self.animator.location());
            let kind = self.settled_kind();
            self.move_to(kind, true, None, None);
        }
    }

    /// Services a frame delivered by the host at `now`.
    ///
    /// Frames that arrive with no animation in flight are ignored.
    pub fn on_frame(&mut self, now: u64) {
        self.frame_pending = false;
        let Some(tick) = self.animator.tick(now) else {
            log::trace!("frame at {now}: no animation");
            return;
        };
        log::trace!("frame at {now}: location {}", tick.location);
        self.write_location(tick.location);
        match tick.finished {
            Some(kind) => {
                log::debug!("animation to {kind:?} finished at {now}");
                self.emit_settled(kind);
            }
            None => self.request_frame(),
        }
    }

    /// Returns `true` once the drawer last settled at the open boundary.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.animator.opened()
    }

    /// Returns `true` while a press is active.
    #[must_use]
    pub fn is_pressed(&self) -> bool {
        self.gesture.is_pressed()
    }

    /// Returns `true` while following a confirmed drag.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.gesture.is_dragging()
    }

    /// Returns `true` while an animation is in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animator.is_animating()
    }

    /// Current interaction phase.
    #[must_use]
    pub fn phase(&self) -> DrawerPhase {
        if self.gesture.is_dragging() {
            return DrawerPhase::Dragging;
        }
        match (self.animator.job().map(|job| job.kind), self.animator.opened()) {
            (Some(AnimationKind::Open), _) => DrawerPhase::Opening,
            (Some(AnimationKind::Close), _) => DrawerPhase::Closing,
            (None, true) => DrawerPhase::Open,
            (None, false) => DrawerPhase::Closed,
        }
    }

    /// Configuration as currently applied.
    #[must_use]
    pub fn config(&self) -> &DrawerConfig {
        &self.config
    }

    /// The surface the drawer positions.
    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access to the surface, for example to change its content.
    ///
    /// Call [`refresh_layout`](Self::refresh_layout) afterwards if extents changed.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// The frame scheduler.
    #[must_use]
    pub fn frames(&self) -> &F {
        &self.frames
    }

    /// Mutable access to the frame scheduler.
    pub fn frames_mut(&mut self) -> &mut F {
        &mut self.frames
    }

    /// The notification listener.
    #[must_use]
    pub fn listener(&self) -> &L {
        &self.listener
    }

    /// Mutable access to the notification listener.
    pub fn listener_mut(&mut self) -> &mut L {
        &mut self.listener
    }

    /// Snapshot of the drawer's internal state for debugging and tooling.
    #[must_use]
    pub fn debug_info(&self) -> DrawerDebugInfo {
        DrawerDebugInfo {
            orientation: self.geometry.orientation,
            size: self.geometry.size,
            bar_thickness: self.geometry.bar_thickness,
            viewport_extent: self.geometry.viewport_extent,
            location: self.animator.location(),
            opened: self.animator.opened(),
            phase: self.phase(),
            pressed: self.gesture.is_pressed(),
            sample_count: self.gesture.sample_count(),
            job: self.animator.job().copied(),
            frame_pending: self.frame_pending,
        }
    }

    /// Heads for `kind`'s boundary. `start` pins the animation clock to the
    /// event that caused the move; without it the first frame starts the job.
    fn move_to(
        &mut self,
        kind: AnimationKind,
        animate: bool,
        velocity: Option<f64>,
        start: Option<u64>,
    ) {
        self.abandon_press();
        let size = self.geometry.size;
        if animate {
            if self.animator.is_settled_at(kind, size) {
                log::trace!("already settled at {kind:?}");
                return;
            }
            if self.animator.job().is_some_and(|job| job.kind == kind) {
                log::trace!("already animating to {kind:?}");
                return;
            }
        }
        match kind {
            AnimationKind::Open => self.listener.opening(),
            AnimationKind::Close => self.listener.closing(),
        }
        if !animate || size.is_nan() || size <= 0.0 {
            self.snap(kind);
            return;
        }
        let job = self
            .animator
            .plan(kind, size, velocity, self.config.duration, self.config.easing)
            .starting_at(start);
        log_job(&job);
        self.animator.start(job);
        self.request_frame();
    }

    fn snap(&mut self, kind: AnimationKind) {
        let location = self.animator.snap(kind, self.geometry.size);
        log::debug!("drawer snapped to {kind:?} at {location}");
        self.write_location(location);
        self.emit_settled(kind);
    }

    fn relayout(&mut self) {
        self.abandon_press();
        let running = self.animator.cancel();
        self.geometry = resolve_geometry(&self.config, &self.surface);
        self.apply_extents();
        if let Some(job) = running {
            self.retarget(job);
        } else if self.animator.opened() {
            self.snap(AnimationKind::Open);
        } else {
            let location = self.animator.snap(AnimationKind::Close, self.geometry.size);
            self.write_location(location);
        }
    }

    /// Restarts an animation interrupted by a layout change so it still ends
    /// at `job`'s boundary for the new size.
    ///
    /// A fling keeps its speed; an eased move restarts with the configured
    /// duration from where it was.
    fn retarget(&mut self, job: AnimationJob) {
        let size = self.geometry.size;
        if size.is_nan() || size <= 0.0 {
            self.snap(job.kind);
            return;
        }
        let location = self.geometry.clamp(self.animator.location());
        if location != self.animator.location() {
            self.animator.set_location(location);
            self.write_location(location);
        }
        let job = self.animator.plan(
            job.kind,
            size,
            job.velocity(),
            self.config.duration,
            self.config.easing,
        );
        log::debug!("animation retargeted after layout change");
        log_job(&job);
        self.animator.start(job);
        self.request_frame();
    }

    fn apply_extents(&mut self) {
        let axis = self.geometry.orientation.axis();
        self.surface.set_extent(axis, self.geometry.panel_extent());
        if self.config.full_extent {
            let cross = axis.cross();
            let extent = self.surface.viewport_extent(cross);
            self.surface.set_extent(cross, extent);
        }
    }

    fn apply_location(&mut self, location: f64) {
        self.animator.set_location(location);
        self.write_location(location);
        if let Some(kind) = self.animator.sync_bounds(self.geometry.size) {
            self.emit_settled(kind);
        }
    }

    fn write_location(&mut self, location: f64) {
        self.surface.set_offset(self.geometry.orientation, location);
        self.listener.location_changed(location);
    }

    fn emit_settled(&mut self, kind: AnimationKind) {
        match kind {
            AnimationKind::Open => self.listener.opened(),
            AnimationKind::Close => self.listener.closed(),
        }
    }

    fn settled_kind(&self) -> AnimationKind {
        if self.animator.opened() {
            AnimationKind::Open
        } else {
            AnimationKind::Close
        }
    }

    fn abandon_press(&mut self) {
        if self.gesture.press_cancel().is_some() {
            log::debug!("active press abandoned");
        }
    }

    fn request_frame(&mut self) {
        if !self.frame_pending {
            self.frame_pending = true;
            self.frames.request_frame();
        }
    }
}

fn resolve_geometry<S: Surface>(config: &DrawerConfig, surface: &S) -> Geometry {
    let axis = config.orientation.axis();
    Geometry {
        orientation: config.orientation,
        size: config.size.unwrap_or_else(|| surface.content_extent(axis)),
        bar_thickness: config.bar_thickness,
        viewport_extent: surface.viewport_extent(axis),
    }
}

fn log_job(job: &AnimationJob) {
    log::debug!(
        "animating {:?} from {} to {} over {} ms ({:?})",
        job.kind,
        job.start_location,
        job.end_location,
        job.duration,
        job.motion
    );
}

/// Debug snapshot of a [`Drawer`].
#[derive(Clone, Copy, Debug)]
pub struct DrawerDebugInfo {
    /// Anchored edge.
    pub orientation: Orientation,
    /// Open extent.
    pub size: f64,
    /// Drag handle thickness.
    pub bar_thickness: f64,
    /// Viewport extent along the drawer's axis.
    pub viewport_extent: f64,
    /// Current location.
    pub location: f64,
    /// Last settled boundary was the open one.
    pub opened: bool,
    /// Interaction phase.
    pub phase: DrawerPhase,
    /// A press is active.
    pub pressed: bool,
    /// Drag samples recorded for the active press.
    pub sample_count: usize,
    /// Animation in flight, if any.
    pub job: Option<AnimationJob>,
    /// A frame has been requested and not yet serviced.
    pub frame_pending: bool,
}
