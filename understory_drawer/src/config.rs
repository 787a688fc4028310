// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drawer construction options and their validation.

use crate::easing::Easing;
use crate::error::ConfigError;
use crate::geometry::Orientation;

/// Construction options for a [`Drawer`](crate::Drawer).
///
/// All fields are public; the `with_*` methods are chainable shorthands.
///
/// ```
/// use understory_drawer::{DrawerConfig, Orientation};
///
/// let config = DrawerConfig::default()
///     .with_orientation(Orientation::Bottom)
///     .with_size(240.0)
///     .with_initially_open(true);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.duration, 500.0);
/// ```
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DrawerConfig {
    /// Edge the drawer is anchored to.
    pub orientation: Orientation,
    /// Open extent. `None` derives it from the surface's content extent.
    pub size: Option<f64>,
    /// Thickness of the drag handle.
    pub bar_thickness: f64,
    /// Whether the panel spans the viewport's full cross-axis extent.
    pub full_extent: bool,
    /// Whether the drawer starts open.
    pub initially_open: bool,
    /// Whether pointer input is handled. When `false` the drawer is
    /// programmatic-only.
    pub interactive: bool,
    /// Curve for fixed-duration animations.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub easing: Easing,
    /// Duration of fixed-duration animations, in milliseconds.
    pub duration: f64,
    /// Distance a press must move along the drawer's axis before it is a drag.
    pub drag_threshold: f64,
    /// How far back, in milliseconds, release velocity looks.
    pub velocity_window: u64,
    /// Smallest fling speed, in units per millisecond. Slower nonzero
    /// releases are sped up to this.
    pub min_fling_velocity: f64,
}

impl Default for DrawerConfig {
    fn default() -> Self {
        Self {
            orientation: Orientation::Left,
            size: None,
            bar_thickness: 20.0,
            full_extent: false,
            initially_open: false,
            interactive: true,
            easing: Easing::EaseInOut,
            duration: 500.0,
            drag_threshold: 10.0,
            velocity_window: 100,
            min_fling_velocity: 0.1,
        }
    }
}

impl DrawerConfig {
    /// Sets the anchored edge.
    #[must_use]
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Sets an explicit open extent instead of deriving it from content.
    #[must_use]
    pub fn with_size(mut self, size: f64) -> Self {
        self.size = Some(size);
        self
    }

    /// Sets the drag handle thickness.
    #[must_use]
    pub fn with_bar_thickness(mut self, bar_thickness: f64) -> Self {
        self.bar_thickness = bar_thickness;
        self
    }

    /// Makes the panel span the full cross-axis extent.
    #[must_use]
    pub fn with_full_extent(mut self, full_extent: bool) -> Self {
        self.full_extent = full_extent;
        self
    }

    /// Starts the drawer open.
    #[must_use]
    pub fn with_initially_open(mut self, initially_open: bool) -> Self {
        self.initially_open = initially_open;
        self
    }

    /// Enables or disables pointer handling.
    #[must_use]
    pub fn with_interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    /// Sets the easing curve.
    #[must_use]
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Sets the fixed animation duration in milliseconds.
    #[must_use]
    pub fn with_duration(mut self, duration: f64) -> Self {
        self.duration = duration;
        self
    }

    /// Sets the tap/drag slop.
    #[must_use]
    pub fn with_drag_threshold(mut self, drag_threshold: f64) -> Self {
        self.drag_threshold = drag_threshold;
        self
    }

    /// Sets the velocity recency window in milliseconds.
    #[must_use]
    pub fn with_velocity_window(mut self, velocity_window: u64) -> Self {
        self.velocity_window = velocity_window;
        self
    }

    /// Sets the minimum fling speed in units per millisecond.
    #[must_use]
    pub fn with_min_fling_velocity(mut self, min_fling_velocity: f64) -> Self {
        self.min_fling_velocity = min_fling_velocity;
        self
    }

    /// Checks that every numeric option is usable.
    ///
    /// `size` is not checked: a drawer with a non-positive size never
    /// animates and only snaps.
    pub fn validate(&self) -> Result<(), ConfigError> {
        ConfigError::check_non_negative("bar_thickness", self.bar_thickness)?;
        ConfigError::check_non_negative("duration", self.duration)?;
        ConfigError::check_non_negative("drag_threshold", self.drag_threshold)?;
        ConfigError::check_non_negative("min_fling_velocity", self.min_fling_velocity)?;
        if self.velocity_window == 0 {
            return Err(ConfigError::EmptyVelocityWindow);
        }
        Ok(())
    }
}
