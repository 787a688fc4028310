// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Edge orientation and the pointer-to-location math for each edge.

use core::fmt;
use core::str::FromStr;

use kurbo::Point;
use understory_event_state::drag::DragAxis;

use crate::error::ParseOrientationError;

/// Layout axis of a drawer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Axis {
    /// X axis.
    Horizontal,
    /// Y axis.
    Vertical,
}

impl Axis {
    /// The perpendicular axis.
    #[must_use]
    pub fn cross(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }

    /// Picks this axis' coordinate out of `point`.
    #[must_use]
    pub fn coordinate(self, point: Point) -> f64 {
        match self {
            Self::Horizontal => point.x,
            Self::Vertical => point.y,
        }
    }

    /// The slop axis used to tell taps from drags along this axis.
    #[must_use]
    pub fn drag_axis(self) -> DragAxis {
        match self {
            Self::Horizontal => DragAxis::Horizontal,
            Self::Vertical => DragAxis::Vertical,
        }
    }
}

/// Viewport edge a drawer is anchored to.
///
/// Deserialization goes through [`FromStr`], so it accepts the same
/// whitespace and case variations as parsing a name.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Orientation {
    /// Slides in from the left edge.
    #[default]
    Left,
    /// Slides in from the right edge.
    Right,
    /// Slides down from the top edge.
    Top,
    /// Slides up from the bottom edge.
    Bottom,
}

impl Orientation {
    /// All four edges.
    pub const ALL: [Self; 4] = [Self::Left, Self::Right, Self::Top, Self::Bottom];

    /// Axis along which the drawer moves.
    #[must_use]
    pub fn axis(self) -> Axis {
        match self {
            Self::Left | Self::Right => Axis::Horizontal,
            Self::Top | Self::Bottom => Axis::Vertical,
        }
    }

    /// Returns `true` for edges at the far end of their axis (right, bottom),
    /// where distances are measured back from the viewport extent.
    #[must_use]
    pub fn is_far_edge(self) -> bool {
        matches!(self, Self::Right | Self::Bottom)
    }

    /// Lowercase edge name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Top => "top",
            Self::Bottom => "bottom",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Orientation {
    type Err = ParseOrientationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|o| o.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseOrientationError::new(s))
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Orientation {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(OrientationVisitor)
    }
}

#[cfg(feature = "serde")]
struct OrientationVisitor;

#[cfg(feature = "serde")]
impl serde::de::Visitor<'_> for OrientationVisitor {
    type Value = Orientation;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a drawer edge name (left, right, top or bottom)")
    }

    fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<Orientation, E> {
        v.parse().map_err(E::custom)
    }
}

/// Resolved geometry of a drawer on its edge.
///
/// `location` values are offsets of the panel's leading edge from the open
/// position: `0.0` is fully open and `-size` is fully closed.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Geometry {
    /// Edge the drawer is anchored to.
    pub orientation: Orientation,
    /// Extent of the panel content when open.
    pub size: f64,
    /// Thickness of the drag handle that stays visible when closed.
    pub bar_thickness: f64,
    /// Extent of the viewport along the drawer's axis.
    pub viewport_extent: f64,
}

impl Geometry {
    /// Location of the fully closed drawer.
    #[must_use]
    pub fn closed_location(&self) -> f64 {
        -self.size
    }

    /// Total panel extent along the axis: content plus handle.
    #[must_use]
    pub fn panel_extent(&self) -> f64 {
        self.size + self.bar_thickness
    }

    /// Clamps `location` into `[-size, 0]`.
    ///
    /// NaN collapses to the closed location. A non-positive size pins every
    /// location to `0`.
    #[must_use]
    pub fn clamp(&self, location: f64) -> f64 {
        let min = self.closed_location().min(0.0);
        location.max(min).min(0.0)
    }

    /// Distance of `point` from the anchored edge along the drawer's axis.
    #[must_use]
    pub fn edge_distance(&self, point: Point) -> f64 {
        let coordinate = self.orientation.axis().coordinate(point);
        if self.orientation.is_far_edge() {
            self.viewport_extent - coordinate
        } else {
            coordinate
        }
    }

    /// Location that puts the middle of the handle under `point`, clamped.
    #[must_use]
    pub fn location_for_pointer(&self, point: Point) -> f64 {
        self.clamp(self.edge_distance(point) - self.bar_thickness / 2.0 - self.size)
    }

    /// Returns `true` if `location` is past the midpoint toward the open edge.
    #[must_use]
    pub fn nearer_open(&self, location: f64) -> bool {
        location > -self.size / 2.0
    }
}
