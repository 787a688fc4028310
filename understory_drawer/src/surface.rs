// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The rendering surface a drawer positions.
//!
//! The drawer core never touches a document, widget tree, or style system.
//! It only asks its [`Surface`] to anchor the panel to an edge, move it along
//! its axis, and report extents. Hosts implement the trait on top of whatever
//! they render with; [`HeadlessSurface`] is an in-memory implementation for
//! tests and headless use.

use kurbo::Size;

use crate::geometry::{Axis, Orientation};

/// Rendering capability a drawer manipulates.
pub trait Surface {
    /// Anchors the panel to `orientation`'s edge.
    ///
    /// Called once at construction and again on every orientation change.
    /// Implementations drop any offset applied for a previous edge.
    fn mount(&mut self, orientation: Orientation, full_extent: bool);

    /// Places the panel's leading edge `value` units from `edge`.
    fn set_offset(&mut self, edge: Orientation, value: f64);

    /// Sets the panel's extent along `axis`.
    fn set_extent(&mut self, axis: Axis, value: f64);

    /// Natural extent of the panel content along `axis`.
    fn content_extent(&self, axis: Axis) -> f64;

    /// Extent of the viewport the panel is attached to along `axis`.
    fn viewport_extent(&self, axis: Axis) -> f64;
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn mount(&mut self, orientation: Orientation, full_extent: bool) {
        (**self).mount(orientation, full_extent);
    }

    fn set_offset(&mut self, edge: Orientation, value: f64) {
        (**self).set_offset(edge, value);
    }

    fn set_extent(&mut self, axis: Axis, value: f64) {
        (**self).set_extent(axis, value);
    }

    fn content_extent(&self, axis: Axis) -> f64 {
        (**self).content_extent(axis)
    }

    fn viewport_extent(&self, axis: Axis) -> f64 {
        (**self).viewport_extent(axis)
    }
}

/// In-memory [`Surface`] with fixed viewport and content sizes.
///
/// It remembers the last edge, offset and extents it was given so callers can
/// inspect what a drawer did.
///
/// ```
/// use kurbo::Size;
/// use understory_drawer::{Axis, HeadlessSurface, Orientation, Surface};
///
/// let mut surface = HeadlessSurface::new(Size::new(800.0, 600.0), Size::new(250.0, 600.0));
/// surface.mount(Orientation::Left, false);
/// surface.set_offset(Orientation::Left, -250.0);
///
/// assert_eq!(surface.offset(), Some((Orientation::Left, -250.0)));
/// assert_eq!(surface.content_extent(Axis::Horizontal), 250.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct HeadlessSurface {
    viewport: Size,
    content: Size,
    edge: Option<Orientation>,
    full_extent: bool,
    offset: Option<(Orientation, f64)>,
    panel: (Option<f64>, Option<f64>),
    mounts: usize,
}

impl HeadlessSurface {
    /// Creates a surface in a `viewport` holding content of size `content`.
    #[must_use]
    pub fn new(viewport: Size, content: Size) -> Self {
        Self {
            viewport,
            content,
            edge: None,
            full_extent: false,
            offset: None,
            panel: (None, None),
            mounts: 0,
        }
    }

    /// Replaces the content size, as if the panel's children changed.
    pub fn set_content(&mut self, content: Size) {
        self.content = content;
    }

    /// Replaces the viewport size, as if the host window was resized.
    pub fn set_viewport(&mut self, viewport: Size) {
        self.viewport = viewport;
    }

    /// Edge the panel is mounted on, if mounted.
    #[must_use]
    pub fn edge(&self) -> Option<Orientation> {
        self.edge
    }

    /// Whether the panel was mounted spanning the full cross axis.
    #[must_use]
    pub fn is_full_extent(&self) -> bool {
        self.full_extent
    }

    /// Last offset applied since the most recent mount.
    #[must_use]
    pub fn offset(&self) -> Option<(Orientation, f64)> {
        self.offset
    }

    /// Last extent applied along `axis`.
    #[must_use]
    pub fn extent(&self, axis: Axis) -> Option<f64> {
        match axis {
            Axis::Horizontal => self.panel.0,
            Axis::Vertical => self.panel.1,
        }
    }

    /// Number of times the panel was mounted.
    #[must_use]
    pub fn mounts(&self) -> usize {
        self.mounts
    }
}

fn along(size: Size, axis: Axis) -> f64 {
    match axis {
        Axis::Horizontal => size.width,
        Axis::Vertical => size.height,
    }
}

impl Surface for HeadlessSurface {
    fn mount(&mut self, orientation: Orientation, full_extent: bool) {
        self.edge = Some(orientation);
        self.full_extent = full_extent;
        self.offset = None;
        self.mounts += 1;
    }

    fn set_offset(&mut self, edge: Orientation, value: f64) {
        self.offset = Some((edge, value));
    }

    fn set_extent(&mut self, axis: Axis, value: f64) {
        match axis {
            Axis::Horizontal => self.panel.0 = Some(value),
            Axis::Vertical => self.panel.1 = Some(value),
        }
    }

    fn content_extent(&self, axis: Axis) -> f64 {
        along(self.content, axis)
    }

    fn viewport_extent(&self, axis: Axis) -> f64 {
        along(self.viewport, axis)
    }
}
