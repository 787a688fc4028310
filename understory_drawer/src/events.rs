// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drawer lifecycle notifications.

use alloc::vec::Vec;

/// A notification emitted by a drawer.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum DrawerEvent {
    /// An open began, animated or not.
    Opening,
    /// A close began, animated or not.
    Closing,
    /// The drawer settled fully open.
    Opened,
    /// The drawer settled fully closed.
    Closed,
    /// The location changed to the given value.
    LocationChanged(f64),
}

/// Callback sink for drawer notifications.
///
/// Every method has an empty default, so hosts only implement what they use.
/// `Vec<DrawerEvent>` records everything, and `()` ignores everything.
pub trait DrawerListener {
    /// See [`DrawerEvent::Opening`].
    fn opening(&mut self) {}

    /// See [`DrawerEvent::Closing`].
    fn closing(&mut self) {}

    /// See [`DrawerEvent::Opened`].
    fn opened(&mut self) {}

    /// See [`DrawerEvent::Closed`].
    fn closed(&mut self) {}

    /// See [`DrawerEvent::LocationChanged`].
    fn location_changed(&mut self, location: f64) {
        let _ = location;
    }
}

impl DrawerListener for () {}

impl DrawerListener for Vec<DrawerEvent> {
    fn opening(&mut self) {
        self.push(DrawerEvent::Opening);
    }

    fn closing(&mut self) {
        self.push(DrawerEvent::Closing);
    }

    fn opened(&mut self) {
        self.push(DrawerEvent::Opened);
    }

    fn closed(&mut self) {
        self.push(DrawerEvent::Closed);
    }

    fn location_changed(&mut self, location: f64) {
        self.push(DrawerEvent::LocationChanged(location));
    }
}

impl<L: DrawerListener + ?Sized> DrawerListener for &mut L {
    fn opening(&mut self) {
        (**self).opening();
    }

    fn closing(&mut self) {
        (**self).closing();
    }

    fn opened(&mut self) {
        (**self).opened();
    }

    fn closed(&mut self) {
        (**self).closed();
    }

    fn location_changed(&mut self, location: f64) {
        (**self).location_changed(location);
    }
}
