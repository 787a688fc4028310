// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types.

use alloc::string::{String, ToString};
use core::fmt;

/// Error returned when a string does not name a drawer edge.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseOrientationError {
    name: String,
}

impl ParseOrientationError {
    pub(crate) fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }

    /// The rejected input.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for ParseOrientationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid drawer orientation {:?} (expected left, right, top or bottom)",
            self.name
        )
    }
}

impl core::error::Error for ParseOrientationError {}

/// Error returned when a string does not name a built-in easing curve.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownEasing {
    name: String,
}

impl UnknownEasing {
    pub(crate) fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }

    /// The rejected input.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for UnknownEasing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown easing curve {:?}", self.name)
    }
}

impl core::error::Error for UnknownEasing {}

/// Error returned when a [`DrawerConfig`](crate::DrawerConfig) holds an
/// unusable value.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// A numeric option is NaN or infinite.
    NonFinite {
        /// Name of the offending option.
        field: &'static str,
    },
    /// A numeric option that must be non-negative is negative.
    Negative {
        /// Name of the offending option.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// The velocity recency window is zero, so no release can ever fling.
    EmptyVelocityWindow,
}

impl ConfigError {
    pub(crate) fn check_non_negative(field: &'static str, value: f64) -> Result<(), Self> {
        if !value.is_finite() {
            return Err(Self::NonFinite { field });
        }
        if value < 0.0 {
            return Err(Self::Negative { field, value });
        }
        Ok(())
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinite { field } => write!(f, "drawer option `{field}` must be finite"),
            Self::Negative { field, value } => {
                write!(f, "drawer option `{field}` must not be negative (got {value})")
            }
            Self::EmptyVelocityWindow => f.write_str("drawer velocity window must be non-zero"),
        }
    }
}

impl core::error::Error for ConfigError {}
