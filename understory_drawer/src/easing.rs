// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Easing curves for fixed-duration drawer animations.

use core::str::FromStr;

use crate::error::UnknownEasing;

/// Easing curve mapping linear progress in `[0, 1]` to eased progress.
///
/// The quadratic-feeling `EaseIn`/`EaseOut`/`EaseInOut` variants are the CSS
/// cubic-bezier keywords; the cubic variants are plain polynomials.
///
/// ```
/// use understory_drawer::Easing;
///
/// let eased = Easing::EaseOut.apply(0.5);
/// assert!(eased > 0.5);
///
/// let custom: Easing = Easing::Custom(|t| t * t);
/// assert_eq!(custom.apply(0.5), 0.25);
///
/// assert!(matches!("ease-in-out".parse::<Easing>(), Ok(Easing::EaseInOut)));
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub enum Easing {
    /// Constant speed.
    Linear,
    /// `cubic-bezier(0.42, 0, 1, 1)`.
    EaseIn,
    /// `cubic-bezier(0, 0, 0.58, 1)`.
    EaseOut,
    /// `cubic-bezier(0.42, 0, 0.58, 1)`: slow at both ends, symmetric.
    #[default]
    EaseInOut,
    /// `t³`
    EaseInCubic,
    /// `1 - (1-t)³`
    EaseOutCubic,
    /// Piecewise cubic, slow at both ends.
    EaseInOutCubic,
    /// Caller-supplied curve. Input is clamped to `[0, 1]`, output is used as is.
    Custom(fn(f64) -> f64),
}

impl Easing {
    /// Apply the easing function to linear progress.
    ///
    /// Input `t` is clamped to `[0.0, 1.0]`.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseIn => cubic_bezier(0.42, 0.0, 1.0, 1.0, t),
            Self::EaseOut => cubic_bezier(0.0, 0.0, 0.58, 1.0, t),
            Self::EaseInOut => cubic_bezier(0.42, 0.0, 0.58, 1.0, t),
            Self::EaseInCubic => t * t * t,
            Self::EaseOutCubic => {
                let u = 1.0 - t;
                1.0 - u * u * u
            }
            Self::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - u * u * u / 2.0
                }
            }
            Self::Custom(f) => f(t),
        }
    }

    /// Name accepted by [`Easing::from_str`], or `"custom"`.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::EaseIn => "ease-in",
            Self::EaseOut => "ease-out",
            Self::EaseInOut => "ease-in-out",
            Self::EaseInCubic => "ease-in-cubic",
            Self::EaseOutCubic => "ease-out-cubic",
            Self::EaseInOutCubic => "ease-in-out-cubic",
            Self::Custom(_) => "custom",
        }
    }
}

impl FromStr for Easing {
    type Err = UnknownEasing;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let named = [
            Self::Linear,
            Self::EaseIn,
            Self::EaseOut,
            Self::EaseInOut,
            Self::EaseInCubic,
            Self::EaseOutCubic,
            Self::EaseInOutCubic,
        ];
        let wanted = s.trim();
        named
            .into_iter()
            .find(|e| {
                e.name().len() == wanted.len()
                    && e.name()
                        .bytes()
                        .zip(wanted.bytes())
                        .all(|(a, b)| a == b.to_ascii_lowercase() || (a == b'-' && b == b'_'))
            })
            .ok_or_else(|| UnknownEasing::new(s))
    }
}

/// Solves the CSS cubic-bezier timing curve for `fraction`.
fn cubic_bezier(x1: f64, y1: f64, x2: f64, y2: f64, fraction: f64) -> f64 {
    if fraction <= 0.0 {
        return 0.0;
    }
    if fraction >= 1.0 {
        return 1.0;
    }

    let cx = 3.0 * x1;
    let bx = 3.0 * (x2 - x1) - cx;
    let ax = 1.0 - cx - bx;

    let cy = 3.0 * y1;
    let by = 3.0 * (y2 - y1) - cy;
    let ay = 1.0 - cy - by;

    fn sample_curve(a: f64, b: f64, c: f64, t: f64) -> f64 {
        ((a * t + b) * t + c) * t
    }

    fn sample_derivative(a: f64, b: f64, c: f64, t: f64) -> f64 {
        (3.0 * a * t + 2.0 * b) * t + c
    }

    // Newton-Raphson on x(t) = fraction, with bisection as the fallback.
    let mut t = fraction;
    let mut converged = false;
    for _ in 0..8 {
        let x = sample_curve(ax, bx, cx, t) - fraction;
        if x.abs() < 1e-7 {
            converged = true;
            break;
        }
        let dx = sample_derivative(ax, bx, cx, t);
        if dx.abs() < 1e-7 {
            break;
        }
        t = (t - x / dx).clamp(0.0, 1.0);
    }

    if !converged {
        let mut lo = 0.0;
        let mut hi = 1.0;
        t = fraction;
        for _ in 0..32 {
            let delta = sample_curve(ax, bx, cx, t) - fraction;
            if delta.abs() < 1e-7 {
                break;
            }
            if delta > 0.0 {
                hi = t;
            } else {
                lo = t;
            }
            t = 0.5 * (lo + hi);
        }
    }

    sample_curve(ay, by, cy, t)
}
