// Copyright 2025 the Glide Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Glide Interp: interpolation primitives for viewport animation.
//!
//! This crate provides the small, pure functions that Glide's animation
//! driver samples every frame:
//!
//! - [`lerp`]: scalar linear interpolation, exact at both endpoints.
//! - [`interpolate_position`] / [`interpolate_zoom`]: the position and zoom
//!   counterparts used by camera transitions. Position and zoom are always
//!   interpolated as independent start/target pairs so that a single
//!   progress clock can drive "pan and zoom to a point" in one animation.
//! - [`progress`]: normalized `[0, 1]` time fraction through a
//!   fixed-duration animation, with an explicit zero-duration guard.
//! - [`ease_in_out`]: smoothstep easing for hosts that want to pre-shape
//!   progress before sampling.
//!
//! ## Contract
//!
//! Every interpolation here is monotonic in `t`, returns `start` exactly at
//! `t = 0`, and returns `end` exactly at `t = 1`. Callers that need the
//! target hit precisely (avoiding floating-point short-of-target artifacts)
//! should still write the target value outright on their final frame;
//! Glide's animation driver does.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use glide_interp::{interpolate_position, progress};
//!
//! let start = Point::new(0.0, 0.0);
//! let end = Point::new(100.0, 50.0);
//!
//! let t = progress(150.0, 300.0); // 150ms into a 300ms animation
//! assert_eq!(t, 0.5);
//!
//! let mid = interpolate_position(start, end, t);
//! assert_eq!(mid, Point::new(50.0, 25.0));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

use kurbo::Point;

/// Linearly interpolates between `a` and `b`.
///
/// Exact at the endpoints: `lerp(a, b, 0.0) == a` and `lerp(a, b, 1.0) == b`.
/// Values of `t` outside `[0, 1]` extrapolate; callers that need clamped
/// behavior should clamp `t` first (see [`progress`]).
#[must_use]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Interpolates a position between `start` and `end` at fraction `t`.
#[must_use]
pub fn interpolate_position(start: Point, end: Point, t: f64) -> Point {
    Point::new(lerp(start.x, end.x, t), lerp(start.y, end.y, t))
}

/// Interpolates a zoom factor between `start` and `end` at fraction `t`.
///
/// Zoom is interpolated as a plain scalar. The start/target pair is
/// independent of any position interpolation sharing the same progress
/// clock.
#[must_use]
pub fn interpolate_zoom(start: f64, end: f64, t: f64) -> f64 {
    lerp(start, end, t)
}

/// Normalized `[0, 1]` progress through a fixed-duration animation.
///
/// `elapsed_ms` is the time since the animation started. A `duration_ms`
/// of zero (or less) completes immediately, returning `1.0` without
/// dividing by zero. Negative elapsed time clamps to `0.0`.
///
/// ```rust
/// use glide_interp::progress;
///
/// assert_eq!(progress(0.0, 300.0), 0.0);
/// assert_eq!(progress(450.0, 300.0), 1.0);
/// assert_eq!(progress(10.0, 0.0), 1.0);
/// ```
#[must_use]
pub fn progress(elapsed_ms: f64, duration_ms: f64) -> f64 {
    if duration_ms <= 0.0 {
        return 1.0;
    }
    (elapsed_ms / duration_ms).clamp(0.0, 1.0)
}

/// Smoothstep ease-in-out over `[0, 1]`.
///
/// Monotonic, with `ease_in_out(0.0) == 0.0` and `ease_in_out(1.0) == 1.0`.
/// Input is clamped to `[0, 1]`.
#[must_use]
pub fn ease_in_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

#[cfg(test)]
mod tests {
    use kurbo::Point;

    use super::{ease_in_out, interpolate_position, interpolate_zoom, lerp, progress};

    #[test]
    fn lerp_is_exact_at_endpoints() {
        assert_eq!(lerp(2.0, 7.0, 0.0), 2.0);
        assert_eq!(lerp(2.0, 7.0, 1.0), 7.0);
        assert_eq!(lerp(-1.0, 1.0, 0.5), 0.0);
    }

    #[test]
    fn position_interpolation_is_componentwise() {
        let start = Point::new(100.0, 50.0);
        let end = Point::new(0.0, 150.0);

        assert_eq!(interpolate_position(start, end, 0.0), start);
        assert_eq!(interpolate_position(start, end, 1.0), end);

        let mid = interpolate_position(start, end, 0.5);
        assert_eq!(mid, Point::new(50.0, 100.0));
    }

    #[test]
    fn zoom_interpolation_is_independent_of_position() {
        // Same progress clock, different start/target pairs.
        let t = 0.25;
        let pos = interpolate_position(Point::ZERO, Point::new(40.0, 0.0), t);
        let zoom = interpolate_zoom(1.0, 3.0, t);
        assert_eq!(pos.x, 10.0);
        assert_eq!(zoom, 1.5);
    }

    #[test]
    fn degenerate_pair_stays_put_at_any_progress() {
        // A start == target pair must keep returning the same value so that
        // a running interpolation loop over it is observably a rewrite, not
        // a no-op elision.
        let p = Point::new(12.0, -3.0);
        for t in [0.0, 0.3, 0.99, 1.0] {
            assert_eq!(interpolate_position(p, p, t), p);
            assert_eq!(interpolate_zoom(2.0, 2.0, t), 2.0);
        }
    }

    #[test]
    fn progress_clamps_and_guards_zero_duration() {
        assert_eq!(progress(-5.0, 100.0), 0.0);
        assert_eq!(progress(50.0, 100.0), 0.5);
        assert_eq!(progress(100.0, 100.0), 1.0);
        assert_eq!(progress(1e9, 100.0), 1.0);

        // Zero and negative durations complete in a single tick.
        assert_eq!(progress(0.0, 0.0), 1.0);
        assert_eq!(progress(0.0, -16.0), 1.0);
    }

    #[test]
    fn ease_in_out_is_monotonic_and_exact_at_endpoints() {
        assert_eq!(ease_in_out(0.0), 0.0);
        assert_eq!(ease_in_out(1.0), 1.0);
        assert_eq!(ease_in_out(0.5), 0.5);

        let mut prev = 0.0;
        for i in 1..=100 {
            let t = f64::from(i) / 100.0;
            let v = ease_in_out(t);
            assert!(v >= prev, "easing must be monotonic");
            prev = v;
        }
    }
}
