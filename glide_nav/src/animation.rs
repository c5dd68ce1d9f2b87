// Copyright 2025 the Glide Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use glide_interp::{interpolate_position, interpolate_zoom, progress};
use glide_timing::FrameHandle;
use kurbo::Point;

/// Time-parameterized camera transition state.
///
/// One instance lives for the engine's lifetime. Position and zoom are
/// interpolated as independent start/target pairs sharing one progress
/// clock, which is what lets a single animation pan and zoom to a focus
/// point simultaneously. Degenerate pairs (start equal to target) are
/// still sampled every frame rather than elided: an external writer that
/// mutates the store mid-animation is overwritten on the next tick, same
/// as for any other animation.
#[derive(Clone, Copy, Debug)]
pub(crate) struct AnimationState {
    pub(crate) is_animating: bool,
    pub(crate) start_time: f64,
    pub(crate) duration_ms: f64,
    pub(crate) start_position: Point,
    pub(crate) target_position: Point,
    pub(crate) start_zoom: f64,
    pub(crate) target_zoom: f64,
    pub(crate) frame: Option<FrameHandle>,
}

impl Default for AnimationState {
    fn default() -> Self {
        Self {
            is_animating: false,
            start_time: 0.0,
            duration_ms: 0.0,
            start_position: Point::ZERO,
            target_position: Point::ZERO,
            start_zoom: 1.0,
            target_zoom: 1.0,
            frame: None,
        }
    }
}

impl AnimationState {
    /// Starts a transition from the given start pair to the target pair.
    ///
    /// The frame handle is the caller's to fill in when it schedules the
    /// first tick.
    pub(crate) fn begin(
        &mut self,
        now: f64,
        duration_ms: f64,
        start_position: Point,
        target_position: Point,
        start_zoom: f64,
        target_zoom: f64,
    ) {
        self.is_animating = true;
        self.start_time = now;
        self.duration_ms = duration_ms;
        self.start_position = start_position;
        self.target_position = target_position;
        self.start_zoom = start_zoom;
        self.target_zoom = target_zoom;
    }

    /// Samples the transition at `now`.
    ///
    /// Returns the position and zoom to write, plus whether the transition
    /// is complete. On completion the exact targets are returned — never
    /// the last interpolated value — to avoid floating-point
    /// short-of-target artifacts. A zero duration completes on its first
    /// sample without dividing by zero.
    pub(crate) fn sample(&self, now: f64) -> (Point, f64, bool) {
        let t = progress(now - self.start_time, self.duration_ms);
        if t >= 1.0 {
            (self.target_position, self.target_zoom, true)
        } else {
            (
                interpolate_position(self.start_position, self.target_position, t),
                interpolate_zoom(self.start_zoom, self.target_zoom, t),
                false,
            )
        }
    }
}
