// Copyright 2025 the Glide Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use glide_timing::FrameHandle;
use kurbo::Vec2;

/// Inertial deceleration state.
///
/// One instance lives for the engine's lifetime. It becomes live when a
/// gesture hands off a velocity above the threshold, decays that velocity
/// with exponential friction each tick, and self-terminates (resetting to
/// inert defaults) once speed drops below the threshold.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct MomentumState {
    pub(crate) velocity: Vec2,
    pub(crate) is_decelerating: bool,
    pub(crate) last_update_time: f64,
    pub(crate) frame: Option<FrameHandle>,
}

impl MomentumState {
    /// Attempts to start decelerating from a hand-off velocity.
    ///
    /// Momentum only starts when the Euclidean speed exceeds `threshold`;
    /// otherwise the state resets to zero and no tick is ever scheduled.
    /// Returns whether momentum started. The frame handle is the caller's
    /// to fill in when it schedules the first tick.
    pub(crate) fn begin(&mut self, velocity: Vec2, now: f64, threshold: f64) -> bool {
        if velocity.hypot() > threshold {
            self.velocity = velocity;
            self.is_decelerating = true;
            self.last_update_time = now;
            true
        } else {
            self.reset();
            false
        }
    }

    /// Advances one deceleration tick, returning the viewport displacement.
    ///
    /// Velocity decays by the `friction` multiplier, then displaces by
    /// `velocity * delta_time`. When the decayed speed falls below
    /// `threshold` the state zeroes itself and stops; the caller must not
    /// schedule another tick in that case (checked via
    /// [`is_decelerating`](Self::is_decelerating)).
    pub(crate) fn step(&mut self, now: f64, friction: f64, threshold: f64) -> Vec2 {
        let delta_time = (now - self.last_update_time) / 1000.0;
        self.last_update_time = now;

        // Exponential decay: higher-friction configs converge faster but
        // never in a fixed number of ticks.
        self.velocity *= friction;
        let displacement = self.velocity * delta_time;

        if self.velocity.hypot() < threshold {
            self.velocity = Vec2::ZERO;
            self.is_decelerating = false;
        }

        displacement
    }

    /// Resets to inert defaults. The frame handle is cleared; cancelling
    /// the underlying callback is the caller's job.
    pub(crate) fn reset(&mut self) {
        self.velocity = Vec2::ZERO;
        self.is_decelerating = false;
        self.last_update_time = 0.0;
        self.frame = None;
    }
}
