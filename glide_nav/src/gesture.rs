// Copyright 2025 the Glide Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Vec2};

use crate::config::NavigationConfig;

/// Blend factor for exponential velocity smoothing: 30% new sample,
/// 70% running estimate. Smoothing keeps discrete pointer sampling jitter
/// out of the momentum hand-off.
const VELOCITY_SMOOTHING: f64 = 0.3;

/// Kind of direct-manipulation gesture being tracked.
///
/// Only [`Pan`](GestureType::Pan) moves the viewport. The other variants
/// are tracked (positions, timestamps, velocity) but intentionally do not
/// write to the store; their viewport behavior is not defined at this
/// layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum GestureType {
    /// Single-pointer pan: the viewport tracks hand motion 1:1.
    #[default]
    Pan,
    /// Zoom gesture tag. Tracked but does not move the viewport.
    Zoom,
    /// Pinch gesture tag. Tracked but does not move the viewport.
    Pinch,
}

/// Live gesture-tracking state.
///
/// One instance lives for the engine's lifetime, mutated in place: created
/// on gesture start, updated per pointer sample, consumed and reset on
/// gesture end.
#[derive(Clone, Copy, Debug)]
pub(crate) struct GestureState {
    pub(crate) is_active: bool,
    pub(crate) start_position: Point,
    pub(crate) current_position: Point,
    pub(crate) velocity: Vec2,
    pub(crate) last_timestamp: f64,
    pub(crate) gesture_type: Option<GestureType>,
}

impl Default for GestureState {
    fn default() -> Self {
        Self {
            is_active: false,
            start_position: Point::ZERO,
            current_position: Point::ZERO,
            velocity: Vec2::ZERO,
            last_timestamp: 0.0,
            gesture_type: None,
        }
    }
}

impl GestureState {
    /// Starts tracking a gesture at `position`.
    pub(crate) fn begin(&mut self, position: Point, gesture_type: GestureType, now: f64) {
        self.is_active = true;
        self.start_position = position;
        self.current_position = position;
        self.velocity = Vec2::ZERO;
        self.last_timestamp = now;
        self.gesture_type = Some(gesture_type);
    }

    /// Feeds a new pointer sample into the tracker.
    ///
    /// Updates the velocity estimate and rebases the incremental anchor.
    /// Returns the pan displacement to apply to the viewport, or `None`
    /// when no gesture is active or the gesture does not pan.
    pub(crate) fn update(
        &mut self,
        position: Point,
        now: f64,
        config: &NavigationConfig,
    ) -> Option<Vec2> {
        if !self.is_active {
            return None;
        }

        let delta_time = (now - self.last_timestamp) / 1000.0;
        if delta_time > 0.0 {
            let raw = (position - self.current_position) / delta_time;
            let blended = if config.enable_smoothing {
                self.velocity * (1.0 - VELOCITY_SMOOTHING) + raw * VELOCITY_SMOOTHING
            } else {
                raw
            };
            self.velocity = clamp_speed(blended, config.max_velocity);
        }

        self.current_position = position;
        self.last_timestamp = now;

        if self.gesture_type == Some(GestureType::Pan) {
            // Displacement is measured incrementally per update, not
            // cumulatively from gesture start: rebase the anchor.
            let displacement = position - self.start_position;
            self.start_position = position;
            Some(displacement)
        } else {
            None
        }
    }

    /// Ends the gesture, consuming and returning the hand-off velocity.
    ///
    /// Returns `None` when no gesture is active, which makes a second
    /// consecutive end call a no-op.
    pub(crate) fn end(&mut self) -> Option<Vec2> {
        if !self.is_active {
            return None;
        }
        self.is_active = false;
        self.gesture_type = None;
        let velocity = self.velocity;
        self.velocity = Vec2::ZERO;
        Some(velocity)
    }
}

/// Clamps a velocity's magnitude to `max`, preserving its direction.
///
/// Non-finite magnitudes fail the comparison and pass through unchanged;
/// the engine's bookkeeping stays consistent either way.
fn clamp_speed(velocity: Vec2, max: f64) -> Vec2 {
    let speed = velocity.hypot();
    if speed > max {
        velocity * (max / speed)
    } else {
        velocity
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Vec2};

    use super::{GestureState, GestureType, clamp_speed};
    use crate::config::NavigationConfig;

    fn raw_config() -> NavigationConfig {
        NavigationConfig {
            enable_smoothing: false,
            ..Default::default()
        }
    }

    #[test]
    fn update_before_begin_is_inert() {
        let mut gesture = GestureState::default();
        let out = gesture.update(Point::new(10.0, 10.0), 16.0, &raw_config());
        assert!(out.is_none());
        assert!(!gesture.is_active);
        assert_eq!(gesture.velocity, Vec2::ZERO);
    }

    #[test]
    fn begin_resets_velocity_and_anchors() {
        let mut gesture = GestureState::default();
        gesture.velocity = Vec2::new(500.0, 0.0);

        gesture.begin(Point::new(100.0, 100.0), GestureType::Pan, 0.0);

        assert!(gesture.is_active);
        assert_eq!(gesture.velocity, Vec2::ZERO);
        assert_eq!(gesture.start_position, gesture.current_position);
        assert_eq!(gesture.gesture_type, Some(GestureType::Pan));
    }

    #[test]
    fn raw_velocity_from_one_sample() {
        let mut gesture = GestureState::default();
        gesture.begin(Point::new(100.0, 100.0), GestureType::Pan, 0.0);

        // 16px / 0.016s = 1000 px/s, 8px / 0.016s = 500 px/s.
        gesture.update(Point::new(116.0, 108.0), 16.0, &raw_config());
        assert_eq!(gesture.velocity, Vec2::new(1000.0, 500.0));
    }

    #[test]
    fn smoothing_blends_toward_previous_estimate() {
        let mut gesture = GestureState::default();
        gesture.begin(Point::new(100.0, 100.0), GestureType::Pan, 0.0);

        let config = NavigationConfig::default();
        gesture.update(Point::new(116.0, 108.0), 16.0, &config);

        // 30% of the raw (1000, 500) sample blended into the zero estimate.
        assert!((gesture.velocity.x - 300.0).abs() < 1e-9);
        assert!((gesture.velocity.y - 150.0).abs() < 1e-9);
    }

    #[test]
    fn pan_displacement_is_incremental() {
        let mut gesture = GestureState::default();
        gesture.begin(Point::new(0.0, 0.0), GestureType::Pan, 0.0);

        let d1 = gesture.update(Point::new(10.0, 5.0), 16.0, &raw_config());
        assert_eq!(d1, Some(Vec2::new(10.0, 5.0)));

        // Measured from the previous sample, not from gesture start.
        let d2 = gesture.update(Point::new(13.0, 9.0), 32.0, &raw_config());
        assert_eq!(d2, Some(Vec2::new(3.0, 4.0)));
    }

    #[test]
    fn zoom_and_pinch_tags_track_but_do_not_pan() {
        for tag in [GestureType::Zoom, GestureType::Pinch] {
            let mut gesture = GestureState::default();
            gesture.begin(Point::new(0.0, 0.0), tag, 0.0);

            let out = gesture.update(Point::new(16.0, 0.0), 16.0, &raw_config());
            assert!(out.is_none());
            // Velocity still tracked for a potential hand-off.
            assert_eq!(gesture.velocity, Vec2::new(1000.0, 0.0));
        }
    }

    #[test]
    fn zero_delta_time_skips_velocity_but_still_pans() {
        let mut gesture = GestureState::default();
        gesture.begin(Point::new(0.0, 0.0), GestureType::Pan, 5.0);

        let out = gesture.update(Point::new(10.0, 0.0), 5.0, &raw_config());
        assert_eq!(out, Some(Vec2::new(10.0, 0.0)));
        assert_eq!(gesture.velocity, Vec2::ZERO);
        assert_eq!(gesture.current_position, Point::new(10.0, 0.0));
    }

    #[test]
    fn end_is_idempotent() {
        let mut gesture = GestureState::default();
        gesture.begin(Point::new(0.0, 0.0), GestureType::Pan, 0.0);
        gesture.update(Point::new(16.0, 0.0), 16.0, &raw_config());

        let first = gesture.end();
        assert_eq!(first, Some(Vec2::new(1000.0, 0.0)));
        assert!(!gesture.is_active);
        assert_eq!(gesture.gesture_type, None);
        // The hand-off velocity is consumed, not retained.
        assert_eq!(gesture.velocity, Vec2::ZERO);

        assert_eq!(gesture.end(), None);
    }

    #[test]
    fn clamp_preserves_direction() {
        let clamped = clamp_speed(Vec2::new(5000.0, 0.0), 1000.0);
        assert!((clamped.hypot() - 1000.0).abs() < 1e-9);
        assert_eq!(clamped.y, 0.0);
        assert!(clamped.x > 0.0);

        // Diagonal input keeps its ratio.
        let clamped = clamp_speed(Vec2::new(3000.0, 4000.0), 1000.0);
        assert!((clamped.hypot() - 1000.0).abs() < 1e-9);
        assert!((clamped.y / clamped.x - 4.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn clamp_leaves_slow_and_non_finite_velocity_alone() {
        let slow = Vec2::new(3.0, 4.0);
        assert_eq!(clamp_speed(slow, 1000.0), slow);

        let bad = clamp_speed(Vec2::new(f64::NAN, 0.0), 1000.0);
        assert!(bad.x.is_nan());
    }

    #[test]
    fn non_finite_position_keeps_bookkeeping_consistent() {
        let mut gesture = GestureState::default();
        gesture.begin(Point::new(0.0, 0.0), GestureType::Pan, 0.0);

        gesture.update(Point::new(f64::NAN, 0.0), 16.0, &raw_config());
        // Garbage propagates to the numeric fields, but flags stay sane.
        assert!(gesture.is_active);
        assert_eq!(gesture.gesture_type, Some(GestureType::Pan));
        assert_eq!(gesture.last_timestamp, 16.0);

        assert!(gesture.end().is_some());
        assert!(!gesture.is_active);
    }
}
