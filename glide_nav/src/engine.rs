// Copyright 2025 the Glide Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use glide_timing::FrameScheduler;
use glide_viewport::ViewportStore;
use kurbo::{Point, Vec2};

use crate::animation::AnimationState;
use crate::config::NavigationConfig;
use crate::gesture::{GestureState, GestureType};
use crate::momentum::MomentumState;

/// Canvas navigation engine: gesture panning, momentum, and animated
/// viewport transitions over a [`ViewportStore`].
///
/// The engine owns three long-lived state records — gesture, momentum,
/// animation — mutated in place for its entire lifetime, and arbitrates
/// between them so that at most one writes to the store at any instant:
///
/// - Starting a gesture cancels animation and momentum (live user input
///   takes priority over programmatic motion).
/// - Starting an animated transition cancels a prior animation (last
///   caller wins) and momentum, but never an active gesture.
/// - Ending a gesture may hand its velocity off into momentum.
///
/// Every method returns immediately; ongoing work is represented by frame
/// requests against the [`FrameScheduler`]. The host delivers frames by
/// calling [`on_frame`](Self::on_frame) with a high-resolution timestamp
/// in milliseconds; gesture methods take the same kind of timestamp, so
/// the engine never reads a clock of its own. Dropping the engine cancels
/// any scheduled frame.
#[derive(Debug)]
pub struct NavigationEngine<S, F>
where
    S: ViewportStore,
    F: FrameScheduler,
{
    store: S,
    frames: F,
    config: NavigationConfig,
    gesture: GestureState,
    momentum: MomentumState,
    animation: AnimationState,
}

impl<S, F> NavigationEngine<S, F>
where
    S: ViewportStore,
    F: FrameScheduler,
{
    /// Creates an engine over `store` with the default configuration.
    pub fn new(store: S, frames: F) -> Self {
        Self::with_config(store, frames, NavigationConfig::default())
    }

    /// Creates an engine with an explicit configuration.
    ///
    /// The configuration is effective as passed and immutable thereafter;
    /// merge any overrides over [`NavigationConfig::default`] before
    /// construction.
    pub fn with_config(store: S, frames: F, config: NavigationConfig) -> Self {
        Self {
            store,
            frames,
            config,
            gesture: GestureState::default(),
            momentum: MomentumState::default(),
            animation: AnimationState::default(),
        }
    }

    // --- Gesture tracking ---

    /// Begins direct manipulation at `position`.
    ///
    /// Cancels any active animation and momentum: the viewport belongs to
    /// the user's hand until [`end_navigation`](Self::end_navigation).
    pub fn start_navigation(&mut self, position: Point, gesture_type: GestureType, now: f64) {
        self.cancel_animation();
        self.cancel_momentum();
        self.gesture.begin(position, gesture_type, now);
    }

    /// Feeds a pointer sample into the active gesture.
    ///
    /// Silent no-op when no gesture is active. For pan gestures the
    /// viewport position is written synchronously — not via a frame
    /// callback — to keep hand-to-viewport latency imperceptible. The
    /// viewport moves opposite to hand displacement, consistent with
    /// "dragging the content".
    pub fn update_navigation(&mut self, position: Point, now: f64) {
        if let Some(displacement) = self.gesture.update(position, now, &self.config) {
            let next = self.store.position() - displacement;
            self.store.set_position(next);
        }
    }

    /// Ends the active gesture, handing its velocity off into momentum.
    ///
    /// Silent no-op (and therefore idempotent) when no gesture is active.
    /// Momentum starts only when both momentum switches are enabled and
    /// the hand-off speed exceeds the configured threshold; otherwise the
    /// momentum state resets to zero and no tick is scheduled.
    pub fn end_navigation(&mut self, now: f64) {
        let Some(velocity) = self.gesture.end() else {
            return;
        };
        if self.config.enable_momentum
            && self.config.enable_inertia
            && self
                .momentum
                .begin(velocity, now, self.config.velocity_threshold)
        {
            self.momentum.frame = Some(self.frames.request_frame());
        }
    }

    // --- Programmatic transitions ---

    /// Pans the viewport to `target`.
    ///
    /// When `animated` is `false` the target is written synchronously and
    /// no loop starts. Otherwise a prior animation (last caller wins) and
    /// momentum are cancelled and a transition of `duration_ms` (default:
    /// the configured animation duration) begins. Zoom is carried along as
    /// a degenerate pair so the shared progress clock drives both
    /// channels uniformly.
    pub fn pan_to(&mut self, target: Point, animated: bool, duration_ms: Option<f64>, now: f64) {
        if !animated {
            self.store.set_position(target);
            return;
        }
        self.cancel_animation();
        self.cancel_momentum();

        let zoom = self.store.zoom();
        self.animation.begin(
            now,
            duration_ms.unwrap_or(self.config.animation_duration_ms),
            self.store.position(),
            target,
            zoom,
            zoom,
        );
        self.animation.frame = Some(self.frames.request_frame());
    }

    /// Zooms the viewport to `zoom`, optionally moving toward a focus point.
    ///
    /// With a `focus_point`, position animates toward it alongside the
    /// zoom (or is written immediately when not animated). Without one,
    /// the position pair is anchored at the position at call time — the
    /// interpolation still runs every frame between identical endpoints,
    /// so external position writes mid-animation are overwritten rather
    /// than preserved.
    pub fn zoom_to(
        &mut self,
        zoom: f64,
        focus_point: Option<Point>,
        animated: bool,
        duration_ms: Option<f64>,
        now: f64,
    ) {
        if !animated {
            self.store.set_zoom(zoom);
            if let Some(focus) = focus_point {
                self.store.set_position(focus);
            }
            return;
        }
        self.cancel_animation();
        self.cancel_momentum();

        let position = self.store.position();
        self.animation.begin(
            now,
            duration_ms.unwrap_or(self.config.animation_duration_ms),
            position,
            focus_point.unwrap_or(position),
            self.store.zoom(),
            zoom,
        );
        self.animation.frame = Some(self.frames.request_frame());
    }

    /// Returns the viewport to the origin at unit zoom.
    pub fn reset_view(&mut self, animated: bool, now: f64) {
        self.zoom_to(1.0, Some(Point::ZERO), animated, None, now);
    }

    /// Cancels any in-flight animation and momentum loop.
    ///
    /// Cancellation is synchronous and total: callback handles are
    /// cleared, state resets to inert defaults, and no further store
    /// writes are attributable to the cancelled loops. Silent no-op when
    /// nothing is active. Does not affect an active gesture.
    pub fn stop_all_animations(&mut self) {
        self.cancel_animation();
        self.cancel_momentum();
    }

    // --- Frame delivery ---

    /// Delivers one frame callback with a timestamp in milliseconds.
    ///
    /// Dispatches to whichever loop is live — by invariant at most one of
    /// momentum and animation is. A stale callback firing after
    /// cancellation finds both flags down and is inert.
    pub fn on_frame(&mut self, now: f64) {
        if self.animation.is_animating {
            self.animation_frame(now);
        } else if self.momentum.is_decelerating {
            self.momentum_frame(now);
        }
    }

    fn animation_frame(&mut self, now: f64) {
        let (position, zoom, done) = self.animation.sample(now);
        self.store.set_position(position);
        self.store.set_zoom(zoom);

        if done {
            self.animation.is_animating = false;
            self.animation.frame = None;
        } else {
            self.animation.frame = Some(self.frames.request_frame());
        }
    }

    fn momentum_frame(&mut self, now: f64) {
        let displacement =
            self.momentum
                .step(now, self.config.momentum_friction, self.config.velocity_threshold);
        let next = self.store.position() - displacement;
        self.store.set_position(next);

        if self.momentum.is_decelerating {
            self.momentum.frame = Some(self.frames.request_frame());
        } else {
            self.momentum.frame = None;
        }
    }

    // --- Cancellation primitives ---

    fn cancel_animation(&mut self) {
        if let Some(handle) = self.animation.frame.take() {
            self.frames.cancel_frame(handle);
        }
        self.animation.is_animating = false;
    }

    fn cancel_momentum(&mut self) {
        if let Some(handle) = self.momentum.frame.take() {
            self.frames.cancel_frame(handle);
        }
        self.momentum.reset();
    }

    // --- Status ---

    /// Whether a programmatic transition is in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animation.is_animating
    }

    /// Whether a gesture is being tracked.
    #[must_use]
    pub fn is_gesture_active(&self) -> bool {
        self.gesture.is_active
    }

    /// Whether a momentum loop is decelerating.
    #[must_use]
    pub fn is_momentum_active(&self) -> bool {
        self.momentum.is_decelerating
    }

    /// The current velocity estimate in px/s.
    ///
    /// Reports the decaying momentum velocity while momentum is live,
    /// otherwise the gesture tracker's smoothed, clamped estimate.
    #[must_use]
    pub fn current_velocity(&self) -> Vec2 {
        if self.momentum.is_decelerating {
            self.momentum.velocity
        } else {
            self.gesture.velocity
        }
    }

    /// The effective configuration.
    #[must_use]
    pub fn config(&self) -> &NavigationConfig {
        &self.config
    }

    /// Read access to the owned viewport store.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Mutable access to the owned viewport store.
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Read access to the owned frame scheduler.
    #[must_use]
    pub fn scheduler(&self) -> &F {
        &self.frames
    }

    /// Mutable access to the owned frame scheduler.
    pub fn scheduler_mut(&mut self) -> &mut F {
        &mut self.frames
    }
}

impl<S, F> Drop for NavigationEngine<S, F>
where
    S: ViewportStore,
    F: FrameScheduler,
{
    fn drop(&mut self) {
        // Teardown cancels all pending callbacks so nothing keeps mutating
        // a store whose owner is gone.
        self.stop_all_animations();
    }
}
