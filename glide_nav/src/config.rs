// Copyright 2025 the Glide Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Configuration for a [`NavigationEngine`](crate::NavigationEngine).
///
/// Immutable per engine instance: the effective configuration is produced
/// once at construction by merging caller overrides over
/// [`NavigationConfig::default`] with struct-update syntax, never
/// re-merged per call.
///
/// ```rust
/// use glide_nav::NavigationConfig;
///
/// let config = NavigationConfig {
///     momentum_friction: 0.85,
///     max_velocity: 1000.0,
///     ..Default::default()
/// };
/// assert!(config.enable_momentum);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavigationConfig {
    /// Whether ending a gesture may trigger momentum.
    pub enable_momentum: bool,
    /// Per-tick velocity decay multiplier, in `(0, 1)`.
    ///
    /// Values very close to `1.0` decelerate arbitrarily slowly; the
    /// integrator does not guard against that, it is a configuration
    /// responsibility.
    pub momentum_friction: f64,
    /// Default duration for programmatic animations, in milliseconds.
    pub animation_duration_ms: f64,
    /// Speed (px/s magnitude) below which momentum halts and never starts.
    pub velocity_threshold: f64,
    /// Clamp applied to gesture-derived velocity, in px/s.
    pub max_velocity: f64,
    /// Master switch gating momentum independent of
    /// [`enable_momentum`](Self::enable_momentum); both must be `true` for
    /// a gesture to hand off into momentum.
    pub enable_inertia: bool,
    /// Whether gesture velocity is exponentially smoothed across updates
    /// instead of recomputed raw each tick.
    pub enable_smoothing: bool,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            enable_momentum: true,
            momentum_friction: 0.92,
            animation_duration_ms: 300.0,
            velocity_threshold: 50.0,
            max_velocity: 3000.0,
            enable_inertia: true,
            enable_smoothing: true,
        }
    }
}
