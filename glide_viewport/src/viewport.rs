// Copyright 2025 the Glide Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect};

use crate::store::ViewportStore;

/// Camera state over an infinite 2D canvas.
///
/// `Viewport` tracks a position offset, a uniform zoom factor clamped into
/// a configurable range, and optional world bounds. It is the single source
/// of truth for "where the camera is now"; controllers mutate it through
/// the [`ViewportStore`] setters and hosts render from it each frame.
#[derive(Clone, Debug)]
pub struct Viewport {
    position: Point,
    zoom: f64,
    bounds: Option<Rect>,
    min_zoom: f64,
    max_zoom: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new()
    }
}

impl Viewport {
    /// Creates a new viewport at the origin with default zoom and limits.
    ///
    /// - Initial position is `(0, 0)`.
    /// - Initial zoom is `1.0`.
    /// - Zoom is clamped to the range `[1e-3, 1e3]` by default.
    #[must_use]
    pub fn new() -> Self {
        Self {
            position: Point::ZERO,
            zoom: 1.0,
            bounds: None,
            min_zoom: 1e-3,
            max_zoom: 1e3,
        }
    }

    /// Sets optional world bounds.
    ///
    /// Bounds are advisory metadata for hosts (view fitting, scroll
    /// extents); the store does not constrain position against them.
    pub fn set_bounds(&mut self, bounds: Option<Rect>) {
        self.bounds = bounds;
    }

    /// Returns the current world bounds, if any.
    #[must_use]
    pub fn bounds(&self) -> Option<Rect> {
        self.bounds
    }

    /// Sets the minimum and maximum zoom factors.
    ///
    /// The provided range is normalized so that `min_zoom <= max_zoom`. The
    /// current zoom is clamped into the new range.
    pub fn set_zoom_limits(&mut self, min_zoom: f64, max_zoom: f64) {
        let (min_zoom, max_zoom) = if min_zoom <= max_zoom {
            (min_zoom, max_zoom)
        } else {
            (max_zoom, min_zoom)
        };
        self.min_zoom = min_zoom;
        self.max_zoom = max_zoom;
        self.zoom = self.zoom.clamp(self.min_zoom, self.max_zoom);
    }

    /// Snapshot of the current viewport state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ViewportDebugInfo {
        ViewportDebugInfo {
            position: self.position,
            zoom: self.zoom,
            bounds: self.bounds,
            min_zoom: self.min_zoom,
            max_zoom: self.max_zoom,
        }
    }
}

impl ViewportStore for Viewport {
    fn position(&self) -> Point {
        self.position
    }

    fn zoom(&self) -> f64 {
        self.zoom
    }

    fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    fn set_zoom(&mut self, zoom: f64) {
        // NaN falls through `clamp` unchanged; the store tolerates it.
        self.zoom = zoom.clamp(self.min_zoom, self.max_zoom);
    }
}

/// Debug snapshot of a [`Viewport`] state.
#[derive(Clone, Copy, Debug)]
pub struct ViewportDebugInfo {
    /// Current camera position offset.
    pub position: Point,
    /// Current zoom factor.
    pub zoom: f64,
    /// Optional world bounds.
    pub bounds: Option<Rect>,
    /// Minimum zoom factor.
    pub min_zoom: f64,
    /// Maximum zoom factor.
    pub max_zoom: f64,
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect};

    use super::{Viewport, ViewportStore};

    #[test]
    fn new_viewport_is_at_origin_with_unit_zoom() {
        let vp = Viewport::new();
        assert_eq!(vp.position(), Point::ZERO);
        assert_eq!(vp.zoom(), 1.0);
        assert!(vp.bounds().is_none());
    }

    #[test]
    fn setters_are_independent_and_immediately_visible() {
        let mut vp = Viewport::new();

        vp.set_position(Point::new(100.0, 50.0));
        assert_eq!(vp.position(), Point::new(100.0, 50.0));
        assert_eq!(vp.zoom(), 1.0);

        vp.set_zoom(2.0);
        assert_eq!(vp.zoom(), 2.0);
        assert_eq!(vp.position(), Point::new(100.0, 50.0));
    }

    #[test]
    fn zoom_clamps_to_limits() {
        let mut vp = Viewport::new();
        vp.set_zoom_limits(0.5, 4.0);

        vp.set_zoom(10.0);
        assert_eq!(vp.zoom(), 4.0);

        vp.set_zoom(0.01);
        assert_eq!(vp.zoom(), 0.5);
    }

    #[test]
    fn zoom_limits_are_normalized_and_reclamp_current_zoom() {
        let mut vp = Viewport::new();
        vp.set_zoom(8.0);

        // Reversed range is normalized; current zoom is pulled into it.
        vp.set_zoom_limits(4.0, 1.0);
        assert_eq!(vp.zoom(), 4.0);
    }

    #[test]
    fn bounds_are_stored_but_not_enforced() {
        let mut vp = Viewport::new();
        vp.set_bounds(Some(Rect::new(0.0, 0.0, 100.0, 100.0)));

        vp.set_position(Point::new(-5000.0, 5000.0));
        assert_eq!(vp.position(), Point::new(-5000.0, 5000.0));
        assert_eq!(vp.bounds(), Some(Rect::new(0.0, 0.0, 100.0, 100.0)));
    }

    #[test]
    fn non_finite_position_does_not_panic() {
        let mut vp = Viewport::new();
        vp.set_position(Point::new(f64::NAN, f64::INFINITY));
        assert!(vp.position().x.is_nan());
        assert!(vp.position().y.is_infinite());
    }

    #[test]
    fn debug_info_reflects_state() {
        let mut vp = Viewport::new();
        vp.set_position(Point::new(3.0, 4.0));
        vp.set_zoom(2.0);

        let info = vp.debug_info();
        assert_eq!(info.position, Point::new(3.0, 4.0));
        assert_eq!(info.zoom, 2.0);
        assert!(info.min_zoom <= info.max_zoom);
    }
}
