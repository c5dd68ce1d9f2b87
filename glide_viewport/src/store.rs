// Copyright 2025 the Glide Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;

/// Write-through interface to a viewport state store.
///
/// This is the seam between camera controllers and whatever actually holds
/// the camera state. A controller reads the current state through
/// [`position`](ViewportStore::position) / [`zoom`](ViewportStore::zoom)
/// and mutates it through the setters; it never keeps a shadow copy for
/// rendering.
///
/// Each setter is an independent, immediately visible mutation: a read in
/// the same tick observes the new value. No transactional grouping is
/// assumed or provided.
///
/// Implementations must not panic on non-finite input. Storing a NaN or
/// infinite value is acceptable (garbage in, garbage out); rejecting it
/// silently is too.
pub trait ViewportStore {
    /// Current camera position offset.
    fn position(&self) -> Point;

    /// Current zoom factor.
    fn zoom(&self) -> f64;

    /// Sets the camera position offset.
    fn set_position(&mut self, position: Point);

    /// Sets the zoom factor.
    fn set_zoom(&mut self, zoom: f64);
}
