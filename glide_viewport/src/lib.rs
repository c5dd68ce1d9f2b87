// Copyright 2025 the Glide Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Glide Viewport: the camera state store for an infinite 2D canvas.
//!
//! This crate provides a small, headless model of "where the camera is":
//! a position offset, a bounded zoom scalar, and optional world bounds.
//! It focuses on:
//! - Holding the single source of truth for the current camera state.
//! - Independent, immediately visible `set_position` / `set_zoom`
//!   mutations with no transactional semantics.
//! - Zoom clamping against configurable limits.
//!
//! It does **not** own any rendering, input handling, or animation.
//! Callers are expected to:
//! - Render from the store's current state each frame.
//! - Drive mutations through a controller such as `glide_nav`'s
//!   navigation engine, which writes through the [`ViewportStore`] trait.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use glide_viewport::{Viewport, ViewportStore};
//!
//! let mut vp = Viewport::new();
//! vp.set_position(Point::new(120.0, -40.0));
//! vp.set_zoom(2.5);
//!
//! assert_eq!(vp.position(), Point::new(120.0, -40.0));
//! assert_eq!(vp.zoom(), 2.5);
//! ```
//!
//! ## Design notes
//!
//! - The store is deliberately passive: setters do not schedule work or
//!   notify observers. Hosts that need change notification wrap the store
//!   or poll it after driving their controller.
//! - World bounds are advisory metadata for hosts (fitting, minimap,
//!   scroll extents). The store does not constrain position against them.
//!
//! This crate is `no_std`.

#![no_std]

mod store;
mod viewport;

pub use store::ViewportStore;
pub use viewport::{Viewport, ViewportDebugInfo};
