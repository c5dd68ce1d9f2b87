// Copyright 2025 the Glide Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Glide Nav: the canvas navigation engine.
//!
//! This crate turns raw pointer input and programmatic view requests into
//! viewport motion over a [`glide_viewport`] store. Three cooperating
//! subsystems share the engine's mutable state:
//!
//! - **Gesture tracker**: converts a stream of pointer positions and
//!   timestamps into immediate viewport displacement during direct
//!   manipulation, plus a smoothed, clamped velocity estimate.
//! - **Momentum integrator**: given a hand-off velocity, decays it with
//!   exponential friction each frame and displaces the viewport until
//!   speed drops below a threshold.
//! - **Animation driver**: runs fixed-duration, progress-clocked
//!   transitions for [`pan_to`](NavigationEngine::pan_to),
//!   [`zoom_to`](NavigationEngine::zoom_to), and
//!   [`reset_view`](NavigationEngine::reset_view).
//!
//! A central arbiter keeps them mutually exclusive: at most one writes to
//! the store at any instant, and every entry point cancels whichever loops
//! it supersedes.
//!
//! ## Host integration
//!
//! The engine is headless and host-driven: it never reads a clock or
//! schedules real callbacks itself. Hosts pass millisecond timestamps into
//! the gesture methods, forward frame demand from a
//! [`glide_timing::FrameScheduler`] to their platform's
//! request-animation-frame primitive, and call
//! [`on_frame`](NavigationEngine::on_frame) when a frame fires.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use glide_nav::{GestureType, NavigationEngine};
//! use glide_timing::ManualScheduler;
//! use glide_viewport::{Viewport, ViewportStore};
//!
//! let mut nav = NavigationEngine::new(Viewport::new(), ManualScheduler::new());
//!
//! // Drag the canvas 50px right: the viewport moves 50px left.
//! nav.start_navigation(Point::new(100.0, 100.0), GestureType::Pan, 0.0);
//! nav.update_navigation(Point::new(150.0, 100.0), 16.0);
//! assert_eq!(nav.store().position(), Point::new(-50.0, 0.0));
//! nav.end_navigation(16.0);
//!
//! // Jump home without animating.
//! nav.reset_view(false, 16.0);
//! assert_eq!(nav.store().position(), Point::ZERO);
//! assert_eq!(nav.store().zoom(), 1.0);
//! ```
//!
//! ## Error handling
//!
//! No operation here is fallible: calls against inactive state are silent
//! no-ops, and non-finite numeric input may propagate to the store but
//! never corrupts the engine's own flags or callback handles.
//!
//! This crate is `no_std`.

#![no_std]

mod animation;
mod config;
mod engine;
mod gesture;
mod momentum;

pub use config::NavigationConfig;
pub use engine::NavigationEngine;
pub use gesture::GestureType;
