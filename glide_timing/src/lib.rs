// Copyright 2025 the Glide Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Glide Timing: host-agnostic frame-callback scheduling primitives.
//!
//! Animation and momentum loops need a platform primitive that fires a
//! callback "before the next repaint" and can be cancelled by an opaque
//! handle. This crate abstracts that primitive behind [`FrameScheduler`]
//! so controllers stay platform-independent and testable with virtual
//! time.
//!
//! The model is host-driven: a controller signals demand for a frame via
//! [`FrameScheduler::request_frame`] and keeps the returned
//! [`FrameHandle`] for cancellation. The host observes the request (for
//! example by forwarding it to `requestAnimationFrame` or a compositor
//! vsync source) and, when the frame fires, calls back into the
//! controller's per-frame entry point with a high-resolution timestamp.
//! The scheduler never invokes controller code itself.
//!
//! Two implementations ship with the crate:
//! - [`NoopScheduler`]: for hosts without any frame primitive. Requests
//!   are swallowed, so scheduled work simply never runs; nothing panics.
//! - [`ManualScheduler`]: a test double that records outstanding requests
//!   and cancellations so tests can drive frames deterministically.
//!
//! ## Minimal example
//!
//! ```rust
//! use glide_timing::{FrameScheduler, ManualScheduler};
//!
//! let mut frames = ManualScheduler::new();
//! let handle = frames.request_frame();
//! assert!(frames.has_pending());
//!
//! // The host decides a frame fired: drain the pending request, then call
//! // into the controller's `on_frame`.
//! assert_eq!(frames.take_pending(), 1);
//! assert!(!frames.has_pending());
//!
//! // Cancellation by handle is always safe, even after the fact.
//! frames.cancel_frame(handle);
//! ```
//!
//! This crate is `no_std` (with `alloc`).

#![no_std]

extern crate alloc;

use alloc::vec::Vec;

/// Opaque cancellation token for a scheduled frame callback.
///
/// Handles are unique per scheduler instance and never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameHandle(u64);

/// A source of frame callbacks that can be requested and cancelled.
///
/// Implementations are single-threaded and cooperative: `request_frame`
/// returns immediately, and the host delivers the frame later by calling
/// into the controller. Cancelling a handle guarantees the controller
/// treats that request as dead; whether the underlying platform callback
/// still fires is the host's concern (controllers guard their per-frame
/// entry points with liveness flags for exactly that case).
pub trait FrameScheduler {
    /// Requests one frame callback, returning a handle for cancellation.
    fn request_frame(&mut self) -> FrameHandle;

    /// Cancels a previously requested frame.
    ///
    /// Cancelling a handle that already fired or was already cancelled is
    /// a silent no-op.
    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// A scheduler for hosts without a frame primitive.
///
/// Requests are accepted and immediately forgotten, so scheduled work
/// never runs. This is the graceful-degradation path: controllers built
/// on it do not crash; their animations simply never complete.
#[derive(Debug, Default)]
pub struct NoopScheduler {
    next_id: u64,
}

impl NoopScheduler {
    /// Creates a new no-op scheduler.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl FrameScheduler for NoopScheduler {
    fn request_frame(&mut self) -> FrameHandle {
        self.next_id += 1;
        FrameHandle(self.next_id)
    }

    fn cancel_frame(&mut self, _handle: FrameHandle) {}
}

/// A virtual-time scheduler for tests.
///
/// Records outstanding frame requests and counts cancellations. Tests
/// drive a controller by draining pending requests with
/// [`take_pending`](ManualScheduler::take_pending) and then invoking the
/// controller's per-frame entry point with whatever timestamp the test
/// wants.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    next_id: u64,
    pending: Vec<FrameHandle>,
    requested: u64,
    cancelled: u64,
}

impl ManualScheduler {
    /// Creates a new manual scheduler with no pending frames.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if at least one frame request is outstanding.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Outstanding frame requests, oldest first.
    #[must_use]
    pub fn pending(&self) -> &[FrameHandle] {
        &self.pending
    }

    /// Drains all outstanding requests, returning how many there were.
    ///
    /// Call this before delivering a frame so that requests made *during*
    /// the frame are observed as newly pending.
    pub fn take_pending(&mut self) -> usize {
        let n = self.pending.len();
        self.pending.clear();
        n
    }

    /// Total frame requests made over this scheduler's lifetime.
    #[must_use]
    pub fn requested(&self) -> u64 {
        self.requested
    }

    /// Total cancellations issued over this scheduler's lifetime.
    ///
    /// Counts every [`cancel_frame`](FrameScheduler::cancel_frame) call,
    /// including ones whose handle was no longer pending.
    #[must_use]
    pub fn cancelled(&self) -> u64 {
        self.cancelled
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&mut self) -> FrameHandle {
        self.next_id += 1;
        self.requested += 1;
        let handle = FrameHandle(self.next_id);
        self.pending.push(handle);
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        self.cancelled += 1;
        self.pending.retain(|h| *h != handle);
    }
}
