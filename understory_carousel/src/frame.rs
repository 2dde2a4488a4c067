// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render loop bookkeeping.
//!
//! While a drag is open the strip offset is sampled once per animation frame.
//! The host owns the actual scheduler (`requestAnimationFrame`, a winit redraw
//! request, a timer); [`RenderLoop`] only remembers which scheduled frame is
//! the live one, so that a frame firing after the loop was stopped, or one
//! superseded by a newer request, is recognized and dropped.

/// Tracks the single pending frame of a render loop.
#[derive(Clone, Debug)]
pub struct RenderLoop<H> {
    pending: Option<H>,
}

impl<H> Default for RenderLoop<H> {
    fn default() -> Self {
        Self { pending: None }
    }
}

impl<H: Copy + PartialEq> RenderLoop<H> {
    /// Creates an idle loop.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` while a frame is scheduled.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.pending.is_some()
    }

    /// The currently scheduled frame, if any.
    #[must_use]
    pub fn pending(&self) -> Option<H> {
        self.pending
    }

    /// Records a newly scheduled frame, returning the one it replaces.
    pub fn schedule(&mut self, handle: H) -> Option<H> {
        self.pending.replace(handle)
    }

    /// Consumes `handle` if it is the pending frame.
    ///
    /// Returns `false` for stale or unknown handles; their frame must not be
    /// rendered.
    pub fn fire(&mut self, handle: H) -> bool {
        if self.pending == Some(handle) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    /// Stops the loop, returning the frame the host should cancel.
    pub fn stop(&mut self) -> Option<H> {
        self.pending.take()
    }
}
