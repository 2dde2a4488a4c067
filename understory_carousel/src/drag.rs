// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag session: map raw pointer X positions to a strip offset.
//!
//! ## Usage
//!
//! 1) Open a session with [`DragSession::start`], passing the pointer X and
//!    the strip offset the drag starts from.
//! 2) On each move, call [`DragSession::update`] to get the new strip offset.
//! 3) Drop the session when the gesture ends.
//!
//! The mapping is linear: no clamping, no resistance at the strip edges.
//!
//! ## Minimal example
//!
//! ```
//! use understory_carousel::drag::DragSession;
//!
//! // Resting on pane 2 of a 300px frame, pointer down at x = 500.
//! let mut drag = DragSession::start(500.0, -600.0);
//!
//! // Dragging 150px to the left pulls the strip towards pane 3.
//! assert_eq!(drag.update(350.0), -750.0);
//! assert_eq!(drag.delta(), -150.0);
//! ```

/// An in-progress drag over the strip.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    /// Pointer X where the drag began.
    pub start_x: f64,
    /// Strip offset when the drag began.
    pub origin_offset: f64,
    /// Most recent pointer X seen during the drag.
    pub last_x: f64,
}

impl DragSession {
    /// Opens a session at pointer `x` over a strip resting at `origin_offset`.
    #[must_use]
    pub fn start(x: f64, origin_offset: f64) -> Self {
        Self {
            start_x: x,
            origin_offset,
            last_x: x,
        }
    }

    /// Records a pointer move and returns the strip offset that follows it.
    pub fn update(&mut self, x: f64) -> f64 {
        if x.is_finite() {
            self.last_x = x;
        }
        self.offset()
    }

    /// Pointer travel since the drag began.
    #[must_use]
    pub fn delta(&self) -> f64 {
        self.last_x - self.start_x
    }

    /// Strip offset for the latest pointer position.
    #[must_use]
    pub fn offset(&self) -> f64 {
        self.origin_offset + self.delta()
    }

    /// Moves the drag's origin, keeping the pointer travel so far.
    ///
    /// Used when the resting offset under the drag changes mid-gesture: the
    /// frame was resized, or the settled pane moved by key or external index.
    pub fn rebase(&mut self, origin_offset: f64) -> f64 {
        self.origin_offset = origin_offset;
        self.offset()
    }
}
