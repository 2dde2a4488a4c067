// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Effects emitted by the carousel state machine.
//!
//! The state machine never touches the visual layer itself. Each transition
//! returns a short, ordered list of [`Effect`]s that the host applies in
//! sequence: transform writes, transition toggles, cursor changes, frame
//! scheduling, and the outbound gesture notifications.

use core::fmt;
use core::time::Duration;

use smallvec::SmallVec;

/// Ordered effects produced by a single input.
pub type Effects = SmallVec<[Effect; 6]>;

/// One instruction for the host.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Effect {
    /// Set the transform transition used for the next offset writes.
    SetTransition(Transition),
    /// Write the horizontal strip offset, in pixels.
    ApplyOffset(f64),
    /// Switch the drag affordance (cursor, optional scale).
    SetAffordance(Affordance),
    /// Schedule an animation frame for the render loop.
    RequestFrame,
    /// Cancel any pending render loop frame.
    CancelFrame,
    /// A user gesture started on the given pane.
    SlideStart(usize),
    /// A user gesture settled on the given pane.
    SlideComplete(usize),
}

/// Transform transition applied by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// Offsets jump immediately.
    Instant,
    /// Offsets ease towards their target over the given duration.
    Animated(Duration),
}

impl fmt::Display for Transition {
    /// Formats the transition as a CSS `transition` value.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Instant => f.write_str("none"),
            Self::Animated(duration) => {
                write!(f, "transform {}s ease-out", duration.as_secs_f64())
            }
        }
    }
}

/// Visual affordance for the grab state of the strip.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Affordance {
    /// No gesture in progress; the strip shows a grab cursor.
    #[default]
    Resting,
    /// A drag is in progress.
    Grabbing {
        /// Whether panes shrink while grabbed.
        scaled: bool,
    },
}

impl Affordance {
    /// CSS cursor name for this affordance.
    #[must_use]
    pub fn cursor(self) -> &'static str {
        match self {
            Self::Resting => "grab",
            Self::Grabbing { .. } => "grabbing",
        }
    }
}
