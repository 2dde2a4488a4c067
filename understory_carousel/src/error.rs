// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Construction-time contract violations.
///
/// Per-event handling never fails: pointer coordinates, frame sizes and index
/// requests are clamped instead. These errors can only surface while building
/// a carousel.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum CarouselError {
    /// The carousel was given no panes to show.
    #[error("a carousel needs at least one pane")]
    NoPanes,
    /// The snap threshold is negative or not finite.
    #[error("snap threshold must be a finite, non-negative pixel distance, got {0}")]
    InvalidThreshold(f64),
    /// The transition duration in seconds is negative or not finite.
    #[error("transition must be a finite, non-negative number of seconds, got {0}")]
    InvalidTransition(f64),
}
