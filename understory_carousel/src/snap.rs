// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Snap policy applied when a drag ends.

/// Where a finished drag settles relative to the pane it started on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Snap {
    /// Commit to the next pane.
    Advance,
    /// Commit to the previous pane.
    Retreat,
    /// Spring back to the same pane.
    Stay,
}

impl Snap {
    /// Applies the outcome to `index`.
    #[must_use]
    pub fn apply(self, index: usize) -> usize {
        match self {
            Self::Advance => index + 1,
            Self::Retreat => index.saturating_sub(1),
            Self::Stay => index,
        }
    }
}

/// Decides the snap outcome for a drag that moved the strip by `moved_by`.
///
/// A move further left than `-threshold` advances, one further right than
/// `threshold` retreats, as long as a pane exists in that direction. Moves of
/// at most `threshold` in either direction never change the index.
#[must_use]
pub fn resolve(moved_by: f64, threshold: f64, index: usize, pane_count: usize) -> Snap {
    let last = pane_count.saturating_sub(1);
    if moved_by < -threshold && index < last {
        Snap::Advance
    } else if moved_by > threshold && index > 0 {
        Snap::Retreat
    } else {
        Snap::Stay
    }
}
