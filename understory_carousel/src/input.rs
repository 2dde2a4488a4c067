// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Size;

/// Arrow keys the carousel responds to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ArrowKey {
    /// `ArrowLeft`: step to the previous pane.
    Left,
    /// `ArrowRight`: step to the next pane.
    Right,
}

/// Host events fed into [`CarouselState::handle`](crate::CarouselState::handle).
///
/// Mouse and touch streams share the same drag inputs; the host only has to
/// supply the pointer X coordinate and, on drag start, the pane that was hit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CarouselInput {
    /// First layout of the frame has completed with the given size.
    Mount(Size),
    /// The viewport was resized and the frame now has the given size.
    Resize(Size),
    /// Pointer-down or touch-start on `pane` at pointer X `x`.
    DragStart {
        /// Index of the pane under the pointer.
        pane: usize,
        /// Pointer X coordinate.
        x: f64,
    },
    /// Pointer-move or touch-move at pointer X `x`.
    DragMove {
        /// Pointer X coordinate.
        x: f64,
    },
    /// Pointer-up, pointer-leave or touch-end.
    DragEnd,
    /// A key was pressed anywhere in the window.
    KeyDown(ArrowKey),
    /// The externally owned active index changed.
    ///
    /// `None` means the carousel is uncontrolled.
    ActiveIndex(Option<usize>),
    /// A render loop frame fired.
    Frame,
}
